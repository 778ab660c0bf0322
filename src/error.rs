use std::fmt;

#[derive(Debug)]
pub enum SynthError {
    Param(ParamError),
}

#[derive(Debug)]
pub enum ParamError {
    /// The raw parameter vector did not have exactly the expected length.
    WrongArity { expected: usize, found: usize },
    /// A control value was NaN or infinite.
    NonFinite { name: &'static str },
    /// A control value has no meaningful clamp target (e.g. tempo <= 0).
    OutOfRange { name: &'static str, value: f64 },
    /// A JSON parameter payload could not be deserialized.
    Malformed { message: String },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::Param(e) => write!(f, "Parameter error: {e}"),
        }
    }
}

impl std::error::Error for SynthError {}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::WrongArity { expected, found } => {
                write!(f, "Expected {expected} parameters, found {found}")
            }
            ParamError::NonFinite { name } => write!(f, "Parameter '{name}' is not finite"),
            ParamError::OutOfRange { name, value } => {
                write!(f, "Parameter '{name}' is out of range: {value}")
            }
            ParamError::Malformed { message } => write!(f, "Malformed parameters: {message}"),
        }
    }
}

impl std::error::Error for ParamError {}

impl From<ParamError> for SynthError {
    fn from(e: ParamError) -> Self {
        SynthError::Param(e)
    }
}
