//! Music theory helpers — scale construction and melody patterns.

/// Default scale root: middle C.
pub const CONCERT_C4_HZ: f64 = 261.63;

/// Number of degrees in every scale.
pub const SCALE_LEN: usize = 7;

const MAJOR_INTERVALS: [u32; SCALE_LEN] = [0, 2, 4, 5, 7, 9, 11];
const MINOR_INTERVALS: [u32; SCALE_LEN] = [0, 2, 3, 5, 7, 8, 10];

/// A seven-degree equal-tempered scale, built once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    frequencies: [f64; SCALE_LEN],
}

impl Scale {
    /// Build a scale rooted at middle C shifted by `key_index` semitones.
    pub fn build(key_index: u8, minor: bool) -> Self {
        Self::from_root(CONCERT_C4_HZ, key_index, minor)
    }

    /// Root frequency shifted by `key_index` semitones, then expanded along
    /// the major or minor interval table: degree i = root' * 2^(interval/12).
    pub fn from_root(root: f64, key_index: u8, minor: bool) -> Self {
        let intervals = if minor {
            &MINOR_INTERVALS
        } else {
            &MAJOR_INTERVALS
        };
        let shifted = root * 2.0_f64.powf(key_index as f64 / 12.0);

        let mut frequencies = [0.0; SCALE_LEN];
        for (slot, &semitones) in frequencies.iter_mut().zip(intervals) {
            *slot = shifted * 2.0_f64.powf(semitones as f64 / 12.0);
        }
        Scale { frequencies }
    }

    /// Frequency of a scale degree. Out-of-range degrees wrap around.
    pub fn degree(&self, degree: usize) -> f64 {
        self.frequencies[degree % SCALE_LEN]
    }

    /// The scale root (degree 0).
    pub fn root(&self) -> f64 {
        self.frequencies[0]
    }

    pub fn frequencies(&self) -> &[f64; SCALE_LEN] {
        &self.frequencies
    }
}

/// Number of entries in the melody pattern table.
pub const PATTERN_COUNT: usize = 4;

/// Scale-degree sequences the melody cycles through.
const MELODY_PATTERNS: [[usize; 4]; PATTERN_COUNT] =
    [[0, 2, 4, 5], [5, 4, 2, 0], [0, 4, 6, 3], [6, 3, 2, 0]];

/// Select a melody pattern; ids wrap modulo the table size.
pub fn melody_pattern(id: usize) -> &'static [usize; 4] {
    &MELODY_PATTERNS[id % PATTERN_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_seven_increasing_degrees() {
        for key in 0..12u8 {
            for minor in [false, true] {
                let scale = Scale::build(key, minor);
                let freqs = scale.frequencies();
                assert_eq!(freqs.len(), 7);
                for w in freqs.windows(2) {
                    assert!(
                        w[1] > w[0],
                        "degrees must be strictly increasing: {w:?} (key {key}, minor {minor})"
                    );
                }
            }
        }
    }

    #[test]
    fn major_minor_differ_at_expected_positions() {
        let major = Scale::build(5, false);
        let minor = Scale::build(5, true);
        for i in 0..SCALE_LEN {
            let differs = major.frequencies()[i] != minor.frequencies()[i];
            let expected = matches!(i, 2 | 5 | 6);
            assert_eq!(
                differs, expected,
                "major/minor should differ exactly at the 3rd, 6th and 7th degrees (index {i})"
            );
        }
    }

    #[test]
    fn key_index_shifts_root_by_semitones() {
        let c = Scale::build(0, false);
        let c_sharp = Scale::build(1, false);
        let semitone = 2.0_f64.powf(1.0 / 12.0);
        assert!(
            (c_sharp.root() / c.root() - semitone).abs() < 1e-12,
            "one key step should raise the root by one semitone"
        );
        assert!((c.root() - CONCERT_C4_HZ).abs() < 1e-12);
    }

    #[test]
    fn degree_lookup_wraps() {
        let scale = Scale::build(0, false);
        assert_eq!(scale.degree(7), scale.degree(0));
        assert_eq!(scale.degree(9), scale.degree(2));
    }

    #[test]
    fn pattern_table_cycles() {
        assert_eq!(melody_pattern(1), &[5, 4, 2, 0]);
        assert_eq!(melody_pattern(5), melody_pattern(1));
        // The 5th note of a 4-step pattern lands back on the 1st degree.
        let pattern = melody_pattern(1);
        assert_eq!(pattern[4 % pattern.len()], pattern[0]);
    }
}
