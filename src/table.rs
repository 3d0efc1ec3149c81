//! Human-equivalent age lookup table, one column per size category.

use std::fmt;
use std::str::FromStr;

use crate::error::AgeError;

/// `(dog age in years, [small, medium, large])`, ascending by age.
/// Ages below one year are months expressed as a fraction of a year.
pub const AGE_TABLE: &[(f64, [f64; 3])] = &[
    (0.25, [4.0, 4.0, 3.0]),
    (0.5, [7.5, 7.5, 6.0]),
    (0.75, [11.0, 11.0, 9.0]),
    (1.0, [15.0, 15.0, 12.0]),
    (2.0, [24.0, 24.0, 19.0]),
    (3.0, [28.0, 28.0, 28.0]),
    (4.0, [32.0, 32.0, 32.0]),
    (5.0, [36.0, 36.0, 36.0]),
    (6.0, [40.0, 42.0, 45.0]),
    (7.0, [44.0, 47.0, 50.0]),
    (8.0, [48.0, 51.0, 55.0]),
    (9.0, [52.0, 56.0, 61.0]),
    (10.0, [56.0, 60.0, 66.0]),
    (11.0, [60.0, 65.0, 72.0]),
    (13.0, [68.0, 74.0, 82.0]),
    (15.0, [76.0, 83.0, 93.0]),
    // Large dogs pass 120 from here on; the table saturates.
    (17.0, [84.0, 92.0, 120.0]),
    (19.0, [92.0, 100.0, 120.0]),
    (20.0, [100.0, 100.0, 120.0]),
];

/// The saturated large-dog value. Results equal to it get a footnote.
pub const LARGE_CAP_AGE: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Column in [`AGE_TABLE`].
    pub fn index(self) -> usize {
        match self {
            SizeCategory::Small => 0,
            SizeCategory::Medium => 1,
            SizeCategory::Large => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Small => "Small (under 10 kg)",
            SizeCategory::Medium => "Medium (10-26 kg)",
            SizeCategory::Large => "Large (over 26 kg)",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeCategory {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeCategory::Small),
            "medium" => Ok(SizeCategory::Medium),
            "large" => Ok(SizeCategory::Large),
            _ => Err(AgeError::InvalidCategory(s.to_string())),
        }
    }
}
