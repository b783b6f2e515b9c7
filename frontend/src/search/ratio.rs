use serde::{Deserialize, Serialize};

const LOW_FLOOR: f64 = 0.2;
const MEDIUM_FLOOR: f64 = 0.6;
const HIGH_FLOOR: f64 = 1.4;
const VERY_HIGH_FLOOR: f64 = 3.0;

/// Ordinal class of a video's view/subscriber ratio, level 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RatioBucket {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RatioBucket {
    pub fn level(self) -> u8 {
        match self {
            RatioBucket::VeryLow => 1,
            RatioBucket::Low => 2,
            RatioBucket::Medium => 3,
            RatioBucket::High => 4,
            RatioBucket::VeryHigh => 5,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(RatioBucket::VeryLow),
            2 => Some(RatioBucket::Low),
            3 => Some(RatioBucket::Medium),
            4 => Some(RatioBucket::High),
            5 => Some(RatioBucket::VeryHigh),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RatioBucket::VeryLow => "Very low (< 0.2)",
            RatioBucket::Low => "Low (0.2 - 0.6)",
            RatioBucket::Medium => "Medium (0.6 - 1.4)",
            RatioBucket::High => "High (1.4 - 3.0)",
            RatioBucket::VeryHigh => "Very high (3.0+)",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            RatioBucket::VeryLow,
            RatioBucket::Low,
            RatioBucket::Medium,
            RatioBucket::High,
            RatioBucket::VeryHigh,
        ]
    }

    pub fn contains(self, ratio: f64) -> bool {
        classify(ratio) == self
    }
}

impl TryFrom<u8> for RatioBucket {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        RatioBucket::from_level(level).ok_or_else(|| format!("ratio level {level} is not in 1..=5"))
    }
}

impl From<RatioBucket> for u8 {
    fn from(bucket: RatioBucket) -> Self {
        bucket.level()
    }
}

/// Buckets are half-open `[floor, next_floor)`, the top one unbounded.
/// NaN and negative ratios land in the lowest bucket.
pub fn classify(ratio: f64) -> RatioBucket {
    if ratio.is_nan() || ratio < LOW_FLOOR {
        RatioBucket::VeryLow
    } else if ratio < MEDIUM_FLOOR {
        RatioBucket::Low
    } else if ratio < HIGH_FLOOR {
        RatioBucket::Medium
    } else if ratio < VERY_HIGH_FLOOR {
        RatioBucket::High
    } else {
        RatioBucket::VeryHigh
    }
}
