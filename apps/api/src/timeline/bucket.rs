use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of six fixed experience bands. Lower bound inclusive, upper exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceBucket {
    #[serde(rename = "0-1")]
    UpToOne,
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "2-4")]
    TwoToFour,
    #[serde(rename = "4-8")]
    FourToEight,
    #[serde(rename = "8-16")]
    EightToSixteen,
    #[serde(rename = "16+")]
    SixteenPlus,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 6] = [
        ExperienceBucket::UpToOne,
        ExperienceBucket::OneToTwo,
        ExperienceBucket::TwoToFour,
        ExperienceBucket::FourToEight,
        ExperienceBucket::EightToSixteen,
        ExperienceBucket::SixteenPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBucket::UpToOne => "0-1",
            ExperienceBucket::OneToTwo => "1-2",
            ExperienceBucket::TwoToFour => "2-4",
            ExperienceBucket::FourToEight => "4-8",
            ExperienceBucket::EightToSixteen => "8-16",
            ExperienceBucket::SixteenPlus => "16+",
        }
    }
}

impl fmt::Display for ExperienceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown experience bucket '{0}' (expected one of 0-1, 1-2, 2-4, 4-8, 8-16, 16+)")]
pub struct UnknownBucket(pub String);

impl FromStr for ExperienceBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceBucket::ALL
            .into_iter()
            .find(|b| b.label() == s.trim())
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

/// Maps a years-of-experience value onto its band.
///
/// Negative and NaN input land in "0-1".
pub fn bucket(years: f64) -> ExperienceBucket {
    match years {
        y if y >= 16.0 => ExperienceBucket::SixteenPlus,
        y if y >= 8.0 => ExperienceBucket::EightToSixteen,
        y if y >= 4.0 => ExperienceBucket::FourToEight,
        y if y >= 2.0 => ExperienceBucket::TwoToFour,
        y if y >= 1.0 => ExperienceBucket::OneToTwo,
        _ => ExperienceBucket::UpToOne,
    }
}
