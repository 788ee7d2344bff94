use crate::error::ActivityError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of training, selecting which calorie formula applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActivityType {
    #[cfg_attr(feature = "serde", serde(rename = "Ходьба"))]
    Walking,
    #[cfg_attr(feature = "serde", serde(rename = "Бег"))]
    Running,
}

impl ActivityType {
    /// Label used in activity logs and reports
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Walking => "Ходьба",
            ActivityType::Running => "Бег",
        }
    }
}

impl FromStr for ActivityType {
    type Err = ActivityError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Ходьба" | "Walking" => Ok(ActivityType::Walking),
            "Бег" | "Running" => Ok(ActivityType::Running),
            _ => Err(ActivityError::UnknownActivity(label.to_string())),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Elapsed time of an activity, stored as seconds
///
/// May be zero or negative straight out of the parser; records reject
/// those before any calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivityDuration {
    secs: f64,
}

impl ActivityDuration {
    pub const ZERO: ActivityDuration = ActivityDuration { secs: 0.0 };

    pub fn from_secs(secs: f64) -> Self {
        Self { secs }
    }

    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_secs(minutes * 60.0)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_secs(hours * 3600.0)
    }

    pub fn as_secs(&self) -> f64 {
        self.secs
    }

    pub fn minutes(&self) -> f64 {
        self.secs / 60.0
    }

    pub fn hours(&self) -> f64 {
        self.secs / 3600.0
    }

    pub fn is_positive(&self) -> bool {
        self.secs > 0.0
    }
}

impl FromStr for ActivityDuration {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_duration(s)
    }
}
