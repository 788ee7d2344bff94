use crate::types::ActivityType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metrics derived from a daily steps entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayStepsSummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

/// Metrics derived from a training entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingSummary {
    pub activity: ActivityType,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}
