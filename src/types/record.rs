use crate::types::ActivityDuration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Daily steps entry: `<steps>,<duration>`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepsRecord {
    pub steps: i64,
    pub duration: ActivityDuration,
}

/// Training entry: `<steps>,<activity>,<duration>`
///
/// The activity label is kept as written; it is matched against
/// [`ActivityType`](crate::ActivityType) only when metrics are calculated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivityRecord {
    pub steps: i64,
    pub activity: String,
    pub duration: ActivityDuration,
}
