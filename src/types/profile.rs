use crate::error::{ActivityError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Body measurements supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in meters
    pub height: f64,
}

impl UserProfile {
    /// Build a profile, rejecting non-positive or non-finite measurements
    pub fn new(weight: f64, height: f64) -> Result<Self> {
        if !(weight.is_finite() && weight > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ActivityError::Validation {
                steps: 0,
                weight,
                height,
                duration_secs: 0.0,
            });
        }
        Ok(Self { weight, height })
    }
}
