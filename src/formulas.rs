//! Distance, speed and calorie formulas
//!
//! Every function here is pure. Steps are taken as signed integers so that
//! the calorie functions can reject non-positive counts themselves.

use crate::error::{ActivityError, Result};
use crate::types::{ActivityDuration, ActivityType};

/// Fixed step length in meters, used for daily step counts
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Step length as a fraction of the user's height
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Walking burns half of what the base formula gives
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Step length in meters derived from height in meters
pub fn stride_length(height: f64) -> f64 {
    height * STEP_LENGTH_COEFFICIENT
}

/// Distance in km using the height-derived stride
pub fn distance(steps: i64, height: f64) -> f64 {
    steps as f64 * stride_length(height) / M_IN_KM
}

/// Distance in km using the fixed daily stride, independent of height
pub fn day_distance(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH_M / M_IN_KM
}

/// Mean speed in km/h; 0 for a non-positive duration
pub fn mean_speed(steps: i64, height: f64, duration: ActivityDuration) -> f64 {
    if !duration.is_positive() {
        return 0.0;
    }
    distance(steps, height) / duration.hours()
}

fn validate_inputs(steps: i64, weight: f64, height: f64, duration: ActivityDuration) -> Result<()> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if steps <= 0 || !positive(weight) || !positive(height) || !positive(duration.as_secs()) {
        return Err(ActivityError::Validation {
            steps,
            weight,
            height,
            duration_secs: duration.as_secs(),
        });
    }
    Ok(())
}

/// Calories burned running
pub fn running_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: ActivityDuration,
) -> Result<f64> {
    validate_inputs(steps, weight, height, duration)?;

    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * duration.minutes() / MIN_IN_H)
}

/// Calories burned walking
pub fn walking_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: ActivityDuration,
) -> Result<f64> {
    validate_inputs(steps, weight, height, duration)?;

    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * duration.minutes() / MIN_IN_H * WALKING_CALORIES_COEFFICIENT)
}

/// Calories burned for the given activity
pub fn calories(
    activity: ActivityType,
    steps: i64,
    weight: f64,
    height: f64,
    duration: ActivityDuration,
) -> Result<f64> {
    match activity {
        ActivityType::Running => running_calories(steps, weight, height, duration),
        ActivityType::Walking => walking_calories(steps, weight, height, duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_uses_height() {
        // 1000 steps * (1.75 * 0.45) m = 787.5 m
        assert!((distance(1000, 1.75) - 0.7875).abs() < EPS);
        assert!((stride_length(2.0) - 0.9).abs() < EPS);
    }

    #[test]
    fn test_day_distance_ignores_height() {
        assert!((day_distance(1000) - 0.65).abs() < EPS);
        assert!((day_distance(678) - 0.4407).abs() < EPS);
    }

    #[test]
    fn test_mean_speed() {
        let two_hours = ActivityDuration::from_hours(2.0);
        assert!((mean_speed(1000, 1.75, two_hours) - 0.39375).abs() < EPS);
        assert_eq!(mean_speed(1000, 1.75, ActivityDuration::ZERO), 0.0);
        assert_eq!(mean_speed(1000, 1.75, ActivityDuration::from_secs(-60.0)), 0.0);
    }

    #[test]
    fn test_walking_calories_value() {
        let d = ActivityDuration::from_hours(3.0);
        let speed = 3456.0 * 1.75 * 0.45 / 1000.0 / 3.0;
        let expected = 75.0 * speed * 180.0 / 60.0 * 0.5;
        let got = walking_calories(3456, 75.0, 1.75, d).unwrap();
        assert!((got - expected).abs() < EPS);
    }

    #[test]
    fn test_running_is_double_walking() {
        let cases = [
            (100, 50.0, 1.6, ActivityDuration::from_minutes(15.0)),
            (3456, 75.0, 1.75, ActivityDuration::from_hours(3.0)),
            (25_000, 92.5, 1.91, ActivityDuration::from_secs(5025.0)),
        ];
        for (steps, weight, height, duration) in cases {
            let walk = walking_calories(steps, weight, height, duration).unwrap();
            let run = running_calories(steps, weight, height, duration).unwrap();
            assert!((run - 2.0 * walk).abs() < EPS * run.max(1.0));
        }
    }

    #[test]
    fn test_calories_dispatch() {
        let d = ActivityDuration::from_hours(1.0);
        assert_eq!(
            calories(ActivityType::Running, 5000, 70.0, 1.8, d).unwrap(),
            running_calories(5000, 70.0, 1.8, d).unwrap()
        );
        assert_eq!(
            calories(ActivityType::Walking, 5000, 70.0, 1.8, d).unwrap(),
            walking_calories(5000, 70.0, 1.8, d).unwrap()
        );
    }

    #[test]
    fn test_calories_reject_non_positive_inputs() {
        let d = ActivityDuration::from_hours(1.0);
        assert!(walking_calories(0, 75.0, 1.75, d).is_err());
        assert!(walking_calories(-5, 75.0, 1.75, d).is_err());
        assert!(walking_calories(100, 0.0, 1.75, d).is_err());
        assert!(running_calories(100, 75.0, -1.75, d).is_err());
        assert!(running_calories(100, 75.0, 1.75, ActivityDuration::ZERO).is_err());
        assert!(running_calories(100, f64::NAN, 1.75, d).is_err());

        let err = walking_calories(100, -1.0, 1.75, d).unwrap_err();
        assert!(matches!(err, ActivityError::Validation { .. }));
    }
}
