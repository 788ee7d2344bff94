use std::fmt;
use std::num::ParseIntError;

/// Broad category of an [`ActivityError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The raw record could not be split or converted
    Format,
    /// A numeric input was zero, negative or not finite
    Validation,
    /// The activity label is not one of the known activities
    UnknownActivity,
}

/// Error types for activity log parsing and calculation
#[derive(Debug)]
pub enum ActivityError {
    /// Record has the wrong number of comma-separated fields
    FieldCount { expected: usize, actual: usize },
    /// Step count field is not a valid integer
    InvalidSteps { raw: String, source: ParseIntError },
    /// Duration field is not valid duration syntax
    InvalidDuration(String),
    /// Parsed steps or duration are not positive
    NonPositiveRecord { steps: i64, duration_secs: f64 },
    /// Calculation inputs are not positive
    Validation {
        steps: i64,
        weight: f64,
        height: f64,
        duration_secs: f64,
    },
    /// Activity label outside the closed set
    UnknownActivity(String),
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::FieldCount { .. }
            | ActivityError::InvalidSteps { .. }
            | ActivityError::InvalidDuration(_)
            | ActivityError::NonPositiveRecord { .. } => ErrorKind::Format,
            ActivityError::Validation { .. } => ErrorKind::Validation,
            ActivityError::UnknownActivity(_) => ErrorKind::UnknownActivity,
        }
    }
}

impl fmt::Display for ActivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityError::FieldCount { expected, actual } => write!(
                f,
                "incorrect amount of data params, want: {}, but got: {}",
                expected, actual
            ),
            ActivityError::InvalidSteps { raw, source } => {
                write!(f, "invalid step count {:?}: {}", raw, source)
            }
            ActivityError::InvalidDuration(msg) => write!(f, "invalid duration: {}", msg),
            ActivityError::NonPositiveRecord {
                steps,
                duration_secs,
            } => write!(
                f,
                "steps or duration should be more than 0, got steps: {}, got duration: {}s",
                steps, duration_secs
            ),
            ActivityError::Validation {
                steps,
                weight,
                height,
                duration_secs,
            } => write!(
                f,
                "param should be more than 0, got: steps {}, weight {:.2}, height {:.2}, duration {}s",
                steps, weight, height, duration_secs
            ),
            ActivityError::UnknownActivity(label) => {
                write!(f, "неизвестный тип тренировки: {:?}", label)
            }
        }
    }
}

impl std::error::Error for ActivityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivityError::InvalidSteps { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
