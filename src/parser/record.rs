use crate::error::{ActivityError, Result};
use crate::parser::duration::parse_duration;
use crate::types::{ActivityDuration, ActivityRecord, StepsRecord};
use tracing::debug;

/// Field delimiter used by activity log entries
pub const FIELD_DELIMITER: char = ',';

/// Split a raw entry into exactly `expected` fields
pub fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = data.split(FIELD_DELIMITER).collect();
    if fields.len() != expected {
        return Err(ActivityError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|source| ActivityError::InvalidSteps {
            raw: raw.to_string(),
            source,
        })
}

fn ensure_positive(steps: i64, duration: ActivityDuration) -> Result<()> {
    if steps <= 0 || !duration.is_positive() {
        return Err(ActivityError::NonPositiveRecord {
            steps,
            duration_secs: duration.as_secs(),
        });
    }
    Ok(())
}

/// Parse a daily steps entry such as `"678,0h50m00s"`
pub fn parse_steps_record(data: &str) -> Result<StepsRecord> {
    let fields = split_fields(data, 2)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[1])?;
    ensure_positive(steps, duration)?;

    debug!(steps, duration_secs = duration.as_secs(), "parsed steps record");
    Ok(StepsRecord { steps, duration })
}

/// Parse a training entry such as `"3456,Ходьба,3h00m00s"`
pub fn parse_activity_record(data: &str) -> Result<ActivityRecord> {
    let fields = split_fields(data, 3)?;

    let steps = parse_steps(fields[0])?;
    let activity = fields[1].to_string();
    let duration = parse_duration(fields[2])?;
    ensure_positive(steps, duration)?;

    debug!(
        steps,
        activity = %activity,
        duration_secs = duration.as_secs(),
        "parsed activity record"
    );
    Ok(ActivityRecord {
        steps,
        activity,
        duration,
    })
}
