//! Report entry points
//!
//! Turns raw activity log entries into metric summaries and renders them as
//! human-readable text, CSV or JSON.

use crate::error::Result;
use crate::formulas::{calories, day_distance, distance, mean_speed, walking_calories};
use crate::parser::{parse_activity_record, parse_steps_record};
use crate::types::{ActivityType, DayStepsSummary, TrainingSummary};
use anyhow::Context;
use tracing::{debug, warn};

/// Compute metrics for a daily steps entry (`"<steps>,<duration>"`)
///
/// Distance uses the fixed step length while calories use the walking
/// formula, whose speed term is derived from height.
pub fn summarize_day_steps(data: &str, weight: f64, height: f64) -> Result<DayStepsSummary> {
    let record = parse_steps_record(data)?;

    let distance_km = day_distance(record.steps);
    let calories = walking_calories(record.steps, weight, height, record.duration)?;

    let summary = DayStepsSummary {
        steps: record.steps,
        distance_km,
        calories,
    };
    debug!(?summary, "day steps summary");
    Ok(summary)
}

/// Compute metrics for a training entry (`"<steps>,<activity>,<duration>"`)
pub fn summarize_training(data: &str, weight: f64, height: f64) -> anyhow::Result<TrainingSummary> {
    let record = parse_activity_record(data).context("failed to parse training record")?;
    let activity: ActivityType = record
        .activity
        .parse()
        .context("failed to resolve activity type")?;

    let calories = calories(activity, record.steps, weight, height, record.duration)
        .context("failed to calculate calories")?;

    let summary = TrainingSummary {
        activity,
        duration_hours: record.duration.hours(),
        distance_km: distance(record.steps, height),
        mean_speed_kmh: mean_speed(record.steps, height, record.duration),
        calories,
    };
    debug!(?summary, "training summary");
    Ok(summary)
}

/// Render a daily steps summary as text
pub fn format_day_steps(summary: &DayStepsSummary) -> String {
    format!(
        "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
        summary.steps, summary.distance_km, summary.calories
    )
}

/// Render a training summary as text
pub fn format_training(summary: &TrainingSummary) -> String {
    format!(
        "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
        summary.activity,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories
    )
}

/// Daily steps report: step count, distance and calories
///
/// Never fails. Any parse or validation error is logged and an empty
/// string is returned instead.
pub fn day_steps_report(data: &str, weight: f64, height: f64) -> String {
    match summarize_day_steps(data, weight, height) {
        Ok(summary) => format_day_steps(&summary),
        Err(e) => {
            warn!(record = data, error = %e, "skipping day steps record");
            String::new()
        }
    }
}

/// Training report: activity, duration, distance, mean speed and calories
pub fn training_report(data: &str, weight: f64, height: f64) -> anyhow::Result<String> {
    let summary = summarize_training(data, weight, height)?;
    Ok(format_training(&summary))
}

/// CSV column names for training summaries
#[cfg(feature = "csv")]
pub const TRAINING_CSV_HEADER: [&str; 5] = [
    "activity",
    "duration_h",
    "distance_km",
    "mean_speed_kmh",
    "calories",
];

/// Write training summaries as CSV, values rounded to 2 decimals
#[cfg(feature = "csv")]
pub fn write_training_csv<W: std::io::Write>(
    writer: W,
    summaries: &[TrainingSummary],
) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(TRAINING_CSV_HEADER)?;

    for summary in summaries {
        csv_writer.write_record([
            summary.activity.label().to_string(),
            format!("{:.2}", summary.duration_hours),
            format!("{:.2}", summary.distance_km),
            format!("{:.2}", summary.mean_speed_kmh),
            format!("{:.2}", summary.calories),
        ])?;
    }

    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Render training summaries as a pretty-printed JSON array
#[cfg(feature = "json")]
pub fn training_summaries_to_json(summaries: &[TrainingSummary]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(summaries).context("failed to serialize training summaries")
}
