//! JSON output validation for training summaries
#![cfg(feature = "json")]

use fitlog::{format_training, summarize_training, training_summaries_to_json, TrainingSummary};
use serde_json::Value;

fn summaries(records: &[&str]) -> Vec<TrainingSummary> {
    records
        .iter()
        .map(|r| summarize_training(r, 75.0, 1.75).expect("valid training record"))
        .collect()
}

fn render(records: &[&str]) -> Value {
    let json = training_summaries_to_json(&summaries(records)).expect("JSON render should succeed");
    serde_json::from_str(&json).expect("output should be valid JSON")
}

#[test]
fn test_json_array_keys() {
    let value = render(&["3456,Бег,1h", "100,Ходьба,10m"]);
    let items = value.as_array().expect("top level should be an array");
    assert_eq!(items.len(), 2);

    for item in items {
        let object = item.as_object().expect("each summary should be an object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["activity", "calories", "distance_km", "duration_hours", "mean_speed_kmh"]
        );
    }
}

#[test]
fn test_json_activity_matches_text_label() {
    let records = ["3456,Бег,1h", "3456,Running,1h", "100,Ходьба,10m"];
    let value = render(&records);

    let expected = ["Бег", "Бег", "Ходьба"];
    for ((item, label), summary) in value
        .as_array()
        .expect("array")
        .iter()
        .zip(expected)
        .zip(summaries(&records))
    {
        assert_eq!(item["activity"], label);
        assert!(format_training(&summary).contains(&format!("Тип тренировки: {label}")));
    }
}

#[test]
fn test_json_values() {
    let value = render(&["3456,Бег,1h"]);
    let item = &value[0];

    assert_eq!(item["duration_hours"].as_f64(), Some(1.0));
    let distance = item["distance_km"].as_f64().expect("distance");
    assert!((distance - 3456.0 * 1.75 * 0.45 / 1000.0).abs() < 1e-9);
}

#[test]
fn test_json_empty_input() {
    let json = training_summaries_to_json(&[]).unwrap();
    assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), Value::Array(Vec::new()));
}
