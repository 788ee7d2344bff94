//! Fitlog Library
//!
//! A Rust library for parsing personal activity log entries and estimating
//! distance, mean speed and calories burned for walking and running.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV rendering of training summaries
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable JSON rendering of training summaries
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Daily steps entries never fail; bad input yields an empty report:
//! ```rust
//! use fitlog::day_steps_report;
//!
//! let report = day_steps_report("678,0h50m00s", 75.0, 1.75);
//! assert!(report.contains("678"));
//! assert_eq!(day_steps_report("0,0h50m00s", 75.0, 1.75), "");
//! ```
//!
//! Training entries report errors to the caller:
//! ```rust
//! use fitlog::{training_report, ActivityError, ErrorKind};
//!
//! let report = training_report("3456,Ходьба,3h00m00s", 75.0, 1.75).unwrap();
//! println!("{report}");
//!
//! let err = training_report("3456,Плавание,3h00m00s", 75.0, 1.75).unwrap_err();
//! let kind = err.downcast_ref::<ActivityError>().map(ActivityError::kind);
//! assert_eq!(kind, Some(ErrorKind::UnknownActivity));
//! ```
//!
//! # Public API
//!
//! ## Reports
//! - [`day_steps_report`] - Text report for a `<steps>,<duration>` entry
//! - [`training_report`] - Text report for a `<steps>,<activity>,<duration>` entry
//! - [`summarize_day_steps`] / [`summarize_training`] - Structured metrics
//!
//! ## Parsing
//! - [`parse_steps_record`] / [`parse_activity_record`] - Split and convert entries
//! - [`parse_duration`] - Compact duration syntax such as `1h30m`
//!
//! ## Formulas
//! - [`distance`], [`day_distance`], [`mean_speed`]
//! - [`walking_calories`], [`running_calories`], [`calories`]

pub mod error;
pub mod formulas;
pub mod parser;
pub mod report;
pub mod types;

pub use error::*;
pub use formulas::*;
pub use parser::*;
pub use report::*;
pub use types::*;
