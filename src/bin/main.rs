//! CLI binary for Fitlog
//!
//! This provides the command-line interface for the fitlog library.

use anyhow::{bail, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use fitlog::{day_steps_report, format_training, summarize_training, TrainingSummary, UserProfile};
use tracing_subscriber::EnvFilter;

fn record_args(name: &'static str, example: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("records")
                .help(example)
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("weight")
                .long("weight")
                .help("Body weight in kilograms")
                .value_name("KG")
                .env("FITLOG_WEIGHT")
                .required(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Body height in meters")
                .value_name("M")
                .env("FITLOG_HEIGHT")
                .required(true)
                .value_parser(value_parser!(f64)),
        )
}

/// Placeholder vergen emits when git metadata is unavailable
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

fn version_string(git_sha: Option<&str>) -> String {
    match git_sha.filter(|sha| !sha.is_empty() && *sha != VERGEN_PLACEHOLDER) {
        Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn build_cli() -> Command {
    Command::new("fitlog")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(version_string(option_env!("VERGEN_GIT_SHA")))
        .about("Compute distance, speed and calories from activity log entries.")
        .subcommand_required(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            record_args("day", "Daily steps entries, e.g. 678,0h50m00s")
                .about("Report distance and calories for daily step counts"),
        )
        .subcommand(
            record_args("training", "Training entries, e.g. 3456,Ходьба,3h00m00s")
                .about("Report duration, distance, speed and calories for trainings")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["text", "csv", "json"])
                        .default_value("text"),
                ),
        )
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn profile_from(matches: &ArgMatches) -> Result<UserProfile> {
    let weight = matches.get_one::<f64>("weight").copied().unwrap_or_default();
    let height = matches.get_one::<f64>("height").copied().unwrap_or_default();
    Ok(UserProfile::new(weight, height)?)
}

fn records_from(matches: &ArgMatches) -> Vec<&String> {
    matches
        .get_many::<String>("records")
        .map(|values| values.collect())
        .unwrap_or_default()
}

fn run_day(matches: &ArgMatches) -> Result<usize> {
    let profile = profile_from(matches)?;
    let mut processed = 0;

    for record in records_from(matches) {
        let report = day_steps_report(record, profile.weight, profile.height);
        // day_steps_report already logged why the record was skipped
        if report.is_empty() {
            continue;
        }
        println!("{report}");
        processed += 1;
    }

    Ok(processed)
}

fn run_training(matches: &ArgMatches) -> Result<usize> {
    let profile = profile_from(matches)?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let mut summaries: Vec<TrainingSummary> = Vec::new();
    for record in records_from(matches) {
        match summarize_training(record, profile.weight, profile.height) {
            Ok(summary) => summaries.push(summary),
            Err(e) => eprintln!("Error processing {record}: {e:#}"),
        }
    }

    match format {
        "text" => {
            for summary in &summaries {
                println!("{}", format_training(summary));
            }
        }
        #[cfg(feature = "csv")]
        "csv" => fitlog::write_training_csv(std::io::stdout().lock(), &summaries)?,
        #[cfg(feature = "json")]
        "json" => println!("{}", fitlog::training_summaries_to_json(&summaries)?),
        other => bail!("output format '{other}' is not enabled in this build"),
    }

    Ok(summaries.len())
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("debug"));

    let (processed, total) = match matches.subcommand() {
        Some(("day", sub)) => (run_day(sub)?, records_from(sub).len()),
        Some(("training", sub)) => (run_training(sub)?, records_from(sub).len()),
        _ => bail!("no subcommand given"),
    };

    if processed == 0 {
        eprintln!("Error: No records were successfully processed out of {total} given.");
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}
