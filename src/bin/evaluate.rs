use rmspe_evaluator::*;

use env_logger::Env;
use log::info;
use std::{error::Error, io, path::PathBuf};
use structopt::StructOpt;
use strum::VariantNames;

/// Evaluate numeric predictions read from a CSV file
#[derive(Debug, StructOpt)]
#[structopt(
    name = "evaluate",
    about = "Compute evaluation metrics over numeric predictions and print a summary"
)]
struct Cli {
    /// Path to a CSV file with `actual` and `predicted` columns. Empty fields are missing values.
    /// Will use STDIN if omitted.
    input_path: Option<PathBuf>,

    /// Metric to compute, may be repeated. Defaults to every metric applicable to numeric classes.
    #[structopt(
        short = "m",
        long = "metric",
        possible_values = MetricKind::VARIANTS,
        case_insensitive = true,
        number_of_values = 1
    )]
    metrics: Vec<MetricKind>,

    /// Output CSV file for the computed statistics.
    #[structopt(short = "o", long = "out")]
    output_path: Option<PathBuf>,

    /// Print the statistics to STDOUT as CSV instead of the summary.
    #[structopt(short = "c", long = "csv")]
    csv: bool,

    /// Overwrite the output file if it already exists.
    #[structopt(short = "f", long = "force")]
    overwrite: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::from_args();
    let env = Env::default()
        .filter_or("LOG_LEVEL", "info")
        .write_style_or("LOG_STYLE", "always");
    env_logger::init_from_env(env);

    let records = load_records(args.input_path.as_ref())?;
    let kinds = if args.metrics.is_empty() {
        MetricKind::applicable_to(ClassType::Numeric)
    } else {
        args.metrics
    };
    let mut evaluation = Evaluation::new(ClassType::Numeric, &kinds);
    evaluation.evaluate_records(&records);

    if args.csv {
        write_statistics_to_stdout(&evaluation.statistics())?;
    } else {
        print!("{}", evaluation.to_summary_string());
    }
    if let Some(path) = args.output_path {
        write_statistics(&evaluation.statistics(), &path, args.overwrite)?;
    }
    Ok(())
}

fn load_records(o_input_path: Option<&PathBuf>) -> Result<Vec<PredictionRecord>, Box<dyn Error>> {
    let records = if let Some(input_path) = o_input_path {
        eprintln!("Reading predictions CSV from file...");
        read_predictions_from_file(input_path)?
    } else {
        eprintln!("Reading predictions CSV from STDIN...");
        read_predictions_from_stdin()?
    };
    info!("Loaded {} prediction records.", records.len());
    Ok(records)
}

fn write_statistics(
    statistics: &[StatisticRecord],
    output_path: &PathBuf,
    overwrite_allowed: bool,
) -> Result<(), Box<dyn Error>> {
    if !overwrite_allowed && output_path.exists() {
        Err(Box::new(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Output file exists, refusing to overwrite.",
        )))
    } else {
        write_statistics_to_file(statistics, output_path)
    }
}
