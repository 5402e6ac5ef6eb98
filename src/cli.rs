use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::{render_batch, render_info, render_prediction, BatchReport};
use crate::scoring::{reference_dataset, PackageCsvImporter, PackageRecord, ScoringEngine};
use crate::telemetry;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "pack-quality",
    about = "Predict packaging quality and check the predictor against reference data",
    version
)]
struct Cli {
    /// Override the configured model artifact path
    #[arg(long, global = true)]
    model: Option<PathBuf>,
    /// Skip model loading and answer with the rule-based predictor only
    #[arg(long, global = true)]
    rules_only: bool,
    /// Emit JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the reference dataset and report accuracy (default command)
    Run,
    /// Score a single package record
    Predict(PredictArgs),
    /// Score every record in a CSV export and report accuracy
    ScoreCsv {
        /// CSV file with a header row
        path: PathBuf,
    },
    /// Describe the engine configuration
    Info,
}

#[derive(Args, Debug)]
struct PredictArgs {
    #[arg(long)]
    package_id: String,
    #[arg(long)]
    employee_id: String,
    #[arg(long = "model-code")]
    model_code: String,
    #[arg(long)]
    route: String,
    /// Start timestamp (YYYY-MM-DD HH:MM:SS)
    #[arg(long)]
    start_time: String,
    /// End timestamp (YYYY-MM-DD HH:MM:SS)
    #[arg(long)]
    end_time: String,
    /// Recorded result, e.g. "40 Minor Error"
    #[arg(long)]
    result: String,
    #[arg(long, default_value = "0")]
    count: String,
    #[arg(long, default_value = "No")]
    status: String,
    #[arg(long, default_value = "")]
    comments: String,
}

impl From<PredictArgs> for PackageRecord {
    fn from(args: PredictArgs) -> Self {
        PackageRecord {
            package_id: args.package_id,
            employee_id: args.employee_id,
            model_code: args.model_code,
            route_code: args.route,
            start_time: args.start_time,
            end_time: args.end_time,
            result_label: args.result,
            count_field: args.count,
            status_flag: args.status,
            comments: args.comments,
        }
    }
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, cli.verbose)?;

    let mut engine = ScoringEngine::with_assets(config.scoring.assets());
    if !cli.rules_only {
        let model_path = cli.model.unwrap_or(config.scoring.model_path);
        engine.load_model(&model_path);
    }
    info!(?config.environment, mode = engine.mode().label(), "scoring engine ready");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let results = engine.run_all_tests();
            let accuracy = engine.evaluate_accuracy(reference_dataset());
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&BatchReport::new(&results, Some(accuracy)))?
                );
            } else {
                print!("{}", render_batch(&results, Some(&accuracy)));
            }
        }
        Command::Predict(args) => {
            let record = PackageRecord::from(args);
            let prediction = engine.predict_quality(&record);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                print!("{}", render_prediction(&record, &prediction));
            }
        }
        Command::ScoreCsv { path } => {
            let records = PackageCsvImporter::from_path(&path)?;
            let results = engine.score_batch(&records);
            let accuracy = engine.evaluate_accuracy(&records);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&BatchReport::new(&results, Some(accuracy)))?
                );
            } else {
                print!("{}", render_batch(&results, Some(&accuracy)));
            }
        }
        Command::Info => {
            let description = engine.describe();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&description)?);
            } else {
                print!("{}", render_info(&description));
            }
        }
    }

    Ok(())
}
