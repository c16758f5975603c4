use crate::batch::{run_batch, BatchArgs};
use crate::demo::run_demo;
use crate::infra::{build_evaluator, write_json};
use clap::{Args, Parser, Subcommand};
use credit_card_applications::applications::CreditCardApplication;
use credit_card_applications::config::AppConfig;
use credit_card_applications::error::AppError;
use credit_card_applications::telemetry;
use serde_json::json;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Card Application Evaluator",
    about = "Evaluate credit card applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application described by flags
    Evaluate(EvaluateArgs),
    /// Evaluate every application in a CSV export
    Batch(BatchArgs),
    /// Walk through the worked examples (default command)
    Demo,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Gross annual income in whole currency units
    #[arg(long)]
    pub(crate) income: u64,
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: u32,
    /// Frequent flyer number to validate
    #[arg(long)]
    pub(crate) frequent_flyer_number: Option<String>,
    /// Applicant last name, used by the fraud check
    #[arg(long)]
    pub(crate) last_name: Option<String>,
    /// Screen the application with the surname watchlist first
    #[arg(long)]
    pub(crate) fraud_check: bool,
}

impl From<EvaluateArgs> for CreditCardApplication {
    fn from(args: EvaluateArgs) -> Self {
        Self {
            gross_annual_income: args.income,
            age: args.age,
            frequent_flyer_number: args.frequent_flyer_number,
            last_name: args.last_name,
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "credit card evaluator starting");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::Batch(args) => run_batch(&config, args),
        Command::Demo => run_demo(&config),
    }
}

fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let fraud_check = args.fraud_check;
    let application = CreditCardApplication::from(args);
    let mut evaluator = build_evaluator(&config.validator, fraud_check)?;

    let decision = evaluator.evaluate(&application);

    write_json(&json!({
        "application": application,
        "decision": decision,
        "summary": decision.summary(),
        "validator_lookup_count": evaluator.validator_lookup_count(),
    }))
}
