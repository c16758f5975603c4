use crate::infra::{build_evaluator, write_json};
use chrono::{DateTime, Utc};
use clap::Args;
use credit_card_applications::applications::{
    read_applications_from_path, CreditCardApplication, CreditCardApplicationDecision,
};
use credit_card_applications::config::AppConfig;
use credit_card_applications::error::AppError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export (or `.json` array) with gross_annual_income, age, frequent_flyer_number and
    /// last_name fields
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Screen every application with the surname watchlist first
    #[arg(long)]
    pub(crate) fraud_check: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchReport {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) source: String,
    pub(crate) results: Vec<BatchEntry>,
    pub(crate) totals: BTreeMap<&'static str, usize>,
    pub(crate) referred_to_underwriter: usize,
    pub(crate) validator_lookup_count: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchEntry {
    pub(crate) row: usize,
    pub(crate) application: CreditCardApplication,
    pub(crate) decision: CreditCardApplicationDecision,
}

pub(crate) fn run_batch(config: &AppConfig, args: BatchArgs) -> Result<(), AppError> {
    let applications = read_applications_from_path(&args.input)?;
    let mut evaluator = build_evaluator(&config.validator, args.fraud_check)?;

    let decisions = evaluator.evaluate_all(&applications);
    let report = BatchReport::new(
        args.input.display().to_string(),
        applications,
        decisions,
        evaluator.validator_lookup_count(),
        Utc::now(),
    );

    info!(
        source = %report.source,
        evaluated = report.results.len(),
        referred = report.referred_to_underwriter,
        lookups = report.validator_lookup_count,
        "batch evaluation complete"
    );

    write_json(&report)
}

impl BatchReport {
    pub(crate) fn new(
        source: String,
        applications: Vec<CreditCardApplication>,
        decisions: Vec<CreditCardApplicationDecision>,
        validator_lookup_count: u64,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let mut totals = BTreeMap::new();
        for decision in &decisions {
            *totals.entry(decision.label()).or_insert(0) += 1;
        }
        let referred_to_underwriter = decisions
            .iter()
            .filter(|decision| decision.requires_underwriter())
            .count();

        let results = applications
            .into_iter()
            .zip(decisions)
            .enumerate()
            .map(|(index, (application, decision))| BatchEntry {
                row: index + 1,
                application,
                decision,
            })
            .collect();

        Self {
            evaluated_at,
            source,
            results,
            totals,
            referred_to_underwriter,
            validator_lookup_count,
        }
    }
}
