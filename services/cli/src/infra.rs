use credit_card_applications::applications::{
    CreditCardApplicationEvaluator, FraudLookup, FrequentFlyerNumberValidator, LookupOutcome,
    ServiceInformation, ValidationMode, ValidatorError,
};
use credit_card_applications::config::ValidatorConfig;
use credit_card_applications::error::AppError;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Validator backed by the configured member list.
#[derive(Debug, Clone)]
pub(crate) struct InMemoryFrequentFlyerNumberValidator {
    licence_key: String,
    accepted_numbers: HashSet<String>,
    mode: ValidationMode,
}

impl InMemoryFrequentFlyerNumberValidator {
    pub(crate) fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            licence_key: config.licence_key.clone(),
            accepted_numbers: config.accepted_numbers.iter().cloned().collect(),
            mode: ValidationMode::default(),
        }
    }
}

impl FrequentFlyerNumberValidator for InMemoryFrequentFlyerNumberValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<LookupOutcome, ValidatorError> {
        let number = frequent_flyer_number.trim();
        let is_valid = if self.accepted_numbers.is_empty() {
            !number.is_empty()
        } else {
            self.accepted_numbers.contains(number)
        };
        debug!(number, is_valid, mode = ?self.mode, "frequent flyer lookup");
        Ok(LookupOutcome::performed(is_valid))
    }

    fn service_information(&self) -> ServiceInformation {
        ServiceInformation::with_licence_key(self.licence_key.clone())
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}

pub(crate) type CliEvaluator = CreditCardApplicationEvaluator<InMemoryFrequentFlyerNumberValidator>;

pub(crate) fn build_evaluator(
    config: &ValidatorConfig,
    fraud_check: bool,
) -> Result<CliEvaluator, AppError> {
    let mut builder = CreditCardApplicationEvaluator::builder()
        .validator(InMemoryFrequentFlyerNumberValidator::from_config(config));
    if fraud_check {
        builder = builder.fraud_lookup(Box::new(FraudLookup::new()));
    }
    Ok(builder.build()?)
}

pub(crate) fn write_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
