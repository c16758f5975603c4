//! Credit card application intake and evaluation.
//!
//! The evaluator owns the decision rules; frequent flyer validation and fraud
//! screening are collaborators injected at construction so they can be
//! replaced with in-memory fakes or mocks.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod intake;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{CreditCardApplication, CreditCardApplicationDecision, ValidationMode};
pub use evaluation::{
    CreditCardApplicationEvaluator, EvaluatorBuilder, EvaluatorError, AUTO_REFERRAL_MAX_AGE,
    HIGH_INCOME_THRESHOLD, LOW_INCOME_THRESHOLD,
};
pub use fraud::{FraudCheck, FraudLookup, FraudRule, SurnameWatchlist};
pub use intake::{
    read_applications, read_applications_from_path, read_applications_json, IntakeError,
};
pub use validator::{
    FrequentFlyerNumberValidator, LicenceData, LookupOutcome, ServiceInformation,
    ValidatorError, EXPIRED_LICENCE_KEY,
};
