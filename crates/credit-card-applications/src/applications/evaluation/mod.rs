mod policy;
mod rules;

pub use policy::{AUTO_REFERRAL_MAX_AGE, HIGH_INCOME_THRESHOLD, LOW_INCOME_THRESHOLD};

use super::domain::{CreditCardApplication, CreditCardApplicationDecision, ValidationMode};
use super::fraud::FraudCheck;
use super::validator::FrequentFlyerNumberValidator;
use rules::DecisionRule;
use tracing::{debug, warn};

/// Decides credit card applications by consulting a frequent flyer validator
/// and, when configured, a fraud check.
///
/// Rules are applied in a fixed order and the first one that matches settles
/// the application:
///
/// 1. fraud risk reported by the fraud check
/// 2. income at or above [`HIGH_INCOME_THRESHOLD`]
/// 3. an expired validator licence
/// 4. validator fault or rejected frequent flyer number
/// 5. applicant aged [`AUTO_REFERRAL_MAX_AGE`] or younger
/// 6. income below [`LOW_INCOME_THRESHOLD`]
///
/// Anything left over goes to an underwriter.
pub struct CreditCardApplicationEvaluator<V> {
    validator: V,
    fraud_lookup: Option<Box<dyn FraudCheck>>,
    validator_lookup_count: u64,
}

impl<V: FrequentFlyerNumberValidator> CreditCardApplicationEvaluator<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            fraud_lookup: None,
            validator_lookup_count: 0,
        }
    }

    pub fn with_fraud_lookup(validator: V, fraud_lookup: Box<dyn FraudCheck>) -> Self {
        Self {
            validator,
            fraud_lookup: Some(fraud_lookup),
            validator_lookup_count: 0,
        }
    }

    pub fn builder() -> EvaluatorBuilder<V> {
        EvaluatorBuilder::default()
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut V {
        &mut self.validator
    }

    pub fn has_fraud_lookup(&self) -> bool {
        self.fraud_lookup.is_some()
    }

    /// Number of lookups the validator reported as performed across all evaluations.
    pub fn validator_lookup_count(&self) -> u64 {
        self.validator_lookup_count
    }

    pub fn evaluate(
        &mut self,
        application: &CreditCardApplication,
    ) -> CreditCardApplicationDecision {
        let rule = self.decide(application);
        let decision = rule.decision();

        debug!(
            rule = rule.as_str(),
            decision = decision.label(),
            age = application.age,
            gross_annual_income = application.gross_annual_income,
            "credit card application evaluated"
        );

        decision
    }

    /// Evaluate applications in order, returning one decision per application.
    pub fn evaluate_all<'a, I>(&mut self, applications: I) -> Vec<CreditCardApplicationDecision>
    where
        I: IntoIterator<Item = &'a CreditCardApplication>,
    {
        applications
            .into_iter()
            .map(|application| self.evaluate(application))
            .collect()
    }

    fn decide(&mut self, application: &CreditCardApplication) -> DecisionRule {
        if let Some(fraud_lookup) = &self.fraud_lookup {
            if fraud_lookup.is_fraud_risk(application) {
                return DecisionRule::FraudRisk;
            }
        }

        if policy::is_high_income(application) {
            return DecisionRule::HighIncome;
        }

        if self.validator.service_information().licence.is_expired() {
            return DecisionRule::ExpiredLicence;
        }

        self.validator
            .set_validation_mode(ValidationMode::for_age(application.age));

        let outcome = match self
            .validator
            .is_valid(application.frequent_flyer_number_or_empty())
        {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, "frequent flyer validation failed; referring application");
                return DecisionRule::ValidatorFault;
            }
        };

        if outcome.lookup_performed {
            self.validator_lookup_count += 1;
        }

        if !outcome.is_valid {
            return DecisionRule::InvalidFrequentFlyerNumber;
        }

        policy::applicant_rule(application)
    }
}

/// Assembles an evaluator, rejecting configurations without a validator.
pub struct EvaluatorBuilder<V> {
    validator: Option<V>,
    fraud_lookup: Option<Box<dyn FraudCheck>>,
}

impl<V> Default for EvaluatorBuilder<V> {
    fn default() -> Self {
        Self {
            validator: None,
            fraud_lookup: None,
        }
    }
}

impl<V: FrequentFlyerNumberValidator> EvaluatorBuilder<V> {
    pub fn validator(mut self, validator: V) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn fraud_lookup(mut self, fraud_lookup: Box<dyn FraudCheck>) -> Self {
        self.fraud_lookup = Some(fraud_lookup);
        self
    }

    pub fn build(self) -> Result<CreditCardApplicationEvaluator<V>, EvaluatorError> {
        let validator = self.validator.ok_or(EvaluatorError::MissingValidator)?;
        Ok(CreditCardApplicationEvaluator {
            validator,
            fraud_lookup: self.fraud_lookup,
            validator_lookup_count: 0,
        })
    }
}

/// Configuration error raised while assembling an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluatorError {
    #[error("a frequent flyer number validator is required")]
    MissingValidator,
}
