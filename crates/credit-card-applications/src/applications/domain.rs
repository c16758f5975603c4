use serde::{Deserialize, Serialize};

/// Applicant supplied snapshot consumed once by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    #[serde(default)]
    pub gross_annual_income: u64,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CreditCardApplication {
    /// Number handed to the validator; absent numbers are looked up as an empty string.
    pub fn frequent_flyer_number_or_empty(&self) -> &str {
        self.frequent_flyer_number.as_deref().unwrap_or_default()
    }
}

/// Terminal outcome of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl CreditCardApplicationDecision {
    pub const fn label(self) -> &'static str {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "auto_accepted",
            CreditCardApplicationDecision::AutoDeclined => "auto_declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred_to_human",
            CreditCardApplicationDecision::ReferredToHumanFraudRisk => {
                "referred_to_human_fraud_risk"
            }
        }
    }

    pub fn summary(self) -> String {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "application auto-accepted".to_string(),
            CreditCardApplicationDecision::AutoDeclined => "application auto-declined".to_string(),
            CreditCardApplicationDecision::ReferredToHuman => {
                "referred to an underwriter for manual review".to_string()
            }
            CreditCardApplicationDecision::ReferredToHumanFraudRisk => {
                "referred to an underwriter as a fraud risk".to_string()
            }
        }
    }

    /// True when a person has to look at the application before it can be settled.
    pub const fn requires_underwriter(self) -> bool {
        matches!(
            self,
            CreditCardApplicationDecision::ReferredToHuman
                | CreditCardApplicationDecision::ReferredToHumanFraudRisk
        )
    }
}

/// Depth of the frequent flyer lookup requested from the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

impl ValidationMode {
    /// Minimum applicant age that warrants a detailed lookup.
    pub const DETAILED_LOOKUP_MIN_AGE: u32 = 30;

    pub const fn for_age(age: u32) -> Self {
        if age >= Self::DETAILED_LOOKUP_MIN_AGE {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        }
    }
}
