use super::super::domain::CreditCardApplicationDecision;

/// The rule that settled an evaluation, kept for the decision trail in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecisionRule {
    FraudRisk,
    HighIncome,
    ExpiredLicence,
    ValidatorFault,
    InvalidFrequentFlyerNumber,
    YoungApplicant,
    LowIncome,
    NoAutomaticOutcome,
}

impl DecisionRule {
    pub(crate) const fn decision(self) -> CreditCardApplicationDecision {
        match self {
            DecisionRule::FraudRisk => CreditCardApplicationDecision::ReferredToHumanFraudRisk,
            DecisionRule::HighIncome => CreditCardApplicationDecision::AutoAccepted,
            DecisionRule::LowIncome => CreditCardApplicationDecision::AutoDeclined,
            DecisionRule::ExpiredLicence
            | DecisionRule::ValidatorFault
            | DecisionRule::InvalidFrequentFlyerNumber
            | DecisionRule::YoungApplicant
            | DecisionRule::NoAutomaticOutcome => CreditCardApplicationDecision::ReferredToHuman,
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            DecisionRule::FraudRisk => "fraud_risk",
            DecisionRule::HighIncome => "high_income",
            DecisionRule::ExpiredLicence => "expired_licence",
            DecisionRule::ValidatorFault => "validator_fault",
            DecisionRule::InvalidFrequentFlyerNumber => "invalid_frequent_flyer_number",
            DecisionRule::YoungApplicant => "young_applicant",
            DecisionRule::LowIncome => "low_income",
            DecisionRule::NoAutomaticOutcome => "no_automatic_outcome",
        }
    }
}
