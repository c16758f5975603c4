use super::super::domain::CreditCardApplication;
use super::rules::DecisionRule;

/// Income at or above which applications are accepted without further checks.
pub const HIGH_INCOME_THRESHOLD: u64 = 100_000;
/// Income below which otherwise eligible applications are declined.
pub const LOW_INCOME_THRESHOLD: u64 = 20_000;
/// Applicants this age or younger always go to an underwriter.
pub const AUTO_REFERRAL_MAX_AGE: u32 = 20;

pub(crate) fn is_high_income(application: &CreditCardApplication) -> bool {
    application.gross_annual_income >= HIGH_INCOME_THRESHOLD
}

/// Rules applied once the frequent flyer number has been accepted.
pub(crate) fn applicant_rule(application: &CreditCardApplication) -> DecisionRule {
    if application.age <= AUTO_REFERRAL_MAX_AGE {
        return DecisionRule::YoungApplicant;
    }

    if application.gross_annual_income < LOW_INCOME_THRESHOLD {
        return DecisionRule::LowIncome;
    }

    DecisionRule::NoAutomaticOutcome
}
