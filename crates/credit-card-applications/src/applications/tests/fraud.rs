use mockall::predicate::function;

use super::common::*;
use crate::applications::domain::{CreditCardApplication, CreditCardApplicationDecision};
use crate::applications::evaluation::CreditCardApplicationEvaluator;
use crate::applications::fraud::{
    FraudCheck, FraudLookup, MockFraudCheck, MockFraudRule, SurnameWatchlist,
};

fn applicant_named(last_name: &str) -> CreditCardApplication {
    CreditCardApplication {
        last_name: Some(last_name.to_string()),
        ..CreditCardApplication::default()
    }
}

#[test]
fn default_lookup_flags_watchlisted_surname() {
    let lookup = FraudLookup::new();

    assert!(lookup.is_fraud_risk(&applicant_named("Smith")));
    assert!(!lookup.is_fraud_risk(&applicant_named("Smithson")));
    assert!(!lookup.is_fraud_risk(&CreditCardApplication::default()));
}

#[test]
fn custom_watchlist_replaces_default_surname() {
    let lookup = FraudLookup::with_rule(SurnameWatchlist::new(["Doe", "Roe"]));

    assert!(lookup.is_fraud_risk(&applicant_named("Roe")));
    assert!(!lookup.is_fraud_risk(&applicant_named("Smith")));
    assert_eq!(lookup.rule().surnames(), ["Doe", "Roe"]);
}

#[test]
fn refers_fraud_risk_from_default_lookup() {
    let mut evaluator = CreditCardApplicationEvaluator::with_fraud_lookup(
        accepting_validator(),
        Box::new(FraudLookup::new()),
    );

    let decision = evaluator.evaluate(&applicant_named("Smith"));

    assert_eq!(
        decision,
        CreditCardApplicationDecision::ReferredToHumanFraudRisk
    );
}

#[test]
fn refers_fraud_risk_when_substituted_rule_flags_application() {
    let mut rule = MockFraudRule::new();
    rule.expect_check_application().times(1).return_const(true);
    let lookup = FraudLookup::with_rule(rule);
    let mut evaluator =
        CreditCardApplicationEvaluator::with_fraud_lookup(accepting_validator(), Box::new(lookup));

    let decision = evaluator.evaluate(&CreditCardApplication::default());

    assert_eq!(
        decision,
        CreditCardApplicationDecision::ReferredToHumanFraudRisk
    );
}

#[test]
fn fraud_check_runs_before_high_income_acceptance() {
    let mut fraud = MockFraudCheck::new();
    fraud
        .expect_is_fraud_risk()
        .with(function(|application: &CreditCardApplication| {
            application.gross_annual_income == 150_000
        }))
        .times(1)
        .return_const(true);
    let mut evaluator =
        CreditCardApplicationEvaluator::with_fraud_lookup(accepting_validator(), Box::new(fraud));

    let decision = evaluator.evaluate(&application(150_000, 45));

    assert_eq!(
        decision,
        CreditCardApplicationDecision::ReferredToHumanFraudRisk
    );
    assert_eq!(evaluator.validator_lookup_count(), 0);
}

#[test]
fn cleared_applications_continue_through_remaining_rules() {
    let mut fraud = MockFraudCheck::new();
    fraud.expect_is_fraud_risk().return_const(false);
    let mut evaluator = CreditCardApplicationEvaluator::builder()
        .validator(accepting_validator())
        .fraud_lookup(Box::new(fraud))
        .build()
        .expect("validator supplied");

    assert!(evaluator.has_fraud_lookup());
    assert_eq!(
        evaluator.evaluate(&application(100_000, 45)),
        CreditCardApplicationDecision::AutoAccepted
    );
    assert_eq!(
        evaluator.evaluate(&application(19_999, 42)),
        CreditCardApplicationDecision::AutoDeclined
    );
}

#[test]
fn smith_is_not_screened_without_a_fraud_lookup() {
    let mut evaluator = CreditCardApplicationEvaluator::new(accepting_validator());
    let application = CreditCardApplication {
        gross_annual_income: 100_000,
        ..applicant_named("Smith")
    };

    assert_eq!(
        evaluator.evaluate(&application),
        CreditCardApplicationDecision::AutoAccepted
    );
}
