use crate::infra::build_evaluator;
use credit_card_applications::applications::{
    CreditCardApplication, CreditCardApplicationDecision, EXPIRED_LICENCE_KEY,
};
use credit_card_applications::config::{AppConfig, ValidatorConfig};
use credit_card_applications::error::AppError;

struct Scenario {
    title: &'static str,
    application: CreditCardApplication,
    licence_key: Option<&'static str>,
    fraud_check: bool,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "High income applicant",
            application: CreditCardApplication {
                gross_annual_income: 100_000,
                ..CreditCardApplication::default()
            },
            licence_key: None,
            fraud_check: false,
        },
        Scenario {
            title: "Young applicant without income",
            application: CreditCardApplication {
                age: 19,
                frequent_flyer_number: Some("y".to_string()),
                ..CreditCardApplication::default()
            },
            licence_key: None,
            fraud_check: false,
        },
        Scenario {
            title: "Low income adult with a valid frequent flyer number",
            application: CreditCardApplication {
                gross_annual_income: 19_999,
                age: 42,
                frequent_flyer_number: Some("y".to_string()),
                last_name: None,
            },
            licence_key: None,
            fraud_check: false,
        },
        Scenario {
            title: "Validator licence expired",
            application: CreditCardApplication {
                age: 42,
                frequent_flyer_number: Some("y".to_string()),
                ..CreditCardApplication::default()
            },
            licence_key: Some(EXPIRED_LICENCE_KEY),
            fraud_check: false,
        },
        Scenario {
            title: "Watchlisted surname with fraud screening",
            application: CreditCardApplication {
                gross_annual_income: 150_000,
                age: 42,
                frequent_flyer_number: Some("y".to_string()),
                last_name: Some("Smith".to_string()),
            },
            licence_key: None,
            fraud_check: true,
        },
    ]
}

pub(crate) fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    println!("Credit card application evaluation demo");

    for scenario in scenarios() {
        let decision = evaluate_scenario(&config.validator, &scenario)?;
        println!("\n{}", scenario.title);
        println!(
            "  income {} | age {} | frequent flyer {} | last name {}",
            scenario.application.gross_annual_income,
            scenario.application.age,
            scenario
                .application
                .frequent_flyer_number
                .as_deref()
                .unwrap_or("-"),
            scenario.application.last_name.as_deref().unwrap_or("-"),
        );
        println!("  Decision: {} ({})", decision.label(), decision.summary());
    }

    Ok(())
}

fn evaluate_scenario(
    base: &ValidatorConfig,
    scenario: &Scenario,
) -> Result<CreditCardApplicationDecision, AppError> {
    let mut validator_config = base.clone();
    if let Some(licence_key) = scenario.licence_key {
        validator_config.licence_key = licence_key.to_string();
    }

    let mut evaluator = build_evaluator(&validator_config, scenario.fraud_check)?;
    Ok(evaluator.evaluate(&scenario.application))
}
