use std::sync::Mutex;

use crate::applications::domain::{CreditCardApplication, ValidationMode};
use crate::applications::validator::{
    FrequentFlyerNumberValidator, LookupOutcome, MockFrequentFlyerNumberValidator,
    ServiceInformation, ValidatorError,
};

pub(super) const VALID_LICENCE_KEY: &str = "OK";

pub(super) fn application(gross_annual_income: u64, age: u32) -> CreditCardApplication {
    CreditCardApplication {
        gross_annual_income,
        age,
        ..CreditCardApplication::default()
    }
}

pub(super) fn application_with_number(age: u32, number: &str) -> CreditCardApplication {
    CreditCardApplication {
        age,
        frequent_flyer_number: Some(number.to_string()),
        ..CreditCardApplication::default()
    }
}

/// Mock with the licence and validation mode stubbed; `is_valid` is left to each test.
pub(super) fn licensed_validator(licence_key: &'static str) -> MockFrequentFlyerNumberValidator {
    let mut validator = MockFrequentFlyerNumberValidator::new();
    validator
        .expect_service_information()
        .returning(move || ServiceInformation::with_licence_key(licence_key));
    validator.expect_set_validation_mode().return_const(());
    validator
}

/// Mock that accepts every number and reports each lookup.
pub(super) fn accepting_validator() -> MockFrequentFlyerNumberValidator {
    let mut validator = licensed_validator(VALID_LICENCE_KEY);
    validator
        .expect_is_valid()
        .returning(|_| Ok(LookupOutcome::performed(true)));
    validator
}

/// Hand-rolled validator that records what the evaluator did to it.
pub(super) struct RecordingValidator {
    pub(super) licence_key: String,
    pub(super) response: Result<LookupOutcome, ValidatorError>,
    pub(super) mode: ValidationMode,
    pub(super) mode_writes: Vec<ValidationMode>,
    pub(super) looked_up: Mutex<Vec<String>>,
}

impl RecordingValidator {
    pub(super) fn accepting() -> Self {
        Self {
            licence_key: VALID_LICENCE_KEY.to_string(),
            response: Ok(LookupOutcome::performed(true)),
            mode: ValidationMode::default(),
            mode_writes: Vec::new(),
            looked_up: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn looked_up(&self) -> Vec<String> {
        self.looked_up.lock().expect("lookup mutex poisoned").clone()
    }
}

impl FrequentFlyerNumberValidator for RecordingValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<LookupOutcome, ValidatorError> {
        self.looked_up
            .lock()
            .expect("lookup mutex poisoned")
            .push(frequent_flyer_number.to_string());
        self.response.clone()
    }

    fn service_information(&self) -> ServiceInformation {
        ServiceInformation::with_licence_key(self.licence_key.clone())
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
        self.mode_writes.push(mode);
    }
}
