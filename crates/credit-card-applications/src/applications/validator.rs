use super::domain::ValidationMode;

/// Licence key value the vendor reports once the validation service has lapsed.
pub const EXPIRED_LICENCE_KEY: &str = "EXPIRED";

/// Licence metadata published by the validation service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenceData {
    pub licence_key: String,
}

impl LicenceData {
    pub fn is_expired(&self) -> bool {
        self.licence_key == EXPIRED_LICENCE_KEY
    }
}

/// Read-only service metadata exposed by a validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInformation {
    pub licence: LicenceData,
}

impl ServiceInformation {
    pub fn with_licence_key(licence_key: impl Into<String>) -> Self {
        Self {
            licence: LicenceData {
                licence_key: licence_key.into(),
            },
        }
    }
}

/// Result of a frequent flyer lookup.
///
/// `lookup_performed` reports that the validator actually reached its backing
/// service; the evaluator counts these to expose a lookup total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOutcome {
    pub is_valid: bool,
    pub lookup_performed: bool,
}

impl LookupOutcome {
    pub const fn performed(is_valid: bool) -> Self {
        Self {
            is_valid,
            lookup_performed: true,
        }
    }

    pub const fn skipped(is_valid: bool) -> Self {
        Self {
            is_valid,
            lookup_performed: false,
        }
    }
}

/// Collaborator that checks frequent flyer numbers against an external scheme.
#[cfg_attr(test, mockall::automock)]
pub trait FrequentFlyerNumberValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<LookupOutcome, ValidatorError>;
    fn service_information(&self) -> ServiceInformation;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

impl<V> FrequentFlyerNumberValidator for Box<V>
where
    V: FrequentFlyerNumberValidator + ?Sized,
{
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<LookupOutcome, ValidatorError> {
        (**self).is_valid(frequent_flyer_number)
    }

    fn service_information(&self) -> ServiceInformation {
        (**self).service_information()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }
}

/// Fault raised by a validator while looking up a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("frequent flyer service unavailable: {0}")]
    Unavailable(String),
    #[error("frequent flyer lookup failed: {0}")]
    Lookup(String),
}
