use super::domain::CreditCardApplication;

/// Predicate consulted before any other evaluation rule.
#[cfg_attr(test, mockall::automock)]
pub trait FraudCheck {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool;
}

/// Replaceable decision step used by [`FraudLookup`].
#[cfg_attr(test, mockall::automock)]
pub trait FraudRule {
    fn check_application(&self, application: &CreditCardApplication) -> bool;
}

/// Fraud check that delegates the decision to a rule.
#[derive(Debug, Clone, Default)]
pub struct FraudLookup<R = SurnameWatchlist> {
    rule: R,
}

impl FraudLookup<SurnameWatchlist> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: FraudRule> FraudLookup<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: FraudRule> FraudCheck for FraudLookup<R> {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool {
        self.rule.check_application(application)
    }
}

/// Flags applicants whose last name appears on a watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameWatchlist {
    surnames: Vec<String>,
}

impl SurnameWatchlist {
    pub const DEFAULT_SURNAME: &'static str = "Smith";

    pub fn new<I, S>(surnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surnames: surnames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn surnames(&self) -> &[String] {
        &self.surnames
    }
}

impl Default for SurnameWatchlist {
    fn default() -> Self {
        Self::new([Self::DEFAULT_SURNAME])
    }
}

impl FraudRule for SurnameWatchlist {
    fn check_application(&self, application: &CreditCardApplication) -> bool {
        match application.last_name.as_deref() {
            Some(last_name) => self.surnames.iter().any(|surname| surname == last_name),
            None => false,
        }
    }
}
