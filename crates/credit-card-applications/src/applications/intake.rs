use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::CreditCardApplication;

/// Error raised while reading an application export.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read application export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid application JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse applications from a CSV export with a header row.
///
/// Expected columns are `gross_annual_income`, `age`, `frequent_flyer_number`
/// and `last_name`. Blank text columns are treated as absent.
pub fn read_applications<R: Read>(reader: R) -> Result<Vec<CreditCardApplication>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        applications.push(record?.into());
    }

    Ok(applications)
}

/// Parse a JSON array of applications. Missing fields take their defaults.
pub fn read_applications_json<R: Read>(
    reader: R,
) -> Result<Vec<CreditCardApplication>, IntakeError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read an export from disk; `.json` files are parsed as JSON, anything else as CSV.
pub fn read_applications_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<CreditCardApplication>, IntakeError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    if is_json {
        read_applications_json(file)
    } else {
        read_applications(file)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    gross_annual_income: u64,
    age: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequent_flyer_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
}

impl From<ApplicationRow> for CreditCardApplication {
    fn from(row: ApplicationRow) -> Self {
        Self {
            gross_annual_income: row.gross_annual_income,
            age: row.age,
            frequent_flyer_number: row.frequent_flyer_number,
            last_name: row.last_name,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
