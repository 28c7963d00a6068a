use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The categorical state of a CRM client.
///
/// The wire format is a plain string. `Active` and `Inactive` are the two
/// values the dashboard filters and charts on; any other value is preserved
/// verbatim in `Other` so the record still renders in the table and still
/// matches an unfiltered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientStatus {
    Active,
    Inactive,
    Other(String),
}

impl ClientStatus {
    /// Returns the status as the exact string the provider sent.
    pub fn as_str(&self) -> &str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ClientStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Active" => ClientStatus::Active,
            "Inactive" => ClientStatus::Inactive,
            _ => ClientStatus::Other(raw),
        }
    }
}

impl From<ClientStatus> for String {
    fn from(status: ClientStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-selectable status dimension of the dashboard filter.
///
/// `All` admits every record, including statuses outside the observed
/// Active/Inactive domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Whether a record with the given status passes this filter.
    pub fn matches(&self, status: &ClientStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => *status == ClientStatus::Active,
            StatusFilter::Inactive => *status == ClientStatus::Inactive,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    // Lenient on case so the CLI accepts `--status active`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            _ => Err(CoreError::InvalidStatusFilter(s.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        };
        f.write_str(name)
    }
}
