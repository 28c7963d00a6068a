use core_types::StatusFilter;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: Source,
    pub filters: FilterDefaults,
}

/// Describes where the CRM dataset is fetched from.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// The full URL of the CRM data endpoint (e.g., "http://localhost:5000/crm-data").
    /// A single unauthenticated GET against this URL returns the whole dataset.
    pub endpoint: String,
}

/// The filter state the dashboard starts with before any user input.
///
/// These mirror the initial dashboard controls: status wide open and an
/// opportunity-value range of 0 to 100000.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterDefaults {
    /// The initial status selection.
    #[serde(default)]
    pub status: StatusFilter,
    /// Inclusive lower bound of the opportunity-value range.
    pub min_value: Decimal,
    /// Inclusive upper bound of the opportunity-value range.
    pub max_value: Decimal,
}
