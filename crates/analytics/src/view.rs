use core_types::ClientRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete derived output of one filter pass.
///
/// This struct is the final output of the `DashboardEngine` and is the data
/// transfer object between the engine and the presentation surface: the
/// table renders `filtered`, the summary panel renders the totals, and the
/// bar chart renders the two status counts. It has no identity of its own —
/// it is thrown away and rebuilt on every dataset or criteria change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// The records admitted by the criteria, in original dataset order.
    pub filtered: Vec<ClientRecord>,

    // Summary panel numbers.
    pub total_clients: usize,
    pub total_opportunity_value: Decimal,

    // Bar-chart categories. Records with a status outside Active/Inactive
    // count toward `total_clients` but toward neither bar.
    pub active_count: usize,
    pub inactive_count: usize,
}

impl DashboardView {
    /// Creates a new, zeroed-out DashboardView.
    /// This is what an empty dataset derives to, regardless of criteria.
    pub fn new() -> Self {
        Self {
            filtered: Vec::new(),
            total_clients: 0,
            total_opportunity_value: Decimal::ZERO,
            active_count: 0,
            inactive_count: 0,
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
