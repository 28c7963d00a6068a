use crate::enums::ClientStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single CRM client entry, exactly as served by the data provider.
///
/// The provider speaks camelCase JSON (`opportunityValue`), hence the
/// container-level rename. Records are immutable once fetched: filtering and
/// aggregation only ever read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Stable, opaque identifier. Used as the display key, never interpreted.
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Unit-less currency amount. Expected non-negative, not enforced.
    pub opportunity_value: Decimal,
    pub status: ClientStatus,
}
