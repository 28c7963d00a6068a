use core_types::{ClientRecord, StatusFilter};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The user-controlled filter state of the dashboard.
///
/// Both value bounds are inclusive. `min_value > max_value` is deliberately
/// not rejected: the value predicate is simply never satisfied and the
/// filtered view comes out empty, matching how the dashboard behaves when the
/// range is inverted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub min_value: Decimal,
    pub max_value: Decimal,
}

impl FilterCriteria {
    /// Whether a single record passes both the status and the value filter.
    ///
    /// This is the whole membership rule: pure over the criteria and the
    /// record, so filtering can never mutate or reorder the dataset.
    pub fn admits(&self, record: &ClientRecord) -> bool {
        self.status.matches(&record.status)
            && record.opportunity_value >= self.min_value
            && record.opportunity_value <= self.max_value
    }
}

impl Default for FilterCriteria {
    /// The dashboard's initial controls: every status, values 0 to 100000.
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            min_value: Decimal::ZERO,
            max_value: Decimal::from(100_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ClientStatus;

    fn record(value: i64, status: ClientStatus) -> ClientRecord {
        ClientRecord {
            id: 1,
            name: "Acme Corp".to_string(),
            email: "ops@acme.example".to_string(),
            opportunity_value: Decimal::from(value),
            status,
        }
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let criteria = FilterCriteria {
            status: StatusFilter::All,
            min_value: Decimal::from(500),
            max_value: Decimal::from(2000),
        };

        assert!(criteria.admits(&record(500, ClientStatus::Active)));
        assert!(criteria.admits(&record(2000, ClientStatus::Active)));
        assert!(!criteria.admits(&record(499, ClientStatus::Active)));
        assert!(!criteria.admits(&record(2001, ClientStatus::Active)));
    }

    #[test]
    fn status_and_value_are_both_required() {
        let criteria = FilterCriteria {
            status: StatusFilter::Active,
            min_value: Decimal::ZERO,
            max_value: Decimal::from(1000),
        };

        assert!(criteria.admits(&record(500, ClientStatus::Active)));
        assert!(!criteria.admits(&record(500, ClientStatus::Inactive)));
        assert!(!criteria.admits(&record(5000, ClientStatus::Active)));
    }

    #[test]
    fn inverted_bounds_admit_nothing() {
        let criteria = FilterCriteria {
            status: StatusFilter::All,
            min_value: Decimal::from(5000),
            max_value: Decimal::ZERO,
        };

        assert!(!criteria.admits(&record(0, ClientStatus::Active)));
        assert!(!criteria.admits(&record(2500, ClientStatus::Active)));
        assert!(!criteria.admits(&record(5000, ClientStatus::Active)));
    }
}
