use crate::criteria::FilterCriteria;
use crate::view::DashboardView;
use core_types::{ClientRecord, ClientStatus};

/// A stateless calculator for deriving the dashboard view from the dataset
/// and the current filter criteria.
#[derive(Debug, Default)]
pub struct DashboardEngine {}

impl DashboardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for deriving the dashboard view.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The full, unfiltered sequence of client records.
    /// * `criteria` - The current filter state.
    ///
    /// # Returns
    ///
    /// The `DashboardView` for exactly these inputs. The transform is pure
    /// and total: it cannot fail, performs no I/O, and the same inputs always
    /// yield an identical view. Callers re-invoke it after every dataset or
    /// criteria change instead of patching a previous view.
    pub fn apply_filters(
        &self,
        dataset: &[ClientRecord],
        criteria: &FilterCriteria,
    ) -> DashboardView {
        let mut view = DashboardView::new();

        // Membership is a pure per-record predicate, so a single ordered pass
        // keeps the filtered list a subsequence of the dataset.
        view.filtered = dataset
            .iter()
            .filter(|record| criteria.admits(record))
            .cloned()
            .collect();

        self.aggregate(&mut view);

        tracing::debug!(
            dataset_len = dataset.len(),
            filtered_len = view.total_clients,
            "Recomputed dashboard view."
        );

        view
    }

    /// Fills in the summary and chart numbers from the filtered subsequence.
    fn aggregate(&self, view: &mut DashboardView) {
        view.total_clients = view.filtered.len();

        for record in &view.filtered {
            view.total_opportunity_value += record.opportunity_value;

            match record.status {
                ClientStatus::Active => view.active_count += 1,
                ClientStatus::Inactive => view.inactive_count += 1,
                // Statuses outside the observed domain feed no chart bar.
                ClientStatus::Other(_) => {}
            }
        }
    }
}
