use analytics::{DashboardView, FilterCriteria};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

/// Width, in blocks, of the widest status bar.
const BAR_WIDTH: usize = 40;

/// Prints the three dashboard sections: summary, status chart, client table.
pub fn print_dashboard(criteria: &FilterCriteria, view: &DashboardView) {
    println!("CRM Dashboard");
    println!(
        "Filters: status = {}, opportunity value {} to {}",
        criteria.status, criteria.min_value, criteria.max_value
    );
    println!();

    println!("Summary");
    println!("  Total Clients: {}", view.total_clients);
    println!("  Total Opportunity Value: {}", view.total_opportunity_value);
    println!();

    println!("Clients by Status");
    let scale = view.active_count.max(view.inactive_count);
    println!(
        "  Active   {:>5}  {}",
        view.active_count,
        bar(view.active_count, scale)
    );
    println!(
        "  Inactive {:>5}  {}",
        view.inactive_count,
        bar(view.inactive_count, scale)
    );
    println!();

    println!("{}", client_table(view));
}

/// Renders one horizontal chart bar, scaled against the larger of the two
/// status counts so the widest bar always spans the full width.
fn bar(count: usize, scale: usize) -> String {
    if count == 0 || scale == 0 {
        return String::new();
    }
    // A non-zero count always gets at least one block so it stays visible.
    let width = (count * BAR_WIDTH / scale).max(1);
    "█".repeat(width)
}

/// Builds the five-column client table in dataset order.
fn client_table(view: &DashboardView) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Email", "Opportunity Value", "Status"]);

    for record in &view.filtered {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.name),
            Cell::new(&record.email),
            Cell::new(record.opportunity_value),
            Cell::new(record.status.as_str()),
        ]);
    }

    table
}
