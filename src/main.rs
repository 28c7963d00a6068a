use analytics::{DashboardEngine, FilterCriteria};
use api_client::{ClientDataSource, HttpDataSource};
use clap::{Parser, Subcommand};
use core_types::StatusFilter;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod render;

/// The main entry point for the Prism dashboard application.
#[tokio::main]
async fn main() {
    // Route all diagnostics through tracing; RUST_LOG overrides the default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Dashboard(args) => {
            if let Err(e) = handle_dashboard(args).await {
                eprintln!("Error rendering dashboard: {}", e);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A terminal dashboard over a remote CRM client dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the client dataset and render the filtered dashboard.
    Dashboard(DashboardArgs),
}

#[derive(Parser)]
struct DashboardArgs {
    /// The status to filter on: all, active or inactive.
    /// Falls back to the value in config.toml.
    #[arg(long)]
    status: Option<StatusFilter>,

    /// Inclusive lower bound of the opportunity-value range.
    #[arg(long)]
    min_value: Option<Decimal>,

    /// Inclusive upper bound of the opportunity-value range.
    #[arg(long)]
    max_value: Option<Decimal>,
}

// ==============================================================================
// Dashboard Command Logic
// ==============================================================================

/// Handles one full dashboard pass: fetch, filter, render.
async fn handle_dashboard(args: DashboardArgs) -> anyhow::Result<()> {
    let config = configuration::load_config()?;

    // CLI flags override the configured defaults.
    let criteria = FilterCriteria {
        status: args.status.unwrap_or(config.filters.status),
        min_value: args.min_value.unwrap_or(config.filters.min_value),
        max_value: args.max_value.unwrap_or(config.filters.max_value),
    };

    let source = HttpDataSource::new(&config.source);

    // A failed fetch degrades to an empty dataset: the dashboard still
    // renders, it just shows zero records.
    let dataset = match source.fetch_clients().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching data; rendering an empty dashboard.");
            Vec::new()
        }
    };

    let engine = DashboardEngine::new();
    let view = engine.apply_filters(&dataset, &criteria);

    render::print_dashboard(&criteria, &view);

    Ok(())
}
