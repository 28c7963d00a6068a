//! # Prism Filter & Aggregate Engine
//!
//! This crate derives everything the dashboard displays — the filtered client
//! list, the summary totals, and the bar-chart counts — from the fetched
//! dataset and the current filter criteria.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `DashboardEngine` is a stateless
//!   calculator. It takes the dataset and criteria as input and produces a
//!   `DashboardView` as output; it is re-invoked from scratch whenever either
//!   input changes, never patched incrementally. This makes it highly
//!   reliable and easy to test.
//!
//! ## Public API
//!
//! - `DashboardEngine`: The main struct that contains the filtering and
//!   aggregation logic.
//! - `FilterCriteria`: The user-controlled filter parameters.
//! - `DashboardView`: The standardized struct that holds the derived outputs.

// Declare the modules that constitute this crate.
pub mod criteria;
pub mod engine;
pub mod view;

// Re-export the key components to create a clean, public-facing API.
pub use criteria::FilterCriteria;
pub use engine::DashboardEngine;
pub use view::DashboardView;
