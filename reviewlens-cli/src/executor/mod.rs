//! Analysis Executor
//!
//! Turns a loaded review collection into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Vec<ReviewRecord> (JSON / CSV loader)
//!       │
//!       ▼
//! ┌─────────────┐
//! │ statistics  │  Descriptive, distribution, moments, correlations
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   charts    │  Datasets + PNG rasterization (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build AnalyticsReport
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`statistics`] - Aggregate statistics over the collection
//! - [`charts`] - Chart rendering and PNG output
//! - [`report`] - Report assembly
//! - [`formatting`] - Human-readable output formatting

mod charts;
mod formatting;
mod report;
mod statistics;

// Re-export public API
pub use charts::{render_charts, write_charts};
pub use formatting::format_human_output;
pub use report::build_report;
pub use statistics::{ReviewAnalytics, compute_analytics};
