//! # Marketscope Analytics Engine
//!
//! The aggregation and reporting layer. Callers hand this crate a catalog
//! query id and raw parameter strings; it validates them against the
//! catalog's declared constraints, resolves relative date windows, executes
//! the query through the repository, and derives the handful of statistics
//! that are not expressible as pure SQL (chart axis padding, series
//! summaries).
//!
//! ## Architectural Principles
//!
//! - **Validate before touching the store:** every parameter error is
//!   detected and returned before a connection is used.
//! - **Empty is not an error:** a query that matches no rows yields
//!   `QueryOutcome::NoData`, a success value the caller can distinguish
//!   from a store failure.
//! - **Errors carry context:** store failures are wrapped with the query id
//!   that triggered them and reported as values, never as panics.
//!
//! ## Public API
//!
//! - `ReportEngine`: the main struct; `execute` runs one catalog query.
//! - `QueryOutcome`: the data / no-data result of an execution.
//! - `ChartBounds`, `SummaryStats`: derived statistics over a result column.
//! - `ReportError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ReportEngine;
pub use error::ReportError;
pub use report::{ChartBounds, QueryOutcome, SummaryStats};
