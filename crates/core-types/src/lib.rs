//! # Marketscope Core Types
//!
//! The shared vocabulary of the system: the categorical identifiers the three
//! market tables are filtered on, the dynamically typed result-set types that
//! every catalog query produces, and the validation errors for caller input.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate has no knowledge of the store, the catalog, or
//!   any presentation concern. Every other crate depends on it; it depends on
//!   nothing in the workspace.
//! - **Validated at the edge:** `CoinId` and `IndexTicker` can only be
//!   constructed from the enumerated set of values the store actually
//!   contains, so an invalid filter value is rejected before any SQL runs.
//!
//! ## Public API
//!
//! - `CoinId`, `IndexTicker`: the categorical filter enums.
//! - `Value`, `QueryResult`: a dynamically typed result set with a fixed,
//!   catalog-declared column order.
//! - `CoreError`: the validation error types returned from this crate.

pub mod enums;
pub mod error;
pub mod result;

// Re-export the core types to provide a clean public API.
pub use enums::{CoinId, IndexTicker};
pub use error::CoreError;
pub use result::{QueryResult, Value};
