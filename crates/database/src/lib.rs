//! # Marketscope Database Crate
//!
//! The store boundary of the system. This crate owns everything that knows
//! SQL or SQLite: opening the market data file read-only, the schema adapter
//! that reconciles the three tables' date formats, the catalog of named
//! analytical queries, and the repository that executes them with bound
//! parameters.
//!
//! ## Architectural Principles
//!
//! - **Read-only adapter:** The store is externally populated. Every
//!   connection this crate hands out refuses writes, and there is no
//!   process-wide connection — the pool is created per call site and passed
//!   explicitly.
//! - **Queries as data:** The catalog is a static table of `QuerySpec`
//!   entries. Adding a query is an addition to data, not a new control path,
//!   and every placeholder is a bound parameter — no SQL is ever assembled
//!   from caller input.
//!
//! ## Public API
//!
//! - `connect`: opens the SQLite file read-only and returns the pool.
//! - `dates`: canonical `YYYY-MM-DD` keys and trailing-window arithmetic.
//! - `catalog`: the `QuerySpec` table and lookup by query id.
//! - `MarketRepository`: bound-parameter execution and store introspection.
//! - `DbError`: the specific error types that can be returned from this crate.

pub mod catalog;
pub mod connection;
pub mod dates;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::{ColumnKind, ColumnSpec, DateAnchor, ParamKind, ParamSpec, QuerySpec};
pub use connection::connect;
pub use error::DbError;
pub use repository::{BindValue, MarketRepository, PRICE_TABLES};
