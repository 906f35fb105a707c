//! # Marketscope Exporter
//!
//! Serializes a `QueryResult` into portable delimited text so callers can
//! offer a download without knowing anything about the result's shape.
//! Quoting, escaping and the header row follow RFC 4180; a standard CSV
//! reader must reproduce the exported values exactly.
//!
//! ## Public API
//!
//! - `to_csv`: one result set in, one UTF-8 byte buffer out.
//! - `ExportError`: the specific error types that can be returned from this crate.

pub mod csv_export;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use csv_export::to_csv;
pub use error::ExportError;
