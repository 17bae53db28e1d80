//! Core types for an in-memory document store with automatic equality indexing.
//!
//! This crate is the core of the transientdb project and provides:
//!
//! - **Record model** ([`record`]) - Ordered JSON records and their identifiers
//! - **Index keys** ([`key`]) - Type-tagged keys for scalar values
//! - **Queries** ([`query`]) - Conjunctions of equality predicates
//! - **Typed documents** ([`document`]) - Serde conversions to and from records
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use transientdb::{query::Query, record::Record};
//! use serde_json::json;
//!
//! let query = Query::builder()
//!     .eq("type", "x")
//!     .build();
//! ```

#[allow(unused_extern_crates)]
extern crate self as transientdb_core;

pub mod document;
pub mod error;
pub mod key;
pub mod query;
pub mod record;
