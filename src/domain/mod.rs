//! Catalog domain model: value objects, records, queries and results.

pub mod item;
pub mod query;
pub mod stats;
pub mod types;
