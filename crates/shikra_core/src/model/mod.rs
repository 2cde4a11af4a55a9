//! Domain records for the product site core.
//!
//! # Responsibility
//! - Define canonical data structures used by the stores and aggregations.
//! - Keep one shape per concept regardless of how the UI projects it.
//!
//! # Invariants
//! - Records here are plain data; collection-level rules (id uniqueness,
//!   catalogue structure) live with the owning store or matrix.

pub mod attack;
pub mod content;
pub mod milestone;
