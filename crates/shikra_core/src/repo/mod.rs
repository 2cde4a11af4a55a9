//! Store layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for mutable timeline state.
//! - Keep container and id-assignment details behind the trait boundary.
//!
//! # Invariants
//! - Stores enforce draft validation before any mutation.
//! - Store APIs report soft conditions (skipped add, absent id) as values,
//!   not errors.

pub mod timeline_repo;
