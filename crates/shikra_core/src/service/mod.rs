//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and catalogue calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from container details.

pub mod content_service;
pub mod coverage_service;
pub mod timeline_service;
