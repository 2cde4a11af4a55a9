//! UI-facing bridge crate for the SHIKRA site shell.

pub mod api;
