//! Shared helper utilities

pub mod url;
