//! Utility functions for display formatting.

pub mod format;

pub use format::{excerpt, format_date, format_count};
