//! Error types for sbmltex operations.
//!
//! Rendering itself is total - malformed formulas degrade to visible
//! placeholder text rather than errors - so the only failures the crate
//! surfaces are from writing assembled reports.

use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
