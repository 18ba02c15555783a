// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for the directory API
//!
//! Absent records are not errors: by-id lookups return `None` per GraphQL
//! convention. The taxonomy below covers the arithmetic faults that must be
//! surfaced as explicit query errors.

use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("division by zero is undefined")]
    DivisionByZero,

    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),
}

// Note: `async_graphql::Error: From<AppError>` is provided by async-graphql's
// blanket impl for `Display + Send + Sync + 'static` types, which produces the
// same `Display`-string error a manual impl would.

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
