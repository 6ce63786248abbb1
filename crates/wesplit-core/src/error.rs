//! # Error Types
//!
//! Domain-specific error types for wesplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wesplit-core (this file)                                              │
//! │  └── ValidationError  - Input outside its domain                       │
//! │                                                                         │
//! │  apps/cli (separate crate)                                             │
//! │  ├── ConfigError      - Bad WESPLIT_* environment values               │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → stderr + exit code                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator itself never fails: [`crate::split::compute`] is total over
//! its numeric domain. Errors only arise when raw input is turned into one of
//! the bounded domain types.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't fit an input domain.
/// The `field` carries the input's user-facing name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    ///
    /// ## When This Occurs
    /// - Tip percentage above 100
    /// - People count below 2 or above 99
    /// - People selection index past the end of the picker
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., unparseable amount, malformed currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the input that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
