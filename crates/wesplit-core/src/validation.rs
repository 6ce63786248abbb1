//! # Validation Module
//!
//! Input validation utilities for WeSplit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation surface                                         │
//! │  ├── Pickers only offer values from the enumerated domains             │
//! │  └── Free text for the check amount                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_check_amount: free text → CheckAmount                       │
//! │  └── validate_*: bounds checks used by the domain constructors         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: split::compute                                               │
//! │  └── No checks at all; arithmetic propagates whatever it is given      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wesplit_core::validation::{parse_check_amount, validate_tip_percentage};
//!
//! let amount = parse_check_amount("$1,234.50").unwrap();
//! assert_eq!(amount.value(), 1234.50);
//!
//! assert!(validate_tip_percentage(15).is_ok());
//! assert!(validate_tip_percentage(101).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{max_selection_index, CheckAmount};
use crate::{MAX_PEOPLE, MAX_TIP_PERCENTAGE, MIN_PEOPLE, MIN_TIP_PERCENTAGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// User-facing input names, used as the `field` of every [`ValidationError`].
pub const CHECK_AMOUNT_FIELD: &str = "check amount";
pub const TIP_PERCENTAGE_FIELD: &str = "tip percentage";
pub const PEOPLE_FIELD: &str = "number of people";
pub const PEOPLE_SELECTION_FIELD: &str = "people selection";
pub const CURRENCY_CODE_FIELD: &str = "currency code";

/// Symbols stripped from check amount text before parsing.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹', '₨', '₩'];

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a check amount.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative
/// - Zero is allowed (the session default)
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::validate_check_amount;
///
/// assert!(validate_check_amount(0.0).is_ok());
/// assert!(validate_check_amount(42.5).is_ok());
/// assert!(validate_check_amount(-1.0).is_err());
/// assert!(validate_check_amount(f64::NAN).is_err());
/// ```
pub fn validate_check_amount(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: CHECK_AMOUNT_FIELD.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: CHECK_AMOUNT_FIELD.to_string(),
        });
    }

    Ok(())
}

/// Validates a tip percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive (percentage points)
pub fn validate_tip_percentage(pct: u32) -> ValidationResult<()> {
    // Lower bound is 0, which u32 already guarantees
    if pct > MAX_TIP_PERCENTAGE {
        return Err(ValidationError::OutOfRange {
            field: TIP_PERCENTAGE_FIELD.to_string(),
            min: MIN_TIP_PERCENTAGE as i64,
            max: MAX_TIP_PERCENTAGE as i64,
        });
    }

    Ok(())
}

/// Validates an actual person count.
///
/// ## Rules
/// - Must be between 2 and 99 inclusive
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::validate_people_count;
///
/// assert!(validate_people_count(2).is_ok());
/// assert!(validate_people_count(99).is_ok());
/// assert!(validate_people_count(1).is_err());
/// assert!(validate_people_count(100).is_err());
/// ```
pub fn validate_people_count(count: u32) -> ValidationResult<()> {
    if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&count) {
        return Err(ValidationError::OutOfRange {
            field: PEOPLE_FIELD.to_string(),
            min: MIN_PEOPLE as i64,
            max: MAX_PEOPLE as i64,
        });
    }

    Ok(())
}

/// Validates a 0-based people picker index.
///
/// ## Rules
/// - Must address an entry of the people picker (0..=97)
pub fn validate_people_selection(index: u32) -> ValidationResult<()> {
    if index > max_selection_index() {
        return Err(ValidationError::OutOfRange {
            field: PEOPLE_SELECTION_FIELD.to_string(),
            min: 0,
            max: max_selection_index() as i64,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an ISO 4217 currency code.
///
/// ## Rules
/// - Exactly three ASCII uppercase letters ("USD", "EUR", "PKR")
///
/// The code is only checked for shape; it is passed through to the output
/// surface for formatting, never used for conversion.
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: CURRENCY_CODE_FIELD.to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: CURRENCY_CODE_FIELD.to_string(),
            reason: "must be three uppercase letters".to_string(),
        });
    }

    Ok(())
}

/// Parses free-text check amount input.
///
/// ## Accepted Forms
/// - Plain numbers: `42`, `42.50`
/// - Currency symbols anywhere: `$42.50`, `42.50€`
/// - Grouping commas: `1,234.50`
/// - An ISO code before or after the number: `USD 42`, `42 EUR`
///
/// Commas are always grouping separators, so `42,50` reads as 4250.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Amount field                                                           │
/// │                                                                         │
/// │  User types: "$1,234.50"                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_check_amount ← THIS FUNCTION                                    │
/// │       │                                                                 │
/// │       ├── empty? → Error: "check amount is required"                   │
/// │       ├── not a number? → Error: "check amount has invalid format"     │
/// │       ├── negative / NaN? → Error from validate_check_amount           │
/// │       │                                                                 │
/// │       └── OK → CheckAmount(1234.50)                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_check_amount(text: &str) -> ValidationResult<CheckAmount> {
    let cleaned: String = text
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() == 2 {
        if looks_like_currency_code(tokens[0]) {
            tokens.remove(0);
        } else if looks_like_currency_code(tokens[1]) {
            tokens.pop();
        }
    }

    match tokens.as_slice() {
        [] => Err(ValidationError::Required {
            field: CHECK_AMOUNT_FIELD.to_string(),
        }),
        [number] => {
            let value: f64 = number.parse().map_err(|_| ValidationError::InvalidFormat {
                field: CHECK_AMOUNT_FIELD.to_string(),
                reason: format!("'{}' is not a number", number),
            })?;
            CheckAmount::new(value)
        }
        _ => Err(ValidationError::InvalidFormat {
            field: CHECK_AMOUNT_FIELD.to_string(),
            reason: "expected a single amount".to_string(),
        }),
    }
}

fn looks_like_currency_code(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_alphabetic())
}

// =============================================================================
// Unit Tests
// =============================================================================
