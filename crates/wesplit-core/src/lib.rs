//! # wesplit-core: Pure Split Arithmetic for WeSplit
//!
//! This crate is the **heart** of WeSplit. It derives each person's share and
//! the grand total from three inputs, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        WeSplit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Surface (apps/cli)                 │   │
//! │  │    amount text ──► tip picker ──► people picker ──► render      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw numbers in, raw numbers out        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ wesplit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   split   │  │  session  │  │ validation│  │   │
//! │  │   │ CheckAmt  │  │  compute  │  │  inputs + │  │  parsing  │  │   │
//! │  │   │ Tip/People│  │   Split   │  │  derived  │  │  bounds   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`split`] - The calculator: `compute` and its typed entry points
//! - [`types`] - Bounded input domains (check amount, tip, people)
//! - [`session`] - Input state with derived outputs recomputed on demand
//! - [`validation`] - Free-text and integer input checks
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wesplit_core::split::compute;
//!
//! // $100 check, 20% tip, 4 people
//! let split = compute(100.0, 20.0, 4.0);
//! assert_eq!(split.total_with_tip, 120.0);
//! assert_eq!(split.amount_per_person, 30.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod session;
pub mod split;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use session::{InputChange, SplitInputs, SplitSession};
pub use split::{compute, compute_for_selection, split_check, Split};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest number of people a check can be split between.
///
/// The people picker is 0-based; a selection index maps to a person count by
/// adding this offset (see [`types::effective_count`]).
pub const MIN_PEOPLE: u32 = 2;

/// Largest number of people offered by the people picker.
pub const MAX_PEOPLE: u32 = 99;

/// Lowest tip percentage in the tip domain.
pub const MIN_TIP_PERCENTAGE: u32 = 0;

/// Highest tip percentage in the tip domain.
pub const MAX_TIP_PERCENTAGE: u32 = 100;

/// Tip percentage selected when a session starts.
pub const DEFAULT_TIP_PERCENTAGE: u32 = 20;

/// Currency code used when the locale does not name one.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";
