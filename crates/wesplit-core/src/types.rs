//! # Domain Types
//!
//! Bounded input domains for the split calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Input Domains                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CheckAmount    │   │  TipPercentage  │   │  PeopleCount    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64, >= 0      │   │  u32, 0..=100   │   │  u32, 2..=99    │       │
//! │  │  finite         │   │  default 20     │   │  picker index   │       │
//! │  │  default 0      │   │                 │   │  + MIN_PEOPLE   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │  CurrencyCode   │   passed through to the output surface            │
//! │  │  "USD" default  │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Enumerated Domains
//! The tip and people inputs are pickers over a fixed ordered sequence of
//! values. [`TipPercentage::domain`] and [`PeopleCount::domain`] produce those
//! sequences, so a presentation surface built on them cannot hand the
//! calculator an out-of-range value.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{
    validate_check_amount, validate_currency_code, validate_people_count,
    validate_people_selection, validate_tip_percentage, ValidationResult,
};
use crate::{
    DEFAULT_CURRENCY_CODE, DEFAULT_TIP_PERCENTAGE, MAX_PEOPLE, MAX_TIP_PERCENTAGE, MIN_PEOPLE,
    MIN_TIP_PERCENTAGE,
};

// =============================================================================
// People Picker Offset
// =============================================================================

/// Maps a 0-based people picker index to the number of people it stands for.
///
/// This is the only place the picker offset is applied. Both
/// [`PeopleCount::domain`] and [`crate::split::compute_for_selection`] go
/// through it.
///
/// ```rust
/// use wesplit_core::types::effective_count;
///
/// assert_eq!(effective_count(0), 2);
/// assert_eq!(effective_count(97), 99);
/// ```
#[inline]
pub const fn effective_count(selection_index: u32) -> u32 {
    selection_index.saturating_add(MIN_PEOPLE)
}

/// Inverse of [`effective_count`].
#[inline]
pub const fn selection_index(count: u32) -> u32 {
    count.saturating_sub(MIN_PEOPLE)
}

/// Index of the last entry in the people picker.
#[inline]
pub const fn max_selection_index() -> u32 {
    selection_index(MAX_PEOPLE)
}

// =============================================================================
// Check Amount
// =============================================================================

/// The pre-tip cost of the bill.
///
/// Always finite and non-negative. Deserialization goes through the same
/// check as [`CheckAmount::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[serde(try_from = "f64", into = "f64")]
#[ts(export)]
pub struct CheckAmount(f64);

impl CheckAmount {
    /// Creates a check amount, rejecting negative and non-finite values.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::types::CheckAmount;
    ///
    /// assert_eq!(CheckAmount::new(12.5).unwrap().value(), 12.5);
    /// assert!(CheckAmount::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> ValidationResult<Self> {
        validate_check_amount(value)?;
        Ok(CheckAmount(value))
    }

    /// A zero amount, the session default.
    #[inline]
    pub const fn zero() -> Self {
        CheckAmount(0.0)
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CheckAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        CheckAmount::new(value)
    }
}

impl From<CheckAmount> for f64 {
    fn from(amount: CheckAmount) -> Self {
        amount.0
    }
}

// =============================================================================
// Tip Percentage
// =============================================================================

/// Tip in percentage points (20 means 20%, not 0.2).
///
/// ## Domain
/// 0..=100. The 0% entry is part of the domain so "no tip" is selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct TipPercentage(u32);

impl TipPercentage {
    /// Creates a tip percentage, rejecting values above 100.
    pub fn new(pct: u32) -> ValidationResult<Self> {
        validate_tip_percentage(pct)?;
        Ok(TipPercentage(pct))
    }

    /// No tip.
    #[inline]
    pub const fn zero() -> Self {
        TipPercentage(0)
    }

    #[inline]
    pub const fn points(&self) -> u32 {
        self.0
    }

    /// Every selectable tip percentage, in picker order.
    ///
    /// ```rust
    /// use wesplit_core::types::TipPercentage;
    ///
    /// let tips: Vec<u32> = TipPercentage::domain().map(|t| t.points()).collect();
    /// assert_eq!(tips.first(), Some(&0));
    /// assert_eq!(tips.last(), Some(&100));
    /// assert_eq!(tips.len(), 101);
    /// ```
    pub fn domain() -> impl DoubleEndedIterator<Item = TipPercentage> {
        (MIN_TIP_PERCENTAGE..=MAX_TIP_PERCENTAGE).map(TipPercentage)
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        TipPercentage(DEFAULT_TIP_PERCENTAGE)
    }
}

impl TryFrom<u32> for TipPercentage {
    type Error = ValidationError;

    fn try_from(pct: u32) -> Result<Self, Self::Error> {
        TipPercentage::new(pct)
    }
}

impl From<TipPercentage> for u32 {
    fn from(tip: TipPercentage) -> Self {
        tip.0
    }
}

/// Picker label, e.g. "15%".
impl fmt::Display for TipPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// People Count
// =============================================================================

/// The actual number of people splitting the bill.
///
/// ## Picker Mapping
/// ```text
/// selection index:   0    1    2   ...   97
///                    │    │    │          │
///           + MIN_PEOPLE (effective_count)
///                    │    │    │          │
///                    ▼    ▼    ▼          ▼
/// person count:      2    3    4   ...   99
/// ```
///
/// Always >= 2, so dividing by it can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct PeopleCount(u32);

impl PeopleCount {
    /// Creates a person count, rejecting values outside 2..=99.
    pub fn new(count: u32) -> ValidationResult<Self> {
        validate_people_count(count)?;
        Ok(PeopleCount(count))
    }

    /// Creates a person count from a 0-based picker index.
    ///
    /// ```rust
    /// use wesplit_core::types::PeopleCount;
    ///
    /// assert_eq!(PeopleCount::from_selection(0).unwrap().get(), 2);
    /// assert!(PeopleCount::from_selection(98).is_err());
    /// ```
    pub fn from_selection(index: u32) -> ValidationResult<Self> {
        validate_people_selection(index)?;
        Ok(PeopleCount(effective_count(index)))
    }

    /// The fewest people a check can be split between.
    #[inline]
    pub const fn minimum() -> Self {
        PeopleCount(MIN_PEOPLE)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The picker index that selects this count.
    #[inline]
    pub const fn selection(&self) -> u32 {
        selection_index(self.0)
    }

    /// Every selectable person count, in picker order.
    pub fn domain() -> impl DoubleEndedIterator<Item = PeopleCount> {
        (0..=max_selection_index()).map(|index| PeopleCount(effective_count(index)))
    }
}

impl Default for PeopleCount {
    fn default() -> Self {
        PeopleCount::minimum()
    }
}

impl TryFrom<u32> for PeopleCount {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        PeopleCount::new(count)
    }
}

impl From<PeopleCount> for u32 {
    fn from(people: PeopleCount) -> Self {
        people.0
    }
}

/// Picker label, e.g. "4 people".
impl fmt::Display for PeopleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} people", self.0)
    }
}

// =============================================================================
// Currency Code
// =============================================================================

/// ISO 4217 currency code handed to the output surface for formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code; surrounding whitespace is ignored and
    /// lowercase input is uppercased.
    pub fn new(code: &str) -> ValidationResult<Self> {
        let code = code.trim().to_ascii_uppercase();
        validate_currency_code(&code)?;
        Ok(CurrencyCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        CurrencyCode(DEFAULT_CURRENCY_CODE.to_string())
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        CurrencyCode::new(&code)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
