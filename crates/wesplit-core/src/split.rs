//! # Split Module
//!
//! The calculator: derives the grand total and each person's share from the
//! check amount, the tip percentage and the number of people.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The split is a display estimate, not a ledger entry.                  │
//! │                                                                         │
//! │    $100.00 / 3 people = 33.333...                                      │
//! │                                                                         │
//! │  The result is handed to the output surface unrounded; the surface    │
//! │  decides how many fraction digits to show for the currency.            │
//! │  Nothing is stored, so rounding drift never accumulates.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entry Points
//! - [`compute`] - raw numbers, no validation, NaN/Infinity propagate
//! - [`compute_for_selection`] - takes the people picker index instead of a count
//! - [`split_check`] - takes the bounded domain types; cannot see bad input

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{effective_count, CheckAmount, PeopleCount, TipPercentage};

/// The divisor never goes below this, so a raw count of 0 cannot divide by zero.
const MIN_DIVISOR: f64 = 1.0;

// =============================================================================
// Split Result
// =============================================================================

/// Derived values for one set of inputs.
///
/// A `Split` is always recomputed from inputs; nothing holds on to one as
/// state.
///
/// ## Serialization
/// ```json
/// { "tipValue": 20.0, "totalWithTip": 120.0, "amountPerPerson": 30.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Split {
    /// Tip on top of the check amount.
    pub tip_value: f64,

    /// Check amount plus tip.
    pub total_with_tip: f64,

    /// Each person's even share of `total_with_tip`.
    pub amount_per_person: f64,
}

// =============================================================================
// Calculator
// =============================================================================

/// Splits a check evenly, tip included.
///
/// ## Algorithm
/// ```text
/// tip_value         = check_amount / 100 * tip_percentage
/// total_with_tip    = check_amount + tip_value
/// amount_per_person = total_with_tip / number_of_people
/// ```
///
/// The operations run in exactly this order; `check_amount / 100 * tip`
/// and `check_amount * tip / 100` can differ in the last bit.
///
/// ## Unchecked Input
/// - NaN or infinite amounts propagate into both outputs
/// - Tips outside 0..=100 scale linearly (150 is a 150% tip)
/// - A people count below 1 is treated as 1
///
/// ## Example
/// ```rust
/// use wesplit_core::split::compute;
///
/// let split = compute(50.0, 0.0, 2.0);
/// assert_eq!(split.total_with_tip, 50.0);
/// assert_eq!(split.amount_per_person, 25.0);
/// ```
pub fn compute(check_amount: f64, tip_percentage: f64, number_of_people: f64) -> Split {
    let tip_value = check_amount / 100.0 * tip_percentage;
    let total_with_tip = check_amount + tip_value;

    // NaN fails the comparison and falls through to the division unchanged
    let divisor = if number_of_people < MIN_DIVISOR {
        MIN_DIVISOR
    } else {
        number_of_people
    };

    Split {
        tip_value,
        total_with_tip,
        amount_per_person: total_with_tip / divisor,
    }
}

/// Splits a check given the people picker's 0-based index.
///
/// The index goes through [`effective_count`] before dividing, so index 0
/// divides by 2 people, never by 0.
///
/// ```rust
/// use wesplit_core::split::compute_for_selection;
///
/// // index 2 is "4 people"
/// let split = compute_for_selection(100.0, 20, 2);
/// assert_eq!(split.amount_per_person, 30.0);
/// ```
pub fn compute_for_selection(
    check_amount: f64,
    tip_percentage: u32,
    selection_index: u32,
) -> Split {
    compute(
        check_amount,
        f64::from(tip_percentage),
        f64::from(effective_count(selection_index)),
    )
}

/// Splits a check from already-validated inputs.
///
/// ## User Workflow
/// ```text
/// Amount field: $100.00 ──┐
/// Tip picker:   20%     ──┼──► split_check ← THIS FUNCTION
/// People picker: 4      ──┘          │
///                                    ▼
///                 Amount per person: $30.00
///                 Total amount:      $120.00
/// ```
pub fn split_check(
    check_amount: CheckAmount,
    tip: TipPercentage,
    people: PeopleCount,
) -> Split {
    compute(
        check_amount.value(),
        f64::from(tip.points()),
        f64::from(people.get()),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_check() {
        let split = compute(0.0, 20.0, 2.0);
        assert_eq!(split.tip_value, 0.0);
        assert_eq!(split.total_with_tip, 0.0);
        assert_eq!(split.amount_per_person, 0.0);
    }

    #[test]
    fn test_twenty_percent_four_people() {
        let split = compute(100.0, 20.0, 4.0);
        assert_eq!(split.tip_value, 20.0);
        assert_eq!(split.total_with_tip, 120.0);
        assert_eq!(split.amount_per_person, 30.0);
    }

    #[test]
    fn test_no_tip_is_identity() {
        let split = compute(50.0, 0.0, 2.0);
        assert_eq!(split.total_with_tip, 50.0);
        assert_eq!(split.amount_per_person, 25.0);
    }

    #[test]
    fn test_selection_index_zero_means_two_people() {
        let split = compute_for_selection(50.0, 0, 0);
        assert_eq!(split.amount_per_person, 25.0);
        assert!(split.amount_per_person.is_finite());
    }

    #[test]
    fn test_operation_order_is_preserved() {
        let check: f64 = 33.33;
        let tip: f64 = 15.0;
        let expected_tip = check / 100.0 * tip;
        let expected_total = check + expected_tip;

        let split = compute(check, tip, 3.0);
        assert_eq!(split.tip_value.to_bits(), expected_tip.to_bits());
        assert_eq!(split.total_with_tip.to_bits(), expected_total.to_bits());
        assert_eq!(
            split.amount_per_person.to_bits(),
            (expected_total / 3.0).to_bits()
        );
    }

    #[test]
    fn test_tip_above_hundred_scales_linearly() {
        let split = compute(20.0, 150.0, 2.0);
        assert_eq!(split.tip_value, 30.0);
        assert_eq!(split.total_with_tip, 50.0);
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let split = compute(f64::NAN, 20.0, 2.0);
        assert!(split.total_with_tip.is_nan());
        assert!(split.amount_per_person.is_nan());

        let split = compute(f64::INFINITY, 20.0, 2.0);
        assert_eq!(split.total_with_tip, f64::INFINITY);
        assert_eq!(split.amount_per_person, f64::INFINITY);

        let split = compute(10.0, 20.0, f64::NAN);
        assert!(split.amount_per_person.is_nan());
    }

    #[test]
    fn test_people_below_one_clamped() {
        let split = compute(12.0, 0.0, 0.0);
        assert_eq!(split.amount_per_person, 12.0);

        let split = compute(12.0, 0.0, -3.0);
        assert_eq!(split.amount_per_person, 12.0);
    }

    #[test]
    fn test_typed_entry_point_matches_raw() {
        let amount = CheckAmount::new(87.45).unwrap();
        let tip = TipPercentage::new(18).unwrap();
        let people = PeopleCount::new(3).unwrap();

        assert_eq!(split_check(amount, tip, people), compute(87.45, 18.0, 3.0));
        assert_eq!(
            split_check(amount, tip, people),
            compute_for_selection(87.45, 18, people.selection())
        );
    }

    #[test]
    fn test_split_serializes_camel_case() {
        let json = serde_json::to_value(compute(100.0, 20.0, 4.0)).unwrap();
        assert_eq!(json["tipValue"], 20.0);
        assert_eq!(json["totalWithTip"], 120.0);
        assert_eq!(json["amountPerPerson"], 30.0);
    }
}
