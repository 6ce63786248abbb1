//! # Split Session
//!
//! Holds the three inputs of one splitting session and derives the outputs
//! from them on demand.
//!
//! ## Input / Output Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Presentation Action      Session Call             State Change         │
//! │  ───────────────────      ────────────             ────────────         │
//! │                                                                         │
//! │  Type amount ────────────► set_check_amount_text ► inputs.check_amount  │
//! │                                                                         │
//! │  Pick tip ───────────────► set_tip_percentage ───► inputs.tip           │
//! │                                                                         │
//! │  Pick people ────────────► set_people_selection ─► inputs.people        │
//! │                                                                         │
//! │  Redraw ─────────────────► split() ──────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: No derived value is stored. Every read of split(),              │
//! │        amount_per_person() or total_with_tip() recomputes.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::split::{split_check, Split};
use crate::types::{CheckAmount, PeopleCount, TipPercentage};
use crate::validation::{parse_check_amount, ValidationResult};

/// The three inputs a split is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SplitInputs {
    pub check_amount: CheckAmount,
    pub tip_percentage: TipPercentage,
    pub people: PeopleCount,
}

impl SplitInputs {
    /// Derives the split for these inputs.
    pub fn split(&self) -> Split {
        split_check(self.check_amount, self.tip_percentage, self.people)
    }
}

/// One edit made by the input surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputChange {
    CheckAmount(CheckAmount),
    TipPercentage(TipPercentage),
    People(PeopleCount),
}

/// A single in-memory splitting session.
///
/// ## Invariants
/// - Inputs are always inside their domains (enforced by the input types)
/// - Outputs are never cached; they cannot drift from the inputs
/// - `reset` restores the inputs the session was created with
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSession {
    inputs: SplitInputs,
    initial: SplitInputs,
}

impl SplitSession {
    /// Starts a session with the stock defaults: $0, 20% tip, 2 people.
    pub fn new() -> Self {
        Self::with_inputs(SplitInputs::default())
    }

    /// Starts a session from caller-chosen defaults.
    pub fn with_inputs(inputs: SplitInputs) -> Self {
        SplitSession {
            inputs,
            initial: inputs,
        }
    }

    pub fn inputs(&self) -> SplitInputs {
        self.inputs
    }

    pub fn check_amount(&self) -> CheckAmount {
        self.inputs.check_amount
    }

    pub fn tip_percentage(&self) -> TipPercentage {
        self.inputs.tip_percentage
    }

    pub fn people(&self) -> PeopleCount {
        self.inputs.people
    }

    /// Applies one input edit.
    ///
    /// ## Returns
    /// `true` if the input actually changed, so the caller knows whether the
    /// outputs need to be redrawn.
    pub fn apply(&mut self, change: InputChange) -> bool {
        let before = self.inputs;
        match change {
            InputChange::CheckAmount(amount) => self.inputs.check_amount = amount,
            InputChange::TipPercentage(tip) => self.inputs.tip_percentage = tip,
            InputChange::People(people) => self.inputs.people = people,
        }
        self.inputs != before
    }

    pub fn set_check_amount(&mut self, amount: CheckAmount) -> bool {
        self.apply(InputChange::CheckAmount(amount))
    }

    pub fn set_tip_percentage(&mut self, tip: TipPercentage) -> bool {
        self.apply(InputChange::TipPercentage(tip))
    }

    pub fn set_people(&mut self, people: PeopleCount) -> bool {
        self.apply(InputChange::People(people))
    }

    /// Parses amount text and applies it.
    ///
    /// ## Behavior
    /// - Valid text: the amount is replaced
    /// - Invalid text: the previous amount is kept and the error returned
    pub fn set_check_amount_text(&mut self, text: &str) -> ValidationResult<bool> {
        let amount = parse_check_amount(text)?;
        Ok(self.set_check_amount(amount))
    }

    /// Selects people by the picker's 0-based index.
    pub fn set_people_selection(&mut self, index: u32) -> ValidationResult<bool> {
        let people = PeopleCount::from_selection(index)?;
        Ok(self.set_people(people))
    }

    /// Restores the inputs the session started with.
    pub fn reset(&mut self) -> bool {
        let changed = self.inputs != self.initial;
        self.inputs = self.initial;
        changed
    }

    /// Derives the split for the current inputs.
    pub fn split(&self) -> Split {
        self.inputs.split()
    }

    pub fn amount_per_person(&self) -> f64 {
        self.split().amount_per_person
    }

    pub fn total_with_tip(&self) -> f64 {
        self.split().total_with_tip
    }
}

impl Default for SplitSession {
    fn default() -> Self {
        Self::new()
    }
}
