//! # Output Surface
//!
//! Renders a session's derived values as text or as a JSON report.
//!
//! ```text
//! Check amount:      $100.00
//! Tip:               20%
//! Split between:     4 people
//!
//! Amount per person: $30.00
//! Total amount:      $120.00
//! ```

use serde::Serialize;
use wesplit_core::{CurrencyCode, Split, SplitInputs, SplitSession};

use crate::format::format_currency;

/// Text block for the current session state.
pub fn render_text(session: &SplitSession, currency: &CurrencyCode) -> String {
    let inputs = session.inputs();
    let split = session.split();

    format!(
        "Check amount:      {}\n\
         Tip:               {}\n\
         Split between:     {}\n\
         \n\
         Amount per person: {}\n\
         Total amount:      {}\n",
        format_currency(inputs.check_amount.value(), currency),
        inputs.tip_percentage,
        inputs.people,
        format_currency(split.amount_per_person, currency),
        format_currency(split.total_with_tip, currency),
    )
}

/// Machine-readable report for `--json`.
///
/// ## Serialization
/// ```json
/// {
///   "currency": "USD",
///   "inputs": { "checkAmount": 100.0, "tipPercentage": 20, "people": 4 },
///   "split": { "tipValue": 20.0, "totalWithTip": 120.0, "amountPerPerson": 30.0 },
///   "formatted": { "amountPerPerson": "$30.00", "totalWithTip": "$120.00" }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub currency: CurrencyCode,
    pub inputs: SplitInputs,
    pub split: Split,
    pub formatted: FormattedSplit,
}

/// Display strings for the two derived values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSplit {
    pub amount_per_person: String,
    pub total_with_tip: String,
}

impl SplitReport {
    pub fn new(session: &SplitSession, currency: &CurrencyCode) -> Self {
        let split = session.split();
        SplitReport {
            currency: currency.clone(),
            inputs: session.inputs(),
            split,
            formatted: FormattedSplit {
                amount_per_person: format_currency(split.amount_per_person, currency),
                total_with_tip: format_currency(split.total_with_tip, currency),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use wesplit_core::PeopleCount;

    use super::*;

    fn sample_session() -> SplitSession {
        let mut session = SplitSession::new();
        session.set_check_amount_text("100").unwrap();
        session.set_people(PeopleCount::new(4).unwrap());
        session
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_session(), &CurrencyCode::default());
        assert!(text.contains("Check amount:      $100.00\n"));
        assert!(text.contains("Tip:               20%\n"));
        assert!(text.contains("Split between:     4 people\n"));
        assert!(text.contains("Amount per person: $30.00\n"));
        assert!(text.contains("Total amount:      $120.00\n"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = SplitReport::new(&sample_session(), &CurrencyCode::new("EUR").unwrap());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["inputs"]["checkAmount"], 100.0);
        assert_eq!(json["inputs"]["tipPercentage"], 20);
        assert_eq!(json["inputs"]["people"], 4);
        assert_eq!(json["split"]["amountPerPerson"], 30.0);
        assert_eq!(json["formatted"]["totalWithTip"], "€120.00");
    }
}
