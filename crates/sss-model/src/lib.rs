//! Data model for the Triple-S variable dictionary.
//!
//! A [`Dictionary`] is the fully parsed, in-memory form of a Triple-S survey
//! metadata document: an ordered sequence of [`Variable`]s, each with a type,
//! label, fixed-width column span and optional coded value list. The model is
//! produced once by `sss-ingest` and consumed read-only by `sss-syntax`.

pub mod dictionary;
pub mod variable;

pub use dictionary::Dictionary;
pub use variable::{Behavior, CodedValue, ColumnSpan, Variable, VariableType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_round_trips_through_json() {
        let dictionary = Dictionary::new(vec![Variable {
            name: "Q1".to_string(),
            vtype: VariableType::Single,
            label: "Question 1".to_string(),
            span: ColumnSpan::new(1, 2),
            values: vec![CodedValue::new(1, "Yes")],
        }]);
        let json = serde_json::to_string(&dictionary).expect("serialize dictionary");
        let round: Dictionary = serde_json::from_str(&json).expect("deserialize dictionary");
        assert_eq!(round, dictionary);
    }
}
