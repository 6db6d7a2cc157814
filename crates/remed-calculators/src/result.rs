//! Calculation outcomes.
//!
//! A calculation has exactly three legal results: nothing to show yet
//! (incomplete input), corrective feedback (invalid input), or a value. The
//! discrimination is explicit: a string-valued classification result is a
//! value, never feedback.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named component of a multi-value result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubValue {
    pub key: String,
    pub value: f64,
}

/// A valid calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Value {
    /// A single numeric result.
    Number(f64),
    /// A classification code or other textual result (e.g. "C2M5").
    Text(String),
    /// Several named numeric sub-results, matched by key against the
    /// calculator's result units.
    Multi(Vec<SubValue>),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Look up a sub-result of a multi-value result by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        match self {
            Value::Multi(values) => values.iter().find(|v| v.key == key).map(|v| v.value),
            _ => None,
        }
    }
}

/// The outcome of running a calculator against the current inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    /// A required input is absent; display nothing.
    Incomplete,
    /// An input is present but out of domain; the message is corrective
    /// feedback, rendered distinctly and never interpreted.
    Invalid { message: String },
    /// A valid result.
    Value { value: Value },
}

impl Outcome {
    pub fn number(value: f64) -> Self {
        Outcome::Value {
            value: Value::Number(value),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Outcome::Value {
            value: Value::Text(value.into()),
        }
    }

    pub fn multi(pairs: &[(&str, f64)]) -> Self {
        Outcome::Value {
            value: Value::Multi(
                pairs
                    .iter()
                    .map(|(key, value)| SubValue {
                        key: key.to_string(),
                        value: *value,
                    })
                    .collect(),
            ),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Outcome::Invalid {
            message: message.into(),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Value { value } => Some(value),
            _ => None,
        }
    }
}

/// The unit annotation of a multi-value result component.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubUnit {
    pub key: String,
    pub unit: String,
}

/// The display unit(s) of a calculator's result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum ResultUnit {
    /// Unitless (classification codes, indices).
    None,
    Single(String),
    /// One unit per sub-result key of a multi-value result.
    Multi(Vec<SubUnit>),
}

impl ResultUnit {
    pub fn single(unit: &str) -> Self {
        ResultUnit::Single(unit.to_string())
    }

    pub fn multi(pairs: &[(&str, &str)]) -> Self {
        ResultUnit::Multi(
            pairs
                .iter()
                .map(|(key, unit)| SubUnit {
                    key: key.to_string(),
                    unit: unit.to_string(),
                })
                .collect(),
        )
    }
}

/// Display-only reference material attached to a calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Details {
    pub formula: Option<String>,
    pub description: Option<String>,
    pub notes: Vec<String>,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formula(mut self, formula: &str) -> Self {
        self.formula = Some(formula.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_serialize_with_explicit_discriminants() {
        let incomplete = serde_json::to_value(Outcome::Incomplete).unwrap();
        assert_eq!(incomplete["outcome"], "incomplete");

        let invalid = serde_json::to_value(Outcome::invalid("Values cannot be negative.")).unwrap();
        assert_eq!(invalid["outcome"], "invalid");
        assert_eq!(invalid["message"], "Values cannot be negative.");

        let value = serde_json::to_value(Outcome::number(16.0)).unwrap();
        assert_eq!(value["outcome"], "value");
        assert_eq!(value["value"]["type"], "number");
        assert_eq!(value["value"]["value"], 16.0);
    }

    #[test]
    fn classification_text_is_a_value_not_feedback() {
        let outcome = Outcome::text("C2M5");
        assert!(outcome.value().is_some());
        let round_trip: Outcome =
            serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();
        assert_eq!(round_trip, outcome);
    }

    #[test]
    fn multi_values_look_up_by_key() {
        let outcome = Outcome::multi(&[("bmr", 1648.75), ("tdee", 1978.5)]);
        let value = outcome.value().unwrap();
        assert_eq!(value.get("tdee"), Some(1978.5));
        assert_eq!(value.get("missing"), None);
    }
}
