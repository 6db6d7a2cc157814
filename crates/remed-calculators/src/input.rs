//! Input descriptors and the raw value/unit maps the engine evaluates over.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::units::UnitTable;

/// Raw user-entered values, keyed by input id. Values are the literal entered
/// text; numbers are parsed at calculation time.
pub type InputMap = BTreeMap<String, String>;

/// Currently selected unit symbols, keyed by input id.
pub type UnitMap = BTreeMap<String, String>;

/// One choice in a select input. `value` is the stored token (often an
/// encoded point contribution), `label` the display text.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Shorthand constructor for a select option.
pub fn opt(value: &str, label: &str) -> SelectOption {
    SelectOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// The ubiquitous No (0) / Yes (1) pair.
pub fn yes_no() -> Vec<SelectOption> {
    vec![opt("0", "No"), opt("1", "Yes")]
}

/// How a number input is unit-qualified.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum NumberUnit {
    /// Dimensionless (e.g. INR, an index).
    None,
    /// A fixed display label with no conversion (e.g. "mmHg", "years").
    Label(String),
    /// A convertible quantity.
    Table(UnitTable),
}

/// The kind of an input field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum InputKind {
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
        unit: NumberUnit,
    },
    Select {
        options: Vec<SelectOption>,
        default: String,
    },
}

/// One input field of a calculator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputDescriptor {
    pub id: String,
    pub label: String,
    /// Optional inputs do not block calculation when left blank; the
    /// calculator substitutes a documented default.
    pub required: bool,
    pub kind: InputKind,
}

impl InputDescriptor {
    pub fn number(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            required: true,
            kind: InputKind::Number {
                min: None,
                max: None,
                step: None,
                unit: NumberUnit::None,
            },
        }
    }

    pub fn select(id: &str, label: &str, default: &str, options: Vec<SelectOption>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            required: true,
            kind: InputKind::Select {
                options,
                default: default.to_string(),
            },
        }
    }

    pub fn with_min(mut self, value: f64) -> Self {
        if let InputKind::Number { min, .. } = &mut self.kind {
            *min = Some(value);
        }
        self
    }

    pub fn with_max(mut self, value: f64) -> Self {
        if let InputKind::Number { max, .. } = &mut self.kind {
            *max = Some(value);
        }
        self
    }

    pub fn with_step(mut self, value: f64) -> Self {
        if let InputKind::Number { step, .. } = &mut self.kind {
            *step = Some(value);
        }
        self
    }

    /// Fixed display unit, no conversion.
    pub fn with_unit(mut self, label: &str) -> Self {
        if let InputKind::Number { unit, .. } = &mut self.kind {
            *unit = NumberUnit::Label(label.to_string());
        }
        self
    }

    /// Convertible quantity backed by a unit table.
    pub fn with_units(mut self, table: &UnitTable) -> Self {
        if let InputKind::Number { unit, .. } = &mut self.kind {
            *unit = NumberUnit::Table(table.clone());
        }
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// The trimmed raw value of a field, or `None` when missing or blank.
pub fn raw<'a>(inputs: &'a InputMap, id: &str) -> Option<&'a str> {
    inputs
        .get(id)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// The field parsed as a number, or `None` when missing, blank, or not
/// numeric.
pub fn num(inputs: &InputMap, id: &str) -> Option<f64> {
    raw(inputs, id)?.parse::<f64>().ok()
}

/// True when every listed field has a non-blank value.
pub fn all_present(inputs: &InputMap, ids: &[&str]) -> bool {
    ids.iter().all(|id| raw(inputs, id).is_some())
}

/// Sum the numeric values of the listed select fields. `None` when any is
/// missing or not numeric, in which case the caller suppresses the result
/// entirely.
pub fn sum_selects(inputs: &InputMap, ids: &[&str]) -> Option<f64> {
    let mut total = 0.0;
    for id in ids {
        total += num(inputs, id)?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_trims_and_rejects_blank() {
        let mut inputs = InputMap::new();
        inputs.insert("a".into(), "  42 ".into());
        inputs.insert("b".into(), "   ".into());
        assert_eq!(raw(&inputs, "a"), Some("42"));
        assert_eq!(raw(&inputs, "b"), None);
        assert_eq!(raw(&inputs, "missing"), None);
    }

    #[test]
    fn sum_selects_requires_every_field() {
        let mut inputs = InputMap::new();
        inputs.insert("a".into(), "2".into());
        inputs.insert("b".into(), "3".into());
        assert_eq!(sum_selects(&inputs, &["a", "b"]), Some(5.0));
        assert_eq!(sum_selects(&inputs, &["a", "b", "c"]), None);
    }
}
