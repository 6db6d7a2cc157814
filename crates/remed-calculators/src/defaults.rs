//! Initial input values and unit selections for a calculator.
//!
//! These seed a calculator's per-session state on first selection and are
//! what "clear inputs" resets to.

use crate::Calculator;
use crate::input::{InputKind, InputMap, NumberUnit, UnitMap};

/// The initial value set: number inputs start empty (the user must enter
/// them explicitly); select inputs start at their declared default, falling
/// back to the first option when the default names no real option.
pub fn default_inputs(calc: &dyn Calculator) -> InputMap {
    let mut defaults = InputMap::new();
    for input in calc.inputs() {
        let value = match &input.kind {
            InputKind::Number { .. } => String::new(),
            InputKind::Select { options, default } => {
                if options.iter().any(|o| o.value == *default) {
                    default.clone()
                } else if let Some(first) = options.first() {
                    first.value.clone()
                } else {
                    String::new()
                }
            }
        };
        defaults.insert(input.id.clone(), value);
    }
    defaults
}

/// The initial unit selection set: table-backed inputs start at the table's
/// default unit; plain-label inputs carry that label; unitless inputs are
/// omitted.
pub fn default_units(calc: &dyn Calculator) -> UnitMap {
    let mut defaults = UnitMap::new();
    for input in calc.inputs() {
        if let InputKind::Number { unit, .. } = &input.kind {
            match unit {
                NumberUnit::Table(table) => {
                    defaults.insert(input.id.clone(), table.default_unit.clone());
                }
                NumberUnit::Label(label) => {
                    defaults.insert(input.id.clone(), label.clone());
                }
                NumberUnit::None => {}
            }
        }
    }
    defaults
}
