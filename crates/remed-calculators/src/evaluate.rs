//! The evaluation driver: completeness gate, dispatch, interpretation.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Calculator;
use crate::input::{InputMap, UnitMap, raw};
use crate::result::Outcome;

/// A full evaluation: the outcome plus, for valid results, the calculator's
/// interpretation text.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub interpretation: Option<String>,
}

/// Evaluate a calculator against the current raw inputs and unit selections.
///
/// Any required active input that is missing or blank suppresses the result
/// entirely. Definitions are contractually panic-free; the `catch_unwind`
/// here is the boundary for programmer error, so a defective definition
/// degrades to feedback instead of taking the caller down.
pub fn evaluate(calc: &dyn Calculator, inputs: &InputMap, units: &UnitMap) -> Evaluation {
    for input in calc.active_inputs(inputs) {
        if input.required && raw(inputs, &input.id).is_none() {
            return Evaluation {
                outcome: Outcome::Incomplete,
                interpretation: None,
            };
        }
    }

    let outcome = match catch_unwind(AssertUnwindSafe(|| calc.calculate(inputs, units))) {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::error!(calculator = calc.id(), "panic during calculation");
            Outcome::invalid("Error during calculation.")
        }
    };

    let interpretation = match &outcome {
        Outcome::Value { value } => calc.interpret(value, inputs, units),
        _ => None,
    };

    Evaluation {
        outcome,
        interpretation,
    }
}
