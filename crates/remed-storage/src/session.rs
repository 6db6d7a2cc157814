//! The per-user session state.
//!
//! One explicit value covers everything the UI remembers between launches:
//! the active view, the selected calculator, every calculator's entered
//! values and unit selections, and the theme. The presentation layer owns
//! this value and persists it at an explicit save/load boundary.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use remed_calculators::defaults::{default_inputs, default_units};
use remed_calculators::error::CalculatorError;
use remed_calculators::input::{InputMap, UnitMap};
use remed_calculators::require_calculator;

use crate::error::StorageError;
use crate::store::{load_state, save_state, state_dir};

/// Current state-file version. Bump when adding fields or changing shape,
/// with a matching entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// The browsing panels of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Calculators,
    Abbreviations,
    Terminology,
    LabValues,
    Mnemonics,
    Nutrition,
    Procedures,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Schema version. Missing or 0 = pre-versioned state.
    #[serde(default)]
    pub state_version: u32,
    pub current_view: View,
    pub selected_calculator: Option<String>,
    /// Entered raw values, keyed by calculator id then input id.
    pub input_values: BTreeMap<String, InputMap>,
    /// Selected unit symbols, keyed by calculator id then input id.
    pub input_units: BTreeMap<String, UnitMap>,
    #[serde(default)]
    pub theme: Theme,
    pub updated_at: jiff::Timestamp,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            state_version: CURRENT_VERSION,
            current_view: View::default(),
            selected_calculator: None,
            input_values: BTreeMap::new(),
            input_units: BTreeMap::new(),
            theme: Theme::default(),
            updated_at: jiff::Timestamp::now(),
        }
    }

    /// Select a calculator, seeding its value and unit maps from the
    /// registry defaults on first visit.
    pub fn select_calculator(&mut self, id: &str) -> Result<(), StorageError> {
        self.seed(id)?;
        self.selected_calculator = Some(id.to_string());
        Ok(())
    }

    /// The current value map for a calculator, seeding defaults on first
    /// access.
    pub fn inputs_for(&mut self, id: &str) -> Result<&InputMap, StorageError> {
        self.seed(id)?;
        Ok(&self.input_values[id])
    }

    /// The current unit map for a calculator, seeding defaults on first
    /// access.
    pub fn units_for(&mut self, id: &str) -> Result<&UnitMap, StorageError> {
        self.seed(id)?;
        Ok(&self.input_units[id])
    }

    /// Record one keystroke's worth of input. Last write wins.
    pub fn set_input(&mut self, calc_id: &str, input_id: &str, value: &str) -> Result<(), StorageError> {
        self.require_input(calc_id, input_id)?;
        self.seed(calc_id)?;
        self.input_values
            .get_mut(calc_id)
            .expect("seeded above")
            .insert(input_id.to_string(), value.to_string());
        Ok(())
    }

    /// Record a unit selection change. The stored raw value is left
    /// untouched; switching units never rescales what the user typed.
    pub fn set_unit(&mut self, calc_id: &str, input_id: &str, unit: &str) -> Result<(), StorageError> {
        self.require_input(calc_id, input_id)?;
        self.seed(calc_id)?;
        self.input_units
            .get_mut(calc_id)
            .expect("seeded above")
            .insert(input_id.to_string(), unit.to_string());
        Ok(())
    }

    /// Reset a calculator's values and units to the registry defaults.
    /// Idempotent: clearing twice leaves the same state as clearing once.
    pub fn clear_inputs(&mut self, calc_id: &str) -> Result<(), StorageError> {
        let calc = require_calculator(calc_id)?;
        self.input_values
            .insert(calc_id.to_string(), default_inputs(calc.as_ref()));
        self.input_units
            .insert(calc_id.to_string(), default_units(calc.as_ref()));
        Ok(())
    }

    fn seed(&mut self, calc_id: &str) -> Result<(), StorageError> {
        let calc = require_calculator(calc_id)?;
        self.input_values
            .entry(calc_id.to_string())
            .or_insert_with(|| default_inputs(calc.as_ref()));
        self.input_units
            .entry(calc_id.to_string())
            .or_insert_with(|| default_units(calc.as_ref()));
        Ok(())
    }

    fn require_input(&self, calc_id: &str, input_id: &str) -> Result<(), StorageError> {
        let calc = require_calculator(calc_id)?;
        if calc.inputs().iter().any(|i| i.id == input_id) {
            Ok(())
        } else {
            Err(CalculatorError::UnknownInput {
                calculator_id: calc_id.to_string(),
                input_id: input_id.to_string(),
            }
            .into())
        }
    }

    /// The default on-disk location of the session file.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        Ok(state_dir()?.join("session.json"))
    }

    /// Load from the default location. A missing file yields a fresh state;
    /// a corrupt one is discarded with a warning.
    pub fn load() -> Result<Self, StorageError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        // Parse as raw JSON first so migrations can run before
        // deserializing into the current shape.
        let raw: serde_json::Value = match load_state(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding unreadable session state");
                return Ok(Self::new());
            }
        };
        let on_disk_version = raw
            .get("state_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(raw, on_disk_version)?;
        match serde_json::from_value(migrated) {
            Ok(state) => Ok(state),
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding malformed session state");
                Ok(Self::new())
            }
        }
    }

    /// Save to the default location.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save to an explicit path, stamping the version and timestamp.
    pub fn save_to(&mut self, path: &Path) -> Result<(), StorageError> {
        self.state_version = CURRENT_VERSION;
        self.updated_at = jiff::Timestamp::now();
        save_state(path, self)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut raw: serde_json::Value, from_version: u32) -> Result<serde_json::Value, StorageError> {
    if from_version > CURRENT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: theme preference added; older files get the default.
    if from_version < 1 {
        let obj = raw.as_object_mut().ok_or(StorageError::MalformedState)?;
        obj.entry("theme")
            .or_insert(serde_json::Value::String("light".to_string()));
        obj.insert(
            "state_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        info!("migrated session state v0 → v1 (added theme)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_calculator_seeds_defaults() {
        let mut state = SessionState::new();
        state.select_calculator("bmi").unwrap();
        let inputs = state.inputs_for("bmi").unwrap();
        assert_eq!(inputs.get("weight").map(String::as_str), Some(""));
        let units = state.units_for("bmi").unwrap().clone();
        assert_eq!(units.get("weight").map(String::as_str), Some("kg"));
    }

    #[test]
    fn unknown_calculator_is_an_error() {
        let mut state = SessionState::new();
        assert!(state.select_calculator("nope").is_err());
        assert!(state.set_input("nope", "x", "1").is_err());
    }

    #[test]
    fn unknown_input_is_an_error() {
        let mut state = SessionState::new();
        assert!(state.set_input("bmi", "girth", "90").is_err());
    }

    #[test]
    fn switching_units_keeps_the_raw_value() {
        let mut state = SessionState::new();
        state.set_input("bmi", "weight", "154").unwrap();
        state.set_unit("bmi", "weight", "lbs").unwrap();
        let inputs = state.inputs_for("bmi").unwrap();
        assert_eq!(inputs.get("weight").map(String::as_str), Some("154"));
        let units = state.units_for("bmi").unwrap();
        assert_eq!(units.get("weight").map(String::as_str), Some("lbs"));
    }

    #[test]
    fn clear_inputs_is_idempotent() {
        let mut state = SessionState::new();
        state.set_input("bmi", "weight", "80").unwrap();
        state.set_unit("bmi", "weight", "lbs").unwrap();

        state.clear_inputs("bmi").unwrap();
        let once_values = state.input_values["bmi"].clone();
        let once_units = state.input_units["bmi"].clone();

        state.clear_inputs("bmi").unwrap();
        assert_eq!(state.input_values["bmi"], once_values);
        assert_eq!(state.input_units["bmi"], once_units);
        assert_eq!(once_values.get("weight").map(String::as_str), Some(""));
        assert_eq!(once_units.get("weight").map(String::as_str), Some("kg"));
    }
}
