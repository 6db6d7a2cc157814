//! Quantity unit tables and conversion to canonical base units.
//!
//! Every convertible input is backed by a [`UnitTable`]: an ordered set of
//! supported units, each with a multiplicative factor to the quantity's base
//! unit. Conversions are strictly linear; range checks on the converted value
//! belong to the individual calculators.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::{InputMap, UnitMap, num};

/// Conversion constants shared across tables and formulas.
pub mod consts {
    pub const CM_TO_METER: f64 = 0.01;
    pub const INCH_TO_CM: f64 = 2.54;
    pub const LBS_TO_KG: f64 = 0.45359237;
    pub const UMOL_L_TO_MG_DL_CREATININE: f64 = 1.0 / 88.4;
    pub const UMOL_L_TO_MG_DL_BILIRUBIN: f64 = 1.0 / 17.1;
    pub const UREA_MMOL_L_TO_BUN_MG_DL: f64 = 2.8;
}

/// One supported unit: display label and factor to the base unit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitOption {
    pub symbol: String,
    pub label: String,
    pub to_base: f64,
}

impl UnitOption {
    pub fn new(symbol: &str, label: &str, to_base: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            label: label.to_string(),
            to_base,
        }
    }
}

/// One physical or laboratory quantity: its default unit and the units a user
/// may enter it in. The default unit must be one of `units`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitTable {
    pub default_unit: String,
    pub units: Vec<UnitOption>,
}

impl UnitTable {
    pub fn new(default_unit: &str, units: Vec<UnitOption>) -> Self {
        Self {
            default_unit: default_unit.to_string(),
            units,
        }
    }

    pub fn unit(&self, symbol: &str) -> Option<&UnitOption> {
        self.units.iter().find(|u| u.symbol == symbol)
    }
}

/// Convert one field's raw entered value to the quantity's base unit.
///
/// Returns `None` when the raw value is missing, blank, or not a finite
/// number (the field is treated as absent), or when the selected unit is not
/// in the table (a configuration error, logged, never a panic). A table with
/// no units passes the value through unchanged.
///
/// Negative and zero values pass through uninterpreted; range validation is
/// each calculator's responsibility.
pub fn convert_to_base(
    field: &str,
    inputs: &InputMap,
    units: &UnitMap,
    table: &UnitTable,
) -> Option<f64> {
    let value = num(inputs, field).filter(|v| v.is_finite())?;

    let selected = units
        .get(field)
        .map(String::as_str)
        .filter(|u| !u.is_empty())
        .unwrap_or(&table.default_unit);

    if table.units.is_empty() {
        return Some(value);
    }

    match table.unit(selected) {
        Some(unit) => Some(value * unit.to_base),
        None => {
            tracing::error!(
                field,
                unit = selected,
                supported = ?table.units.iter().map(|u| u.symbol.as_str()).collect::<Vec<_>>(),
                "selected unit is not in the quantity's unit table"
            );
            None
        }
    }
}

/// The currently selected unit for a field, falling back to the table default.
pub fn selected_unit<'a>(field: &str, units: &'a UnitMap, table: &'a UnitTable) -> &'a str {
    units
        .get(field)
        .map(String::as_str)
        .filter(|u| !u.is_empty())
        .unwrap_or(&table.default_unit)
}

pub static WEIGHT: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "kg",
        vec![
            UnitOption::new("kg", "kg", 1.0),
            UnitOption::new("lbs", "lbs", consts::LBS_TO_KG),
        ],
    )
});

pub static HEIGHT: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "cm",
        vec![
            UnitOption::new("cm", "cm", 1.0),
            UnitOption::new("in", "in", consts::INCH_TO_CM),
        ],
    )
});

pub static SERUM_CREATININE: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL", 1.0),
            UnitOption::new("umol/L", "µmol/L", consts::UMOL_L_TO_MG_DL_CREATININE),
        ],
    )
});

pub static ALBUMIN: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "g/dL",
        vec![
            UnitOption::new("g/dL", "g/dL", 1.0),
            UnitOption::new("g/L", "g/L", 0.1),
        ],
    )
});

pub static BILIRUBIN: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL", 1.0),
            UnitOption::new("umol/L", "µmol/L", consts::UMOL_L_TO_MG_DL_BILIRUBIN),
        ],
    )
});

/// Sodium in mEq/L; mmol/L is numerically identical for a monovalent ion.
pub static SODIUM_MEQ_L: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mEq/L",
        vec![
            UnitOption::new("mEq/L", "mEq/L", 1.0),
            UnitOption::new("mmol/L", "mmol/L", 1.0),
        ],
    )
});

/// BUN in mg/dL, or urea in mmol/L converted to its BUN equivalent.
pub static BUN_UREA: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL (BUN)", 1.0),
            UnitOption::new("mmol/L", "mmol/L (Urea)", consts::UREA_MMOL_L_TO_BUN_MG_DL),
        ],
    )
});

pub static GENERIC_MEQ_L: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new("mEq/L", vec![UnitOption::new("mEq/L", "mEq/L", 1.0)])
});

/// Platelets: x10⁹/L and x10³/µL are numerically identical.
pub static PLATELETS: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "x10^9/L",
        vec![
            UnitOption::new("x10^9/L", "x10⁹/L", 1.0),
            UnitOption::new("x10^3/uL", "x10³/µL", 1.0),
        ],
    )
});

pub static ENZYME_ACTIVITY: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new("U/L", vec![UnitOption::new("U/L", "U/L", 1.0)])
});

pub static HEMOGLOBIN: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "g/dL",
        vec![
            UnitOption::new("g/dL", "g/dL", 1.0),
            UnitOption::new("g/L", "g/L", 0.1),
        ],
    )
});

/// White cell count; base unit is cells/µL.
pub static WBC_COUNT: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "x10^3/uL",
        vec![
            UnitOption::new("x10^3/uL", "x10³/µL", 1000.0),
            UnitOption::new("x10^9/L", "x10⁹/L", 1000.0),
        ],
    )
});

/// Red cell count; base unit is cells/µL.
pub static RBC_COUNT: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "x10^6/uL",
        vec![
            UnitOption::new("x10^6/uL", "x10⁶/µL", 1_000_000.0),
            UnitOption::new("x10^12/L", "x10¹²/L", 1_000_000.0),
        ],
    )
});

pub static CHOLESTEROL: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL", 1.0),
            UnitOption::new("mmol/L", "mmol/L", 38.67),
        ],
    )
});

pub static TRIGLYCERIDES: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL", 1.0),
            UnitOption::new("mmol/L", "mmol/L", 88.57),
        ],
    )
});

pub static GLUCOSE: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "mg/dL",
        vec![
            UnitOption::new("mg/dL", "mg/dL", 1.0),
            UnitOption::new("mmol/L", "mmol/L", 18.018),
        ],
    )
});

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn maps(value: &str, unit: Option<&str>) -> (InputMap, UnitMap) {
        let mut inputs = BTreeMap::new();
        inputs.insert("x".to_string(), value.to_string());
        let mut units = BTreeMap::new();
        if let Some(u) = unit {
            units.insert("x".to_string(), u.to_string());
        }
        (inputs, units)
    }

    #[test]
    fn default_unit_is_identity() {
        let (inputs, units) = maps("70", None);
        assert_eq!(convert_to_base("x", &inputs, &units, &WEIGHT), Some(70.0));
    }

    #[test]
    fn conversion_is_linear() {
        let (inputs, units) = maps("100", Some("lbs"));
        let converted = convert_to_base("x", &inputs, &units, &WEIGHT).unwrap();
        assert!((converted - 100.0 * consts::LBS_TO_KG).abs() < 1e-12);
    }

    #[test]
    fn blank_value_is_absent() {
        let (inputs, units) = maps("   ", None);
        assert_eq!(convert_to_base("x", &inputs, &units, &WEIGHT), None);
    }

    #[test]
    fn non_numeric_value_is_absent() {
        let (inputs, units) = maps("seventy", None);
        assert_eq!(convert_to_base("x", &inputs, &units, &WEIGHT), None);
    }

    #[test]
    fn unknown_unit_is_a_config_error() {
        let (inputs, units) = maps("70", Some("stone"));
        assert_eq!(convert_to_base("x", &inputs, &units, &WEIGHT), None);
    }

    #[test]
    fn empty_table_passes_value_through() {
        let table = UnitTable::new("mmHg", vec![]);
        let (inputs, units) = maps("120", None);
        assert_eq!(convert_to_base("x", &inputs, &units, &table), Some(120.0));
    }

    #[test]
    fn negative_values_pass_through() {
        let (inputs, units) = maps("-5", None);
        assert_eq!(convert_to_base("x", &inputs, &units, &SODIUM_MEQ_L), Some(-5.0));
    }

    #[test]
    fn switching_units_rescales_consistently() {
        // Same raw value under unit A, then under unit B: both must equal the
        // direct conversion of that raw value in the chosen unit.
        let (inputs, units_cm) = maps("175", Some("cm"));
        let (_, units_in) = maps("175", Some("in"));
        let as_cm = convert_to_base("x", &inputs, &units_cm, &HEIGHT).unwrap();
        let as_in = convert_to_base("x", &inputs, &units_in, &HEIGHT).unwrap();
        assert_eq!(as_cm, 175.0);
        assert_eq!(as_in, 175.0 * consts::INCH_TO_CM);
    }

    #[test]
    fn table_defaults_are_members() {
        for table in [
            &*WEIGHT,
            &*HEIGHT,
            &*SERUM_CREATININE,
            &*ALBUMIN,
            &*BILIRUBIN,
            &*SODIUM_MEQ_L,
            &*BUN_UREA,
            &*GENERIC_MEQ_L,
            &*PLATELETS,
            &*ENZYME_ACTIVITY,
            &*HEMOGLOBIN,
            &*WBC_COUNT,
            &*RBC_COUNT,
            &*CHOLESTEROL,
            &*TRIGLYCERIDES,
            &*GLUCOSE,
        ] {
            assert!(table.unit(&table.default_unit).is_some());
            assert!(table.units.iter().all(|u| u.to_base > 0.0));
        }
    }
}
