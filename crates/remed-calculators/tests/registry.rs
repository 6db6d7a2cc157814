use std::collections::BTreeSet;

use remed_calculators::defaults::{default_inputs, default_units};
use remed_calculators::evaluate::evaluate;
use remed_calculators::input::{InputKind, InputMap, NumberUnit, UnitMap};
use remed_calculators::result::Outcome;
use remed_calculators::{all_calculators, calculator, require_calculator, search_calculators};

#[test]
fn registry_has_every_calculator_once() {
    let calculators = all_calculators();
    assert_eq!(calculators.len(), 59);

    let ids: BTreeSet<&str> = calculators.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), calculators.len(), "duplicate calculator id");
}

#[test]
fn every_definition_is_well_formed() {
    for calc in all_calculators() {
        assert!(!calc.id().is_empty());
        assert!(!calc.name().is_empty());
        assert!(!calc.inputs().is_empty(), "{} has no inputs", calc.id());

        let mut seen = BTreeSet::new();
        for input in calc.inputs() {
            assert!(
                seen.insert(input.id.clone()),
                "{} repeats input id {}",
                calc.id(),
                input.id
            );
            match &input.kind {
                InputKind::Select { options, default } => {
                    assert!(!options.is_empty(), "{}.{} has no options", calc.id(), input.id);
                    assert!(
                        options.iter().any(|o| o.value == *default),
                        "{}.{} default '{default}' names no option",
                        calc.id(),
                        input.id
                    );
                }
                InputKind::Number { unit, .. } => {
                    if let NumberUnit::Table(table) = unit {
                        assert!(
                            table.unit(&table.default_unit).is_some(),
                            "{}.{} table default is not a member",
                            calc.id(),
                            input.id
                        );
                        assert!(table.units.iter().all(|u| u.to_base > 0.0));
                    }
                }
            }
        }
    }
}

#[test]
fn empty_inputs_always_suppress_the_result() {
    let empty = InputMap::new();
    let units = UnitMap::new();
    for calc in all_calculators() {
        let evaluation = evaluate(calc.as_ref(), &empty, &units);
        assert_eq!(
            evaluation.outcome,
            Outcome::Incomplete,
            "{} should be incomplete with no inputs",
            calc.id()
        );
        assert!(evaluation.interpretation.is_none());
    }
}

#[test]
fn default_state_never_produces_feedback() {
    // Seeded defaults leave number fields empty: each calculator either
    // stays quiet or (for pure-select scores) produces a valid result, but
    // never corrective feedback and never a panic.
    for calc in all_calculators() {
        let inputs = default_inputs(calc.as_ref());
        let units = default_units(calc.as_ref());
        let evaluation = evaluate(calc.as_ref(), &inputs, &units);
        assert!(
            !matches!(evaluation.outcome, Outcome::Invalid { .. }),
            "{} produced feedback from pristine defaults: {:?}",
            calc.id(),
            evaluation.outcome
        );
    }
}

#[test]
fn dropping_any_single_default_keeps_the_engine_quiet() {
    // Blanking one field of the default state must never turn into feedback
    // or a crash; a missing required field suppresses the result entirely.
    for calc in all_calculators() {
        let defaults = default_inputs(calc.as_ref());
        let units = default_units(calc.as_ref());
        for input in calc.inputs() {
            let mut inputs = defaults.clone();
            inputs.insert(input.id.clone(), String::new());
            let evaluation = evaluate(calc.as_ref(), &inputs, &units);
            if input.required && calc.active_inputs(&inputs).iter().any(|i| i.id == input.id) {
                assert!(
                    !matches!(evaluation.outcome, Outcome::Invalid { .. }),
                    "{} turned a missing '{}' into feedback",
                    calc.id(),
                    input.id
                );
            }
        }
    }
}

#[test]
fn repeated_evaluation_is_deterministic() {
    for calc in all_calculators() {
        let inputs = default_inputs(calc.as_ref());
        let units = default_units(calc.as_ref());
        let first = evaluate(calc.as_ref(), &inputs, &units);
        let second = evaluate(calc.as_ref(), &inputs, &units);
        assert_eq!(first.outcome, second.outcome, "{}", calc.id());
        assert_eq!(first.interpretation, second.interpretation, "{}", calc.id());
    }
}

#[test]
fn defaults_are_idempotent() {
    for calc in all_calculators() {
        assert_eq!(default_inputs(calc.as_ref()), default_inputs(calc.as_ref()));
        assert_eq!(default_units(calc.as_ref()), default_units(calc.as_ref()));
    }
}

#[test]
fn default_units_follow_the_tables() {
    let bmi = calculator("bmi").unwrap();
    let units = default_units(bmi.as_ref());
    assert_eq!(units.get("weight").map(String::as_str), Some("kg"));
    assert_eq!(units.get("height").map(String::as_str), Some("cm"));

    let map = calculator("map").unwrap();
    let units = default_units(map.as_ref());
    assert_eq!(units.get("sbp").map(String::as_str), Some("mmHg"));
}

#[test]
fn lookup_and_search() {
    assert!(calculator("bmi").is_some());
    assert!(calculator("no-such-calculator").is_none());
    assert!(require_calculator("no-such-calculator").is_err());

    let hits = search_calculators("bmi");
    assert!(hits.iter().any(|c| c.id() == "bmi"));

    let hits = search_calculators("GLASGOW");
    assert!(hits.iter().any(|c| c.id() == "gcs"));

    let all = search_calculators("");
    assert_eq!(all.len(), 59);
    let names: Vec<&str> = all.iter().map(|c| c.name()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "search results are sorted by name");
}
