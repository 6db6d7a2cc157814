use remed_storage::{SessionState, StorageError, Theme, View};

#[test]
fn round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut state = SessionState::new();
    state.current_view = View::LabValues;
    state.theme = Theme::Dark;
    state.select_calculator("anionGap").unwrap();
    state.set_input("anionGap", "sodium", "140").unwrap();
    state.set_unit("anionGap", "sodium", "mmol/L").unwrap();
    state.save_to(&path).unwrap();

    let mut loaded = SessionState::load_from(&path).unwrap();
    assert_eq!(loaded.current_view, View::LabValues);
    assert_eq!(loaded.theme, Theme::Dark);
    assert_eq!(loaded.selected_calculator.as_deref(), Some("anionGap"));
    assert_eq!(
        loaded.inputs_for("anionGap").unwrap().get("sodium").map(String::as_str),
        Some("140")
    );
    assert_eq!(
        loaded.units_for("anionGap").unwrap().get("sodium").map(String::as_str),
        Some("mmol/L")
    );
}

#[test]
fn missing_file_yields_fresh_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = SessionState::load_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(state.current_view, View::Calculators);
    assert!(state.selected_calculator.is_none());
    assert!(state.input_values.is_empty());
}

#[test]
fn corrupt_file_yields_fresh_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();
    let state = SessionState::load_from(&path).unwrap();
    assert!(state.selected_calculator.is_none());
}

#[test]
fn version_zero_state_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    // A pre-versioned file: no state_version, no theme.
    std::fs::write(
        &path,
        r#"{
            "current_view": "mnemonics",
            "selected_calculator": "bmi",
            "input_values": {},
            "input_units": {},
            "updated_at": "2024-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    let state = SessionState::load_from(&path).unwrap();
    assert_eq!(state.state_version, 1);
    assert_eq!(state.current_view, View::Mnemonics);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn future_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(
        &path,
        r#"{
            "state_version": 99,
            "current_view": "calculators",
            "selected_calculator": null,
            "input_values": {},
            "input_units": {},
            "theme": "light",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    match SessionState::load_from(&path) {
        Err(StorageError::UnsupportedVersion { found, supported }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, 1);
        }
        other => panic!("expected a version error, got {other:?}"),
    }
}

#[test]
fn save_overwrites_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut first = SessionState::new();
    first.set_input("bmi", "weight", "70").unwrap();
    first.save_to(&path).unwrap();

    let mut second = SessionState::load_from(&path).unwrap();
    second.set_input("bmi", "weight", "80").unwrap();
    second.save_to(&path).unwrap();

    let mut reloaded = SessionState::load_from(&path).unwrap();
    assert_eq!(
        reloaded.inputs_for("bmi").unwrap().get("weight").map(String::as_str),
        Some("80")
    );
}
