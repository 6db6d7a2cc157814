use remed_core::schema::doc_type;
use remed_search::{build_index, find_by_id, find_by_type, search};

#[test]
fn calculators_are_indexed_and_findable() {
    let index = build_index().unwrap();
    let hits = search(&index, "body mass index", 10).unwrap();
    assert!(hits.iter().any(|h| h.id == "bmi" && h.doc_type == doc_type::CALCULATOR));
}

#[test]
fn abbreviations_surface_both_ca_meanings() {
    let index = build_index().unwrap();
    let hits = search(&index, "calcium", 20).unwrap();
    assert!(hits.iter().any(|h| h.id == "calcium"));
    // The oncology record mentions calcium in its ambiguity note.
    assert!(hits.iter().any(|h| h.id == "cancer"));
}

#[test]
fn find_by_type_returns_only_that_catalog() {
    let index = build_index().unwrap();
    let hits = find_by_type(&index, doc_type::MNEMONIC, 100).unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.doc_type == doc_type::MNEMONIC));
}

#[test]
fn unknown_doc_type_is_rejected() {
    let index = build_index().unwrap();
    assert!(find_by_type(&index, "recipes", 10).is_err());
}

#[test]
fn find_by_id_round_trips() {
    let index = build_index().unwrap();
    let hit = find_by_id(&index, "meldNa").unwrap().unwrap();
    assert_eq!(hit.title, "MELD-Na Score");
    assert!(find_by_id(&index, "definitely-not-a-doc").unwrap().is_none());
}

#[test]
fn mnemonic_expansions_are_searchable() {
    let index = build_index().unwrap();
    let hits = search(&index, "ethylene glycol", 10).unwrap();
    assert!(hits.iter().any(|h| h.id == "mnemonic_mudpiles"));
}
