use collins::{Lookup, Sense};
use rstest::*;
use serde_json::json;

fn fixture(name: &str) -> Lookup {
    let path = format!("{}/tests/fixtures/queries/{name}.html", env!("CARGO_MANIFEST_DIR"));
    let html = std::fs::read_to_string(&path).expect("fixture exists");

    Lookup::from_html(html).expect("fixture parses")
}

#[rstest]
#[case::apple("apple", 1)]
#[case::happy("happy", 1)]
#[case::gotten("gotten", 2)]
fn it_should_find_entries(#[case] name: &str, #[case] expected: usize) {
    let Lookup::Entries(entries) = fixture(name) else {
        panic!("expected entries for {name}");
    };

    assert_eq!(entries.len(), expected);
    assert!(entries.iter().all(|entry| !entry.senses.is_empty()));
}

#[rstest]
fn it_should_number_senses_only_when_there_are_several() {
    let Lookup::Entries(entries) = fixture("happy") else {
        panic!("expected entries");
    };
    let numbered = entries[0].senses.iter().all(|sense| sense.number.is_some());

    assert!(numbered);

    let Lookup::Entries(entries) = fixture("apple") else {
        panic!("expected entries");
    };

    assert_eq!(entries[0].senses[0].number, None);
}

#[rstest]
fn it_should_fall_back_to_cross_references() {
    let Lookup::Entries(entries) = fixture("gotten") else {
        panic!("expected entries");
    };

    assert_eq!(
        entries[0].senses,
        [Sense::cross_reference(
            "Gotten is a past participle of get.".to_string()
        )]
    );
}

#[rstest]
#[case::suggestions("suggestions", Lookup::Suggestions(vec!["cat".into(), "bat".into(), "rat".into()]))]
#[case::not_found("not_found", Lookup::NotFound)]
fn it_should_report_missing_entries(#[case] name: &str, #[case] expected: Lookup) {
    assert_eq!(fixture(name), expected);
}

#[rstest]
fn it_should_serialize_tagged_outcomes() {
    assert_eq!(
        serde_json::to_value(fixture("suggestions")).unwrap(),
        json!({ "kind": "suggestions", "results": ["cat", "bat", "rat"] })
    );
    assert_eq!(
        serde_json::to_value(fixture("not_found")).unwrap(),
        json!({ "kind": "not_found" })
    );

    let value = serde_json::to_value(fixture("apple")).unwrap();

    assert_eq!(value["kind"], "entries");
    assert_eq!(value["results"][0]["headword"], "apple");
    assert_eq!(value["results"][0]["pronunciation"], "ˈæp.əl");
    assert_eq!(value["results"][0]["senses"][0]["number"], serde_json::Value::Null);
}

#[rstest]
fn it_should_deserialize_what_it_serializes() {
    let lookup = fixture("happy");
    let json = serde_json::to_string(&lookup).unwrap();

    assert_eq!(serde_json::from_str::<Lookup>(&json).unwrap(), lookup);
}
