use assessa_core::models::response::ResponseRecord;
use assessa_instruments::Instrument;
use assessa_instruments::definition::{CustomInstrument, DefinitionDocument, load_definition};
use assessa_instruments::error::InstrumentError;
use serde_json::{Value, json};

fn mobility_screen() -> Value {
    json!({
        "id": "mobility_screen",
        "name": "Mobility Screen",
        "categories": [
            {
                "id": "walking",
                "title": "Walking",
                "description": "Walks 10 metres on level ground",
                "section": "Gait",
                "options": [
                    { "value": "2", "label": "Independent", "description": "No aid" },
                    { "value": "1", "label": "With Aid", "description": "Uses a frame or stick" },
                    { "value": "0", "label": "Unable", "description": "Cannot walk" }
                ],
                "quickNotes": {
                    "2": ["Steady gait"],
                    "0": ["Non-ambulant"]
                }
            },
            {
                "id": "turning",
                "title": "Turning",
                "section": "Gait",
                "options": [
                    { "value": 1, "label": "Safe" },
                    { "value": 0, "label": "Unsafe" }
                ]
            }
        ],
        "bands": [
            { "minScore": 3, "label": "Safe to mobilise" },
            { "minScore": 0, "label": "Needs review", "description": "Refer to physiotherapy" }
        ],
        "composites": [
            { "id": "gait", "name": "Gait", "sections": ["Gait"] }
        ]
    })
}

fn load(value: Value) -> Result<CustomInstrument, InstrumentError> {
    let doc: DefinitionDocument = serde_json::from_value(value)?;
    CustomInstrument::from_document(doc)
}

#[test]
fn string_and_numeric_tokens_parse_to_scores() {
    let instrument = load_definition(&mobility_screen().to_string()).unwrap();

    assert_eq!(instrument.id(), "mobility_screen");
    assert_eq!(instrument.max_score(), 3);

    let walking = instrument.category("walking").unwrap();
    let values: Vec<u32> = walking.options.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![2, 1, 0]);
    assert_eq!(walking.notes_for(2), ["Steady gait".to_string()]);
    assert!(walking.notes_for(1).is_empty());

    let turning = instrument.category("turning").unwrap();
    assert_eq!(turning.description, "");
    assert!(turning.quick_notes.is_empty());
}

#[test]
fn custom_instrument_scores_like_builtins() {
    let instrument = load(mobility_screen()).unwrap();
    let record = ResponseRecord::new()
        .with_answer("walking", 2)
        .with_answer("turning", 1);

    let submission = instrument.submission(&record);
    assert_eq!(submission.total_score, 3);
    assert_eq!(submission.interpretation, "Safe to mobilise");
    assert!(submission.complete);
    assert_eq!(submission.composite_scores[0].score, 3);
    assert_eq!(submission.section_scores[0].name, "Gait");

    assert_eq!(instrument.interpret(1), "Needs review");
    assert_eq!(
        instrument.band_for(1).and_then(|b| b.description.as_deref()),
        Some("Refer to physiotherapy")
    );
}

#[test]
fn rejects_duplicate_category_ids() {
    let mut doc = mobility_screen();
    doc["categories"][1]["id"] = json!("walking");
    assert!(matches!(
        load(doc),
        Err(InstrumentError::DuplicateCategory { category_id, .. }) if category_id == "walking"
    ));
}

#[test]
fn rejects_duplicate_option_values() {
    let mut doc = mobility_screen();
    doc["categories"][1]["options"][1]["value"] = json!("1");
    assert!(matches!(
        load(doc),
        Err(InstrumentError::DuplicateOption { value: 1, .. })
    ));
}

#[test]
fn rejects_non_numeric_tokens() {
    let mut doc = mobility_screen();
    doc["categories"][0]["options"][0]["value"] = json!("two");
    assert!(matches!(
        load(doc),
        Err(InstrumentError::InvalidScoreToken { token, .. }) if token == "two"
    ));
}

#[test]
fn rejects_quick_notes_for_missing_options() {
    let mut doc = mobility_screen();
    doc["categories"][0]["quickNotes"]["5"] = json!(["Sprints"]);
    assert!(matches!(
        load(doc),
        Err(InstrumentError::OrphanQuickNotes { key, .. }) if key == "5"
    ));
}

#[test]
fn rejects_bands_that_leave_low_totals_uncovered() {
    let mut doc = mobility_screen();
    doc["bands"][1]["minScore"] = json!(1);
    assert!(matches!(load(doc), Err(InstrumentError::BandOrder(_))));

    let mut doc = mobility_screen();
    doc["bands"] = json!([
        { "minScore": 0, "label": "Low" },
        { "minScore": 3, "label": "High" }
    ]);
    assert!(matches!(load(doc), Err(InstrumentError::BandOrder(_))));
}

#[test]
fn rejects_empty_definitions() {
    let mut doc = mobility_screen();
    doc["categories"] = json!([]);
    assert!(matches!(load(doc), Err(InstrumentError::NoCategories(_))));

    let mut doc = mobility_screen();
    doc["categories"][1]["options"] = json!([]);
    assert!(matches!(load(doc), Err(InstrumentError::NoOptions(id)) if id == "turning"));
}

#[test]
fn rejects_composites_over_unknown_sections() {
    let mut doc = mobility_screen();
    doc["composites"][0]["sections"] = json!(["Balance"]);
    assert!(matches!(
        load(doc),
        Err(InstrumentError::UnknownSection { section, .. }) if section == "Balance"
    ));
}

#[test]
fn rejects_maximums_that_overflow_the_total() {
    let mut doc = mobility_screen();
    doc["categories"][0]["quickNotes"] = json!({});
    doc["categories"][0]["options"][0]["value"] = json!(u32::MAX);
    doc["categories"][1]["options"][0]["value"] = json!(u32::MAX);
    assert!(matches!(
        load(doc),
        Err(InstrumentError::ScoreOverflow(id)) if id == "mobility_screen"
    ));

    let mut doc = mobility_screen();
    doc["categories"][0]["quickNotes"] = json!({});
    doc["categories"][0]["options"][0]["value"] = json!(u32::MAX - 1);
    doc["bands"][0]["minScore"] = json!(u32::MAX);
    let instrument = load(doc).unwrap();
    assert_eq!(instrument.max_score(), u32::MAX);
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        load_definition("{ not json"),
        Err(InstrumentError::Json(_))
    ));
}
