use assessa_core::models::response::ResponseRecord;
use assessa_export::error::ExportError;
use assessa_export::render::{render_report, render_template};
use assessa_instruments::InstrumentKind;

fn katz_record() -> ResponseRecord {
    ResponseRecord::new()
        .with_patient_name("Florence Nightingale")
        .with_patient_id("FN-1820")
        .with_assessment_date("2024-02-10")
        .with_answer("bathing", 1)
        .with_answer("dressing", 0)
        .with_appended_note("dressing", "Unable to manage fasteners or buttons")
}

#[test]
fn default_report_lists_score_and_items() {
    let submission = InstrumentKind::KatzAdl
        .instrument()
        .submission(&katz_record());

    let report = render_report(&submission).unwrap();
    assert!(report.starts_with("# Katz ADL Assessment"));
    assert!(report.contains("**Patient:** Florence Nightingale (FN-1820)"));
    assert!(report.contains("Katz ADL Score: 1/6"));
    assert!(report.contains("Significant Impairment (Requires substantial assistance)"));
    assert!(report.contains("_Incomplete: some categories were not answered._"));
    assert!(report.contains("### Dressing"));
    assert!(report.contains("- Score: 0 (Dependent)"));
    assert!(report.contains("- Notes: Unable to manage fasteners or buttons."));
    assert!(report.contains("- Score: not answered"));
    assert!(!report.contains("## Sections"));
}

#[test]
fn fim_report_includes_sections_and_subscores() {
    let fim = InstrumentKind::Fim.instrument();
    let record = fim
        .categories()
        .iter()
        .fold(ResponseRecord::new(), |r, c| r.with_answer(c.id.clone(), 7))
        .with_additional_notes("Discharge planning started");

    let report = render_report(&fim.submission(&record)).unwrap();
    assert!(report.contains("FIM Score: 126/126"));
    assert!(report.contains("## Sections"));
    assert!(report.contains("- Self-Care: 42/42"));
    assert!(report.contains("- Motor subscore: 91/91"));
    assert!(report.contains("- Cognitive subscore: 35/35"));
    assert!(report.contains("## Additional Notes"));
    assert!(report.contains("Discharge planning started"));
    assert!(!report.contains("_Incomplete"));
}

#[test]
fn custom_template_sees_submission_fields() {
    let submission = InstrumentKind::Barthel
        .instrument()
        .submission(&ResponseRecord::new().with_answer("mobility", 15));

    let rendered = render_template(
        "summary.txt",
        "{{ instrument_name }}: {{ total_score }} - {{ interpretation }}",
        &submission,
    )
    .unwrap();
    assert_eq!(
        rendered,
        "Barthel Index: 15 - Total dependence - requires help with all activities"
    );
}

#[test]
fn broken_template_is_a_parse_error() {
    let submission = InstrumentKind::KatzAdl
        .instrument()
        .submission(&ResponseRecord::new());
    assert!(matches!(
        render_template("bad", "{% if %}", &submission),
        Err(ExportError::TemplateParse(_))
    ));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let submission = InstrumentKind::KatzAdl
        .instrument()
        .submission(&ResponseRecord::new());
    assert!(matches!(
        render_template("missing", "{{ nonexistent_field }}", &submission),
        Err(ExportError::TemplateRender(_))
    ));
}
