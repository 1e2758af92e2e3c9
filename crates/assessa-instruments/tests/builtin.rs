use std::collections::HashSet;

use assessa_core::models::response::ResponseRecord;
use assessa_instruments::{InstrumentKind, all_instruments, get_instrument};

fn answer_all(kind: InstrumentKind, pick: impl Fn(&[u32]) -> u32) -> ResponseRecord {
    let instrument = kind.instrument();
    instrument
        .categories()
        .iter()
        .fold(ResponseRecord::new(), |record, category| {
            let values: Vec<u32> = category.options.iter().map(|o| o.value).collect();
            record.with_answer(category.id.clone(), pick(&values))
        })
}

fn highest(values: &[u32]) -> u32 {
    values.iter().copied().max().unwrap()
}

fn lowest(values: &[u32]) -> u32 {
    values.iter().copied().min().unwrap()
}

#[test]
fn registry_lists_three_instruments() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["katz_adl", "barthel", "fim"]);
    assert!(get_instrument("fim").is_some());
    assert!(get_instrument("mmse").is_none());
    assert_eq!(InstrumentKind::from_id("barthel"), Some(InstrumentKind::Barthel));
}

#[test]
fn category_counts_and_maximums() {
    let katz = InstrumentKind::KatzAdl.instrument();
    let barthel = InstrumentKind::Barthel.instrument();
    let fim = InstrumentKind::Fim.instrument();

    assert_eq!(katz.categories().len(), 6);
    assert_eq!(barthel.categories().len(), 10);
    assert_eq!(fim.categories().len(), 18);

    assert_eq!(katz.max_score(), 6);
    assert_eq!(barthel.max_score(), 100);
    assert_eq!(fim.max_score(), 126);
}

#[test]
fn tables_hold_their_invariants() {
    for instrument in all_instruments() {
        let mut ids = HashSet::new();
        for category in instrument.categories() {
            assert!(ids.insert(&category.id), "duplicate category {}", category.id);

            let values: Vec<u32> = category.options.iter().map(|o| o.value).collect();
            let unique: HashSet<_> = values.iter().collect();
            assert_eq!(unique.len(), values.len(), "duplicate option in {}", category.id);
            assert!(
                values.windows(2).all(|w| w[0] > w[1]),
                "options of {} are not listed highest first",
                category.id
            );

            for key in category.quick_notes.keys() {
                assert!(values.contains(key), "orphan quick notes in {}", category.id);
            }
            for value in &values {
                assert!(!category.notes_for(*value).is_empty());
            }
        }
    }
}

#[test]
fn katz_extremes() {
    let katz = InstrumentKind::KatzAdl.instrument();

    let independent = answer_all(InstrumentKind::KatzAdl, highest);
    assert_eq!(katz.total_score(&independent), 6);
    assert_eq!(katz.interpret(6), "Excellent");

    let dependent = answer_all(InstrumentKind::KatzAdl, lowest);
    assert_eq!(katz.total_score(&dependent), 0);
    assert_eq!(katz.interpret(0), "Significant Impairment");
}

#[test]
fn katz_ladder() {
    let katz = InstrumentKind::KatzAdl.instrument();
    let labels: Vec<&str> = (0..=6).map(|t| katz.interpret(t)).collect();
    assert_eq!(
        labels,
        vec![
            "Significant Impairment",
            "Significant Impairment",
            "Moderate",
            "Moderate",
            "Good",
            "Good",
            "Excellent",
        ]
    );
    assert_eq!(
        katz.band_for(6).and_then(|b| b.description.as_deref()),
        Some("Independent in all ADLs")
    );
}

#[test]
fn barthel_reference_case() {
    let barthel = InstrumentKind::Barthel.instrument();
    let record = [
        ("feeding", 10),
        ("bathing", 5),
        ("grooming", 5),
        ("dressing", 10),
        ("bowels", 10),
        ("bladder", 10),
        ("toiletUse", 10),
        ("transfers", 15),
        ("mobility", 15),
        ("stairs", 10),
    ]
    .into_iter()
    .fold(ResponseRecord::new(), |r, (id, v)| r.with_answer(id, v));

    let total = barthel.total_score(&record);
    assert_eq!(total, 100);
    assert_eq!(barthel.interpret(total), "Independent - minimal assistance needed");
    assert!(barthel.validate_record(&record).is_empty());
}

#[test]
fn barthel_thresholds() {
    let barthel = InstrumentKind::Barthel.instrument();
    assert_eq!(barthel.interpret(90), "Independent - minimal assistance needed");
    assert_eq!(barthel.interpret(89), "Mild dependence - requires some assistance");
    assert_eq!(barthel.interpret(60), "Mild dependence - requires some assistance");
    assert_eq!(
        barthel.interpret(40),
        "Moderate dependence - requires significant assistance"
    );
    assert_eq!(
        barthel.interpret(20),
        "Severe dependence - requires extensive assistance"
    );
    assert_eq!(
        barthel.interpret(19),
        "Total dependence - requires help with all activities"
    );
}

#[test]
fn fim_extremes() {
    let fim = InstrumentKind::Fim.instrument();

    let all_seven = answer_all(InstrumentKind::Fim, |_| 7);
    assert_eq!(fim.total_score(&all_seven), 126);
    assert_eq!(
        fim.interpret(126),
        "Complete independence - no helper required"
    );

    let all_one = answer_all(InstrumentKind::Fim, |_| 1);
    assert_eq!(fim.total_score(&all_one), 18);
    assert!(fim.interpret(18).starts_with("Maximal to total assistance"));
}

#[test]
fn unanswered_categories_count_as_zero() {
    let barthel = InstrumentKind::Barthel.instrument();
    let record = ResponseRecord::new()
        .with_answer("transfers", 15)
        .with_answer("stairs", 5);
    assert_eq!(barthel.total_score(&record), 20);
    assert_eq!(barthel.total_score(&ResponseRecord::new()), 0);
}

#[test]
fn answers_outside_the_instrument_are_ignored_by_the_total() {
    let katz = InstrumentKind::KatzAdl.instrument();
    let record = ResponseRecord::new()
        .with_answer("bathing", 1)
        .with_answer("stairs", 10);
    assert_eq!(katz.total_score(&record), 1);
}

#[test]
fn values_no_option_offers_score_zero() {
    let katz = InstrumentKind::KatzAdl.instrument();
    let record = ResponseRecord::new()
        .with_answer("bathing", 5)
        .with_answer("dressing", 1);
    assert_eq!(katz.total_score(&record), 1);
    assert_eq!(katz.validate_record(&record).len(), 1);

    let submission = katz.submission(&record);
    assert_eq!(submission.item("bathing").and_then(|i| i.label.clone()), None);

    let fim = InstrumentKind::Fim.instrument();
    let record = ResponseRecord::new()
        .with_answer("eating", 9)
        .with_answer("grooming", 4);
    assert_eq!(fim.total_score(&record), 4);
    assert_eq!(fim.section_scores(&record)[0].score, 4);
    assert_eq!(fim.composite_scores(&record)[0].score, 4);
}

#[test]
fn huge_stored_answers_cannot_overflow_the_total() {
    let record = ResponseRecord::new()
        .with_answer("bathing", u32::MAX)
        .with_answer("dressing", 1)
        .with_answer("feeding", u32::MAX);

    let katz = InstrumentKind::KatzAdl.instrument();
    assert_eq!(katz.total_score(&record), 1);
    assert!(katz.total_score(&record) <= katz.max_score());
    assert_eq!(katz.submission(&record).total_score, 1);
}

#[test]
fn every_total_matches_exactly_one_band_and_severity_is_monotone() {
    for instrument in all_instruments() {
        let bands = instrument.bands();
        assert!(bands.windows(2).all(|w| w[0].min_score > w[1].min_score));
        assert_eq!(bands.last().map(|b| b.min_score), Some(0));

        let mut previous_rank = 0;
        for total in (0..=instrument.max_score()).rev() {
            let matching = bands.iter().filter(|b| total >= b.min_score).count();
            assert!(matching >= 1, "{} has no band for {total}", instrument.id());

            let rank = bands
                .iter()
                .position(|b| total >= b.min_score)
                .unwrap();
            assert!(rank >= previous_rank);
            previous_rank = rank;
        }
    }
}

#[test]
fn fim_section_and_composite_scores() {
    let fim = InstrumentKind::Fim.instrument();
    let record = answer_all(InstrumentKind::Fim, |_| 7);

    let sections: Vec<(String, u32, u32)> = fim
        .section_scores(&record)
        .into_iter()
        .map(|s| (s.name, s.score, s.max_score))
        .collect();
    assert_eq!(
        sections,
        vec![
            ("Self-Care".to_string(), 42, 42),
            ("Sphincter Control".to_string(), 14, 14),
            ("Mobility".to_string(), 35, 35),
            ("Communication".to_string(), 14, 14),
            ("Social Cognition".to_string(), 21, 21),
        ]
    );

    let composites = fim.composite_scores(&ResponseRecord::new().with_answer("memory", 4));
    assert_eq!(composites[0].name, "Motor");
    assert_eq!((composites[0].score, composites[0].max_score), (0, 91));
    assert_eq!(composites[1].name, "Cognitive");
    assert_eq!((composites[1].score, composites[1].max_score), (4, 35));
}

#[test]
fn instruments_without_sections_report_none() {
    let barthel = InstrumentKind::Barthel.instrument();
    let record = answer_all(InstrumentKind::Barthel, highest);
    assert!(barthel.section_scores(&record).is_empty());
    assert!(barthel.composite_scores(&record).is_empty());
}

#[test]
fn validate_record_flags_foreign_answers() {
    let barthel = InstrumentKind::Barthel.instrument();
    let record = ResponseRecord::new()
        .with_answer("feeding", 7)
        .with_answer("eating", 5)
        .with_answer("stairs", 5);

    let errors = barthel.validate_record(&record);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.category_id == "eating"));
    assert!(
        errors
            .iter()
            .any(|e| e.category_id == "feeding" && e.message.contains("no option scored 7"))
    );
}

#[test]
fn submission_collects_items_and_interpretation() {
    let katz = InstrumentKind::KatzAdl.instrument();
    let record = ResponseRecord::new()
        .with_patient_name("Ada Lovelace")
        .with_patient_id("P-100")
        .with_assessment_date("2024-03-01")
        .with_answer("bathing", 1)
        .with_answer("dressing", 0)
        .with_appended_note("dressing", "Unable to manage fasteners or buttons");

    let submission = katz.submission(&record);
    assert_eq!(submission.instrument_id, "katz_adl");
    assert_eq!(submission.total_score, 1);
    assert_eq!(submission.max_score, 6);
    assert_eq!(submission.interpretation, "Significant Impairment");
    assert_eq!(
        submission.interpretation_detail.as_deref(),
        Some("Requires substantial assistance")
    );
    assert!(!submission.complete);
    assert_eq!(submission.items.len(), 6);

    let dressing = submission.item("dressing").unwrap();
    assert_eq!(dressing.score, Some(0));
    assert_eq!(dressing.label.as_deref(), Some("Dependent"));
    assert_eq!(dressing.note, "Unable to manage fasteners or buttons.");

    let feeding = submission.item("feeding").unwrap();
    assert_eq!(feeding.score, None);
    assert_eq!(feeding.label, None);
    assert_eq!(submission.headline(), "Katz ADL Score: 1/6");
}
