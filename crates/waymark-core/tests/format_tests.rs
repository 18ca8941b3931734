//! Formatting tests over the public API.

use waymark_core::{format_plan, parse_plan, PlanDocument, PlanEntry, PlanStep, Status};

#[test]
fn test_exact_output_shape() {
    let mut models = PlanEntry::new("Models:", Status::Todo);
    models.steps.push(PlanStep::new("Entity A", Status::Completed));
    models.steps.push(PlanStep::new("Entity B", Status::Todo));
    let endpoints = PlanEntry::new("Endpoints", Status::Todo);

    let rendered = format_plan(&[models, endpoints]);

    assert_eq!(
        rendered,
        "1. Models:\n   - [x] Entity A\n   - [ ] Entity B\n2. Endpoints\n"
    );
}

#[test]
fn test_empty_plan_renders_empty_string() {
    assert_eq!(format_plan(&[]), "");
}

#[test]
fn test_failed_and_in_progress_degrade_to_empty_checkbox() {
    let mut entry = PlanEntry::new("Rollout", Status::Todo);
    entry.steps.push(PlanStep::new("canary", Status::Failed));
    entry.steps.push(PlanStep::new("full fleet", Status::InProgress));

    let rendered = format_plan(&[entry]);

    assert_eq!(rendered, "1. Rollout\n   - [ ] canary\n   - [ ] full fleet\n");
}

#[test]
fn test_plan_document_wrapper_matches_format_plan() {
    let entries = parse_plan("1. One\n   - [x] done\n2. Two\n");

    assert_eq!(PlanDocument(&entries).to_string(), format_plan(&entries));
}

#[test]
fn test_format_output_reparses_as_detailed_shape() {
    let mut entry = PlanEntry::new("Section", Status::Todo);
    entry.steps.push(PlanStep::new("first", Status::Completed));
    entry.steps.push(PlanStep::new("second", Status::Todo));

    let rendered = format_plan(&[entry]);
    let reparsed = parse_plan(&rendered);

    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed[0].title, "Section");
    assert_eq!(reparsed[0].steps.len(), 2);
    assert!(reparsed[0].steps[0].completed);
    assert!(!reparsed[0].steps[1].completed);
}
