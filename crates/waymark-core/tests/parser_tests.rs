//! End-to-end parsing tests over the public API.

use waymark_core::{format_plan, parse_plan, Status};

/// Route parser diagnostics through the test harness when RUST_LOG is set.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_simple_plan_two_bare_items() {
    init_logging();

    let entries = parse_plan("1. Setup\n2. Build\n");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Setup");
    assert_eq!(entries[1].title, "Build");
    assert!(entries.iter().all(|e| !e.completed));
    assert!(entries.iter().all(|e| e.steps.is_empty()));
}

#[test]
fn test_detailed_plan_with_checklist() {
    let text = "\
1. Models:
  - [x] Entity A
  - [ ] Entity B
";
    let entries = parse_plan(text);

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.title, "Models:");
    assert_eq!(entry.steps.len(), 2);

    assert_eq!(entry.steps[0].description, "Entity A");
    assert!(entry.steps[0].completed);
    assert_eq!(entry.steps[0].status, Status::Completed);

    assert_eq!(entry.steps[1].description, "Entity B");
    assert!(!entry.steps[1].completed);
    assert_eq!(entry.steps[1].status, Status::Todo);
}

#[test]
fn test_failed_marker_step() {
    let entries = parse_plan("1. Rollout\n   - [!] canary deploy\n");

    let step = &entries[0].steps[0];
    assert_eq!(step.status, Status::Failed);
    assert!(!step.completed);
}

#[test]
fn test_in_progress_marker_step() {
    let entries = parse_plan("1. Rollout\n   - [*] canary deploy\n");

    let step = &entries[0].steps[0];
    assert_eq!(step.status, Status::InProgress);
    assert!(!step.completed);
}

#[test]
fn test_entry_count_matches_matched_headers() {
    let text = "\
1. Alpha
   - [x] a1
2. Beta
   - [ ] b1
3. Gamma
";
    let entries = parse_plan(text);

    assert_eq!(entries.len(), 3);
    let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_malformed_inputs_yield_empty_plan() {
    init_logging();

    for text in [
        "",
        "   \n\n",
        "no markdown structure at all, just prose",
        "- [x unterminated bracket\n- [ ] and a sibling\n",
        "# heading\n\n> quoted\n",
    ] {
        assert!(parse_plan(text).is_empty(), "input: {text:?}");
    }
}

#[test]
fn test_round_trip_preserves_titles_steps_and_completion() {
    let text = "\
1. Models:
   - [x] Entity A
   - [!] Entity B
   - [*] Entity C
2. Endpoints
   - [ ] health check
";
    let first = parse_plan(text);
    let second = parse_plan(&format_plan(&first));

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.completed, b.completed);
        assert_eq!(a.steps.len(), b.steps.len());
        for (sa, sb) in a.steps.iter().zip(b.steps.iter()) {
            assert_eq!(sa.description, sb.description);
            assert_eq!(sa.completed, sb.completed);
            // Only completed/not-completed survives the rendered checkbox;
            // failed and in-progress are allowed to degrade to todo
            if sa.completed {
                assert_eq!(sb.status, Status::Completed);
            } else {
                assert_eq!(sb.status, Status::Todo);
            }
        }
    }
}

#[test]
fn test_steps_collapse_across_nesting_in_document_order() {
    let text = "\
1. Build
   - [x] compile core
     - [x] codegen
   - [ ] link
";
    let entries = parse_plan(text);

    let descriptions: Vec<_> = entries[0]
        .steps
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["compile core", "codegen", "link"]);
}

#[test]
fn test_section_completion_aggregates_from_steps() {
    let all_done = parse_plan("1. Ship\n   - [x] tag release\n   - [✓] publish\n");
    assert!(all_done[0].completed);
    assert_eq!(all_done[0].status, Status::Completed);

    let partial = parse_plan("1. Ship\n   - [x] tag release\n   - [ ] publish\n");
    assert!(!partial[0].completed);
    assert_eq!(partial[0].status, Status::InProgress);

    let failed = parse_plan("1. Ship\n   - [!] tag release\n   - [ ] publish\n");
    assert_eq!(failed[0].status, Status::Failed);
}
