#![forbid(unsafe_code)]

//! Integration tests: full verification runs against fixture scenes.

use vscope_audit::{
    AuditSpec, CheckOutput, Coordinator, CoordinatorConfig, Verdict,
};
use vscope_harness::FixtureScene;
use vscope_harness::presets;
use vscope_scene::{InteractionState, Scene};

/// The standard suite a component page would run.
fn component_suite(scene: &mut FixtureScene) -> Vec<AuditSpec> {
    let root = presets::card(scene);
    let button = presets::action_button(scene, Some(root));
    let label = presets::static_label(scene, Some(root));
    let faint = presets::faint_label(scene, Some(root));
    vec![
        AuditSpec::contrast("button contrast", button),
        AuditSpec::contrast("body contrast", label),
        AuditSpec::contrast("caption contrast", faint),
        AuditSpec::state("button hover", button, InteractionState::Hover),
        AuditSpec::state("button active", button, InteractionState::Active),
        AuditSpec::state("button focus", button, InteractionState::Focus),
        AuditSpec::state("button disabled", button, InteractionState::Disabled),
        AuditSpec::complexity("page complexity"),
        AuditSpec::focus_budget("focus budget"),
    ]
}

#[test]
fn full_suite_yields_one_outcome_per_definition() {
    let mut scene = FixtureScene::new();
    let mut audits = component_suite(&mut scene);
    let expected = audits.len();
    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);

    assert_eq!(report.outcomes().len(), expected);
    assert!(report.is_complete());
    for (i, outcome) in report.outcomes().iter().enumerate() {
        assert_eq!(outcome.index, i);
    }
}

#[test]
fn styled_button_passes_every_state_audit() {
    let mut scene = FixtureScene::new();
    let mut audits = component_suite(&mut scene);
    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);

    let verdict_of = |name: &str| {
        report
            .outcomes()
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.verdict)
            .unwrap()
    };
    assert_eq!(verdict_of("button contrast"), Verdict::Pass);
    assert_eq!(verdict_of("body contrast"), Verdict::Pass);
    assert_eq!(verdict_of("caption contrast"), Verdict::Fail);
    assert_eq!(verdict_of("button hover"), Verdict::Pass);
    assert_eq!(verdict_of("button active"), Verdict::Pass);
    assert_eq!(verdict_of("button focus"), Verdict::Pass);
    assert_eq!(verdict_of("button disabled"), Verdict::Pass);
    assert_eq!(verdict_of("page complexity"), Verdict::Pass);
    assert_eq!(verdict_of("focus budget"), Verdict::Pass);
}

#[test]
fn frozen_button_fails_every_state_audit() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let frozen = presets::frozen_button(&mut scene, Some(root));
    let mut audits: Vec<AuditSpec> = InteractionState::PROBE_ORDER
        .iter()
        .map(|state| AuditSpec::state(format!("frozen {state}"), frozen, *state))
        .collect();
    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);

    assert_eq!(report.outcomes().len(), InteractionState::PROBE_ORDER.len());
    for outcome in report.outcomes() {
        assert_eq!(outcome.verdict, Verdict::Fail, "{}", outcome.name);
        assert!(outcome.message.contains("no visible"));
    }
}

#[test]
fn ghost_button_contrast_resolves_through_parent() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let ghost = presets::ghost_button(&mut scene, Some(root));
    let mut audits = vec![
        AuditSpec::contrast("ghost contrast", ghost),
        AuditSpec::state("ghost hover", ghost, InteractionState::Hover),
        AuditSpec::state("ghost disabled", ghost, InteractionState::Disabled),
    ];
    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);

    // #333 over the card's white: comfortably AAA.
    assert_eq!(report.outcomes()[0].verdict, Verdict::Pass);
    assert_eq!(report.outcomes()[1].verdict, Verdict::Pass);
    // Disabled recolors the text, which satisfies the disabled rule.
    assert_eq!(report.outcomes()[2].verdict, Verdict::Pass);
}

#[test]
fn missing_target_fails_and_run_continues() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let label = presets::static_label(&mut scene, Some(root));
    let ghost_id = {
        let id = presets::static_label(&mut scene, Some(root));
        scene.remove(id);
        id
    };
    let mut audits = vec![
        AuditSpec::contrast("gone", ghost_id),
        AuditSpec::contrast("present", label),
    ];
    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);

    assert_eq!(report.outcomes().len(), 2);
    assert_eq!(report.outcomes()[0].verdict, Verdict::Fail);
    assert!(report.outcomes()[0].message.contains("not present"));
    assert_eq!(report.outcomes()[1].verdict, Verdict::Pass);
}

#[test]
fn panicking_custom_audit_never_aborts_the_run() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let label = presets::static_label(&mut scene, Some(root));
    let mut audits = vec![
        AuditSpec::contrast("before", label),
        AuditSpec::custom("broken", "panics on evaluation", |_| {
            panic!("fixture exploded")
        }),
        AuditSpec::contrast("after", label),
    ];
    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);

    assert_eq!(report.outcomes().len(), 3);
    assert_eq!(report.outcomes()[0].verdict, Verdict::Pass);
    assert_eq!(report.outcomes()[1].verdict, Verdict::Fail);
    assert!(report.outcomes()[1].message.contains("fixture exploded"));
    assert_eq!(report.outcomes()[2].verdict, Verdict::Pass);
}

#[test]
fn stop_during_audit_k_keeps_outcomes_one_through_k() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let label = presets::static_label(&mut scene, Some(root));
    let mut coordinator = Coordinator::default();
    let handle = coordinator.stop_handle();

    let k = 3;
    let mut audits: Vec<AuditSpec> = (0..2)
        .map(|i| AuditSpec::contrast(format!("audit {i}"), label))
        .collect();
    audits.push(AuditSpec::custom(
        "audit 2 (stops)",
        "cancels the run mid-flight",
        move |_| {
            handle.stop();
            Ok(CheckOutput::new(Verdict::Pass, "stop requested"))
        },
    ));
    for i in 3..7 {
        audits.push(AuditSpec::contrast(format!("audit {i}"), label));
    }

    let report = coordinator.run(&mut scene, &mut audits);
    assert_eq!(report.outcomes().len(), k);
    assert!(!report.is_complete());
    // The audit that requested the stop still completed and recorded.
    assert_eq!(report.outcomes()[k - 1].verdict, Verdict::Pass);
}

#[test]
fn repeated_runs_are_idempotent() {
    let mut scene = FixtureScene::new();
    let mut audits = component_suite(&mut scene);
    let mut coordinator = Coordinator::default();

    let first: Vec<Verdict> = coordinator
        .run(&mut scene, &mut audits)
        .outcomes()
        .iter()
        .map(|o| o.verdict)
        .collect();
    let second: Vec<Verdict> = coordinator
        .run(&mut scene, &mut audits)
        .outcomes()
        .iter()
        .map(|o| o.verdict)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn config_gates_auto_scroll_and_contrast() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let button = presets::action_button(&mut scene, Some(root));
    let mut audits = vec![
        AuditSpec::contrast("contrast", button),
        AuditSpec::state("hover", button, InteractionState::Hover),
    ];

    let mut coordinator = Coordinator::new(CoordinatorConfig {
        auto_scroll: false,
        check_contrast: false,
    });
    let report = coordinator.run(&mut scene, &mut audits);
    assert_eq!(report.outcomes()[0].verdict, Verdict::Skip);
    assert_eq!(report.outcomes()[1].verdict, Verdict::Pass);
    assert!(scene.scroll_log().is_empty());

    let mut coordinator = Coordinator::default();
    let report = coordinator.run(&mut scene, &mut audits);
    assert_eq!(report.outcomes()[0].verdict, Verdict::Pass);
    // Both audits target the button; both scrolled to it.
    assert_eq!(scene.scroll_log(), &[button, button]);
}

#[test]
fn probes_leave_the_scene_in_its_default_state() {
    let mut scene = FixtureScene::new();
    let root = presets::card(&mut scene);
    let button = presets::action_button(&mut scene, Some(root));
    let before = scene.snapshot(button).unwrap();

    let mut audits: Vec<AuditSpec> = InteractionState::PROBE_ORDER
        .iter()
        .map(|state| AuditSpec::state(format!("{state}"), button, *state))
        .collect();
    let mut coordinator = Coordinator::default();
    coordinator.run(&mut scene, &mut audits);

    assert_eq!(scene.snapshot(button).unwrap(), before);
}
