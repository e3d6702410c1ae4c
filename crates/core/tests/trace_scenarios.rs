//! Integration test: drive the trace animator through full scenario cycles
//! on the shared scheduler and check buffer, reset, and theme behaviour.

use std::collections::HashMap;

use folio_core::config::TraceConfig;
use folio_core::scheduler::{PageTimer, Scheduler};
use folio_core::theme_store::{ThemeWriter, theme_channel};
use folio_core::trace::{
    COMPLETION_MARKER, FixedClock, Scenario, ScenarioBank, SequentialLineIds, TraceAnimator,
};
use folio_core::{FolioConfig, LayoutSnapshot, Portfolio};
use folio_protocol::{ProjectCategoryTheme, Rect, TraceKind, TraceStatus, ViewCommand, Viewport};

const TICK: f64 = 520.0;

fn animator_with(
    bank: ScenarioBank,
    theme: ProjectCategoryTheme,
) -> (TraceAnimator, ThemeWriter<ProjectCategoryTheme>) {
    let (writer, reader) = theme_channel(theme);
    let animator = TraceAnimator::new(
        TraceConfig::default(),
        bank,
        reader,
        Box::new(SequentialLineIds::default()),
        Box::new(FixedClock("08:00:00".into())),
    );
    (animator, writer)
}

fn run_until(a: &mut TraceAnimator, sched: &mut Scheduler<PageTimer>, until: f64) {
    while let Some((_, timer)) = sched.pop_due(until) {
        a.on_timer(timer, sched);
    }
    sched.set_now(until);
}

fn ids(a: &TraceAnimator) -> Vec<String> {
    a.lines().iter().map(|l| l.id.clone()).collect()
}

#[test]
fn buffer_is_a_bounded_suffix_of_the_stream() {
    let mut steps: Vec<String> = (1..15).map(|i| format!("step {i}")).collect();
    steps.push(format!("step 15 {COMPLETION_MARKER}"));
    let steps: Vec<&str> = steps.iter().map(String::as_str).collect();
    let banks = HashMap::from([(
        ProjectCategoryTheme::Ui,
        vec![Scenario::new("ui/long", &steps)],
    )]);
    let bank = ScenarioBank::from_scenarios(&banks, COMPLETION_MARKER).expect("valid bank");

    let (mut a, _writer) = animator_with(bank, ProjectCategoryTheme::Ui);
    let mut sched = Scheduler::new(0.0);
    a.mount(&mut sched);

    for k in 1..=16usize {
        run_until(&mut a, &mut sched, k as f64 * TICK);
        assert!(a.lines().len() <= 10, "tick {k}: {} lines", a.lines().len());
        let first = k.saturating_sub(9).max(1);
        let expected: Vec<String> = (first..=k).map(|n| format!("line-{n}")).collect();
        assert_eq!(ids(&a), expected, "tick {k}");
    }
    assert!(a.reset_pending());
}

#[test]
fn each_completion_resets_once_and_wraps() {
    let (mut a, _writer) = animator_with(ScenarioBank::builtin(), ProjectCategoryTheme::Ui);
    let mut sched = Scheduler::new(0.0);
    a.mount(&mut sched);

    run_until(&mut a, &mut sched, 2080.0);
    assert!(a.reset_pending());
    assert_eq!(a.lines().len(), 4);

    // stale tick before the reset lands: wraps to meta, no second reset
    run_until(&mut a, &mut sched, 2600.0);
    assert_eq!(a.lines().len(), 5);
    assert_eq!(a.lines()[4].kind, TraceKind::Meta);
    assert_eq!(sched.live(), 2);

    run_until(&mut a, &mut sched, 2729.0);
    assert_eq!(a.scenario_index(), 0);
    run_until(&mut a, &mut sched, 2730.0);
    assert_eq!(a.scenario_index(), 1);
    assert!(a.lines().is_empty());
    assert!(!a.reset_pending());
    assert_eq!(a.current_route(), Some("ui/hydrate"));

    run_until(&mut a, &mut sched, 5330.0);
    assert_eq!(a.scenario_index(), 2);
    run_until(&mut a, &mut sched, 7930.0);
    assert_eq!(a.scenario_index(), 0);
    assert_eq!(a.current_route(), Some("ui/render"));
}

#[test]
fn theme_change_mid_scenario_cancels_pending_reset() {
    let (mut a, writer) = animator_with(ScenarioBank::builtin(), ProjectCategoryTheme::Ui);
    let mut sched = Scheduler::new(0.0);
    a.mount(&mut sched);
    run_until(&mut a, &mut sched, 2080.0);
    assert!(a.reset_pending());

    writer.set(ProjectCategoryTheme::Bot);
    assert!(a.sync_theme(&mut sched));
    assert!(a.lines().is_empty());
    assert_eq!(a.scenario_index(), 0);
    assert!(!a.reset_pending());
    assert_eq!(sched.live(), 1);

    run_until(&mut a, &mut sched, 3200.0);
    assert_eq!(a.scenario_index(), 0);
    let texts: Vec<&str> = a.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["08:00:00  incoming  bot/start", "→ receive update"]);
}

#[test]
fn unknown_bank_falls_back_to_ui() {
    let banks = HashMap::from([(
        ProjectCategoryTheme::Ui,
        vec![Scenario::new("ui/only", &["draw ✅"])],
    )]);
    let bank = ScenarioBank::from_scenarios(&banks, COMPLETION_MARKER).expect("valid bank");
    let (mut a, _writer) = animator_with(bank, ProjectCategoryTheme::Api);
    let mut sched = Scheduler::new(0.0);
    a.mount(&mut sched);
    run_until(&mut a, &mut sched, TICK);
    assert_eq!(a.current_route(), Some("ui/only"));
}

fn portfolio() -> Portfolio {
    Portfolio::with_sources(
        FolioConfig::default(),
        Box::new(SequentialLineIds::default()),
        Box::new(FixedClock("12:34:56".into())),
    )
    .expect("default config is valid")
}

#[test]
fn twenty_ticks_on_the_ui_bank() {
    let mut p = portfolio();
    p.mount("/");

    p.advance(TICK);
    let lines = p.trace_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_meta());
    let text = lines[0].text.as_str();
    let (stamp, rest) = text.split_at(8);
    assert!(stamp.chars().all(|c| c.is_ascii_digit() || c == ':'));
    assert_eq!(rest, "  incoming  ui/render");

    p.advance(4.0 * TICK);
    assert!(
        p.trace_lines()
            .last()
            .is_some_and(|l| l.text.contains(COMPLETION_MARKER))
    );
    // tick interval plus the pending reset
    assert_eq!(p.scheduler().live(), 2);

    p.advance(4.0 * TICK + 650.0);
    assert!(p.trace_lines().is_empty());
    assert_eq!(p.trace_route(), Some("ui/hydrate"));

    for k in 9..=20 {
        p.advance(k as f64 * TICK);
        assert!(p.trace_lines().len() <= 10);
    }
    // third cycle back on scenario 0: four lines plus a stale meta
    assert_eq!(p.trace_route(), Some("ui/render"));
    assert_eq!(p.trace_lines().len(), 5);
}

#[test]
fn switching_to_bot_clears_synchronously() {
    let mut p = portfolio();
    p.mount("/");
    p.advance(3.0 * TICK);
    assert_eq!(p.trace_lines().len(), 3);
    p.take_commands();

    // the OwnFleet card fills the focus band of a 1000px viewport
    let layout = LayoutSnapshot::new(Viewport::new(1200.0, 1280.0, 1000.0, 5000.0))
        .with_card("ownfleet-cg", Rect::new(0.0, 300.0, 600.0, 400.0));
    assert_eq!(p.update_cards(&layout), Some(ProjectCategoryTheme::Bot));
    assert!(p.trace_lines().is_empty());
    assert_eq!(
        p.take_commands(),
        vec![
            ViewCommand::SetProjectTheme {
                theme: ProjectCategoryTheme::Bot
            },
            ViewCommand::TraceChanged,
        ]
    );

    p.advance(4.0 * TICK);
    assert_eq!(p.trace_route(), Some("bot/start"));
    assert_eq!(p.trace_lines().len(), 1);
}

#[test]
fn pause_and_resume_neither_skip_nor_repeat() {
    let mut p = portfolio();
    p.mount("/");
    p.advance(1100.0);
    assert_eq!(p.trace_lines().len(), 2);

    p.set_trace_hovered(true, 1100.0);
    assert_eq!(p.trace_status(), TraceStatus::Paused);
    p.advance(5000.0);
    assert_eq!(p.trace_lines().len(), 2);

    p.set_trace_hovered(false, 5000.0);
    p.advance(5000.0 + TICK);
    let texts: Vec<String> = p.trace_lines().iter().map(|l| l.text.to_string()).collect();
    assert_eq!(
        texts,
        vec![
            "12:34:56  incoming  ui/render",
            "→ mount component",
            "→ fetch props"
        ]
    );
    let ids: Vec<String> = p.trace_lines().iter().map(|l| l.id.clone()).collect();
    assert_eq!(ids, vec!["line-1", "line-2", "line-3"]);
}

#[test]
fn pending_reset_still_fires_while_paused() {
    let mut p = portfolio();
    p.mount("/");
    p.advance(4.0 * TICK);
    p.set_trace_hovered(true, 4.0 * TICK);
    p.advance(4.0 * TICK + 650.0);
    assert!(p.trace_lines().is_empty());
    assert_eq!(p.trace_route(), Some("ui/hydrate"));
    assert_eq!(p.scheduler().live(), 0);
}
