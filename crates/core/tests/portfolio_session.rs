//! Integration test: mount a portfolio session, scroll it through a
//! synthetic page, navigate between routes, and tear it down.

use std::collections::BTreeSet;

use folio_core::model::{ProjectView, Route};
use folio_core::trace::{FixedClock, SequentialLineIds};
use folio_core::{FolioConfig, LayoutSnapshot, Portfolio};
use folio_protocol::{PageSectionTheme, ProjectCategoryTheme, Rect, ViewCommand, Viewport};

const VIEWPORT_H: f64 = 800.0;
/// Section heights in document order.
const HEIGHTS: [f64; 4] = [900.0, 1400.0, 700.0, 600.0];

fn portfolio() -> Portfolio {
    Portfolio::with_sources(
        FolioConfig::default(),
        Box::new(SequentialLineIds::default()),
        Box::new(FixedClock("10:00:00".into())),
    )
    .expect("default config is valid")
}

fn document_height() -> f64 {
    HEIGHTS.iter().sum()
}

fn page_at(scroll_y: f64) -> LayoutSnapshot {
    let mut layout = LayoutSnapshot::new(Viewport::new(scroll_y, 1280.0, VIEWPORT_H, document_height()));
    let mut top = 0.0;
    for (theme, h) in PageSectionTheme::ALL.into_iter().zip(HEIGHTS) {
        layout = layout.with_section(theme, Rect::new(0.0, top - scroll_y, 1280.0, h));
        top += h;
    }
    layout
}

/// Section whose document range holds the probe line at `scroll_y`.
fn expected_section(scroll_y: f64) -> PageSectionTheme {
    let probe = scroll_y + VIEWPORT_H * 0.22 + 12.0;
    let mut top = 0.0;
    for (theme, h) in PageSectionTheme::ALL.into_iter().zip(HEIGHTS) {
        if probe < top + h {
            return theme;
        }
        top += h;
    }
    PageSectionTheme::Contact
}

/// Root classes after applying `commands` to `classes`.
fn apply(classes: &mut BTreeSet<String>, commands: &[ViewCommand]) {
    for command in commands {
        if let ViewCommand::SwapRootClass { remove, add } = command {
            for class in remove {
                classes.remove(class);
            }
            if let Some(class) = add {
                classes.insert(class.clone());
            }
        }
    }
}

fn swaps(commands: &[ViewCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, ViewCommand::SwapRootClass { .. }))
        .count()
}

#[test]
fn exactly_one_section_active_at_every_offset() {
    let mut p = portfolio();
    let mut classes = BTreeSet::new();
    p.mount("/");
    apply(&mut classes, &p.take_commands());

    let max_scroll = document_height() - VIEWPORT_H;
    let mut now = 0.0;
    let mut scroll_y = 0.0;
    while scroll_y <= max_scroll {
        now += 16.0;
        p.notify_scroll();
        p.run_frame(now, &page_at(scroll_y));
        apply(&mut classes, &p.take_commands());

        let expected = expected_section(scroll_y);
        assert_eq!(p.page_theme(), expected, "scroll {scroll_y}");
        assert_eq!(classes.len(), 1, "scroll {scroll_y}: {classes:?}");
        assert!(classes.contains(expected.root_class()));
        scroll_y += 37.0;
    }
}

#[test]
fn redundant_recompute_emits_nothing() {
    let mut p = portfolio();
    p.mount("/");
    p.take_commands();

    p.notify_scroll();
    p.run_frame(16.0, &page_at(1000.0));
    assert_eq!(swaps(&p.take_commands()), 1);
    assert_eq!(p.page_theme(), PageSectionTheme::Projects);

    for (i, y) in [1000.0, 1010.0, 1200.0].into_iter().enumerate() {
        p.notify_scroll();
        p.run_frame(32.0 + i as f64 * 16.0, &page_at(y));
        assert_eq!(swaps(&p.take_commands()), 0);
    }
}

#[test]
fn scroll_bursts_coalesce_into_one_frame() {
    let mut p = portfolio();
    p.mount("/");
    assert_eq!(p.scheduler().live(), 1);
    for _ in 0..12 {
        p.notify_scroll();
        p.notify_resize();
    }
    assert!(p.wants_frame());
    assert_eq!(p.scheduler().live(), 2);
    p.run_frame(16.0, &page_at(2500.0));
    assert!(!p.wants_frame());
    assert_eq!(p.page_theme(), PageSectionTheme::About);
}

#[test]
fn second_smooth_scroll_replaces_the_first() {
    let mut p = portfolio();
    p.mount("/");
    let layout = page_at(0.0);

    let first = p.scroll_to_section(PageSectionTheme::Contact, &layout, 0.0);
    assert_eq!(first, Ok(3000.0 - 84.0));
    let second = p.scroll_to_section(PageSectionTheme::Projects, &layout, 100.0);
    assert_eq!(second, Ok(900.0 - 84.0));
    // trace tick plus a single scroll frame
    assert_eq!(p.scheduler().live(), 2);
    p.take_commands();

    let mut now = 100.0;
    let mut offsets = Vec::new();
    while p.wants_frame() {
        now += 16.0;
        p.run_frame(now, &layout);
        for command in p.take_commands() {
            if let ViewCommand::ScrollTo { offset } = command {
                offsets.push(offset);
            }
        }
    }
    assert_eq!(offsets.last(), Some(&816.0));
    assert!(offsets.iter().all(|o| (0.0..=816.0).contains(o)));
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn smooth_scroll_needs_the_section_box() {
    let mut p = portfolio();
    p.mount("/");
    let empty = LayoutSnapshot::new(Viewport::new(0.0, 1280.0, VIEWPORT_H, 0.0));
    assert!(
        p.scroll_to_section(PageSectionTheme::About, &empty, 0.0)
            .is_err()
    );
    assert!(!p.wants_frame());
}

#[test]
fn unmount_leaves_no_live_timers() {
    let mut p = portfolio();
    p.mount("/");
    p.advance(2080.0);
    p.notify_scroll();
    let _ = p.scroll_to_section(PageSectionTheme::About, &page_at(0.0), 2080.0);
    assert!(p.scheduler().live() >= 3);

    p.take_commands();
    p.unmount();
    assert_eq!(p.scheduler().live(), 0);
    assert!(p.trace_lines().is_empty());

    let commands = p.take_commands();
    let mut classes: BTreeSet<String> = ["theme-home".to_string()].into();
    apply(&mut classes, &commands);
    assert!(classes.is_empty());

    // time keeps moving; nothing fires
    p.advance(60_000.0);
    assert!(p.trace_lines().is_empty());
}

#[test]
fn unknown_path_redirects_home() {
    let mut p = portfolio();
    p.mount("/blog/post-1");
    assert_eq!(p.route(), Some(&Route::Home));
    let commands = p.take_commands();
    assert_eq!(
        commands.first(),
        Some(&ViewCommand::ReplaceUrl { path: "/".into() })
    );
}

#[test]
fn unknown_project_is_not_found() {
    let mut p = portfolio();
    p.mount("/");
    p.advance(1040.0);
    p.navigate("/projetos/does-not-exist");
    assert!(matches!(p.project_view(), Some(ProjectView::NotFound)));
    assert_eq!(p.page_theme(), PageSectionTheme::Projects);
    assert_eq!(p.project_theme(), ProjectCategoryTheme::Ui);
    assert_eq!(p.scheduler().live(), 0);
}

#[test]
fn detail_route_round_trip() {
    let mut p = portfolio();
    p.mount("/");
    p.advance(1040.0);
    p.take_commands();

    p.navigate("/projetos/rotaz");
    let commands = p.take_commands();
    assert!(commands.contains(&ViewCommand::SetProjectTheme {
        theme: ProjectCategoryTheme::Api
    }));
    assert!(commands.contains(&ViewCommand::SwapRootClass {
        remove: vec![
            "theme-home".into(),
            "theme-about".into(),
            "theme-contact".into()
        ],
        add: Some("theme-projects".into()),
    }));
    assert_eq!(
        p.project_view().and_then(|v| v.project()).map(|proj| proj.id),
        Some("rotaz")
    );
    assert_eq!(p.scheduler().live(), 0);

    p.navigate("/");
    assert_eq!(p.page_theme(), PageSectionTheme::Home);
    assert_eq!(p.scheduler().live(), 1);
    // the trace restarts on the bank of the last project visited
    p.advance(1040.0 + 520.0);
    assert_eq!(p.trace_route(), Some("api/webhook"));
}

#[test]
fn navigating_to_the_current_route_is_a_no_op() {
    let mut p = portfolio();
    p.mount("/projetos/maria-fumaca");
    p.take_commands();
    p.navigate("/projetos/maria-fumaca/");
    assert!(p.take_commands().is_empty());
}
