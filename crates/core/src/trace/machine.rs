//! The trace animator as a single transition function.
//!
//! Appending a line and checking whether it completed the scenario happen
//! in the same step, so the completion check always sees the line that
//! was just appended.

use std::collections::VecDeque;

use folio_protocol::{ProjectCategoryTheme, TraceKind, TraceLine};

use crate::trace::scenario::ScenarioBank;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorState {
    pub theme: ProjectCategoryTheme,
    /// Index into the current theme's scenario list.
    pub scenario: usize,
    /// Lines emitted for the current scenario, including stale ticks.
    pub emitted: usize,
    /// Step lines emitted for the current scenario.
    pub steps_emitted: usize,
    pub lines: VecDeque<TraceLine>,
    pub reset_pending: bool,
}

impl AnimatorState {
    pub fn new(theme: ProjectCategoryTheme) -> Self {
        Self {
            theme,
            scenario: 0,
            emitted: 0,
            steps_emitted: 0,
            lines: VecDeque::new(),
            reset_pending: false,
        }
    }

    fn restart_scenario(&mut self) {
        self.emitted = 0;
        self.steps_emitted = 0;
        self.lines.clear();
        self.reset_pending = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorEvent {
    /// Interval fired. Carries the id and clock stamp for the new line so
    /// the transition itself stays pure.
    Tick { id: String, clock: String },
    /// The delayed post-completion reset fired.
    ResetDue,
    ThemeChanged(ProjectCategoryTheme),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScheduleReset,
    CancelReset,
    LinesChanged,
}

pub struct MachineContext<'a> {
    pub bank: &'a ScenarioBank,
    pub capacity: usize,
    pub marker: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AnimatorState,
    pub effects: Vec<Effect>,
}

pub fn transition(state: &AnimatorState, event: AnimatorEvent, ctx: &MachineContext<'_>) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        AnimatorEvent::Tick { id, clock } => {
            let scripts = ctx.bank.scripts(next.theme);
            if let Some(script) = scripts.get(next.scenario % scripts.len().max(1)) {
                let (kind, text) = script.line(next.emitted, &clock);
                next.emitted += 1;
                if kind == TraceKind::Step {
                    next.steps_emitted += 1;
                }
                let completes = text.contains(ctx.marker) && next.steps_emitted >= script.step_count();

                next.lines.push_back(TraceLine { id, kind, text });
                while next.lines.len() > ctx.capacity.max(1) {
                    next.lines.pop_front();
                }
                effects.push(Effect::LinesChanged);

                if completes && !next.reset_pending {
                    next.reset_pending = true;
                    effects.push(Effect::ScheduleReset);
                }
            }
        }
        AnimatorEvent::ResetDue => {
            if next.reset_pending {
                let len = ctx.bank.len(next.theme).max(1);
                next.scenario = (next.scenario + 1) % len;
                next.restart_scenario();
                effects.push(Effect::LinesChanged);
            }
        }
        AnimatorEvent::ThemeChanged(theme) => {
            if theme != next.theme {
                if next.reset_pending {
                    effects.push(Effect::CancelReset);
                }
                next.theme = theme;
                next.scenario = 0;
                next.restart_scenario();
                effects.push(Effect::LinesChanged);
            }
        }
    }

    Transition {
        state: next,
        effects,
    }
}
