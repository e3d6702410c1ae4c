use std::collections::VecDeque;

use folio_protocol::{ProjectCategoryTheme, TraceLine, TraceStatus};

use crate::config::TraceConfig;
use crate::scheduler::{PageTimer, Scheduler, TimerId};
use crate::theme_store::ThemeReader;
use crate::trace::clock::TraceClock;
use crate::trace::ids::LineIds;
use crate::trace::machine::{self, AnimatorEvent, AnimatorState, Effect, MachineContext};
use crate::trace::scenario::{ScenarioBank, Script};

/// The "live system trace" panel: a timer-driven stream of fabricated log
/// lines that cycles through the scenario bank of the current project
/// category.
///
/// The animator owns two timers in the shared scheduler: the tick interval
/// (armed while mounted and not paused) and the delayed post-completion
/// reset. Both are cancelled by [`TraceAnimator::unmount`].
pub struct TraceAnimator {
    config: TraceConfig,
    bank: ScenarioBank,
    theme: ThemeReader<ProjectCategoryTheme>,
    seen_theme_version: u64,
    state: AnimatorState,
    ids: Box<dyn LineIds>,
    clock: Box<dyn TraceClock>,
    paused: bool,
    mounted: bool,
    tick_timer: Option<TimerId>,
    reset_timer: Option<TimerId>,
}

impl TraceAnimator {
    pub fn new(
        config: TraceConfig,
        bank: ScenarioBank,
        theme: ThemeReader<ProjectCategoryTheme>,
        ids: Box<dyn LineIds>,
        clock: Box<dyn TraceClock>,
    ) -> Self {
        let state = AnimatorState::new(theme.get());
        let seen_theme_version = theme.version();
        Self {
            config,
            bank,
            theme,
            seen_theme_version,
            state,
            ids,
            clock,
            paused: false,
            mounted: false,
            tick_timer: None,
            reset_timer: None,
        }
    }

    /// Start from scenario 0 with an empty buffer and arm the tick interval.
    pub fn mount(&mut self, sched: &mut Scheduler<PageTimer>) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.state = AnimatorState::new(self.theme.get());
        self.seen_theme_version = self.theme.version();
        if !self.paused {
            self.arm_tick(sched);
        }
        log::debug!("trace animator mounted on `{}` bank", self.state.theme);
    }

    /// Cancel both timers and drop the buffer.
    pub fn unmount(&mut self, sched: &mut Scheduler<PageTimer>) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.disarm_tick(sched);
        if let Some(id) = self.reset_timer.take() {
            sched.cancel(id);
        }
        self.state = AnimatorState::new(self.state.theme);
        log::debug!("trace animator unmounted, timers released");
    }

    /// Suspend or resume ticking. The buffer, the cursor and any pending
    /// reset are left alone. Returns `true` if the flag changed.
    pub fn set_paused(&mut self, paused: bool, sched: &mut Scheduler<PageTimer>) -> bool {
        if self.paused == paused {
            return false;
        }
        self.paused = paused;
        if self.mounted {
            if paused {
                self.disarm_tick(sched);
            } else {
                self.arm_tick(sched);
            }
        }
        true
    }

    /// Apply a project-theme change if the reader moved since last look.
    /// Returns `true` if the buffer was cleared.
    pub fn sync_theme(&mut self, sched: &mut Scheduler<PageTimer>) -> bool {
        let version = self.theme.version();
        if version == self.seen_theme_version {
            return false;
        }
        self.seen_theme_version = version;
        let theme = self.theme.get();
        if !self.mounted {
            self.state = AnimatorState::new(theme);
            return false;
        }
        log::debug!("trace animator switching to `{theme}` bank");
        self.apply(AnimatorEvent::ThemeChanged(theme), sched)
    }

    /// Handle one of this animator's timers. Returns `true` if the visible
    /// lines changed.
    pub fn on_timer(&mut self, timer: PageTimer, sched: &mut Scheduler<PageTimer>) -> bool {
        if !self.mounted {
            return false;
        }
        let cleared = self.sync_theme(sched);
        let changed = match timer {
            PageTimer::TraceTick => {
                let event = AnimatorEvent::Tick {
                    id: self.ids.next_id(),
                    clock: self.clock.hms(),
                };
                self.apply(event, sched)
            }
            PageTimer::TraceReset => {
                self.reset_timer = None;
                self.apply(AnimatorEvent::ResetDue, sched)
            }
            PageTimer::SectionFrame | PageTimer::ScrollFrame => false,
        };
        cleared || changed
    }

    pub fn lines(&self) -> &VecDeque<TraceLine> {
        &self.state.lines
    }

    pub fn status(&self) -> TraceStatus {
        if self.paused {
            TraceStatus::Paused
        } else {
            TraceStatus::Live
        }
    }

    pub fn scenario_index(&self) -> usize {
        self.state.scenario
    }

    pub fn theme(&self) -> ProjectCategoryTheme {
        self.state.theme
    }

    pub fn reset_pending(&self) -> bool {
        self.state.reset_pending
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Route of the scenario currently streaming.
    pub fn current_route(&self) -> Option<&str> {
        let scripts = self.bank.scripts(self.state.theme);
        scripts
            .get(self.state.scenario % scripts.len().max(1))
            .map(Script::route)
    }

    fn apply(&mut self, event: AnimatorEvent, sched: &mut Scheduler<PageTimer>) -> bool {
        let ctx = MachineContext {
            bank: &self.bank,
            capacity: self.config.capacity,
            marker: &self.config.completion_marker,
        };
        let transition = machine::transition(&self.state, event, &ctx);
        let advanced = transition.state.scenario != self.state.scenario;
        self.state = transition.state;

        let mut changed = false;
        for effect in transition.effects {
            match effect {
                Effect::ScheduleReset => {
                    if let Some(old) = self.reset_timer.take() {
                        sched.cancel(old);
                    }
                    self.reset_timer =
                        Some(sched.set_timeout(self.config.reset_delay_ms, PageTimer::TraceReset));
                }
                Effect::CancelReset => {
                    if let Some(id) = self.reset_timer.take() {
                        sched.cancel(id);
                    }
                }
                Effect::LinesChanged => changed = true,
            }
        }
        if advanced {
            log::debug!(
                "trace scenario advanced to {} on `{}` bank",
                self.state.scenario,
                self.state.theme
            );
        }
        changed
    }

    fn arm_tick(&mut self, sched: &mut Scheduler<PageTimer>) {
        if self.tick_timer.is_none() {
            self.tick_timer = Some(sched.set_interval(self.config.tick_ms, PageTimer::TraceTick));
        }
    }

    fn disarm_tick(&mut self, sched: &mut Scheduler<PageTimer>) {
        if let Some(id) = self.tick_timer.take() {
            sched.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme_store::theme_channel;
    use crate::trace::clock::FixedClock;
    use crate::trace::ids::SequentialLineIds;

    fn animator(theme: ThemeReader<ProjectCategoryTheme>) -> TraceAnimator {
        TraceAnimator::new(
            TraceConfig::default(),
            ScenarioBank::builtin(),
            theme,
            Box::new(SequentialLineIds::default()),
            Box::new(FixedClock("08:30:00".into())),
        )
    }

    fn run_until(a: &mut TraceAnimator, sched: &mut Scheduler<PageTimer>, until: f64) {
        while let Some((_, timer)) = sched.pop_due(until) {
            a.on_timer(timer, sched);
        }
        sched.set_now(until);
    }

    #[test]
    fn pause_disarms_and_resume_rearms_from_resume_time() {
        let (_writer, reader) = theme_channel(ProjectCategoryTheme::Ui);
        let mut sched = Scheduler::new(0.0);
        let mut a = animator(reader);
        a.mount(&mut sched);
        run_until(&mut a, &mut sched, 1100.0);
        assert_eq!(a.lines().len(), 2);

        assert!(a.set_paused(true, &mut sched));
        assert_eq!(a.status(), TraceStatus::Paused);
        run_until(&mut a, &mut sched, 5000.0);
        assert_eq!(a.lines().len(), 2);

        a.set_paused(false, &mut sched);
        assert_eq!(sched.next_deadline(), Some(5520.0));
        run_until(&mut a, &mut sched, 5520.0);
        let texts: Vec<&str> = a.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["08:30:00  incoming  ui/render", "→ mount component", "→ fetch props"]
        );
    }

    #[test]
    fn unmount_releases_every_timer() {
        let (_writer, reader) = theme_channel(ProjectCategoryTheme::Ui);
        let mut sched = Scheduler::new(0.0);
        let mut a = animator(reader);
        a.mount(&mut sched);
        run_until(&mut a, &mut sched, 2080.0);
        assert!(a.reset_pending());
        assert_eq!(sched.live(), 2);

        a.unmount(&mut sched);
        assert_eq!(sched.live(), 0);
        assert!(a.lines().is_empty());
    }

    #[test]
    fn theme_switch_is_picked_up_on_next_timer() {
        let (writer, reader) = theme_channel(ProjectCategoryTheme::Ui);
        let mut sched = Scheduler::new(0.0);
        let mut a = animator(reader);
        a.mount(&mut sched);
        run_until(&mut a, &mut sched, 1040.0);
        writer.set(ProjectCategoryTheme::Api);
        run_until(&mut a, &mut sched, 1560.0);
        assert_eq!(a.theme(), ProjectCategoryTheme::Api);
        assert_eq!(a.lines().len(), 1);
        assert_eq!(a.lines()[0].text, "08:30:00  incoming  api/webhook");
    }
}
