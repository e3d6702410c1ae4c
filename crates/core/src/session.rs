//! The page session: one scheduler, two theme cells, and the components
//! mounted for the current route.
//!
//! Hosts feed it time ([`Portfolio::advance`], [`Portfolio::run_frame`]),
//! input notifications, and layout, and drain [`ViewCommand`]s from it.
//! Times are milliseconds on the host's monotonic clock, starting at 0 when
//! the session is created.

use folio_protocol::{
    PageSectionTheme, ProjectCategoryTheme, TraceLine, TraceStatus, ViewCommand,
};

use crate::config::FolioConfig;
use crate::error::{FolioError, LayoutError};
use crate::layout::{LayoutProbe, section_document_top};
use crate::model::route::{ProjectView, Route};
use crate::scheduler::{PageTimer, Scheduler};
use crate::scroll::{CardTracker, SectionThemeDriver, SmoothScroller, scroll_target};
use crate::theme_store::{ThemeReader, ThemeWriter, theme_channel};
use crate::trace::{LineIds, LocalClock, TraceAnimator, TraceClock, UuidLineIds};

#[derive(Debug, Clone, Copy)]
enum Mounted {
    No,
    Home,
    Project(ProjectView),
}

pub struct Portfolio {
    config: FolioConfig,
    sched: Scheduler<PageTimer>,
    page_writer: ThemeWriter<PageSectionTheme>,
    page_reader: ThemeReader<PageSectionTheme>,
    project_writer: ThemeWriter<ProjectCategoryTheme>,
    project_reader: ThemeReader<ProjectCategoryTheme>,
    driver: SectionThemeDriver,
    cards: CardTracker,
    scroller: SmoothScroller,
    animator: TraceAnimator,
    mounted: Mounted,
    route: Option<Route>,
    root_class: Option<&'static str>,
    announced_project: Option<ProjectCategoryTheme>,
    outbox: Vec<ViewCommand>,
}

impl Portfolio {
    /// A session with random line ids and the local wall clock.
    pub fn new(config: FolioConfig) -> Result<Self, FolioError> {
        Self::with_sources(config, Box::new(UuidLineIds::default()), Box::new(LocalClock))
    }

    pub fn with_sources(
        config: FolioConfig,
        ids: Box<dyn LineIds>,
        clock: Box<dyn TraceClock>,
    ) -> Result<Self, FolioError> {
        config.validate()?;
        let bank = config.scenario_bank()?;

        let (page_writer, page_reader) = theme_channel(PageSectionTheme::Home);
        let (project_writer, project_reader) = theme_channel(ProjectCategoryTheme::default());
        let animator = TraceAnimator::new(
            config.trace.clone(),
            bank,
            project_reader.clone(),
            ids,
            clock,
        );

        Ok(Self {
            driver: SectionThemeDriver::new(config.driver),
            cards: CardTracker::new(config.cards),
            scroller: SmoothScroller::new(config.scroll),
            animator,
            config,
            sched: Scheduler::new(0.0),
            page_writer,
            page_reader,
            project_writer,
            project_reader,
            mounted: Mounted::No,
            route: None,
            root_class: None,
            announced_project: None,
            outbox: Vec::new(),
        })
    }

    /// Mount the page at `path`. Unknown paths mount home and ask the host
    /// to replace the URL.
    pub fn mount(&mut self, path: &str) {
        if self.route.is_some() {
            self.navigate(path);
            return;
        }
        let route = self.resolve(path);
        log::info!("mounting at {}", route.path());
        self.enter(route);
        self.sync();
    }

    pub fn navigate(&mut self, path: &str) {
        if self.route.is_none() {
            self.mount(path);
            return;
        }
        let route = self.resolve(path);
        if self.route.as_ref() == Some(&route) {
            self.sync();
            return;
        }
        log::info!("navigating to {}", route.path());
        self.leave();
        self.enter(route);
        self.sync();
    }

    /// Tear everything down. The scheduler holds no timers afterwards.
    pub fn unmount(&mut self) {
        if self.route.is_none() {
            return;
        }
        self.leave();
        self.route = None;
        self.mounted = Mounted::No;
        self.sync();
        log::info!("unmounted, {} timers live", self.sched.live());
    }

    /// Fire every timer due at or before `now_ms`, in deadline order.
    pub fn advance(&mut self, now_ms: f64) {
        while let Some((_, timer)) = self.sched.pop_due(now_ms) {
            match timer {
                PageTimer::TraceTick | PageTimer::TraceReset => {
                    if self.animator.on_timer(timer, &mut self.sched) {
                        self.trace_changed();
                    }
                }
                PageTimer::SectionFrame | PageTimer::ScrollFrame => {}
            }
        }
        self.sched.set_now(now_ms);
        self.sync();
    }

    /// Run the pending animation-frame callbacks against one layout read.
    pub fn run_frame(&mut self, now_ms: f64, layout: &dyn LayoutProbe) {
        for frame in self.sched.begin_frame(now_ms) {
            match frame {
                PageTimer::SectionFrame => {
                    self.driver.on_frame(layout, &self.page_writer);
                    self.cards.update(layout, &self.project_writer);
                }
                PageTimer::ScrollFrame => {
                    if let Some(offset) = self.scroller.on_frame(now_ms, &mut self.sched) {
                        self.outbox.push(ViewCommand::ScrollTo { offset });
                    }
                }
                PageTimer::TraceTick | PageTimer::TraceReset => {}
            }
        }
        self.sync();
    }

    pub fn notify_scroll(&mut self) {
        self.driver.request_recompute(&mut self.sched);
    }

    pub fn notify_resize(&mut self) {
        self.driver.request_recompute(&mut self.sched);
    }

    /// Start a smooth scroll to `section`, replacing any running one.
    /// Returns the target offset.
    pub fn scroll_to_section(
        &mut self,
        section: PageSectionTheme,
        layout: &dyn LayoutProbe,
        now_ms: f64,
    ) -> Result<f64, LayoutError> {
        if !matches!(self.mounted, Mounted::Home) {
            return Err(LayoutError::MissingSection(section.as_str()));
        }
        self.sched.set_now(now_ms);
        let top = section_document_top(layout, section)?;
        let target = scroll_target(top, self.config.scroll.header_offset_px);
        let from = layout.viewport().scroll_y;
        log::debug!("smooth scroll to {section}: {from:.0} -> {target:.0}");
        self.scroller.start(from, target, &mut self.sched);
        Ok(target)
    }

    /// Re-evaluate which project card is in focus.
    pub fn update_cards(&mut self, layout: &dyn LayoutProbe) -> Option<ProjectCategoryTheme> {
        if !matches!(self.mounted, Mounted::Home) {
            return None;
        }
        let written = self.cards.update(layout, &self.project_writer);
        self.sync();
        written
    }

    /// Hovering the trace panel pauses it. Resuming arms the next tick one
    /// interval after `now_ms`, however long the pause lasted.
    pub fn set_trace_hovered(&mut self, hovered: bool, now_ms: f64) {
        self.sched.set_now(now_ms);
        if self.animator.set_paused(hovered, &mut self.sched) {
            self.trace_changed();
        }
    }

    pub fn trace_lines(&self) -> Vec<TraceLine> {
        self.animator.lines().iter().cloned().collect()
    }

    pub fn trace_status(&self) -> TraceStatus {
        self.animator.status()
    }

    /// Route label of the scenario being streamed.
    pub fn trace_route(&self) -> Option<&str> {
        self.animator.current_route()
    }

    pub fn page_theme(&self) -> PageSectionTheme {
        self.page_reader.get()
    }

    pub fn project_theme(&self) -> ProjectCategoryTheme {
        self.project_reader.get()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// What the detail route shows, when it is mounted.
    pub fn project_view(&self) -> Option<ProjectView> {
        match self.mounted {
            Mounted::Project(view) => Some(view),
            Mounted::Home | Mounted::No => None,
        }
    }

    /// Id of the project card currently in focus on home.
    pub fn focused_project(&self) -> Option<&str> {
        match self.mounted {
            Mounted::Home => self.cards.focused(),
            Mounted::Project(_) | Mounted::No => None,
        }
    }

    pub fn take_commands(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.outbox)
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler<PageTimer> {
        &self.sched
    }

    /// When the host should call [`Portfolio::advance`] next.
    pub fn next_deadline(&self) -> Option<f64> {
        self.sched.next_deadline()
    }

    /// Whether the host should schedule a frame.
    pub fn wants_frame(&self) -> bool {
        self.sched.has_frame_request()
    }

    fn resolve(&mut self, path: &str) -> Route {
        let resolved = Route::resolve(path);
        if resolved.redirected {
            log::info!("unknown path `{path}`, redirecting home");
            self.outbox.push(ViewCommand::ReplaceUrl {
                path: resolved.route.path(),
            });
        }
        resolved.route
    }

    fn enter(&mut self, route: Route) {
        match &route {
            Route::Home => {
                self.driver.mount(&self.page_writer);
                self.cards.mount();
                self.animator.mount(&mut self.sched);
                self.mounted = Mounted::Home;
            }
            Route::Project(id) => {
                let view = ProjectView::for_id(id);
                match view.project() {
                    Some(project) => {
                        self.project_writer.set(project.category);
                    }
                    None => log::info!("no project `{id}`, showing not-found"),
                }
                self.page_writer.set(PageSectionTheme::Projects);
                self.mounted = Mounted::Project(view);
            }
        }
        self.route = Some(route);
    }

    fn leave(&mut self) {
        if let Mounted::Home = self.mounted {
            self.driver.unmount(&mut self.sched);
            self.cards.unmount();
            self.scroller.cancel(&mut self.sched);
            self.animator.unmount(&mut self.sched);
            self.trace_changed();
        }
    }

    /// Turn theme-cell state into host commands.
    fn sync(&mut self) {
        let class = self
            .route
            .as_ref()
            .map(|_| self.page_reader.get().root_class());
        if class != self.root_class {
            self.root_class = class;
            let remove = PageSectionTheme::all_root_classes()
                .into_iter()
                .filter(|c| Some(*c) != class)
                .map(str::to_string)
                .collect();
            log::debug!("root theme class -> {}", class.unwrap_or("none"));
            self.outbox.push(ViewCommand::SwapRootClass {
                remove,
                add: class.map(str::to_string),
            });
        }

        let project = self.project_reader.get();
        if self.route.is_some() && self.announced_project != Some(project) {
            self.announced_project = Some(project);
            self.outbox.push(ViewCommand::SetProjectTheme { theme: project });
        }

        if self.animator.sync_theme(&mut self.sched) {
            self.trace_changed();
        }
    }

    fn trace_changed(&mut self) {
        if !self.outbox.contains(&ViewCommand::TraceChanged) {
            self.outbox.push(ViewCommand::TraceChanged);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{FixedClock, SequentialLineIds};

    fn session() -> Portfolio {
        Portfolio::with_sources(
            FolioConfig::default(),
            Box::new(SequentialLineIds::default()),
            Box::new(FixedClock("09:15:00".into())),
        )
        .expect("default config is valid")
    }

    #[test]
    fn mount_applies_home_class_and_arms_trace() {
        let mut p = session();
        p.mount("/");
        let commands = p.take_commands();
        assert_eq!(
            commands[0],
            ViewCommand::SwapRootClass {
                remove: vec![
                    "theme-projects".into(),
                    "theme-about".into(),
                    "theme-contact".into()
                ],
                add: Some("theme-home".into()),
            }
        );
        assert_eq!(
            commands[1],
            ViewCommand::SetProjectTheme {
                theme: ProjectCategoryTheme::Ui
            }
        );
        assert_eq!(p.next_deadline(), Some(520.0));
    }

    #[test]
    fn hover_pauses_trace() {
        let mut p = session();
        p.mount("/");
        p.advance(600.0);
        p.set_trace_hovered(true, 600.0);
        assert_eq!(p.trace_status(), TraceStatus::Paused);
        p.advance(3000.0);
        assert_eq!(p.trace_lines().len(), 1);
        p.set_trace_hovered(false, 3000.0);
        assert_eq!(p.trace_status(), TraceStatus::Live);
    }

    #[test]
    fn resume_without_advancing_rearms_from_resume_time() {
        let mut p = session();
        p.mount("/");
        p.advance(1100.0);
        assert_eq!(p.trace_lines().len(), 2);

        p.set_trace_hovered(true, 1100.0);
        assert_eq!(p.next_deadline(), None);
        p.set_trace_hovered(false, 5000.0);
        assert_eq!(p.next_deadline(), Some(5520.0));

        p.advance(5000.0);
        assert_eq!(p.trace_lines().len(), 2);
        p.advance(5520.0);
        assert_eq!(p.trace_lines().len(), 3);
    }

    #[test]
    fn detail_route_owns_project_theme() {
        let mut p = session();
        p.mount("/projetos/ownfleet-cg");
        assert_eq!(p.project_theme(), ProjectCategoryTheme::Bot);
        assert_eq!(p.page_theme(), PageSectionTheme::Projects);
        assert_eq!(p.scheduler().live(), 0);
        assert!(p.trace_lines().is_empty());
    }
}
