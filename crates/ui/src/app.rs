use std::time::Duration;

use eframe::egui;
use folio_core::model::{
    ABOUT, CONTACT, ContactInfo, HERO, MockupImage, NoAssets, Project, ProjectView, Route,
    SECTIONS, projects, resolve_mockup_image,
};
use folio_core::scroll::scroll_progress;
use folio_core::{LayoutProbe, LayoutSnapshot, Portfolio};
use folio_protocol::{
    PageSectionTheme, ProjectCategoryTheme, Rect, ThemeToken, TraceKind, ViewCommand, Viewport,
};

use crate::theme::{self, ThemeMode};

const TRACE_PANEL_WIDTH: f32 = 340.0;
const SECTION_GAP: f32 = 56.0;

/// Something the user asked for while the panels were being drawn.
enum Action {
    Navigate(String),
    ScrollTo(PageSectionTheme),
    ToggleTheme,
}

/// Main application state.
pub struct FolioApp {
    session: Portfolio,
    contact: ContactInfo,
    theme_mode: ThemeMode,
    /// egui time of the first frame; the session clock counts from it.
    epoch: Option<f64>,
    /// Layout measured on the previous frame.
    layout: LayoutSnapshot,
    /// Offset the page scroll area must jump to on the next frame.
    pending_scroll: Option<f32>,
    /// Section to scroll to once home has been laid out again.
    pending_section: Option<PageSectionTheme>,
    last_offset: Option<f32>,
    last_size: egui::Vec2,
    path: String,
    root_class: Option<String>,
    trace_hovered: bool,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, mut session: Portfolio, path: &str) -> Self {
        let theme_mode = ThemeMode::Dark;
        cc.egui_ctx.set_visuals(theme_mode.visuals());
        theme::apply_typography(&cc.egui_ctx);

        session.mount(path);
        let path = session.route().map_or_else(|| "/".to_string(), Route::path);

        let mut app = Self {
            session,
            contact: ContactInfo::default(),
            theme_mode,
            epoch: None,
            layout: LayoutSnapshot::new(Viewport::new(0.0, 0.0, 0.0, 0.0)),
            pending_scroll: None,
            pending_section: None,
            last_offset: None,
            last_size: egui::Vec2::ZERO,
            path,
            root_class: None,
            trace_hovered: false,
        };
        app.apply_commands();
        app
    }

    fn now_ms(&mut self, ctx: &egui::Context) -> f64 {
        let t = ctx.input(|i| i.time);
        let epoch = *self.epoch.get_or_insert(t);
        (t - epoch) * 1000.0
    }

    fn apply_commands(&mut self) {
        for command in self.session.take_commands() {
            match command {
                ViewCommand::SwapRootClass { add, .. } => self.root_class = add,
                ViewCommand::SetProjectTheme { theme } => {
                    log::debug!("project accent -> {theme}");
                }
                ViewCommand::ScrollTo { offset } => self.pending_scroll = Some(offset as f32),
                ViewCommand::ReplaceUrl { path } => {
                    set_browser_url(&path, true);
                    self.path = path;
                }
                ViewCommand::TraceChanged => {}
            }
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context, actions: Vec<Action>, now: f64) {
        for action in actions {
            match action {
                Action::Navigate(path) => self.navigate(&path, now),
                Action::ScrollTo(section) => {
                    if self.session.project_view().is_some() {
                        self.navigate("/", now);
                        self.pending_section = Some(section);
                    } else {
                        self.scroll_to(section, now);
                    }
                }
                Action::ToggleTheme => {
                    self.theme_mode = self.theme_mode.toggled();
                    ctx.set_visuals(self.theme_mode.visuals());
                }
            }
        }
        self.apply_commands();
    }

    fn navigate(&mut self, path: &str, now: f64) {
        if self.trace_hovered {
            self.trace_hovered = false;
            self.session.set_trace_hovered(false, now);
        }
        self.session.navigate(path);
        if let Some(route) = self.session.route() {
            let resolved = route.path();
            if resolved != self.path {
                set_browser_url(&resolved, false);
                self.path = resolved;
            }
        }
        self.last_offset = None;
        self.pending_scroll = Some(0.0);
    }

    fn scroll_to(&mut self, section: PageSectionTheme, now: f64) {
        if let Err(e) = self.session.scroll_to_section(section, &self.layout, now) {
            log::warn!("cannot scroll to {section}: {e}");
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: f64) {
        if self.session.wants_frame() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.session.next_deadline() {
            let wait_ms = (deadline - now).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(wait_ms / 1000.0));
        }
    }

    fn top_bar(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let page = self.session.page_theme();
        let color = |token| theme::resolve(token, page, self.theme_mode);

        egui::TopBottomPanel::top("topbar")
            .frame(
                egui::Frame::new()
                    .fill(color(ThemeToken::TopbarBackground))
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(HERO.name)
                            .size(theme::FONT_EMPHASIS)
                            .strong()
                            .color(color(ThemeToken::TextPrimary)),
                    );
                    ui.separator();

                    for section in &SECTIONS {
                        let active = page == section.theme;
                        let token = if active {
                            ThemeToken::NavLinkActive
                        } else {
                            ThemeToken::NavLink
                        };
                        let text = egui::RichText::new(section.nav_label).color(color(token));
                        if ui.add(egui::Button::new(text).frame(active)).clicked() {
                            actions.push(Action::ScrollTo(section.theme));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = match self.theme_mode {
                            ThemeMode::Dark => "☀ Light",
                            ThemeMode::Light => "🌙 Dark",
                        };
                        if ui.button(label).clicked() {
                            actions.push(Action::ToggleTheme);
                        }
                        ui.separator();
                        if let Some(class) = &self.root_class {
                            ui.label(egui::RichText::new(class).small().color(color(ThemeToken::TextMuted)));
                        }
                        ui.label(
                            egui::RichText::new(&self.path)
                                .monospace()
                                .color(color(ThemeToken::TextSecondary)),
                        );
                    });
                });

                let viewport = self.layout.viewport();
                let percent =
                    scroll_progress(viewport.scroll_y, viewport.document_height, viewport.height);
                ui.add(
                    egui::ProgressBar::new((percent / 100.0) as f32)
                        .desired_height(3.0)
                        .fill(color(ThemeToken::ScrollProgress)),
                );
            });
    }

    /// Draws the trace panel and reports whether the pointer is over it.
    fn trace_panel(&self, ctx: &egui::Context) -> bool {
        let page = self.session.page_theme();
        let color = |token| theme::resolve(token, page, self.theme_mode);
        let status = self.session.trace_status();

        egui::SidePanel::right("trace")
            .resizable(false)
            .exact_width(TRACE_PANEL_WIDTH)
            .frame(
                egui::Frame::new()
                    .fill(color(ThemeToken::TraceBackground))
                    .inner_margin(egui::Margin::same(14)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(HERO.trace_title)
                            .strong()
                            .color(color(ThemeToken::TextPrimary)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(status.label())
                                .small()
                                .color(color(ThemeToken::TraceHint)),
                        );
                    });
                });
                if let Some(route) = self.session.trace_route() {
                    ui.label(
                        egui::RichText::new(route)
                            .monospace()
                            .color(color(ThemeToken::pill(self.session.project_theme()))),
                    );
                }
                ui.separator();

                for line in self.session.trace_lines() {
                    let token = match line.kind {
                        TraceKind::Meta => ThemeToken::TraceMeta,
                        TraceKind::Step => ThemeToken::TraceStep,
                    };
                    ui.label(
                        egui::RichText::new(line.text.as_str())
                            .monospace()
                            .color(color(token)),
                    );
                }
                ui.label(
                    egui::RichText::new(format!("▍ {}", HERO.trace_cursor))
                        .monospace()
                        .color(color(ThemeToken::TraceCursor)),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(HERO.trace_note)
                        .small()
                        .color(color(ThemeToken::TraceHint)),
                );
                ui.ui_contains_pointer()
            })
            .inner
    }

    fn home_page(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("home")
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_scroll.take() {
            area = area.vertical_scroll_offset(offset);
        }

        let page = Page {
            page: self.session.page_theme(),
            mode: self.theme_mode,
            contact: &self.contact,
            focused: self.session.focused_project(),
        };
        let mut sections = Vec::with_capacity(SECTIONS.len());
        let mut cards = Vec::new();

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                area.show(ui, |ui| {
                    ui.set_max_width(ui.available_width() - 24.0);
                    for section in &SECTIONS {
                        let rect = ui
                            .scope(|ui| {
                                match section.theme {
                                    PageSectionTheme::Home => page.hero(ui, actions),
                                    PageSectionTheme::Projects => {
                                        page.project_cards(ui, &mut cards, actions);
                                    }
                                    PageSectionTheme::About => page.about(ui),
                                    PageSectionTheme::Contact => page.contact(ui),
                                }
                                ui.add_space(SECTION_GAP);
                            })
                            .response
                            .rect;
                        sections.push((section.theme, rect));
                    }
                })
            })
            .inner;

        let inner = output.inner_rect;
        let relative = |r: egui::Rect| {
            Rect::new(
                f64::from(r.left() - inner.left()),
                f64::from(r.top() - inner.top()),
                f64::from(r.width()),
                f64::from(r.height()),
            )
        };
        let offset = output.state.offset.y;
        let mut layout = LayoutSnapshot::new(Viewport::new(
            f64::from(offset),
            f64::from(inner.width()),
            f64::from(inner.height()),
            f64::from(output.content_size.y),
        ));
        for (section, rect) in sections {
            layout = layout.with_section(section, relative(rect));
        }
        for (id, rect) in cards {
            layout = layout.with_card(id, relative(rect));
        }
        self.layout = layout;

        if inner.size() != self.last_size {
            self.last_size = inner.size();
            self.session.notify_resize();
        }
        if self.last_offset != Some(offset) {
            self.last_offset = Some(offset);
            self.session.notify_scroll();
            self.session.update_cards(&self.layout);
        }
    }

    fn detail_page(&mut self, ctx: &egui::Context, view: ProjectView, actions: &mut Vec<Action>) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("detail")
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_scroll.take() {
            area = area.vertical_scroll_offset(offset);
        }
        let page = Page {
            page: self.session.page_theme(),
            mode: self.theme_mode,
            contact: &self.contact,
            focused: None,
        };

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                area.show(ui, |ui| {
                    if ui.link("← Back").clicked() {
                        actions.push(Action::Navigate("/".to_string()));
                    }
                    ui.add_space(12.0);
                    match view.project() {
                        Some(project) => page.project_detail(ui, project),
                        None => {
                            ui.heading("Project not found");
                            ui.label("That case does not exist or has moved.");
                        }
                    }
                })
            })
            .inner;

        let inner = output.inner_rect;
        self.layout = LayoutSnapshot::new(Viewport::new(
            f64::from(output.state.offset.y),
            f64::from(inner.width()),
            f64::from(inner.height()),
            f64::from(output.content_size.y),
        ));
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now_ms(ctx);
        self.session.advance(now);
        if self.session.wants_frame() {
            self.session.run_frame(now, &self.layout);
        }
        self.apply_commands();

        let mut actions = Vec::new();
        self.top_bar(ctx, &mut actions);

        match self.session.project_view() {
            Some(view) => self.detail_page(ctx, view, &mut actions),
            None => {
                let hovered = self.trace_panel(ctx);
                if hovered != self.trace_hovered {
                    self.trace_hovered = hovered;
                    self.session.set_trace_hovered(hovered, now);
                }
                self.home_page(ctx, &mut actions);
                if let Some(section) = self.pending_section.take() {
                    self.scroll_to(section, now);
                }
            }
        }

        self.apply_actions(ctx, actions, now);
        self.schedule_repaint(ctx, now);
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        self.session.unmount();
    }
}

/// Read-only view state shared by the page sections.
struct Page<'a> {
    page: PageSectionTheme,
    mode: ThemeMode,
    contact: &'a ContactInfo,
    focused: Option<&'a str>,
}

impl Page<'_> {
    fn color(&self, token: ThemeToken) -> egui::Color32 {
        theme::resolve(token, self.page, self.mode)
    }

    fn text(&self, text: &str, token: ThemeToken) -> egui::RichText {
        egui::RichText::new(text).color(self.color(token))
    }

    fn title(&self, ui: &mut egui::Ui, text: &str) {
        ui.label(
            self.text(text, ThemeToken::TextPrimary)
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(8.0);
    }

    fn bullets(&self, ui: &mut egui::Ui, items: &[&str]) {
        for item in items {
            ui.label(self.text(&format!("• {item}"), ThemeToken::TextSecondary));
        }
    }

    fn chips(&self, ui: &mut egui::Ui, chips: &[&str]) {
        ui.horizontal_wrapped(|ui| {
            for chip in chips {
                egui::Frame::new()
                    .fill(self.color(ThemeToken::Chip))
                    .corner_radius(egui::CornerRadius::same(10))
                    .inner_margin(egui::Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(self.text(chip, ThemeToken::TextSecondary).small());
                    });
            }
        });
    }

    fn pill(&self, ui: &mut egui::Ui, category: ProjectCategoryTheme) {
        let color = self.color(ThemeToken::pill(category));
        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, color))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(8, 1))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(category.pill_label()).small().strong().color(color));
            });
    }

    fn hero(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.add_space(32.0);
        ui.label(self.text(HERO.role, ThemeToken::TextMuted));
        ui.label(
            self.text(HERO.headline, ThemeToken::TextPrimary)
                .size(theme::FONT_DISPLAY)
                .strong(),
        );
        ui.label(
            self.text(HERO.headline_accent, ThemeToken::Accent)
                .size(theme::FONT_DISPLAY)
                .strong(),
        );
        ui.add_space(12.0);
        ui.label(self.text(HERO.subhead, ThemeToken::TextSecondary).size(theme::FONT_EMPHASIS));
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("See projects").clicked() {
                actions.push(Action::ScrollTo(PageSectionTheme::Projects));
            }
            if ui.button("Get in touch").clicked() {
                actions.push(Action::ScrollTo(PageSectionTheme::Contact));
            }
        });
        ui.add_space(12.0);
        self.chips(ui, HERO.chips);
    }

    fn project_cards(
        &self,
        ui: &mut egui::Ui,
        cards: &mut Vec<(&'static str, egui::Rect)>,
        actions: &mut Vec<Action>,
    ) {
        self.title(ui, "Projects");
        for project in projects() {
            let accent = self.color(ThemeToken::pill(project.category));
            let stroke = if self.focused == Some(project.id) {
                egui::Stroke::new(2.0, accent)
            } else {
                egui::Stroke::new(1.0, self.color(ThemeToken::Border))
            };
            let response = egui::Frame::new()
                .fill(self.color(ThemeToken::Surface))
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        self.pill(ui, project.category);
                        ui.label(
                            self.text(project.title, ThemeToken::TextPrimary)
                                .size(theme::FONT_EMPHASIS)
                                .strong(),
                        );
                    });
                    ui.label(self.text(project.tagline, ThemeToken::TextSecondary));
                    self.bullets(ui, project.bullets);
                    self.chips(ui, project.stack);
                    ui.horizontal(|ui| {
                        if ui.link("Open case").clicked() {
                            actions.push(Action::Navigate(project.path()));
                        }
                        if let Some(site) = project.links.site {
                            ui.hyperlink_to("Live", site);
                        }
                        if let Some(repo) = project.links.repo {
                            ui.hyperlink_to("Code", repo);
                        }
                    });
                })
                .response;
            cards.push((project.id, response.rect));
            ui.add_space(12.0);
        }
    }

    fn about(&self, ui: &mut egui::Ui) {
        self.title(ui, ABOUT.title);
        for block in ABOUT.blocks {
            if let Some(heading) = block.heading {
                ui.label(self.text(heading, ThemeToken::TextPrimary).strong());
            }
            ui.label(self.text(block.text, ThemeToken::TextSecondary));
            ui.add_space(8.0);
        }
        ui.label(self.text(ABOUT.interests_heading, ThemeToken::TextPrimary).strong());
        self.bullets(ui, ABOUT.interests);
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for card in ABOUT.cards {
                egui::Frame::new()
                    .fill(self.color(ThemeToken::AccentSoft))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_max_width(220.0);
                        ui.label(self.text(card.title, ThemeToken::Accent).strong());
                        ui.label(self.text(card.text, ThemeToken::TextSecondary).small());
                    });
            }
        });
    }

    fn contact(&self, ui: &mut egui::Ui) {
        self.title(ui, CONTACT.title);
        ui.label(self.text(CONTACT.lead, ThemeToken::TextSecondary));
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(self.text(&self.contact.email, ThemeToken::TextPrimary).strong());
            ui.hyperlink_to("Send email", self.contact.mailto());
            if ui.small_button("Copy").clicked() {
                ui.ctx().copy_text(self.contact.email.clone());
            }
        });
        ui.horizontal(|ui| {
            ui.hyperlink_to("GitHub", &self.contact.github);
            ui.hyperlink_to("LinkedIn", &self.contact.linkedin);
        });
        ui.add_space(8.0);
        ui.label(self.text(CONTACT.subject_hint, ThemeToken::TextMuted).small());
        ui.label(self.text(CONTACT.note, ThemeToken::TextMuted).small());
    }

    fn project_detail(&self, ui: &mut egui::Ui, project: &Project) {
        let detail = &project.detail;
        ui.horizontal(|ui| {
            self.pill(ui, project.category);
            ui.label(
                self.text(project.title, ThemeToken::TextPrimary)
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
        });
        ui.label(self.text(detail.hook, ThemeToken::Accent).size(theme::FONT_EMPHASIS));
        ui.add_space(8.0);
        ui.label(self.text(detail.overview, ThemeToken::TextSecondary));
        ui.label(
            self.text(
                &format!("{} · {} · {}", detail.role, detail.timeline, detail.status),
                ThemeToken::TextMuted,
            )
            .small(),
        );

        for (heading, text) in [
            ("Context", detail.context),
            ("Challenge", detail.challenge),
            ("Strategy", detail.strategy),
        ] {
            ui.add_space(12.0);
            ui.label(self.text(heading, ThemeToken::TextPrimary).strong());
            ui.label(self.text(text, ThemeToken::TextSecondary));
        }
        for (heading, items) in [("Outcomes", detail.outcomes), ("Highlights", detail.highlights)] {
            ui.add_space(12.0);
            ui.label(self.text(heading, ThemeToken::TextPrimary).strong());
            self.bullets(ui, items);
        }

        ui.add_space(16.0);
        self.title(ui, "Mockups");
        ui.horizontal_wrapped(|ui| {
            for mockup in detail.mockups {
                ui.vertical(|ui| {
                    ui.set_max_width(260.0);
                    match resolve_mockup_image(mockup, &NoAssets) {
                        MockupImage::Asset { path } => {
                            ui.label(self.text(path, ThemeToken::TextMuted).monospace());
                        }
                        MockupImage::Placeholder { view } => self.placeholder(ui, view.label()),
                    }
                    ui.label(self.text(mockup.name, ThemeToken::TextPrimary).strong());
                    ui.label(self.text(mockup.focus, ThemeToken::TextMuted).small());
                    self.bullets(ui, mockup.notes);
                });
            }
        });

        ui.add_space(16.0);
        self.chips(ui, project.stack);
        ui.horizontal(|ui| {
            if let Some(site) = project.links.site {
                ui.hyperlink_to("Live", site);
            }
            if let Some(repo) = project.links.repo {
                ui.hyperlink_to("Code", repo);
            }
        });
    }

    fn placeholder(&self, ui: &mut egui::Ui, label: &str) {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(240.0, 150.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::same(8), self.color(ThemeToken::Surface));
        painter.rect_stroke(
            rect,
            egui::CornerRadius::same(8),
            egui::Stroke::new(1.0, self.color(ThemeToken::Border)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{label} preview"),
            egui::FontId::proportional(theme::FONT_CAPTION),
            self.color(ThemeToken::TextMuted),
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn set_browser_url(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log::warn!("history update failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_browser_url(path: &str, replace: bool) {
    log::debug!("url -> {path} (replace: {replace})");
}
