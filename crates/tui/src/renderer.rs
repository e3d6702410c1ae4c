use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::{LayoutProbe, Portfolio};
use folio_core::model::{ContactInfo, HERO, SECTIONS, project_by_id};
use folio_core::scroll::scroll_progress;
use folio_protocol::{PageSectionTheme, ProjectCategoryTheme, ThemeToken, TraceKind, ViewCommand};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::page::{DocLine, Document, LineStyle, ROW_PX, TermLayout};

const TRACE_WIDTH: u16 = 46;
const SCROLL_STEP: usize = 3;

fn accent(page: PageSectionTheme) -> Color {
    match page {
        PageSectionTheme::Home => Color::Cyan,
        PageSectionTheme::Projects => Color::Magenta,
        PageSectionTheme::About => Color::Yellow,
        PageSectionTheme::Contact => Color::Green,
    }
}

fn theme_to_color(token: ThemeToken, page: PageSectionTheme) -> Color {
    match token {
        ThemeToken::Background | ThemeToken::Surface => Color::Black,
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::Accent | ThemeToken::NavLinkActive | ThemeToken::ScrollProgress => accent(page),
        ThemeToken::AccentSoft => Color::Rgb(70, 70, 90),
        ThemeToken::TopbarBackground => Color::Rgb(20, 20, 28),
        ThemeToken::NavLink => Color::Gray,
        ThemeToken::PillUi => Color::LightBlue,
        ThemeToken::PillApi => Color::LightGreen,
        ThemeToken::PillBot => Color::LightMagenta,
        ThemeToken::Chip => Color::Gray,
        ThemeToken::TraceBackground => Color::Rgb(10, 12, 16),
        ThemeToken::TraceMeta => Color::LightCyan,
        ThemeToken::TraceStep => Color::Gray,
        ThemeToken::TraceCursor => Color::Green,
        ThemeToken::TraceHint => Color::DarkGray,
    }
}

/// Columns left for the page when the trace panel sits beside it.
fn text_width(cols: u16) -> u16 {
    if cols > TRACE_WIDTH + 30 {
        cols - TRACE_WIDTH
    } else {
        cols
    }
}

/// The trace pauses while the `p` toggle is on or the mouse is over it.
#[derive(Debug, Default, Clone, Copy)]
struct TracePause {
    toggled: bool,
    hovered: bool,
}

impl TracePause {
    fn paused(self) -> bool {
        self.toggled || self.hovered
    }

    /// Flip the key toggle. Returns the new combined flag.
    fn toggle(&mut self) -> bool {
        self.toggled = !self.toggled;
        self.paused()
    }

    /// Record the mouse position. Returns the new combined flag.
    fn hover(&mut self, inside: bool) -> bool {
        self.hovered = inside;
        self.paused()
    }
}

/// Host-side state that mirrors what a browser would hold.
struct Screen {
    path: String,
    doc: Document,
    scroll_row: usize,
    root_class: Option<String>,
    project_theme: ProjectCategoryTheme,
    trace_area: Rect,
    rows: u16,
    cols: u16,
}

impl Screen {
    fn layout(&self) -> TermLayout<'_> {
        TermLayout {
            doc: &self.doc,
            scroll_row: self.scroll_row,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.layout().max_scroll();
        self.scroll_row = self.scroll_row.saturating_add_signed(delta).min(max);
    }

    fn rebuild(&mut self, portfolio: &Portfolio, contact: &ContactInfo) {
        self.doc = match portfolio.project_view() {
            Some(view) => Document::project(view, self.cols),
            None => Document::home(text_width(self.cols), contact),
        };
        self.scroll_row = self.scroll_row.min(self.layout().max_scroll());
    }
}

pub fn run(portfolio: &mut Portfolio, path: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, portfolio, path);

    portfolio.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    portfolio: &mut Portfolio,
    path: &str,
) -> Result<()> {
    let started = Instant::now();
    let now_ms = || started.elapsed().as_secs_f64() * 1000.0;
    let contact = ContactInfo::default();

    let size = terminal.size()?;
    let mut screen = Screen {
        path: path.to_string(),
        doc: Document::default(),
        scroll_row: 0,
        root_class: None,
        project_theme: ProjectCategoryTheme::default(),
        trace_area: Rect::default(),
        rows: size.height.saturating_sub(2),
        cols: size.width,
    };
    portfolio.mount(path);
    screen.rebuild(portfolio, &contact);
    apply_commands(&mut screen, portfolio);
    let mut pause = TracePause::default();

    loop {
        let now = now_ms();
        portfolio.advance(now);
        if portfolio.wants_frame() {
            portfolio.run_frame(now, &screen.layout());
        }
        if apply_commands(&mut screen, portfolio) {
            portfolio.notify_scroll();
        }

        terminal.draw(|frame| draw(frame, &mut screen, portfolio))?;

        let timeout = if portfolio.wants_frame() {
            Duration::from_millis(16)
        } else {
            let until_next = portfolio
                .next_deadline()
                .map_or(250.0, |deadline| (deadline - now_ms()).clamp(1.0, 250.0));
            Duration::from_secs_f64(until_next / 1000.0)
        };
        if !event::poll(timeout)? {
            continue;
        }

        let home = portfolio.project_view().is_none();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Up | KeyCode::Char('k') => {
                    screen.scroll_by(-(SCROLL_STEP as isize));
                    portfolio.notify_scroll();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    screen.scroll_by(SCROLL_STEP as isize);
                    portfolio.notify_scroll();
                }
                KeyCode::PageUp => {
                    screen.scroll_by(-(screen.rows as isize));
                    portfolio.notify_scroll();
                }
                KeyCode::PageDown | KeyCode::Char(' ') => {
                    screen.scroll_by(screen.rows as isize);
                    portfolio.notify_scroll();
                }
                KeyCode::Char(c @ '1'..='4') if home => {
                    let index = usize::from(c as u8 - b'1');
                    let section = SECTIONS[index].theme;
                    if let Err(e) = portfolio.scroll_to_section(section, &screen.layout(), now_ms()) {
                        log::warn!("cannot scroll to {section}: {e}");
                    }
                }
                KeyCode::Char('p') => {
                    portfolio.set_trace_hovered(pause.toggle(), now_ms());
                }
                KeyCode::Enter if home => {
                    if let Some(project) = portfolio.focused_project().and_then(project_by_id) {
                        portfolio.navigate(&project.path());
                        screen.scroll_row = 0;
                        screen.rebuild(portfolio, &contact);
                    }
                }
                KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace if !home => {
                    portfolio.navigate("/");
                    screen.scroll_row = 0;
                    screen.rebuild(portfolio, &contact);
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => {
                    screen.scroll_by(SCROLL_STEP as isize);
                    portfolio.notify_scroll();
                }
                MouseEventKind::ScrollUp => {
                    screen.scroll_by(-(SCROLL_STEP as isize));
                    portfolio.notify_scroll();
                }
                MouseEventKind::Moved => {
                    let area = screen.trace_area;
                    let inside = area.width > 0
                        && (area.x..area.x + area.width).contains(&mouse.column)
                        && (area.y..area.y + area.height).contains(&mouse.row);
                    if inside != pause.hovered {
                        portfolio.set_trace_hovered(pause.hover(inside), now_ms());
                    }
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                screen.cols = width;
                screen.rows = height.saturating_sub(2);
                screen.rebuild(portfolio, &contact);
                portfolio.notify_resize();
            }
            _ => {}
        }
    }
    Ok(())
}

/// Apply drained commands to the screen. Returns `true` when the scroll
/// offset was moved programmatically.
fn apply_commands(screen: &mut Screen, portfolio: &mut Portfolio) -> bool {
    let mut scrolled = false;
    for command in portfolio.take_commands() {
        match command {
            ViewCommand::SwapRootClass { add, .. } => screen.root_class = add,
            ViewCommand::SetProjectTheme { theme } => screen.project_theme = theme,
            ViewCommand::ScrollTo { offset } => {
                let max = screen.layout().max_scroll();
                screen.scroll_row = ((offset / ROW_PX).round().max(0.0) as usize).min(max);
                scrolled = true;
            }
            ViewCommand::ReplaceUrl { path } => screen.path = path,
            ViewCommand::TraceChanged => {}
        }
    }
    scrolled
}

fn draw(frame: &mut Frame<'_>, screen: &mut Screen, portfolio: &Portfolio) {
    let area = frame.area();
    let page = portfolio.page_theme();
    let color = |token| theme_to_color(token, page);

    // Header: nav + route
    let mut nav = vec![Span::styled(
        format!(" {} ", HERO.name),
        Style::default().fg(color(ThemeToken::TextPrimary)).add_modifier(Modifier::BOLD),
    )];
    for (i, section) in SECTIONS.iter().enumerate() {
        let token = if section.theme == page {
            ThemeToken::NavLinkActive
        } else {
            ThemeToken::NavLink
        };
        nav.push(Span::styled(
            format!(" {}·{} ", i + 1, section.nav_label),
            Style::default().fg(color(token)),
        ));
    }
    nav.push(Span::styled(
        format!(
            "  {}  {}  {}  q quit",
            screen.path,
            screen.root_class.as_deref().unwrap_or(""),
            screen.project_theme.pill_label()
        ),
        Style::default().fg(color(ThemeToken::TextMuted)),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(nav))
            .style(Style::default().bg(color(ThemeToken::TopbarBackground))),
        Rect::new(0, 0, area.width, 1),
    );

    // Progress bar under the header
    let viewport = screen.layout().viewport();
    let percent = scroll_progress(viewport.scroll_y, viewport.document_height, viewport.height);
    let filled = (f64::from(area.width) * percent / 100.0).round() as usize;
    frame.render_widget(
        Paragraph::new("▔".repeat(filled))
            .style(Style::default().fg(color(ThemeToken::ScrollProgress))),
        Rect::new(0, 1, area.width, 1),
    );

    let body = Rect::new(0, 2, area.width, area.height.saturating_sub(2));
    let doc_width = text_width(body.width);
    let show_trace = portfolio.project_view().is_none() && doc_width < body.width;

    let lines: Vec<Line<'_>> = screen
        .doc
        .lines
        .iter()
        .skip(screen.scroll_row)
        .take(usize::from(body.height))
        .map(|l| doc_line(l, page, portfolio.focused_project()))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        Rect::new(1, body.y, doc_width.saturating_sub(2), body.height),
    );

    if show_trace {
        let trace_area = Rect::new(doc_width, body.y, TRACE_WIDTH, body.height.min(16));
        screen.trace_area = trace_area;
        draw_trace(frame, trace_area, portfolio, page);
    } else {
        screen.trace_area = Rect::default();
    }
}

fn doc_line<'a>(line: &'a DocLine, page: PageSectionTheme, focused: Option<&str>) -> Line<'a> {
    let color = |token| theme_to_color(token, page);
    let style = match line.style {
        LineStyle::Title => Style::default()
            .fg(color(ThemeToken::Accent))
            .add_modifier(Modifier::BOLD),
        LineStyle::Heading => Style::default()
            .fg(color(ThemeToken::TextPrimary))
            .add_modifier(Modifier::BOLD),
        LineStyle::Body | LineStyle::Bullet => Style::default().fg(color(ThemeToken::TextSecondary)),
        LineStyle::Muted => Style::default().fg(color(ThemeToken::TextMuted)),
        LineStyle::Link => Style::default()
            .fg(color(ThemeToken::Accent))
            .add_modifier(Modifier::UNDERLINED),
        LineStyle::Pill(category) => {
            let mut style = Style::default()
                .fg(color(ThemeToken::pill(category)))
                .add_modifier(Modifier::BOLD);
            let is_focused = focused
                .and_then(project_by_id)
                .is_some_and(|p| line.text.ends_with(p.title));
            if is_focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            style
        }
    };
    Line::styled(line.text.as_str(), style)
}

fn draw_trace(frame: &mut Frame<'_>, area: Rect, portfolio: &Portfolio, page: PageSectionTheme) {
    let color = |token| theme_to_color(token, page);
    let status = portfolio.trace_status();

    let mut lines = vec![Line::from(vec![
        Span::styled("● ", Style::default().fg(color(ThemeToken::TraceCursor))),
        Span::styled(HERO.trace_cursor, Style::default().fg(color(ThemeToken::TraceHint))),
    ])];
    for line in portfolio.trace_lines() {
        let token = match line.kind {
            TraceKind::Meta => ThemeToken::TraceMeta,
            TraceKind::Step => ThemeToken::TraceStep,
        };
        lines.push(Line::styled(line.text.to_string(), Style::default().fg(color(token))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(ThemeToken::Border)))
        .title(format!(" {} ", HERO.trace_title))
        .title_bottom(format!(" {} · p pause ", status.label()))
        .style(Style::default().bg(color(ThemeToken::TraceBackground)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
