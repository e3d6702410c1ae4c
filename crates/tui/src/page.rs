//! The page laid out as terminal rows.
//!
//! One row stands for [`ROW_PX`] logical pixels so the session's pixel
//! defaults (probe offset, header offset) keep their proportions.

use std::ops::Range;

use folio_core::LayoutProbe;
use folio_core::model::{
    ABOUT, CONTACT, ContactInfo, HERO, MockupImage, NoAssets, Project, ProjectView, SECTIONS,
    projects, resolve_mockup_image,
};
use folio_protocol::{CardBox, PageSectionTheme, ProjectCategoryTheme, Rect, Viewport};

pub const ROW_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    Muted,
    Bullet,
    Link,
    Pill(ProjectCategoryTheme),
}

#[derive(Debug, Clone)]
pub struct DocLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Default)]
pub struct Document {
    pub lines: Vec<DocLine>,
    pub sections: Vec<(PageSectionTheme, Range<usize>)>,
    pub cards: Vec<(&'static str, Range<usize>)>,
}

impl Document {
    pub fn home(width: u16, contact: &ContactInfo) -> Self {
        let width = usize::from(width.max(20)) - 2;
        let mut doc = Document::default();

        for section in &SECTIONS {
            let start = doc.lines.len();
            match section.theme {
                PageSectionTheme::Home => doc.hero(width),
                PageSectionTheme::Projects => doc.project_cards(width),
                PageSectionTheme::About => doc.about(width),
                PageSectionTheme::Contact => doc.contact(width, contact),
            }
            doc.blank();
            doc.blank();
            doc.sections.push((section.theme, start..doc.lines.len()));
        }
        doc
    }

    pub fn project(view: ProjectView, width: u16) -> Self {
        let width = usize::from(width.max(20)) - 2;
        let mut doc = Document::default();
        match view.project() {
            Some(project) => doc.project_detail(project, width),
            None => {
                doc.push("Project not found", LineStyle::Title);
                doc.blank();
                doc.wrapped("That case does not exist or has moved.", LineStyle::Body, width);
                doc.push("[b] back to home", LineStyle::Link);
            }
        }
        doc
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn hero(&mut self, width: usize) {
        self.push(HERO.name, LineStyle::Title);
        self.push(HERO.role, LineStyle::Muted);
        self.blank();
        self.wrapped(HERO.headline, LineStyle::Heading, width);
        self.wrapped(HERO.headline_accent, LineStyle::Link, width);
        self.blank();
        self.wrapped(HERO.subhead, LineStyle::Body, width);
        self.blank();
        self.push("[2] see projects   [4] get in touch", LineStyle::Link);
        self.blank();
        self.push(&HERO.chips.join(" · "), LineStyle::Muted);
    }

    fn project_cards(&mut self, width: usize) {
        self.push("Projects", LineStyle::Title);
        self.blank();
        for project in projects() {
            let start = self.lines.len();
            self.push(
                &format!("{}  {}", project.category.pill_label(), project.title),
                LineStyle::Pill(project.category),
            );
            self.wrapped(project.tagline, LineStyle::Body, width);
            for bullet in project.bullets {
                self.wrapped(&format!("• {bullet}"), LineStyle::Bullet, width);
            }
            self.push(&project.stack.join(" · "), LineStyle::Muted);
            self.push("[enter] open case", LineStyle::Link);
            self.cards.push((project.id, start..self.lines.len()));
            self.blank();
        }
    }

    fn about(&mut self, width: usize) {
        self.push(ABOUT.title, LineStyle::Title);
        for block in ABOUT.blocks {
            self.blank();
            if let Some(heading) = block.heading {
                self.push(heading, LineStyle::Heading);
            }
            self.wrapped(block.text, LineStyle::Body, width);
        }
        self.blank();
        self.push(ABOUT.interests_heading, LineStyle::Heading);
        for item in ABOUT.interests {
            self.wrapped(&format!("• {item}"), LineStyle::Bullet, width);
        }
        self.blank();
        for card in ABOUT.cards {
            self.push(&format!("{}: {}", card.title, card.text), LineStyle::Muted);
        }
    }

    fn contact(&mut self, width: usize, contact: &ContactInfo) {
        self.push(CONTACT.title, LineStyle::Title);
        self.blank();
        self.wrapped(CONTACT.lead, LineStyle::Body, width);
        self.blank();
        self.push(&format!("Email     {}", contact.email), LineStyle::Heading);
        self.wrapped(&contact.mailto(), LineStyle::Link, width);
        self.push(&format!("GitHub    {}", contact.github), LineStyle::Body);
        self.push(&format!("LinkedIn  {}", contact.linkedin), LineStyle::Body);
        self.push(&format!("Subject   “{}”", contact.subject), LineStyle::Body);
        self.wrapped(CONTACT.subject_hint, LineStyle::Muted, width);
        self.blank();
        self.wrapped(CONTACT.note, LineStyle::Muted, width);
    }

    fn project_detail(&mut self, project: &Project, width: usize) {
        let detail = &project.detail;
        self.push("[b] back", LineStyle::Link);
        self.blank();
        self.push(
            &format!("{}  {}", project.category.pill_label(), project.title),
            LineStyle::Pill(project.category),
        );
        self.wrapped(detail.hook, LineStyle::Heading, width);
        self.blank();
        self.wrapped(detail.overview, LineStyle::Body, width);
        self.push(
            &format!("{} · {} · {}", detail.role, detail.timeline, detail.status),
            LineStyle::Muted,
        );

        for (heading, text) in [
            ("Context", detail.context),
            ("Challenge", detail.challenge),
            ("Strategy", detail.strategy),
        ] {
            self.blank();
            self.push(heading, LineStyle::Heading);
            self.wrapped(text, LineStyle::Body, width);
        }

        for (heading, items) in [("Outcomes", detail.outcomes), ("Highlights", detail.highlights)] {
            self.blank();
            self.push(heading, LineStyle::Heading);
            for item in items {
                self.wrapped(&format!("• {item}"), LineStyle::Bullet, width);
            }
        }

        self.blank();
        self.push("Mockups", LineStyle::Heading);
        for mockup in detail.mockups {
            let image = match resolve_mockup_image(mockup, &NoAssets) {
                MockupImage::Asset { path } => path.to_string(),
                MockupImage::Placeholder { view } => format!("[{} preview]", view.label()),
            };
            self.blank();
            self.push(&format!("{}  {}", mockup.name, image), LineStyle::Body);
            self.wrapped(mockup.focus, LineStyle::Muted, width);
            for note in mockup.notes {
                self.wrapped(&format!("• {note}"), LineStyle::Bullet, width);
            }
        }

        self.blank();
        self.push(&project.stack.join(" · "), LineStyle::Muted);
        if let Some(site) = project.links.site {
            self.push(&format!("Site  {site}"), LineStyle::Link);
        }
        if let Some(repo) = project.links.repo {
            self.push(&format!("Repo  {repo}"), LineStyle::Link);
        }
    }

    fn push(&mut self, text: &str, style: LineStyle) {
        self.lines.push(DocLine {
            text: text.to_string(),
            style,
        });
    }

    fn blank(&mut self) {
        self.push("", LineStyle::Body);
    }

    fn wrapped(&mut self, text: &str, style: LineStyle, width: usize) {
        for line in wrap(text, width) {
            self.lines.push(DocLine { text: line, style });
        }
    }
}

/// Greedy word wrap on character counts.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

/// What the session sees of the terminal page.
pub struct TermLayout<'a> {
    pub doc: &'a Document,
    pub scroll_row: usize,
    pub rows: u16,
    pub cols: u16,
}

impl TermLayout<'_> {
    fn rect(&self, range: &Range<usize>) -> Rect {
        let top = (range.start as f64 - self.scroll_row as f64) * ROW_PX;
        Rect::new(
            0.0,
            top,
            f64::from(self.cols) * ROW_PX / 2.0,
            range.len() as f64 * ROW_PX,
        )
    }

    /// Largest scroll offset, in rows.
    pub fn max_scroll(&self) -> usize {
        self.doc.len().saturating_sub(usize::from(self.rows))
    }
}

impl LayoutProbe for TermLayout<'_> {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.scroll_row as f64 * ROW_PX,
            f64::from(self.cols) * ROW_PX / 2.0,
            f64::from(self.rows) * ROW_PX,
            self.doc.len() as f64 * ROW_PX,
        )
    }

    fn section_rect(&self, section: PageSectionTheme) -> Option<Rect> {
        self.doc
            .sections
            .iter()
            .find(|(theme, _)| *theme == section)
            .map(|(_, range)| self.rect(range))
    }

    fn card_boxes(&self) -> Vec<CardBox> {
        self.doc
            .cards
            .iter()
            .map(|(id, range)| CardBox {
                project_id: (*id).to_string(),
                rect: self.rect(range),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("unbreakable-word", 4), vec!["unbreakable-word"]);
    }

    #[test]
    fn home_document_has_every_section_in_order() {
        let doc = Document::home(80, &ContactInfo::default());
        let order: Vec<PageSectionTheme> = doc.sections.iter().map(|(t, _)| *t).collect();
        assert_eq!(order, PageSectionTheme::ALL.to_vec());
        assert_eq!(doc.cards.len(), projects().len());
        for pair in doc.sections.windows(2) {
            assert_eq!(pair[0].1.end, pair[1].1.start);
        }
    }

    #[test]
    fn layout_reports_viewport_relative_rows() {
        let doc = Document::home(80, &ContactInfo::default());
        let layout = TermLayout {
            doc: &doc,
            scroll_row: 5,
            rows: 30,
            cols: 80,
        };
        let home = layout.section_rect(PageSectionTheme::Home);
        assert_eq!(home.map(|r| r.y), Some(-5.0 * ROW_PX));
        assert_eq!(layout.viewport().height, 30.0 * ROW_PX);
    }
}
