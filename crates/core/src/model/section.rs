use folio_protocol::PageSectionTheme;
use serde::Serialize;

/// A named, scroll-addressable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor id in the document (`#projetos`, …).
    pub anchor: &'static str,
    pub theme: PageSectionTheme,
    pub nav_label: &'static str,
}

/// Sections in document order, which is also the probe priority order.
pub const SECTIONS: [Section; 4] = [
    Section {
        anchor: "home",
        theme: PageSectionTheme::Home,
        nav_label: "Home",
    },
    Section {
        anchor: "projetos",
        theme: PageSectionTheme::Projects,
        nav_label: "Projects",
    },
    Section {
        anchor: "sobre",
        theme: PageSectionTheme::About,
        nav_label: "About",
    },
    Section {
        anchor: "contato",
        theme: PageSectionTheme::Contact,
        nav_label: "Contact",
    },
];

impl Section {
    pub fn by_anchor(anchor: &str) -> Option<&'static Section> {
        let anchor = anchor.trim_start_matches('#');
        SECTIONS.iter().find(|s| s.anchor == anchor)
    }

    pub fn for_theme(theme: PageSectionTheme) -> &'static Section {
        match theme {
            PageSectionTheme::Home => &SECTIONS[0],
            PageSectionTheme::Projects => &SECTIONS[1],
            PageSectionTheme::About => &SECTIONS[2],
            PageSectionTheme::Contact => &SECTIONS[3],
        }
    }

    /// The section active before any layout has been read.
    pub fn first() -> &'static Section {
        &SECTIONS[0]
    }
}
