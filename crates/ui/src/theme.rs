use folio_protocol::{PageSectionTheme, ThemeToken};

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => dark_visuals(),
            Self::Light => light_visuals(),
        }
    }
}

/// What a `theme-*` root class selects: the accent hue of the whole page.
fn accent(page: PageSectionTheme, mode: ThemeMode) -> ResolvedColor {
    match (page, mode) {
        (PageSectionTheme::Home, ThemeMode::Dark) => ResolvedColor::rgb(0x89, 0xdc, 0xeb), // Sky
        (PageSectionTheme::Projects, ThemeMode::Dark) => ResolvedColor::rgb(0xcb, 0xa6, 0xf7), // Mauve
        (PageSectionTheme::About, ThemeMode::Dark) => ResolvedColor::rgb(0xf9, 0xe2, 0xaf), // Yellow
        (PageSectionTheme::Contact, ThemeMode::Dark) => ResolvedColor::rgb(0xa6, 0xe3, 0xa1), // Green
        (PageSectionTheme::Home, ThemeMode::Light) => ResolvedColor::rgb(4, 165, 229),
        (PageSectionTheme::Projects, ThemeMode::Light) => ResolvedColor::rgb(136, 57, 239),
        (PageSectionTheme::About, ThemeMode::Light) => ResolvedColor::rgb(223, 142, 29),
        (PageSectionTheme::Contact, ThemeMode::Light) => ResolvedColor::rgb(64, 160, 43),
    }
}

pub fn resolve(token: ThemeToken, page: PageSectionTheme, mode: ThemeMode) -> egui::Color32 {
    match token {
        ThemeToken::Accent | ThemeToken::NavLinkActive | ThemeToken::ScrollProgress => {
            accent(page, mode)
        }
        ThemeToken::AccentSoft => accent(page, mode).with_alpha(40),
        other => match mode {
            ThemeMode::Dark => resolve_dark(other),
            ThemeMode::Light => resolve_light(other),
        },
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x1e, 0x1e, 0x2e), // Base
        Surface => ResolvedColor::rgb(0x31, 0x32, 0x44),    // Surface0
        Border => ResolvedColor::rgb(0x45, 0x47, 0x5a),     // Surface1

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4), // Text
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1
        TextMuted => ResolvedColor::rgb(0x7f, 0x84, 0x9c),   // Overlay1

        TopbarBackground => ResolvedColor::rgb(0x18, 0x18, 0x25), // Mantle
        NavLink => ResolvedColor::rgb(0xba, 0xc2, 0xde),

        PillUi => ResolvedColor::rgb(0x89, 0xb4, 0xfa),  // Blue
        PillApi => ResolvedColor::rgb(0xa6, 0xe3, 0xa1), // Green
        PillBot => ResolvedColor::rgb(0xf5, 0xc2, 0xe7), // Pink
        Chip => ResolvedColor::rgba(0x6c, 0x70, 0x86, 80),

        TraceBackground => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        TraceMeta => ResolvedColor::rgb(0x94, 0xe2, 0xd5),       // Teal
        TraceStep => ResolvedColor::rgb(0xa6, 0xad, 0xc8),       // Subtext0
        TraceCursor => ResolvedColor::rgb(0xa6, 0xe3, 0xa1),
        TraceHint => ResolvedColor::rgb(0x6c, 0x70, 0x86),

        Accent | AccentSoft | NavLinkActive | ScrollProgress => ResolvedColor::rgb(0x89, 0xb4, 0xfa),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(255, 255, 255),
        Surface => ResolvedColor::rgb(245, 245, 248),
        Border => ResolvedColor::rgb(210, 210, 220),

        TextPrimary => ResolvedColor::rgb(20, 20, 30),
        TextSecondary => ResolvedColor::rgb(80, 80, 100),
        TextMuted => ResolvedColor::rgb(110, 110, 125),

        TopbarBackground => ResolvedColor::rgb(248, 248, 250),
        NavLink => ResolvedColor::rgb(60, 60, 75),

        PillUi => ResolvedColor::rgb(30, 102, 245),
        PillApi => ResolvedColor::rgb(64, 160, 43),
        PillBot => ResolvedColor::rgb(234, 118, 203),
        Chip => ResolvedColor::rgba(0, 0, 0, 18),

        TraceBackground => ResolvedColor::rgb(239, 241, 245),
        TraceMeta => ResolvedColor::rgb(23, 146, 153),
        TraceStep => ResolvedColor::rgb(76, 79, 105),
        TraceCursor => ResolvedColor::rgb(64, 160, 43),
        TraceHint => ResolvedColor::rgb(140, 143, 161),

        Accent | AccentSoft | NavLinkActive | ScrollProgress => ResolvedColor::rgb(30, 102, 245),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 34.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_EMPHASIS: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CAPTION: f32 = 12.0;

/// Catppuccin Mocha dark visuals for egui widgets.
fn dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.faint_bg_color = egui::Color32::from_rgb(0x31, 0x32, 0x44);
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x45, 0x47, 0x5a);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x58, 0x5b, 0x70);
    v.hyperlink_color = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    rounded(v)
}

fn light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(250, 250, 252);
    v.faint_bg_color = egui::Color32::from_rgb(245, 245, 248);
    v.hyperlink_color = egui::Color32::from_rgb(30, 102, 245);
    rounded(v)
}

fn rounded(mut v: egui::Visuals) -> egui::Visuals {
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    v.widgets.active.corner_radius = egui::CornerRadius::same(6);
    v
}

pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_follows_page_theme() {
        let home = resolve(ThemeToken::Accent, PageSectionTheme::Home, ThemeMode::Dark);
        let about = resolve(ThemeToken::Accent, PageSectionTheme::About, ThemeMode::Dark);
        assert_ne!(home, about);
        assert_eq!(
            resolve(ThemeToken::ScrollProgress, PageSectionTheme::About, ThemeMode::Dark),
            about
        );
    }

    #[test]
    fn non_accent_tokens_ignore_page_theme() {
        for page in PageSectionTheme::ALL {
            assert_eq!(
                resolve(ThemeToken::PillBot, page, ThemeMode::Light),
                resolve(ThemeToken::PillBot, PageSectionTheme::Home, ThemeMode::Light)
            );
        }
    }
}
