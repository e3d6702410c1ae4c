use serde::{Deserialize, Serialize};

/// Page-level theme, one per scroll-addressable section.
///
/// Applied as an exclusive class on the document root: exactly one of
/// `theme-home`, `theme-projects`, `theme-about`, `theme-contact` is set
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSectionTheme {
    Home,
    Projects,
    About,
    Contact,
}

impl PageSectionTheme {
    /// All page themes in section order.
    pub const ALL: [PageSectionTheme; 4] = [Self::Home, Self::Projects, Self::About, Self::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// The root style class carrying this theme.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Home => "theme-home",
            Self::Projects => "theme-projects",
            Self::About => "theme-about",
            Self::Contact => "theme-contact",
        }
    }

    /// Every root class a page theme can occupy.
    pub fn all_root_classes() -> [&'static str; 4] {
        Self::ALL.map(Self::root_class)
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for PageSectionTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project-context theme. Selects both the accent styling of a project
/// card and the scenario bank of the trace panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategoryTheme {
    #[default]
    Ui,
    Api,
    Bot,
}

impl ProjectCategoryTheme {
    pub const ALL: [ProjectCategoryTheme; 3] = [Self::Ui, Self::Api, Self::Bot];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Api => "api",
            Self::Bot => "bot",
        }
    }

    /// Upper-case pill label shown on project cards.
    pub fn pill_label(self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Api => "API",
            Self::Bot => "BOT",
        }
    }
}

impl std::fmt::Display for ProjectCategoryTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    // Accent follows the page theme
    Accent,
    AccentSoft,

    // Header / navigation
    TopbarBackground,
    NavLink,
    NavLinkActive,

    // Project cards
    PillUi,
    PillApi,
    PillBot,
    Chip,

    // Trace panel
    TraceBackground,
    TraceMeta,
    TraceStep,
    TraceCursor,
    TraceHint,

    ScrollProgress,
}

impl ThemeToken {
    /// The pill token for a project category.
    pub fn pill(category: ProjectCategoryTheme) -> Self {
        match category {
            ProjectCategoryTheme::Ui => Self::PillUi,
            ProjectCategoryTheme::Api => Self::PillApi,
            ProjectCategoryTheme::Bot => Self::PillBot,
        }
    }
}
