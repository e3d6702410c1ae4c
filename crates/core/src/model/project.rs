use folio_protocol::ProjectCategoryTheme;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MockupView {
    Desktop,
    Dashboard,
    Mobile,
}

impl MockupView {
    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Dashboard => "dashboard",
            Self::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Mockup {
    pub name: &'static str,
    pub focus: &'static str,
    pub view: MockupView,
    /// Path relative to the mockup asset root.
    pub image: &'static str,
    pub notes: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectLinks {
    pub site: Option<&'static str>,
    pub repo: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub hook: &'static str,
    pub overview: &'static str,
    pub context: &'static str,
    pub challenge: &'static str,
    pub strategy: &'static str,
    pub outcomes: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub role: &'static str,
    pub timeline: &'static str,
    pub status: &'static str,
    pub mockups: &'static [Mockup],
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: ProjectCategoryTheme,
    pub tagline: &'static str,
    pub bullets: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub links: ProjectLinks,
    pub detail: ProjectDetail,
}

impl Project {
    /// Detail route for this project.
    pub fn path(&self) -> String {
        format!("/projetos/{}", self.id)
    }

    /// Where the card's "open project" action goes: the live site, or the
    /// about section when there is none.
    pub fn site_or_about(&self) -> &'static str {
        self.links.site.unwrap_or("#sobre")
    }
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

static PROJECTS: &[Project] = &[
    Project {
        id: "maria-fumaca",
        title: "Maria Fumaca Campinas",
        category: ProjectCategoryTheme::Ui,
        tagline: "Full redesign of an institutional site focused on experience, performance and conversion.",
        bullets: &[
            "Problem: legacy WordPress site with a dated layout and weak commercial performance.",
            "Solution: rebuilt in React with the Sympla API feeding events and the calendar.",
            "Impact: faster loads, a modern presentation and direct support for ticket sales.",
        ],
        stack: &["React", "Axios", "React Router", "Sympla API"],
        links: ProjectLinks {
            site: Some("https://www.mariafumacacampinas.com.br/"),
            repo: Some("https://github.com/hredua/maria-fumaca"),
        },
        detail: ProjectDetail {
            hook: "A digital experience that had to reflect the ride's history without losing commercial performance.",
            overview: "The project reorganises journey, content and technology to cut friction in ticket purchase and leave the site ready for continuous evolution.",
            context: "The previous version packed too much into long pages with no clear visual hierarchy and a heavy plugin dependency, which slowed maintenance and hurt campaign conversion.",
            challenge: "Balance brand storytelling with an interface built for action: find a date, confirm availability and reach checkout with fewer distractions.",
            strategy: "A new information architecture, quick-decision blocks first, and the events calendar connected through the API so dates and availability stay in sync.",
            outcomes: &[
                "More predictable navigation with the main CTA visible in every critical block.",
                "Lighter initial load by splitting responsibilities across components.",
                "The team can update sections without layout regressions.",
            ],
            highlights: &[
                "Modular landing with reusable sections",
                "Integrated events calendar",
                "Consistent visual pattern for campaigns",
            ],
            role: "Product Design + Front-end",
            timeline: "Structured in short delivery cycles",
            status: "In production",
            mockups: &[
                Mockup {
                    name: "Hero and conversion",
                    focus: "First block with a clear pitch and purchase CTA",
                    view: MockupView::Desktop,
                    image: "maria-fumaca/hero-conversao.webp",
                    notes: &[
                        "Text hierarchy tuned for scanning",
                        "High-contrast primary buttons",
                        "Social proof placed above the fold",
                    ],
                },
                Mockup {
                    name: "Events flow",
                    focus: "Dates and availability in a few steps",
                    view: MockupView::Dashboard,
                    image: "maria-fumaca/fluxo-eventos.webp",
                    notes: &[
                        "Cards with availability state",
                        "Direct filters by date and category",
                        "Immediate feedback on time selection",
                    ],
                },
                Mockup {
                    name: "Mobile version",
                    focus: "Quick reading and thumb-friendly actions",
                    view: MockupView::Mobile,
                    image: "maria-fumaca/mobile.webp",
                    notes: &[
                        "Simplified menu with purchase access",
                        "Compact cards focused on schedule",
                        "Sticky buttons for the main action",
                    ],
                },
            ],
        },
    },
    Project {
        id: "ownfleet-cg",
        title: "OwnFleet CG - Loading Automation",
        category: ProjectCategoryTheme::Bot,
        tagline: "Logistics automation that turns spreadsheets into real-time Telegram communication.",
        bullets: &[
            "Problem: drivers released manually from spreadsheets, demanding constant follow-up.",
            "Solution: automatic spreadsheet reading plus a Telegram bot with per-status alerts.",
            "Impact: fewer operational errors, saved time and a more predictable flow.",
        ],
        stack: &["Node.js", "Express", "Telegram Bot API", "Google Sheets API", "SQL"],
        links: ProjectLinks {
            site: Some("https://t.me/OwnFleetCG_Bot"),
            repo: None,
        },
        detail: ProjectDetail {
            hook: "An operation that depended on continuous human monitoring became event-driven notifications.",
            overview: "The solution connects the operations spreadsheet, business rules and a Telegram bot to reach drivers and the internal team without delay.",
            context: "Before the automation the team reviewed spreadsheets by hand to release loads, causing long waits and rework whenever a status changed.",
            challenge: "Build a reliable flow over unstable data, apply validations and avoid duplicate messages to the same drivers.",
            strategy: "A pipeline with data normalisation, idempotent events and an audit trail for every notification sent.",
            outcomes: &[
                "Alerts sent at the right moment for each loading stage.",
                "Less manual intervention on repetitive follow-up tasks.",
                "An event history for analysis and continuous improvement.",
            ],
            highlights: &[
                "Spreadsheet ingestion pipeline",
                "Rule engine per logistics status",
                "Transactional messaging over Telegram",
            ],
            role: "Integration architecture + Back-end",
            timeline: "Incremental rollout validated in the real operation",
            status: "In operation",
            mockups: &[
                Mockup {
                    name: "Events panel",
                    focus: "Queues and operation states at a glance",
                    view: MockupView::Dashboard,
                    image: "ownfleet-cg/painel-eventos.webp",
                    notes: &[
                        "Queue ordered by loading priority",
                        "Per-batch processing log",
                        "Events flagged for retry",
                    ],
                },
                Mockup {
                    name: "Bot messages",
                    focus: "Context-aware commands and replies",
                    view: MockupView::Mobile,
                    image: "ownfleet-cg/mensagens-bot.webp",
                    notes: &[
                        "Message template per alert type",
                        "Read and action confirmation",
                        "Quick commands for status lookup",
                    ],
                },
                Mockup {
                    name: "Dispatch rules",
                    focus: "Decision layer for notification routing",
                    view: MockupView::Desktop,
                    image: "ownfleet-cg/regras-despacho.webp",
                    notes: &[
                        "Versioned rule map",
                        "Fallback for inconsistent data",
                        "Webhook failure monitoring",
                    ],
                },
            ],
        },
    },
    Project {
        id: "rotaz",
        title: "RotaZ - Route Optimisation",
        category: ProjectCategoryTheme::Api,
        tagline: "Rule-based logistics automation that organises packages and routes.",
        bullets: &[
            "Problem: manual package sorting and route planning prone to mistakes.",
            "Solution: data normalisation, smart grouping and route generation.",
            "Impact: less rework and more predictable operational decisions.",
        ],
        stack: &["Node.js", "APIs", "Business rules", "Automation", "Integrations"],
        links: ProjectLinks {
            site: Some("https://t.me/RotaZPro_Bot"),
            repo: None,
        },
        detail: ProjectDetail {
            hook: "Distribution complexity turned into a deterministic processing and route-suggestion flow.",
            overview: "RotaZ organises delivery data, applies grouping rules per region and hands back an operational plan ready to run.",
            context: "The previous process relied on reading long lists by hand, with criteria varying between operators at peak demand.",
            challenge: "Turn heterogeneous data into one model that supports package prioritisation, geographic grouping and stop sequencing.",
            strategy: "Address normalisation, classification by operating window and a heuristic layer balancing volume against distance.",
            outcomes: &[
                "More consistent distribution across routes and teams",
                "Less rework when separating packages",
                "Shorter time to decide departures",
            ],
            highlights: &[
                "Delivery data normalisation",
                "Zone grouping heuristic",
                "API consumed by operations and the bot",
            ],
            role: "Automation engineering + API design",
            timeline: "Evolved from real operating scenarios",
            status: "Active and expanding",
            mockups: &[
                Mockup {
                    name: "Grouping map",
                    focus: "Zones with operational priority",
                    view: MockupView::Dashboard,
                    image: "rotaz/mapa-agrupamento.webp",
                    notes: &[
                        "Clusters by proximity",
                        "Density flags per area",
                        "Load per time slot",
                    ],
                },
                Mockup {
                    name: "Route builder",
                    focus: "Suggested stop sequence with quick adjustments",
                    view: MockupView::Desktop,
                    image: "rotaz/builder-rota.webp",
                    notes: &[
                        "Stop cards with metadata",
                        "Drag-and-drop reordering",
                        "Estimated total distance",
                    ],
                },
                Mockup {
                    name: "Mobile operation",
                    focus: "Route lookup while in the field",
                    view: MockupView::Mobile,
                    image: "rotaz/operacao-mobile.webp",
                    notes: &[
                        "Stops listed by priority",
                        "Completion status per delivery",
                        "Real-time updates",
                    ],
                },
            ],
        },
    },
];
