//! Static page copy shared by every front-end.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: &'static str,
    pub role: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub subhead: &'static str,
    pub chips: &'static [&'static str],
    pub trace_title: &'static str,
    pub trace_cursor: &'static str,
    pub trace_note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub heading: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub title: &'static str,
    pub blocks: &'static [Block],
    pub interests_heading: &'static str,
    pub interests: &'static [&'static str],
    pub cards: &'static [Card],
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCopy {
    pub title: &'static str,
    pub lead: &'static str,
    pub note: &'static str,
    pub subject_hint: &'static str,
}

pub const HERO: Hero = Hero {
    name: "Helamã Rédua",
    role: "Front-end Developer • React • Automation & Integrations",
    headline: "High-performance interfaces.",
    headline_accent: "Automation applied to real problems.",
    subhead: "React front-end work paired with back-end integrations, Telegram bots and APIs, \
              focused on reducing operational friction and improving user experience.",
    chips: &["React", "TypeScript", "Vite", "Node", "Telegram Bots", "APIs", "Webhooks"],
    trace_title: "Live System Trace",
    trace_cursor: "listening…",
    trace_note: "Simulated events typical of integrations, bots and webhooks.",
};

pub const ABOUT: About = About {
    title: "How I think and work",
    blocks: &[
        Block {
            heading: None,
            text: "I work as a front-end developer focused on React, also stepping into the back-end \
                   when the problem calls for automation, integrations or bots.",
        },
        Block {
            heading: None,
            text: "My interest is not only in building good-looking interfaces but in removing real \
                   friction: manual processes, confusing flows, fragile integrations and experiences \
                   that cause errors or rework.",
        },
        Block {
            heading: Some("My method"),
            text: "Before writing code I observe the system. I look for where decisions are made, \
                   where the flow breaks and where technology can cut human effort instead of adding \
                   layers.",
        },
        Block {
            heading: Some("Front-end aware of the back-end"),
            text: "On the front-end I favour clarity, performance and feedback. On the back-end I aim \
                   for simplicity, well-defined events and consistent responses.",
        },
    ],
    interests_heading: "What draws me in",
    interests: &[
        "Systems that grew through improvisation",
        "Manual processes that eat time and attention",
        "Interfaces wired to real integrations",
        "Products that demand technical decisions",
    ],
    cards: &[
        Card {
            title: "Thinking",
            text: "Thinking before coding avoids fragile solutions.",
        },
        Card {
            title: "Execution",
            text: "Less magic, more predictability in production.",
        },
        Card {
            title: "Product",
            text: "UX does not end at the interface.",
        },
    ],
};

pub const CONTACT: ContactCopy = ContactCopy {
    title: "Let's build something useful",
    lead: "If you have a product, an operation or a flow causing friction, I help turn it into \
           interface plus automation with predictability.",
    note: "Focused on React (Vite), integrations, webhooks and Telegram bots, with real care for UX \
           and production.",
    subject_hint: "Include: context, goal, deadline and current stack.",
};
