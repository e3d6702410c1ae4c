use serde::{Deserialize, Serialize};

use crate::theme::ProjectCategoryTheme;

/// A single, stateless instruction for the host.
///
/// The core queues a `Vec<ViewCommand>` while it processes input and
/// timers. Hosts drain and apply them in order; each command carries all
/// the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Replace the exclusive page-theme class on the document root.
    /// `remove` lists every class that must not survive the swap.
    SwapRootClass {
        remove: Vec<String>,
        add: Option<String>,
    },

    /// The project category accent changed.
    SetProjectTheme { theme: ProjectCategoryTheme },

    /// Set the document scroll offset (one step of a smooth scroll).
    ScrollTo { offset: f64 },

    /// Replace the current URL without adding a history entry.
    ReplaceUrl { path: String },

    /// The trace panel's visible lines changed; re-read them.
    TraceChanged,
}
