use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// Whether a trace line opens a scenario or reports one of its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Meta,
    Step,
}

/// One rendered entry of the simulated log stream.
///
/// `id` exists only to give renderers a stable identity for enter/exit
/// animations; it carries no meaning beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLine {
    pub id: String,
    pub kind: TraceKind,
    pub text: SharedStr,
}

impl TraceLine {
    pub fn is_meta(&self) -> bool {
        self.kind == TraceKind::Meta
    }
}

/// Header hint of the trace panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Live,
    Paused,
}

impl TraceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Paused => "paused",
        }
    }
}
