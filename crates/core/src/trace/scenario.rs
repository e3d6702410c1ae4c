use std::collections::HashMap;

use folio_protocol::{ProjectCategoryTheme, SharedStr, TraceKind};
use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// Marker carried by the final step of every scenario.
pub const COMPLETION_MARKER: &str = "✅";

/// A canned request-handling trace: a route label and its ordered steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub route: String,
    pub steps: Vec<String>,
}

impl Scenario {
    pub fn new(route: impl Into<String>, steps: &[&str]) -> Self {
        Self {
            route: route.into(),
            steps: steps.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A scenario with its step lines rendered once, ready to be copied into
/// the trace buffer on each tick.
#[derive(Debug, Clone)]
pub struct Script {
    route: SharedStr,
    step_lines: Vec<SharedStr>,
}

impl Script {
    fn compile(scenario: &Scenario) -> Self {
        Self {
            route: SharedStr::from(scenario.route.as_str()),
            step_lines: scenario
                .steps
                .iter()
                .map(|s| SharedStr::from(format!("→ {s}")))
                .collect(),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn step_count(&self) -> usize {
        self.step_lines.len()
    }

    /// Meta line plus one line per step.
    pub fn sequence_len(&self) -> usize {
        self.step_lines.len() + 1
    }

    /// Line `index` of the sequence (wrapping). Index 0 is the meta line,
    /// stamped with `clock`.
    pub fn line(&self, index: usize, clock: &str) -> (TraceKind, SharedStr) {
        match index % self.sequence_len() {
            0 => (
                TraceKind::Meta,
                SharedStr::from(format!("{clock}  incoming  {}", self.route)),
            ),
            i => (TraceKind::Step, self.step_lines[i - 1].clone()),
        }
    }
}

/// Scenario lists keyed by project category.
///
/// Lookup for a category without a list falls back to `ui`, so a bank is
/// only usable once [`ScenarioBank::validate`] confirms `ui` exists.
#[derive(Debug, Clone)]
pub struct ScenarioBank {
    banks: HashMap<ProjectCategoryTheme, Vec<Script>>,
}

impl ScenarioBank {
    /// Build and validate a bank from raw scenarios.
    pub fn from_scenarios(
        scenarios: &HashMap<ProjectCategoryTheme, Vec<Scenario>>,
        marker: &str,
    ) -> Result<Self, BankError> {
        validate(scenarios, marker)?;
        let banks = scenarios
            .iter()
            .map(|(theme, list)| (*theme, list.iter().map(Script::compile).collect()))
            .collect();
        Ok(Self { banks })
    }

    /// The built-in banks: three scenarios of three steps per category.
    pub fn builtin() -> Self {
        let banks = builtin_scenarios()
            .iter()
            .map(|(theme, list)| (*theme, list.iter().map(Script::compile).collect()))
            .collect();
        Self { banks }
    }

    /// Scenarios for `theme`, or the `ui` list when `theme` has none.
    pub fn scripts(&self, theme: ProjectCategoryTheme) -> &[Script] {
        self.banks
            .get(&theme)
            .filter(|list| !list.is_empty())
            .or_else(|| self.banks.get(&ProjectCategoryTheme::Ui))
            .map_or(&[], Vec::as_slice)
    }

    pub fn len(&self, theme: ProjectCategoryTheme) -> usize {
        self.scripts(theme).len()
    }
}

impl Default for ScenarioBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Check that every list is usable: `ui` present, no empty lists, every
/// scenario has steps and its last step carries `marker`.
pub fn validate(
    scenarios: &HashMap<ProjectCategoryTheme, Vec<Scenario>>,
    marker: &str,
) -> Result<(), BankError> {
    if scenarios
        .get(&ProjectCategoryTheme::Ui)
        .is_none_or(Vec::is_empty)
    {
        return Err(BankError::Empty(ProjectCategoryTheme::Ui));
    }
    for (theme, list) in scenarios {
        if list.is_empty() {
            return Err(BankError::Empty(*theme));
        }
        for scenario in list {
            let Some(last) = scenario.steps.last() else {
                return Err(BankError::NoSteps {
                    theme: *theme,
                    route: scenario.route.clone(),
                });
            };
            if !last.contains(marker) {
                return Err(BankError::MissingMarker {
                    theme: *theme,
                    route: scenario.route.clone(),
                    marker: marker.to_string(),
                });
            }
        }
    }
    Ok(())
}

pub fn builtin_scenarios() -> HashMap<ProjectCategoryTheme, Vec<Scenario>> {
    HashMap::from([
        (
            ProjectCategoryTheme::Ui,
            vec![
                Scenario::new("ui/render", &["mount component", "fetch props", "paint frame ✅"]),
                Scenario::new("ui/hydrate", &["load bundle", "hydrate tree", "interactive ✅"]),
                Scenario::new("ui/navigate", &["match route", "prefetch data", "transition done ✅"]),
            ],
        ),
        (
            ProjectCategoryTheme::Api,
            vec![
                Scenario::new("api/webhook", &["verify signature", "normalize data", "persist log ✅"]),
                Scenario::new("api/orders", &["validate payload", "enqueue job", "ack 200 ✅"]),
                Scenario::new("api/status", &["read cache", "fallback DB", "format response ✅"]),
            ],
        ),
        (
            ProjectCategoryTheme::Bot,
            vec![
                Scenario::new("bot/start", &["receive update", "auth user", "reply welcome ✅"]),
                Scenario::new("bot/update", &["parse message", "match command", "send message ✅"]),
                Scenario::new("bot/route", &["geocode CEP", "optimize stops", "return plan ✅"]),
            ],
        ),
    ])
}
