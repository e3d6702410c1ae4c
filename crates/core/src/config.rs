use std::collections::HashMap;

use folio_protocol::ProjectCategoryTheme;
use serde::{Deserialize, Serialize};

use crate::error::{BankError, ConfigError};
use crate::trace::scenario::{self, COMPLETION_MARKER, Scenario, ScenarioBank};

/// Probe-line placement for the section driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Probe position as a fraction of viewport height.
    pub probe_fraction: f64,
    /// Added below the fraction to clear the fixed header.
    pub probe_offset_px: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            probe_fraction: 0.22,
            probe_offset_px: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_offset_px: f64,
    pub duration_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 84.0,
            duration_ms: 880.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub tick_ms: f64,
    pub reset_delay_ms: f64,
    pub capacity: usize,
    pub completion_marker: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            tick_ms: 520.0,
            reset_delay_ms: 650.0,
            capacity: 10,
            completion_marker: COMPLETION_MARKER.to_string(),
        }
    }
}

/// Root margin of the project-card tracker, as viewport fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub margin_top_fraction: f64,
    pub margin_bottom_fraction: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            margin_top_fraction: 0.35,
            margin_bottom_fraction: 0.45,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub driver: DriverConfig,
    pub scroll: ScrollConfig,
    pub trace: TraceConfig,
    pub cards: CardConfig,
    /// Replacement scenario banks; the built-in ones when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banks: Option<HashMap<ProjectCategoryTheme, Vec<Scenario>>>,
}

impl FolioConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: FolioConfig = serde_json::from_slice(data)?;
        config.validate()?;
        log::info!(
            "config loaded: tick {}ms, reset {}ms, capacity {}, custom banks: {}",
            config.trace.tick_ms,
            config.trace.reset_delay_ms,
            config.trace.capacity,
            config.banks.is_some()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("trace.tick_ms", self.trace.tick_ms)?;
        positive("trace.reset_delay_ms", self.trace.reset_delay_ms)?;
        positive("scroll.duration_ms", self.scroll.duration_ms)?;
        positive("trace.capacity", self.trace.capacity as f64)?;
        unit("driver.probe_fraction", self.driver.probe_fraction)?;
        unit("cards.margin_top_fraction", self.cards.margin_top_fraction)?;
        unit("cards.margin_bottom_fraction", self.cards.margin_bottom_fraction)?;
        if self.cards.margin_top_fraction + self.cards.margin_bottom_fraction >= 1.0 {
            return Err(ConfigError::EmptyCardBand {
                top: self.cards.margin_top_fraction,
                bottom: self.cards.margin_bottom_fraction,
            });
        }
        if self.trace.completion_marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if let Some(banks) = &self.banks {
            scenario::validate(banks, &self.trace.completion_marker)?;
        }
        Ok(())
    }

    pub fn scenario_bank(&self) -> Result<ScenarioBank, BankError> {
        match &self.banks {
            Some(banks) => ScenarioBank::from_scenarios(banks, &self.trace.completion_marker),
            None => Ok(ScenarioBank::builtin()),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}
