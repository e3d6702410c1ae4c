//! What the core needs to know about the rendered page.
//!
//! Hosts measure their own document (DOM, egui scroll area, terminal rows)
//! and expose it through [`LayoutProbe`]. The core reads layout only inside
//! frame callbacks and explicit requests such as a smooth-scroll start.

use folio_protocol::{CardBox, PageSectionTheme, Rect, SectionBox, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

pub trait LayoutProbe {
    fn viewport(&self) -> Viewport;

    /// Viewport-relative box of a section, if it is rendered.
    fn section_rect(&self, section: PageSectionTheme) -> Option<Rect>;

    /// Viewport-relative boxes of the project cards, in document order.
    fn card_boxes(&self) -> Vec<CardBox>;
}

/// A measured layout, as hosts send it over the JSON bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    #[serde(default)]
    pub sections: Vec<SectionBox>,
    #[serde(default)]
    pub cards: Vec<CardBox>,
}

impl LayoutSnapshot {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sections: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn from_json(data: &str) -> Result<Self, LayoutError> {
        let snapshot: LayoutSnapshot =
            serde_json::from_str(data).map_err(|e| LayoutError::Malformed(e.to_string()))?;
        let v = snapshot.viewport;
        if !(v.height.is_finite() && v.height >= 0.0 && v.scroll_y.is_finite()) {
            return Err(LayoutError::Malformed(format!(
                "viewport height {} / scroll {} out of range",
                v.height, v.scroll_y
            )));
        }
        Ok(snapshot)
    }

    pub fn with_section(mut self, section: PageSectionTheme, rect: Rect) -> Self {
        self.sections.push(SectionBox { section, rect });
        self
    }

    pub fn with_card(mut self, project_id: &str, rect: Rect) -> Self {
        self.cards.push(CardBox {
            project_id: project_id.to_string(),
            rect,
        });
        self
    }
}

impl LayoutProbe for LayoutSnapshot {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn section_rect(&self, section: PageSectionTheme) -> Option<Rect> {
        self.sections
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.rect)
    }

    fn card_boxes(&self) -> Vec<CardBox> {
        self.cards.clone()
    }
}

/// Document-relative top of a section: its viewport top plus the current
/// scroll offset.
pub fn section_document_top(
    layout: &dyn LayoutProbe,
    section: PageSectionTheme,
) -> Result<f64, LayoutError> {
    let rect = layout
        .section_rect(section)
        .ok_or(LayoutError::MissingSection(section.as_str()))?;
    Ok(rect.top() + layout.viewport().scroll_y)
}
