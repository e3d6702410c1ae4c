use serde::{Deserialize, Serialize};

use crate::theme::PageSectionTheme;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Half-open vertical containment: `top <= y < bottom`.
    pub fn contains_y(&self, y: f64) -> bool {
        self.top() <= y && y < self.bottom()
    }
}

/// The visible window onto the document, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current document scroll offset.
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    /// Total scrollable document height.
    pub document_height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64, height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            width,
            height,
            document_height,
        }
    }
}

/// A page section's bounding box relative to the viewport (the shape a
/// browser reports from `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub section: PageSectionTheme,
    pub rect: Rect,
}

/// A project card's bounding box relative to the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBox {
    pub project_id: String,
    pub rect: Rect,
}
