//! Browser bridge. A JS host owns the DOM and the animation loop; it passes
//! layout in as JSON and applies the [`ViewCommand`](folio_protocol::ViewCommand)s
//! it gets back.

use std::fmt::Display;

use folio_core::model::{
    ABOUT, CONTACT, HERO, ProjectView, Route, mailto_link, project_by_id, projects,
};
use folio_core::{FolioConfig, LayoutSnapshot, Portfolio};
use folio_protocol::PageSectionTheme;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn js_err(e: impl Display) -> JsError {
    JsError::new(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(js_err)
}

fn parse_section(name: &str) -> Result<PageSectionTheme, String> {
    PageSectionTheme::parse(name.trim_start_matches("theme-"))
        .ok_or_else(|| format!("unknown section: {name}"))
}

fn load_config(config_json: Option<&str>) -> Result<FolioConfig, String> {
    match config_json {
        Some(json) => FolioConfig::from_json(json.as_bytes()).map_err(|e| {
            log::warn!("rejected config: {e}");
            e.to_string()
        }),
        None => Ok(FolioConfig::default()),
    }
}

/// A page session driven from JavaScript.
#[wasm_bindgen]
pub struct PortfolioHandle {
    inner: Portfolio,
}

#[wasm_bindgen]
impl PortfolioHandle {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(config_json: Option<String>) -> Result<PortfolioHandle, JsError> {
        let config = load_config(config_json.as_deref()).map_err(|e| JsError::new(&e))?;
        let inner = Portfolio::new(config).map_err(js_err)?;
        Ok(Self { inner })
    }

    pub fn mount(&mut self, path: &str) {
        self.inner.mount(path);
    }

    pub fn navigate(&mut self, path: &str) {
        self.inner.navigate(path);
    }

    pub fn unmount(&mut self) {
        self.inner.unmount();
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.inner.advance(now_ms);
    }

    /// Run the pending animation frame against `layout_json`.
    pub fn run_frame(&mut self, now_ms: f64, layout_json: &str) -> Result<(), JsError> {
        let layout = LayoutSnapshot::from_json(layout_json).map_err(js_err)?;
        self.inner.run_frame(now_ms, &layout);
        Ok(())
    }

    pub fn notify_scroll(&mut self) {
        self.inner.notify_scroll();
    }

    pub fn notify_resize(&mut self) {
        self.inner.notify_resize();
    }

    /// Accepts either `"about"` or `"theme-about"`. Returns the target offset.
    pub fn scroll_to_section(
        &mut self,
        section: &str,
        layout_json: &str,
        now_ms: f64,
    ) -> Result<f64, JsError> {
        let section = parse_section(section).map_err(|e| JsError::new(&e))?;
        let layout = LayoutSnapshot::from_json(layout_json).map_err(js_err)?;
        self.inner
            .scroll_to_section(section, &layout, now_ms)
            .map_err(js_err)
    }

    /// Returns the newly focused category, if it changed.
    pub fn update_cards(&mut self, layout_json: &str) -> Result<Option<String>, JsError> {
        let layout = LayoutSnapshot::from_json(layout_json).map_err(js_err)?;
        Ok(self
            .inner
            .update_cards(&layout)
            .map(|theme| theme.as_str().to_string()))
    }

    pub fn set_trace_hovered(&mut self, hovered: bool, now_ms: f64) {
        self.inner.set_trace_hovered(hovered, now_ms);
    }

    /// Drain queued view commands as a JSON array.
    pub fn take_commands(&mut self) -> Result<String, JsError> {
        to_json(&self.inner.take_commands())
    }

    pub fn trace_lines(&self) -> Result<String, JsError> {
        to_json(&self.inner.trace_lines())
    }

    pub fn trace_status(&self) -> String {
        self.inner.trace_status().label().to_string()
    }

    pub fn trace_route(&self) -> Option<String> {
        self.inner.trace_route().map(str::to_string)
    }

    pub fn page_theme(&self) -> String {
        self.inner.page_theme().as_str().to_string()
    }

    pub fn project_theme(&self) -> String {
        self.inner.project_theme().as_str().to_string()
    }

    pub fn route_path(&self) -> Option<String> {
        self.inner.route().map(Route::path)
    }

    /// `null` off the detail route, otherwise the project or `{"notFound":true}`.
    pub fn project_view(&self) -> Result<String, JsError> {
        match self.inner.project_view() {
            None => Ok("null".to_string()),
            Some(ProjectView::Found(project)) => to_json(project),
            Some(ProjectView::NotFound) => Ok(r#"{"notFound":true}"#.to_string()),
        }
    }

    pub fn focused_project(&self) -> Option<String> {
        self.inner.focused_project().map(str::to_string)
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline()
    }

    pub fn wants_frame(&self) -> bool {
        self.inner.wants_frame()
    }
}

/// Every project card, in page order.
#[wasm_bindgen]
pub fn projects_json() -> Result<String, JsError> {
    to_json(projects())
}

#[wasm_bindgen]
pub fn project_json(id: &str) -> Result<Option<String>, JsError> {
    project_by_id(id).map(to_json).transpose()
}

/// Static copy for the hero, about and contact sections.
#[wasm_bindgen]
pub fn site_copy_json() -> Result<String, JsError> {
    #[derive(Serialize)]
    struct SiteCopy<'a> {
        hero: &'a folio_core::model::site::Hero,
        about: &'a folio_core::model::site::About,
        contact: &'a folio_core::model::site::ContactCopy,
    }
    to_json(&SiteCopy {
        hero: &HERO,
        about: &ABOUT,
        contact: &CONTACT,
    })
}

#[wasm_bindgen]
pub fn mailto(email: &str, subject: &str, body: &str) -> String {
    mailto_link(email, subject, body)
}
