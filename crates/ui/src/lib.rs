mod app;
mod theme;

pub use app::FolioApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let path = window.location().pathname()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id("folio_canvas")
        .ok_or_else(|| JsValue::from_str("no canvas element with id 'folio_canvas'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element 'folio_canvas' is not a canvas"))?;

    let portfolio = folio_core::Portfolio::new(folio_core::FolioConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, portfolio, &path)))),
            )
            .await;
        if let Err(e) = start_result {
            web_sys::console::error_1(&format!("failed to start eframe: {e:?}").into());
        }
    });
    Ok(())
}
