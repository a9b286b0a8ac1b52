//! Browser front-end for creating and listing tasks.
//!
//! This crate can be compiled in two modes:
//! - default: the view model only ([`form`], [`board`]), native and testable
//! - `hydrate` feature: compiled to WASM with egui rendering and the browser entry point

pub mod board;
pub mod form;

#[cfg(feature = "hydrate")]
mod app;
#[cfg(feature = "hydrate")]
mod components;

#[cfg(feature = "hydrate")]
pub use app::TaskApp;

// ============================================================================
// WASM Entry Point (hydrate feature only)
// ============================================================================

#[cfg(feature = "hydrate")]
mod web {
    use crate::app::TaskApp;
    use task_api::FrontendConfig;
    use wasm_bindgen::prelude::*;

    /// Read the config injected by the host server, or fall back to defaults.
    fn read_config(document: &web_sys::Document) -> FrontendConfig {
        document
            .get_element_by_id(FrontendConfig::ELEMENT_ID)
            .and_then(|el| el.text_content())
            .map(|json| FrontendConfig::from_json_or_default(&json))
            .unwrap_or_default()
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        eframe::WebLogger::init(log::LevelFilter::Debug).ok();

        wasm_bindgen_futures::spawn_local(async {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                log::error!("No document to mount the app in");
                return;
            };

            let config = read_config(&document);
            log::info!("Using tasks API at {}", config.api_base_url);

            let Some(canvas) = document
                .get_element_by_id("the_canvas_id")
                .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                log::error!("Canvas element `the_canvas_id` is missing");
                return;
            };

            let start_result = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(move |cc| Ok(Box::new(TaskApp::new(cc, config)))),
                )
                .await;

            let loading_text = document.get_element_by_id("loading_text");
            match (start_result, loading_text) {
                (Ok(()), Some(loading_text)) => loading_text.remove(),
                (Ok(()), None) => {}
                (Err(e), loading_text) => {
                    log::error!("Failed to start eframe: {e:?}");
                    if let Some(loading_text) = loading_text {
                        loading_text.set_inner_html(
                            "<p>The app failed to start. See the developer console for details.</p>",
                        );
                    }
                }
            }
        });
    }
}
