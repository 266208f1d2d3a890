//! ws-messenger - chat room client
//!
//! Connects to a room endpoint at `{scheme}://{host}/ws/chat/{type}/{room}/`
//! and renders the conversation. Two front-ends share the same session core:
//! - browser GUI (`--features wasm`): egui app over `web_sys::WebSocket`
//! - terminal client (`--features cli`): tokio-tungstenite, see `main.rs`

pub mod markup;
pub mod participants;
pub mod session;
pub mod status;
pub mod time;
pub mod transcript;
pub mod transport;
pub mod wire;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod websocket_wasm;

#[cfg(all(not(target_arch = "wasm32"), feature = "cli"))]
pub mod websocket_native;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
