//! WASM bindings for the card-box widget.
//!
//! Registers a `<card-box>` custom element whose behaviour lives in
//! `card-box-browser`:
//!
//! ```js
//! import init, { defineCardBox } from "card-box-js";
//!
//! await init();
//! defineCardBox();                          // <card-box>
//! defineCardBox({ tagName: "photo-card" }); // a second, renamed element
//! ```

mod define;
mod element;

pub use define::*;
pub use element::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `tracing` output to the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}
