//! Browser DOM layer for the card-box widget.
//!
//! This crate implements the `card-box-core` platform traits on top of
//! `web-sys`. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: shadow-root subtree construction and the `CardSurface` impl
//! - `page`: page-level `<style>` injection into `<head>`
//! - `element`: `BrowserCardBox`, the per-element widget with click binding
//!
//! # Re-exports
//!
//! This crate re-exports `card-box-core` for convenience, so consumers
//! only need to depend on `card-box-browser`.

// Re-export core crate
pub use card_box_core;
pub use card_box_core::*;

pub mod element;
pub mod page;
pub mod surface;

pub use element::BrowserCardBox;
pub use page::BrowserPage;
pub use surface::ShadowSurface;

/// Convert a thrown JS value into a `PlatformError` with some context.
pub(crate) fn js_error(context: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> PlatformError {
    move |err| PlatformError(format!("{context}: {err:?}"))
}
