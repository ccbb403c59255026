//! Page-level style injection.

use card_box_core::{PageStyleSink, PlatformError};
use web_sys::Document;

use crate::js_error;

/// The host page's `<head>`, as a `PageStyleSink`.
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The page of the current window.
    pub fn current() -> Self {
        Self::new(gloo_utils::document())
    }
}

impl PageStyleSink for BrowserPage {
    fn insert_page_style(&self, css: &str) -> Result<(), PlatformError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| PlatformError::from("document has no <head>"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(js_error("createElement"))?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(js_error("append page style"))?;
        Ok(())
    }
}
