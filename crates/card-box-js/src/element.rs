//! JsCardBox - the per-element object held by the custom element.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use card_box_browser::BrowserCardBox;
use card_box_core::{CardBoxConfig, CardBoxError};

/// One card widget, owned by a custom element instance.
///
/// The element's lifecycle callbacks forward here one to one.
#[wasm_bindgen]
pub struct JsCardBox {
    inner: BrowserCardBox,
}

impl JsCardBox {
    pub(crate) fn attach(host: &HtmlElement, config: &CardBoxConfig) -> Result<Self, CardBoxError> {
        BrowserCardBox::new(host, config).map(|inner| Self { inner })
    }
}

#[wasm_bindgen]
impl JsCardBox {
    /// Forward `attributeChangedCallback`.
    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(
        &self,
        name: &str,
        old: Option<String>,
        new: Option<String>,
    ) -> Result<(), JsError> {
        self.inner
            .attribute_changed(name, old.as_deref(), new.as_deref())
            .map_err(to_js_error)
    }

    /// Forward `connectedCallback`. Returns whether the click listener was bound.
    pub fn connected(&self) -> bool {
        self.inner.connected()
    }

    /// Forward `disconnectedCallback`.
    pub fn disconnected(&self) {
        self.inner.disconnected();
    }

    #[wasm_bindgen(js_name = isExpanded)]
    pub fn is_expanded(&self) -> bool {
        self.inner.is_expanded()
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_mounted()
    }

    /// Toggle as a click would. Returns the new expanded state.
    ///
    /// Throws if another card is currently expanded.
    pub fn toggle(&self) -> Result<bool, JsError> {
        self.inner
            .activate()
            .map(|state| state.is_expanded())
            .map_err(to_js_error)
    }

    /// The value currently shown for an observed attribute, defaults applied.
    #[wasm_bindgen(js_name = renderedValue)]
    pub fn rendered_value(&self, name: &str) -> Result<String, JsError> {
        self.inner.rendered_value(name).map_err(to_js_error)
    }
}

pub(crate) fn to_js_error(err: CardBoxError) -> JsError {
    JsError::new(&err.to_string())
}
