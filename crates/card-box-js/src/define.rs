//! Custom element registration.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use card_box_core::{AttributeKind, CardBoxConfig};

use crate::element::JsCardBox;

#[wasm_bindgen(inline_js = r#"
export function define_card_element(tag, observed, factory) {
    if (customElements.get(tag)) {
        return false;
    }
    class CardBoxElement extends HTMLElement {
        static get observedAttributes() {
            return observed;
        }
        constructor() {
            super();
            this._card = factory(this);
        }
        attributeChangedCallback(name, oldValue, newValue) {
            this._card?.attributeChanged(name, oldValue, newValue);
        }
        connectedCallback() {
            this._card?.connected();
        }
        disconnectedCallback() {
            this._card?.disconnected();
        }
        get isExpanded() {
            return this._card?.isExpanded() ?? false;
        }
        toggle() {
            return this._card?.toggle() ?? false;
        }
    }
    customElements.define(tag, CardBoxElement);
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_card_element(
        tag: &str,
        observed: &js_sys::Array,
        factory: &js_sys::Function,
    ) -> Result<bool, JsValue>;
}

/// Register the card element.
///
/// `options` is an optional `{ tagName, imageHeight, markerClass }` object;
/// missing fields take their defaults. Returns `false` without doing anything
/// if the tag is already defined.
#[wasm_bindgen(js_name = defineCardBox)]
pub fn define_card_box(options: JsValue) -> Result<bool, JsError> {
    let config = parse_options(options)?;

    let observed: js_sys::Array = AttributeKind::OBSERVED
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect();

    let factory_config = config.clone();
    let factory = Closure::<dyn FnMut(HtmlElement) -> JsValue>::new(move |host: HtmlElement| {
        match JsCardBox::attach(&host, &factory_config) {
            Ok(card) => JsValue::from(card),
            Err(err) => {
                tracing::error!(error = %err, "failed to build card");
                JsValue::NULL
            }
        }
    });

    let defined = define_card_element(&config.tag_name, &observed, factory.as_ref().unchecked_ref())
        .map_err(|err| JsError::new(&format!("customElements.define failed: {err:?}")))?;
    if defined {
        tracing::debug!(tag = %config.tag_name, "card element defined");
        // The element class calls the factory for every instance it creates.
        factory.forget();
    } else {
        tracing::debug!(tag = %config.tag_name, "already defined, skipping");
    }
    Ok(defined)
}

fn parse_options(options: JsValue) -> Result<CardBoxConfig, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(CardBoxConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}
