//! Shadow DOM implementation of `CardSurface`.
//!
//! Builds the card subtree inside an open shadow root attached to the host
//! element:
//!
//! ```html
//! <style>…</style>
//! <div class="wrapper">
//!   <h3></h3>
//!   <div class="placeholder">
//!     <div class="tb"><div class="td"><img tabindex="-1"></div></div>
//!   </div>
//!   <p></p>
//! </div>
//! ```
//!
//! Styles live in the shadow root, so page rules do not leak in and card rules
//! do not leak out.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ShadowRootInit, ShadowRootMode};

use card_box_core::{
    CardBoxConfig, CardPart, CardSurface, Geometry, MarkerScope, PlatformError, widget_stylesheet,
};

use crate::js_error;

/// One card's subtree inside its host's shadow root.
pub struct ShadowSurface {
    document: Document,
    root: HtmlElement,
    heading: Element,
    placeholder: HtmlElement,
    image: Element,
    detail: Element,
}

impl ShadowSurface {
    /// Attach an open shadow root to `host` and build the card subtree in it.
    pub fn attach(host: &HtmlElement, config: &CardBoxConfig) -> Result<Self, PlatformError> {
        let document = host
            .owner_document()
            .ok_or_else(|| PlatformError::from("host element has no owner document"))?;
        let shadow = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(js_error("attachShadow"))?;

        let style = create(&document, "style", None)?;
        style.set_text_content(Some(&widget_stylesheet(config)));
        shadow.append_child(&style).map_err(js_error("append style"))?;

        let root: HtmlElement = create(&document, CardPart::Root.tag_name(), CardPart::Root.class_name())?
            .dyn_into()
            .map_err(|_| PlatformError::from("wrapper is not an HTMLElement"))?;
        let heading = create(&document, CardPart::Heading.tag_name(), None)?;
        let placeholder: HtmlElement = create(
            &document,
            CardPart::Placeholder.tag_name(),
            CardPart::Placeholder.class_name(),
        )?
        .dyn_into()
        .map_err(|_| PlatformError::from("placeholder is not an HTMLElement"))?;
        let table = create(&document, "div", Some("tb"))?;
        let cell = create(&document, "div", Some("td"))?;
        let image = create(&document, CardPart::Image.tag_name(), None)?;
        image
            .set_attribute("tabindex", "-1")
            .map_err(js_error("set tabindex"))?;
        let detail = create(&document, CardPart::Detail.tag_name(), None)?;

        append(&cell, &image)?;
        append(&table, &cell)?;
        append(&placeholder, &table)?;
        append(&root, &heading)?;
        append(&root, &placeholder)?;
        append(&root, &detail)?;
        shadow.append_child(&root).map_err(js_error("append wrapper"))?;

        Ok(Self {
            document,
            root,
            heading,
            placeholder,
            image,
            detail,
        })
    }

    /// The wrapper element; activation listeners are bound here.
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    fn element(&self, part: CardPart) -> &Element {
        match part {
            CardPart::Root => &self.root,
            CardPart::Heading => &self.heading,
            CardPart::Placeholder => &self.placeholder,
            CardPart::Image => &self.image,
            CardPart::Detail => &self.detail,
        }
    }

    fn html_element(&self, part: CardPart) -> Result<&HtmlElement, PlatformError> {
        match part {
            CardPart::Root => Ok(&self.root),
            CardPart::Placeholder => Ok(&self.placeholder),
            other => Err(PlatformError(format!("{other:?} has no inline style"))),
        }
    }
}

impl CardSurface for ShadowSurface {
    fn replace_text(&self, part: CardPart, text: &str) -> Result<(), PlatformError> {
        let element = self.element(part);
        while let Some(child) = element.first_child() {
            element
                .remove_child(&child)
                .map_err(js_error("remove child"))?;
        }
        if !text.is_empty() {
            let node = self.document.create_text_node(text);
            element
                .append_child(&node)
                .map_err(js_error("append text"))?;
        }
        Ok(())
    }

    fn set_attribute(&self, part: CardPart, name: &str, value: &str) -> Result<(), PlatformError> {
        self.element(part)
            .set_attribute(name, value)
            .map_err(js_error("setAttribute"))
    }

    fn measure(&self, part: CardPart) -> Result<Geometry, PlatformError> {
        let rect = self.element(part).get_bounding_client_rect();
        Ok(Geometry::new(rect.width(), rect.height()))
    }

    fn pin_size(&self, part: CardPart, size: Option<Geometry>) -> Result<(), PlatformError> {
        let style = self.html_element(part)?.style();
        match size {
            Some(size) => {
                style
                    .set_property("width", &size.width_px())
                    .map_err(js_error("set width"))?;
                style
                    .set_property("height", &size.height_px())
                    .map_err(js_error("set height"))?;
            }
            None => {
                style
                    .remove_property("width")
                    .map_err(js_error("clear width"))?;
                style
                    .remove_property("height")
                    .map_err(js_error("clear height"))?;
            }
        }
        Ok(())
    }

    fn set_marker(
        &self,
        scope: MarkerScope,
        class: &str,
        present: bool,
    ) -> Result<(), PlatformError> {
        let class_list = match scope {
            MarkerScope::Widget => self.root.class_list(),
            MarkerScope::Document => self
                .document
                .document_element()
                .ok_or_else(|| PlatformError::from("document has no root element"))?
                .class_list(),
        };
        if present {
            class_list.add_1(class).map_err(js_error("classList.add"))
        } else {
            class_list
                .remove_1(class)
                .map_err(js_error("classList.remove"))
        }
    }
}

fn create(document: &Document, tag: &str, class: Option<&str>) -> Result<Element, PlatformError> {
    let element = document
        .create_element(tag)
        .map_err(js_error("createElement"))?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    Ok(element)
}

fn append(parent: &Element, child: &Element) -> Result<(), PlatformError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(js_error("appendChild"))
}
