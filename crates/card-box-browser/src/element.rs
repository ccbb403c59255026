//! The per-element browser widget.
//!
//! `BrowserCardBox` is what a custom element instance holds. Host callbacks
//! map one to one onto its methods:
//!
//! | host callback              | method               |
//! |----------------------------|----------------------|
//! | constructor                | `new`                |
//! | `attributeChangedCallback` | `attribute_changed`  |
//! | `connectedCallback`        | `connected`          |
//! | `disconnectedCallback`     | `disconnected`       |

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use web_sys::HtmlElement;

use card_box_core::{
    AttributeKind, CardAttributes, CardBox, CardBoxConfig, CardBoxError, OverlayCoordinator,
    ToggleState,
};

use crate::page::BrowserPage;
use crate::surface::ShadowSurface;

type Inner = CardBox<ShadowSurface, EventListener>;

/// A card widget living in a host element's shadow root.
///
/// The click listener holds only a weak reference, so dropping the last
/// `BrowserCardBox` handle frees the widget even while it is still mounted.
#[derive(Clone)]
pub struct BrowserCardBox {
    inner: Rc<RefCell<Inner>>,
}

impl BrowserCardBox {
    /// Build the shadow subtree for `host` and render its current attributes.
    pub fn new(host: &HtmlElement, config: &CardBoxConfig) -> Result<Self, CardBoxError> {
        let surface = ShadowSurface::attach(host, config)?;
        let attributes = CardAttributes::from_raw(
            host.get_attribute(AttributeKind::Title.name()).as_deref(),
            host.get_attribute(AttributeKind::Description.name()).as_deref(),
            host.get_attribute(AttributeKind::Src.name()).as_deref(),
        );
        let page = match host.owner_document() {
            Some(document) => BrowserPage::new(document),
            None => BrowserPage::current(),
        };

        let card = CardBox::new(
            surface,
            attributes,
            OverlayCoordinator::global(),
            &page,
            config,
        )?;
        Ok(Self {
            inner: Rc::new(RefCell::new(card)),
        })
    }

    /// Forward an attribute change from the host.
    pub fn attribute_changed(
        &self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), CardBoxError> {
        self.inner.borrow_mut().attribute_changed(name, old, new)
    }

    /// Bind the click listener. Returns `false` if it was already bound.
    pub fn connected(&self) -> bool {
        let weak = Rc::downgrade(&self.inner);
        let mut card = self.inner.borrow_mut();
        let target = card.surface().root().clone();

        let Ok(bound) = card.mount(|| {
            Ok::<_, std::convert::Infallible>(EventListener::new(&target, "click", move |_| {
                on_click(&weak)
            }))
        });
        bound
    }

    /// Unbind the click listener, collapsing the card if it is expanded.
    pub fn disconnected(&self) {
        let listener = self.inner.borrow_mut().unmount();
        // Dropping the listener removes it from the wrapper.
        drop(listener);
    }

    /// Toggle the card as a click would.
    pub fn activate(&self) -> Result<ToggleState, CardBoxError> {
        self.inner.borrow_mut().activate()
    }

    /// The value currently rendered for attribute `name`, defaults applied.
    pub fn rendered_value(&self, name: &str) -> Result<String, CardBoxError> {
        self.inner.borrow().rendered_value(name).map(str::to_owned)
    }

    pub fn is_expanded(&self) -> bool {
        self.inner.borrow().is_expanded()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().is_mounted()
    }
}

fn on_click(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let Ok(mut card) = inner.try_borrow_mut() else {
        tracing::warn!("card busy, dropping click");
        return;
    };

    match card.activate() {
        Ok(state) => tracing::trace!(widget = %card.id(), ?state, "click"),
        Err(CardBoxError::OverlayBusy { holder }) => {
            tracing::debug!(widget = %card.id(), %holder, "another card is expanded");
        }
        Err(err) => tracing::warn!(widget = %card.id(), error = %err, "toggle failed"),
    }
}
