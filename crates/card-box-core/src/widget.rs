//! The card widget: one instance per element in the host document.

use std::sync::Arc;

use crate::attribute::{AttributeKind, CardAttributes};
use crate::config::CardBoxConfig;
use crate::error::CardBoxError;
use crate::lifecycle::MountState;
use crate::overlay::{OverlayCoordinator, WidgetId};
use crate::platform::{CardSurface, PageStyleSink};
use crate::sync::{apply_attribute, render_initial};
use crate::toggle::{ToggleController, ToggleState};
use crate::types::Geometry;

/// A card widget over surface `S`, with activation handler handle `H`.
///
/// The host drives it with attribute, mount, unmount and activation
/// notifications; each runs to completion before the next. Dropping an
/// expanded card collapses it, so the page is never left scroll-locked.
pub struct CardBox<S: CardSurface, H> {
    surface: S,
    attributes: CardAttributes,
    toggle: ToggleController,
    mount: MountState<H>,
}

impl<S: CardSurface, H> CardBox<S, H> {
    /// Construct over an already built subtree.
    ///
    /// Renders `attributes` into the subtree and makes sure the page-level
    /// style is in place.
    pub fn new(
        surface: S,
        attributes: CardAttributes,
        coordinator: Arc<OverlayCoordinator>,
        page: &dyn PageStyleSink,
        config: &CardBoxConfig,
    ) -> Result<Self, CardBoxError> {
        let id = coordinator.register();
        render_initial(&surface, &attributes)?;
        coordinator.ensure_style_injected(page, &config.marker_class)?;

        tracing::debug!(widget = %id, title = %attributes.title, "card created");
        Ok(Self {
            surface,
            attributes,
            toggle: ToggleController::new(id, coordinator, config.marker_class.clone()),
            mount: MountState::Unmounted,
        })
    }

    /// Attribute change notification from the host.
    ///
    /// Names outside the observed set are logged and ignored.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), CardBoxError> {
        let kind = match name.parse::<AttributeKind>() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::warn!(widget = %self.id(), "{err}, ignoring");
                return Ok(());
            }
        };
        if old == new {
            return Ok(());
        }
        self.set_attribute(kind, new)
    }

    /// Write one attribute into the subtree.
    pub fn set_attribute(
        &mut self,
        kind: AttributeKind,
        value: Option<&str>,
    ) -> Result<(), CardBoxError> {
        apply_attribute(&self.surface, kind, value)?;
        self.attributes.set(kind, value);
        Ok(())
    }

    /// Mount notification: bind the activation handler unless already bound.
    ///
    /// Returns whether `bind` ran.
    pub fn mount<E>(&mut self, bind: impl FnOnce() -> Result<H, E>) -> Result<bool, E> {
        let bound = self.mount.mount(bind)?;
        if bound {
            tracing::debug!(widget = %self.id(), "mounted");
        }
        Ok(bound)
    }

    /// Unmount notification: returns the bound handler for the host to unbind.
    ///
    /// An expanded card is collapsed first so it does not leave the page
    /// marked. Returns `None` when not mounted.
    pub fn unmount(&mut self) -> Option<H> {
        let handler = self.mount.unmount()?;
        if let Err(err) = self.toggle.collapse(&self.surface) {
            tracing::warn!(widget = %self.id(), error = %err, "collapse on unmount failed");
        }
        tracing::debug!(widget = %self.id(), "unmounted");
        Some(handler)
    }

    /// Activation (click): toggle between collapsed and expanded.
    pub fn activate(&mut self) -> Result<ToggleState, CardBoxError> {
        self.toggle.activate(&self.surface)
    }

    pub fn id(&self) -> WidgetId {
        self.toggle.id()
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    pub fn is_expanded(&self) -> bool {
        self.toggle.state().is_expanded()
    }

    pub fn frozen_geometry(&self) -> Option<Geometry> {
        self.toggle.state().frozen_geometry()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    pub fn attributes(&self) -> &CardAttributes {
        &self.attributes
    }

    /// The value currently rendered for the attribute called `name`.
    pub fn rendered_value(&self, name: &str) -> Result<&str, CardBoxError> {
        let kind: AttributeKind = name.parse()?;
        Ok(self.attributes.get(kind))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: CardSurface, H> Drop for CardBox<S, H> {
    fn drop(&mut self) {
        if let Err(err) = self.toggle.collapse(&self.surface) {
            tracing::warn!(widget = %self.toggle.id(), error = %err, "collapse on drop failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemorySurface};
    use crate::types::CardPart;

    type TestCard = CardBox<MemorySurface, u32>;

    fn make_card(coordinator: &Arc<OverlayCoordinator>, document: &MemoryDocument) -> TestCard {
        CardBox::new(
            MemorySurface::new(document),
            CardAttributes::default(),
            coordinator.clone(),
            document,
            &CardBoxConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_attribute_is_ignored() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let mut card = make_card(&coordinator, &document);
        let before = card.surface().dump();

        card.attribute_changed("alt", None, Some("x")).unwrap();

        assert_eq!(card.surface().dump(), before);
    }

    #[test]
    fn test_attribute_change_updates_state() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let mut card = make_card(&coordinator, &document);

        card.attribute_changed("title", None, Some("Ocean")).unwrap();
        assert_eq!(card.attributes().title, "Ocean");
        assert_eq!(card.surface().text(CardPart::Heading), "Ocean");

        card.attribute_changed("title", Some("Ocean"), None).unwrap();
        assert_eq!(card.attributes().title, "{untitled}");
    }

    #[test]
    fn test_rendered_value_by_name() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let mut card = make_card(&coordinator, &document);
        card.attribute_changed("description", None, Some("Deep blue"))
            .unwrap();

        assert_eq!(card.rendered_value("description"), Ok("Deep blue"));
        assert_eq!(card.rendered_value("title"), Ok("{untitled}"));
        assert_eq!(
            card.rendered_value("alt"),
            Err(CardBoxError::UnknownAttribute("alt".into()))
        );
    }

    #[test]
    fn test_unmount_collapses_expanded_card() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let mut card = make_card(&coordinator, &document);

        card.mount(|| Ok::<_, ()>(7)).unwrap();
        card.activate().unwrap();
        assert!(document.has_marker("card-boxed"));

        assert_eq!(card.unmount(), Some(7));
        assert!(!card.is_expanded());
        assert!(!document.has_marker("card-boxed"));
        assert_eq!(coordinator.holder(), None);
    }

    #[test]
    fn test_drop_while_expanded_clears_document_marker() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let mut card = make_card(&coordinator, &document);

        card.activate().unwrap();
        assert!(document.has_marker("card-boxed"));

        drop(card);
        assert!(!document.has_marker("card-boxed"));
        assert_eq!(coordinator.holder(), None);

        let mut next = make_card(&coordinator, &document);
        assert!(next.activate().unwrap().is_expanded());
    }

    #[test]
    fn test_drop_while_collapsed_leaves_other_card_expanded() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let mut expanded = make_card(&coordinator, &document);
        let idle = make_card(&coordinator, &document);

        expanded.activate().unwrap();
        drop(idle);
        assert!(document.has_marker("card-boxed"));
        assert_eq!(coordinator.holder(), Some(expanded.id()));
    }

    #[test]
    fn test_marker_class_comes_from_config() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let config = CardBoxConfig {
            marker_class: "zoomed".into(),
            ..Default::default()
        };
        let mut card: TestCard = CardBox::new(
            MemorySurface::new(&document),
            CardAttributes::default(),
            coordinator,
            &document,
            &config,
        )
        .unwrap();

        card.activate().unwrap();
        assert!(card.surface().has_marker("zoomed"));
        assert!(document.has_marker("zoomed"));
        assert!(document.page_styles()[0].contains("html.zoomed"));

        card.activate().unwrap();
        assert!(!document.has_marker("zoomed"));
    }
}
