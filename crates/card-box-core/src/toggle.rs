//! Expand/collapse state machine.
//!
//! # Transitions
//!
//! `Collapsed -> Expanded`:
//! 1. take the document marker lease from the `OverlayCoordinator`
//! 2. measure the placeholder and pin it to that size
//! 3. add the marker class to the widget root and the document root
//!
//! `Expanded -> Collapsed` undoes each step in reverse.
//!
//! Pinning the placeholder first keeps it from collapsing to nothing once the
//! image inside switches to a fixed, viewport-covering box.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::error::CardBoxError;
use crate::overlay::{OverlayCoordinator, WidgetId};
use crate::platform::CardSurface;
use crate::types::{CardPart, Geometry, MarkerScope};

/// Toggle state. The frozen geometry only exists while expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanded {
        /// Placeholder size measured right before expanding.
        frozen: Geometry,
    },
}

impl ToggleState {
    pub fn is_expanded(&self) -> bool {
        matches!(self, ToggleState::Expanded { .. })
    }

    pub fn frozen_geometry(&self) -> Option<Geometry> {
        match self {
            ToggleState::Collapsed => None,
            ToggleState::Expanded { frozen } => Some(*frozen),
        }
    }
}

/// Owns one widget's toggle state.
#[derive(Debug)]
pub struct ToggleController {
    id: WidgetId,
    coordinator: Arc<OverlayCoordinator>,
    marker: SmolStr,
    state: ToggleState,
}

impl ToggleController {
    pub fn new(id: WidgetId, coordinator: Arc<OverlayCoordinator>, marker: SmolStr) -> Self {
        Self {
            id,
            coordinator,
            marker,
            state: ToggleState::Collapsed,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Handle one activation: flip to the other state.
    pub fn activate<S: CardSurface + ?Sized>(
        &mut self,
        surface: &S,
    ) -> Result<ToggleState, CardBoxError> {
        match self.state {
            ToggleState::Collapsed => self.expand(surface)?,
            ToggleState::Expanded { .. } => self.collapse(surface)?,
        }
        Ok(self.state)
    }

    /// Collapsed -> Expanded. No-op when already expanded.
    pub fn expand<S: CardSurface + ?Sized>(&mut self, surface: &S) -> Result<(), CardBoxError> {
        if self.state.is_expanded() {
            return Ok(());
        }

        self.coordinator.acquire(self.id)?;

        let frozen = match self.apply_expanded(surface) {
            Ok(frozen) => frozen,
            Err(err) => {
                self.undo_expanded(surface);
                self.coordinator.release(self.id);
                return Err(err);
            }
        };

        tracing::debug!(
            widget = %self.id,
            width = frozen.width,
            height = frozen.height,
            "expanded"
        );
        self.state = ToggleState::Expanded { frozen };
        Ok(())
    }

    fn apply_expanded<S: CardSurface + ?Sized>(
        &self,
        surface: &S,
    ) -> Result<Geometry, CardBoxError> {
        let frozen = match surface.measure(CardPart::Placeholder) {
            Ok(geometry) => geometry,
            Err(err) => {
                tracing::debug!(widget = %self.id, error = %err, "placeholder not measurable");
                Geometry::default()
            }
        };
        if frozen.is_degenerate() {
            tracing::debug!(widget = %self.id, "freezing degenerate placeholder geometry");
        }

        surface.pin_size(CardPart::Placeholder, Some(frozen))?;
        surface.set_marker(MarkerScope::Widget, &self.marker, true)?;
        surface.set_marker(MarkerScope::Document, &self.marker, true)?;
        Ok(frozen)
    }

    /// Best-effort reset after a partial expansion. The document marker is
    /// the last write, so it never needs undoing here.
    fn undo_expanded<S: CardSurface + ?Sized>(&self, surface: &S) {
        let steps = [
            surface.pin_size(CardPart::Placeholder, None),
            surface.set_marker(MarkerScope::Widget, &self.marker, false),
        ];
        for err in steps.into_iter().filter_map(Result::err) {
            tracing::warn!(widget = %self.id, error = %err, "rollback after failed expand");
        }
    }

    /// Expanded -> Collapsed. No-op when already collapsed.
    pub fn collapse<S: CardSurface + ?Sized>(&mut self, surface: &S) -> Result<(), CardBoxError> {
        if !self.state.is_expanded() {
            return Ok(());
        }

        // State first: whatever the surface does, this widget no longer holds
        // the overlay.
        self.state = ToggleState::Collapsed;
        let held = self.coordinator.release(self.id);

        surface.pin_size(CardPart::Placeholder, None)?;
        surface.set_marker(MarkerScope::Widget, &self.marker, false)?;
        if held {
            surface.set_marker(MarkerScope::Document, &self.marker, false)?;
        }

        tracing::debug!(widget = %self.id, "collapsed");
        Ok(())
    }
}

impl Drop for ToggleController {
    fn drop(&mut self) {
        if self.state.is_expanded() {
            self.coordinator.release(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemorySurface};
    use crate::platform::PlatformError;

    const MARKER: &str = "card-boxed";

    /// A `MemorySurface` that fails selected operations.
    struct FailingSurface {
        inner: MemorySurface,
        fail_measure: bool,
        fail_document_marker: bool,
    }

    impl FailingSurface {
        fn new() -> Self {
            Self {
                inner: MemorySurface::new(&MemoryDocument::new()),
                fail_measure: false,
                fail_document_marker: false,
            }
        }
    }

    impl CardSurface for FailingSurface {
        fn replace_text(&self, part: CardPart, text: &str) -> Result<(), PlatformError> {
            self.inner.replace_text(part, text)
        }

        fn set_attribute(
            &self,
            part: CardPart,
            name: &str,
            value: &str,
        ) -> Result<(), PlatformError> {
            self.inner.set_attribute(part, name, value)
        }

        fn measure(&self, part: CardPart) -> Result<Geometry, PlatformError> {
            if self.fail_measure {
                return Err("detached".into());
            }
            self.inner.measure(part)
        }

        fn pin_size(&self, part: CardPart, size: Option<Geometry>) -> Result<(), PlatformError> {
            self.inner.pin_size(part, size)
        }

        fn set_marker(
            &self,
            scope: MarkerScope,
            class: &str,
            present: bool,
        ) -> Result<(), PlatformError> {
            if self.fail_document_marker && scope == MarkerScope::Document {
                return Err("no document element".into());
            }
            self.inner.set_marker(scope, class, present)
        }
    }

    fn controller(coordinator: &Arc<OverlayCoordinator>) -> ToggleController {
        ToggleController::new(coordinator.register(), coordinator.clone(), MARKER.into())
    }

    #[test]
    fn test_expand_freezes_measured_geometry() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let surface = MemorySurface::new(&document);
        surface.set_layout(CardPart::Placeholder, Geometry::new(120.0, 64.0));

        let mut toggle = controller(&coordinator);
        let state = toggle.activate(&surface).unwrap();

        assert_eq!(
            state,
            ToggleState::Expanded {
                frozen: Geometry::new(120.0, 64.0)
            }
        );
        assert_eq!(
            surface.pinned_size(CardPart::Placeholder),
            Some(Geometry::new(120.0, 64.0))
        );
        assert!(surface.has_marker(MARKER));
        assert!(document.has_marker(MARKER));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let surface = MemorySurface::new(&document);
        surface.set_layout(CardPart::Placeholder, Geometry::new(80.0, 40.0));

        let mut toggle = controller(&coordinator);
        toggle.activate(&surface).unwrap();
        let state = toggle.activate(&surface).unwrap();

        assert_eq!(state, ToggleState::Collapsed);
        assert_eq!(state.frozen_geometry(), None);
        assert_eq!(surface.pinned_size(CardPart::Placeholder), None);
        assert!(!surface.has_marker(MARKER));
        assert!(!document.has_marker(MARKER));
        assert_eq!(coordinator.holder(), None);
    }

    #[test]
    fn test_unmeasured_placeholder_freezes_zero() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let surface = MemorySurface::new(&document);

        let mut toggle = controller(&coordinator);
        toggle.expand(&surface).unwrap();

        assert_eq!(toggle.state().frozen_geometry(), Some(Geometry::default()));
        assert!(document.has_marker(MARKER));
    }

    #[test]
    fn test_second_widget_is_refused_while_first_expanded() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let document = MemoryDocument::new();
        let first_surface = MemorySurface::new(&document);
        let second_surface = MemorySurface::new(&document);

        let mut first = controller(&coordinator);
        let mut second = controller(&coordinator);

        first.activate(&first_surface).unwrap();
        let err = second.activate(&second_surface).unwrap_err();
        assert!(matches!(err, CardBoxError::OverlayBusy { .. }));
        assert_eq!(second.state(), ToggleState::Collapsed);
        assert!(!second_surface.has_marker(MARKER));
        assert_eq!(second_surface.pinned_size(CardPart::Placeholder), None);

        first.activate(&first_surface).unwrap();
        assert!(!document.has_marker(MARKER));
        second.activate(&second_surface).unwrap();
        assert!(document.has_marker(MARKER));
    }

    #[test]
    fn test_drop_while_expanded_releases_lease() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let surface = MemorySurface::new(&MemoryDocument::new());

        let mut toggle = controller(&coordinator);
        toggle.expand(&surface).unwrap();
        assert!(coordinator.holder().is_some());
        drop(toggle);
        assert_eq!(coordinator.holder(), None);
    }

    #[test]
    fn test_failed_measure_freezes_zero() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let surface = FailingSurface {
            fail_measure: true,
            ..FailingSurface::new()
        };
        surface
            .inner
            .set_layout(CardPart::Placeholder, Geometry::new(120.0, 64.0));

        let mut toggle = controller(&coordinator);
        let state = toggle.activate(&surface).unwrap();

        assert_eq!(state.frozen_geometry(), Some(Geometry::default()));
        assert_eq!(
            surface.inner.pinned_size(CardPart::Placeholder),
            Some(Geometry::default())
        );
        assert!(surface.inner.has_marker(MARKER));
    }

    #[test]
    fn test_failed_expand_rolls_back() {
        let coordinator = Arc::new(OverlayCoordinator::new());
        let surface = FailingSurface {
            fail_document_marker: true,
            ..FailingSurface::new()
        };
        surface
            .inner
            .set_layout(CardPart::Placeholder, Geometry::new(120.0, 64.0));

        let mut toggle = controller(&coordinator);
        let err = toggle.activate(&surface).unwrap_err();

        assert!(matches!(err, CardBoxError::Platform(_)));
        assert_eq!(toggle.state(), ToggleState::Collapsed);
        assert_eq!(surface.inner.pinned_size(CardPart::Placeholder), None);
        assert!(!surface.inner.has_marker(MARKER));
        assert!(!surface.inner.document().has_marker(MARKER));
        assert_eq!(coordinator.holder(), None);
    }
}
