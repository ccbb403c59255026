//! Platform abstraction traits for the card widget.
//!
//! These traits define the interface between the widget logic and a concrete
//! host document (browser shadow DOM, the in-memory surface, ...). The same
//! sync/toggle/lifecycle logic runs unchanged against any of them.

use crate::types::{CardPart, Geometry, MarkerScope};

/// Error type for host document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Mutation and measurement over an already constructed card subtree.
///
/// Implementations own handles to every `CardPart`. A part that cannot be
/// found is a construction bug and is reported as `PlatformError`, never
/// silently skipped.
pub trait CardSurface {
    /// Replace all children of `part` with a single text node.
    ///
    /// Every prior child is removed first. An empty `text` leaves the part
    /// with no children at all rather than an empty text node.
    fn replace_text(&self, part: CardPart, text: &str) -> Result<(), PlatformError>;

    /// Set an attribute on `part`.
    fn set_attribute(&self, part: CardPart, name: &str, value: &str) -> Result<(), PlatformError>;

    /// Current rendered bounding box of `part`.
    ///
    /// A part that is not laid out yet may report `0x0`; callers tolerate that.
    fn measure(&self, part: CardPart) -> Result<Geometry, PlatformError>;

    /// Pin `part` to explicit inline dimensions, or clear them with `None`.
    fn pin_size(&self, part: CardPart, size: Option<Geometry>) -> Result<(), PlatformError>;

    /// Add (`present = true`) or remove a marker class on `scope`.
    fn set_marker(&self, scope: MarkerScope, class: &str, present: bool)
    -> Result<(), PlatformError>;
}

/// Page-level style scope, outside any widget's isolated styles.
pub trait PageStyleSink {
    /// Append one style rule block to the page.
    fn insert_page_style(&self, css: &str) -> Result<(), PlatformError>;
}
