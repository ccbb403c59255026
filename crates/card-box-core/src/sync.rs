//! Attribute synchronization.
//!
//! Maps one attribute change to targeted writes on the nodes that render it.
//! Siblings are never touched and nothing is rebuilt.

use crate::attribute::{AttributeKind, CardAttributes, resolve};
use crate::platform::{CardSurface, PlatformError};
use crate::types::CardPart;

/// Apply a raw attribute value to the rendered subtree.
///
/// Absent or empty values are written as the kind's default.
pub fn apply_attribute<S: CardSurface + ?Sized>(
    surface: &S,
    kind: AttributeKind,
    value: Option<&str>,
) -> Result<(), PlatformError> {
    let value = resolve(kind, value);
    tracing::trace!(attribute = kind.name(), len = value.len(), "apply_attribute");

    match kind {
        AttributeKind::Title => {
            surface.replace_text(CardPart::Heading, value)?;
            // Mirrored onto the image for assistive presentation.
            surface.set_attribute(CardPart::Image, "alt", value)
        }
        AttributeKind::Description => surface.replace_text(CardPart::Detail, value),
        AttributeKind::Src => surface.set_attribute(CardPart::Image, "src", value),
    }
}

/// Write every attribute once, used right after the subtree is built.
pub fn render_initial<S: CardSurface + ?Sized>(
    surface: &S,
    attributes: &CardAttributes,
) -> Result<(), PlatformError> {
    for kind in [
        AttributeKind::Title,
        AttributeKind::Description,
        AttributeKind::Src,
    ] {
        apply_attribute(surface, kind, Some(attributes.get(kind)))?;
    }
    Ok(())
}
