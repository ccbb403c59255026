//! Error types for widget operations.

use smol_str::SmolStr;

use crate::attribute::UnknownAttribute;
use crate::overlay::WidgetId;
use crate::platform::PlatformError;

/// Errors surfaced by `CardBox` operations.
///
/// Redundant lifecycle calls and degenerate geometry are not errors; they are
/// handled as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CardBoxError {
    /// The host document rejected an operation or a part is missing.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// An attribute name outside the observed set reached the widget.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(SmolStr),

    /// Another widget currently holds the document overlay marker.
    #[error("overlay is held by widget {holder}")]
    OverlayBusy { holder: WidgetId },
}

impl From<UnknownAttribute> for CardBoxError {
    fn from(err: UnknownAttribute) -> Self {
        CardBoxError::UnknownAttribute(err.0)
    }
}
