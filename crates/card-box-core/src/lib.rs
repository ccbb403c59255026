//! card-box-core: the card-box widget's state and interaction model, free of
//! any browser dependency.
//!
//! This crate provides:
//! - `CardSurface` / `PageStyleSink` traits for the host document
//! - `AttributeKind` and attribute defaulting, applied by `sync`
//! - `ToggleController` - the collapsed/expanded machine with frozen geometry
//! - `MountState<H>` - bind/unbind bookkeeping for the activation handler
//! - `OverlayCoordinator` - process-wide page style guard and document marker lease
//! - `CardBox<S, H>` - the widget tying all of the above together
//! - `MemoryDocument` / `MemorySurface` - an in-memory host for tests and headless use

pub mod assets;
pub mod attribute;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod overlay;
pub mod platform;
pub mod style;
pub mod sync;
pub mod toggle;
pub mod types;
pub mod widget;

pub use assets::PLACEHOLDER_IMAGE;
pub use attribute::{AttributeKind, CardAttributes, UnknownAttribute, resolve};
pub use config::CardBoxConfig;
pub use error::CardBoxError;
pub use lifecycle::MountState;
pub use memory::{MemoryDocument, MemorySurface};
pub use overlay::{OverlayCoordinator, WidgetId};
pub use platform::{CardSurface, PageStyleSink, PlatformError};
pub use smol_str::SmolStr;
pub use style::{page_stylesheet, widget_stylesheet};
pub use toggle::{ToggleController, ToggleState};
pub use types::{CardPart, Geometry, MarkerScope};
pub use widget::CardBox;
