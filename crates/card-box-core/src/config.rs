//! Widget configuration.
//!
//! Every field has a default, so an empty options object (or none at all)
//! yields the stock `card-box` element.

use serde::Deserialize;
use smol_str::SmolStr;

/// Options for registering and rendering the widget.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardBoxConfig {
    /// Custom element name the widget is registered under.
    pub tag_name: SmolStr,
    /// Thumbnail height in CSS pixels while collapsed.
    pub image_height: u32,
    /// Class toggled on the widget root and `<html>` while expanded.
    pub marker_class: SmolStr,
}

impl Default for CardBoxConfig {
    fn default() -> Self {
        Self {
            tag_name: SmolStr::new_static("card-box"),
            image_height: 64,
            marker_class: SmolStr::new_static("card-boxed"),
        }
    }
}
