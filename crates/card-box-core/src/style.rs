//! Stylesheets for the widget's isolated scope and for the host page.

use crate::config::CardBoxConfig;

/// Rules scoped to one widget's shadow root.
///
/// While collapsed the image is a thumbnail capped at `image_height`. Under
/// `.<marker>.wrapper` the `.tb` box turns into a fixed, full-viewport backdrop
/// and the cap is lifted.
pub fn widget_stylesheet(config: &CardBoxConfig) -> String {
    let height = config.image_height;
    let marker = &config.marker_class;
    format!(
        r#".wrapper {{
  padding: 10px;
  text-align: center;
  cursor: pointer;
}}
.wrapper .placeholder {{
  display: inline-block;
}}
.wrapper .tb {{
  display: table;
  margin: 0 auto;
  transition: all .5s ease-in-out;
  background-color: rgba(0, 0, 0, 0);
}}
.wrapper .td {{
  display: table-cell;
  vertical-align: middle;
  text-align: center;
  height: {height}px;
}}
.wrapper img {{
  max-height: {height}px;
  width: auto;
  outline: none;
  border: none;
  transition: all 1s ease-in-out;
}}
.{marker}.wrapper .tb {{
  position: fixed;
  top: 0; left: 0;
  right: 0; bottom: 0;
  width: 100%; height: 100%;
  background-color: rgba(0, 0, 0, .5);
  z-index: 9999;
}}
.{marker}.wrapper img {{
  max-height: none;
}}
"#
    )
}

/// The single page-level rule: no page scrolling while `<html>` carries the marker.
pub fn page_stylesheet(marker: &str) -> String {
    format!(
        "html.{marker},\nhtml.{marker} body {{\n  overflow: hidden!important;\n  height: 100%!important;\n}}\n"
    )
}
