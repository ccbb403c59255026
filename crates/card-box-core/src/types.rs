//! Core widget types: rendered parts, marker scopes and box geometry.

/// One node of the rendered card subtree.
///
/// The subtree always holds exactly one of each part; attribute sync only
/// mutates their content and never creates or removes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardPart {
    /// The wrapper holding everything else. Carries the widget-scope marker.
    Root,
    /// Caption heading (`h3`).
    Heading,
    /// The box holding the image before it goes full-viewport.
    Placeholder,
    /// The image itself.
    Image,
    /// Caption detail paragraph (`p`).
    Detail,
}

impl CardPart {
    /// Every part, in document order.
    pub const ALL: [CardPart; 5] = [
        CardPart::Root,
        CardPart::Heading,
        CardPart::Placeholder,
        CardPart::Image,
        CardPart::Detail,
    ];

    /// Class name used for the part in the rendered markup, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            CardPart::Root => Some("wrapper"),
            CardPart::Placeholder => Some("placeholder"),
            CardPart::Heading | CardPart::Image | CardPart::Detail => None,
        }
    }

    /// Tag name of the element rendered for this part.
    pub fn tag_name(self) -> &'static str {
        match self {
            CardPart::Root | CardPart::Placeholder => "div",
            CardPart::Heading => "h3",
            CardPart::Image => "img",
            CardPart::Detail => "p",
        }
    }
}

/// Where a visual-mode marker class is applied.
///
/// The widget root and the document root are independent class lists; the
/// overlay needs both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerScope {
    /// The widget's own root (`CardPart::Root`).
    Widget,
    /// The host document's root element (`<html>`).
    Document,
}

/// Width and height of a rendered box, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    /// Create a new geometry.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side has no extent, e.g. a box that is not laid out yet.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// CSS length for the width, e.g. `"120px"`.
    pub fn width_px(&self) -> String {
        format!("{}px", self.width)
    }

    /// CSS length for the height, e.g. `"80px"`.
    pub fn height_px(&self) -> String {
        format!("{}px", self.height)
    }
}
