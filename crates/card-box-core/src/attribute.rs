//! Observed attributes and their defaulting rules.
//!
//! Attribute names are resolved into `AttributeKind` once, at the host
//! boundary. Everything past that point matches exhaustively on the kind.

use std::str::FromStr;

use smol_str::SmolStr;

use crate::assets::PLACEHOLDER_IMAGE;

/// Caption heading shown when `title` is absent or empty.
pub const DEFAULT_TITLE: &str = "{untitled}";

/// Caption detail shown when `description` is absent or empty.
pub const DEFAULT_DESCRIPTION: &str = "{undescribed}";

/// An externally observed attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// `title`: caption heading, mirrored onto the image's `alt`.
    Title,
    /// `description`: caption detail paragraph.
    Description,
    /// `src`: image source URL or data URI.
    Src,
}

impl AttributeKind {
    /// Attribute names the host must report changes for, in registration order.
    pub const OBSERVED: [&'static str; 3] = ["src", "title", "description"];

    /// The attribute name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::Title => "title",
            AttributeKind::Description => "description",
            AttributeKind::Src => "src",
        }
    }

    /// Value rendered when the attribute is absent or empty.
    pub fn default_value(self) -> &'static str {
        match self {
            AttributeKind::Title => DEFAULT_TITLE,
            AttributeKind::Description => DEFAULT_DESCRIPTION,
            AttributeKind::Src => PLACEHOLDER_IMAGE,
        }
    }
}

/// An attribute name outside the observed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute `{0}`")]
pub struct UnknownAttribute(pub SmolStr);

impl FromStr for AttributeKind {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(AttributeKind::Title),
            "description" => Ok(AttributeKind::Description),
            "src" => Ok(AttributeKind::Src),
            other => Err(UnknownAttribute(SmolStr::new(other))),
        }
    }
}

/// Resolve a raw attribute value, falling back to the kind's default when the
/// value is absent or empty.
pub fn resolve(kind: AttributeKind, value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => kind.default_value(),
    }
}

/// The resolved attribute values currently rendered by a widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardAttributes {
    pub title: SmolStr,
    pub description: SmolStr,
    /// `None` while the built-in placeholder is shown.
    pub src: Option<SmolStr>,
}

impl Default for CardAttributes {
    fn default() -> Self {
        Self {
            title: SmolStr::new_static(DEFAULT_TITLE),
            description: SmolStr::new_static(DEFAULT_DESCRIPTION),
            src: None,
        }
    }
}

impl CardAttributes {
    /// Build from the host's initial raw attribute values.
    pub fn from_raw(title: Option<&str>, description: Option<&str>, src: Option<&str>) -> Self {
        let mut attrs = Self::default();
        attrs.set(AttributeKind::Title, title);
        attrs.set(AttributeKind::Description, description);
        attrs.set(AttributeKind::Src, src);
        attrs
    }

    /// Record a raw value for `kind`, applying defaults.
    pub fn set(&mut self, kind: AttributeKind, value: Option<&str>) {
        let resolved = SmolStr::new(resolve(kind, value));
        match kind {
            AttributeKind::Title => self.title = resolved,
            AttributeKind::Description => self.description = resolved,
            AttributeKind::Src => {
                self.src = value.filter(|v| !v.is_empty()).map(|_| resolved);
            }
        }
    }

    /// The resolved value that should be rendered for `kind`.
    pub fn get(&self, kind: AttributeKind) -> &str {
        match kind {
            AttributeKind::Title => &self.title,
            AttributeKind::Description => &self.description,
            AttributeKind::Src => self.src.as_deref().unwrap_or(PLACEHOLDER_IMAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_observed_names() {
        for name in AttributeKind::OBSERVED {
            let kind: AttributeKind = name.parse().unwrap();
            assert_eq!(kind.name(), name);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Title".parse::<AttributeKind>(),
            Err(UnknownAttribute(SmolStr::new("Title")))
        );
        assert!("alt".parse::<AttributeKind>().is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(resolve(AttributeKind::Title, None), "{untitled}");
        assert_eq!(resolve(AttributeKind::Title, Some("")), "{untitled}");
        assert_eq!(resolve(AttributeKind::Description, Some("")), "{undescribed}");
        assert_eq!(resolve(AttributeKind::Src, None), PLACEHOLDER_IMAGE);
        assert_eq!(resolve(AttributeKind::Title, Some("Ocean")), "Ocean");
    }

    #[test]
    fn test_card_attributes_from_raw() {
        let attrs = CardAttributes::from_raw(Some("Ocean"), None, Some(""));
        assert_eq!(attrs.title, "Ocean");
        assert_eq!(attrs.description, "{undescribed}");
        assert_eq!(attrs.src, None);
        assert_eq!(attrs.get(AttributeKind::Src), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_card_attributes_src_roundtrip_to_placeholder() {
        let mut attrs = CardAttributes::default();
        attrs.set(AttributeKind::Src, Some("https://example.com/a.png"));
        assert_eq!(attrs.get(AttributeKind::Src), "https://example.com/a.png");
        attrs.set(AttributeKind::Src, None);
        assert_eq!(attrs.src, None);
    }
}
