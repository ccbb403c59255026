//! In-memory host document.
//!
//! `MemoryDocument` stands in for the page (root class list and `<head>`
//! styles); `MemorySurface` stands in for one widget's subtree. Both are cheap
//! handles over shared state, so a test can keep one copy for assertions while
//! the widget owns another.
//!
//! Layout is not computed: the size `measure` reports is whatever was last
//! given to `set_layout` (`0x0` until then).

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::rc::Rc;

use crate::assets::PLACEHOLDER_IMAGE;
use crate::platform::{CardSurface, PageStyleSink, PlatformError};
use crate::types::{CardPart, Geometry, MarkerScope};

#[derive(Debug, Default)]
struct DocumentState {
    root_classes: BTreeSet<String>,
    page_styles: Vec<String>,
}

/// Shared page state: the document root's classes and page-level styles.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document root carries `class`.
    pub fn has_marker(&self, class: &str) -> bool {
        self.state.borrow().root_classes.contains(class)
    }

    /// Every page-level style inserted so far, in insertion order.
    pub fn page_styles(&self) -> Vec<String> {
        self.state.borrow().page_styles.clone()
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut state = self.state.borrow_mut();
        if present {
            state.root_classes.insert(class.to_string());
        } else {
            state.root_classes.remove(class);
        }
    }
}

impl PageStyleSink for MemoryDocument {
    fn insert_page_style(&self, css: &str) -> Result<(), PlatformError> {
        self.state.borrow_mut().page_styles.push(css.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryNode {
    /// Text children; `replace_text` keeps at most one.
    children: Vec<String>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    pinned: Option<Geometry>,
    layout: Geometry,
    writes: usize,
}

#[derive(Debug)]
struct SurfaceState {
    nodes: BTreeMap<CardPart, MemoryNode>,
}

/// One widget's subtree, held in memory.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    document: MemoryDocument,
    state: Rc<RefCell<SurfaceState>>,
}

impl MemorySurface {
    /// Build the card subtree inside `document`.
    pub fn new(document: &MemoryDocument) -> Self {
        let nodes = CardPart::ALL
            .into_iter()
            .map(|part| {
                let mut node = MemoryNode::default();
                if let Some(class) = part.class_name() {
                    node.classes.insert(class.to_string());
                }
                if part == CardPart::Image {
                    node.attributes.insert("tabindex".into(), "-1".into());
                }
                (part, node)
            })
            .collect();
        Self {
            document: document.clone(),
            state: Rc::new(RefCell::new(SurfaceState { nodes })),
        }
    }

    /// The document this surface lives in.
    pub fn document(&self) -> &MemoryDocument {
        &self.document
    }

    fn with_node<R>(
        &self,
        part: CardPart,
        f: impl FnOnce(&mut MemoryNode) -> R,
    ) -> Result<R, PlatformError> {
        let mut state = self.state.borrow_mut();
        let node = state
            .nodes
            .get_mut(&part)
            .ok_or_else(|| PlatformError(format!("missing {:?} node", part)))?;
        Ok(f(node))
    }

    fn read<R: Default>(&self, part: CardPart, f: impl FnOnce(&MemoryNode) -> R) -> R {
        self.state.borrow().nodes.get(&part).map(f).unwrap_or_default()
    }

    /// Set the size `measure` reports for `part`.
    pub fn set_layout(&self, part: CardPart, geometry: Geometry) {
        let _ = self.with_node(part, |node| node.layout = geometry);
    }

    /// Concatenated text content of `part`.
    pub fn text(&self, part: CardPart) -> String {
        self.read(part, |node| node.children.concat())
    }

    /// Raw text children of `part`.
    pub fn children(&self, part: CardPart) -> Vec<String> {
        self.read(part, |node| node.children.clone())
    }

    pub fn attribute(&self, part: CardPart, name: &str) -> Option<String> {
        self.read(part, |node| node.attributes.get(name).cloned())
    }

    /// Explicit inline size currently applied to `part`.
    pub fn pinned_size(&self, part: CardPart) -> Option<Geometry> {
        self.read(part, |node| node.pinned)
    }

    /// Whether the widget root carries `class`.
    pub fn has_marker(&self, class: &str) -> bool {
        self.read(CardPart::Root, |node| node.classes.contains(class))
    }

    /// Number of content mutations (text or attribute writes) made to `part`.
    pub fn write_count(&self, part: CardPart) -> usize {
        self.read(part, |node| node.writes)
    }

    /// Human-readable dump of the subtree, one part per line.
    ///
    /// The built-in placeholder image is abbreviated to `<placeholder>`.
    pub fn dump(&self) -> String {
        let state = self.state.borrow();
        let mut out = String::new();
        for (part, node) in &state.nodes {
            let _ = write!(out, "{}", part.tag_name());
            for class in &node.classes {
                let _ = write!(out, ".{class}");
            }
            for (name, value) in &node.attributes {
                let value = if value == PLACEHOLDER_IMAGE {
                    "<placeholder>"
                } else {
                    value.as_str()
                };
                let _ = write!(out, " {name}={value:?}");
            }
            if let Some(size) = node.pinned {
                let _ = write!(out, " [{}x{}]", size.width, size.height);
            }
            if !node.children.is_empty() {
                let _ = write!(out, " {:?}", node.children.concat());
            }
            out.push('\n');
        }
        out
    }
}

impl CardSurface for MemorySurface {
    fn replace_text(&self, part: CardPart, text: &str) -> Result<(), PlatformError> {
        self.with_node(part, |node| {
            node.children.clear();
            if !text.is_empty() {
                node.children.push(text.to_string());
            }
            node.writes += 1;
        })
    }

    fn set_attribute(&self, part: CardPart, name: &str, value: &str) -> Result<(), PlatformError> {
        self.with_node(part, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
            node.writes += 1;
        })
    }

    fn measure(&self, part: CardPart) -> Result<Geometry, PlatformError> {
        self.with_node(part, |node| node.layout)
    }

    fn pin_size(&self, part: CardPart, size: Option<Geometry>) -> Result<(), PlatformError> {
        self.with_node(part, |node| node.pinned = size)
    }

    fn set_marker(
        &self,
        scope: MarkerScope,
        class: &str,
        present: bool,
    ) -> Result<(), PlatformError> {
        match scope {
            MarkerScope::Widget => self.with_node(CardPart::Root, |node| {
                if present {
                    node.classes.insert(class.to_string());
                } else {
                    node.classes.remove(class);
                }
            }),
            MarkerScope::Document => {
                self.document.set_root_class(class, present);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_text_empty_leaves_no_child() {
        let surface = MemorySurface::new(&MemoryDocument::new());
        surface.replace_text(CardPart::Heading, "x").unwrap();
        surface.replace_text(CardPart::Heading, "").unwrap();
        assert!(surface.children(CardPart::Heading).is_empty());
    }

    #[test]
    fn test_fresh_surface_dump() {
        let surface = MemorySurface::new(&MemoryDocument::new());
        insta::assert_snapshot!(surface.dump(), @r#"
        div.wrapper
        h3
        div.placeholder
        img tabindex="-1"
        p
        "#);
    }

    #[test]
    fn test_document_marker_shared_between_surfaces() {
        let document = MemoryDocument::new();
        let a = MemorySurface::new(&document);
        let b = MemorySurface::new(&document);
        a.set_marker(MarkerScope::Document, "m", true).unwrap();
        assert!(document.has_marker("m"));
        b.set_marker(MarkerScope::Document, "m", false).unwrap();
        assert!(!document.has_marker("m"));
        assert!(!a.has_marker("m"));
    }
}
