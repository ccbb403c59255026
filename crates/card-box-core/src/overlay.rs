//! Process-wide overlay coordination.
//!
//! Two things are shared by every card on a page: the page-level style rules
//! that stop scrolling (one per marker class), and the marker class on the
//! document root. Both live
//! here, behind one explicit coordinator that each widget receives at
//! construction instead of reaching for ambient globals.
//!
//! # Usage
//!
//! ```ignore
//! let coordinator = OverlayCoordinator::global();
//! let id = coordinator.register();
//! coordinator.ensure_style_injected(&page, "card-boxed")?;
//! coordinator.acquire(id)?;   // before setting the document marker
//! coordinator.release(id);    // before clearing it
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use smol_str::SmolStr;

use crate::error::CardBoxError;
use crate::platform::{PageStyleSink, PlatformError};
use crate::style::page_stylesheet;

/// Identifies one widget instance for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct OverlayState {
    /// Marker classes whose page style is in place. Only ever grows.
    injected: BTreeSet<SmolStr>,
    /// The widget currently allowed to mark the document root.
    holder: Option<WidgetId>,
}

/// Shared coordination point for every card in the process.
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    next_id: AtomicU64,
    state: Mutex<OverlayState>,
}

static GLOBAL: OnceLock<Arc<OverlayCoordinator>> = OnceLock::new();

impl OverlayCoordinator {
    /// Create an isolated coordinator. Hosts normally use [`global`](Self::global).
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide coordinator, created on first use.
    pub fn global() -> Arc<OverlayCoordinator> {
        GLOBAL.get_or_init(|| Arc::new(OverlayCoordinator::new())).clone()
    }

    fn lock(&self) -> MutexGuard<'_, OverlayState> {
        // A poisoned lock still holds consistent flags: every update is a
        // single field assignment.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Hand out a fresh widget id.
    pub fn register(&self) -> WidgetId {
        WidgetId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Insert the page style for `marker` through `sink` unless it was
    /// inserted before.
    ///
    /// Returns `true` when this call performed the insertion. The marker is
    /// only recorded after the sink succeeds, so a failed insert is retried by
    /// the next caller.
    pub fn ensure_style_injected(
        &self,
        sink: &dyn PageStyleSink,
        marker: &str,
    ) -> Result<bool, PlatformError> {
        let mut state = self.lock();
        if state.injected.contains(marker) {
            return Ok(false);
        }
        sink.insert_page_style(&page_stylesheet(marker))?;
        state.injected.insert(SmolStr::new(marker));
        tracing::debug!(marker, "page style injected");
        Ok(true)
    }

    /// Whether the page style for `marker` has been inserted.
    pub fn style_injected(&self, marker: &str) -> bool {
        self.lock().injected.contains(marker)
    }

    /// Take the document marker lease for `id`.
    ///
    /// Succeeds when the lease is free or already held by `id`; fails with
    /// `OverlayBusy` when another widget holds it.
    pub fn acquire(&self, id: WidgetId) -> Result<(), CardBoxError> {
        let mut state = self.lock();
        match state.holder {
            Some(holder) if holder != id => Err(CardBoxError::OverlayBusy { holder }),
            _ => {
                state.holder = Some(id);
                Ok(())
            }
        }
    }

    /// Give up the lease if `id` holds it.
    ///
    /// Returns `true` when `id` was the holder, i.e. the caller should now clear
    /// the document marker.
    pub fn release(&self, id: WidgetId) -> bool {
        let mut state = self.lock();
        if state.holder == Some(id) {
            state.holder = None;
            true
        } else {
            false
        }
    }

    /// The widget currently holding the document marker lease.
    pub fn holder(&self) -> Option<WidgetId> {
        self.lock().holder
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct CountingSink {
        inserted: RefCell<Vec<String>>,
        fail_next: Cell<bool>,
    }

    impl PageStyleSink for CountingSink {
        fn insert_page_style(&self, css: &str) -> Result<(), PlatformError> {
            if self.fail_next.replace(false) {
                return Err("no <head>".into());
            }
            self.inserted.borrow_mut().push(css.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_register_hands_out_unique_ids() {
        let coordinator = OverlayCoordinator::new();
        let a = coordinator.register();
        let b = coordinator.register();
        assert_ne!(a, b);
    }

    #[test]
    fn test_style_injected_once() {
        let coordinator = OverlayCoordinator::new();
        let sink = CountingSink::default();

        assert!(coordinator.ensure_style_injected(&sink, "a").unwrap());
        for _ in 0..10 {
            assert!(!coordinator.ensure_style_injected(&sink, "a").unwrap());
        }
        assert_eq!(*sink.inserted.borrow(), vec![page_stylesheet("a")]);
        assert!(coordinator.style_injected("a"));
        assert!(!coordinator.style_injected("b"));
    }

    #[test]
    fn test_failed_injection_is_retried() {
        let coordinator = OverlayCoordinator::new();
        let sink = CountingSink::default();
        sink.fail_next.set(true);

        assert!(coordinator.ensure_style_injected(&sink, "a").is_err());
        assert!(!coordinator.style_injected("a"));
        assert!(coordinator.ensure_style_injected(&sink, "a").unwrap());
        assert_eq!(sink.inserted.borrow().len(), 1);
    }

    #[test]
    fn test_style_injected_once_per_marker() {
        let coordinator = OverlayCoordinator::new();
        let sink = CountingSink::default();

        assert!(coordinator.ensure_style_injected(&sink, "card-boxed").unwrap());
        assert!(coordinator.ensure_style_injected(&sink, "zoomed").unwrap());
        for marker in ["card-boxed", "zoomed", "card-boxed"] {
            assert!(!coordinator.ensure_style_injected(&sink, marker).unwrap());
        }

        let inserted = sink.inserted.borrow();
        assert_eq!(inserted.len(), 2);
        assert!(inserted[0].contains("html.card-boxed body"));
        assert!(inserted[1].contains("html.zoomed body"));
    }

    #[test]
    fn test_single_holder_lease() {
        let coordinator = OverlayCoordinator::new();
        let a = coordinator.register();
        let b = coordinator.register();

        coordinator.acquire(a).unwrap();
        coordinator.acquire(a).unwrap();
        assert_eq!(
            coordinator.acquire(b),
            Err(CardBoxError::OverlayBusy { holder: a })
        );

        assert!(!coordinator.release(b));
        assert_eq!(coordinator.holder(), Some(a));
        assert!(coordinator.release(a));
        assert_eq!(coordinator.holder(), None);
        assert!(!coordinator.release(a));

        coordinator.acquire(b).unwrap();
        assert_eq!(coordinator.holder(), Some(b));
    }

    #[test]
    fn test_global_is_shared() {
        let first = OverlayCoordinator::global();
        let second = OverlayCoordinator::global();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
