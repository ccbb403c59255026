//! Mount/unmount bookkeeping for the activation handler.
//!
//! `MountState` is generic over the host's handler handle `H` (a
//! `gloo_events::EventListener` in the browser). Binding only happens on the
//! `Unmounted -> Mounted` edge and the handle is handed back exactly once on
//! the way out, so repeated notifications in either direction are no-ops.

/// Whether a widget is mounted, and the handler bound while it is.
#[derive(Debug)]
pub enum MountState<H> {
    Unmounted,
    Mounted(H),
}

impl<H> Default for MountState<H> {
    fn default() -> Self {
        MountState::Unmounted
    }
}

impl<H> MountState<H> {
    pub fn is_mounted(&self) -> bool {
        matches!(self, MountState::Mounted(_))
    }

    /// The bound handler, if mounted.
    pub fn handler(&self) -> Option<&H> {
        match self {
            MountState::Unmounted => None,
            MountState::Mounted(handler) => Some(handler),
        }
    }

    /// Enter `Mounted`, running `bind` only if currently unmounted.
    ///
    /// Returns `true` when a handler was bound by this call. If `bind` fails
    /// the state stays `Unmounted`.
    pub fn mount<E>(&mut self, bind: impl FnOnce() -> Result<H, E>) -> Result<bool, E> {
        if self.is_mounted() {
            return Ok(false);
        }
        *self = MountState::Mounted(bind()?);
        Ok(true)
    }

    /// Enter `Unmounted`, returning the handler that must now be unbound.
    ///
    /// Returns `None` when already unmounted.
    pub fn unmount(&mut self) -> Option<H> {
        match std::mem::replace(self, MountState::Unmounted) {
            MountState::Unmounted => None,
            MountState::Mounted(handler) => Some(handler),
        }
    }
}
