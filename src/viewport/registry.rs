use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::foundation::core::Rect;

/// Receives viewport changes from a [`ViewportRegistry`].
pub trait ViewportClient {
    /// Called synchronously each time the viewport rect is set.
    fn did_set_viewport_rect(&self, rect: Rect);
}

/// Registration handle inside one registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(u64);

#[derive(Default)]
struct RegistryState {
    next_id: u64,
    clients: Vec<(ClientId, Weak<dyn ViewportClient>)>,
    viewport_rect: Rect,
}

/// Per-document set of objects that want to hear about viewport changes.
///
/// Clients are held weakly; the registry never keeps a client alive.
pub struct ViewportRegistry {
    state: RefCell<RegistryState>,
}

impl fmt::Debug for ViewportRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ViewportRegistry")
            .field("clients", &state.clients.len())
            .field("viewport_rect", &state.viewport_rect)
            .finish()
    }
}

impl ViewportRegistry {
    /// Create an empty registry with a zero viewport.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(RegistryState::default()),
        })
    }

    /// Add `client`; it stays registered until the returned subscription is dropped or disposed.
    pub fn register_viewport_client(
        self: &Rc<Self>,
        client: Weak<dyn ViewportClient>,
    ) -> ViewportSubscription {
        let mut state = self.state.borrow_mut();
        let id = ClientId(state.next_id);
        state.next_id += 1;
        state.clients.push((id, client));
        tracing::debug!(client = id.0, total = state.clients.len(), "viewport client registered");
        ViewportSubscription {
            registry: Rc::downgrade(self),
            id: Some(id),
        }
    }

    /// Remove a client. Returns `false` if it was not registered.
    pub fn unregister_viewport_client(&self, id: ClientId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.clients.len();
        state.clients.retain(|(cid, _)| *cid != id);
        let removed = state.clients.len() != before;
        if removed {
            tracing::debug!(client = id.0, total = state.clients.len(), "viewport client unregistered");
        }
        removed
    }

    /// Store the new viewport and notify every live client in registration order.
    ///
    /// Clients may register or unregister from inside the callback; such changes apply to the
    /// next notification.
    pub fn set_viewport_rect(&self, rect: Rect) {
        let live: Vec<Rc<dyn ViewportClient>> = {
            let mut state = self.state.borrow_mut();
            state.viewport_rect = rect;
            state.clients.retain(|(_, c)| c.strong_count() > 0);
            state.clients.iter().filter_map(|(_, c)| c.upgrade()).collect()
        };
        tracing::trace!(clients = live.len(), ?rect, "viewport rect set");
        for client in live {
            client.did_set_viewport_rect(rect);
        }
    }

    /// Last rect passed to [`Self::set_viewport_rect`].
    pub fn viewport_rect(&self) -> Rect {
        self.state.borrow().viewport_rect
    }

    /// Number of registered clients, including ones already dropped but not yet pruned.
    pub fn client_count(&self) -> usize {
        self.state.borrow().clients.len()
    }
}

/// Scoped registration; unregisters on drop.
///
/// Holds the registry weakly, so releasing after the registry is gone is a no-op.
#[derive(Debug)]
pub struct ViewportSubscription {
    registry: Weak<ViewportRegistry>,
    id: Option<ClientId>,
}

impl ViewportSubscription {
    /// Registration id, or `None` once disposed.
    pub fn id(&self) -> Option<ClientId> {
        self.id
    }

    /// Unregister now. Safe to call more than once.
    pub fn dispose(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.registry.upgrade() {
            Some(registry) => {
                registry.unregister_viewport_client(id);
            }
            None => tracing::trace!(client = id.0, "viewport registry already gone"),
        }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/registry.rs"]
mod tests;
