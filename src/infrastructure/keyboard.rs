// SPDX-License-Identifier: MPL-2.0
//! Keyboard listener registry.
//!
//! The application only subscribes to window keyboard events while this
//! registry holds at least one listener.

use crate::application::port::{KeyboardHub, ListenerId};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: BTreeSet<ListenerId>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any listener is registered.
    #[must_use]
    pub fn has_listeners(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl KeyboardHub for ListenerRegistry {
    fn register(&mut self) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.active.insert(id);
        tracing::debug!(%id, "keyboard listener registered");
        id
    }

    fn deregister(&mut self, id: ListenerId) -> bool {
        let removed = self.active.remove(&id);
        if removed {
            tracing::debug!(%id, "keyboard listener deregistered");
        }
        removed
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.active.contains(&id)
    }
}
