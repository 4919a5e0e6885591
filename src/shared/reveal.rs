//! Viewport reveal subscriptions.
//!
//! Rendering surfaces register each card element with a [`RevealWatcher`]
//! and get back a [`Subscription`]. Whoever drives the viewport calls
//! [`RevealWatcher::reveal`] when an element becomes visible, which resumes
//! the task awaiting that element's subscription. Unobserving an element (or
//! dropping its subscription) ends the stream.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::mpsc;

/// Identifier of a rendered element, assigned by the rendering surface.
pub type ElementId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// The element entered the viewport.
    Entered { id: ElementId },
}

struct Entry {
    generation: u64,
    sender: mpsc::UnboundedSender<RevealEvent>,
}

#[derive(Default)]
struct Registry {
    next_generation: u64,
    entries: HashMap<ElementId, Entry>,
}

type Shared = Arc<Mutex<Registry>>;

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Hub routing "entered viewport" events to per-element subscriptions.
#[derive(Clone, Default)]
pub struct RevealWatcher {
    registry: Shared,
}

impl RevealWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Observing an id twice ends the earlier
    /// subscription.
    pub fn observe(&self, id: ElementId) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut registry = lock(&self.registry);
        let generation = registry.next_generation;
        registry.next_generation += 1;
        registry.entries.insert(id, Entry { generation, sender });

        Subscription {
            id,
            generation,
            receiver,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Mark an element as visible. Returns false when nothing observes it.
    pub fn reveal(&self, id: ElementId) -> bool {
        let registry = lock(&self.registry);
        match registry.entries.get(&id) {
            Some(entry) => entry.sender.send(RevealEvent::Entered { id }).is_ok(),
            None => false,
        }
    }

    /// Stop watching an element; its subscription yields `None` afterwards.
    pub fn unobserve(&self, id: ElementId) {
        if lock(&self.registry).entries.remove(&id).is_some() {
            tracing::trace!(id, "element unobserved");
        }
    }

    /// Stop watching every element, e.g. when the container is cleared.
    pub fn unobserve_all(&self) {
        lock(&self.registry).entries.clear();
    }

    pub fn observed_count(&self) -> usize {
        lock(&self.registry).entries.len()
    }
}

/// Stream of reveal events for one element.
pub struct Subscription {
    id: ElementId,
    generation: u64,
    receiver: mpsc::UnboundedReceiver<RevealEvent>,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Waits for the next reveal. `None` once the element is unobserved.
    pub async fn next(&mut self) -> Option<RevealEvent> {
        self.receiver.recv().await
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = lock(&registry);
        if registry
            .entries
            .get(&self.id)
            .is_some_and(|entry| entry.generation == self.generation)
        {
            registry.entries.remove(&self.id);
        }
    }
}
