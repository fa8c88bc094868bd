//! Global pointer-listener registry used for "click outside closes" behaviour.
//!
//! A widget that wants outside-click notifications calls [`PointerHub::subscribe`] and
//! holds on to the returned [`PointerSubscription`]. Dropping the subscription is the only
//! way to unregister, so the listener goes away exactly once no matter how the widget
//! closes or is torn down.

use ratatui::layout::{Position, Rect};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    // None until the first render has told us where the widget lives.
    listeners: BTreeMap<ListenerId, Option<Rect>>,
}

#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    inner: Arc<Mutex<Registry>>,
}

impl PointerHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> PointerSubscription {
        let mut registry = lock(&self.inner);
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(id, None);
        tracing::trace!(listener = id.0, "pointer listener registered");
        PointerSubscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Listeners whose recorded bounds do not contain `pos`. Listeners that have not
    /// been given bounds yet are skipped.
    #[must_use]
    pub fn outside(&self, pos: Position) -> Vec<ListenerId> {
        lock(&self.inner)
            .listeners
            .iter()
            .filter_map(|(id, bounds)| match bounds {
                Some(rect) if !rect.contains(pos) => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Registration guard returned by [`PointerHub::subscribe`].
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    registry: Weak<Mutex<Registry>>,
}

impl PointerSubscription {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn set_bounds(&self, bounds: Rect) {
        if let Some(registry) = self.registry.upgrade() {
            if let Some(slot) = lock(&registry).listeners.get_mut(&self.id) {
                *slot = Some(bounds);
            }
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.remove(&self.id);
            tracing::trace!(listener = self.id.0, "pointer listener released");
        }
    }
}

// The registry holds plain data, so a poisoned lock is still consistent.
fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_releases_listener() {
        let hub = PointerHub::new();
        let sub = hub.subscribe();
        let other = hub.subscribe();
        assert_eq!(hub.active_count(), 2);
        assert_ne!(sub.id(), other.id());

        drop(sub);
        assert_eq!(hub.active_count(), 1);
        drop(other);
        assert_eq!(hub.active_count(), 0);
    }

    #[test]
    fn test_outside_uses_bounds() {
        let hub = PointerHub::new();
        let sub = hub.subscribe();

        // No bounds yet: never reported
        assert!(hub.outside(Position::new(0, 0)).is_empty());

        sub.set_bounds(Rect::new(10, 10, 5, 3));
        assert!(hub.outside(Position::new(11, 11)).is_empty());
        assert_eq!(hub.outside(Position::new(0, 0)), vec![sub.id()]);
        assert_eq!(hub.outside(Position::new(15, 11)), vec![sub.id()]);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let sub = {
            let hub = PointerHub::new();
            hub.subscribe()
        };
        sub.set_bounds(Rect::new(0, 0, 1, 1));
        drop(sub);
    }
}
