use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use tracing::debug;

// push-based signal with explicit listener registration
//
// the browser hands us scroll events one at a time on the main thread, so this is
// deliberately Rc/RefCell and not Send.  every subscribe() returns a Subscription
// guard, and dropping the guard is what removes the listener -- components hold the
// guard for exactly as long as they are mounted
type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
}

pub struct Feed<T> {
    inner: Rc<Registry<T>>,
}

// the vertical scroll offset of the page, in pixels
pub type ScrollFeed = Feed<f64>;

impl<T: 'static> Feed<T> {
    pub fn new() -> Self {
        Feed {
            inner: Rc::new(Registry {
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        self.inner.listeners.borrow_mut().push((id, listener));

        debug!(id, "feed listener registered");

        let registry: Rc<dyn Deregister> = self.inner.clone();

        Subscription {
            id,
            registry: Some(Rc::downgrade(&registry)),
        }
    }

    // the listener list is snapshotted before dispatch so that a listener may
    // subscribe or drop its own guard without tripping the RefCell
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        // a listener that is already running (re-entrant emit) is skipped
        for entry in snapshot {
            if let Ok(mut listener) = entry.try_borrow_mut() {
                (&mut *listener)(value);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<T: 'static> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Feed<T> {
    fn clone(&self) -> Self {
        Feed {
            inner: self.inner.clone(),
        }
    }
}

// dioxus props and context values need PartialEq; two feeds are equal when they
// share a registry
impl<T> PartialEq for Feed<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> fmt::Debug for Feed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feed")
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

trait Deregister {
    fn remove(&self, id: u64);
}

impl<T> Deregister for Registry<T> {
    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(other, _)| *other != id);
    }
}

// registration guard
//
// holds only a weak reference so that a guard outliving its feed is harmless
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    id: u64,
    registry: Option<Weak<dyn Deregister>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|registry| registry.strong_count() > 0)
    }

    fn release(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            registry.remove(self.id);
            debug!(id = self.id, "feed listener removed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_reaches_every_listener() {
        let feed = ScrollFeed::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = seen.clone();
            feed.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let b = {
            let seen = seen.clone();
            feed.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };

        feed.emit(&12.0);

        assert_eq!(*seen.borrow(), vec![("a", 12.0), ("b", 12.0)]);
        assert_eq!(feed.listener_count(), 2);

        drop(a);
        drop(b);
    }

    #[test]
    fn dropping_guard_deregisters() {
        let feed = ScrollFeed::new();
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let hits = hits.clone();
            feed.subscribe(move |_| hits.set(hits.get() + 1))
        };

        feed.emit(&1.0);
        drop(sub);
        feed.emit(&2.0);

        assert_eq!(hits.get(), 1);
        assert_eq!(feed.listener_count(), 0);
    }

    #[test]
    fn cancel_only_removes_its_own_listener() {
        let feed = Feed::<u8>::new();

        let first = feed.subscribe(|_| {});
        let second = feed.subscribe(|_| {});

        first.cancel();

        assert_eq!(feed.listener_count(), 1);
        assert!(second.is_active());
    }

    #[test]
    fn guard_outliving_feed_is_inert() {
        let feed = ScrollFeed::new();
        let sub = feed.subscribe(|_| {});

        drop(feed);

        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn listener_may_subscribe_during_emit() {
        let feed = ScrollFeed::new();
        let nested = Rc::new(RefCell::new(Vec::new()));

        let _outer = {
            let inner_feed = feed.clone();
            let nested = nested.clone();
            feed.subscribe(move |_| nested.borrow_mut().push(inner_feed.subscribe(|_| {})))
        };

        feed.emit(&0.0);

        assert_eq!(feed.listener_count(), 2);
    }
}
