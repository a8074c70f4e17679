//! The store: single owner of application state.
//!
//! ## Dispatch cycle
//!
//! 1. `dispatch(action)` runs the reducer against the current state.
//! 2. The subscriber registry is snapshotted and every live observer is
//!    called with the new state, in subscription order.
//! 3. Actions dispatched while a cycle is in flight (from an observer, or a
//!    reducer holding a store handle) are queued and run, in order, once the
//!    current cycle has notified everybody.
//!
//! The store is single-threaded: it is `!Send` and must stay on the thread
//! that created it. Reading the state from inside a reducer is forbidden and
//! panics, since the reducer holds the only mutable borrow.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::reducer::{BoxReducer, Reducer};

/// Identifies one registration in a store's subscriber registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Observer<S> = Rc<dyn Fn(&S)>;

/// Ordered observer registry.
struct Registry<S> {
    observers: RefCell<Vec<(SubscriptionId, Observer<S>)>>,
    next: Cell<u64>,
}

impl<S> Registry<S> {
    fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
            next: Cell::new(0),
        }
    }

    fn insert(&self, observer: Observer<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next.get());
        self.next.set(self.next.get().wrapping_add(1));
        self.observers.borrow_mut().push((id, observer));
        id
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.observers.borrow().iter().any(|(live, _)| *live == id)
    }

    fn snapshot(&self) -> Vec<(SubscriptionId, Observer<S>)> {
        self.observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect()
    }

    fn len(&self) -> usize {
        self.observers.borrow().len()
    }
}

/// Type-erased removal so `Subscription` does not carry the state type.
trait Unsubscribe {
    fn remove(&self, id: SubscriptionId) -> bool;
}

impl<S> Unsubscribe for Registry<S> {
    fn remove(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(live, _)| *live != id);
        observers.len() != before
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the observer registered; call
/// [`Subscription::cancel`] to release it.
#[must_use = "keep the handle to be able to cancel the subscription"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<dyn Unsubscribe>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes the observer. Returns false if it was already gone (or the
    /// store no longer exists).
    pub fn cancel(self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.remove(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

struct Inner<S, A> {
    state: RefCell<S>,
    reducer: BoxReducer<S, A>,
    registry: Rc<Registry<S>>,
    pending: RefCell<VecDeque<A>>,
    dispatching: Cell<bool>,
}

/// Clears the in-flight flag even if a reducer or observer panics.
struct DispatchGuard<'a, A> {
    dispatching: &'a Cell<bool>,
    pending: &'a RefCell<VecDeque<A>>,
}

impl<A> Drop for DispatchGuard<'_, A> {
    fn drop(&mut self) {
        self.dispatching.set(false);
        self.pending.borrow_mut().clear();
    }
}

/// Owns the current state and the composed reducer.
///
/// Cloning a `Store` yields another handle to the same store.
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: 'static, A: 'static> Store<S, A> {
    pub fn new(initial_state: S, reducer: impl Reducer<S, A> + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial_state),
                reducer: reducer.boxed(),
                registry: Rc::new(Registry::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Sends an action through the reducer, then notifies subscribers.
    pub fn dispatch(&self, action: A) {
        let inner = &*self.inner;
        if inner.dispatching.get() {
            tracing::trace!("dispatch issued during a dispatch cycle; queued");
            inner.pending.borrow_mut().push_back(action);
            return;
        }

        inner.dispatching.set(true);
        let _guard = DispatchGuard {
            dispatching: &inner.dispatching,
            pending: &inner.pending,
        };

        let mut next = Some(action);
        while let Some(action) = next {
            self.reduce_and_notify(&action);
            next = inner.pending.borrow_mut().pop_front();
        }
    }

    fn reduce_and_notify(&self, action: &A) {
        let inner = &*self.inner;
        inner.reducer.reduce(&mut *inner.state.borrow_mut(), action);

        // Observers registered from inside this loop wait for the next cycle.
        let observers = inner.registry.snapshot();
        tracing::trace!(subscribers = observers.len(), "state changed");

        let state = inner.state.borrow();
        for (id, observer) in observers {
            if inner.registry.contains(id) {
                observer(&*state);
            }
        }
    }

    /// Registers an observer called with the new state after every dispatch.
    pub fn subscribe(&self, observer: impl Fn(&S) + 'static) -> Subscription {
        let id = self.inner.registry.insert(Rc::new(observer));
        let registry: Rc<dyn Unsubscribe> = Rc::<Registry<S>>::clone(&self.inner.registry);
        Subscription {
            id,
            registry: Rc::downgrade(&registry),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.len()
    }

    /// Borrows the current state for the duration of `f`.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        self.inner.state.borrow().clone()
    }
}
