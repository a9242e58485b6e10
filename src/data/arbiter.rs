//! Gesture arbitration between widgets sharing one plot.
//!
//! A [`GestureArbiter`] is the interaction lock: while one widget owns it
//! (e.g. a lasso being drawn), other widgets must not react to pointer input.
//! Every widget receives a clone of the same arbiter at construction and
//! identifies itself with the [`OwnerId`] it got from [`GestureArbiter::register`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Identity of a widget competing for pointer gestures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct ArbiterState {
    owner: Cell<Option<OwnerId>>,
    next_id: Cell<u64>,
}

/// Shared, single-threaded interaction lock. Clones refer to the same lock.
#[derive(Clone, Debug, Default)]
pub struct GestureArbiter {
    state: Rc<ArbiterState>,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh owner identity.
    pub fn register(&self) -> OwnerId {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        OwnerId(id)
    }

    /// Take the lock for `owner`.
    ///
    /// Succeeds when the lock is free or already held by `owner`. When another
    /// owner holds it, nothing changes and `false` is returned.
    pub fn try_acquire(&self, owner: OwnerId) -> bool {
        match self.state.owner.get() {
            None => {
                self.state.owner.set(Some(owner));
                log::debug!("gesture lock acquired by {owner}");
                true
            }
            Some(current) if current == owner => true,
            Some(current) => {
                log::debug!("gesture lock held by {current}, {owner} rejected");
                false
            }
        }
    }

    /// Free the lock if `owner` holds it. Returns whether it was released.
    pub fn release(&self, owner: OwnerId) -> bool {
        if self.state.owner.get() == Some(owner) {
            self.state.owner.set(None);
            log::debug!("gesture lock released by {owner}");
            true
        } else {
            false
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.owner.get().is_some()
    }

    pub fn owner(&self) -> Option<OwnerId> {
        self.state.owner.get()
    }

    pub fn is_held_by(&self, owner: OwnerId) -> bool {
        self.state.owner.get() == Some(owner)
    }

    /// True if the lock is free or held by `owner`.
    pub fn is_available_to(&self, owner: OwnerId) -> bool {
        match self.state.owner.get() {
            None => true,
            Some(current) => current == owner,
        }
    }
}
