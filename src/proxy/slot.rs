//! # The host's single delegate registration point.
//!
//! [`DelegateSlot`] models the one writable delegate reference a host role
//! object (central manager or peripheral) exposes. The host backend embeds
//! a slot, the application registers its delegate into it, and the backend
//! calls [`DelegateSlot::dispatch`] once per platform callback.
//!
//! ## Occupant record
//! The occupant is a tagged record rather than a bare object reference, so
//! "is the current occupant our proxy" is a discriminant check instead of
//! runtime type inspection:
//!
//! ```text
//! Vacant                     nothing registered
//! Delegate(Weak<D>)          an external observer, held non-owning
//! Proxy(Rc<FanoutProxy<D>>)  the fan-out proxy; the slot owns it
//! ```
//!
//! ## Rules
//! - The slot never owns an external delegate; the application keeps its
//!   delegate alive, exactly as platform delegate properties are weak.
//! - The slot is the owner of a registered proxy. Overwriting or clearing
//!   the occupant releases the proxy, which detaches itself from its
//!   receiver on drop.
//! - At most one proxy occupies a slot at a time.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::proxy::fanout::FanoutProxy;

/// A host role object's delegate reference.
///
/// `D` is the delegate trait object for the role, e.g.
/// `dyn CentralDelegate`. The slot and everything registered in it live on
/// one thread: the type is neither `Send` nor `Sync`, which is the
/// single-writer discipline the fan-out relies on, enforced by the
/// compiler.
pub struct DelegateSlot<D: ?Sized> {
    pub(super) occupant: RefCell<Occupant<D>>,
}

pub(super) enum Occupant<D: ?Sized> {
    Vacant,
    Delegate(Weak<D>),
    Proxy(Rc<FanoutProxy<D>>),
}

impl<D: ?Sized> DelegateSlot<D> {
    /// Creates a vacant slot.
    pub fn new() -> Self {
        Self {
            occupant: RefCell::new(Occupant::Vacant),
        }
    }

    /// Registers an external delegate, displacing any current occupant.
    ///
    /// The slot keeps a non-owning reference; the caller remains
    /// responsible for keeping the delegate alive. If a proxy occupied the
    /// slot it is released here, which clears its receiver's back-reference.
    pub fn set_delegate(&self, delegate: &Rc<D>) {
        trace!("slot: external delegate registered");
        *self.occupant.borrow_mut() = Occupant::Delegate(Rc::downgrade(delegate));
    }

    /// Empties the slot, releasing a registered proxy if one was present.
    pub fn clear_delegate(&self) {
        trace!("slot: cleared");
        *self.occupant.borrow_mut() = Occupant::Vacant;
    }

    /// The registered external delegate, if the occupant is one and it is
    /// still alive. Returns `None` while a proxy occupies the slot.
    pub fn delegate(&self) -> Option<Rc<D>> {
        match &*self.occupant.borrow() {
            Occupant::Delegate(weak) => weak.upgrade(),
            _ => None,
        }
    }

    /// The registered proxy, if the occupant is one.
    pub fn proxy(&self) -> Option<Rc<FanoutProxy<D>>> {
        match &*self.occupant.borrow() {
            Occupant::Proxy(proxy) => Some(Rc::clone(proxy)),
            _ => None,
        }
    }

    /// True when nothing will observe a dispatched callback registration:
    /// the slot is empty or its external delegate has been dropped.
    pub fn is_vacant(&self) -> bool {
        match &*self.occupant.borrow() {
            Occupant::Vacant => true,
            Occupant::Delegate(weak) => weak.strong_count() == 0,
            Occupant::Proxy(_) => false,
        }
    }

    /// Delivers one callback to the current occupant.
    ///
    /// The host backend calls this once per platform event, handing it a
    /// closure that invokes the matching delegate method. A direct
    /// occupant receives the call once; a proxy fans it out. The occupant
    /// is resolved before the closure runs, so a callback may re-enter the
    /// slot (link or unlink) safely.
    pub fn dispatch(&self, f: impl FnMut(&D)) {
        enum Route<D: ?Sized> {
            Skip,
            Direct(Rc<D>),
            Fanned(Rc<FanoutProxy<D>>),
        }

        let route = match &*self.occupant.borrow() {
            Occupant::Vacant => Route::Skip,
            Occupant::Delegate(weak) => weak.upgrade().map_or(Route::Skip, Route::Direct),
            Occupant::Proxy(proxy) => Route::Fanned(Rc::clone(proxy)),
        };

        let mut f = f;
        match route {
            Route::Skip => {}
            Route::Direct(delegate) => f(&delegate),
            Route::Fanned(proxy) => proxy.dispatch(f),
        }
    }
}

impl<D: ?Sized> Default for DelegateSlot<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    trait Ping: 'static {
        fn ping(&self);
    }

    struct Counter {
        hits: Cell<u32>,
    }

    impl Counter {
        fn new() -> Rc<Self> {
            Rc::new(Self { hits: Cell::new(0) })
        }
    }

    impl Ping for Counter {
        fn ping(&self) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    #[test]
    fn test_new_slot_is_vacant() {
        let slot: DelegateSlot<dyn Ping> = DelegateSlot::new();
        assert!(slot.is_vacant());
        assert!(slot.delegate().is_none());
        assert!(slot.proxy().is_none());
    }

    #[test]
    fn test_dispatch_reaches_registered_delegate() {
        let slot: DelegateSlot<dyn Ping> = DelegateSlot::new();
        let counter = Counter::new();
        let delegate: Rc<dyn Ping> = counter.clone();
        slot.set_delegate(&delegate);

        slot.dispatch(|d| d.ping());
        slot.dispatch(|d| d.ping());
        assert_eq!(counter.hits.get(), 2);
    }

    #[test]
    fn test_dispatch_on_vacant_slot_is_noop() {
        let slot: DelegateSlot<dyn Ping> = DelegateSlot::new();
        slot.dispatch(|d| d.ping());
    }

    #[test]
    fn test_dropped_delegate_makes_slot_vacant() {
        let slot: DelegateSlot<dyn Ping> = DelegateSlot::new();
        {
            let counter = Counter::new();
            let delegate: Rc<dyn Ping> = counter;
            slot.set_delegate(&delegate);
            assert!(!slot.is_vacant());
        }
        assert!(slot.is_vacant(), "dead weak occupant should read as vacant");
        slot.dispatch(|d| d.ping());
    }

    #[test]
    fn test_clear_delegate_empties_slot() {
        let slot: DelegateSlot<dyn Ping> = DelegateSlot::new();
        let counter = Counter::new();
        let delegate: Rc<dyn Ping> = counter.clone();
        slot.set_delegate(&delegate);

        slot.clear_delegate();
        assert!(slot.is_vacant());
        slot.dispatch(|d| d.ping());
        assert_eq!(counter.hits.get(), 0);
    }
}
