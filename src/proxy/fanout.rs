//! # Two-recipient callback fan-out.
//!
//! [`FanoutProxy`] takes over a [`DelegateSlot`] and forwards every
//! callback the host delivers to two observers: the delegate that occupied
//! the slot before the takeover (the *original*) and the receiver that
//! requested it.
//!
//! ## Architecture
//! ```text
//! host backend ──► slot.dispatch(cb) ──► FanoutProxy
//!                                            ├──► original (app delegate)
//!                                            └──► receiver (library observer)
//! ```
//!
//! ## Rules
//! - Forwarding order is **original first, then receiver**. This is a
//!   contract, pinned by tests, not an accident of implementation.
//! - Every reference the proxy holds is non-owning. The slot owns the
//!   proxy; the application owns its delegate; the caller owns the
//!   receiver. Dropping any of them never leaks the others.
//! - Dispatch resolves both targets before invoking either, so a callback
//!   may re-enter attach/detach without tripping over a live borrow.
//! - [`FanoutProxy::attach`] is idempotent; [`FanoutProxy::detach`] is a
//!   silent no-op when some other party has since taken the slot.

use std::cell::RefCell;
use std::ptr;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::proxy::receiver::{BackrefCell, Receiver};
use crate::proxy::slot::{DelegateSlot, Occupant};

/// Fan-out proxy occupying a delegate slot on behalf of a receiver.
///
/// Created by [`Receiver::link`] in normal use; constructing one directly
/// is only needed when driving the attach/detach cycle by hand.
pub struct FanoutProxy<D: ?Sized> {
    /// Handle to this proxy's own allocation, handed out to the slot and
    /// the receiver's back-reference.
    weak_self: Weak<FanoutProxy<D>>,
    /// The slot's occupant at first registration, restored on detach.
    original: RefCell<Option<Weak<D>>>,
    /// The currently attached receiver.
    receiver: RefCell<Option<ReceiverEntry<D>>>,
}

/// The two non-owning halves of an attached receiver: the delegate view
/// used for dispatch, and the back-reference cell cleared on detach.
struct ReceiverEntry<D: ?Sized> {
    delegate: Weak<D>,
    backref: Weak<BackrefCell<D>>,
}

impl<D: ?Sized> FanoutProxy<D> {
    /// A fresh proxy, not yet registered anywhere.
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            weak_self: weak.clone(),
            original: RefCell::new(None),
            receiver: RefCell::new(None),
        })
    }

    /// Attaches `receiver` and registers this proxy into `slot`.
    ///
    /// The slot's current occupant is captured as the *original* recipient
    /// only on first registration; re-attaching (same or different
    /// receiver) while already registered leaves the captured original
    /// untouched. Attaching the same receiver twice is a no-op for
    /// observable state.
    ///
    /// # Panics
    /// If a *different* proxy already occupies the slot. One proxy per
    /// slot is a correctness invariant; hitting this means
    /// [`Receiver::link`] was bypassed somewhere.
    pub fn attach<R>(&self, receiver: &Rc<R>, slot: &DelegateSlot<D>)
    where
        R: Receiver<D>,
    {
        // A previously attached receiver still pointing here is stale now.
        self.clear_stale_backref();

        debug!("proxy: receiver attached");
        *self.receiver.borrow_mut() = Some(ReceiverEntry {
            delegate: Rc::downgrade(&Rc::clone(receiver).as_delegate()),
            backref: Rc::downgrade(receiver.proxy_ref().cell()),
        });
        receiver.proxy_ref().set(self.weak_self.clone());

        self.register(slot);
    }

    /// Vacates `slot`, restoring its pre-takeover occupant.
    ///
    /// Requires the slot to still be held by this proxy or to be vacant;
    /// any other occupant means a later party legitimately owns the slot,
    /// and the call leaves everything untouched. On success the original
    /// delegate is restored (by identity), the receiver's back-reference
    /// is cleared, and the proxy becomes inert.
    pub fn detach(&self, slot: &DelegateSlot<D>) {
        {
            let mut occupant = slot.occupant.borrow_mut();
            let owned_here = match &*occupant {
                Occupant::Proxy(current) => ptr::eq(Rc::as_ptr(current), self as *const Self),
                Occupant::Delegate(weak) => weak.strong_count() == 0,
                Occupant::Vacant => true,
            };
            if !owned_here {
                trace!("proxy: detach skipped, slot is owned elsewhere");
                return;
            }

            debug!("proxy: detached, restoring original delegate");
            *occupant = match self.original.borrow_mut().take() {
                Some(original) => Occupant::Delegate(original),
                None => Occupant::Vacant,
            };
        }
        self.release_receiver();
    }

    /// Forwards one callback to the original, then to the receiver,
    /// skipping whichever is absent or already dropped.
    pub fn dispatch(&self, mut f: impl FnMut(&D)) {
        for target in self.targets() {
            f(&target);
        }
    }

    /// The live recipients, in forwarding order.
    fn targets(&self) -> Vec<Rc<D>> {
        let original = self.original.borrow().as_ref().and_then(Weak::upgrade);
        let receiver = self
            .receiver
            .borrow()
            .as_ref()
            .and_then(|entry| entry.delegate.upgrade());
        original.into_iter().chain(receiver).collect()
    }

    /// Registers this proxy into the slot, capturing the displaced
    /// occupant as the original on first registration.
    fn register(&self, slot: &DelegateSlot<D>) {
        let mut occupant = slot.occupant.borrow_mut();
        match &*occupant {
            Occupant::Proxy(current) if ptr::eq(Rc::as_ptr(current), self as *const Self) => {
                // Already routed through this proxy; keep the captured original.
                return;
            }
            Occupant::Proxy(_) => {
                panic!("a different fan-out proxy already occupies this delegate slot");
            }
            Occupant::Delegate(existing) => {
                *self.original.borrow_mut() = Some(existing.clone());
            }
            Occupant::Vacant => {
                *self.original.borrow_mut() = None;
            }
        }
        debug!("proxy: registered into slot");
        let this = self
            .weak_self
            .upgrade()
            .expect("proxy must be alive while registering");
        *occupant = Occupant::Proxy(this);
    }

    /// Clears the attached receiver's back-reference if it still points at
    /// this proxy, then forgets the receiver.
    fn release_receiver(&self) {
        if let Some(entry) = self.receiver.borrow_mut().take() {
            if let Some(cell) = entry.backref.upgrade() {
                let points_here = cell
                    .borrow()
                    .as_ref()
                    .is_some_and(|weak| ptr::eq(weak.as_ptr(), self as *const Self));
                if points_here {
                    *cell.borrow_mut() = None;
                }
            }
        }
    }

    /// Drops any previously recorded receiver's back-reference to this
    /// proxy before a replacement is attached.
    fn clear_stale_backref(&self) {
        let stale_cell = self
            .receiver
            .borrow()
            .as_ref()
            .and_then(|entry| entry.backref.upgrade());
        if let Some(cell) = stale_cell {
            let points_here = cell
                .borrow()
                .as_ref()
                .is_some_and(|weak| ptr::eq(weak.as_ptr(), self as *const Self));
            if points_here {
                *cell.borrow_mut() = None;
            }
        }
    }

    /// True when `cell` is the back-reference cell of the attached receiver.
    pub(super) fn is_receiver_cell(&self, cell: &Rc<BackrefCell<D>>) -> bool {
        self.receiver
            .borrow()
            .as_ref()
            .is_some_and(|entry| ptr::eq(entry.backref.as_ptr(), Rc::as_ptr(cell)))
    }

    /// The delegate captured at takeover, if one existed and is still
    /// alive. This is what [`FanoutProxy::detach`] restores.
    pub fn original(&self) -> Option<Rc<D>> {
        self.original.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// True while a receiver is attached.
    pub fn has_receiver(&self) -> bool {
        self.receiver.borrow().is_some()
    }
}

impl<D: ?Sized> Drop for FanoutProxy<D> {
    /// The slot can drop its proxy without a detach (occupant overwritten
    /// directly, or the slot's owner discarded). The receiver's
    /// back-reference must not outlive the proxy it names.
    fn drop(&mut self) {
        trace!("proxy: released");
        self.release_receiver();
    }
}
