//! # The receiver capability.
//!
//! [`Receiver`] is the extension point for an object that wants to observe
//! a delegate slot without displacing the delegate already registered in
//! it. Implementors supply two things: storage for one proxy
//! back-reference ([`ProxyRef`], usually a field) and the coercion from
//! themselves to the role's delegate object. Everything else — proxy
//! creation, reuse, takeover, and release — comes with the trait.
//!
//! ## Contract
//! - One back-reference per receiver: a receiver observes at most one slot
//!   at a time through the capability.
//! - A receiver must never be registered *directly* into a slot it also
//!   observes through a proxy. That is a programming error and
//!   [`Receiver::unlink`] fails fast on it.
//! - The capability never owns the receiver; callers keep their receiver
//!   alive for as long as they want callbacks.
//!
//! ## Example (skeleton)
//! ```rust,ignore
//! struct UpdateObserver {
//!     proxy: ProxyRef<dyn CentralDelegate>,
//! }
//!
//! impl CentralDelegate for UpdateObserver { /* callbacks */ }
//!
//! impl Receiver<dyn CentralDelegate> for UpdateObserver {
//!     fn proxy_ref(&self) -> &ProxyRef<dyn CentralDelegate> { &self.proxy }
//!     fn as_delegate(self: Rc<Self>) -> Rc<dyn CentralDelegate> { self }
//! }
//! ```

use std::cell::RefCell;
use std::ptr;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::proxy::fanout::FanoutProxy;
use crate::proxy::slot::DelegateSlot;

/// Interior of a [`ProxyRef`]: the cell the proxy clears on detach.
pub(super) type BackrefCell<D> = RefCell<Option<Weak<FanoutProxy<D>>>>;

/// Non-owning back-reference from a receiver to the proxy representing it.
///
/// Embed one per receiver. The cell is written only by the crate (attach
/// sets it, detach and proxy release clear it), which is what keeps the
/// receiver/proxy link symmetric; user code can inspect it but not forge
/// it.
pub struct ProxyRef<D: ?Sized> {
    cell: Rc<BackrefCell<D>>,
}

impl<D: ?Sized> ProxyRef<D> {
    /// An unlinked back-reference.
    pub fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// The proxy this receiver is currently linked to, if it is still alive.
    pub fn get(&self) -> Option<Rc<FanoutProxy<D>>> {
        self.cell.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// True while linked to a live proxy.
    pub fn is_linked(&self) -> bool {
        self.get().is_some()
    }

    /// True when this back-reference names exactly `proxy`.
    pub(crate) fn is(&self, proxy: &Rc<FanoutProxy<D>>) -> bool {
        self.cell
            .borrow()
            .as_ref()
            .is_some_and(|weak| ptr::eq(weak.as_ptr(), Rc::as_ptr(proxy)))
    }

    pub(crate) fn set(&self, proxy: Weak<FanoutProxy<D>>) {
        *self.cell.borrow_mut() = Some(proxy);
    }

    pub(crate) fn clear(&self) {
        *self.cell.borrow_mut() = None;
    }

    /// Identity handle used by the proxy to recognize its receiver.
    pub(super) fn cell(&self) -> &Rc<BackrefCell<D>> {
        &self.cell
    }
}

impl<D: ?Sized> Default for ProxyRef<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability for observing a delegate slot through a fan-out proxy.
///
/// `D` is the role's delegate trait object; implementors are expected to
/// implement that trait as well, and return themselves from
/// [`Receiver::as_delegate`].
pub trait Receiver<D: ?Sized>: 'static {
    /// The back-reference storage, normally a field of the implementor.
    fn proxy_ref(&self) -> &ProxyRef<D>;

    /// Coerces this receiver to the delegate object callbacks are
    /// delivered to. Implementations must return `self`.
    fn as_delegate(self: Rc<Self>) -> Rc<D>;

    /// Starts observing `slot` alongside its current delegate.
    ///
    /// Reuses, in order: the proxy already occupying the slot, the proxy
    /// cached in this receiver's back-reference, or a freshly created one.
    /// The ordering is what guarantees a slot never accumulates a second
    /// proxy and that a late-joining receiver chains onto the existing one
    /// instead of displacing it.
    fn link(self: Rc<Self>, slot: &DelegateSlot<D>)
    where
        Self: Sized,
    {
        if let Some(proxy) = slot.proxy() {
            trace!("receiver: joining proxy already in slot");
            proxy.attach(&self, slot);
        } else if let Some(proxy) = self.proxy_ref().get() {
            trace!("receiver: reusing cached proxy");
            proxy.attach(&self, slot);
        } else {
            trace!("receiver: creating proxy");
            let proxy = FanoutProxy::new();
            proxy.attach(&self, slot);
        }
    }

    /// Stops observing `slot`, restoring its pre-takeover delegate.
    ///
    /// Silently does nothing when the slot is not held by this receiver's
    /// proxy — someone else owns it now and must not be disturbed.
    ///
    /// # Panics
    /// If this receiver is registered **directly** in the slot, bypassing
    /// the proxy. That breaks the single-proxy discipline and indicates a
    /// defect in the calling code, so it fails fast rather than degrading.
    fn unlink(self: Rc<Self>, slot: &DelegateSlot<D>)
    where
        Self: Sized,
    {
        if let Some(current) = slot.delegate() {
            let this = Rc::clone(&self).as_delegate();
            assert!(
                !ptr::eq(Rc::as_ptr(&current).cast::<u8>(), Rc::as_ptr(&this).cast::<u8>()),
                "receiver is registered directly in the delegate slot"
            );
        }

        let Some(proxy) = slot.proxy() else {
            trace!("receiver: unlink skipped, no proxy in slot");
            return;
        };
        if !proxy.is_receiver_cell(self.proxy_ref().cell()) {
            trace!("receiver: unlink skipped, proxy belongs to another receiver");
            return;
        }

        proxy.detach(slot);
        if self.proxy_ref().is(&proxy) {
            self.proxy_ref().clear();
        }
        assert!(
            self.proxy_ref().get().is_none(),
            "proxy still set on receiver after unlink"
        );
    }
}
