//! # The central-manager role.
//!
//! First of the two instantiations of the generic fan-out: the delegate
//! slot of a BLE central manager. The host backend embeds a
//! [`CentralSlot`]; the application registers a [`CentralDelegate`]; a
//! library component adopts [`CentralReceiver`] to observe the same
//! callbacks without displacing the application.

mod delegate;

pub use delegate::CentralDelegate;

use crate::proxy::{DelegateSlot, FanoutProxy, ProxyRef, Receiver};

/// Delegate slot of a central manager.
pub type CentralSlot = DelegateSlot<dyn CentralDelegate>;

/// Fan-out proxy for a central slot.
pub type CentralProxy = FanoutProxy<dyn CentralDelegate>;

/// Back-reference storage for a central receiver.
pub type CentralProxyRef = ProxyRef<dyn CentralDelegate>;

/// A central delegate that can link into an occupied central slot.
///
/// Blanket-implemented for every type carrying both halves.
pub trait CentralReceiver: CentralDelegate + Receiver<dyn CentralDelegate> {}

impl<T> CentralReceiver for T where T: CentralDelegate + Receiver<dyn CentralDelegate> {}
