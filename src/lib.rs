//! # bleshare
//!
//! **bleshare** lets a library component observe the delegate callbacks of
//! a BLE host API without displacing the application's own delegate.
//!
//! Host APIs in this family give every role object exactly one writable
//! delegate reference — one delegate per central manager, one per
//! peripheral. A library that needs those callbacks (a firmware updater,
//! a logger) would normally have to steal the reference. bleshare
//! interposes a fan-out proxy in the slot instead: the proxy takes the
//! registration over, remembers the displaced delegate, and forwards every
//! callback to both parties.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  application            host backend                 library
//!      │                       │                          │
//!      │ set_delegate          │                          │ link
//!      ▼                       ▼                          ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  DelegateSlot<D>   (one writable delegate reference per role)   │
//! │    occupant: Vacant │ Delegate(app) │ Proxy ──────────┐         │
//! └───────────────────────────────────────────────────────┼─────────┘
//!                                                         ▼
//!                                              ┌────────────────────┐
//!                                              │  FanoutProxy<D>    │
//!                                              │  original ──► app  │
//!                                              │  receiver ──► lib  │
//!                                              └────────────────────┘
//!
//!  host backend: slot.dispatch(cb) ──► original first, then receiver
//! ```
//!
//! ### Lifecycle
//! ```text
//! receiver.link(slot)
//!   ├─ slot already holds a proxy ──► join it (receiver replaced)
//!   ├─ receiver caches a proxy    ──► reuse it
//!   └─ otherwise                  ──► create one
//!         └─ attach: capture displaced delegate as `original`,
//!                    register proxy into slot
//!
//! receiver.unlink(slot)
//!   └─ detach: restore `original` into the slot (by identity),
//!              clear the back-reference, proxy becomes inert
//! ```
//!
//! The same generic implementation is instantiated twice, matching the
//! two single-slot roles the host defines: [`central`] and
//! [`peripheral`].
//!
//! ## Threading
//! Registration and callback delivery share one thread — the platform
//! convention this crate is built for. All bookkeeping uses `Rc` and
//! interior mutability, so every type here is neither `Send` nor `Sync`
//! and cross-thread use is rejected at compile time rather than left
//! undefined. No operation blocks or suspends.
//!
//! ## Ownership
//! Every link is non-owning: the application owns its delegate, the
//! caller owns its receiver, and the slot owns the proxy while it is
//! registered. Dropping any party never leaks the others; a proxy
//! released without a detach clears its receiver's back-reference on the
//! way out.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use bleshare::{CentralDelegate, CentralProxyRef, CentralSlot, ManagerState, Receiver};
//!
//! // The application's own delegate.
//! struct App;
//!
//! impl CentralDelegate for App {
//!     fn did_update_state(&self, state: ManagerState) {
//!         println!("app: powered = {}", state.is_powered_on());
//!     }
//! }
//!
//! // A library observer that wants the same callbacks.
//! struct Updater {
//!     proxy: CentralProxyRef,
//! }
//!
//! impl CentralDelegate for Updater {
//!     fn did_update_state(&self, _state: ManagerState) {
//!         // drive the update state machine...
//!     }
//! }
//!
//! impl Receiver<dyn CentralDelegate> for Updater {
//!     fn proxy_ref(&self) -> &CentralProxyRef {
//!         &self.proxy
//!     }
//!
//!     fn as_delegate(self: Rc<Self>) -> Rc<dyn CentralDelegate> {
//!         self
//!     }
//! }
//!
//! // The host backend owns the slot; the application registers first.
//! let slot = CentralSlot::new();
//! let app: Rc<dyn CentralDelegate> = Rc::new(App);
//! slot.set_delegate(&app);
//!
//! // The library joins in without displacing the application...
//! let updater = Rc::new(Updater { proxy: CentralProxyRef::new() });
//! Rc::clone(&updater).link(&slot);
//!
//! // ...both hear every callback the backend dispatches...
//! slot.dispatch(|d| d.did_update_state(ManagerState::PoweredOn));
//!
//! // ...and leaving restores the application's registration exactly.
//! Rc::clone(&updater).unlink(&slot);
//! assert!(slot.delegate().is_some());
//! ```

mod common;
mod proxy;

pub mod central;
pub mod peripheral;

// ---- Public re-exports ----

pub use central::{CentralDelegate, CentralProxy, CentralProxyRef, CentralReceiver, CentralSlot};
pub use common::{
    AdvertisementData, BleError, CharacteristicId, DescriptorId, ManagerState, PeripheralId,
    RestorationInfo, ServiceId,
};
pub use peripheral::{
    PeripheralDelegate, PeripheralProxy, PeripheralProxyRef, PeripheralReceiver, PeripheralSlot,
};
pub use proxy::{DelegateSlot, FanoutProxy, ProxyRef, Receiver};
