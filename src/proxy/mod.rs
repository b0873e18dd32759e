//! # Generic single-slot fan-out.
//!
//! One implementation of the takeover/fan-out/release pattern,
//! parameterized over the role's delegate trait object. The two role
//! modules ([`crate::central`], [`crate::peripheral`]) are thin
//! instantiations of the types here.
//!
//! - [`DelegateSlot`] — the host's single writable delegate reference;
//! - [`FanoutProxy`] — occupies a slot and forwards each callback to the
//!   displaced original and the attached receiver, in that order;
//! - [`Receiver`] / [`ProxyRef`] — the capability an observer adopts to
//!   link into and out of a slot safely.

mod fanout;
mod receiver;
mod slot;

pub use fanout::FanoutProxy;
pub use receiver::{ProxyRef, Receiver};
pub use slot::DelegateSlot;
