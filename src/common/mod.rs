//! # Callback payload types shared by both delegate roles.
//!
//! These are plain data carriers for the arguments the host API hands to
//! delegate callbacks. They hold no protocol state and perform no I/O.

mod advertisement;
mod error;
mod ids;
mod state;

pub use advertisement::AdvertisementData;
pub use error::BleError;
pub use ids::{CharacteristicId, DescriptorId, PeripheralId, ServiceId};
pub use state::{ManagerState, RestorationInfo};
