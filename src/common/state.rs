//! Radio state and state-restoration payloads.

use crate::common::ids::{PeripheralId, ServiceId};

/// Power and authorization state of the host radio, as reported through
/// `did_update_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    /// State not yet known; the host has not finished initializing.
    Unknown,
    /// The radio is resetting after a fault.
    Resetting,
    /// The platform does not support BLE on this hardware.
    Unsupported,
    /// The application is not authorized to use the radio.
    Unauthorized,
    /// The radio is off.
    PoweredOff,
    /// The radio is on and ready.
    PoweredOn,
}

impl ManagerState {
    /// True only for [`ManagerState::PoweredOn`].
    pub fn is_powered_on(&self) -> bool {
        matches!(self, ManagerState::PoweredOn)
    }
}

/// Session state the host hands back through `will_restore_state` when the
/// process is relaunched into an ongoing Bluetooth session.
#[derive(Debug, Clone, Default)]
pub struct RestorationInfo {
    /// Peripherals the host is restoring connections to.
    pub peripherals: Vec<PeripheralId>,
    /// Services a restored scan was filtering on.
    pub scan_services: Vec<ServiceId>,
}
