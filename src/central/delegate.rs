//! Central-manager delegate callbacks.

use crate::common::{AdvertisementData, BleError, ManagerState, PeripheralId, RestorationInfo};

/// Callbacks a central manager delivers to its delegate.
///
/// This is the fixed enumeration the host defines; the fan-out forwards
/// each one verbatim and nothing here returns a value. `did_update_state`
/// is the only required method — the platform makes the rest optional, so
/// they default to no-ops here.
#[allow(unused_variables)]
pub trait CentralDelegate: 'static {
    /// The radio's power or authorization state changed.
    fn did_update_state(&self, state: ManagerState);

    /// The host is restoring a session that outlived the process.
    fn will_restore_state(&self, restoration: &RestorationInfo) {}

    /// A scan found an advertising peripheral.
    fn did_discover(
        &self,
        peripheral: PeripheralId,
        advertisement: &AdvertisementData,
        rssi: i16,
    ) {
    }

    /// A connection to a peripheral was established.
    fn did_connect(&self, peripheral: PeripheralId) {}

    /// A connection attempt failed.
    fn did_fail_to_connect(&self, peripheral: PeripheralId, error: Option<&BleError>) {}

    /// A connection was torn down, cleanly or otherwise.
    fn did_disconnect(&self, peripheral: PeripheralId, error: Option<&BleError>) {}
}
