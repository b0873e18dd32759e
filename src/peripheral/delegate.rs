//! Peripheral delegate callbacks.

use crate::common::{BleError, CharacteristicId, DescriptorId, ServiceId};

/// Callbacks a connected peripheral delivers to its delegate.
///
/// The platform makes every method on this enumeration optional, so each
/// defaults to a no-op; implement only what you observe. All callbacks
/// are notifications — none returns a value — which is what makes the
/// fan-out a pure broadcast.
#[allow(unused_variables)]
pub trait PeripheralDelegate: 'static {
    /// The peripheral changed its advertised name.
    fn did_update_name(&self, name: &str) {}

    /// Services were added, removed, or invalidated.
    fn did_modify_services(&self, invalidated: &[ServiceId]) {}

    /// An RSSI read completed.
    fn did_read_rssi(&self, rssi: i16, error: Option<&BleError>) {}

    /// Service discovery completed.
    fn did_discover_services(&self, error: Option<&BleError>) {}

    /// Included-service discovery completed for `service`.
    fn did_discover_included_services(&self, service: ServiceId, error: Option<&BleError>) {}

    /// Characteristic discovery completed for `service`.
    fn did_discover_characteristics(&self, service: ServiceId, error: Option<&BleError>) {}

    /// A characteristic reported a new value, from a read or a
    /// notification.
    fn did_update_characteristic_value(
        &self,
        characteristic: CharacteristicId,
        value: &[u8],
        error: Option<&BleError>,
    ) {
    }

    /// A characteristic write completed.
    fn did_write_characteristic_value(
        &self,
        characteristic: CharacteristicId,
        error: Option<&BleError>,
    ) {
    }

    /// Notifications or indications were enabled or disabled.
    fn did_update_notification_state(
        &self,
        characteristic: CharacteristicId,
        notifying: bool,
        error: Option<&BleError>,
    ) {
    }

    /// Descriptor discovery completed for `characteristic`.
    fn did_discover_descriptors(&self, characteristic: CharacteristicId, error: Option<&BleError>) {
    }

    /// A descriptor reported a new value.
    fn did_update_descriptor_value(
        &self,
        descriptor: DescriptorId,
        value: &[u8],
        error: Option<&BleError>,
    ) {
    }

    /// A descriptor write completed.
    fn did_write_descriptor_value(&self, descriptor: DescriptorId, error: Option<&BleError>) {}

    /// The peripheral can accept another write without response.
    fn is_ready_to_send_write_without_response(&self) {}

    /// An L2CAP channel opened on `psm`, or failed to.
    fn did_open_l2cap_channel(&self, psm: u16, error: Option<&BleError>) {}
}
