//! Advertisement payload delivered with `did_discover`.

use crate::common::ids::ServiceId;

/// Data sections of a received advertisement, already parsed by the host.
///
/// Constructed by the host backend with the `with_*` builders; delegates
/// only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertisementData {
    local_name: Option<String>,
    service_uuids: Vec<ServiceId>,
    manufacturer_data: Option<Vec<u8>>,
    tx_power: Option<i8>,
}

impl AdvertisementData {
    /// An advertisement with no data sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the advertised local name.
    pub fn with_local_name(mut self, name: impl Into<String>) -> Self {
        self.local_name = Some(name.into());
        self
    }

    /// Attaches the advertised service UUIDs.
    pub fn with_service_uuids(mut self, services: impl IntoIterator<Item = ServiceId>) -> Self {
        self.service_uuids = services.into_iter().collect();
        self
    }

    /// Attaches a manufacturer-specific data section.
    pub fn with_manufacturer_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.manufacturer_data = Some(data.into());
        self
    }

    /// Attaches the advertised TX power level, in dBm.
    pub fn with_tx_power(mut self, dbm: i8) -> Self {
        self.tx_power = Some(dbm);
        self
    }

    /// The advertised local name, if present.
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    /// The advertised service UUIDs.
    pub fn service_uuids(&self) -> &[ServiceId] {
        &self.service_uuids
    }

    /// The manufacturer-specific data section, if present.
    pub fn manufacturer_data(&self) -> Option<&[u8]> {
        self.manufacturer_data.as_deref()
    }

    /// The advertised TX power in dBm, if present.
    pub fn tx_power(&self) -> Option<i8> {
        self.tx_power
    }
}
