//! Identifier newtypes for the objects named in delegate callbacks.
//!
//! The host API identifies peripherals and GATT objects by UUID. Wrapping
//! each in its own newtype keeps a service id from being passed where a
//! characteristic id is expected.

use std::fmt;

use uuid::Uuid;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing UUID.
            pub const fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generates a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying UUID.
            pub const fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_type! {
    /// Identifies a remote peripheral.
    PeripheralId
}

id_type! {
    /// Identifies a GATT service.
    ServiceId
}

id_type! {
    /// Identifies a GATT characteristic.
    CharacteristicId
}

id_type! {
    /// Identifies a GATT descriptor.
    DescriptorId
}
