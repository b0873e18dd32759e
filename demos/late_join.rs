//! # Late Join Demo
//!
//! What happens on a slot with no application delegate: the first
//! receiver creates the proxy, a second receiver replaces the first on
//! the same proxy, and unlinking returns the slot to vacant.
//!
//! ## Run
//! ```bash
//! cargo run --example late_join
//! ```

use std::rc::Rc;

use bleshare::{BleError, CharacteristicId, PeripheralDelegate, PeripheralProxyRef, PeripheralSlot, Receiver};

struct Listener {
    name: &'static str,
    proxy: PeripheralProxyRef,
}

impl Listener {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            proxy: PeripheralProxyRef::new(),
        })
    }
}

impl PeripheralDelegate for Listener {
    fn did_update_characteristic_value(
        &self,
        characteristic: CharacteristicId,
        value: &[u8],
        _error: Option<&BleError>,
    ) {
        println!("{} ─► {characteristic}: {value:02x?}", self.name);
    }
}

impl Receiver<dyn PeripheralDelegate> for Listener {
    fn proxy_ref(&self) -> &PeripheralProxyRef {
        &self.proxy
    }

    fn as_delegate(self: Rc<Self>) -> Rc<dyn PeripheralDelegate> {
        self
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bleshare=trace")),
        )
        .init();

    let slot = PeripheralSlot::new();
    let notify_source = CharacteristicId::random();

    println!("-- first listener links into the vacant slot --");
    let first = Listener::new("first ");
    Rc::clone(&first).link(&slot);
    slot.dispatch(|d| d.did_update_characteristic_value(notify_source, &[0x10, 0x01], None));

    println!("-- second listener joins, replacing the first --");
    let second = Listener::new("second");
    Rc::clone(&second).link(&slot);
    slot.dispatch(|d| d.did_update_characteristic_value(notify_source, &[0x10, 0x02], None));

    println!("-- second listener unlinks; the slot is vacant again --");
    Rc::clone(&second).unlink(&slot);
    slot.dispatch(|d| d.did_update_characteristic_value(notify_source, &[0x10, 0x03], None));
    println!("slot vacant: {}", slot.is_vacant());
}
