//! # Shared Central Slot Demo
//!
//! An application delegate and a firmware-update observer share one
//! central-manager delegate slot. The "host backend" here is a handful of
//! dispatch calls standing in for the platform.
//!
//! ## Run
//! ```bash
//! cargo run --example shared_central
//! ```

use std::rc::Rc;

use bleshare::{
    AdvertisementData, BleError, CentralDelegate, CentralProxyRef, CentralSlot, ManagerState,
    PeripheralId, Receiver,
};

/// What the application registered before the library showed up.
struct AppDelegate;

impl CentralDelegate for AppDelegate {
    fn did_update_state(&self, state: ManagerState) {
        println!("app      ├─► state: powered = {}", state.is_powered_on());
    }

    fn did_discover(&self, peripheral: PeripheralId, adv: &AdvertisementData, rssi: i16) {
        println!(
            "app      ├─► discovered {peripheral} ({:?}) at {rssi} dBm",
            adv.local_name()
        );
    }

    fn did_connect(&self, peripheral: PeripheralId) {
        println!("app      └─► connected {peripheral}");
    }
}

/// The library component that joins the slot without displacing the app.
struct UpdateObserver {
    proxy: CentralProxyRef,
}

impl UpdateObserver {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            proxy: CentralProxyRef::new(),
        })
    }
}

impl CentralDelegate for UpdateObserver {
    fn did_update_state(&self, state: ManagerState) {
        println!("observer ├─► state: powered = {}", state.is_powered_on());
    }

    fn did_connect(&self, peripheral: PeripheralId) {
        println!("observer └─► target {peripheral} connected, starting update");
    }

    fn did_fail_to_connect(&self, peripheral: PeripheralId, error: Option<&BleError>) {
        println!("observer └─► target {peripheral} unreachable: {error:?}");
    }
}

impl Receiver<dyn CentralDelegate> for UpdateObserver {
    fn proxy_ref(&self) -> &CentralProxyRef {
        &self.proxy
    }

    fn as_delegate(self: Rc<Self>) -> Rc<dyn CentralDelegate> {
        self
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bleshare=debug")),
        )
        .init();

    let slot = CentralSlot::new();

    // The application registers first, as it would on startup.
    let app: Rc<dyn CentralDelegate> = Rc::new(AppDelegate);
    slot.set_delegate(&app);

    // The update library links in.
    let observer = UpdateObserver::new();
    Rc::clone(&observer).link(&slot);

    // The "platform" delivers some events.
    let target = PeripheralId::random();
    println!("-- radio up, scan, connect --");
    slot.dispatch(|d| d.did_update_state(ManagerState::PoweredOn));
    slot.dispatch(|d| {
        let adv = AdvertisementData::new().with_local_name("DfuTarg").with_tx_power(-4);
        d.did_discover(target, &adv, -58);
    });
    slot.dispatch(|d| d.did_connect(target));

    // The library leaves; the application's registration is restored.
    Rc::clone(&observer).unlink(&slot);
    println!("-- observer unlinked --");
    slot.dispatch(|d| d.did_update_state(ManagerState::PoweredOff));
}
