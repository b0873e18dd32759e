//! # The peripheral role.
//!
//! Second instantiation of the generic fan-out: the delegate slot of a
//! connected peripheral. Same shape as [`crate::central`], over the
//! peripheral's callback enumeration.

mod delegate;

pub use delegate::PeripheralDelegate;

use crate::proxy::{DelegateSlot, FanoutProxy, ProxyRef, Receiver};

/// Delegate slot of a peripheral.
pub type PeripheralSlot = DelegateSlot<dyn PeripheralDelegate>;

/// Fan-out proxy for a peripheral slot.
pub type PeripheralProxy = FanoutProxy<dyn PeripheralDelegate>;

/// Back-reference storage for a peripheral receiver.
pub type PeripheralProxyRef = ProxyRef<dyn PeripheralDelegate>;

/// A peripheral delegate that can link into an occupied peripheral slot.
pub trait PeripheralReceiver: PeripheralDelegate + Receiver<dyn PeripheralDelegate> {}

impl<T> PeripheralReceiver for T where T: PeripheralDelegate + Receiver<dyn PeripheralDelegate> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{BleError, CharacteristicId, ServiceId};
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    type Log = Rc<RefCell<Vec<String>>>;

    struct AppDelegate {
        log: Log,
    }

    impl PeripheralDelegate for AppDelegate {
        fn did_discover_services(&self, error: Option<&BleError>) {
            self.log
                .borrow_mut()
                .push(format!("app:services err={}", error.is_some()));
        }

        fn did_update_characteristic_value(
            &self,
            characteristic: CharacteristicId,
            value: &[u8],
            error: Option<&BleError>,
        ) {
            self.log.borrow_mut().push(format!(
                "app:value {characteristic} {value:?} err={}",
                error.is_some()
            ));
        }
    }

    struct DfuObserver {
        log: Log,
        proxy: PeripheralProxyRef,
    }

    impl DfuObserver {
        fn new(log: &Log) -> Rc<Self> {
            Rc::new(Self {
                log: Rc::clone(log),
                proxy: PeripheralProxyRef::new(),
            })
        }
    }

    impl PeripheralDelegate for DfuObserver {
        fn did_update_characteristic_value(
            &self,
            characteristic: CharacteristicId,
            value: &[u8],
            error: Option<&BleError>,
        ) {
            self.log.borrow_mut().push(format!(
                "dfu:value {characteristic} {value:?} err={}",
                error.is_some()
            ));
        }

        fn did_write_characteristic_value(
            &self,
            characteristic: CharacteristicId,
            error: Option<&BleError>,
        ) {
            self.log.borrow_mut().push(format!(
                "dfu:wrote {characteristic} err={}",
                error.is_some()
            ));
        }

        fn did_update_notification_state(
            &self,
            characteristic: CharacteristicId,
            notifying: bool,
            error: Option<&BleError>,
        ) {
            self.log.borrow_mut().push(format!(
                "dfu:notify {characteristic} on={notifying} err={}",
                error.is_some()
            ));
        }

        fn is_ready_to_send_write_without_response(&self) {
            self.log.borrow_mut().push("dfu:ready".into());
        }
    }

    impl Receiver<dyn PeripheralDelegate> for DfuObserver {
        fn proxy_ref(&self) -> &PeripheralProxyRef {
            &self.proxy
        }

        fn as_delegate(self: Rc<Self>) -> Rc<dyn PeripheralDelegate> {
            self
        }
    }

    fn log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_gatt_traffic_fans_out_in_order() {
        let log = log();
        let slot = PeripheralSlot::new();
        let app = Rc::new(AppDelegate {
            log: Rc::clone(&log),
        });
        let app_dyn: Rc<dyn PeripheralDelegate> = app.clone();
        slot.set_delegate(&app_dyn);

        let dfu = DfuObserver::new(&log);
        Rc::clone(&dfu).link(&slot);

        let control_point = CharacteristicId::new(Uuid::from_u128(0x8ec9_0001));
        slot.dispatch(|d| d.did_discover_services(None));
        slot.dispatch(|d| d.did_update_characteristic_value(control_point, &[0x60, 0x00], None));
        slot.dispatch(|d| d.is_ready_to_send_write_without_response());

        assert_eq!(
            *log.borrow(),
            vec![
                "app:services err=false".to_string(),
                format!("app:value {control_point} [96, 0] err=false"),
                format!("dfu:value {control_point} [96, 0] err=false"),
                "dfu:ready".to_string(),
            ],
            "shared callbacks reach the app first, observer-only callbacks reach the observer"
        );
    }

    #[test]
    fn test_notification_state_with_error_payload() {
        let log = log();
        let slot = PeripheralSlot::new();
        let dfu = DfuObserver::new(&log);
        Rc::clone(&dfu).link(&slot);

        let cccd_target = CharacteristicId::random();
        let err = BleError::Att(0x0e);
        slot.dispatch(|d| d.did_update_notification_state(cccd_target, false, Some(&err)));

        assert_eq!(
            *log.borrow(),
            vec![format!("dfu:notify {cccd_target} on=false err=true")]
        );
    }

    #[test]
    fn test_unlink_returns_slot_to_application() {
        let log = log();
        let slot = PeripheralSlot::new();
        let app = Rc::new(AppDelegate {
            log: Rc::clone(&log),
        });
        let app_dyn: Rc<dyn PeripheralDelegate> = app.clone();
        slot.set_delegate(&app_dyn);

        let dfu = DfuObserver::new(&log);
        Rc::clone(&dfu).link(&slot);
        Rc::clone(&dfu).unlink(&slot);

        slot.dispatch(|d| d.did_discover_services(None));
        assert_eq!(
            *log.borrow(),
            vec!["app:services err=false"],
            "after unlink the observer hears nothing"
        );
        assert!(!dfu.proxy_ref().is_linked());
    }

    #[test]
    fn test_name_and_service_list_payloads_forwarded() {
        let log = log();
        let slot = PeripheralSlot::new();

        struct NameTracker {
            log: Log,
            proxy: PeripheralProxyRef,
        }
        impl PeripheralDelegate for NameTracker {
            fn did_update_name(&self, name: &str) {
                self.log.borrow_mut().push(format!("tracker:name {name}"));
            }
            fn did_modify_services(&self, invalidated: &[ServiceId]) {
                self.log
                    .borrow_mut()
                    .push(format!("tracker:invalidated {}", invalidated.len()));
            }
        }
        impl Receiver<dyn PeripheralDelegate> for NameTracker {
            fn proxy_ref(&self) -> &PeripheralProxyRef {
                &self.proxy
            }
            fn as_delegate(self: Rc<Self>) -> Rc<dyn PeripheralDelegate> {
                self
            }
        }

        let tracker = Rc::new(NameTracker {
            log: Rc::clone(&log),
            proxy: PeripheralProxyRef::new(),
        });
        Rc::clone(&tracker).link(&slot);

        let gone = [ServiceId::random(), ServiceId::random()];
        slot.dispatch(|d| d.did_update_name("DfuTarg"));
        slot.dispatch(|d| d.did_modify_services(&gone));

        assert_eq!(
            *log.borrow(),
            vec!["tracker:name DfuTarg", "tracker:invalidated 2"]
        );
    }
}
