//! Television adapter

use super::{DeviceAction, DeviceEvent, DeviceKind, EventSink};

#[derive(Debug)]
pub struct Television {
    label: String,
    events: EventSink,
}

impl Television {
    pub fn new(label: impl Into<String>, events: EventSink) -> Self {
        Self {
            label: label.into(),
            events,
        }
    }

    pub fn on(&self) {
        self.emit(DeviceAction::PowerOn);
    }

    pub fn off(&self) {
        self.emit(DeviceAction::PowerOff);
    }

    fn emit(&self, action: DeviceAction) {
        self.events
            .emit(DeviceEvent::new(DeviceKind::Television, &self.label, action));
    }
}
