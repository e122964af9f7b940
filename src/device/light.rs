//! Light adapter

use super::{DeviceAction, DeviceEvent, DeviceKind, EventSink};

/// A switchable light
#[derive(Debug)]
pub struct Light {
    label: String,
    events: EventSink,
}

impl Light {
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
            .emit(DeviceEvent::new(DeviceKind::Light, &self.label, action));
    }
}
