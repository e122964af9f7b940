//! Air conditioner adapter

use super::{DeviceAction, DeviceEvent, DeviceKind, EventSink};

/// An air conditioner with an energy-saving mode
#[derive(Debug)]
pub struct AirConditioner {
    label: String,
    events: EventSink,
}

impl AirConditioner {
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

    /// Switch to energy-saving mode.
    ///
    /// The adapter does not remember the mode it was in before.
    pub fn set_eco_mode(&self) {
        self.emit(DeviceAction::EcoMode);
    }

    fn emit(&self, action: DeviceAction) {
        self.events.emit(DeviceEvent::new(
            DeviceKind::AirConditioner,
            &self.label,
            action,
        ));
    }
}
