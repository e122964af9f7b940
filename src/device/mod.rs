//! Device adapters driven by remote commands
//!
//! Adapters are plain actuators: they hold no history and every operation
//! is safe to repeat. Each operation emits a [`DeviceEvent`] so callers can
//! observe what happened without parsing console output.

mod air_conditioner;
mod events;
mod light;
mod television;

pub use air_conditioner::AirConditioner;
pub use events::{DeviceAction, DeviceEvent, DeviceKind, EventSink};
pub use light::Light;
pub use television::Television;
