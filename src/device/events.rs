//! Structured device events

use tokio::sync::mpsc;
use tracing::info;

/// Kind of device an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Light,
    Television,
    AirConditioner,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Light => write!(f, "light"),
            DeviceKind::Television => write!(f, "television"),
            DeviceKind::AirConditioner => write!(f, "air conditioner"),
        }
    }
}

/// Operation a device performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceAction {
    PowerOn,
    PowerOff,
    /// Energy-saving mode (air conditioner only)
    EcoMode,
}

/// Something a device did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEvent {
    pub kind: DeviceKind,
    pub label: String,
    pub action: DeviceAction,
}

impl DeviceEvent {
    pub fn new(kind: DeviceKind, label: impl Into<String>, action: DeviceAction) -> Self {
        Self {
            kind,
            label: label.into(),
            action,
        }
    }
}

/// Where devices report their operations.
///
/// The default sink only logs; a channel sink also forwards every event to
/// the receiver returned by [`EventSink::channel`].
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<mpsc::UnboundedSender<DeviceEvent>>,
}

impl EventSink {
    /// Sink forwarding events to the returned receiver
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DeviceEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub(crate) fn emit(&self, event: DeviceEvent) {
        info!(
            device = %event.kind,
            label = %event.label,
            action = ?event.action,
            "Device operation"
        );

        if let Some(tx) = &self.tx {
            // Receiver may be gone; devices never fail
            let _ = tx.send(event);
        }
    }
}
