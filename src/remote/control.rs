//! Remote control invoker: slot bindings, single-level undo, command log

use anyhow::{anyhow, Context, Result};
use remote_shared::{
    remote, slot_index, CommandLog, LogAction, LogEntry, RemoteError, UndoRegister, UndoState,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::command::{CommandRef, NoCommand};

/// Configuration for a remote control
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Number of button slots, fixed for the life of the remote
    pub slot_count: usize,
    /// Echo every log entry as a tracing record when it is appended
    pub echo_log: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            slot_count: remote::DEFAULT_SLOT_COUNT,
            echo_log: true,
        }
    }
}

impl RemoteConfig {
    /// Build a config from `REMOTE_SLOT_COUNT` and `REMOTE_ECHO_LOG`,
    /// falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let slot_count = std::env::var("REMOTE_SLOT_COUNT").ok();
        let echo_log = std::env::var("REMOTE_ECHO_LOG").ok();
        Self::from_vars(slot_count.as_deref(), echo_log.as_deref())
    }

    /// Build a config from raw variable values; `None` keeps the default
    pub fn from_vars(slot_count: Option<&str>, echo_log: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = slot_count {
            config.slot_count = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid REMOTE_SLOT_COUNT: {:?}", raw))?;
        }

        if let Some(raw) = echo_log {
            config.echo_log = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid REMOTE_ECHO_LOG: {:?}", raw))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slot_count == 0 {
            return Err(anyhow!("A remote needs at least one slot"));
        }
        Ok(())
    }
}

/// Commands bound to one slot
#[derive(Debug, Clone)]
pub struct SlotBinding {
    pub on: CommandRef,
    pub off: CommandRef,
}

/// The invoker: the only component with mutable session state.
///
/// It never looks at device state; it only holds commands and forwards
/// button presses to them.
#[derive(Debug)]
pub struct RemoteControl {
    slots: Vec<SlotBinding>,
    undo: UndoRegister<CommandRef>,
    log: CommandLog,
    echo_log: bool,
}

impl RemoteControl {
    /// Create a remote with every slot bound to [`NoCommand`]
    pub fn new(config: RemoteConfig) -> Self {
        let no_command: CommandRef = Arc::new(NoCommand);
        let empty = SlotBinding {
            on: no_command.clone(),
            off: no_command.clone(),
        };

        Self {
            slots: vec![empty; config.slot_count],
            undo: UndoRegister::new(no_command),
            log: CommandLog::new(),
            echo_log: config.echo_log,
        }
    }

    /// Create a remote with `slot_count` slots and default settings
    pub fn with_slots(slot_count: usize) -> Self {
        Self::new(RemoteConfig {
            slot_count,
            ..Default::default()
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Bind both directions of a slot. Nothing changes if the slot is invalid.
    pub fn bind(
        &mut self,
        slot: isize,
        on: CommandRef,
        off: CommandRef,
    ) -> Result<(), RemoteError> {
        let index = self.resolve(slot)?;
        info!(slot, on = on.name(), off = off.name(), "Slot bound");
        self.slots[index] = SlotBinding { on, off };
        Ok(())
    }

    /// Get the commands bound to a slot
    pub fn binding(&self, slot: isize) -> Result<&SlotBinding, RemoteError> {
        let index = self.resolve(slot)?;
        Ok(&self.slots[index])
    }

    /// Press the "on" button of a slot
    pub fn press_on(&mut self, slot: isize) -> Result<(), RemoteError> {
        let index = self.resolve(slot)?;
        let command = self.slots[index].on.clone();
        self.run(command);
        Ok(())
    }

    /// Press the "off" button of a slot
    pub fn press_off(&mut self, slot: isize) -> Result<(), RemoteError> {
        let index = self.resolve(slot)?;
        let command = self.slots[index].off.clone();
        self.run(command);
        Ok(())
    }

    /// Undo the most recent press. Undo is single-shot: the register is
    /// reset to [`NoCommand`], so pressing again only logs.
    pub fn press_undo(&mut self) {
        let command = self.undo.consume();
        command.undo();
        self.record(LogAction::Undo, command.name());
    }

    /// Current state of the undo register
    pub fn undo_state(&self) -> UndoState {
        self.undo.state()
    }

    /// Name of the command the next undo applies to
    pub fn undo_target(&self) -> &'static str {
        self.undo.held().name()
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    /// Emit every log entry and return them in call order
    pub fn show_log(&self) -> &[LogEntry] {
        info!(entries = self.log.len(), "Command log");
        for entry in self.log.iter() {
            info!(
                at_ms = entry.at_ms,
                action = %entry.action,
                command = entry.command,
                "Log entry"
            );
        }
        self.log.entries()
    }

    fn run(&mut self, command: CommandRef) {
        command.execute();
        self.record(LogAction::Execute, command.name());
        self.undo.arm(command);
    }

    fn record(&mut self, action: LogAction, command: &'static str) {
        let entry = self.log.append(action, command);
        if self.echo_log {
            info!(
                at_ms = entry.at_ms,
                action = %entry.action,
                command = entry.command,
                "Log entry appended"
            );
        }
    }

    fn resolve(&self, slot: isize) -> Result<usize, RemoteError> {
        slot_index(slot, self.slots.len()).inspect_err(|e| warn!("{}", e))
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new(RemoteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::recorder::Recorder;
    use crate::command::{
        AirConditionerOffCommand, AirConditionerOnCommand, Command, LightOffCommand,
        LightOnCommand, MacroCommand, TelevisionOffCommand, TelevisionOnCommand,
    };
    use crate::device::{
        AirConditioner, DeviceAction, DeviceEvent, DeviceKind, EventSink, Light, Television,
    };
    use std::sync::Mutex;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn drain(rx: &mut UnboundedReceiver<DeviceEvent>) -> Vec<(DeviceKind, DeviceAction)> {
        std::iter::from_fn(|| rx.try_recv().ok())
            .map(|e| (e.kind, e.action))
            .collect()
    }

    fn log_summary(remote: &RemoteControl) -> Vec<(LogAction, &'static str)> {
        remote.log().iter().map(|e| (e.action, e.command)).collect()
    }

    #[test]
    fn test_new_remote_is_unbound() {
        let remote = RemoteControl::default();
        assert_eq!(remote.slot_count(), 7);
        assert_eq!(remote.undo_state(), UndoState::Empty);
        assert_eq!(remote.undo_target(), "NoCommand");
        assert!(remote.log().is_empty());

        for slot in 0..7 {
            let binding = remote.binding(slot).unwrap();
            assert_eq!(binding.on.name(), "NoCommand");
            assert_eq!(binding.off.name(), "NoCommand");
        }
    }

    #[test]
    fn test_press_dispatches_bound_command() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let mut remote = RemoteControl::with_slots(3);
        remote
            .bind(2, Arc::new(Recorder::new("up", &trace)), Arc::new(Recorder::new("down", &trace)))
            .unwrap();

        remote.press_on(2).unwrap();
        assert_eq!(*trace.lock().unwrap(), vec!["execute up"]);
        assert_eq!(remote.undo_state(), UndoState::Armed);
        assert_eq!(remote.undo_target(), "up");

        remote.press_off(2).unwrap();
        assert_eq!(*trace.lock().unwrap(), vec!["execute up", "execute down"]);
        assert_eq!(remote.undo_target(), "down");
    }

    #[test]
    fn test_unbound_slot_arms_null_command() {
        let mut remote = RemoteControl::default();
        remote.press_on(5).unwrap();

        assert_eq!(remote.undo_state(), UndoState::Armed);
        assert_eq!(remote.undo_target(), "NoCommand");
        assert_eq!(log_summary(&remote), vec![(LogAction::Execute, "NoCommand")]);
    }

    #[test]
    fn test_undo_is_single_shot() {
        let (sink, mut rx) = EventSink::channel();
        let tv = Arc::new(Television::new("den", sink));
        let mut remote = RemoteControl::default();
        remote
            .bind(
                1,
                Arc::new(TelevisionOnCommand::new(tv.clone())),
                Arc::new(TelevisionOffCommand::new(tv)),
            )
            .unwrap();

        remote.press_on(1).unwrap();
        remote.press_undo();
        assert_eq!(
            drain(&mut rx),
            vec![
                (DeviceKind::Television, DeviceAction::PowerOn),
                (DeviceKind::Television, DeviceAction::PowerOff),
            ]
        );
        assert_eq!(remote.undo_state(), UndoState::Empty);

        // Second undo touches no device but is still logged
        remote.press_undo();
        assert!(drain(&mut rx).is_empty());
        assert_eq!(
            log_summary(&remote),
            vec![
                (LogAction::Execute, "TelevisionOnCommand"),
                (LogAction::Undo, "TelevisionOnCommand"),
                (LogAction::Undo, "NoCommand"),
            ]
        );
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let mut remote = RemoteControl::default();
        remote
            .bind(0, Arc::new(Recorder::new("on", &trace)), Arc::new(Recorder::new("off", &trace)))
            .unwrap();
        remote.press_on(0).unwrap();

        for slot in [7, -1, isize::MAX, isize::MIN] {
            let expected = RemoteError::InvalidSlotIndex { slot, slot_count: 7 };
            assert_eq!(
                remote.bind(slot, Arc::new(NoCommand), Arc::new(NoCommand)),
                Err(expected)
            );
            assert_eq!(remote.press_on(slot), Err(expected));
            assert_eq!(remote.press_off(slot), Err(expected));
            assert_eq!(remote.binding(slot).unwrap_err(), expected);
        }

        assert_eq!(*trace.lock().unwrap(), vec!["execute on"]);
        assert_eq!(remote.undo_state(), UndoState::Armed);
        assert_eq!(remote.undo_target(), "on");
        assert_eq!(log_summary(&remote), vec![(LogAction::Execute, "on")]);
        assert_eq!(remote.binding(0).unwrap().off.name(), "off");
        for slot in 1..7 {
            assert_eq!(remote.binding(slot).unwrap().on.name(), "NoCommand");
        }

        // Still usable afterwards
        remote.press_undo();
        assert_eq!(*trace.lock().unwrap(), vec!["execute on", "undo on"]);
    }

    #[test]
    fn test_rebinding_replaces_both_directions() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let mut remote = RemoteControl::with_slots(1);
        remote
            .bind(0, Arc::new(Recorder::new("a", &trace)), Arc::new(Recorder::new("b", &trace)))
            .unwrap();
        remote
            .bind(0, Arc::new(Recorder::new("c", &trace)), Arc::new(Recorder::new("d", &trace)))
            .unwrap();

        let binding = remote.binding(0).unwrap();
        assert_eq!(binding.on.name(), "c");
        assert_eq!(binding.off.name(), "d");
    }

    #[test]
    fn test_log_has_one_entry_per_press() {
        let mut remote = RemoteControl::with_slots(2);
        remote.press_on(0).unwrap();
        remote.press_off(1).unwrap();
        remote.press_undo();
        remote.press_undo();
        remote.press_on(1).unwrap();
        // Rejected presses are not logged
        assert!(remote.press_on(2).is_err());

        let actions: Vec<_> = remote.show_log().iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![
                LogAction::Execute,
                LogAction::Execute,
                LogAction::Undo,
                LogAction::Undo,
                LogAction::Execute,
            ]
        );
    }

    #[test]
    fn test_light_on_off_undo_scenario() {
        let (sink, mut rx) = EventSink::channel();
        let light = Arc::new(Light::new("living room", sink));
        let mut remote = RemoteControl::new(RemoteConfig {
            slot_count: 7,
            echo_log: false,
        });
        remote
            .bind(
                0,
                Arc::new(LightOnCommand::new(light.clone())),
                Arc::new(LightOffCommand::new(light)),
            )
            .unwrap();

        remote.press_on(0).unwrap();
        assert_eq!(drain(&mut rx), vec![(DeviceKind::Light, DeviceAction::PowerOn)]);
        assert_eq!(remote.undo_target(), "LightOnCommand");

        remote.press_off(0).unwrap();
        assert_eq!(drain(&mut rx), vec![(DeviceKind::Light, DeviceAction::PowerOff)]);
        assert_eq!(remote.undo_target(), "LightOffCommand");

        remote.press_undo();
        assert_eq!(drain(&mut rx), vec![(DeviceKind::Light, DeviceAction::PowerOn)]);
        assert_eq!(remote.undo_state(), UndoState::Empty);
        assert_eq!(remote.undo_target(), "NoCommand");
    }

    #[test]
    fn test_leave_home_macro_scenario() {
        let (sink, mut rx) = EventSink::channel();
        let light = Arc::new(Light::new("living room", sink.clone()));
        let tv = Arc::new(Television::new("living room", sink.clone()));
        let ac = Arc::new(AirConditioner::new("living room", sink));

        let members: Vec<CommandRef> = vec![
            Arc::new(LightOffCommand::new(light)),
            Arc::new(TelevisionOffCommand::new(tv)),
            Arc::new(AirConditionerOffCommand::new(ac.clone())),
        ];
        let mut remote = RemoteControl::default();
        remote
            .bind(4, Arc::new(MacroCommand::new("leave home", members)), Arc::new(NoCommand))
            .unwrap();

        AirConditionerOnCommand::new(ac).execute();
        drain(&mut rx);

        remote.press_on(4).unwrap();
        assert_eq!(
            drain(&mut rx),
            vec![
                (DeviceKind::Light, DeviceAction::PowerOff),
                (DeviceKind::Television, DeviceAction::PowerOff),
                (DeviceKind::AirConditioner, DeviceAction::PowerOff),
            ]
        );

        remote.press_undo();
        assert_eq!(
            drain(&mut rx),
            vec![
                (DeviceKind::AirConditioner, DeviceAction::PowerOn),
                (DeviceKind::Television, DeviceAction::PowerOn),
                (DeviceKind::Light, DeviceAction::PowerOn),
            ]
        );
        assert_eq!(
            log_summary(&remote),
            vec![(LogAction::Execute, "MacroCommand"), (LogAction::Undo, "MacroCommand")]
        );
    }

    #[test]
    fn test_config_rejects_zero_slots() {
        let config = RemoteConfig {
            slot_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(RemoteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_from_vars_defaults() {
        let config = RemoteConfig::from_vars(None, None).unwrap();
        assert_eq!(config.slot_count, 7);
        assert!(config.echo_log);
    }

    #[test]
    fn test_config_from_vars_trims_values() {
        let config = RemoteConfig::from_vars(Some(" 3 "), Some("false")).unwrap();
        assert_eq!(config.slot_count, 3);
        assert!(!config.echo_log);
    }

    #[test]
    fn test_config_from_vars_rejects_bad_slot_count() {
        let err = RemoteConfig::from_vars(Some("abc"), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid REMOTE_SLOT_COUNT: \"abc\"");
    }

    #[test]
    fn test_config_from_vars_rejects_zero_slots() {
        let err = RemoteConfig::from_vars(Some("0"), None).unwrap_err();
        assert_eq!(err.to_string(), "A remote needs at least one slot");
    }

    #[test]
    fn test_config_from_vars_rejects_bad_echo_flag() {
        let err = RemoteConfig::from_vars(None, Some("maybe")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid REMOTE_ECHO_LOG: \"maybe\"");
    }
}
