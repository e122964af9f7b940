use anyhow::{Context, Result};
use remote_control::command::{
    AirConditionerEcoModeCommand, AirConditionerOffCommand, AirConditionerOnCommand,
    CommandRef, LightOffCommand, LightOnCommand, MacroCommand, NoCommand, TelevisionOffCommand,
    TelevisionOnCommand,
};
use remote_control::device::{AirConditioner, DeviceEvent, EventSink, Light, Television};
use remote_control::remote::{RemoteConfig, RemoteControl, RemoteHandle, RemoteService};
use remote_control::RemoteError;
use std::sync::Arc;
use tokio::sync::mpsc;

use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = RemoteConfig::from_env().context("Failed to load remote configuration")?;
    info!("Remote control starting: {} slots", config.slot_count);

    let (sink, device_events) = EventSink::channel();
    let device_task = tokio::spawn(handle_device_events(device_events));

    let living_room_light = Arc::new(Light::new("living room", sink.clone()));
    let tv = Arc::new(Television::new("living room", sink.clone()));
    let ac = Arc::new(AirConditioner::new("living room", sink));

    let light_on: CommandRef = Arc::new(LightOnCommand::new(living_room_light.clone()));
    let light_off: CommandRef = Arc::new(LightOffCommand::new(living_room_light));
    let tv_on: CommandRef = Arc::new(TelevisionOnCommand::new(tv.clone()));
    let tv_off: CommandRef = Arc::new(TelevisionOffCommand::new(tv));
    let ac_on: CommandRef = Arc::new(AirConditionerOnCommand::new(ac.clone()));
    let ac_off: CommandRef = Arc::new(AirConditionerOffCommand::new(ac.clone()));
    let ac_eco: CommandRef = Arc::new(AirConditionerEcoModeCommand::new(ac));
    let no_command: CommandRef = Arc::new(NoCommand);

    let (remote, remote_task) = RemoteService::spawn(RemoteControl::new(config));

    remote.bind(0, light_on.clone(), light_off.clone()).await?;
    remote.bind(1, tv_on.clone(), tv_off.clone()).await?;
    // The AC has no dedicated off button
    remote.bind(2, ac_on.clone(), no_command.clone()).await?;
    remote.bind(3, ac_eco, no_command.clone()).await?;

    info!("--- Light ---");
    remote.press_on(0).await?;
    remote.press_off(0).await?;
    remote.press_undo().await?;

    info!("--- Television ---");
    remote.press_on(1).await?;
    remote.press_undo().await?;

    info!("--- Unbound and missing slots ---");
    remote.press_on(5).await?;
    press_reporting_errors(&remote, 9).await?;

    info!("--- Leave home macro ---");
    let leave_home = MacroCommand::new("leave home", vec![light_off, tv_off, ac_off]);
    info!("Macro '{}' has {} steps", leave_home.label(), leave_home.len());

    // Everything on before leaving
    light_on.execute();
    tv_on.execute();
    ac_on.execute();

    remote.bind(4, Arc::new(leave_home), no_command).await?;
    remote.press_on(4).await?;

    info!("--- Undo leave home ---");
    remote.press_undo().await?;

    let entries = remote.show_log().await?;
    info!("Session recorded {} log entries", entries.len());

    drop(remote);
    let control = remote_task.await.context("Remote service task failed")?;
    println!("{}", control.log());

    // Last device references; dropping them closes the event stream
    drop(light_on);
    drop(tv_on);
    drop(ac_on);
    drop(control);
    device_task.await.context("Device event task failed")?;

    Ok(())
}

/// Press a slot that may not exist; an invalid slot is reported, not fatal
async fn press_reporting_errors(remote: &RemoteHandle, slot: isize) -> Result<()> {
    match remote.press_on(slot).await {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<RemoteError>() {
            Some(slot_error) => {
                warn!("Button press rejected: {}", slot_error);
                Ok(())
            }
            None => {
                error!("Remote unavailable: {}", e);
                Err(e)
            }
        },
    }
}

/// Handle events emitted by the devices
async fn handle_device_events(mut events: mpsc::UnboundedReceiver<DeviceEvent>) {
    let mut count = 0usize;
    while let Some(event) = events.recv().await {
        count += 1;
        debug!(
            "[DEVICE] {} '{}' -> {:?}",
            event.kind, event.label, event.action
        );
    }
    info!("[DEVICE] Event stream closed after {} events", count);
}
