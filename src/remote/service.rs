//! Remote service - a single task owning the remote control
//!
//! A [`RemoteControl`] is not safe to share: every press is a
//! read-execute-write sequence over the slot table and the undo register.
//! The service moves the remote into one task and feeds it requests from a
//! queue, so presses from any number of handles run one at a time.

use anyhow::{anyhow, Result};
use remote_shared::{remote, LogEntry, RemoteError};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::RemoteControl;
use crate::command::CommandRef;

type Reply<T> = oneshot::Sender<T>;

/// Requests handled by the service task
#[derive(Debug)]
enum Request {
    Bind {
        slot: isize,
        on: CommandRef,
        off: CommandRef,
        reply: Reply<Result<(), RemoteError>>,
    },
    PressOn {
        slot: isize,
        reply: Reply<Result<(), RemoteError>>,
    },
    PressOff {
        slot: isize,
        reply: Reply<Result<(), RemoteError>>,
    },
    PressUndo {
        reply: Reply<()>,
    },
    ShowLog {
        reply: Reply<Vec<LogEntry>>,
    },
}

/// Spawns the task that owns a remote control
pub struct RemoteService;

impl RemoteService {
    /// Move `control` into a new task.
    ///
    /// The task stops once every [`RemoteHandle`] is dropped and hands the
    /// remote back through the returned join handle.
    pub fn spawn(control: RemoteControl) -> (RemoteHandle, JoinHandle<RemoteControl>) {
        let (request_tx, request_rx) = mpsc::channel(remote::REQUEST_QUEUE_DEPTH);
        let task = tokio::spawn(service_loop(control, request_rx));
        (RemoteHandle { request_tx }, task)
    }
}

/// Cloneable access to a remote running inside a [`RemoteService`]
#[derive(Debug, Clone)]
pub struct RemoteHandle {
    request_tx: mpsc::Sender<Request>,
}

impl RemoteHandle {
    pub async fn bind(&self, slot: isize, on: CommandRef, off: CommandRef) -> Result<()> {
        let result = self
            .call(|reply| Request::Bind { slot, on, off, reply })
            .await?;
        Ok(result?)
    }

    pub async fn press_on(&self, slot: isize) -> Result<()> {
        let result = self.call(|reply| Request::PressOn { slot, reply }).await?;
        Ok(result?)
    }

    pub async fn press_off(&self, slot: isize) -> Result<()> {
        let result = self.call(|reply| Request::PressOff { slot, reply }).await?;
        Ok(result?)
    }

    pub async fn press_undo(&self) -> Result<()> {
        self.call(|reply| Request::PressUndo { reply }).await
    }

    /// Snapshot of the log, in call order
    pub async fn show_log(&self) -> Result<Vec<LogEntry>> {
        self.call(|reply| Request::ShowLog { reply }).await
    }

    async fn call<T>(&self, request: impl FnOnce(Reply<T>) -> Request) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.request_tx
            .send(request(reply_tx))
            .await
            .map_err(|_| anyhow!("Remote service stopped"))?;
        reply_rx
            .await
            .map_err(|_| anyhow!("Remote service dropped the request"))
    }
}

async fn service_loop(
    mut control: RemoteControl,
    mut request_rx: mpsc::Receiver<Request>,
) -> RemoteControl {
    info!(slots = control.slot_count(), "Remote service started");

    while let Some(request) = request_rx.recv().await {
        debug!(?request, "Remote request");

        // A caller that gave up on its reply does not stop the service
        match request {
            Request::Bind { slot, on, off, reply } => {
                let _ = reply.send(control.bind(slot, on, off));
            }
            Request::PressOn { slot, reply } => {
                let _ = reply.send(control.press_on(slot));
            }
            Request::PressOff { slot, reply } => {
                let _ = reply.send(control.press_off(slot));
            }
            Request::PressUndo { reply } => {
                control.press_undo();
                let _ = reply.send(());
            }
            Request::ShowLog { reply } => {
                let _ = reply.send(control.show_log().to_vec());
            }
        }
    }

    info!("Remote service stopped");
    control
}
