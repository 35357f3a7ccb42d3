//! Runs a [`Sequencer`] on a tokio timer.
//!
//! The driver task owns the sequencer, sleeps until its next deadline and
//! publishes a [`Snapshot`] on a watch channel after every change. User
//! toggles arrive as [`Command`]s; the pending sleep is re-derived after each
//! one, so pausing cancels a tick that was already scheduled.

use super::{Sequencer, Snapshot};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// A user action forwarded to a running sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    TogglePlay,
    ForceError,
    ClearError,
    ToggleError,
}

pub struct SequencerDriver;

impl SequencerDriver {
    /// Spawns the driver task on the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn(mut sequencer: Sequencer) -> DriverHandle {
        let origin = Instant::now();
        sequencer.start(0);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(sequencer.snapshot());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(run(sequencer, origin, command_rx, snapshot_tx, shutdown_rx));

        DriverHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

async fn run(
    mut sequencer: Sequencer,
    origin: Instant,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Snapshot>,
    mut shutdown: oneshot::Receiver<()>,
) -> Sequencer {
    loop {
        let deadline = sequencer.next_deadline();
        tokio::select! {
            _ = sleep_until(origin, deadline) => {
                if sequencer.advance_to(elapsed_ms(origin)) > 0 {
                    snapshots.send_replace(sequencer.snapshot());
                }
            }
            command = commands.recv() => match command {
                Some(command) => {
                    apply(&mut sequencer, command, elapsed_ms(origin));
                    snapshots.send_replace(sequencer.snapshot());
                }
                None => break,
            },
            _ = &mut shutdown => break,
        }
    }

    sequencer.teardown();
    sequencer
}

async fn sleep_until(origin: Instant, deadline: Option<u64>) {
    match deadline {
        Some(ms) => time::sleep_until(origin + Duration::from_millis(ms)).await,
        None => std::future::pending::<()>().await,
    }
}

fn elapsed_ms(origin: Instant) -> u64 {
    u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn apply(sequencer: &mut Sequencer, command: Command, now_ms: u64) {
    tracing::debug!(?command, now_ms, "Sequencer command");
    match command {
        Command::Play => sequencer.play(now_ms),
        Command::Pause => sequencer.pause(),
        Command::TogglePlay => sequencer.toggle_play(now_ms),
        Command::ForceError => sequencer.force_error(),
        Command::ClearError => sequencer.clear_error(now_ms),
        Command::ToggleError => sequencer.toggle_error(now_ms),
    }
}

/// Owner-side handle of a driver task. Dropping it aborts the task.
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Sequencer>>,
}

impl DriverHandle {
    /// Forwards a command. Returns false once the task has stopped.
    pub fn send(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that wakes on every subsequent snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Stops the task and hands back the torn-down sequencer.
    ///
    /// Returns `None` if the task was already shut down or has failed.
    pub async fn shutdown(&mut self) -> Option<Sequencer> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let task = self.task.take()?;
        match task.await {
            Ok(sequencer) => Some(sequencer),
            Err(e) => {
                tracing::error!(error = %e, "Sequencer driver task failed");
                None
            }
        }
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
