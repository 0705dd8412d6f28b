// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Async owner of a [`Playback`] and its auto-advance timer.
//!
//! Commands arrive over an mpsc channel; every state change is published as a
//! [`PlaybackSnapshot`] on a watch channel. The task is the only code that mutates the playback,
//! so the timer and manual commands never race.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use super::{Playback, PlaybackState, Speed, TickHandle, TickOutcome};

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Toggle,
    StepForward,
    StepBack,
    JumpToEnd,
    Reset,
    Seek(usize),
    SetSpeed(Speed),
    CycleSpeed,
    Replace(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub cursor: Option<usize>,
    pub state: PlaybackState,
    pub speed: Speed,
    pub step_count: usize,
}

impl PlaybackSnapshot {
    pub fn status_line(&self) -> String {
        super::status_line(self.cursor, self.step_count)
    }
}

impl From<&Playback> for PlaybackSnapshot {
    fn from(playback: &Playback) -> Self {
        Self {
            cursor: playback.cursor(),
            state: playback.state(),
            speed: playback.speed(),
            step_count: playback.step_count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("playback driver has shut down")]
pub struct DriverClosed;

/// Client side of a running driver.
#[derive(Debug)]
pub struct PlaybackHandle {
    commands: mpsc::Sender<PlaybackCommand>,
    snapshots: watch::Receiver<PlaybackSnapshot>,
    task: JoinHandle<Playback>,
}

impl PlaybackHandle {
    pub async fn send(&self, command: PlaybackCommand) -> Result<(), DriverClosed> {
        self.commands.send(command).await.map_err(|_| DriverClosed)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        *self.snapshots.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.snapshots.clone()
    }

    /// Closes the command channel and returns the final playback state.
    pub async fn shutdown(self) -> Option<Playback> {
        drop(self.commands);
        self.task.await.ok()
    }
}

/// Spawns the driver task on the current tokio runtime.
pub fn spawn_playback(playback: Playback) -> PlaybackHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshot_tx, snapshot_rx) = watch::channel(PlaybackSnapshot::from(&playback));
    let task = tokio::spawn(run(playback, command_rx, snapshot_tx));
    PlaybackHandle { commands: command_tx, snapshots: snapshot_rx, task }
}

#[tracing::instrument(skip_all, fields(steps = playback.step_count()))]
async fn run(
    mut playback: Playback,
    mut commands: mpsc::Receiver<PlaybackCommand>,
    snapshots: watch::Sender<PlaybackSnapshot>,
) -> Playback {
    let mut deadline = sync_deadline(None, &playback);

    loop {
        let due = deadline.map(|(at, _)| at);
        let timer = async move {
            match due {
                Some(at) => sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                tracing::debug!(?command, "playback command");
                apply(&mut playback, command);
            }
            () = timer => {
                if let Some((_, handle)) = deadline.take() {
                    match playback.tick(handle) {
                        TickOutcome::Advanced(_) => {}
                        TickOutcome::Finished => tracing::debug!("playback reached the last step"),
                        TickOutcome::Stale => tracing::trace!("stale tick ignored"),
                    }
                }
            }
        }

        deadline = sync_deadline(deadline, &playback);
        let next = PlaybackSnapshot::from(&playback);
        snapshots.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    playback
}

/// Keeps the timer aligned with the playback's outstanding handle: a new handle restarts the
/// countdown, a cancelled one clears it.
fn sync_deadline(
    deadline: Option<(Instant, TickHandle)>,
    playback: &Playback,
) -> Option<(Instant, TickHandle)> {
    let pending = playback.pending()?;
    match deadline {
        Some((at, handle)) if handle == pending => Some((at, handle)),
        _ => Some((Instant::now() + pending.interval(), pending)),
    }
}

fn apply(playback: &mut Playback, command: PlaybackCommand) {
    match command {
        PlaybackCommand::Play => {
            playback.play();
        }
        PlaybackCommand::Pause => playback.pause(),
        PlaybackCommand::Toggle => {
            playback.toggle();
        }
        PlaybackCommand::StepForward => playback.step_forward(),
        PlaybackCommand::StepBack => playback.step_back(),
        PlaybackCommand::JumpToEnd => playback.jump_to_end(),
        PlaybackCommand::Reset => playback.reset(),
        PlaybackCommand::Seek(step) => playback.seek(step),
        PlaybackCommand::SetSpeed(speed) => {
            playback.set_speed(speed);
        }
        PlaybackCommand::CycleSpeed => {
            playback.cycle_speed();
        }
        PlaybackCommand::Replace(step_count) => playback.replace(step_count),
    }
}
