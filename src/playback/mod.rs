// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Step playback: a cursor over a step sequence plus a play/pause state machine.
//!
//! [`Playback`] is synchronous and owns no timer. Auto-advance is modelled as a [`TickHandle`]:
//! `play` hands one out, the caller sleeps for its interval and passes it back to
//! [`Playback::tick`]. Every transition invalidates the outstanding handle first, so a tick that
//! was scheduled before the user moved the cursor is rejected as stale. [`driver`] runs this
//! loop on a tokio task.

pub mod driver;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

/// Auto-advance interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Speed {
    #[default]
    #[serde(rename = "1x")]
    Normal,
    #[serde(rename = "2x")]
    Double,
    #[serde(rename = "0.5x")]
    Half,
}

impl Speed {
    pub fn interval(self) -> Duration {
        match self {
            Self::Normal => Duration::from_millis(1000),
            Self::Double => Duration::from_millis(500),
            Self::Half => Duration::from_millis(2000),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "1x",
            Self::Double => "2x",
            Self::Half => "0.5x",
        }
    }

    /// `1x -> 2x -> 0.5x -> 1x`.
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::Double,
            Self::Double => Self::Half,
            Self::Half => Self::Normal,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown playback speed {0:?} (expected 0.5x, 1x or 2x)")]
pub struct ParseSpeedError(String);

impl FromStr for Speed {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1x" | "1" => Ok(Self::Normal),
            "2x" | "2" => Ok(Self::Double),
            "0.5x" | "0.5" => Ok(Self::Half),
            other => Err(ParseSpeedError(other.to_owned())),
        }
    }
}

/// One scheduled auto-advance. Only the most recently issued handle is accepted by
/// [`Playback::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
    interval: Duration,
}

impl TickHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay before the handle is due.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Cursor moved; schedule the returned handle next.
    Advanced(TickHandle),
    /// Cursor reached the last step and playback stopped.
    Finished,
    /// The handle was cancelled by an earlier transition; nothing changed.
    Stale,
}

/// Cursor and play state for one step sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    step_count: usize,
    cursor: Option<usize>,
    state: PlaybackState,
    speed: Speed,
    generation: u64,
    pending: Option<TickHandle>,
}

impl Playback {
    pub fn new(step_count: usize, speed: Speed) -> Self {
        Self {
            step_count,
            cursor: (step_count > 0).then_some(0),
            state: PlaybackState::Stopped,
            speed,
            generation: 0,
            pending: None,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// `None` only when there are no steps.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Outstanding auto-advance, if playing.
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn last_step(&self) -> Option<usize> {
        self.step_count.checked_sub(1)
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_some() && self.cursor == self.last_step()
    }

    /// Cursor to the first step, stopped.
    pub fn reset(&mut self) {
        self.cancel();
        self.cursor = (self.step_count > 0).then_some(0);
        self.state = PlaybackState::Stopped;
    }

    /// Forced reset for a new step sequence.
    pub fn replace(&mut self, step_count: usize) {
        self.step_count = step_count;
        self.reset();
    }

    /// Starts auto-advance and returns the first handle to schedule.
    ///
    /// Already playing keeps the outstanding handle. At the last step there is nothing to
    /// advance, so playback stops right away and no handle is issued.
    pub fn play(&mut self) -> Option<TickHandle> {
        self.cursor?;
        if self.state == PlaybackState::Playing {
            return self.pending;
        }
        if self.is_at_end() {
            self.cancel();
            self.state = PlaybackState::Stopped;
            return None;
        }
        self.state = PlaybackState::Playing;
        Some(self.schedule())
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.cancel();
        self.state = PlaybackState::Paused;
    }

    /// Single play/pause control.
    pub fn toggle(&mut self) -> Option<TickHandle> {
        if self.state == PlaybackState::Playing {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    pub fn step_forward(&mut self) {
        if let Some(cursor) = self.cursor {
            self.seek(cursor.saturating_add(1));
        }
    }

    pub fn step_back(&mut self) {
        if let Some(cursor) = self.cursor {
            self.seek(cursor.saturating_sub(1));
        }
    }

    pub fn jump_to_end(&mut self) {
        if let Some(last) = self.last_step() {
            self.seek(last);
        }
    }

    /// Random-access scrub; the cursor is clamped to the last step and playback pauses.
    pub fn seek(&mut self, step: usize) {
        let Some(last) = self.last_step() else {
            return;
        };
        self.cancel();
        self.cursor = Some(step.min(last));
        self.state = PlaybackState::Paused;
    }

    /// Changes the interval. State and cursor stay; while playing, the outstanding handle is
    /// replaced by one using the new interval, which is returned.
    pub fn set_speed(&mut self, speed: Speed) -> Option<TickHandle> {
        self.speed = speed;
        if self.state == PlaybackState::Playing {
            Some(self.schedule())
        } else {
            None
        }
    }

    pub fn cycle_speed(&mut self) -> Option<TickHandle> {
        self.set_speed(self.speed.next())
    }

    /// Handles a due auto-advance.
    pub fn tick(&mut self, handle: TickHandle) -> TickOutcome {
        if self.state != PlaybackState::Playing || self.pending != Some(handle) {
            return TickOutcome::Stale;
        }
        let (Some(cursor), Some(last)) = (self.cursor, self.last_step()) else {
            return TickOutcome::Stale;
        };

        let next = cursor.saturating_add(1).min(last);
        self.cursor = Some(next);
        if next == last {
            self.cancel();
            self.state = PlaybackState::Stopped;
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced(self.schedule())
        }
    }

    /// `Step {cursor + 1} of {step_count}`.
    pub fn status_line(&self) -> String {
        status_line(self.cursor, self.step_count)
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    fn schedule(&mut self) -> TickHandle {
        self.generation = self.generation.wrapping_add(1);
        let handle = TickHandle { generation: self.generation, interval: self.speed.interval() };
        self.pending = Some(handle);
        handle
    }
}

pub(crate) fn status_line(cursor: Option<usize>, step_count: usize) -> String {
    let shown = cursor.map_or(0, |cursor| cursor + 1);
    format!("Step {shown} of {step_count}")
}

#[cfg(test)]
mod tests;
