// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Server-sent-event decoding for the live frontier stream.
//!
//! The transport is someone else's problem: bytes arrive in arbitrary chunks and
//! [`SseDecoder::push`] returns every event completed by that chunk.

use serde::{Deserialize, Serialize};

use super::FormatError;

const DEFAULT_EVENT: &str = "message";

/// One dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: String,
    pub data: String,
    pub id: Option<String>,
}

/// Incremental `text/event-stream` decoder.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    event: Option<String>,
    data: String,
    has_data: bool,
    last_id: Option<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk of bytes; lines split across chunks are kept until their newline arrives.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        let mut start = 0;
        while let Some(offset) = memchr::memchr(b'\n', &self.buffer[start..]) {
            let end = start + offset;
            let raw = &self.buffer[start..end];
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw).into_owned();
            start = end + 1;

            if let Some(event) = self.process_line(&line) {
                events.push(event);
            }
        }
        self.buffer.drain(..start);
        events
    }

    fn process_line(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match field {
            "event" => self.event = Some(value.to_owned()),
            "data" => {
                if self.has_data {
                    self.data.push('\n');
                }
                self.data.push_str(value);
                self.has_data = true;
            }
            "id" => self.last_id = Some(value.to_owned()),
            _ => tracing::trace!(field, "ignoring unknown stream field"),
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let event = self.event.take();
        if !std::mem::take(&mut self.has_data) {
            // An `event:` line alone still names a dispatch (the stream's `end` marker).
            return event.map(|event| SseEvent {
                event,
                data: String::new(),
                id: self.last_id.clone(),
            });
        }
        Some(SseEvent {
            event: event.unwrap_or_else(|| DEFAULT_EVENT.to_owned()),
            data: std::mem::take(&mut self.data),
            id: self.last_id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrontierEdge {
    pub from: String,
    pub to: String,
}

impl FrontierEdge {
    /// Dedup key of the edge, `{from}-{to}`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

#[derive(Debug, Deserialize)]
struct FrontierUpdate {
    #[serde(default)]
    nodes: Vec<FrontierNode>,
    #[serde(default)]
    edges: Vec<FrontierEdge>,
}

/// Typed view of the frontier stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierEvent {
    Update { nodes: Vec<FrontierNode>, edges: Vec<FrontierEdge> },
    End,
}

impl FrontierEvent {
    /// `Ok(None)` for event types the frontier view does not consume.
    pub fn from_sse(event: &SseEvent) -> Result<Option<Self>, FormatError> {
        match event.event.as_str() {
            "end" => Ok(Some(Self::End)),
            DEFAULT_EVENT | "update" => {
                let update = serde_json::from_str::<FrontierUpdate>(&event.data).map_err(
                    |source| FormatError::Event { event: event.event.clone(), source },
                )?;
                Ok(Some(Self::Update { nodes: update.nodes, edges: update.edges }))
            }
            other => {
                tracing::debug!(event = other, "skipping unknown stream event");
                Ok(None)
            }
        }
    }
}
