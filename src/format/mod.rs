// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire formats of the search backend.
//!
//! [`search`] covers the request/response contract of a recipe search, [`sse`] the event stream
//! that reports the search frontier while it expands.

pub mod search;
pub mod sse;

pub use search::{
    parse_search_response, SearchMode, SearchOutcome, SearchRequest, SearchResponse, SearchResult,
    SearchTarget,
};
pub use sse::{FrontierEdge, FrontierEvent, FrontierNode, SseDecoder, SseEvent};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("unknown search mode {0:?} (expected bfs, dfs, bidirectional or multi)")]
    UnknownMode(String),
    #[error("search backend answered with HTTP status {status}")]
    HttpStatus { status: u16 },
    #[error("malformed search response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed {event:?} stream event: {source}")]
    Event {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}
