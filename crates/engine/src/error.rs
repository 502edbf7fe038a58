// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the dispatch engine

use chime_core::SpecError;
use thiserror::Error;

/// Errors that can occur while starting the dispatch loop
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid task spec: {0}")]
    Spec(#[from] SpecError),
}
