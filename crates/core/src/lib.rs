// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chime-core: cron field expansion and window scheduling
//!
//! This crate provides:
//! - Field expression classification and expansion (`field`)
//! - Cron line parsing and the aggregate matcher (`spec`)
//! - Minute-by-minute window scheduling (`window`)
//! - An injectable clock capability (`clock`)
//!
//! All calendar matching is done against UTC. Callers that want
//! local-time semantics convert at the boundary.

pub mod clock;
pub mod field;
pub mod spec;
pub mod window;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use field::{ExpandError, FieldExpr, FieldKind};
pub use spec::{SpecError, TaskSpec, TimeExpr, COMMAND_MAX_LEN};
pub use window::{build_window, TaskList};
