//! # campus-runtime
//!
//! Turn execution for the Campus agent service.
//!
//! The [`agent::Agent`] trait is the seam to the reasoning engine: given a
//! session and a user utterance it produces a lazy, ordered, finite stream
//! of [`campus_core::events::AgentEvent`]s. The [`executor::TurnExecutor`]
//! validates session existence, drains that stream to exhaustion, and
//! reduces it to the single final answer returned to the caller.
//!
//! ## Crate Position
//!
//! Depends on `campus-core` and `campus-sessions`. The concrete agent lives
//! in `campus-agent`; the HTTP surface in `campus-server`.

#![deny(unsafe_code)]

pub mod agent;
pub mod executor;

pub use agent::{Agent, AgentEventStream};
pub use executor::TurnExecutor;
