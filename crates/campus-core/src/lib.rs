//! # campus-core
//!
//! Foundation types for the Campus agent service.
//!
//! This crate provides the shared vocabulary the other campus crates depend on:
//!
//! - **Identity**: [`ids::SessionKey`] — the (app, user, session) triple
//! - **Messages**: [`messages::Utterance`] with a [`messages::Role`] tag
//! - **Events**: [`events::AgentEvent`] produced during a turn, and the
//!   reduced [`events::TurnResult`]
//! - **Errors**: [`errors::SessionError`], [`errors::TurnError`],
//!   [`errors::AgentError`] via `thiserror`
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other campus crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod events;
pub mod ids;
pub mod messages;
