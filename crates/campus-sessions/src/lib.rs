//! # campus-sessions
//!
//! In-memory session lifecycle for the Campus agent service.
//!
//! [`SessionStore`] owns the existence of [`Session`] objects keyed by
//! [`campus_core::ids::SessionKey`] — create, fetch, delete — and knows
//! nothing about conversation semantics. Sessions are volatile: they live
//! for the lifetime of the process and are gone on restart.
//!
//! ## Crate Position
//!
//! Depends only on `campus-core`. Used by `campus-runtime` (existence
//! checks) and `campus-server` (lifecycle endpoints).

#![deny(unsafe_code)]

pub mod store;

pub use store::{Session, SessionStore};
