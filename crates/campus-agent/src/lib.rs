//! # campus-agent
//!
//! Gemini-backed implementation of the [`campus_runtime::Agent`] trait.
//!
//! One turn is one `generateContent` call over the session's accumulated
//! history plus the new utterance; the reply is recorded into the session
//! and surfaced as a single terminal event.
//!
//! Split follows the provider composition pattern: `gemini` (entry point)
//! and `types` (wire types).

#![deny(unsafe_code)]

pub mod gemini;
pub mod types;

pub use gemini::GeminiAgent;
pub use types::GeminiConfig;
