//! pulsewire core: transport-agnostic protocol primitives and error types.
//!
//! This crate defines the wire envelope, the close-code classification
//! tables, and the error surface shared by the client crates. It carries no
//! transport or runtime dependencies so it can be reused against any
//! WebSocket-like channel.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PulsewireError`/`Result` so a hostile
//! or buggy server cannot crash the client process with malformed frames.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{PulsewireError, Result};
