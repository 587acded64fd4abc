//! pulsewire client library entry.
//!
//! This crate wires the protocol core into a usable connection facade: a
//! transport capability trait, a typed event bus, and the `Connection`
//! translator that sits between them. It deliberately contains no socket
//! I/O: whoever owns the real channel implements [`Transport`] and feeds
//! [`TransportEvent`]s in.

pub mod connection;
pub mod events;
pub mod transport;

pub use connection::Connection;
pub use events::{ConnectionEvent, EventDispatcher, EventKind, ListenerId, MessageEvent};
pub use transport::{Transport, TransportEvent};
