//! Protocol modules (envelope codec, close-code classification, handshake).
//!
//! Everything here is a pure function over wire data: no instance state, no
//! I/O, no clocks. All parsers are panic-free; malformed input is reported
//! as `PulsewireError` instead of panicking, keeping the client resilient to
//! whatever the server puts on the wire.

pub mod close;
pub mod envelope;
pub mod handshake;
