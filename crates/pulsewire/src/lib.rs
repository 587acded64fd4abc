//! Top-level facade crate for pulsewire.
//!
//! Re-exports the protocol core and the client library so users can depend
//! on a single crate.

pub mod core {
    pub use pulsewire_core::*;
}

pub mod client {
    pub use pulsewire_client::*;
}
