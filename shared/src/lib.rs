//! Wire contract of the events API: request and response bodies as they
//! appear on the wire (JSON, camelCase).

pub mod protocol;

pub use protocol::*;
