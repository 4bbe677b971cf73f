//! Command transports.
//!
//! The codec never talks to the network. A [`Transport`] takes the ordered
//! command tokens and hands back the raw [`Reply`] or the engine's error text.
//!
//! - [`RedisTransport`]: `redis` crate connection manager
//! - [`ScriptedTransport`]: in-process double that records commands and replays canned replies

pub mod memory;
pub mod redis;
pub mod traits;

pub use self::memory::ScriptedTransport;
pub use self::redis::RedisTransport;
pub use self::traits::{Reply, Transport, TransportError};
