//! Host bridge: wire types, outbound intent signalling, and the inbound
//! entry points the embedding shell calls into.

pub mod bridge;
pub mod inbound;
pub mod intent;
pub mod types;
