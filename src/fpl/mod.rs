//! FPL Draft API layer: HTTP client, in-memory response cache, payload
//! models, and gameweek snapshot assembly.

pub mod cache;
pub mod http;
pub mod snapshot;
pub mod types;
