//! # KKT Client Library
//!
//! Client for an ATOL Online style fiscal receipt provider (protocol v4):
//! authorizes against the provider, caches the session token in a shared
//! TTL store, and issues sell / report requests with the token attached.
//!
//! Modules:
//! - `config` — provider settings
//! - `store` — shared token store with TTL semantics
//! - `auth` — authorization token lifecycle manager
//! - `client` — fiscal API client (sell, report)
//! - `receipt` — typed receipt payload

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod receipt;
pub mod store;
pub mod tests;
pub mod utils;

pub use crate::client::KktClient;
pub use crate::config::settings::Settings;
pub use crate::error::Error;
pub use crate::store::memory::MemoryStore;
pub use crate::store::TokenStore;
