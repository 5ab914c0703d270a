/// Shared token store
///
/// The store is the single source of truth for the current session token.
/// Every client instance consults it on every call; nothing caches the token
/// in process memory across calls, so instances sharing one store coordinate
/// and avoid duplicate logins.

pub mod memory;

use std::future::Future;

/// Fixed logical key under which the session token is stored.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    /// Whether a live (non-expired) entry exists under `key`.
    fn exists(&self, key: &str) -> impl Future<Output = bool> + Send;

    /// Live entry value, or `None` when absent or expired.
    fn get(&self, key: &str) -> impl Future<Output = Option<String>> + Send;

    /// Store `value` under `key` for `ttl_seconds`. Overwrites unconditionally.
    fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> impl Future<Output = ()> + Send;

    /// Seconds until the live entry under `key` expires, `None` when absent.
    fn ttl(&self, key: &str) -> impl Future<Output = Option<i64>> + Send;
}
