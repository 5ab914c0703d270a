//! Shared constants and invariants

/// Tokens are stored with this TTL (24 hours), counted from write time.
pub const TOKEN_TTL_SECONDS: u64 = 60 * 60 * 24;

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

/// Header carrying the session token on provider calls.
pub const TOKEN_HEADER: &str = "Token";

pub const CONTENT_TYPE_JSON_UTF8: &str = "application/json; charset=utf-8";
