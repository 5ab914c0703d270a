/// ================================
/// Provider settings
/// ================================
///
/// Everything here is an opaque string forwarded to the provider; the binary
/// fills it from environment-backed CLI arguments. One parameterized set of
/// settings serves every environment; test and production differ only in
/// configuration, never in code paths.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Provider API root, e.g. `https://testonline.atol.ru/possystem/v4`.
    pub base_url: String,
    pub login: String,
    pub password: String,
    /// Provider-assigned code scoping receipt endpoints to one register point.
    pub group_code: String,
    /// Company tax id placed into receipt documents.
    pub inn: String,
    /// Registered shop / payment address placed into receipt documents.
    pub payment_address: String,
    /// Company notification email placed into receipt documents.
    pub company_email: String,
    /// URL the provider calls back with the fiscalization result.
    pub callback_url: String,
}

impl Settings {
    /// Join `path` onto the base URL regardless of a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
