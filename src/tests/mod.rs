#[cfg(test)]
pub mod common;

mod provider_calls;
