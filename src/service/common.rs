//! Shared helpers for the generation API client

use anyhow::anyhow;

/// Map common authentication errors to consistent error messages
pub fn map_auth_error(status: u16, provider: &str) -> Option<anyhow::Error> {
    match status {
        401 => Some(anyhow!("{} API key invalid or expired", provider)),
        403 => Some(anyhow!(
            "{} access denied, API key may be disabled",
            provider
        )),
        _ => None,
    }
}
