//! Shared application state.

use aeai_cms::{CmsClient, CmsConfig};
use aeai_core::Result;

/// State shared by all request handlers.
///
/// Cloned per request by the router; the inner HTTP client is reference
/// counted, so clones are cheap. There is no mutable state — every request
/// fetches, renders, and discards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the headless CMS.
    pub cms: CmsClient,
}

impl AppState {
    /// Build state from CMS connection settings.
    pub fn new(cms_config: CmsConfig) -> Result<Self> {
        Ok(Self {
            cms: CmsClient::new(cms_config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builds_and_clones() {
        let state = AppState::new(CmsConfig::default()).unwrap();
        let _clone = state.clone();
    }
}
