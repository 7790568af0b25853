//! Application state for the OB compensation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigProvider;

/// Shared application state.
///
/// Holds the configuration provider that resolves per-tenant settings for
/// incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// The tenant configuration provider.
    provider: Arc<dyn ConfigProvider>,
}

impl AppState {
    /// Creates a new application state with the given configuration provider.
    pub fn new(provider: impl ConfigProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Returns a reference to the configuration provider.
    pub fn provider(&self) -> &dyn ConfigProvider {
        self.provider.as_ref()
    }
}
