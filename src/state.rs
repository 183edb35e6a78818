//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::upstream::FactSource;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the immutable configuration and the fact source. Nothing in here is
/// mutated after startup, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub facts: Arc<dyn FactSource>,
}

impl AppState {
    /// Creates a new application state from the given configuration and fact source.
    pub fn new(config: AppConfig, facts: Arc<dyn FactSource>) -> Self {
        Self {
            config: Arc::new(config),
            facts,
        }
    }
}
