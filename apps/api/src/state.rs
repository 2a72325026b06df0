use std::sync::Arc;

use crate::analysis::fallback::FallbackSelector;
use crate::config::Config;
use crate::gemini::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text generator. Default: GeminiClient. Tests inject stubs.
    pub generator: Arc<dyn TextGenerator>,
    /// Pluggable fallback selector. Default: RandomFallbackSelector.
    pub fallback: Arc<dyn FallbackSelector>,
}
