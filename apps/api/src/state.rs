use std::sync::Arc;

use crate::careers::catalog::CareerCatalog;
use crate::llm_client::Assistant;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only career tables, built once at startup.
    pub catalog: Arc<CareerCatalog>,
    /// Chat backend. Default: `HfInferenceClient`.
    pub assistant: Arc<dyn Assistant>,
}
