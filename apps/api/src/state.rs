use std::sync::Arc;

use crate::config::Config;
use crate::data::DataContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Rent and job tables, loaded once at startup and never mutated.
    pub data: Arc<DataContext>,
    pub config: Config,
}
