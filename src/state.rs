//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ResolverService;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolverService>,
}

impl AppState {
    pub fn new(resolver: Arc<ResolverService>) -> Self {
        Self { resolver }
    }
}
