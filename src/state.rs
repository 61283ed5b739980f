use std::sync::Arc;

use crate::api::ContentSource;

/// Shared application state. The content source is behind the trait so the
/// router can be exercised against an in-memory source in tests.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    /// Where the hosted authoring studio lives; `/studio` redirects there.
    pub studio_url: String,
}

impl AppState {
    pub fn new(source: Arc<dyn ContentSource>, studio_url: impl Into<String>) -> Self {
        Self {
            source,
            studio_url: studio_url.into(),
        }
    }
}
