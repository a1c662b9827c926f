use std::sync::Arc;

use crate::config::StackConfig;
use crate::contract::ContentSource;
use crate::live::LiveUpdates;
use crate::resolve::ContentResolver;

/// Process-wide content state: one source handle and one live-update registry,
/// created once at startup and handed to whatever needs them.
pub struct Site<S: ?Sized> {
    pub resolver: ContentResolver<S>,
    pub live: Arc<LiveUpdates>,
}

impl<S> Site<S>
where
    S: ContentSource + ?Sized,
{
    /// Live updates are enabled exactly when `config` carries preview credentials.
    pub fn init(config: &StackConfig, source: Arc<S>) -> Self {
        config.trace_loaded();
        Self {
            resolver: ContentResolver::new(source),
            live: LiveUpdates::init(config.live_preview_enabled()),
        }
    }
}
