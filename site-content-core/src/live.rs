//! Live-update subscription.
//!
//! When a preview credential is configured the content service can signal that
//! an entry changed; every registered callback then runs so mounted sections
//! re-fetch. Without a preview credential the subscription is inert: callbacks
//! are accepted and dropped, notifications do nothing.
//!
//! The registry is append-only for the lifetime of the process and callbacks are
//! not filtered by content type.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// A change signalled by the content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryChange {
    pub content_type: String,
    /// Live-preview hash handed out by the editor, if any.
    pub preview_hash: Option<String>,
}

impl EntryChange {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            preview_hash: None,
        }
    }

    /// Parses a signal line of the form `<content_type_uid> [live_preview_hash]`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let content_type = parts.next()?.to_string();
        Some(Self {
            content_type,
            preview_hash: parts.next().map(str::to_string),
        })
    }
}

pub struct LiveUpdates {
    enabled: bool,
    callbacks: Mutex<Vec<ChangeCallback>>,
}

impl LiveUpdates {
    /// Builds the subscription. `preview_enabled` is true exactly when a
    /// preview token was configured.
    pub fn init(preview_enabled: bool) -> Arc<Self> {
        if preview_enabled {
            info!("Live preview initialised");
        } else {
            debug!("Live preview disabled: no preview token configured");
        }
        Arc::new(Self {
            enabled: preview_enabled,
            callbacks: Mutex::new(Vec::new()),
        })
    }

    pub fn disabled() -> Arc<Self> {
        Self::init(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Registers `callback` to run on every entry change. There is no unregister.
    pub fn on_entry_change<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if !self.enabled {
            return;
        }
        let mut callbacks = self.callbacks.lock().unwrap_or_else(PoisonError::into_inner);
        callbacks.push(Arc::new(callback));
        debug!(registered = callbacks.len(), "Registered entry change callback");
    }

    pub fn subscriber_count(&self) -> usize {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Runs every registered callback. Returns how many ran.
    pub fn notify_entry_change(&self, change: &EntryChange) -> usize {
        if !self.enabled {
            return 0;
        }
        // Snapshot so callbacks may register further callbacks without deadlocking.
        let callbacks: Vec<ChangeCallback> = self
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        info!(
            content_type = %change.content_type,
            callbacks = callbacks.len(),
            "Entry change received"
        );
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }
}
