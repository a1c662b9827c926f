//! Section runtime: the state a mounted section holds and the timers it owns.
//!
//! - [`Section`]: loading flag plus resolved value, filled by one fetch per mount
//!   and refreshed by live updates. Results arriving after unmount are discarded.
//! - [`carousel`]: index cycling shared by every carousel.
//! - [`slideshow`]: the self-advancing hero slideshow.
//! - [`ticker`]: the auto-scrolling logo strip.
//!
//! Timers are held as [`ScopedTask`]s, which abort their task when dropped.

pub mod carousel;
pub mod slideshow;
pub mod ticker;

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::live::LiveUpdates;

pub use carousel::{next_index, prev_index, Carousel};
pub use slideshow::{HeroSlideshow, Slideshow, SlideshowState, SLIDE_INTERVAL};
pub use ticker::{tripled, LogoStrip, LogoTicker, FRAME_INTERVAL};

/// A spawned task that is aborted when this handle is dropped.
pub struct ScopedTask(JoinHandle<()>);

impl ScopedTask {
    pub fn spawn<F>(task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self(tokio::spawn(task))
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionState<T> {
    pub value: T,
    pub loading: bool,
    pub mounted: bool,
}

/// A mounted section's local state.
pub struct Section<T> {
    state: Arc<watch::Sender<SectionState<T>>>,
}

fn apply<T>(state: &watch::Sender<SectionState<T>>, value: T) {
    let applied = state.send_if_modified(|s| {
        if !s.mounted {
            return false;
        }
        s.value = value;
        s.loading = false;
        true
    });
    if !applied {
        debug!("Discarding result for unmounted section");
    }
}

impl<T> Section<T>
where
    T: Default + Clone + Send + Sync + 'static,
{
    /// Mounts the section and starts its single load. Must be called inside a
    /// Tokio runtime.
    pub fn mount<F>(load: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, _) = watch::channel(SectionState {
            value: T::default(),
            loading: true,
            mounted: true,
        });
        let state = Arc::new(tx);
        let target = Arc::clone(&state);
        tokio::spawn(async move {
            let value = load.await;
            apply(&target, value);
        });
        Self { state }
    }

    /// Re-runs `fetch` on every entry change signalled through `live`.
    pub fn subscribe<F, Fut>(&self, live: &LiveUpdates, fetch: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let state = Arc::downgrade(&self.state);
        let runtime = Handle::current();
        live.on_entry_change(move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            if !state.borrow().mounted {
                return;
            }
            let refresh = fetch();
            runtime.spawn(async move {
                let value = refresh.await;
                apply(&state, value);
            });
        });
    }

    pub fn snapshot(&self) -> SectionState<T> {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Receiver that observes every applied update.
    pub fn watch(&self) -> watch::Receiver<SectionState<T>> {
        self.state.subscribe()
    }

    /// Waits for the initial load to finish (or for unmount) and returns the value.
    pub async fn loaded(&self) -> T {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let value = match rx.wait_for(|s| !s.loading || !s.mounted).await {
            Ok(state) => state.value.clone(),
            Err(_) => self.snapshot().value,
        };
        value
    }

    /// Stops accepting results. In-flight fetches run to completion but are ignored.
    pub fn unmount(&self) {
        self.state.send_modify(|s| s.mounted = false);
    }
}

impl<T> Drop for Section<T> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.mounted = false);
    }
}
