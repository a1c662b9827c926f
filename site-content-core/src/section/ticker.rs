//! Logo strip ticker: an endlessly scrolling track built from three copies of
//! the logo list.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use super::ScopedTask;
use crate::model::CompanyLogo;

/// One display refresh at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const SCROLL_STEP_PX: f64 = 1.0;
pub const LOGO_WIDTH_PX: f64 = 200.0;

/// The logo list repeated three times, order preserved.
pub fn tripled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut track = Vec::with_capacity(items.len() * 3);
    for _ in 0..3 {
        track.extend_from_slice(items);
    }
    track
}

#[derive(Debug, Clone)]
pub struct LogoTicker {
    track: Vec<CompanyLogo>,
    item_width: f64,
    step: f64,
    offset: f64,
}

impl LogoTicker {
    pub fn new(logos: &[CompanyLogo]) -> Self {
        Self::with_metrics(logos, LOGO_WIDTH_PX, SCROLL_STEP_PX)
    }

    pub fn with_metrics(logos: &[CompanyLogo], item_width: f64, step: f64) -> Self {
        Self {
            track: tripled(logos),
            item_width,
            step,
            offset: 0.0,
        }
    }

    pub fn track(&self) -> &[CompanyLogo] {
        &self.track
    }

    pub fn track_width(&self) -> f64 {
        self.item_width * self.track.len() as f64
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advances one frame and returns the new offset. Wraps to zero once half
    /// of the track has scrolled by.
    pub fn tick(&mut self) -> f64 {
        if self.track.is_empty() {
            return self.offset;
        }
        self.offset += self.step;
        if self.offset >= self.track_width() / 2.0 {
            self.offset = 0.0;
        }
        self.offset
    }
}

/// A ticker advanced on every frame while the strip is alive.
pub struct LogoStrip {
    ticker: Arc<Mutex<LogoTicker>>,
    frames: Option<ScopedTask>,
}

impl LogoStrip {
    /// Must be called inside a Tokio runtime.
    pub fn start(logos: &[CompanyLogo]) -> Self {
        Self::start_with(LogoTicker::new(logos), FRAME_INTERVAL)
    }

    pub fn start_with(ticker: LogoTicker, frame: Duration) -> Self {
        let animate = !ticker.track().is_empty();
        let ticker = Arc::new(Mutex::new(ticker));
        let frames = animate.then(|| {
            let ticker = Arc::downgrade(&ticker);
            ScopedTask::spawn(async move {
                let mut frames = time::interval(frame);
                frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    frames.tick().await;
                    let Some(ticker) = ticker.upgrade() else { break };
                    ticker.lock().unwrap_or_else(PoisonError::into_inner).tick();
                }
            })
        });
        Self {
            ticker,
            frames,
        }
    }

    pub fn offset(&self) -> f64 {
        self.ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .offset()
    }

    pub fn is_animating(&self) -> bool {
        self.frames.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(name: &str) -> CompanyLogo {
        CompanyLogo {
            company_name: name.to_string(),
            logo_url: None,
            company_url: None,
            display_order: 0,
        }
    }

    #[test]
    fn track_is_three_ordered_copies() {
        let names: Vec<_> = tripled(&[logo("a"), logo("b")])
            .into_iter()
            .map(|l| l.company_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "a", "b", "a", "b"]);
    }

    #[test]
    fn offset_wraps_at_half_the_track() {
        // 2 logos * 3 copies * 10px = 60px track, wraps at 30px.
        let mut ticker = LogoTicker::with_metrics(&[logo("a"), logo("b")], 10.0, 10.0);
        assert_eq!(ticker.tick(), 10.0);
        assert_eq!(ticker.tick(), 20.0);
        assert_eq!(ticker.tick(), 0.0);
        assert_eq!(ticker.tick(), 10.0);
    }

    #[test]
    fn empty_track_stays_put() {
        let mut ticker = LogoTicker::new(&[]);
        assert_eq!(ticker.tick(), 0.0);
        assert_eq!(ticker.track_width(), 0.0);
    }
}
