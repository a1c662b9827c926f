//! Hero slideshow: a carousel that advances itself every few seconds unless paused.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::debug;

use super::carousel::Carousel;
use super::ScopedTask;
use crate::model::HeroSlide;

pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowState {
    /// Nothing to show.
    Idle,
    Running,
    Paused,
}

/// Timer-free slideshow state machine.
#[derive(Debug, Clone)]
pub struct Slideshow<T> {
    carousel: Carousel<T>,
    paused: bool,
}

impl<T> Default for Slideshow<T> {
    fn default() -> Self {
        Self {
            carousel: Carousel::default(),
            paused: false,
        }
    }
}

impl<T> Slideshow<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            carousel: Carousel::new(items),
            paused: false,
        }
    }

    pub fn state(&self) -> SlideshowState {
        if self.carousel.is_empty() {
            SlideshowState::Idle
        } else if self.paused {
            SlideshowState::Paused
        } else {
            SlideshowState::Running
        }
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn load(&mut self, items: Vec<T>) {
        self.carousel.set_items(items);
    }

    /// Flips the pause flag. The index is left alone.
    pub fn toggle_pause(&mut self) -> SlideshowState {
        self.paused = !self.paused;
        self.state()
    }

    /// Timer tick: advances only while running.
    pub fn tick(&mut self) -> Option<usize> {
        match self.state() {
            SlideshowState::Running => self.carousel.next(),
            SlideshowState::Idle | SlideshowState::Paused => None,
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        self.carousel.next()
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.carousel.prev()
    }

    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        self.carousel.go_to(index)
    }
}

/// A slideshow driven by a Tokio interval.
///
/// The timer exists only while the state is [`SlideshowState::Running`]; it is
/// dropped (and its task aborted) on pause, when the slides become empty and
/// when the slideshow itself is dropped.
pub struct HeroSlideshow {
    show: Arc<Mutex<Slideshow<HeroSlide>>>,
    period: Duration,
    timer: Option<ScopedTask>,
}

impl HeroSlideshow {
    /// Must be called inside a Tokio runtime.
    pub fn new(slides: Vec<HeroSlide>) -> Self {
        Self::with_period(slides, SLIDE_INTERVAL)
    }

    pub fn with_period(slides: Vec<HeroSlide>, period: Duration) -> Self {
        let mut slideshow = Self {
            show: Arc::new(Mutex::new(Slideshow::new(slides))),
            period,
            timer: None,
        };
        slideshow.restart_timer();
        slideshow
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slideshow<HeroSlide>> {
        self.show.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> SlideshowState {
        self.lock().state()
    }

    pub fn index(&self) -> usize {
        self.lock().index()
    }

    pub fn current(&self) -> Option<HeroSlide> {
        self.lock().carousel().current().cloned()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Replaces the slides and recreates the timer for the new list.
    pub fn load(&mut self, slides: Vec<HeroSlide>) {
        self.lock().load(slides);
        self.restart_timer();
    }

    pub fn toggle_pause(&mut self) -> SlideshowState {
        let state = self.lock().toggle_pause();
        self.restart_timer();
        state
    }

    pub fn next(&self) -> Option<usize> {
        self.lock().next()
    }

    pub fn prev(&self) -> Option<usize> {
        self.lock().prev()
    }

    pub fn go_to(&self, index: usize) -> Option<usize> {
        self.lock().go_to(index)
    }

    fn restart_timer(&mut self) {
        // Old timer goes first on every path.
        self.timer = None;
        if self.state() != SlideshowState::Running {
            return;
        }
        let show = Arc::downgrade(&self.show);
        let period = self.period;
        self.timer = Some(ScopedTask::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let Some(show) = show.upgrade() else { break };
                let advanced = show.lock().unwrap_or_else(PoisonError::into_inner).tick();
                debug!(index = ?advanced, "Slideshow advanced");
            }
        }));
    }
}
