//! Hero slideshow: a periodic timer advancing a wrapping image index.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Wrapping cursor over `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    index: usize,
    len: usize,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next slide, wrapping after the last. Empty shows stay at 0.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

/// Running slideshow timer. The timer is cleared on [`stop`](Self::stop) or drop.
pub struct SlideshowHandle {
    index_rx: watch::Receiver<usize>,
    task: Option<JoinHandle<()>>,
}

impl SlideshowHandle {
    /// Start ticking every `interval` over `len` slides.
    ///
    /// With fewer than two slides or a zero interval no timer is started and
    /// the index stays at 0. Must be called inside a tokio runtime.
    pub fn spawn(len: usize, interval: Duration) -> Self {
        let (index_tx, index_rx) = watch::channel(0);
        if len < 2 || interval.is_zero() {
            log::debug!("Slideshow idle (len={}, interval={:?})", len, interval);
            return Self { index_rx, task: None };
        }

        let task = tokio::spawn(async move {
            let mut show = Slideshow::new(len);
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let index = show.advance();
                if index_tx.send(index).is_err() {
                    break;
                }
            }
        });
        Self {
            index_rx,
            task: Some(task),
        }
    }

    /// Index currently on screen.
    pub fn current(&self) -> usize {
        *self.index_rx.borrow()
    }

    /// A receiver notified on every slide change.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Clear the timer. Idempotent.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("Slideshow stopped at index {}", self.current());
        }
    }
}

impl Drop for SlideshowHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps() {
        let mut show = Slideshow::new(3);
        assert_eq!(show.advance(), 1);
        assert_eq!(show.advance(), 2);
        assert_eq!(show.advance(), 0);
    }

    #[test]
    fn empty_show_stays_at_zero() {
        let mut show = Slideshow::new(0);
        assert_eq!(show.advance(), 0);
        assert_eq!(show.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn advances_once_per_interval() {
        let handle = SlideshowHandle::spawn(6, Duration::from_millis(5000));
        let mut rx = handle.subscribe();
        assert_eq!(handle.current(), 0);

        let start = tokio::time::Instant::now();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);
        assert!(start.elapsed() >= Duration::from_millis(5000));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 2);
        assert!(start.elapsed() >= Duration::from_millis(10000));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_clears_timer() {
        let mut handle = SlideshowHandle::spawn(3, Duration::from_millis(100));
        assert!(handle.is_running());
        handle.stop();
        assert!(!handle.is_running());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(handle.current(), 0);
        // Second stop is a no-op.
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn single_slide_never_starts_timer() {
        let handle = SlideshowHandle::spawn(1, Duration::from_millis(100));
        assert!(!handle.is_running());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(handle.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_is_idle() {
        let handle = SlideshowHandle::spawn(6, Duration::ZERO);
        assert!(!handle.is_running());
    }
}
