use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Threshold at or below which the remaining time is considered "running
/// low" for display purposes.
pub const RUNNING_LOW_SECONDS: u32 = 10;

/// Hands out per-question countdowns with monotonically increasing
/// generation numbers.
///
/// The generation is the stale-fire guard: a consumer remembers the
/// generation of the countdown it is currently driving and ignores timeout
/// callbacks carrying any other value. Cancellation alone already prevents
/// the common case; the generation makes the identity check explicit and
/// testable.
#[derive(Debug)]
pub struct CountdownTimer {
    next_generation: AtomicU64,
}

impl CountdownTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_generation: AtomicU64::new(1),
        }
    }

    /// Starts a fresh countdown from `seconds` and returns its handle.
    ///
    /// The spawned task ticks once per second, publishes the remaining time
    /// through a watch channel, and invokes `on_timeout` with this
    /// countdown's generation exactly once when it reaches zero — unless
    /// [`TimerHandle::cancel`] ran first.
    pub fn start(
        &self,
        seconds: u32,
        on_timeout: impl FnOnce(u64) + Send + 'static,
    ) -> TimerHandle {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        TimerHandle::spawn(seconds, generation, on_timeout)
    }
}

/// A running countdown. Dropping the handle cancels the countdown, so a
/// torn-down screen leaks no ticking task.
#[derive(Debug)]
pub struct TimerHandle {
    generation: u64,
    initial_seconds: u32,
    cancelled: Arc<AtomicBool>,
    remaining_rx: watch::Receiver<u32>,
    task: JoinHandle<()>,
}

impl TimerHandle {
    fn spawn(seconds: u32, generation: u64, on_timeout: impl FnOnce(u64) + Send + 'static) -> Self {
        let (tx, remaining_rx) = watch::channel(seconds);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;

            let mut remaining = seconds;
            while remaining > 0 {
                interval.tick().await;
                if flag.load(Ordering::Acquire) {
                    return;
                }
                remaining -= 1;
                let _ = tx.send(remaining);
            }
            // Double-check right before firing: cancel() may have run while
            // the last tick was pending. Within the event loop there is no
            // suspension point between this check and the callback.
            if !flag.load(Ordering::Acquire) {
                on_timeout(generation);
            }
        });

        Self {
            generation,
            initial_seconds: seconds,
            cancelled,
            remaining_rx,
            task,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }

    /// Seconds still on the clock.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        *self.remaining_rx.borrow()
    }

    /// A receiver for the remaining-seconds stream, for display loops.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining_rx.clone()
    }

    /// Fraction of the countdown still left, in `[0, 1]`.
    #[must_use]
    pub fn fraction_remaining(&self) -> f64 {
        if self.initial_seconds == 0 {
            0.0
        } else {
            f64::from(self.remaining()) / f64::from(self.initial_seconds)
        }
    }

    #[must_use]
    pub fn is_running_low(&self) -> bool {
        let remaining = self.remaining();
        remaining > 0 && remaining <= RUNNING_LOW_SECONDS
    }

    /// Stops the countdown. Idempotent; after this call the timeout callback
    /// can no longer fire.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            debug!("countdown generation {} cancelled", self.generation);
        }
        self.task.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce(u64) + Send + 'static) {
        let fired = Arc::new(AtomicUsize::new(0));
        let clone = Arc::clone(&fired);
        (fired, move |_generation| {
            clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_decrements_by_one_per_tick_down_to_zero() {
        let timer = CountdownTimer::new();
        let (fired, on_timeout) = counter();
        let handle = timer.start(3, on_timeout);
        let mut rx = handle.subscribe();

        let mut seen = vec![*rx.borrow()];
        while *rx.borrow() > 0 {
            rx.changed().await.unwrap();
            seen.push(*rx.borrow());
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);

        // Give the task room to run past the final tick; the callback must
        // fire exactly once and the clock must not go below zero.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.remaining(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let timer = CountdownTimer::new();
        let (fired, on_timeout) = counter();
        let handle = timer.start(30, on_timeout);

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 29);

        handle.cancel();
        handle.cancel(); // idempotent

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_countdown() {
        let timer = CountdownTimer::new();
        let (fired, on_timeout) = counter();
        let handle = timer.start(5, on_timeout);
        drop(handle);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn generations_are_distinct_and_reported_to_the_callback() {
        let timer = CountdownTimer::new();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        let seen_a = Arc::clone(&seen);
        let a = timer.start(1, move |generation| {
            seen_a.lock().unwrap().push(generation);
        });
        let seen_b = Arc::clone(&seen);
        let b = timer.start(2, move |generation| {
            seen_b.lock().unwrap().push(generation);
        });
        assert_ne!(a.generation(), b.generation());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let seen = seen.lock().unwrap();
        assert!(seen.contains(&a.generation()));
        assert!(seen.contains(&b.generation()));
    }

    #[tokio::test(start_paused = true)]
    async fn running_low_threshold_tracks_the_clock() {
        let timer = CountdownTimer::new();
        let (_fired, on_timeout) = counter();
        let handle = timer.start(12, on_timeout);
        assert!(!handle.is_running_low());

        let mut rx = handle.subscribe();
        while *rx.borrow() > RUNNING_LOW_SECONDS {
            rx.changed().await.unwrap();
        }
        assert!(handle.is_running_low());
        assert!(handle.fraction_remaining() <= 10.0 / 12.0 + f64::EPSILON);
    }
}
