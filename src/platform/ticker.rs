//! Tick sources: "call me back on the next frame"
//!
//! The simulation never owns a clock. A host hands the session something that
//! implements `TickSource`; the session asks for one tick at a time and
//! cancels the outstanding request when it no longer needs it.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::consts::{FRAME_RATE, MAX_SUBSTEPS};

/// Identifies one requested tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// One-shot frame callback scheduler
pub trait TickSource {
    /// Schedule a single callback for the next frame
    fn request_tick(&mut self) -> TickHandle;
    /// Drop a scheduled callback. Unknown handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn request_tick(&mut self) -> TickHandle {
        (**self).request_tick()
    }

    fn cancel(&mut self, handle: TickHandle) {
        (**self).cancel(handle)
    }
}

/// Shared bookkeeping for handle allocation and the pending queue
#[derive(Debug, Default)]
struct PendingTicks {
    next_id: u64,
    queue: VecDeque<TickHandle>,
}

impl PendingTicks {
    fn request(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.queue.push_back(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.queue.retain(|h| *h != handle);
    }
}

/// Ticks delivered on demand, for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualTicks {
    pending: PendingTicks,
    cancelled: u64,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest scheduled tick
    pub fn next_due(&mut self) -> Option<TickHandle> {
        self.pending.queue.pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.queue.len()
    }

    /// Number of cancel calls that removed a scheduled tick
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl TickSource for ManualTicks {
    fn request_tick(&mut self) -> TickHandle {
        self.pending.request()
    }

    fn cancel(&mut self, handle: TickHandle) {
        let before = self.pending.queue.len();
        self.pending.cancel(handle);
        if self.pending.queue.len() < before {
            self.cancelled += 1;
        }
    }
}

/// Fixed-rate wall clock with an accumulator
///
/// Time passed in through `advance` is banked while a tick is pending; each
/// `take_due` spends one frame interval on one scheduled tick. Call `reset`
/// when arming after an idle period so the gap is not replayed.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    accumulator: Duration,
    last: Option<Instant>,
    pending: PendingTicks,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::with_rate(FRAME_RATE)
    }
}

impl FrameClock {
    /// Clock firing `rate` times per second (minimum 1)
    pub fn with_rate(rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / rate.max(1),
            accumulator: Duration::ZERO,
            last: None,
            pending: PendingTicks::default(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Restart timing from `now` with an empty bank
    pub fn reset(&mut self, now: Instant) {
        self.last = Some(now);
        self.accumulator = Duration::ZERO;
    }

    /// Bank the time elapsed since the previous call
    pub fn advance(&mut self, now: Instant) {
        let elapsed = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);

        if self.pending.queue.is_empty() {
            self.accumulator = Duration::ZERO;
            return;
        }

        // Cap the backlog so a stalled host doesn't replay seconds of flight
        let cap = self.interval * MAX_SUBSTEPS;
        self.accumulator = (self.accumulator + elapsed).min(cap);
    }

    /// Next scheduled tick whose frame has elapsed
    pub fn take_due(&mut self) -> Option<TickHandle> {
        if self.accumulator < self.interval {
            return None;
        }
        let handle = self.pending.queue.pop_front()?;
        self.accumulator -= self.interval;
        Some(handle)
    }

    /// Time until the next scheduled tick is due, `None` when nothing is scheduled
    pub fn time_until_due(&self) -> Option<Duration> {
        if self.pending.queue.is_empty() {
            return None;
        }
        Some(self.interval.saturating_sub(self.accumulator))
    }

    pub fn pending_len(&self) -> usize {
        self.pending.queue.len()
    }
}

impl TickSource for FrameClock {
    fn request_tick(&mut self) -> TickHandle {
        self.pending.request()
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.cancel(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ticks_fifo_and_cancel() {
        let mut ticks = ManualTicks::new();
        let a = ticks.request_tick();
        let b = ticks.request_tick();
        assert_ne!(a, b);
        ticks.cancel(a);
        assert_eq!(ticks.cancelled(), 1);
        // Cancelling twice is harmless
        ticks.cancel(a);
        assert_eq!(ticks.cancelled(), 1);
        assert_eq!(ticks.next_due(), Some(b));
        assert_eq!(ticks.next_due(), None);
    }

    #[test]
    fn test_frame_clock_waits_for_interval() {
        let mut clock = FrameClock::with_rate(50);
        let t0 = Instant::now();
        clock.advance(t0);
        let h = clock.request_tick();

        clock.advance(t0 + Duration::from_millis(10));
        assert_eq!(clock.take_due(), None);
        assert_eq!(clock.time_until_due(), Some(Duration::from_millis(10)));

        clock.advance(t0 + Duration::from_millis(20));
        assert_eq!(clock.take_due(), Some(h));
        assert_eq!(clock.time_until_due(), None);
    }

    #[test]
    fn test_frame_clock_caps_backlog() {
        let mut clock = FrameClock::with_rate(100);
        let t0 = Instant::now();
        clock.advance(t0);
        clock.request_tick();
        clock.advance(t0 + Duration::from_secs(5));

        let mut delivered = 0;
        while clock.take_due().is_some() {
            delivered += 1;
            clock.request_tick();
        }
        assert_eq!(delivered, MAX_SUBSTEPS);
    }

    #[test]
    fn test_frame_clock_does_not_bank_idle_time() {
        let mut clock = FrameClock::with_rate(100);
        let t0 = Instant::now();
        clock.advance(t0);
        clock.advance(t0 + Duration::from_secs(1));
        clock.request_tick();
        assert_eq!(clock.take_due(), None);
    }

    #[test]
    fn test_frame_clock_reset_drops_gap() {
        let mut clock = FrameClock::with_rate(100);
        let t0 = Instant::now();
        clock.advance(t0);
        clock.request_tick();
        clock.reset(t0 + Duration::from_secs(2));
        clock.advance(t0 + Duration::from_secs(2) + Duration::from_millis(5));
        assert_eq!(clock.take_due(), None);
        assert_eq!(clock.time_until_due(), Some(Duration::from_millis(5)));
    }

    #[test]
    fn test_frame_clock_cancel() {
        let mut clock = FrameClock::with_rate(100);
        let t0 = Instant::now();
        clock.advance(t0);
        let h = clock.request_tick();
        clock.cancel(h);
        clock.advance(t0 + Duration::from_millis(50));
        assert_eq!(clock.take_due(), None);
        assert_eq!(clock.pending_len(), 0);
    }
}
