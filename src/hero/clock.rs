//! Frame scheduling.
//!
//! A [`FrameLoop`] pulls ticks from a [`FrameClock`] and runs one frame per
//! tick until the clock runs out or its [`StopHandle`] is triggered. Tests
//! drive it with a [`ManualClock`], which hands out a fixed number of ticks
//! without sleeping.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 60 Hz, the usual display refresh.
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Source of frame ticks.
pub trait FrameClock {
    /// Timestamp (ms) of the next frame, or `None` when no more frames come.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Fake clock: a fixed number of ticks at a fixed interval, no waiting.
#[derive(Debug, Clone)]
pub struct ManualClock {
    remaining: u64,
    interval_ms: f64,
    now_ms: f64,
}

impl ManualClock {
    pub fn new(frames: u64, interval_ms: f64) -> Self {
        Self {
            remaining: frames,
            interval_ms,
            now_ms: 0.0,
        }
    }

    /// `frames` ticks at 60 Hz.
    pub fn frames(frames: u64) -> Self {
        Self::new(frames, DEFAULT_FRAME_INTERVAL_MS)
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl FrameClock for ManualClock {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.now_ms += self.interval_ms;
        Some(self.now_ms)
    }
}

/// Cancels a running [`FrameLoop`]. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    stop: StopHandle,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frames run so far, across all calls to [`run`](Self::run).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run `on_frame` once per tick. The stop flag is checked before every
    /// tick is taken, so a frame that stops the loop is the last one.
    /// Returns the number of frames run by this call.
    pub fn run<C, F>(&mut self, clock: &mut C, mut on_frame: F) -> u64
    where
        C: FrameClock + ?Sized,
        F: FnMut(f64),
    {
        let mut ran = 0;
        while !self.stop.is_stopped() {
            let Some(now) = clock.next_frame() else {
                break;
            };
            on_frame(now);
            ran += 1;
        }
        self.frames += ran;
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_ticks_then_ends() {
        let mut clock = ManualClock::new(2, 10.0);
        assert_eq!(clock.next_frame(), Some(10.0));
        assert_eq!(clock.next_frame(), Some(20.0));
        assert_eq!(clock.next_frame(), None);
        assert_eq!(clock.now_ms(), 20.0);
    }

    #[test]
    fn loop_runs_one_frame_per_tick() {
        let mut frame_loop = FrameLoop::new();
        let mut stamps = Vec::new();
        let ran = frame_loop.run(&mut ManualClock::new(3, 5.0), |t| stamps.push(t));
        assert_eq!(ran, 3);
        assert_eq!(stamps, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn stop_handle_ends_loop_after_current_frame() {
        let mut frame_loop = FrameLoop::new();
        let handle = frame_loop.stop_handle();
        let mut count = 0;
        let ran = frame_loop.run(&mut ManualClock::frames(100), |_| {
            count += 1;
            if count == 4 {
                handle.stop();
            }
        });
        assert_eq!(ran, 4);
        assert!(frame_loop.stop_handle().is_stopped());
    }

    #[test]
    fn stopped_loop_runs_nothing() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.stop_handle().stop();
        assert_eq!(frame_loop.run(&mut ManualClock::frames(10), |_| {}), 0);
    }

    #[test]
    fn frame_total_accumulates() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.run(&mut ManualClock::frames(2), |_| {});
        frame_loop.run(&mut ManualClock::frames(3), |_| {});
        assert_eq!(frame_loop.frames(), 5);
    }
}
