//! Fixed-rate frame clock.
//!
//! The main loop runs at a fixed tick rate. [`FrameClock`] tracks the next
//! deadline so the event loop can sleep until it, counts frames, and keeps a
//! periodically refreshed FPS figure for logging.
//!
//! # Example
//!
//! ```ignore
//! use coffee_steam::time::FrameClock;
//! use std::time::Instant;
//!
//! let mut clock = FrameClock::new(30);
//! loop {
//!     let now = Instant::now();
//!     if clock.is_due(now) {
//!         clock.tick(now);
//!         // advance and draw
//!     }
//!     std::thread::sleep(clock.next_deadline().saturating_duration_since(Instant::now()));
//! }
//! ```

use std::time::{Duration, Instant};

/// Deadline-based clock for a fixed frame rate.
#[derive(Debug)]
pub struct FrameClock {
    /// Time between frames.
    interval: Duration,
    /// When the next frame is due.
    next_deadline: Instant,
    /// Total frames ticked.
    frame_count: u64,
    /// Measured frames per second.
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to refresh the FPS figure.
    fps_update_interval: Duration,
}

impl FrameClock {
    /// Clock ticking `rate` times per second, with the first frame due now.
    pub fn new(rate: u32) -> Self {
        Self::starting_at(rate, Instant::now())
    }

    /// Clock whose first frame is due at `start`.
    pub fn starting_at(rate: u32, start: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / rate.max(1),
            next_deadline: start,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: start,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Whether a frame should run at `now`.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// When the next frame is due.
    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Time between frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total frames ticked.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Record a frame at `now` and schedule the next one.
    ///
    /// Deadlines advance by whole intervals so the rate does not drift. If the
    /// loop fell more than one interval behind, the schedule restarts from
    /// `now` instead of bursting to catch up.
    ///
    /// Returns `true` when the FPS figure was refreshed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.frame_count += 1;

        self.next_deadline += self.interval;
        if self.next_deadline <= now {
            self.next_deadline = now + self.interval;
        }

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return true;
        }
        false
    }
}
