//! Frame pacing.

use std::thread;
use std::time::Duration;
use std::time::Instant;

/// Keeps the game loop running at a fixed frame rate.
///
/// Each call to [`tick()`](Self::tick) sleeps until the next frame is due.
/// Deadlines follow on from the previous deadline, not from the call; a frame
/// that overruns its slot pushes the schedule back.
pub struct FramePacer {
  frame_len: Option<Duration>,
  deadline: Instant,
  frames: u64,

  fps: f64,
  window_start: Instant,
  window_frames: u64,
}

impl FramePacer {
  /// Creates a new `FramePacer` targeting `frame_rate` frames per second.
  ///
  /// A `frame_rate` of zero never sleeps.
  pub fn new(frame_rate: u32) -> Self {
    let now = Instant::now();
    Self {
      frame_len: match frame_rate {
        0 => None,
        n => Some(Duration::from_secs(1) / n),
      },
      deadline: now,
      frames: 0,
      fps: 0.0,
      window_start: now,
      window_frames: 0,
    }
  }

  /// Returns the number of frames ticked so far.
  pub fn frames(&self) -> u64 {
    self.frames
  }

  /// Returns the observed frame rate, averaged over windows of at least
  /// `window`.
  ///
  /// The value is only recomputed once a window has elapsed.
  pub fn fps(&mut self, window: Duration) -> f64 {
    let elapsed = self.window_start.elapsed();
    if elapsed >= window && elapsed > Duration::default() {
      self.fps = self.window_frames as f64 / elapsed.as_secs_f64();
      self.window_start = Instant::now();
      self.window_frames = 0;
    }
    self.fps
  }

  /// Ends the current frame, sleeping until the next one is due.
  pub fn tick(&mut self) {
    if let Some(frame_len) = self.frame_len {
      let now = Instant::now();
      self.deadline = self.deadline.max(now) + frame_len;
      if let Some(left) = self.deadline.checked_duration_since(now) {
        thread::sleep(left);
      }
    }
    self.frames += 1;
    self.window_frames += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tick_counts_and_waits() {
    let mut pacer = FramePacer::new(50);
    let start = Instant::now();
    pacer.tick();
    pacer.tick();
    assert_eq!(pacer.frames(), 2);
    assert!(start.elapsed() >= Duration::from_millis(40));
  }

  #[test]
  fn test_unpaced_never_sleeps() {
    let mut pacer = FramePacer::new(0);
    let start = Instant::now();
    for _ in 0..1000 {
      pacer.tick();
    }
    assert_eq!(pacer.frames(), 1000);
    assert!(start.elapsed() < Duration::from_secs(1));
  }

  #[test]
  fn test_fps_is_cached_within_a_window() {
    let mut pacer = FramePacer::new(0);
    pacer.tick();
    assert_eq!(pacer.fps(Duration::from_secs(3600)), 0.0);
    thread::sleep(Duration::from_millis(1));
    assert!(pacer.fps(Duration::from_millis(1)) > 0.0);
  }
}
