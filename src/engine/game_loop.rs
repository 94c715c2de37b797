//! Frame timing and pause control
//!
//! The simulation is stepped once per rendered frame with the wall-clock
//! time since the previous frame. A single step is capped so a stall does
//! not teleport the actors.

use std::time::{Duration, Instant};

/// Longest step handed to the simulation, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame timing state
#[derive(Debug)]
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total simulated time in seconds
    simulated: f32,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            simulated: 0.0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the simulation step in seconds
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for a frame that took `frame_time`; zero while paused
    pub fn advance(&mut self, frame_time: Duration) -> f32 {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0.0;
        }

        let dt = frame_time.as_secs_f32().min(MAX_FRAME_DELTA);
        self.simulated += dt;
        dt
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Total time handed to the simulation, excluding pauses and capped stalls
    pub fn simulated_secs(&self) -> f32 {
        self.simulated
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Don't count the paused interval as one giant frame
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.simulated_secs(), 0.0);
        assert!(!clock.paused);
    }

    #[test]
    fn test_advance_passes_frame_time_through() {
        let mut clock = FrameClock::new();
        let dt = clock.advance(Duration::from_millis(20));
        assert_relative_eq!(dt, 0.02, epsilon = 1e-6);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Duration::from_secs(3)), MAX_FRAME_DELTA);
        assert_eq!(clock.simulated_secs(), MAX_FRAME_DELTA);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = FrameClock::new();
        clock.toggle_pause();
        assert!(clock.paused);
        clock.toggle_pause();
        assert!(!clock.paused);
    }

    #[test]
    fn test_paused_frames_yield_zero() {
        let mut clock = FrameClock::new();
        clock.pause();
        thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.begin_frame(), 0.0);
        assert_eq!(clock.frame_count(), 1);
        assert_eq!(clock.simulated_secs(), 0.0);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            clock.advance(Duration::from_millis(20));
        }
        assert_relative_eq!(clock.fps(), 50.0, epsilon = 0.01);
    }
}
