use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Shortest span a frame rate sample is averaged over.
pub const SAMPLE_WINDOW: Duration = Duration::from_millis(250);

/// Averages the frame rate over rolling windows of at least [`SAMPLE_WINDOW`].
pub struct FpsCounter {
    window: Duration,
    previous: Duration,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_window(SAMPLE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            previous: Duration::ZERO,
            frames: 0,
        }
    }

    /// Counts one frame started at `now` (time since the clock origin).
    ///
    /// Returns a sample once the current window is full. The frame passed in is
    /// counted towards the next window.
    pub fn tick(&mut self, now: Duration) -> Option<FrameStats> {
        let elapsed = now.saturating_sub(self.previous);

        let stats = if elapsed >= self.window {
            let secs = elapsed.as_secs_f64();
            let fps = self.frames as f64 / secs;

            self.previous = now;
            self.frames = 0;

            Some(FrameStats {
                fps,
                frame_time_ms: 1000.0 / fps,
            })
        } else {
            None
        };

        self.frames += 1;

        stats
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
    pub frame_time_ms: f64,
}

impl FrameStats {
    /// Window caption showing this sample after `prefix`.
    pub fn title(&self, prefix: &str) -> String {
        format!("{prefix}    {self}")
    }
}

impl Display for FrameStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FPS: {:.3}    Frame Time: {:.3} (ms)",
            self.fps, self.frame_time_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_frames_in_quarter_second() {
        let mut counter = FpsCounter::new();

        for i in 0..30 {
            assert_eq!(counter.tick(Duration::from_millis(i * 8)), None);
        }

        let stats = counter.tick(Duration::from_millis(250)).unwrap();

        assert_eq!(stats.fps, 120.0);
        assert_eq!(format!("{:.3}", stats.frame_time_ms), "8.333");
        assert_eq!(stats.to_string(), "FPS: 120.000    Frame Time: 8.333 (ms)");
    }

    #[test]
    fn window_restarts_after_sample() {
        let mut counter = FpsCounter::new();

        counter.tick(Duration::ZERO);
        assert!(counter.tick(Duration::from_millis(300)).is_some());
        assert_eq!(counter.tick(Duration::from_millis(400)), None);

        // two frames since the last sample, over half a second
        let stats = counter.tick(Duration::from_millis(800)).unwrap();
        assert_eq!(stats.fps, 4.0);
    }

    #[test]
    fn title_layout() {
        let stats = FrameStats {
            fps: 60.0,
            frame_time_ms: 1000.0 / 60.0,
        };

        assert_eq!(
            stats.title("Shaders:: uniforms"),
            "Shaders:: uniforms    FPS: 60.000    Frame Time: 16.667 (ms)"
        );
    }
}
