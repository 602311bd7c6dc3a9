//! Frame timing with scaled and unscaled deltas.

use web_time::{Duration, Instant};

/// Elapsed time for one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Game time: affected by time scale and pause.
    pub delta: f32,
    /// Wall-clock time: ignores time scale and pause.
    pub unscaled_delta: f32,
}

impl FrameTime {
    /// A frame where game time and wall time agree.
    #[must_use]
    pub fn fixed(delta: f32) -> Self {
        Self {
            delta,
            unscaled_delta: delta,
        }
    }
}

/// Produces a [`FrameTime`] per frame from the wall clock.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Multiplier applied to game time (1.0 = real time)
    time_scale: f32,
    /// When set, game time stands still
    paused: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock running at real time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            time_scale: 1.0,
            paused: false,
        }
    }

    /// Game-time multiplier. Negative values are treated as zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Current game-time multiplier.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Freeze or resume game time. Unscaled time keeps running.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether game time is frozen.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Call once per frame; measures time since the previous call.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Turn a measured frame duration into a [`FrameTime`].
    #[must_use]
    pub fn advance(&self, elapsed: Duration) -> FrameTime {
        let unscaled_delta = elapsed.as_secs_f32();
        let delta = if self.paused {
            0.0
        } else {
            unscaled_delta * self.time_scale
        };
        FrameTime {
            delta,
            unscaled_delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_time_by_default() {
        let clock = FrameClock::new();
        let t = clock.advance(Duration::from_millis(20));
        assert!((t.delta - 0.02).abs() < 1e-6);
        assert_eq!(t.delta, t.unscaled_delta);
    }

    #[test]
    fn time_scale_affects_only_game_time() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(0.5);
        let t = clock.advance(Duration::from_millis(20));
        assert!((t.delta - 0.01).abs() < 1e-6);
        assert!((t.unscaled_delta - 0.02).abs() < 1e-6);
    }

    #[test]
    fn pause_freezes_game_time() {
        let mut clock = FrameClock::new();
        clock.set_paused(true);
        let t = clock.advance(Duration::from_millis(16));
        assert_eq!(t.delta, 0.0);
        assert!(t.unscaled_delta > 0.0);
    }

    #[test]
    fn negative_scale_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.set_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn tick_is_non_negative() {
        let mut clock = FrameClock::new();
        let t = clock.tick();
        assert!(t.unscaled_delta >= 0.0);
    }
}
