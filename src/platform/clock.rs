//! Frame timing
//!
//! The simulation is tuned against whole-millisecond frame deltas, so every
//! clock here hands out integral milliseconds.

/// Longest delta a single frame may report; a backgrounded tab resumes with
/// one huge gap otherwise.
pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

/// Source of per-frame elapsed time
pub trait Clock {
    /// Whole milliseconds since the previous call, restarting the measurement
    fn restart(&mut self) -> f32;
}

/// Wall-clock frame timer fed with external timestamps (e.g. the
/// requestAnimationFrame time).
///
/// Deltas are truncated to whole milliseconds; the truncated remainder is
/// carried into the next frame so the game does not run slow. Gaps longer
/// than [`MAX_FRAME_DELTA_MS`] are clamped to it.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    now_ms: Option<f64>,
    last_ms: Option<f64>,
    carry_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current timestamp in milliseconds
    pub fn observe(&mut self, now_ms: f64) {
        self.now_ms = Some(now_ms);
    }
}

impl Clock for FrameClock {
    fn restart(&mut self) -> f32 {
        let Some(now) = self.now_ms else {
            return 0.0;
        };
        // First frame and clock jumps backwards both yield zero
        let raw = self
            .last_ms
            .map_or(0.0, |last| (now - last).clamp(0.0, MAX_FRAME_DELTA_MS));
        self.last_ms = Some(now);

        let total = raw + self.carry_ms;
        let whole = total.floor();
        self.carry_ms = total - whole;
        whole as f32
    }
}

/// Constant-step clock for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step_ms: f32,
}

impl FixedClock {
    pub fn new(step_ms: f32) -> Self {
        Self {
            step_ms: step_ms.max(0.0).floor(),
        }
    }

    /// Step matching a frame-rate cap, in whole milliseconds
    pub fn from_frame_rate(fps: u32) -> Self {
        Self::new(1000.0 / fps.max(1) as f32)
    }

    pub fn step_ms(&self) -> f32 {
        self.step_ms
    }
}

impl Clock for FixedClock {
    fn restart(&mut self) -> f32 {
        self.step_ms
    }
}

/// Frame-rate cap for callback-driven loops
#[derive(Debug, Clone, Default)]
pub struct FramePacer {
    min_interval_ms: f64,
    last_ms: Option<f64>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        let mut pacer = Self::default();
        pacer.set_limit(fps);
        pacer
    }

    /// 0 disables the cap
    pub fn set_limit(&mut self, fps: u32) {
        self.min_interval_ms = if fps == 0 { 0.0 } else { 1000.0 / fps as f64 };
    }

    /// Whether a frame should run at `now_ms`; records it if so.
    ///
    /// Half a millisecond of slack keeps a 120 Hz cap from skipping every
    /// other frame of a 120 Hz display.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last + 0.5 < self.min_interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.restart(), 0.0);
        clock.observe(1234.5);
        assert_eq!(clock.restart(), 0.0);
    }

    #[test]
    fn test_frame_clock_carries_fraction() {
        let mut clock = FrameClock::new();
        clock.observe(0.0);
        clock.restart();

        let mut total = 0.0;
        for i in 1..=120 {
            clock.observe(i as f64 * 1000.0 / 120.0);
            let dt = clock.restart();
            assert_eq!(dt.fract(), 0.0);
            total += dt;
        }
        // One second of frames adds up to (almost) one second
        assert!((999.0..=1000.0).contains(&total));
    }

    #[test]
    fn test_frame_clock_ignores_backwards_time() {
        let mut clock = FrameClock::new();
        clock.observe(100.0);
        clock.restart();
        clock.observe(50.0);
        assert_eq!(clock.restart(), 0.0);
    }

    #[test]
    fn test_frame_clock_caps_long_gaps() {
        let mut clock = FrameClock::new();
        clock.observe(0.0);
        clock.restart();
        clock.observe(30_000.0);
        assert_eq!(clock.restart(), MAX_FRAME_DELTA_MS as f32);
        clock.observe(30_016.0);
        assert_eq!(clock.restart(), 16.0);
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::from_frame_rate(120);
        assert_eq!(clock.step_ms(), 8.0);
        assert_eq!(clock.restart(), 8.0);
        assert_eq!(FixedClock::new(16.0).step_ms(), 16.0);
        assert_eq!(FixedClock::new(-3.0).step_ms(), 0.0);
    }

    #[test]
    fn test_pacer_caps_rate() {
        let mut pacer = FramePacer::new(60);
        assert!(pacer.ready(0.0));
        assert!(!pacer.ready(8.0));
        assert!(pacer.ready(16.7));
        assert!(!pacer.ready(20.0));
    }

    #[test]
    fn test_pacer_uncapped() {
        let mut pacer = FramePacer::new(0);
        assert!(pacer.ready(0.0));
        assert!(pacer.ready(0.1));
    }
}
