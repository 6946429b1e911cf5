/// Accumulator-based fixed-timestep scheduler.
///
/// The driver feeds it one absolute timestamp per real-time frame; the
/// clock decides when a simulation tick is due. Elapsed time is subtracted
/// from an accumulator, and when the accumulator dips below zero a tick
/// fires and the accumulator is reloaded with `interval - delta`. Carrying
/// the overshoot keeps the average tick rate locked to the interval even
/// when frames arrive unevenly. At most one tick fires per frame.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    interval_secs: f64,
    accumulator: f64,
    last_timestamp: f64,
    stopped: bool,
}

impl FixedStepClock {
    /// Create a clock firing every `interval_secs` of simulated time.
    /// The accumulator starts drained, so the first frame ticks.
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            accumulator: 0.0,
            last_timestamp: 0.0,
            stopped: false,
        }
    }

    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Observe a frame timestamp (seconds, monotonically increasing).
    /// Returns `Some(delta)` when a tick is due this frame, `None`
    /// otherwise. The timestamp is recorded either way, so a stopped clock
    /// keeps tracking time without firing.
    pub fn advance(&mut self, timestamp: f64) -> Option<f64> {
        let delta = timestamp - self.last_timestamp;
        self.last_timestamp = timestamp;

        if self.stopped {
            return None;
        }

        self.accumulator -= delta;
        if self.accumulator < 0.0 {
            self.accumulator = self.interval_secs - delta;
            return Some(delta);
        }
        None
    }

    /// Stop delivering ticks. Idempotent.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_ticks_immediately() {
        let mut clock = FixedStepClock::new(0.1);
        assert!(clock.advance(0.016).is_some());
    }

    #[test]
    fn test_no_tick_until_interval_elapses() {
        let mut clock = FixedStepClock::new(0.1);
        // First 16 ms frame drains the empty accumulator and reloads it.
        assert!(clock.advance(0.016).is_some());

        // Nothing for the next five frames...
        for frame in 2..=6 {
            assert!(clock.advance(frame as f64 * 0.016).is_none());
        }
        // ...then the accumulator crosses zero again.
        assert!(clock.advance(7.0 * 0.016).is_some());
    }

    #[test]
    fn test_average_rate_locks_to_interval() {
        // Power-of-two values keep the accumulator arithmetic exact.
        let mut clock = FixedStepClock::new(0.125);
        let frame = 1.0 / 64.0;

        let mut ticks = 0;
        for i in 0..640 {
            if clock.advance(i as f64 * frame).is_some() {
                ticks += 1;
            }
        }

        // 640 frames cover 10 s of wall time; with the overshoot carried
        // into each reload that is one tick per 0.125 s, exactly.
        assert_eq!(ticks, 80);
    }

    #[test]
    fn test_slow_frames_still_tick_once_each() {
        // Frames slower than the interval: every frame fires exactly one
        // tick, never two for the same crossing.
        let mut clock = FixedStepClock::new(0.1);
        for i in 1..=5 {
            assert!(clock.advance(i as f64 * 0.25).is_some());
        }
    }

    #[test]
    fn test_delta_reported_per_frame() {
        let mut clock = FixedStepClock::new(0.1);
        let delta = clock.advance(0.016).unwrap();
        assert!((delta - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_stop_halts_ticks_and_is_idempotent() {
        let mut clock = FixedStepClock::new(0.1);
        clock.stop();
        clock.stop();
        assert!(clock.is_stopped());

        for i in 0..20 {
            assert!(clock.advance(i as f64 * 0.1).is_none());
        }
    }
}
