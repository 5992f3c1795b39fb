//! Linear fill animation for the countdown's progress indicator.

use std::time::Duration;

use serde::Serialize;

/// Animates a fill fraction toward a target over a fixed duration.
///
/// Re-targeting mid-flight starts the new segment from the value shown at
/// that instant, so the fill never jumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }
}

impl ProgressAnimation {
    /// Fraction displayed at `now`, in `[0, 1]`.
    pub fn value_at(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.from + (self.to - self.from) * t).clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn retarget(&mut self, now: Duration, target: f64, duration: Duration) {
        self.from = self.value_at(now);
        self.to = target.clamp(0.0, 1.0);
        self.started_at = now;
        self.duration = duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_empty() {
        assert_eq!(ProgressAnimation::default().value_at(ms(500)), 0.0);
    }

    #[test]
    fn interpolates_linearly() {
        let mut anim = ProgressAnimation::default();
        anim.retarget(ms(0), 0.5, ms(1000));
        assert!((anim.value_at(ms(500)) - 0.25).abs() < 1e-9);
        assert_eq!(anim.value_at(ms(1000)), 0.5);
        assert_eq!(anim.value_at(ms(4000)), 0.5);
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut anim = ProgressAnimation::default();
        anim.retarget(ms(0), 1.0, ms(1000));
        anim.retarget(ms(500), 0.0, ms(1000));
        assert!((anim.value_at(ms(500)) - 0.5).abs() < 1e-9);
        assert!((anim.value_at(ms(1000)) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn target_is_clamped() {
        let mut anim = ProgressAnimation::default();
        anim.retarget(ms(0), 3.0, Duration::ZERO);
        assert_eq!(anim.target(), 1.0);
        assert_eq!(anim.value_at(ms(0)), 1.0);
    }
}
