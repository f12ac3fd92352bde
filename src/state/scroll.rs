// Smooth wheel scrolling: the wheel moves a target, each animation frame eases
// the page position toward it. Timestamps are DOMHighResTimeStamp milliseconds.

use crate::config::ScrollConfig;

/// Exponential ease-out, clamped to 1 at the end of the animation.
pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    pub current: f64,
    pub target: f64,
    from: f64,
    started_at: f64,
    duration_ms: f64,
    multiplier: f64,
    animating: bool,
}

impl SmoothScroll {
    pub fn new(config: &ScrollConfig, position: f64) -> Self {
        Self {
            current: position,
            target: position,
            from: position,
            started_at: 0.0,
            duration_ms: (config.duration * 1000.0).max(1.0),
            multiplier: config.wheel_multiplier,
            animating: false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Moves the target by `delta` pixels, clamped to `[0, limit]`, and restarts the ease.
    pub fn wheel(&mut self, delta: f64, limit: f64, now: f64) {
        let limit = limit.max(0.0);
        self.target = (self.target + delta * self.multiplier).clamp(0.0, limit);
        self.from = self.current;
        self.started_at = now;
        self.animating = true;
    }

    /// Advances to `now`; returns the position to apply, or `None` when idle.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        let t = ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            self.current = self.from + (self.target - self.from) * ease(t);
        }
        Some(self.current)
    }

    /// Adopts a position set by native scrolling (scrollbar, keys). Ignored mid-animation.
    pub fn sync(&mut self, position: f64) {
        if self.animating {
            return;
        }
        self.current = position;
        self.target = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SmoothScroll {
        SmoothScroll::new(&ScrollConfig::default(), 0.0)
    }

    #[test]
    fn ease_endpoints_and_monotonic() {
        assert!((ease(0.0) - 0.001).abs() < 1e-12);
        assert_eq!(ease(1.0), 1.0);
        let mut prev = ease(0.0);
        for i in 1..=100 {
            let v = ease(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut s = scroller();
        assert_eq!(s.tick(16.0), None);
    }

    #[test]
    fn wheel_eases_to_target_within_duration() {
        let mut s = scroller();
        s.wheel(300.0, 1000.0, 100.0);
        let mid = s.tick(100.0 + 600.0).unwrap();
        assert!(mid > 0.0 && mid < 300.0);
        assert!(s.is_animating());
        assert_eq!(s.tick(100.0 + 1200.0), Some(300.0));
        assert!(!s.is_animating());
        assert_eq!(s.tick(2000.0), None);
    }

    #[test]
    fn target_is_clamped_to_page() {
        let mut s = scroller();
        s.wheel(-50.0, 1000.0, 0.0);
        assert_eq!(s.target, 0.0);
        s.wheel(5000.0, 1000.0, 0.0);
        assert_eq!(s.target, 1000.0);
        s.wheel(10.0, -20.0, 0.0);
        assert_eq!(s.target, 0.0);
    }

    #[test]
    fn repeated_wheel_accumulates_from_current_position() {
        let mut s = scroller();
        s.wheel(100.0, 1000.0, 0.0);
        s.tick(600.0);
        let pos = s.current;
        s.wheel(100.0, 1000.0, 600.0);
        assert_eq!(s.target, 200.0);
        assert_eq!(s.tick(600.0), Some(pos + (200.0 - pos) * ease(0.0)));
    }

    #[test]
    fn native_scroll_syncs_only_when_idle() {
        let mut s = scroller();
        s.sync(420.0);
        assert_eq!((s.current, s.target), (420.0, 420.0));
        s.wheel(100.0, 1000.0, 0.0);
        s.sync(0.0);
        assert_eq!(s.target, 520.0);
    }

    #[test]
    fn multiplier_scales_wheel_delta() {
        let cfg = ScrollConfig { wheel_multiplier: 2.0, ..ScrollConfig::default() };
        let mut s = SmoothScroll::new(&cfg, 0.0);
        s.wheel(50.0, 1000.0, 0.0);
        assert_eq!(s.target, 100.0);
    }
}
