pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fraction of `duration` elapsed between `start` and `now`, clamped to [0, 1].
pub fn progress(start: f64, now: f64, duration: f64) -> f64 {
    ((now - start) / duration).min(1.0).max(0.0)
}

#[derive(Debug, Clone)]
pub struct Timeline {
    pub start_time: f64,
    pub duration: f64,
    pub current_time: f64,
}

impl Timeline {
    pub fn new(duration: f64) -> Self {
        Self {
            start_time: 0.0,
            duration,
            current_time: 0.0,
        }
    }

    pub fn start(&mut self, now: f64) {
        self.start_time = now;
        self.current_time = now;
    }

    pub fn update(&mut self, now: f64) {
        self.current_time = now;
    }

    pub fn progress(&self) -> f64 {
        progress(self.start_time, self.current_time, self.duration)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn eased_progress(&self) -> f64 {
        ease_out_cubic(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
    }

    #[test]
    fn test_ease_out_quart_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let eased = ease_out_quart(step as f64 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(1.0, 0.5, 2.0), 0.0);
        assert_eq!(progress(1.0, 2.0, 2.0), 0.5);
        assert_eq!(progress(1.0, 9.0, 2.0), 1.0);
    }

    #[test]
    fn test_timeline_completes() {
        let mut tl = Timeline::new(0.6);
        tl.start(10.0);
        assert!(!tl.is_complete());
        assert_eq!(tl.eased_progress(), 0.0);

        tl.update(10.3);
        assert!(tl.eased_progress() > 0.5);

        tl.update(10.75);
        assert!(tl.is_complete());
        assert_eq!(tl.eased_progress(), 1.0);
    }
}
