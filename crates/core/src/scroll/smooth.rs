use crate::config::ScrollConfig;
use crate::scheduler::{PageTimer, Scheduler, TimerId};

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Offset that puts a section's top just under the fixed header.
pub fn scroll_target(section_document_top: f64, header_offset_px: f64) -> f64 {
    (section_document_top - header_offset_px).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    /// Offset at `now_ms` and whether the animation has finished. The last
    /// step returns `to` exactly.
    pub fn position_at(&self, now_ms: f64) -> (f64, bool) {
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * ease_in_out_cubic(t), false)
    }
}

/// One running scroll animation at most, stepped once per frame.
#[derive(Debug)]
pub struct SmoothScroller {
    config: ScrollConfig,
    running: Option<ScrollAnimation>,
    frame: Option<TimerId>,
}

impl SmoothScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            running: None,
            frame: None,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Replace any running animation with one from `from` to `to`.
    pub fn start(&mut self, from: f64, to: f64, sched: &mut Scheduler<PageTimer>) {
        if self.cancel(sched) {
            log::debug!("smooth scroll superseded");
        }
        self.running = Some(ScrollAnimation {
            from,
            to,
            start_ms: sched.now(),
            duration_ms: self.config.duration_ms,
        });
        self.frame = Some(sched.request_frame(PageTimer::ScrollFrame));
    }

    /// Step the animation. Returns the offset to write, if any.
    pub fn on_frame(&mut self, now_ms: f64, sched: &mut Scheduler<PageTimer>) -> Option<f64> {
        self.frame = None;
        let animation = self.running?;
        let (offset, done) = animation.position_at(now_ms);
        if done {
            self.running = None;
        } else {
            self.frame = Some(sched.request_frame(PageTimer::ScrollFrame));
        }
        Some(offset)
    }

    /// Drop the running animation and its frame request. Returns `true` if
    /// one was running.
    pub fn cancel(&mut self, sched: &mut Scheduler<PageTimer>) -> bool {
        if let Some(id) = self.frame.take() {
            sched.cancel(id);
        }
        self.running.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn target_clears_header_and_never_goes_negative() {
        assert_eq!(scroll_target(1000.0, 84.0), 916.0);
        assert_eq!(scroll_target(40.0, 84.0), 0.0);
    }

    #[test]
    fn lands_exactly_on_target() {
        let mut sched = Scheduler::new(0.0);
        let mut s = SmoothScroller::new(ScrollConfig::default());
        s.start(0.0, 1234.5, &mut sched);

        let mut last = None;
        let mut now = 0.0;
        while sched.has_frame_request() {
            now += 16.0;
            for _ in sched.begin_frame(now) {
                last = s.on_frame(now, &mut sched);
            }
        }
        assert_eq!(last, Some(1234.5));
        assert!(now >= 880.0);
        assert!(!s.is_running());
        assert_eq!(sched.live(), 0);
    }

    #[test]
    fn restart_cancels_previous_frame() {
        let mut sched = Scheduler::new(0.0);
        let mut s = SmoothScroller::new(ScrollConfig::default());
        s.start(0.0, 500.0, &mut sched);
        sched.set_now(100.0);
        s.start(200.0, 2000.0, &mut sched);
        assert_eq!(sched.live(), 1);

        let frames = sched.begin_frame(540.0);
        assert_eq!(frames.len(), 1);
        let offset = s.on_frame(540.0, &mut sched).expect("frame moves the page");
        // halfway through the second animation
        assert_eq!(offset, 1100.0);
    }
}
