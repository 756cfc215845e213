//! Controller reveal sequence
//!
//! Showing or hiding the controllers runs two animations back to back: the
//! controller bar slides vertically, and only once it has arrived does the
//! thumbnail strip slide horizontally.

use iced::time::{Duration, Instant};

use super::easing::Easing;
use super::tween::Tween;

pub const BAR_DURATION: Duration = Duration::from_millis(400);
pub const STRIP_DURATION: Duration = Duration::from_millis(300);
const STRIP_BOUNCINESS: f32 = 1.0;

/// Bar then strip, strictly sequential in both directions
#[derive(Debug, Clone, Copy)]
pub struct RevealSequence {
    bar: Tween,
    strip: Tween,
    /// Strip target waiting for the bar to arrive
    queued_strip: Option<f32>,
}

impl RevealSequence {
    /// Both parts resting fully shown (`true`) or fully hidden (`false`)
    pub fn new(visible: bool) -> Self {
        let value = if visible { 1.0 } else { 0.0 };
        Self {
            bar: Tween::new(value),
            strip: Tween::new(value),
            queued_strip: None,
        }
    }

    /// Start moving toward `visible`.
    ///
    /// A bar run in progress is replaced and any strip run still queued
    /// behind it now targets the new direction.
    pub fn animate_to(&mut self, visible: bool, now: Instant) {
        let target = if visible { 1.0 } else { 0.0 };
        self.bar.start(target, BAR_DURATION, Easing::STANDARD, now);
        self.queued_strip = Some(target);
    }

    pub fn tick(&mut self, now: Instant) {
        let bar_deadline = self.bar.deadline();
        if self.bar.tick(now).is_some() {
            if let (Some(target), Some(arrived)) = (self.queued_strip.take(), bar_deadline) {
                tracing::debug!("Controller bar arrived, revealing strip toward {target}");
                self.strip.start(
                    target,
                    STRIP_DURATION,
                    Easing::Elastic(STRIP_BOUNCINESS),
                    arrived,
                );
            }
        }
        self.strip.tick(now);
    }

    /// Bar progress, 0 = off-screen, 1 = in place
    pub fn bar_progress(&self, now: Instant) -> f32 {
        self.bar.value_at(now)
    }

    /// Strip progress, 0 = off-screen, 1 = in place (overshoots while bouncing)
    pub fn strip_progress(&self, now: Instant) -> f32 {
        self.strip.value_at(now)
    }

    pub fn is_animating(&self) -> bool {
        self.bar.is_running() || self.strip.is_running() || self.queued_strip.is_some()
    }
}

/// Translation for a part with the given progress travelling `distance`
pub fn travel_offset(progress: f32, distance: f32) -> f32 {
    distance * (1.0 - progress.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_waits_for_bar() {
        let t0 = Instant::now();
        let mut reveal = RevealSequence::new(false);
        reveal.animate_to(true, t0);

        let mid_bar = t0 + Duration::from_millis(200);
        reveal.tick(mid_bar);
        assert!(reveal.bar.is_running());
        assert!(!reveal.strip.is_running(), "strip must not start with the bar");
        assert_eq!(reveal.strip_progress(mid_bar), 0.0);

        let bar_done = t0 + BAR_DURATION;
        reveal.tick(bar_done);
        assert!(!reveal.bar.is_running());
        assert!(reveal.strip.is_running());
        assert_eq!(reveal.bar_progress(bar_done), 1.0);

        let all_done = bar_done + STRIP_DURATION;
        reveal.tick(all_done);
        assert!(!reveal.is_animating());
        assert_eq!(reveal.strip_progress(all_done), 1.0);
    }

    #[test]
    fn hiding_is_sequential_too() {
        let t0 = Instant::now();
        let mut reveal = RevealSequence::new(true);
        reveal.animate_to(false, t0);

        reveal.tick(t0 + Duration::from_millis(399));
        assert!(!reveal.strip.is_running());
        assert_eq!(reveal.strip_progress(t0 + Duration::from_millis(399)), 1.0);

        reveal.tick(t0 + BAR_DURATION);
        assert!(reveal.strip.is_running());

        let done = t0 + BAR_DURATION + STRIP_DURATION;
        reveal.tick(done);
        assert_eq!(reveal.bar_progress(done), 0.0);
        assert_eq!(reveal.strip_progress(done), 0.0);
    }

    #[test]
    fn late_tick_starts_strip_at_bar_arrival() {
        let t0 = Instant::now();
        let mut reveal = RevealSequence::new(false);
        reveal.animate_to(true, t0);

        // First tick lands after both durations would have elapsed
        let late = t0 + BAR_DURATION + STRIP_DURATION;
        reveal.tick(late);
        assert_eq!(reveal.strip_progress(late), 1.0);
    }

    #[test]
    fn retoggle_redirects_queued_strip() {
        let t0 = Instant::now();
        let mut reveal = RevealSequence::new(false);
        reveal.animate_to(true, t0);
        let flip = t0 + Duration::from_millis(100);
        reveal.animate_to(false, flip);

        let done = flip + BAR_DURATION + STRIP_DURATION;
        reveal.tick(flip + BAR_DURATION);
        reveal.tick(done);
        assert_eq!(reveal.bar_progress(done), 0.0);
        assert_eq!(reveal.strip_progress(done), 0.0);
    }

    #[test]
    fn travel_offset_spans_distance() {
        assert_eq!(travel_offset(0.0, 800.0), 800.0);
        assert_eq!(travel_offset(1.0, 800.0), 0.0);
        assert_eq!(travel_offset(0.5, 800.0), 400.0);
    }
}
