//! Per-slide display timer
//!
//! The timer value runs from 0 to [`TIMER_END`] once per slide. Visual
//! properties of the rendered slides are read off this single value through
//! the curves in [`super::curves`].

use iced::time::{Duration, Instant};

use super::easing::Easing;
use super::tween::{AnimationEnd, Tween};

/// Value the timer reaches at the end of a slide
pub const TIMER_END: f32 = 8.0;

/// Self-contained 0 → [`TIMER_END`] timer with pause support
#[derive(Debug, Clone, Copy)]
pub struct SlideTimer {
    tween: Tween,
    duration: Duration,
}

impl SlideTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            tween: Tween::new(0.0),
            duration,
        }
    }

    /// Run toward [`TIMER_END`] from wherever the value currently rests.
    ///
    /// Every run takes the full slide duration, also when resuming from a
    /// frozen value.
    pub fn start(&mut self, now: Instant) -> Option<AnimationEnd> {
        self.tween
            .start(TIMER_END, self.duration, Easing::EaseInOut, now)
    }

    /// Freeze the timer, keeping its progress
    pub fn stop(&mut self, now: Instant) -> Option<AnimationEnd> {
        self.tween.stop(now)
    }

    /// Put the value back to 0, interrupting any run
    pub fn reset(&mut self) -> Option<AnimationEnd> {
        self.tween.set_value(0.0)
    }

    /// Report the natural end of a run, together with the instant it ended
    pub fn tick(&mut self, now: Instant) -> Option<(AnimationEnd, Instant)> {
        let deadline = self.tween.deadline()?;
        self.tween.tick(now).map(|end| (end, deadline))
    }

    pub fn value(&self, now: Instant) -> f32 {
        self.tween.value_at(now)
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_ends_after_one_duration() {
        let t0 = Instant::now();
        let mut timer = SlideTimer::new(Duration::from_millis(6000));
        timer.start(t0);

        assert_eq!(timer.tick(t0 + Duration::from_millis(5999)), None);
        let (end, at) = timer
            .tick(t0 + Duration::from_millis(6100))
            .expect("run should have ended");
        assert!(end.is_finished());
        assert_eq!(at, t0 + Duration::from_millis(6000));
        assert_eq!(timer.value(t0 + Duration::from_millis(7000)), TIMER_END);
    }

    #[test]
    fn value_moves_through_the_full_range() {
        let t0 = Instant::now();
        let mut timer = SlideTimer::new(Duration::from_secs(8));
        timer.start(t0);

        assert_eq!(timer.value(t0), 0.0);
        assert!((timer.value(t0 + Duration::from_secs(4)) - 4.0).abs() < 1e-3);
        assert!((timer.value(t0 + Duration::from_secs(8)) - TIMER_END).abs() < 1e-3);
    }

    #[test]
    fn reset_interrupts_a_running_timer() {
        let t0 = Instant::now();
        let mut timer = SlideTimer::new(Duration::from_secs(6));
        timer.start(t0);

        assert_eq!(timer.reset(), Some(AnimationEnd::Interrupted));
        assert!(!timer.is_running());
        assert_eq!(timer.value(t0 + Duration::from_secs(3)), 0.0);
    }

    #[test]
    fn idle_timer_never_ends() {
        let mut timer = SlideTimer::new(Duration::from_secs(6));
        assert_eq!(timer.tick(Instant::now()), None);
    }
}
