//! Clock-injected scalar tween
//!
//! A `Tween` never reads the clock itself: every call takes the current
//! `Instant`, so the same sequence of instants always produces the same values.

use iced::time::{Duration, Instant};

use super::easing::Easing;

/// How a running animation came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// Reached its target
    Finished,
    /// Stopped before reaching its target
    Interrupted,
}

impl AnimationEnd {
    pub fn is_finished(self) -> bool {
        self == Self::Finished
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Run {
    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    fn deadline(&self) -> Instant {
        self.started_at + self.duration
    }
}

/// Scalar value animated toward a target over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    value: f32,
    run: Option<Run>,
}

impl Tween {
    /// A tween resting at `value`
    pub fn new(value: f32) -> Self {
        Self { value, run: None }
    }

    /// Start animating from the current value toward `to`.
    ///
    /// A run that is already in progress is replaced; its end is reported
    /// as [`AnimationEnd::Interrupted`].
    pub fn start(
        &mut self,
        to: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> Option<AnimationEnd> {
        let interrupted = self.stop(now);
        self.run = Some(Run {
            from: self.value,
            to,
            started_at: now,
            duration,
            easing,
        });
        interrupted
    }

    /// Freeze the value where it is at `now`
    pub fn stop(&mut self, now: Instant) -> Option<AnimationEnd> {
        let run = self.run.take()?;
        if now >= run.deadline() {
            self.value = run.to;
            Some(AnimationEnd::Finished)
        } else {
            self.value = run.value_at(now);
            Some(AnimationEnd::Interrupted)
        }
    }

    /// Jump to `value`, interrupting any run
    pub fn set_value(&mut self, value: f32) -> Option<AnimationEnd> {
        let interrupted = self.run.take().map(|_| AnimationEnd::Interrupted);
        self.value = value;
        interrupted
    }

    /// Commit a run that has reached its deadline
    pub fn tick(&mut self, now: Instant) -> Option<AnimationEnd> {
        match self.run {
            Some(run) if now >= run.deadline() => {
                self.run = None;
                self.value = run.to;
                Some(AnimationEnd::Finished)
            }
            _ => None,
        }
    }

    /// Value at `now`, without committing anything
    pub fn value_at(&self, now: Instant) -> f32 {
        match &self.run {
            Some(run) => run.value_at(now),
            None => self.value,
        }
    }

    /// Target of the current run, or the resting value
    /// Instant at which the current run reaches its target
    pub fn deadline(&self) -> Option<Instant> {
        self.run.as_ref().map(Run::deadline)
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }
}
