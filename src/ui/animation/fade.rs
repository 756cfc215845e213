//! Enable/disable fade using iced_anim
//!
//! Drives the opacity veil of a pressable: 1 when enabled, 0 when disabled.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade duration whenever the disabled flag flips
pub const FADE_DURATION: Duration = Duration::from_millis(200);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// Single 0..1 fade value
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl FadeAnimation {
    /// Start resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            animation: Animated::transition(value, fade_easing()),
        }
    }

    /// Animate toward `target`
    pub fn animate_to(&mut self, target: f32) {
        if *self.animation.target() != target {
            self.animation.update(target.into());
        }
    }

    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
