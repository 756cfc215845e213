//! Animation system for the image slider
//!
//! Timing and curve definition are kept apart:
//!
//! - [`easing`] and [`curves`] are pure functions of progress
//! - [`Tween`], [`SlideTimer`] and [`RevealSequence`] advance only when
//!   handed an `Instant`, so they can be driven by iced frame events or by
//!   synthetic instants in tests
//! - [`FadeAnimation`] wraps `iced_anim` for the pressable fade

pub mod curves;
pub mod easing;
mod fade;
pub mod reveal;
pub mod timer;
mod tween;

pub use curves::{RenderedPair, SlideRole, SlideTransform};
pub use easing::Easing;
pub use fade::{FADE_DURATION, FadeAnimation};
pub use reveal::RevealSequence;
pub use timer::{SlideTimer, TIMER_END};
pub use tween::{AnimationEnd, Tween};
