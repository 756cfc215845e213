//! UI module for the animated image slider
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Animation** (`animation`): Easing, timers and per-slide curves
//! - **Primitives** (`primitives`): Low-level Widget and canvas implementations
//! - **Components** (`components`): The slider itself

pub mod animation;
pub mod components;
pub mod icons;
pub mod primitives;
pub mod theme;
