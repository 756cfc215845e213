//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No host logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`ProgressiveImage`] - Load state plus a canvas layer with a loader
//! - [`Pressable`] - Tappable wrapper with press feedback and a disable fade
//! - [`Offset`] - Draws its child translated without moving siblings

pub mod offset;
pub mod pressable;
pub mod progressive_image;

pub use offset::{Offset, offset};
pub use pressable::{Feedback, Pressable, PressableState, pressable};
pub use progressive_image::{Fit, ImageLayer, Layer, LoadState, ProgressiveImage};
