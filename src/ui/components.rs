//! UI Components module - composite components
//!
//! Components combine primitives with their own state machine and message
//! handling. They stay generic over the host's message type.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Animation** (`crate::ui::animation`): Clock-injected timers and pure curves
//! - **Components** (this module): Stateful widgets with callbacks

pub mod image_slider;

pub use image_slider::{ImageSlider, Slide, SliderConfig};
