//! Image sources, loading and pixel processing

pub mod loader;
pub mod processing;
pub mod scanner;
pub mod source;

pub use loader::{LoadedImage, load};
pub use scanner::discover_image_files;
pub use source::ImageSource;
