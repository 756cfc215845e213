//! Error types

use std::fmt;

/// Rejected slider configuration
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// The slide list is empty
    EmptySlides,
    /// Each slide must be shown for a non-zero duration
    ZeroDuration,
    /// Width and height must be finite and positive
    InvalidSize { width: f32, height: f32 },
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::EmptySlides => write!(f, "slider needs at least one slide"),
            SliderError::ZeroDuration => write!(f, "slide duration must be greater than zero"),
            SliderError::InvalidSize { width, height } => {
                write!(f, "invalid slider size {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for SliderError {}

/// Image load failure, reported as a warning and never retried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Bytes could not be read or downloaded
    Fetch(String),
    /// Bytes are not a supported image
    Decode(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "Fetch error: {}", e),
            LoadError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert!(SliderError::EmptySlides.to_string().contains("at least one slide"));
        assert_eq!(
            SliderError::InvalidSize {
                width: 0.0,
                height: 10.0
            }
            .to_string(),
            "invalid slider size 0x10"
        );
        assert_eq!(
            LoadError::Decode("bad header".into()).to_string(),
            "Decode error: bad header"
        );
    }
}
