use thiserror::Error;

/// Conditions reported by the carousel engine.
///
/// None of these are fatal: the engine state is left untouched whenever an operation fails.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlideshowError {
    /// A 1-based slide number outside `1..=count` was requested.
    #[error("slide {target} is out of range (slide count is {count})")]
    InvalidSlideIndex { target: usize, count: usize },

    /// The viewport width is zero, so no virtual index can be derived from an offset.
    #[error("viewport width has not been set")]
    ViewportNotSet,
}

pub type Result<T> = core::result::Result<T, GlideshowError>;
