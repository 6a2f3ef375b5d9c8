use crate::ScrollDirection;

/// The coordinator's phase within the host's scroll lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    /// At rest.
    #[default]
    Idle,
    /// A user drag is in progress.
    Dragging,
    /// The drag ended and the surface is decelerating to a page boundary.
    Decelerating,
    /// A programmatic (autoplay or jump) scroll animation is in flight.
    Animating,
}

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset_x: f64,
    pub viewport_width: f64,
    /// `round(offset_x / viewport_width)`, clamped at zero.
    pub current_virtual_index: usize,
    /// Zero-based page, `None` while there is nothing to page through.
    pub current_page: Option<usize>,
    pub direction: ScrollDirection,
    pub phase: ScrollPhase,
}
