//! A headless engine for infinitely looping carousels.
//!
//! For adapter-level utilities (tween-driven scrolling, image loading), see the
//! `glideshow-adapter` crate.
//!
//! A finite slide set is presented as if it scrolled forever in both directions. The engine
//! repeats the set across a large virtual index space, starts in the middle of it and silently
//! recenters whenever the position drifts near an edge. On top of that it derives the current
//! page, scroll direction, autoplay requests and the parallax/fade state of each visible cell.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the widget bounds
//! - scroll offsets and drag lifecycle events
//! - a monotonic clock for autoplay
//! - text measurement and image loading (optional)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod animator;
mod autoplay;
mod coordinator;
mod delegate;
mod error;
mod glideshow;
mod indicator;
mod layout;
mod loop_index;
mod options;
mod slide;
mod state;
mod types;


pub use animator::{CellAnimator, EdgeCells, LabelSpec, glide_label};
pub use autoplay::AutoplayTimer;
pub use coordinator::{ScrollCoordinator, ScrollEvents};
pub use delegate::{
    DirectionChangeCallback, GlideshowDelegate, LifecycleCallback, PageChangeCallback,
    SelectCallback,
};
pub use error::{GlideshowError, Result};
pub use glideshow::Glideshow;
pub use indicator::{IndicatorLayout, PageIndicatorSync};
pub use layout::{SlideLayout, TextMeasure};
pub use loop_index::LoopIndexMapper;
pub use options::GlideshowOptions;
pub use slide::{ImageSource, Slide, SlideSet};
pub use state::{ScrollPhase, ScrollState};
pub use types::{
    CellVisual, Insets, LabelKind, LabelVisual, PageIndicatorPosition, Rect, ScrollCommand,
    ScrollDirection, ScrollReason, Size,
};
