//! Adapter utilities for the `glideshow` crate.
//!
//! The `glideshow` crate is UI-agnostic and focuses on the carousel math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based programmatic scrolling for surfaces without native animation
//! - Per-cell image loading with an injected URL cache
//!
//! This crate is framework-agnostic (no toolkit bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod image;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_ANIMATION_MS};
pub use image::{
    DEFAULT_IMAGE_CACHE_CAPACITY, ImageCache, ImageCompletion, ImageDelivery, ImageFetcher,
    ImageLoader, ImageState, RequestId,
};
pub use tween::{Easing, Tween};
