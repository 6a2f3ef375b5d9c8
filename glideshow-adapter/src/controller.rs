use glideshow::{
    Glideshow, GlideshowOptions, Rect, Result, ScrollCommand, ScrollEvents, SlideSet,
};

use crate::{Easing, Tween};

/// Default length of a programmatic slide transition.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// A framework-neutral controller that wraps a [`Glideshow`] and performs its scroll commands
/// with tweens, for hosts whose scroll surface has no native animated scrolling.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_bounds` / `set_slides` when the widget is laid out or its content changes
/// - `on_scroll` and the drag lifecycle methods for user interaction
/// - `tick(now_ms)` each frame (tween sampling and autoplay)
///
/// Every method returning `Some(offset)` expects the host to move its surface to that offset.
#[derive(Clone, Debug)]
pub struct Controller<I> {
    g: Glideshow<I>,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl<I> Controller<I> {
    pub fn new(options: GlideshowOptions) -> Self {
        Self::from_glideshow(Glideshow::new(options))
    }

    pub fn from_glideshow(g: Glideshow<I>) -> Self {
        Self {
            g,
            tween: None,
            duration_ms: DEFAULT_ANIMATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn glideshow(&self) -> &Glideshow<I> {
        &self.g
    }

    pub fn glideshow_mut(&mut self) -> &mut Glideshow<I> {
        &mut self.g
    }

    pub fn into_glideshow(self) -> Glideshow<I> {
        self.g
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Performs a scroll command.
    ///
    /// Animated commands start (or retarget) a tween and return `None`; the offset moves on
    /// subsequent ticks. Immediate commands are fed back as an offset signal and the applied
    /// offset is returned.
    pub fn apply(&mut self, command: ScrollCommand, now_ms: u64) -> Option<f64> {
        let to = command.offset(self.g.viewport_width());
        if command.animated {
            match self.tween.as_mut() {
                Some(tween) => tween.retarget(now_ms, to, self.duration_ms),
                None => {
                    self.tween = Some(Tween::new(
                        self.g.offset(),
                        to,
                        now_ms,
                        self.duration_ms,
                        self.easing,
                    ));
                }
            }
            return None;
        }
        self.tween = None;
        self.g.on_offset_changed(to);
        Some(to)
    }

    fn apply_events(&mut self, events: ScrollEvents, now_ms: u64) -> Option<f64> {
        let command = events.command?;
        self.apply(command, now_ms)
    }

    pub fn set_bounds(&mut self, bounds: Rect, now_ms: u64) -> Option<f64> {
        let command = self.g.set_bounds(bounds)?;
        self.apply(command, now_ms)
    }

    pub fn set_slides(&mut self, slides: impl Into<SlideSet<I>>, now_ms: u64) -> Option<f64> {
        self.tween = None;
        let command = self.g.set_slides(slides, now_ms)?;
        self.apply(command, now_ms)
    }

    pub fn set_options(&mut self, options: GlideshowOptions, now_ms: u64) -> Option<f64> {
        let command = self.g.set_options(options, now_ms)?;
        self.apply(command, now_ms)
    }

    /// Call this when the UI reports a user-driven scroll offset.
    pub fn on_scroll(&mut self, offset_x: f64) -> ScrollEvents {
        self.g.on_offset_changed(offset_x)
    }

    /// Starts a user drag. This cancels any active tween.
    pub fn begin_drag(&mut self) {
        self.cancel_animation();
        self.g.begin_drag();
    }

    pub fn will_end_dragging(&mut self) {
        self.g.will_end_dragging();
    }

    pub fn end_drag(&mut self, will_decelerate: bool, now_ms: u64) -> Option<f64> {
        let events = self.g.end_drag(will_decelerate, now_ms);
        self.apply_events(events, now_ms)
    }

    pub fn will_begin_decelerating(&mut self) {
        self.g.will_begin_decelerating();
    }

    pub fn end_decelerating(&mut self, now_ms: u64) -> Option<f64> {
        let events = self.g.end_decelerating();
        self.apply_events(events, now_ms)
    }

    /// Scrolls to a 1-based slide number, animated through a tween or immediately.
    pub fn jump_to_slide(&mut self, slide: usize, animated: bool, now_ms: u64) -> Result<Option<f64>> {
        let command = self.g.jump_to_slide(slide, animated, now_ms)?;
        Ok(self.apply(command, now_ms))
    }

    /// Advances the controller.
    ///
    /// - If a tween is active, feeds the sampled offset to the carousel and returns it. When the
    ///   tween completes the animation end is reported, and a recentering jump (if any) is
    ///   applied at once and returned instead.
    /// - Otherwise polls autoplay, starting a tween when it fires, and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let Some(tween) = self.tween else {
            let command = self.g.tick(now_ms)?;
            return self.apply(command, now_ms);
        };

        let off = tween.sample(now_ms);
        self.g.on_offset_changed(off);
        if !tween.is_done(now_ms) {
            return Some(off);
        }

        self.tween = None;
        let events = self.g.end_scroll_animation();
        Some(self.apply_events(events, now_ms).unwrap_or(off))
    }

    /// Stops the tween and autoplay; call when the host widget goes away.
    pub fn teardown(&mut self) {
        self.cancel_animation();
        self.g.cancel_autoplay();
    }
}
