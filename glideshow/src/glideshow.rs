use crate::coordinator::{ScrollCoordinator, ScrollEvents};
use crate::{
    CellAnimator, CellVisual, GlideshowDelegate, GlideshowOptions, IndicatorLayout, LabelSpec,
    PageIndicatorSync, Rect, Result, ScrollCommand, ScrollDirection, ScrollState, Size, Slide,
    SlideLayout, SlideSet, TextMeasure,
};

/// A headless, infinitely looping carousel.
///
/// This type holds no UI objects. The host drives it:
/// - `set_bounds` when the widget is laid out
/// - `set_slides` when content changes
/// - `set_visible_cells` whenever the set of on-screen cells changes
/// - `on_offset_changed` on every scroll frame, plus the drag lifecycle methods
/// - `tick(now_ms)` from a frame or timer callback (autoplay)
///
/// Methods that return a [`ScrollCommand`] expect the host to scroll its surface to
/// `command.offset(viewport_width)`; non-animated commands must be applied immediately.
/// After an animated command finishes, the host calls `end_scroll_animation`.
#[derive(Clone, Debug)]
pub struct Glideshow<I> {
    options: GlideshowOptions,
    labels: [LabelSpec; 3],
    slides: SlideSet<I>,
    coordinator: ScrollCoordinator,
    animator: CellAnimator,
    indicator: PageIndicatorSync,
    delegate: GlideshowDelegate,
    bounds: Rect,
    visuals: Vec<CellVisual>,
}

impl<I> Glideshow<I> {
    pub fn new(options: GlideshowOptions) -> Self {
        gdebug!(
            circular = options.circular,
            interval_ms = options.autoplay_interval_ms,
            "Glideshow::new"
        );
        Self {
            labels: LabelSpec::from_options(&options),
            coordinator: ScrollCoordinator::new(&options),
            animator: CellAnimator::new(),
            indicator: PageIndicatorSync::new(
                options.page_indicator_position,
                options.page_indicator_height,
            ),
            slides: SlideSet::default(),
            delegate: GlideshowDelegate::default(),
            bounds: Rect::default(),
            visuals: Vec::new(),
            options,
        }
    }

    pub fn with_delegate(mut self, delegate: GlideshowDelegate) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_delegate(&mut self, delegate: GlideshowDelegate) {
        self.delegate = delegate;
    }

    pub fn delegate(&self) -> &GlideshowDelegate {
        &self.delegate
    }

    pub fn options(&self) -> &GlideshowOptions {
        &self.options
    }

    /// Applies new options and recomputes everything derived from them.
    ///
    /// Returns a repositioning command when looping was toggled or the loop multiplier changed.
    pub fn set_options(&mut self, options: GlideshowOptions, now_ms: u64) -> Option<ScrollCommand> {
        gdebug!(
            circular = options.circular,
            interval_ms = options.autoplay_interval_ms,
            "Glideshow::set_options"
        );
        self.labels = LabelSpec::from_options(&options);
        self.indicator
            .set_position(options.page_indicator_position, options.page_indicator_height);
        let command = self.coordinator.apply_options(&options, now_ms);
        self.options = options;
        let viewport = self.apply_layout();
        self.refresh_visuals();
        command.or(viewport)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        now_ms: u64,
        f: impl FnOnce(&mut GlideshowOptions),
    ) -> Option<ScrollCommand> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms)
    }

    pub fn slides(&self) -> &SlideSet<I> {
        &self.slides
    }

    /// Replaces the slide set. All scroll and page state is recomputed from scratch.
    ///
    /// Returns the command placing the surface at its initial position, or `None` for an empty
    /// set (or while no viewport width is known).
    pub fn set_slides(&mut self, slides: impl Into<SlideSet<I>>, now_ms: u64) -> Option<ScrollCommand> {
        self.slides = slides.into();
        let count = self.slides.len();
        gdebug!(count, "Glideshow::set_slides");
        self.indicator.sync_slides(count);
        self.animator.clear();
        self.visuals.clear();
        let command = self.coordinator.reset(count, now_ms);
        if self.coordinator.viewport_width() <= 0.0 {
            return None;
        }
        command
    }

    /// Sets the widget bounds. The carousel takes the bounds minus the indicator strip.
    pub fn set_bounds(&mut self, bounds: Rect) -> Option<ScrollCommand> {
        self.bounds = bounds;
        let command = self.apply_layout();
        self.refresh_visuals();
        command
    }

    fn apply_layout(&mut self) -> Option<ScrollCommand> {
        let layout = self.indicator.layout(self.bounds);
        self.coordinator.set_viewport_width(layout.carousel.width)
    }

    pub fn layout(&self) -> IndicatorLayout {
        self.indicator.layout(self.bounds)
    }

    /// Size of every cell: cells fill the carousel area.
    pub fn cell_size(&self) -> Size {
        let carousel = self.layout().carousel;
        Size::new(carousel.width, carousel.height)
    }

    /// Number of cells in the virtual index space.
    pub fn item_count(&self) -> usize {
        self.coordinator.mapper().virtual_count(self.slides.len())
    }

    pub fn real_index_for(&self, virtual_index: usize) -> Option<usize> {
        if virtual_index >= self.item_count() {
            return None;
        }
        self.coordinator
            .mapper()
            .real_index(virtual_index, self.slides.len())
    }

    /// The slide backing a virtual cell.
    pub fn slide_for(&self, virtual_index: usize) -> Option<&Slide<I>> {
        self.slides.get(self.real_index_for(virtual_index)?)
    }

    /// Label frames for the slide backing a virtual cell.
    pub fn slide_layout(
        &self,
        virtual_index: usize,
        measure: &impl TextMeasure,
    ) -> Option<SlideLayout> {
        let slide = self.slide_for(virtual_index)?;
        Some(SlideLayout::compute(
            self.cell_size(),
            &self.options,
            slide,
            measure,
        ))
    }

    /// Reports which cells are on screen (virtual indexes, any order).
    pub fn set_visible_cells(&mut self, tags: impl IntoIterator<Item = usize>) {
        let count = self.item_count();
        self.animator
            .set_visible_cells(tags.into_iter().filter(|&t| t < count));
        self.refresh_visuals();
    }

    pub fn visuals(&self) -> &[CellVisual] {
        &self.visuals
    }

    pub fn visual_for(&self, tag: usize) -> Option<&CellVisual> {
        self.visuals.iter().find(|v| v.tag == tag)
    }

    fn refresh_visuals(&mut self) {
        let width = self.coordinator.viewport_width();
        let Some(section) = self.coordinator.section() else {
            self.visuals.clear();
            return;
        };
        if self.slides.is_empty() {
            self.visuals.clear();
            return;
        }
        let relative_offset = section as f64 * width - self.coordinator.offset();
        self.visuals = self.animator.compute_visuals(
            relative_offset,
            width,
            self.options.slide_padding.left,
            &self.labels,
        );
    }

    fn dispatch(&mut self, events: ScrollEvents) {
        if let Some(direction) = events.direction_changed {
            self.delegate.direction_changed(direction);
        }
        if let Some(page) = events.page_changed {
            self.indicator.sync_page(page - 1);
            self.delegate.page_changed(page);
        }
        if events.settled {
            self.animator.settle();
        }
        if events.command.is_some() {
            gtrace!(command = ?events.command, "Glideshow: scroll command");
        }
    }

    /// Consumes one scroll-frame offset signal.
    pub fn on_offset_changed(&mut self, offset_x: f64) -> ScrollEvents {
        let events = self.coordinator.on_offset_changed(offset_x);
        if !self.slides.is_empty() {
            if let Some(section) = self.coordinator.section() {
                self.animator.on_scroll(section);
            }
        }
        self.dispatch(events);
        self.refresh_visuals();
        events
    }

    pub fn begin_drag(&mut self) -> ScrollEvents {
        let events = self.coordinator.begin_drag();
        self.dispatch(events);
        self.delegate.will_begin_dragging();
        events
    }

    pub fn will_end_dragging(&mut self) -> ScrollEvents {
        let events = self.coordinator.will_end_dragging();
        self.dispatch(events);
        events
    }

    pub fn end_drag(&mut self, will_decelerate: bool, now_ms: u64) -> ScrollEvents {
        let events = self.coordinator.end_drag(will_decelerate, now_ms);
        self.dispatch(events);
        self.refresh_visuals();
        events
    }

    pub fn will_begin_decelerating(&mut self) -> ScrollEvents {
        let events = self.coordinator.will_begin_decelerating();
        self.dispatch(events);
        events
    }

    pub fn end_decelerating(&mut self) -> ScrollEvents {
        let events = self.coordinator.end_decelerating();
        self.dispatch(events);
        self.refresh_visuals();
        self.delegate.did_end_decelerating();
        events
    }

    /// Call when a programmatic scroll animation (autoplay or animated jump) finished.
    ///
    /// The returned events may carry a silent, non-animated recentering command.
    pub fn end_scroll_animation(&mut self) -> ScrollEvents {
        let events = self.coordinator.end_scroll_animation();
        self.dispatch(events);
        self.refresh_visuals();
        self.delegate.did_finish_animating();
        events
    }

    /// Advances autoplay. Returns an animated forward scroll when the timer fired.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        self.coordinator.tick(now_ms)
    }

    /// Scrolls to a 1-based slide number.
    ///
    /// Out-of-range slides are reported as [`crate::GlideshowError::InvalidSlideIndex`] and leave
    /// the carousel untouched.
    pub fn jump_to_slide(&mut self, slide: usize, animated: bool, now_ms: u64) -> Result<ScrollCommand> {
        self.coordinator.jump_to_slide(slide, animated, now_ms)
    }

    /// Reports a tap on a virtual cell. The delegate receives the real slide index.
    pub fn select(&self, virtual_index: usize) -> Option<usize> {
        let real = self.real_index_for(virtual_index)?;
        self.delegate.selected(real);
        Some(real)
    }

    /// Stops autoplay until the next drag ends, jump or configuration change (e.g. on teardown).
    pub fn cancel_autoplay(&mut self) {
        self.coordinator.cancel_autoplay();
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn indicator(&self) -> &PageIndicatorSync {
        &self.indicator
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.coordinator.state()
    }

    pub fn direction(&self) -> ScrollDirection {
        self.coordinator.direction()
    }

    pub fn viewport_width(&self) -> f64 {
        self.coordinator.viewport_width()
    }

    pub fn offset(&self) -> f64 {
        self.coordinator.offset()
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> Option<usize> {
        self.coordinator.current_page()
    }

    /// 1-based current slide number, matching the values passed to `on_page_change`.
    pub fn current_slide(&self) -> Option<usize> {
        self.current_page().map(|p| p + 1)
    }
}
