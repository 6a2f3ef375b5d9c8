use std::sync::Arc;

use crate::ScrollDirection;

/// Called with the new 1-based page.
pub type PageChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;
/// Called with the new scroll direction.
pub type DirectionChangeCallback = Arc<dyn Fn(ScrollDirection) + Send + Sync>;
/// Called with the real (zero-based) index of the selected slide.
pub type SelectCallback = Arc<dyn Fn(usize) + Send + Sync>;
pub type LifecycleCallback = Arc<dyn Fn() + Send + Sync>;

/// Optional observer slots. Every slot is fire-and-forget; unset slots are skipped.
#[derive(Clone, Default)]
pub struct GlideshowDelegate {
    pub on_page_change: Option<PageChangeCallback>,
    pub on_will_begin_dragging: Option<LifecycleCallback>,
    pub on_did_end_decelerating: Option<LifecycleCallback>,
    /// A programmatic scroll (autoplay or jump) finished animating.
    pub on_did_finish_animating: Option<LifecycleCallback>,
    pub on_scroll_direction_change: Option<DirectionChangeCallback>,
    pub on_select: Option<SelectCallback>,
}

impl GlideshowDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_page_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Arc::new(f));
        self
    }

    pub fn with_on_will_begin_dragging(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_will_begin_dragging = Some(Arc::new(f));
        self
    }

    pub fn with_on_did_end_decelerating(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_did_end_decelerating = Some(Arc::new(f));
        self
    }

    pub fn with_on_did_finish_animating(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_did_finish_animating = Some(Arc::new(f));
        self
    }

    pub fn with_on_scroll_direction_change(
        mut self,
        f: impl Fn(ScrollDirection) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_direction_change = Some(Arc::new(f));
        self
    }

    pub fn with_on_select(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(f));
        self
    }

    pub(crate) fn page_changed(&self, page: usize) {
        if let Some(cb) = &self.on_page_change {
            cb(page);
        }
    }

    pub(crate) fn direction_changed(&self, direction: ScrollDirection) {
        if let Some(cb) = &self.on_scroll_direction_change {
            cb(direction);
        }
    }

    pub(crate) fn will_begin_dragging(&self) {
        if let Some(cb) = &self.on_will_begin_dragging {
            cb();
        }
    }

    pub(crate) fn did_end_decelerating(&self) {
        if let Some(cb) = &self.on_did_end_decelerating {
            cb();
        }
    }

    pub(crate) fn did_finish_animating(&self) {
        if let Some(cb) = &self.on_did_finish_animating {
            cb();
        }
    }

    pub(crate) fn selected(&self, real_index: usize) {
        if let Some(cb) = &self.on_select {
            cb(real_index);
        }
    }
}

impl core::fmt::Debug for GlideshowDelegate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlideshowDelegate")
            .field("on_page_change", &self.on_page_change.is_some())
            .field("on_will_begin_dragging", &self.on_will_begin_dragging.is_some())
            .field("on_did_end_decelerating", &self.on_did_end_decelerating.is_some())
            .field("on_did_finish_animating", &self.on_did_finish_animating.is_some())
            .field(
                "on_scroll_direction_change",
                &self.on_scroll_direction_change.is_some(),
            )
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}
