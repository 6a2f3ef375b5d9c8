use crate::{PageIndicatorPosition, Rect};

/// Geometry split between the carousel and its page indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorLayout {
    pub carousel: Rect,
    /// `None` when the indicator is hidden.
    pub indicator: Option<Rect>,
}

/// Mirror of the host's page indicator (page count + current page).
///
/// The host renders from this state; the engine keeps it in step with the coordinator's page.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndicatorSync {
    page_count: usize,
    current_page: usize,
    position: PageIndicatorPosition,
    strip_height: f64,
}

impl Default for PageIndicatorSync {
    fn default() -> Self {
        Self::new(PageIndicatorPosition::Hidden, 10.0)
    }
}

impl PageIndicatorSync {
    pub fn new(position: PageIndicatorPosition, strip_height: f64) -> Self {
        Self {
            page_count: 0,
            current_page: 0,
            position,
            strip_height: strip_height.max(0.0),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn position(&self) -> PageIndicatorPosition {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.position == PageIndicatorPosition::Bottom
    }

    pub fn set_position(&mut self, position: PageIndicatorPosition, strip_height: f64) {
        self.position = position;
        self.strip_height = strip_height.max(0.0);
    }

    /// Called when the slide set is replaced: the page count follows the set, and the last
    /// known page is kept when it still exists.
    pub fn sync_slides(&mut self, count: usize) {
        self.page_count = count;
        self.current_page = if count == 0 {
            0
        } else {
            self.current_page.min(count - 1)
        };
    }

    /// Called with the coordinator's zero-based page on every page change.
    pub fn sync_page(&mut self, page: usize) {
        if self.page_count == 0 {
            return;
        }
        self.current_page = page.min(self.page_count - 1);
    }

    /// Splits `bounds` between the carousel and the indicator strip.
    pub fn layout(&self, bounds: Rect) -> IndicatorLayout {
        match self.position {
            PageIndicatorPosition::Hidden => IndicatorLayout {
                carousel: bounds,
                indicator: None,
            },
            PageIndicatorPosition::Bottom => {
                let strip = self.strip_height.min(bounds.height.max(0.0));
                let carousel = Rect::new(bounds.x, bounds.y, bounds.width, bounds.height - strip);
                IndicatorLayout {
                    carousel,
                    indicator: Some(Rect::new(bounds.x, carousel.max_y(), bounds.width, strip)),
                }
            }
        }
    }
}
