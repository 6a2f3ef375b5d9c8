use crate::autoplay::AutoplayTimer;
use crate::{
    GlideshowError, GlideshowOptions, LoopIndexMapper, Result, ScrollCommand, ScrollDirection,
    ScrollPhase, ScrollReason, ScrollState,
};

/// Notifications produced by a single coordinator input.
///
/// Every field is `None`/`false` unless something actually changed, so hosts can forward them
/// to observers without further filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollEvents {
    /// 1-based page, set only when the page differs from the last notified one.
    pub page_changed: Option<usize>,
    /// Set only when the direction flipped.
    pub direction_changed: Option<ScrollDirection>,
    /// A scroll the host surface must perform.
    pub command: Option<ScrollCommand>,
    /// The surface came to rest (deceleration or programmatic animation finished).
    pub settled: bool,
}

impl ScrollEvents {
    pub fn is_empty(&self) -> bool {
        self.page_changed.is_none()
            && self.direction_changed.is_none()
            && self.command.is_none()
            && !self.settled
    }
}

/// Owns the scroll offset and everything derived from it: page, direction, autoplay.
///
/// All inputs are synchronous calls made from the host's UI thread. Time is supplied by the
/// host as a monotonic `now_ms`.
#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    mapper: LoopIndexMapper,
    count: usize,
    viewport_width: f64,
    offset: f64,
    direction: ScrollDirection,
    page: Option<usize>,
    notified_page: Option<usize>,
    phase: ScrollPhase,
    autoplay: AutoplayTimer,
}

impl ScrollCoordinator {
    pub fn new(options: &GlideshowOptions) -> Self {
        Self {
            mapper: LoopIndexMapper::from_options(options),
            count: 0,
            viewport_width: 0.0,
            offset: 0.0,
            direction: ScrollDirection::default(),
            page: None,
            notified_page: None,
            phase: ScrollPhase::Idle,
            autoplay: AutoplayTimer::new(options.autoplay_interval_ms),
        }
    }

    pub fn mapper(&self) -> &LoopIndexMapper {
        &self.mapper
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == ScrollPhase::Dragging
    }

    pub fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    /// Zero-based page, `None` when there are no slides or no viewport.
    pub fn current_page(&self) -> Option<usize> {
        self.page
    }

    /// The last page reported through [`ScrollEvents::page_changed`] (zero-based).
    pub fn notified_page(&self) -> Option<usize> {
        self.notified_page
    }

    /// Whole section under the viewport, `round(offset / viewport_width)`. May be negative while
    /// the surface bounces past its leading edge.
    pub fn section(&self) -> Option<i64> {
        if self.viewport_width <= 0.0 {
            return None;
        }
        Some((self.offset / self.viewport_width).round() as i64)
    }

    pub fn virtual_index(&self) -> usize {
        self.section().map_or(0, |s| s.max(0) as usize)
    }

    pub fn real_index(&self) -> Option<usize> {
        self.mapper.real_index(self.virtual_index(), self.count)
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset_x: self.offset,
            viewport_width: self.viewport_width,
            current_virtual_index: self.virtual_index(),
            current_page: self.page,
            direction: self.direction,
            phase: self.phase,
        }
    }

    fn autoplay_enabled(&self) -> bool {
        self.mapper.is_circular() && self.count > 1 && self.autoplay.interval_ms() > 0
    }

    fn rearm_autoplay(&mut self, now_ms: u64) {
        if self.autoplay_enabled() {
            self.autoplay.arm(now_ms);
        } else {
            self.autoplay.cancel();
        }
    }

    /// Cancels autoplay until the next re-arm (drag end, jump, reset or option change).
    pub fn cancel_autoplay(&mut self) {
        self.autoplay.cancel();
    }

    /// Resets all derived state for a new slide count and returns the command that places the
    /// surface at its initial position.
    ///
    /// No page notification is emitted here; the first offset signal reports the page.
    pub fn reset(&mut self, count: usize, now_ms: u64) -> Option<ScrollCommand> {
        gdebug!(count, "ScrollCoordinator::reset");
        self.count = count;
        self.page = None;
        self.notified_page = None;
        self.phase = ScrollPhase::Idle;
        self.rearm_autoplay(now_ms);
        if count == 0 {
            self.offset = 0.0;
            return None;
        }
        let index = self.mapper.initial_position(count);
        self.offset = index as f64 * self.viewport_width;
        Some(ScrollCommand {
            index,
            animated: false,
            reason: ScrollReason::Initial,
        })
    }

    /// Applies new options. Returns a repositioning command when the virtual index space
    /// changed shape (looping toggled or a different multiplier).
    pub fn apply_options(&mut self, options: &GlideshowOptions, now_ms: u64) -> Option<ScrollCommand> {
        let mapper = LoopIndexMapper::from_options(options);
        let interval_changed = self.autoplay.interval_ms() != options.autoplay_interval_ms;
        if interval_changed {
            self.autoplay.set_interval_ms(options.autoplay_interval_ms);
        }

        if mapper != self.mapper {
            let reshaped = mapper.is_circular() != self.mapper.is_circular()
                || mapper.multiplier() != self.mapper.multiplier();
            self.mapper = mapper;
            if reshaped {
                return self.reset(self.count, now_ms);
            }
        }

        if interval_changed || !self.autoplay_enabled() {
            self.rearm_autoplay(now_ms);
        }
        None
    }

    /// Updates the viewport width, keeping the current virtual index in place.
    pub fn set_viewport_width(&mut self, width: f64) -> Option<ScrollCommand> {
        let width = width.max(0.0);
        if self.viewport_width == width {
            return None;
        }
        let had_viewport = self.viewport_width > 0.0;
        let index = self.virtual_index();
        self.viewport_width = width;
        if !had_viewport || self.count == 0 {
            if self.count > 0 && self.offset == 0.0 {
                // The initial placement was computed without a width.
                let index = self.mapper.initial_position(self.count);
                self.offset = index as f64 * width;
                return Some(ScrollCommand {
                    index,
                    animated: false,
                    reason: ScrollReason::Initial,
                });
            }
            return None;
        }
        self.offset = index as f64 * width;
        Some(ScrollCommand {
            index,
            animated: false,
            reason: ScrollReason::Resize,
        })
    }

    fn refresh_page(&mut self, events: &mut ScrollEvents) {
        let Some(section) = self.section() else {
            return;
        };
        let Some(page) = LoopIndexMapper::page_for_section(section, self.count) else {
            return;
        };
        self.page = Some(page);
        if self.notified_page != Some(page) {
            self.notified_page = Some(page);
            events.page_changed = Some(page + 1);
        }
    }

    /// Consumes one scroll-frame offset signal from the host.
    pub fn on_offset_changed(&mut self, offset_x: f64) -> ScrollEvents {
        let mut events = ScrollEvents::default();
        gtrace!(offset_x, prev = self.offset, "ScrollCoordinator::on_offset_changed");
        if self.count == 0 {
            self.offset = offset_x;
            return events;
        }

        let direction = if offset_x < self.offset {
            Some(ScrollDirection::Right)
        } else if offset_x > self.offset {
            Some(ScrollDirection::Left)
        } else {
            None
        };
        self.offset = offset_x;
        if let Some(direction) = direction {
            if direction != self.direction {
                self.direction = direction;
                events.direction_changed = Some(direction);
            }
        }

        self.refresh_page(&mut events);
        events
    }

    pub fn begin_drag(&mut self) -> ScrollEvents {
        let mut events = ScrollEvents::default();
        self.autoplay.cancel();
        self.phase = ScrollPhase::Dragging;
        self.refresh_page(&mut events);
        events
    }

    pub fn will_end_dragging(&mut self) -> ScrollEvents {
        let mut events = ScrollEvents::default();
        self.refresh_page(&mut events);
        events
    }

    /// Ends a user drag. Autoplay is re-armed whether or not the surface decelerates; a drag
    /// that does not decelerate settles immediately.
    pub fn end_drag(&mut self, will_decelerate: bool, now_ms: u64) -> ScrollEvents {
        self.rearm_autoplay(now_ms);
        if will_decelerate {
            self.phase = ScrollPhase::Decelerating;
            return ScrollEvents::default();
        }
        self.settle()
    }

    pub fn will_begin_decelerating(&mut self) -> ScrollEvents {
        let mut events = ScrollEvents::default();
        self.phase = ScrollPhase::Decelerating;
        self.refresh_page(&mut events);
        events
    }

    pub fn end_decelerating(&mut self) -> ScrollEvents {
        self.settle()
    }

    pub fn end_scroll_animation(&mut self) -> ScrollEvents {
        self.settle()
    }

    /// Brings the coordinator to rest: refreshes the page and, in circular mode, silently
    /// recenters when the virtual index approached an edge.
    fn settle(&mut self) -> ScrollEvents {
        let mut events = ScrollEvents {
            settled: true,
            ..ScrollEvents::default()
        };
        self.phase = ScrollPhase::Idle;
        self.refresh_page(&mut events);
        if self.viewport_width <= 0.0 {
            return events;
        }
        let current = self.virtual_index();
        if let Some(index) = self.mapper.recenter_if_needed(current, self.count) {
            // The host echoes the new offset; recording it now keeps that echo from reading as
            // a direction change.
            self.offset += (index as f64 - current as f64) * self.viewport_width;
            events.command = Some(ScrollCommand {
                index,
                animated: false,
                reason: ScrollReason::Recenter,
            });
        }
        events
    }

    /// Polls the autoplay timer. Returns an animated scroll to the next virtual index when the
    /// timer fired.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if !self.autoplay_enabled() || self.is_dragging() || self.viewport_width <= 0.0 {
            return None;
        }
        if !self.autoplay.poll(now_ms) {
            return None;
        }
        let index = self.virtual_index() + 1;
        gtrace!(index, now_ms, "ScrollCoordinator: autoplay");
        self.phase = ScrollPhase::Animating;
        Some(ScrollCommand {
            index,
            animated: true,
            reason: ScrollReason::Autoplay,
        })
    }

    /// Computes a programmatic scroll to a 1-based slide number.
    ///
    /// Fails without touching any state when `slide` is outside `1..=count`.
    pub fn jump_to_slide(&mut self, slide: usize, animated: bool, now_ms: u64) -> Result<ScrollCommand> {
        if slide == 0 || slide > self.count {
            gwarn!(slide, count = self.count, "jump_to_slide: slide out of range");
            return Err(GlideshowError::InvalidSlideIndex {
                target: slide,
                count: self.count,
            });
        }
        if self.viewport_width <= 0.0 {
            return Err(GlideshowError::ViewportNotSet);
        }
        let Some(index) = self.mapper.position_for(slide - 1, self.count) else {
            return Err(GlideshowError::InvalidSlideIndex {
                target: slide,
                count: self.count,
            });
        };

        self.autoplay.cancel();
        if animated {
            self.phase = ScrollPhase::Animating;
        }
        self.rearm_autoplay(now_ms);
        gdebug!(slide, index, animated, "jump_to_slide");
        Ok(ScrollCommand {
            index,
            animated,
            reason: ScrollReason::Jump,
        })
    }
}
