use crate::GlideshowOptions;

/// Maps an oversized virtual index space onto a finite slide set.
///
/// In circular mode the slide set is repeated `multiplier` times. Scrolling starts at the middle
/// lap, and [`LoopIndexMapper::recenter_if_needed`] moves the position back to the middle lap
/// (keeping the same real slide) whenever it drifts within `guard_band` indexes of either edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopIndexMapper {
    circular: bool,
    multiplier: usize,
    guard_band: usize,
}

impl Default for LoopIndexMapper {
    fn default() -> Self {
        Self::circular(
            GlideshowOptions::DEFAULT_LOOP_MULTIPLIER,
            GlideshowOptions::DEFAULT_RECENTER_GUARD_BAND,
        )
    }
}

impl LoopIndexMapper {
    /// Smallest multiplier that leaves a full lap on both sides of the middle lap.
    pub const MIN_MULTIPLIER: usize = 3;

    pub fn circular(multiplier: usize, guard_band: usize) -> Self {
        Self {
            circular: true,
            multiplier: multiplier.max(Self::MIN_MULTIPLIER),
            guard_band,
        }
    }

    /// A mapper for non-looping carousels: virtual and real indexes coincide.
    pub fn linear() -> Self {
        Self {
            circular: false,
            multiplier: 1,
            guard_band: 0,
        }
    }

    pub fn from_options(options: &GlideshowOptions) -> Self {
        if options.circular {
            Self::circular(options.loop_multiplier, options.recenter_guard_band)
        } else {
            Self::linear()
        }
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Size of the virtual index space for `count` slides.
    pub fn virtual_count(&self, count: usize) -> usize {
        count.saturating_mul(self.multiplier)
    }

    pub fn real_index(&self, virtual_index: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(virtual_index % count)
    }

    /// Zero-based page for a (possibly negative) whole section, e.g. while bouncing past the
    /// leading edge.
    pub fn page_for_section(section: i64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(section.rem_euclid(count as i64) as usize)
    }

    /// The virtual index a freshly assigned slide set starts at: the first slide of the middle
    /// lap, or `0` when not looping.
    pub fn initial_position(&self, count: usize) -> usize {
        if !self.circular || count == 0 {
            return 0;
        }
        (self.multiplier / 2).saturating_mul(count)
    }

    /// The virtual index in the middle lap showing `real_index`.
    pub fn position_for(&self, real_index: usize, count: usize) -> Option<usize> {
        if real_index >= count {
            return None;
        }
        Some(self.initial_position(count) + real_index)
    }

    /// Effective guard band, capped so that the middle lap never lies inside it.
    fn effective_guard_band(&self, count: usize) -> usize {
        let mid = self.initial_position(count);
        let total = self.virtual_count(count);
        let room = mid.min(total.saturating_sub(mid.saturating_add(count)));
        self.guard_band.min(room)
    }

    /// Returns a replacement for `current` in the middle lap when `current` is within the guard
    /// band of either edge. The replacement always shows the same real slide.
    pub fn recenter_if_needed(&self, current: usize, count: usize) -> Option<usize> {
        if !self.circular || count == 0 {
            return None;
        }
        let total = self.virtual_count(count);
        let guard = self.effective_guard_band(count);
        if current >= guard && current < total.saturating_sub(guard) {
            return None;
        }
        let target = self.initial_position(count) + current % count;
        if target == current {
            return None;
        }
        gdebug!(current, target, count, "LoopIndexMapper: recenter");
        Some(target)
    }
}
