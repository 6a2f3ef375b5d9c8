use crate::{Insets, LabelKind, PageIndicatorPosition};

/// Configuration for [`crate::Glideshow`].
///
/// Options are plain data: cheap to clone, and with `feature = "serde"` they can be loaded from
/// any serde format. Apply them with `Glideshow::set_options` or `Glideshow::update_options`;
/// the engine recomputes whatever derived state the change affects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlideshowOptions {
    /// Autoplay period in milliseconds. `0` disables autoplay.
    pub autoplay_interval_ms: u64,

    /// Whether the carousel loops. When disabled the virtual range is exactly the slide count,
    /// and autoplay never runs.
    pub circular: bool,

    /// Number of times the slide set is repeated in the virtual range (aka `K`).
    ///
    /// Values below 3 are raised to 3 so the midpoint always has a full lap on either side.
    pub loop_multiplier: usize,

    /// Distance (in virtual indexes) from either edge of the virtual range that triggers a
    /// silent recentering once the scroll surface settles.
    pub recenter_guard_band: usize,

    pub caption_glide_factor: f64,
    pub title_glide_factor: f64,
    pub description_glide_factor: f64,

    /// Margin between a cell's bounds and its slide body.
    pub slide_margin: Insets,
    /// Padding between the slide body and its labels. `slide_padding.left` is the rest position
    /// of every label.
    pub slide_padding: Insets,
    /// Vertical spacing between stacked labels.
    pub label_spacing: f64,

    pub page_indicator_position: PageIndicatorPosition,
    /// Height of the strip consumed by the indicator when docked at the bottom.
    pub page_indicator_height: f64,
}

impl Default for GlideshowOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GlideshowOptions {
    pub const DEFAULT_LOOP_MULTIPLIER: usize = 55;
    pub const DEFAULT_RECENTER_GUARD_BAND: usize = 5;

    pub fn new() -> Self {
        Self {
            autoplay_interval_ms: 0,
            circular: true,
            loop_multiplier: Self::DEFAULT_LOOP_MULTIPLIER,
            recenter_guard_band: Self::DEFAULT_RECENTER_GUARD_BAND,
            caption_glide_factor: 1.0,
            title_glide_factor: 2.0,
            description_glide_factor: 3.0,
            slide_margin: Insets::new(0.0, 20.0, 0.0, 20.0),
            slide_padding: Insets::new(20.0, 20.0, 20.0, 20.0),
            label_spacing: 8.0,
            page_indicator_position: PageIndicatorPosition::Hidden,
            page_indicator_height: 10.0,
        }
    }

    pub fn glide_factor(&self, kind: LabelKind) -> f64 {
        match kind {
            LabelKind::Caption => self.caption_glide_factor,
            LabelKind::Title => self.title_glide_factor,
            LabelKind::Description => self.description_glide_factor,
        }
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    /// Sets the autoplay period in seconds. Non-positive (or non-finite) values disable autoplay.
    pub fn with_autoplay_interval_secs(mut self, secs: f64) -> Self {
        self.autoplay_interval_ms = if secs.is_finite() && secs > 0.0 {
            (secs * 1000.0).round() as u64
        } else {
            0
        };
        self
    }

    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    pub fn with_loop_multiplier(mut self, loop_multiplier: usize) -> Self {
        self.loop_multiplier = loop_multiplier;
        self
    }

    pub fn with_recenter_guard_band(mut self, guard_band: usize) -> Self {
        self.recenter_guard_band = guard_band;
        self
    }

    pub fn with_glide_factors(mut self, caption: f64, title: f64, description: f64) -> Self {
        self.caption_glide_factor = caption;
        self.title_glide_factor = title;
        self.description_glide_factor = description;
        self
    }

    pub fn with_slide_margin(mut self, slide_margin: Insets) -> Self {
        self.slide_margin = slide_margin;
        self
    }

    pub fn with_slide_padding(mut self, slide_padding: Insets) -> Self {
        self.slide_padding = slide_padding;
        self
    }

    pub fn with_label_spacing(mut self, label_spacing: f64) -> Self {
        self.label_spacing = label_spacing;
        self
    }

    pub fn with_page_indicator(mut self, position: PageIndicatorPosition, height: f64) -> Self {
        self.page_indicator_position = position;
        self.page_indicator_height = height;
        self
    }
}
