//! Vertical placement of a slide's labels.
//!
//! Labels are stacked from the bottom of the slide body: description, then title above it,
//! then caption above the title. Heights come from the host's text measurement.

use crate::{GlideshowOptions, LabelKind, Rect, Size, Slide};

/// Text measurement provided by the host toolkit.
pub trait TextMeasure {
    /// Height needed to lay out `text` wrapped at `max_width`, using the font the host assigned
    /// to `kind`.
    fn measure_height(&self, text: &str, kind: LabelKind, max_width: f64) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, LabelKind, f64) -> f64,
{
    fn measure_height(&self, text: &str, kind: LabelKind, max_width: f64) -> f64 {
        self(text, kind, max_width)
    }
}

/// Frames of the slide body and its labels inside a cell.
///
/// Label frames are relative to the slide body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideLayout {
    pub body: Rect,
    pub caption: Rect,
    pub title: Rect,
    pub description: Rect,
}

impl SlideLayout {
    pub fn compute<I>(
        cell: Size,
        options: &GlideshowOptions,
        slide: &Slide<I>,
        measure: &impl TextMeasure,
    ) -> Self {
        let margin = options.slide_margin;
        let padding = options.slide_padding;
        let spacing = options.label_spacing;

        let body = Rect::new(
            margin.left,
            margin.top,
            (cell.width - margin.left - margin.right).max(0.0),
            (cell.height - margin.top - margin.bottom).max(0.0),
        );
        let label_width = (body.width - margin.left - margin.right).max(0.0);
        let height_of = |kind: LabelKind| {
            slide
                .text(kind)
                .filter(|t| !t.is_empty())
                .map_or(0.0, |t| measure.measure_height(t, kind, label_width).max(0.0))
        };

        let description_height = height_of(LabelKind::Description);
        let description = Rect::new(
            padding.left,
            body.height - padding.bottom - description_height,
            label_width,
            description_height,
        );

        let title_height = height_of(LabelKind::Title);
        let title = Rect::new(
            padding.left,
            body.height - description.height - title_height - (padding.left + spacing),
            label_width,
            title_height,
        );

        let caption_height = height_of(LabelKind::Caption);
        let caption = Rect::new(
            padding.left,
            body.height
                - description.height
                - title.height
                - (padding.bottom + spacing * 2.0)
                - caption_height,
            label_width,
            caption_height,
        );

        Self {
            body,
            caption,
            title,
            description,
        }
    }

    pub fn label(&self, kind: LabelKind) -> Rect {
        match kind {
            LabelKind::Caption => self.caption,
            LabelKind::Title => self.title,
            LabelKind::Description => self.description,
        }
    }
}
