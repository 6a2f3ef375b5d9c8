use crate::{CellVisual, GlideshowOptions, LabelKind, LabelVisual};

/// A label as seen by the animator: which one it is, and how fast it glides.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelSpec {
    pub kind: LabelKind,
    pub glide_factor: f64,
}

impl LabelSpec {
    pub fn new(kind: LabelKind, glide_factor: f64) -> Self {
        Self { kind, glide_factor }
    }

    /// Caption, title and description with the glide factors from `options`.
    pub fn from_options(options: &GlideshowOptions) -> [LabelSpec; 3] {
        LabelKind::ALL.map(|kind| Self::new(kind, options.glide_factor(kind)))
    }
}

/// The two visible cells at the edges of the viewport, identified by virtual index.
///
/// At rest both are the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeCells {
    pub first: usize,
    pub last: usize,
}

/// Horizontal origin and opacity of one label for a given relative offset.
///
/// The label glides `glide_factor` times faster than the scroll. A non-prominent cell hides any
/// label that left its rest position; otherwise opacity falls off quadratically in the glide
/// factor as the cell leaves the centre, clamped to `[0, 1]`.
pub fn glide_label(
    relative_offset: f64,
    viewport_width: f64,
    margin_left: f64,
    glide_factor: f64,
    prominent: bool,
) -> (f64, f64) {
    let offset_x = glide_factor * relative_offset + margin_left;
    if !prominent && offset_x != margin_left {
        return (offset_x, 0.0);
    }
    let travel = if viewport_width > 0.0 {
        (relative_offset * glide_factor) / viewport_width
    } else {
        0.0
    };
    let alpha = (1.0 - (travel * glide_factor).abs()).clamp(0.0, 1.0);
    (offset_x, alpha)
}

/// Tracks which visible cells are prominent and derives their label visuals.
#[derive(Clone, Debug)]
pub struct CellAnimator {
    visible: Vec<usize>,
    first_prominent: bool,
    last_prominent: bool,
}

impl Default for CellAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CellAnimator {
    pub fn new() -> Self {
        Self {
            visible: Vec::new(),
            first_prominent: true,
            last_prominent: true,
        }
    }

    /// Replaces the set of visible cells (virtual indexes, any order).
    pub fn set_visible_cells(&mut self, tags: impl IntoIterator<Item = usize>) {
        self.visible.clear();
        self.visible.extend(tags);
        self.visible.sort_unstable();
        self.visible.dedup();
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.first_prominent = true;
        self.last_prominent = true;
    }

    pub fn visible_cells(&self) -> &[usize] {
        &self.visible
    }

    pub fn edges(&self) -> Option<EdgeCells> {
        let first = *self.visible.first()?;
        let last = *self.visible.last()?;
        Some(EdgeCells { first, last })
    }

    /// Hands prominence to the edge cell under the current whole section. During a scroll only
    /// one edge cell shows its content.
    pub fn on_scroll(&mut self, section: i64) {
        let Some(edges) = self.edges() else {
            return;
        };
        if section == edges.first as i64 {
            self.first_prominent = true;
            self.last_prominent = false;
        } else {
            self.first_prominent = false;
            self.last_prominent = true;
        }
    }

    /// Marks both edge cells prominent once scrolling came to rest.
    pub fn settle(&mut self) {
        self.first_prominent = true;
        self.last_prominent = true;
    }

    pub fn is_prominent(&self, tag: usize) -> bool {
        match self.edges() {
            // A lone visible cell is both edges, and one of them always holds prominence.
            Some(edges) if edges.first == edges.last => true,
            Some(edges) if tag == edges.first => self.first_prominent,
            Some(edges) if tag == edges.last => self.last_prominent,
            _ => true,
        }
    }

    /// Computes the visuals of every visible cell.
    ///
    /// All visible cells share `relative_offset` (the distance between the current section's
    /// origin and the scroll offset).
    pub fn compute_visuals(
        &self,
        relative_offset: f64,
        viewport_width: f64,
        margin_left: f64,
        labels: &[LabelSpec],
    ) -> Vec<CellVisual> {
        self.visible
            .iter()
            .map(|&tag| {
                let prominent = self.is_prominent(tag);
                let labels = labels
                    .iter()
                    .map(|spec| {
                        let (offset_x, alpha) = glide_label(
                            relative_offset,
                            viewport_width,
                            margin_left,
                            spec.glide_factor,
                            prominent,
                        );
                        LabelVisual {
                            kind: spec.kind,
                            offset_x,
                            alpha,
                        }
                    })
                    .collect();
                CellVisual {
                    tag,
                    prominent,
                    labels,
                }
            })
            .collect()
    }
}
