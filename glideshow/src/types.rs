/// Horizontal scroll direction, named after the way the content travels.
///
/// `Left` means the offset grew (content moves left, revealing later slides); `Right` means the
/// offset shrank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageIndicatorPosition {
    Bottom,
    #[default]
    Hidden,
}

/// The three text labels carried by a slide, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelKind {
    Caption,
    Title,
    Description,
}

impl LabelKind {
    pub const ALL: [LabelKind; 3] = [Self::Caption, Self::Title, Self::Description];
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Why a [`ScrollCommand`] was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollReason {
    /// Places a freshly assigned slide set at the middle of the virtual range.
    Initial,
    Autoplay,
    Jump,
    /// Silent correction that keeps the virtual index away from the range edges.
    Recenter,
    /// Keeps the current virtual index in place after a viewport resize.
    Resize,
}

/// A request for the host scroll surface to move to a virtual index.
///
/// The target content offset is `index * viewport_width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub index: usize,
    pub animated: bool,
    pub reason: ScrollReason,
}

impl ScrollCommand {
    pub fn offset(&self, viewport_width: f64) -> f64 {
        self.index as f64 * viewport_width
    }
}

/// Animated state of a single label inside a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelVisual {
    pub kind: LabelKind,
    /// Horizontal origin of the label inside the slide body.
    pub offset_x: f64,
    pub alpha: f64,
}

/// Derived visual state of a visible cell. Recomputed on every offset signal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellVisual {
    /// Virtual index of the cell.
    pub tag: usize,
    pub prominent: bool,
    pub labels: Vec<LabelVisual>,
}

impl CellVisual {
    pub fn label(&self, kind: LabelKind) -> Option<&LabelVisual> {
        self.labels.iter().find(|l| l.kind == kind)
    }

    pub fn label_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        self.labels.iter().map(|l| l.offset_x)
    }

    pub fn label_alphas(&self) -> impl Iterator<Item = f64> + '_ {
        self.labels.iter().map(|l| l.alpha)
    }
}
