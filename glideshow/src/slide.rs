use std::ops::Index;
use std::slice;

use crate::LabelKind;

/// Where a slide's background image comes from.
///
/// `I` is the host's decoded image type; the engine never looks inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSource<I> {
    /// An image owned by the slide, available synchronously.
    Static(I),
    /// A remote image, fetched asynchronously by the host's image provider.
    Remote(String),
}

/// One item of carousel content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide<I> {
    caption: Option<String>,
    title: Option<String>,
    description: Option<String>,
    image: ImageSource<I>,
}

impl<I> Slide<I> {
    pub fn new(image: ImageSource<I>) -> Self {
        Self {
            caption: None,
            title: None,
            description: None,
            image,
        }
    }

    pub fn with_static_image(image: I) -> Self {
        Self::new(ImageSource::Static(image))
    }

    pub fn with_image_url(url: impl Into<String>) -> Self {
        Self::new(ImageSource::Remote(url.into()))
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the text for a given label, if the slide has one.
    pub fn text(&self, kind: LabelKind) -> Option<&str> {
        match kind {
            LabelKind::Caption => self.caption_text(),
            LabelKind::Title => self.title_text(),
            LabelKind::Description => self.description_text(),
        }
    }

    pub fn image(&self) -> &ImageSource<I> {
        &self.image
    }
}

/// An ordered, immutable sequence of slides.
///
/// A set is replaced wholesale (see `Glideshow::set_slides`); it is never edited in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideSet<I> {
    slides: Vec<Slide<I>>,
}

impl<I> Default for SlideSet<I> {
    fn default() -> Self {
        Self { slides: Vec::new() }
    }
}

impl<I> SlideSet<I> {
    pub fn new(slides: Vec<Slide<I>>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, real_index: usize) -> Option<&Slide<I>> {
        self.slides.get(real_index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Slide<I>> {
        self.slides.iter()
    }
}

impl<I> FromIterator<Slide<I>> for SlideSet<I> {
    fn from_iter<T: IntoIterator<Item = Slide<I>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<I> From<Vec<Slide<I>>> for SlideSet<I> {
    fn from(slides: Vec<Slide<I>>) -> Self {
        Self::new(slides)
    }
}

impl<I> Index<usize> for SlideSet<I> {
    type Output = Slide<I>;

    fn index(&self, real_index: usize) -> &Self::Output {
        &self.slides[real_index]
    }
}

impl<'a, I> IntoIterator for &'a SlideSet<I> {
    type Item = &'a Slide<I>;
    type IntoIter = slice::Iter<'a, Slide<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
