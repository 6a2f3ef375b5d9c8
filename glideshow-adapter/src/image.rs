use std::collections::HashMap;
use std::num::NonZeroUsize;

use glideshow::ImageSource;
use lru::LruCache;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Default number of decoded images kept by an [`ImageCache`].
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;

/// Decoded images keyed by URL, evicting the least recently used entry once full.
///
/// The cache is owned by whoever constructs the [`ImageLoader`]; several loaders can start from
/// clones of a shared, pre-warmed cache.
#[derive(Clone)]
pub struct ImageCache<I> {
    entries: LruCache<String, I>,
}

impl<I> Default for ImageCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> ImageCache<I> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_IMAGE_CACHE_CAPACITY)
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Looks up `url` and marks it most recently used.
    pub fn get(&mut self, url: &str) -> Option<&I> {
        self.entries.get(url)
    }

    /// Looks up `url` without touching its recency.
    pub fn peek(&self, url: &str) -> Option<&I> {
        self.entries.peek(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    /// Inserts or replaces `url`, returning the previous image for it.
    pub fn insert(&mut self, url: impl Into<String>, image: I) -> Option<I> {
        self.entries.put(url.into(), image)
    }

    pub fn remove(&mut self, url: &str) -> Option<I> {
        self.entries.pop(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<I> core::fmt::Debug for ImageCache<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Identifies one load request. Requests from the same loader never share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

struct Resolved<I> {
    request: RequestId,
    url: String,
    image: Option<I>,
}

/// Completion handle passed to an [`ImageFetcher`].
///
/// The handle can be moved to any thread. It resolves exactly once: either through
/// [`ImageCompletion::complete`] or, if dropped unresolved, as a failed load.
pub struct ImageCompletion<I> {
    request: RequestId,
    url: String,
    tx: Option<UnboundedSender<Resolved<I>>>,
}

impl<I> ImageCompletion<I> {
    pub fn request(&self) -> RequestId {
        self.request
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Resolves the request. `None` reports a failed load.
    pub fn complete(mut self, image: Option<I>) {
        self.resolve(image);
    }

    fn resolve(&mut self, image: Option<I>) {
        let Some(tx) = self.tx.take() else {
            return;
        };
        // The loader may already be gone; there is nobody left to tell.
        let _ = tx.send(Resolved {
            request: self.request,
            url: std::mem::take(&mut self.url),
            image,
        });
    }
}

impl<I> Drop for ImageCompletion<I> {
    fn drop(&mut self) {
        self.resolve(None);
    }
}

impl<I> core::fmt::Debug for ImageCompletion<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageCompletion")
            .field("request", &self.request)
            .field("url", &self.url)
            .field("resolved", &self.tx.is_none())
            .finish()
    }
}

/// The transport behind an [`ImageLoader`] (network, disk, bundled assets...).
///
/// `fetch` must not block; it starts the load and eventually resolves `completion`, from any
/// thread.
pub trait ImageFetcher<I> {
    fn fetch(&self, url: &str, completion: ImageCompletion<I>);
}

impl<I, F> ImageFetcher<I> for F
where
    F: Fn(&str, ImageCompletion<I>),
{
    fn fetch(&self, url: &str, completion: ImageCompletion<I>) {
        self(url, completion)
    }
}

/// Result of asking the loader for a cell's image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageState<I> {
    /// The image is available now (static, or cached).
    Ready(I),
    /// A fetch is in flight; its result arrives through [`ImageLoader::poll`].
    Pending(RequestId),
}

/// A finished load for a cell that still wants it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDelivery<I> {
    pub cell: usize,
    pub url: String,
    /// `None` when the load failed.
    pub image: Option<I>,
}

/// Loads slide images for reusable host cells.
///
/// A cell is the host's reusable view slot, not a virtual index. Each request supersedes the
/// previous one for the same cell, so a late result for content the cell no longer shows is
/// never delivered. Results are cached by URL whether or not they are still wanted.
pub struct ImageLoader<I, F> {
    fetcher: F,
    cache: ImageCache<I>,
    pending: HashMap<usize, RequestId>,
    next_request: u64,
    tx: UnboundedSender<Resolved<I>>,
    rx: UnboundedReceiver<Resolved<I>>,
}

impl<I, F> ImageLoader<I, F>
where
    I: Clone,
    F: ImageFetcher<I>,
{
    pub fn new(fetcher: F) -> Self {
        Self::with_cache(fetcher, ImageCache::new())
    }

    pub fn with_cache(fetcher: F, cache: ImageCache<I>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            fetcher,
            cache,
            pending: HashMap::new(),
            next_request: 0,
            tx,
            rx,
        }
    }

    pub fn cache(&self) -> &ImageCache<I> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ImageCache<I> {
        &mut self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn is_pending(&self, cell: usize) -> bool {
        self.pending.contains_key(&cell)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Requests the image for `cell`, superseding whatever the cell asked for before.
    pub fn request(&mut self, cell: usize, source: &ImageSource<I>) -> ImageState<I> {
        self.pending.remove(&cell);
        let url = match source {
            ImageSource::Static(image) => return ImageState::Ready(image.clone()),
            ImageSource::Remote(url) => url,
        };
        if let Some(image) = self.cache.get(url) {
            atrace!(cell, url = url.as_str(), "ImageLoader: cache hit");
            return ImageState::Ready(image.clone());
        }

        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.pending.insert(cell, request);
        atrace!(cell, request = request.0, url = url.as_str(), "ImageLoader: fetch");
        self.fetcher.fetch(
            url,
            ImageCompletion {
                request,
                url: url.clone(),
                tx: Some(self.tx.clone()),
            },
        );
        ImageState::Pending(request)
    }

    /// Forgets the cell's outstanding request (e.g. the cell was recycled).
    pub fn cancel(&mut self, cell: usize) {
        self.pending.remove(&cell);
    }

    /// Drains finished loads. Call from the UI thread.
    ///
    /// Successful loads are cached; results whose cell moved on to another request are dropped.
    pub fn poll(&mut self) -> Vec<ImageDelivery<I>> {
        let mut out = Vec::new();
        // The loader holds a sender, so the channel is never disconnected.
        while let Ok(resolved) = self.rx.try_recv() {
            if let Some(image) = &resolved.image {
                self.cache.insert(resolved.url.clone(), image.clone());
            } else {
                adebug!(
                    request = resolved.request.0,
                    url = resolved.url.as_str(),
                    "ImageLoader: load failed"
                );
            }

            let cell = self
                .pending
                .iter()
                .find_map(|(&cell, &request)| (request == resolved.request).then_some(cell));
            let Some(cell) = cell else {
                atrace!(request = resolved.request.0, "ImageLoader: superseded");
                continue;
            };
            self.pending.remove(&cell);
            out.push(ImageDelivery {
                cell,
                url: resolved.url,
                image: resolved.image,
            });
        }
        out
    }
}

impl<I, F> core::fmt::Debug for ImageLoader<I, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("cache", &self.cache)
            .field("pending", &self.pending)
            .finish()
    }
}
