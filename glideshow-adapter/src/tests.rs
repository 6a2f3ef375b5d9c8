use crate::*;

use glideshow::{GlideshowDelegate, GlideshowError, GlideshowOptions, ImageSource, Rect, Slide, SlideSet};
use std::sync::{Arc, Mutex};

fn slides(n: usize) -> SlideSet<u32> {
    (0..n).map(|i| Slide::with_static_image(i as u32)).collect()
}

fn controller(options: GlideshowOptions, n: usize, pages: &Arc<Mutex<Vec<usize>>>) -> Controller<u32> {
    let sink = Arc::clone(pages);
    let delegate = GlideshowDelegate::new().with_on_page_change(move |p| sink.lock().unwrap().push(p));
    let g = glideshow::Glideshow::new(options).with_delegate(delegate);
    let mut c = Controller::from_glideshow(g).with_animation(200, Easing::Linear);
    assert_eq!(c.set_bounds(Rect::new(0.0, 0.0, 300.0, 200.0), 0), None);
    c.set_slides(slides(n), 0);
    c
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert!((easing.sample(0.5) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 50.0);
    t.retarget(50, 300.0, 100);
    assert_eq!(t.sample(50), 50.0);
    assert_eq!(t.sample(100), 175.0);
    assert!(t.is_done(150));
    assert_eq!(t.sample(1_000), 300.0);
}

#[test]
fn set_slides_places_surface_in_middle_lap() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let c = controller(GlideshowOptions::default(), 3, &pages);
    assert_eq!(c.glideshow().offset(), 81.0 * 300.0);
    assert_eq!(c.glideshow().current_slide(), Some(1));
    assert_eq!(*pages.lock().unwrap(), vec![1]);
    assert!(!c.is_animating());
}

#[test]
fn autoplay_tween_advances_one_slide() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller(
        GlideshowOptions::default().with_autoplay_interval_ms(2_000),
        3,
        &pages,
    );

    assert_eq!(c.tick(1_000), None);
    assert_eq!(c.tick(2_000), None);
    assert!(c.is_animating());

    assert_eq!(c.tick(2_150), Some(24_525.0));
    assert_eq!(c.glideshow().current_slide(), Some(2));

    assert_eq!(c.tick(2_200), Some(24_600.0));
    assert!(!c.is_animating());
    assert_eq!(*pages.lock().unwrap(), vec![1, 2]);
}

#[test]
fn recenter_is_applied_when_the_tween_lands_near_an_edge() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller(
        GlideshowOptions::default()
            .with_autoplay_interval_ms(2_000)
            .with_loop_multiplier(3),
        3,
        &pages,
    );
    assert_eq!(c.glideshow().offset(), 900.0);

    for start in [2_000u64, 4_000] {
        c.tick(start);
        c.tick(start + 200);
    }
    assert_eq!(c.glideshow().offset(), 1_500.0);

    c.tick(6_000);
    assert_eq!(c.tick(6_200), Some(900.0));
    assert_eq!(c.glideshow().offset(), 900.0);
    assert_eq!(c.glideshow().current_slide(), Some(1));
    assert_eq!(*pages.lock().unwrap(), vec![1, 2, 3, 1]);
}

#[test]
fn drag_cancels_active_tween() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller(GlideshowOptions::default(), 3, &pages);

    assert_eq!(c.jump_to_slide(3, true, 0), Ok(None));
    assert!(c.is_animating());
    let mid = c.tick(100).unwrap();
    assert!(mid > 24_300.0 && mid < 24_900.0);

    c.begin_drag();
    assert!(!c.is_animating());
    assert_eq!(c.tick(150), None);
    assert_eq!(c.glideshow().offset(), mid);
}

#[test]
fn immediate_jump_is_applied_at_once() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller(GlideshowOptions::default(), 3, &pages);

    assert_eq!(c.jump_to_slide(2, false, 0), Ok(Some(24_600.0)));
    assert!(!c.is_animating());
    assert_eq!(*pages.lock().unwrap(), vec![1, 2]);

    assert_eq!(
        c.jump_to_slide(4, true, 0),
        Err(GlideshowError::InvalidSlideIndex {
            target: 4,
            count: 3
        })
    );
    assert!(!c.is_animating());
}

#[test]
fn deceleration_far_from_middle_recenters() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller(GlideshowOptions::default(), 3, &pages);

    c.begin_drag();
    c.on_scroll(160.0 * 300.0);
    assert_eq!(c.end_drag(true, 0), None);
    assert_eq!(c.end_decelerating(0), Some(82.0 * 300.0));
    assert_eq!(c.glideshow().current_slide(), Some(2));
}

#[test]
fn teardown_stops_autoplay() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller(
        GlideshowOptions::default().with_autoplay_interval_ms(1_000),
        3,
        &pages,
    );
    c.tick(1_000);
    assert!(c.is_animating());
    c.teardown();
    assert!(!c.is_animating());
    assert_eq!(c.tick(5_000), None);
    assert!(!c.is_animating());
}

type Queue = Arc<Mutex<Vec<ImageCompletion<u32>>>>;

fn deferred_loader() -> (ImageLoader<u32, impl ImageFetcher<u32>>, Queue) {
    let queue: Queue = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&queue);
    let loader = ImageLoader::new(move |_url: &str, completion: ImageCompletion<u32>| {
        sink.lock().unwrap().push(completion);
    });
    (loader, queue)
}

fn take(queue: &Queue, url: &str) -> ImageCompletion<u32> {
    let mut queue = queue.lock().unwrap();
    let pos = queue.iter().position(|c| c.url() == url).unwrap();
    queue.remove(pos)
}

#[test]
fn static_images_are_ready_immediately() {
    let (mut loader, queue) = deferred_loader();
    assert_eq!(loader.request(0, &ImageSource::Static(5)), ImageState::Ready(5));
    assert!(queue.lock().unwrap().is_empty());
    assert!(!loader.is_pending(0));
}

#[test]
fn remote_image_resolves_from_another_thread_and_is_cached() {
    let (mut loader, queue) = deferred_loader();
    let remote = ImageSource::Remote("https://img/a".to_string());

    let ImageState::Pending(request) = loader.request(0, &remote) else {
        panic!("expected a pending request");
    };
    let completion = take(&queue, "https://img/a");
    assert_eq!(completion.request(), request);
    std::thread::spawn(move || completion.complete(Some(7)))
        .join()
        .unwrap();

    assert_eq!(
        loader.poll(),
        vec![ImageDelivery {
            cell: 0,
            url: "https://img/a".to_string(),
            image: Some(7),
        }]
    );
    assert!(loader.poll().is_empty());
    assert_eq!(loader.cache().peek("https://img/a"), Some(&7));
    assert_eq!(loader.request(1, &remote), ImageState::Ready(7));
}

#[test]
fn superseded_results_are_cached_but_not_delivered() {
    let (mut loader, queue) = deferred_loader();
    loader.request(0, &ImageSource::Remote("a".to_string()));
    loader.request(0, &ImageSource::Remote("b".to_string()));
    assert_eq!(loader.pending_count(), 1);

    take(&queue, "a").complete(Some(1));
    take(&queue, "b").complete(Some(2));

    let delivered = loader.poll();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].cell, 0);
    assert_eq!(delivered[0].image, Some(2));
    assert_eq!(loader.cache().len(), 2);
}

#[test]
fn dropped_completion_reports_failure_once() {
    let (mut loader, queue) = deferred_loader();
    loader.request(3, &ImageSource::Remote("c".to_string()));
    drop(take(&queue, "c"));

    let delivered = loader.poll();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].image, None);
    assert!(!loader.cache().contains("c"));
    assert!(loader.poll().is_empty());
}

#[test]
fn cancelled_cell_gets_nothing() {
    let (mut loader, queue) = deferred_loader();
    loader.request(4, &ImageSource::Remote("d".to_string()));
    loader.cancel(4);
    take(&queue, "d").complete(Some(9));

    assert!(loader.poll().is_empty());
    assert!(loader.cache().contains("d"));
}

#[test]
fn injected_cache_serves_hits_without_fetching() {
    let mut cache = ImageCache::new();
    cache.insert("warm", 11u32);
    let fetches = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&fetches);
    let mut loader = ImageLoader::with_cache(
        move |_url: &str, _completion: ImageCompletion<u32>| *counter.lock().unwrap() += 1,
        cache,
    );

    assert_eq!(
        loader.request(0, &ImageSource::Remote("warm".to_string())),
        ImageState::Ready(11)
    );
    assert_eq!(*fetches.lock().unwrap(), 0);
    // An unresolved completion dropped inside the fetcher still reports back.
    loader.request(1, &ImageSource::Remote("cold".to_string()));
    assert_eq!(*fetches.lock().unwrap(), 1);
    assert_eq!(loader.poll()[0].image, None);
}

#[test]
fn cache_evicts_least_recently_used() {
    let mut cache = ImageCache::with_capacity(2);
    cache.insert("a", 1u32);
    cache.insert("b", 2);
    assert_eq!(cache.get("a"), Some(&1));
    cache.insert("c", 3);

    assert_eq!(cache.len(), 2);
    assert!(cache.contains("a"));
    assert!(!cache.contains("b"));
    assert_eq!(cache.peek("c"), Some(&3));
    assert_eq!(ImageCache::<u32>::with_capacity(0).capacity(), 1);
}

#[test]
fn cache_stays_bounded_while_a_cell_streams_urls() {
    let queue: Queue = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&queue);
    let mut loader = ImageLoader::with_cache(
        move |_url: &str, completion: ImageCompletion<u32>| sink.lock().unwrap().push(completion),
        ImageCache::with_capacity(16),
    );

    for i in 0..1_000u32 {
        let url = format!("https://img/{i}");
        loader.request(0, &ImageSource::Remote(url.clone()));
        take(&queue, &url).complete(Some(i));
        assert_eq!(loader.poll().len(), 1);
    }

    assert_eq!(loader.cache().len(), 16);
    assert!(!loader.cache().contains("https://img/0"));
    assert_eq!(loader.cache().peek("https://img/999"), Some(&999));
}
