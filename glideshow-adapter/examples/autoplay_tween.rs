use glideshow::{GlideshowDelegate, GlideshowOptions, Rect, Slide};
use glideshow_adapter::{Controller, Easing};

fn main() {
    // Example: a frame loop driving autoplay through the tween controller.
    //
    // An adapter would:
    // - call tick(now_ms) from its frame callback
    // - move the real scroll surface to the returned offset (if any)
    // - render cells using the glideshow visuals
    let delegate = GlideshowDelegate::new().with_on_page_change(|page| println!("page -> {page}"));
    let g = glideshow::Glideshow::new(
        GlideshowOptions::default()
            .with_autoplay_interval_secs(1.0)
            .with_loop_multiplier(5),
    )
    .with_delegate(delegate);
    let mut c = Controller::from_glideshow(g).with_animation(240, Easing::SmoothStep);

    c.set_bounds(Rect::new(0.0, 0.0, 400.0, 300.0), 0);
    let slides: Vec<Slide<u32>> = (0..4).map(Slide::with_static_image).collect();
    if let Some(off) = c.set_slides(slides, 0) {
        println!("placed at {off}");
    }

    let mut now_ms = 0u64;
    while now_ms < 12_000 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if !c.is_animating() {
                println!("t={now_ms} settled at {off} slide={:?}", c.glideshow().current_slide());
            }
        }
    }

    c.teardown();
    println!("done: offset={}", c.glideshow().offset());
}
