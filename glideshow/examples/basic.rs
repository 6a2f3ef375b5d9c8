// Example: a host feeding scroll frames and reading pages and label visuals.
use glideshow::{Glideshow, GlideshowDelegate, GlideshowOptions, Rect, Slide};

fn main() {
    let delegate = GlideshowDelegate::new()
        .with_on_page_change(|page| println!("page -> {page}"))
        .with_on_scroll_direction_change(|d| println!("direction -> {d:?}"));
    let mut g: Glideshow<&'static str> =
        Glideshow::new(GlideshowOptions::default()).with_delegate(delegate);

    g.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
    let slides = ["sunrise.png", "harbor.png", "summit.png"]
        .into_iter()
        .enumerate()
        .map(|(i, image)| {
            Slide::with_static_image(image)
                .caption(format!("#{}", i + 1))
                .title(format!("Slide {}", i + 1))
        })
        .collect::<Vec<_>>();
    let initial = g.set_slides(slides, 0);
    println!("initial command={initial:?} item_count={}", g.item_count());

    // The host scrolls its surface to the commanded offset and echoes it.
    let Some(command) = initial else {
        return;
    };
    let mut offset = command.offset(g.viewport_width());
    g.on_offset_changed(offset);

    let start = g.scroll_state().current_virtual_index;
    g.set_visible_cells([start, start + 1]);
    g.begin_drag();
    for _ in 0..8 {
        offset += 40.0;
        g.on_offset_changed(offset);
        for visual in g.visuals() {
            let alphas: Vec<f64> = visual.label_alphas().collect();
            println!(
                "offset={offset} cell={} prominent={} alphas={alphas:?}",
                visual.tag, visual.prominent
            );
        }
    }
    g.end_drag(false, 0);
    println!("state={:?}", g.scroll_state());

    match g.jump_to_slide(9, true, 0) {
        Ok(command) => println!("jump -> {command:?}"),
        Err(err) => println!("jump rejected: {err}"),
    }
}
