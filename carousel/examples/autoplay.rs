// Example: adapter-driven autoplay with pause-on-hover and a swipe.
use carousel::{Carousel, CarouselOptions, Phase};

fn main() {
    let reviews = vec!["Great food", "Friendly staff", "Cozy place"];
    let options = CarouselOptions::default()
        .with_interval_ms(3000)
        .with_pause_on_hover(true)
        .with_on_index_change(Some(|i| println!("  -> review {i}")));
    let mut c = Carousel::new(reviews, 1, options);

    // Simulate a 60fps frame loop for 15 seconds.
    let mut now_ms = 0u64;
    while now_ms <= 15_000 {
        if now_ms == 4_000 {
            println!("t={now_ms}ms pointer enters");
            c.pointer_enter();
        }
        if now_ms == 9_008 {
            println!("t={now_ms}ms pointer leaves");
            c.pointer_leave();
        }
        if now_ms == 12_000 {
            println!("t={now_ms}ms swipe left");
            c.touch_start(320.0);
            c.touch_move(200.0);
            c.touch_end();
        }

        if c.tick(now_ms) {
            println!("t={now_ms}ms autoplay step");
        }
        // Pretend every motion settles within the frame.
        if c.phase() == Phase::Animating {
            c.on_transition_end();
        }

        now_ms += 16;
    }

    c.dispose();
}
