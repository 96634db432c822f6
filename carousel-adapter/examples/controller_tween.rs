// Example: tween-driven slide motion, rapid clicks, a resize and the seam correction.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use carousel::CarouselOptions;
use carousel_adapter::{Breakpoints, Controller, Easing};

fn main() {
    let active = Arc::new(AtomicUsize::new(0));
    let options = CarouselOptions::default()
        .with_auto_play(false)
        .with_on_index_change(Some({
            let active = Arc::clone(&active);
            move |i| active.store(i, Ordering::Relaxed)
        }));

    let menu = vec!["burger", "pizza", "fries", "chicken"];
    let mut c = Controller::new(menu, 4, options)
        .with_breakpoints(Breakpoints::default())
        .with_easing(Easing::EaseInOut);

    // The page starts on a phone.
    c.on_viewport_width(390);

    let mut now_ms = 0u64;
    loop {
        // Three quick taps on ">" around t=100ms, one "<" at t=900ms.
        if [96u64, 112, 128].contains(&now_ms) {
            c.next(now_ms);
        }
        if now_ms == 896 {
            c.prev(now_ms);
        }
        if now_ms == 1600 {
            println!("t={now_ms}ms rotate to landscape tablet");
            c.on_viewport_width(1180);
        }

        let frame = c.tick(now_ms);
        if frame.corrected {
            println!("t={now_ms}ms seam correction (no transition)");
        }
        if now_ms % 64 == 0 || frame.corrected {
            println!(
                "t={now_ms}ms offset={:.3}% width={:.0}% animating={} active={}",
                frame.offset_percent,
                frame.track_width_percent,
                frame.animating,
                active.load(Ordering::Relaxed)
            );
        }

        now_ms += 16;
        if now_ms > 2000 {
            break;
        }
    }

    c.dispose();
}
