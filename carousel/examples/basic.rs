// Example: minimal usage, navigation and the wrap correction.
use carousel::{Carousel, CarouselOptions, TransitionOutcome};

fn main() {
    let dishes = vec!["burger", "pizza", "fries", "chicken"];
    let options = CarouselOptions::default()
        .with_auto_play(false)
        .with_on_index_change(Some(|i| println!("active item: {i}")));
    let mut c = Carousel::new(dishes, 4, options);

    println!(
        "clone_sets={} start_index={} render_len={}",
        c.clone_sets(),
        c.start_index(),
        c.render_len()
    );

    for _ in 0..5 {
        c.next();
        let layout = c.layout();
        println!(
            "track={} offset={:.3}% animate={}",
            c.track_index(),
            layout.offset_percent,
            layout.animate
        );
        // A real adapter calls this when the slide motion has finished.
        if let TransitionOutcome::Corrected { from, to } = c.on_transition_end() {
            println!("wrapped {from} -> {to} without animation");
        }
    }

    let visible = c.visible_slots();
    c.for_each_slot(|slot| {
        if visible.contains(slot.slot_index) {
            println!("slot {} shows {}", slot.slot_index, slot.item);
        }
    });
}
