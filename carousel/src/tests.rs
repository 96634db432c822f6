use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

#[derive(Clone, Default)]
struct Recorder {
    indexes: Arc<Mutex<Vec<usize>>>,
    tracks: Arc<Mutex<Vec<i64>>>,
}

impl Recorder {
    fn options(&self) -> CarouselOptions {
        let indexes = Arc::clone(&self.indexes);
        let tracks = Arc::clone(&self.tracks);
        CarouselOptions::default()
            .with_auto_play(false)
            .with_on_index_change(Some(move |i| indexes.lock().unwrap().push(i)))
            .with_on_track_index_change(Some(move |t| tracks.lock().unwrap().push(t)))
    }

    fn indexes(&self) -> Vec<usize> {
        self.indexes.lock().unwrap().clone()
    }

    fn tracks(&self) -> Vec<i64> {
        self.tracks.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.indexes.lock().unwrap().clear();
        self.tracks.lock().unwrap().clear();
    }
}

fn items(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn manual(n: usize, items_per_view: usize) -> Carousel<u32> {
    Carousel::new(
        items(n),
        items_per_view,
        CarouselOptions::default().with_auto_play(false),
    )
}

#[test]
fn clone_sets_cover_minimum_buffer() {
    for n in 1..=200usize {
        let sets = track::clone_sets(n);
        assert!(sets >= 2, "n={n}");
        assert!(sets * n >= MIN_BUFFER_ITEMS, "n={n} sets={sets}");
        // Smallest factor satisfying both bounds.
        assert!(sets == 2 || (sets - 1) * n < MIN_BUFFER_ITEMS, "n={n} sets={sets}");
    }
    assert_eq!(track::clone_sets(0), 2);
    assert_eq!(track::clone_sets(4), 13);
    assert_eq!(track::clone_sets(50), 2);
    assert_eq!(track::clone_sets(7), 8);
}

#[test]
fn new_starts_at_middle_copy() {
    let c = manual(4, 4);
    assert_eq!(c.clone_sets(), 13);
    assert_eq!(c.start_index(), 52);
    assert_eq!(c.track_index(), 52);
    assert_eq!(c.render_len(), 4 * 27);
    assert_eq!(c.safe_zone(), 52..56);
    assert_eq!(c.logical_index(), Some(0));
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.is_in_safe_zone());
}

#[test]
fn new_reports_initial_position() {
    let rec = Recorder::default();
    let c = Carousel::new(items(3), 1, rec.options());
    assert_eq!(rec.indexes(), [0]);
    assert_eq!(rec.tracks(), [c.start_index()]);
}

#[test]
fn four_steps_forward_wrap_once() {
    let rec = Recorder::default();
    let mut c = Carousel::new(items(4), 4, rec.options());
    let start = c.start_index();
    rec.clear();

    let mut corrections = 0;
    for _ in 0..4 {
        c.next();
        assert!(c.animate());
        if c.on_transition_end().is_corrected() {
            corrections += 1;
        }
    }

    assert_eq!(rec.indexes(), [1, 2, 3, 0]);
    assert_eq!(corrections, 1);
    assert_eq!(c.track_index(), start);
    assert_eq!(
        rec.tracks(),
        [start + 1, start + 2, start + 3, start + 4, start]
    );
}

#[test]
fn backward_step_from_start_wraps_to_last_item() {
    let mut c = manual(4, 1);
    let start = c.start_index();
    c.prev();
    assert_eq!(c.track_index(), start - 1);
    assert_eq!(c.logical_index(), Some(3));
    assert!(!c.is_in_safe_zone());

    let outcome = c.on_transition_end();
    assert_eq!(
        outcome,
        TransitionOutcome::Corrected {
            from: start - 1,
            to: start + 3
        }
    );
    assert_eq!(c.logical_index(), Some(3));
}

#[test]
fn correction_is_unanimated_and_next_step_animates_again() {
    let mut c = manual(3, 1);
    for _ in 0..3 {
        c.next();
    }
    assert_eq!(c.phase(), Phase::Animating);
    assert!(c.on_transition_end().is_corrected());
    assert!(!c.animate());
    assert!(!c.layout().animate);
    assert!(c.is_in_safe_zone());
    assert_eq!(c.phase(), Phase::Idle);

    c.next();
    assert!(c.animate());
    assert!(c.layout().animate);
}

#[test]
fn transition_end_inside_safe_zone_settles() {
    let mut c = manual(5, 2);
    c.next();
    assert_eq!(c.on_transition_end(), TransitionOutcome::Settled);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.animate());
}

#[test]
fn transition_end_without_motion_is_ignored() {
    let mut c = manual(5, 2);
    assert_eq!(c.on_transition_end(), TransitionOutcome::Ignored);
    c.next();
    c.on_transition_end();
    assert_eq!(c.on_transition_end(), TransitionOutcome::Ignored);
}

#[test]
fn rapid_steps_accumulate_then_correct_once() {
    let mut c = manual(4, 1);
    let start = c.start_index();
    for _ in 0..11 {
        c.next();
    }
    assert_eq!(c.track_index(), start + 11);
    assert_eq!(
        c.on_transition_end(),
        TransitionOutcome::Corrected {
            from: start + 11,
            to: start + 3
        }
    );
    assert_eq!(c.logical_index(), Some(3));
}

#[test]
fn next_prev_round_trip_restores_track_index() {
    let mut c = manual(6, 3);
    let origin = c.track_index();
    for _ in 0..9 {
        c.next();
    }
    for _ in 0..9 {
        c.prev();
    }
    assert_eq!(c.track_index(), origin);
}

#[test]
fn empty_list_is_inert() {
    let rec = Recorder::default();
    let mut c = Carousel::new(Vec::<u32>::new(), 4, rec.options().with_auto_play(true));
    c.next();
    c.prev();
    c.touch_start(200.0);
    c.touch_move(100.0);
    assert_eq!(c.touch_end(), None);
    assert_eq!(c.on_transition_end(), TransitionOutcome::Ignored);
    assert!(!c.tick(0));
    assert!(!c.tick(100_000));

    assert!(rec.indexes().is_empty());
    assert!(rec.tracks().is_empty());
    assert_eq!(c.render_len(), 0);
    assert_eq!(c.slots().count(), 0);
    assert_eq!(c.logical_index(), None);
    assert!(c.visible_slots().is_empty());
    assert!(c.slot(0).is_none());
    let layout = c.layout();
    assert_eq!(layout.track_width_percent, 0.0);
    assert_eq!(layout.offset_percent, 0.0);
}

#[test]
fn configure_from_empty_reports_new_position() {
    let rec = Recorder::default();
    let mut c = Carousel::new(Vec::<u32>::new(), 1, rec.options());
    c.configure(items(3), 1, rec.options());
    assert_eq!(rec.indexes(), [0]);
    assert_eq!(rec.tracks(), [c.start_index()]);

    c.configure(Vec::new(), 1, rec.options());
    c.configure(items(3), 1, rec.options());
    assert_eq!(rec.indexes(), [0, 0]);
}

#[test]
fn slots_map_to_original_items() {
    let c = Carousel::new(
        alloc::vec!['a', 'b', 'c'],
        1,
        CarouselOptions::default().with_auto_play(false),
    );
    let mut seen = Vec::new();
    c.for_each_slot(|slot| seen.push((slot.slot_index, slot.logical_index, *slot.item)));
    assert_eq!(seen.len(), c.render_len());
    for (slot_index, logical_index, item) in seen.iter().copied() {
        assert_eq!(logical_index, slot_index % 3);
        assert_eq!(item, ['a', 'b', 'c'][logical_index]);
    }
    assert_eq!(seen[0].0, 0);
    assert_eq!(seen.last().unwrap().0, c.render_len() - 1);

    let slot = c.slot(c.start_index() as usize + 1).unwrap();
    assert_eq!(*slot.item, 'b');
    assert!(c.slot(c.render_len()).is_none());
}

#[test]
fn layout_shows_exactly_items_per_view_slots() {
    for (n, per_view) in [(4usize, 4usize), (4, 1), (7, 3), (60, 5), (1, 1)] {
        let c = manual(n, per_view);
        let layout = c.layout();
        let render_len = c.render_len() as f64;

        assert!((layout.slot_width_percent * render_len - 100.0).abs() < 1e-9);
        assert!(
            (layout.offset_percent - c.track_index() as f64 * layout.slot_width_percent).abs()
                < 1e-9
        );
        // One slot, measured against the viewport, is 100 / per_view percent wide.
        let slot_in_viewport = layout.track_width_percent * layout.slot_width_percent / 100.0;
        assert!((slot_in_viewport - 100.0 / per_view as f64).abs() < 1e-9);

        let visible = c.visible_slots();
        assert_eq!(visible.len(), per_view);
        assert_eq!(visible.start_index as i64, c.track_index());
    }
}

#[test]
fn items_per_view_below_one_is_clamped() {
    let mut c = manual(4, 0);
    assert_eq!(c.items_per_view(), 1);
    c.set_items_per_view(0);
    assert_eq!(c.items_per_view(), 1);
    assert_eq!(c.layout().track_width_percent, c.render_len() as f64 * 100.0);
}

#[test]
fn resize_resets_track_without_animation() {
    let rec = Recorder::default();
    let mut c = Carousel::new(items(4), 4, rec.options());
    let start = c.start_index();
    c.next();
    c.next();
    rec.clear();

    c.set_items_per_view(1);
    assert_eq!(c.track_index(), start);
    assert!(!c.animate());
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(rec.indexes(), [0]);
    assert_eq!(rec.tracks(), [start]);

    // A reset is not a motion: there is nothing to complete.
    assert_eq!(c.on_transition_end(), TransitionOutcome::Ignored);

    rec.clear();
    c.set_items_per_view(1);
    assert!(rec.tracks().is_empty());
}

#[test]
fn item_count_change_recomputes_start_index() {
    let mut c = manual(4, 1);
    c.next();
    c.set_items(items(10));
    assert_eq!(c.clone_sets(), 5);
    assert_eq!(c.start_index(), 50);
    assert_eq!(c.track_index(), 50);

    // Same count, new contents: position is kept.
    c.next();
    c.set_items((100..110).collect());
    assert_eq!(c.track_index(), 51);
    assert_eq!(*c.slot(51).unwrap().item, 101);
}

#[test]
fn swipe_threshold_is_exclusive() {
    assert_eq!(classify_swipe(60.0, 50.0), Some(Direction::Forward));
    assert_eq!(classify_swipe(-60.0, 50.0), Some(Direction::Backward));
    assert_eq!(classify_swipe(30.0, 50.0), None);
    assert_eq!(classify_swipe(50.0, 50.0), None);
    assert_eq!(classify_swipe(-50.0, 50.0), None);
}

#[test]
fn swipes_navigate_exactly_once() {
    let mut c = manual(5, 1);
    let start = c.start_index();

    c.touch_start(300.0);
    c.touch_move(270.0);
    c.touch_move(240.0);
    assert_eq!(c.touch_end(), Some(Direction::Forward));
    assert_eq!(c.track_index(), start + 1);

    c.touch_start(100.0);
    c.touch_move(160.0);
    assert_eq!(c.touch_end(), Some(Direction::Backward));
    assert_eq!(c.track_index(), start);

    c.touch_start(100.0);
    c.touch_move(70.0);
    assert_eq!(c.touch_end(), None);
    assert_eq!(c.track_index(), start);

    // The tracker resets after each release.
    assert_eq!(c.touch_end(), None);
}

#[test]
fn swipe_without_end_coordinate_is_not_a_gesture() {
    let mut c = manual(5, 1);
    let start = c.track_index();
    c.touch_start(300.0);
    assert_eq!(c.touch_end(), None);

    c.touch_start(300.0);
    c.touch_move(100.0);
    c.touch_cancel();
    assert_eq!(c.touch_end(), None);
    assert_eq!(c.track_index(), start);

    // Moves without a start are ignored.
    c.touch_move(10.0);
    assert_eq!(c.touch_end(), None);
}

#[test]
fn swipe_threshold_option_is_respected() {
    let mut c = Carousel::new(
        items(5),
        1,
        CarouselOptions::default()
            .with_auto_play(false)
            .with_swipe_threshold(100.0),
    );
    c.touch_start(300.0);
    c.touch_move(240.0);
    assert_eq!(c.touch_end(), None);

    c.set_options(c.options().clone().with_swipe_threshold(f32::NAN));
    c.touch_start(300.0);
    c.touch_move(240.0);
    assert_eq!(c.touch_end(), Some(Direction::Forward));
}

#[test]
fn autoplay_advances_every_interval() {
    let mut c = Carousel::new(items(4), 1, CarouselOptions::default());
    let start = c.start_index();
    assert!(c.is_autoplay_active());

    // The first tick arms the timer.
    assert!(!c.tick(0));
    assert!(!c.tick(2999));
    assert!(c.tick(3000));
    assert_eq!(c.track_index(), start + 1);
    assert!(!c.tick(4000));
    assert!(c.tick(6000));
    assert_eq!(c.track_index(), start + 2);
}

#[test]
fn manual_step_restarts_autoplay_countdown() {
    let mut c = Carousel::new(items(4), 1, CarouselOptions::default());
    c.tick(0);
    c.tick(2000);
    c.next();
    assert!(!c.tick(3000));
    assert!(!c.tick(4999));
    assert!(c.tick(5000));
}

#[test]
fn reconfiguring_with_same_inputs_keeps_autoplay_running() {
    let mut c = Carousel::new(items(4), 1, CarouselOptions::default());
    let start = c.start_index();
    let mut fired = 0;
    for now_ms in (0..=10_000u64).step_by(16) {
        // Hosts commonly re-send the same configuration on every render.
        c.configure(items(4), 1, CarouselOptions::default());
        if c.tick(now_ms) {
            fired += 1;
        }
    }
    assert_eq!(fired, 3);
    assert_eq!(c.track_index(), start + 3);
}

#[test]
fn autoplay_pauses_while_hovered() {
    let mut c = Carousel::new(
        items(4),
        1,
        CarouselOptions::default().with_pause_on_hover(true),
    );
    let start = c.start_index();
    c.tick(0);
    c.pointer_enter();
    assert!(c.is_hovered());
    assert!(!c.is_autoplay_active());
    for now in [3000u64, 6000, 9000, 30_000] {
        assert!(!c.tick(now));
    }
    assert_eq!(c.track_index(), start);

    c.pointer_leave();
    assert!(c.is_autoplay_active());
    assert!(!c.tick(32_999));
    assert!(c.tick(33_000));
    assert_eq!(c.track_index(), start + 1);
}

#[test]
fn hover_is_not_latched_without_pause_on_hover() {
    let mut c = Carousel::new(items(4), 1, CarouselOptions::default());
    c.pointer_enter();
    assert!(!c.is_hovered());
    c.tick(0);
    assert!(c.tick(3000));
}

#[test]
fn external_pause_overrides_autoplay() {
    let mut c = Carousel::new(items(4), 1, CarouselOptions::default().with_paused(true));
    c.tick(0);
    assert!(!c.tick(10_000));
    c.set_paused(false);
    assert!(!c.tick(12_999));
    assert!(c.tick(13_000));
}

#[test]
fn disabling_autoplay_clears_hover() {
    let mut c = Carousel::new(
        items(4),
        1,
        CarouselOptions::default().with_pause_on_hover(true),
    );
    c.pointer_enter();
    assert!(c.is_hovered());
    c.set_auto_play(false);
    assert!(!c.is_hovered());
    c.tick(0);
    assert!(!c.tick(10_000));

    c.set_auto_play(true);
    assert!(c.is_autoplay_active());
    assert!(!c.tick(12_999));
    assert!(c.tick(13_000));
}

#[test]
fn interval_is_clamped_and_change_rearms() {
    let mut c = Carousel::new(items(4), 1, CarouselOptions::default().with_interval_ms(0));
    c.tick(0);
    assert!(!c.tick(MIN_INTERVAL_MS - 1));
    assert!(c.tick(MIN_INTERVAL_MS));

    c.tick(100);
    c.set_interval_ms(1000);
    assert!(!c.tick(1099));
    assert!(c.tick(1100));
}

#[test]
fn dispose_silences_callbacks_and_autoplay() {
    let rec = Recorder::default();
    let mut c = Carousel::new(items(4), 1, rec.options().with_auto_play(true));
    c.tick(0);
    rec.clear();

    c.dispose();
    assert!(c.is_disposed());
    assert!(!c.is_autoplay_active());
    let track = c.track_index();

    c.next();
    c.prev();
    c.touch_start(300.0);
    c.touch_move(0.0);
    assert_eq!(c.touch_end(), None);
    assert!(!c.tick(10_000));
    assert_eq!(c.on_transition_end(), TransitionOutcome::Ignored);
    c.configure(items(9), 2, rec.options());
    c.set_items_per_view(3);

    assert_eq!(c.track_index(), track);
    assert_eq!(c.len(), 4);
    assert!(rec.indexes().is_empty());
    assert!(rec.tracks().is_empty());
}

#[test]
fn batch_update_coalesces_notifications() {
    let rec = Recorder::default();
    let mut c = Carousel::new(items(4), 1, rec.options());
    let start = c.start_index();
    rec.clear();

    c.batch_update(|c| {
        c.next();
        c.next();
        c.next();
    });
    assert_eq!(rec.indexes(), [3]);
    assert_eq!(rec.tracks(), [start + 3]);

    rec.clear();
    c.batch_update(|c| {
        c.next();
        c.prev();
    });
    assert!(rec.indexes().is_empty());
    assert!(rec.tracks().is_empty());
}

#[test]
fn replacing_a_callback_reports_current_value() {
    let mut c = manual(4, 1);
    c.next();
    let seen = Arc::new(Mutex::new(Vec::new()));
    c.set_on_index_change(Some({
        let seen = Arc::clone(&seen);
        move |i| seen.lock().unwrap().push(i)
    }));
    assert_eq!(*seen.lock().unwrap(), [1]);

    // Unrelated option changes do not re-report.
    c.set_paused(true);
    assert_eq!(*seen.lock().unwrap(), [1]);
}

#[test]
fn config_round_trips_through_options() {
    let config = CarouselConfig {
        items_per_view: 4,
        auto_play: false,
        interval_ms: 5000,
        pause_on_hover: true,
        is_paused: false,
        transition_ms: 300,
        swipe_threshold: 40.0,
    };
    let options = CarouselOptions::from_config(&config);
    assert_eq!(options.to_config(4), config);

    let defaults = CarouselConfig::default();
    assert!(defaults.auto_play);
    assert_eq!(defaults.interval_ms, DEFAULT_INTERVAL_MS);
    assert_eq!(defaults.transition_ms, DEFAULT_TRANSITION_MS);
    assert_eq!(defaults.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
}

#[test]
fn logical_index_handles_negative_track_positions() {
    assert_eq!(track::logical_index(-1, 0, 4), Some(3));
    assert_eq!(track::logical_index(-9, 0, 4), Some(3));
    assert_eq!(track::logical_index(25, 20, 4), Some(1));
    assert_eq!(track::logical_index(19, 20, 4), Some(3));
    assert_eq!(track::logical_index(5, 0, 0), None);
    assert_eq!(track::wrap_to_safe_zone(-1, 8, 4), 11);
    assert_eq!(track::wrap_to_safe_zone(9, 8, 4), 9);
}

#[test]
fn property_logical_index_tracks_net_navigation() {
    // Fixed seeds => deterministic, non-flaky "property" coverage.
    for seed in [1u64, 2, 3, 7, 42, 1337, 2025] {
        let mut rng = Lcg::new(seed);
        let n = rng.gen_range_usize(1, 80);
        let per_view = rng.gen_range_usize(1, 6);

        let rec = Recorder::default();
        let mut c = Carousel::new(items(n), per_view, rec.options());
        let mut expected: i64 = 0;
        let mut corrections = 0usize;
        let mut outside_settles = 0usize;

        for _ in 0..500 {
            if rng.gen_bool() {
                c.next();
                expected += 1;
            } else {
                c.prev();
                expected -= 1;
            }

            let logical = c.logical_index().unwrap();
            assert!(logical < n);
            assert_eq!(logical as i64, expected.rem_euclid(n as i64), "seed={seed}");
            if let Some(&last) = rec.indexes().last() {
                assert_eq!(last, logical, "seed={seed}");
            }

            // Sometimes let the motion settle; sometimes keep stacking steps.
            if rng.gen_range_usize(0, 3) > 0 {
                let outside = !c.is_in_safe_zone();
                if outside {
                    outside_settles += 1;
                }
                let outcome = c.on_transition_end();
                assert_eq!(outcome.is_corrected(), outside, "seed={seed}");
                if outcome.is_corrected() {
                    corrections += 1;
                    assert!(!c.animate());
                }
                assert!(c.is_in_safe_zone(), "seed={seed}");
                assert_eq!(c.logical_index(), Some(expected.rem_euclid(n as i64) as usize));
            }

            let render_len = c.render_len() as i64;
            assert!(c.track_index() >= 0 && c.track_index() < render_len);
        }

        // Consecutive duplicates never reach listeners.
        let reported = rec.indexes();
        assert!(reported.windows(2).all(|w| w[0] != w[1]), "seed={seed}");
        assert_eq!(corrections, outside_settles, "seed={seed}");
    }
}
