use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::autoplay::AutoplayTimer;
use crate::swipe::SwipeTracker;
use crate::track;
use crate::{
    CarouselOptions, Direction, LayoutState, Phase, Slot, SlotRange, TrackState,
    TransitionOutcome,
};

/// A headless, seamlessly looping carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never reads a clock.
/// - Your adapter drives it with navigation calls, pointer/touch coordinates, `tick(now_ms)`
///   for autoplay, and `on_transition_end()` once a slide motion has settled.
/// - Rendering is exposed via [`Carousel::for_each_slot`] and [`Carousel::layout`].
///
/// The item list is rendered as `[previous clones] + [middle] + [next clones]`. Navigation moves
/// a track position by one slot; once a motion ends outside the middle copy, the position is
/// moved back to the equivalent slot in the middle copy without animation.
///
/// For tween-driven motion and responsive breakpoints, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    items_per_view: usize,
    options: CarouselOptions,

    clone_sets: usize,
    start_index: i64,
    track_index: i64,
    animate: bool,
    phase: Phase,

    hovered: bool,
    swipe: SwipeTracker,
    autoplay: AutoplayTimer,
    disposed: bool,

    reported_index: Cell<Option<usize>>,
    reported_track_index: Cell<Option<i64>>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T> Carousel<T> {
    /// Creates a carousel positioned at the first item of the middle copy.
    ///
    /// `items_per_view` is clamped to at least 1. Initial `on_index_change` /
    /// `on_track_index_change` notifications fire for a non-empty list.
    pub fn new(items: Vec<T>, items_per_view: usize, options: CarouselOptions) -> Self {
        let len = items.len();
        let clone_sets = track::clone_sets(len);
        let start_index = track::start_index(len, clone_sets);
        cdebug!(
            len,
            items_per_view,
            clone_sets,
            auto_play = options.auto_play,
            "Carousel::new"
        );
        let mut c = Self {
            items,
            items_per_view: items_per_view.max(1),
            options,
            clone_sets,
            start_index,
            track_index: start_index,
            animate: true,
            phase: Phase::Idle,
            hovered: false,
            swipe: SwipeTracker::new(),
            autoplay: AutoplayTimer::default(),
            disposed: false,
            reported_index: Cell::new(None),
            reported_track_index: Cell::new(None),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.rearm_autoplay();
        c.notify();
        c
    }

    /// Re-initializes with a new item list, per-view count and options.
    ///
    /// Only what changed is rebuilt: the track is reset when the item count or the per-view
    /// count changes, and the autoplay timer is re-armed when one of its inputs changes.
    pub fn configure(&mut self, items: Vec<T>, items_per_view: usize, options: CarouselOptions) {
        if self.disposed {
            return;
        }
        self.batch_update(|c| {
            c.set_items(items);
            c.set_items_per_view(items_per_view);
            c.set_options(options);
        });
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        if self.disposed {
            return;
        }
        let prev = core::mem::replace(&mut self.options, options);
        ctrace!(
            auto_play = self.options.auto_play,
            interval_ms = self.options.interval_ms,
            pause_on_hover = self.options.pause_on_hover,
            is_paused = self.options.is_paused,
            "Carousel::set_options"
        );

        if prev.auto_play && !self.options.auto_play {
            // A disabled carousel may never see a pointer leave.
            self.hovered = false;
        }

        let timer_changed = prev.auto_play != self.options.auto_play
            || prev.effective_interval_ms() != self.options.effective_interval_ms()
            || prev.pause_on_hover != self.options.pause_on_hover
            || prev.is_paused != self.options.is_paused;
        if timer_changed {
            self.rearm_autoplay();
        }

        // A new listener is told the current value right away.
        if !same_callback(&prev.on_index_change, &self.options.on_index_change) {
            self.reported_index.set(None);
        }
        if !same_callback(
            &prev.on_track_index_change,
            &self.options.on_track_index_change,
        ) {
            self.reported_track_index.set(None);
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_auto_play(&mut self, auto_play: bool) {
        self.update_options(|o| o.auto_play = auto_play);
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.update_options(|o| o.interval_ms = interval_ms);
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool) {
        self.update_options(|o| o.pause_on_hover = pause_on_hover);
    }

    pub fn set_paused(&mut self, is_paused: bool) {
        self.update_options(|o| o.is_paused = is_paused);
    }

    pub fn set_on_index_change(&mut self, f: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.update_options(|o| o.on_index_change = f.map(|f| Arc::new(f) as _));
    }

    pub fn set_on_track_index_change(&mut self, f: Option<impl Fn(i64) + Send + Sync + 'static>) {
        self.update_options(|o| o.on_track_index_change = f.map(|f| Arc::new(f) as _));
    }

    /// Replaces the item list.
    ///
    /// The position is kept when the count is unchanged, and reset to the start of the middle
    /// copy otherwise.
    pub fn set_items(&mut self, items: Vec<T>) {
        if self.disposed {
            return;
        }
        let prev_len = self.items.len();
        self.items = items;
        if self.items.len() != prev_len {
            self.reset_track();
        }
        self.notify();
    }

    /// Changes how many slots are visible at once and resets the position.
    ///
    /// Values below 1 are clamped to 1. Setting the current value is a no-op.
    pub fn set_items_per_view(&mut self, items_per_view: usize) {
        if self.disposed {
            return;
        }
        let items_per_view = items_per_view.max(1);
        if self.items_per_view == items_per_view {
            return;
        }
        self.items_per_view = items_per_view;
        self.reset_track();
        self.notify();
    }

    fn reset_track(&mut self) {
        let len = self.items.len();
        self.clone_sets = track::clone_sets(len);
        self.start_index = track::start_index(len, self.clone_sets);
        self.track_index = self.start_index;
        self.animate = false;
        self.phase = Phase::Idle;
        self.swipe.cancel();
        if len == 0 {
            self.reported_index.set(None);
            self.reported_track_index.set(None);
        }
        cdebug!(
            len,
            items_per_view = self.items_per_view,
            clone_sets = self.clone_sets,
            start_index = self.start_index,
            "reset_track"
        );
        self.rearm_autoplay();
    }

    fn notify_now(&self) {
        if self.disposed {
            return;
        }
        let Some(logical) = self.logical_index() else {
            return;
        };
        if self.reported_index.get() != Some(logical) {
            self.reported_index.set(Some(logical));
            if let Some(cb) = &self.options.on_index_change {
                cb(logical);
            }
        }
        if self.reported_track_index.get() != Some(self.track_index) {
            self.reported_track_index.set(Some(self.track_index));
            if let Some(cb) = &self.options.on_track_index_change {
                cb(self.track_index);
            }
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into at most one notification per callback.
    ///
    /// Listeners only see the final values, e.g. a reconfiguration followed by a step reports
    /// one index change instead of two.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Advances one slide forward.
    pub fn next(&mut self) {
        self.step(Direction::Forward);
    }

    /// Moves one slide backward.
    pub fn prev(&mut self) {
        self.step(Direction::Backward);
    }

    fn step(&mut self, direction: Direction) {
        if self.disposed || self.items.is_empty() {
            return;
        }
        self.animate = true;
        self.phase = Phase::Animating;
        self.track_index = self.track_index.saturating_add(direction.delta());
        ctrace!(?direction, track_index = self.track_index, "step");
        self.rearm_autoplay();
        self.notify();
    }

    /// Reports that the slide motion toward the current position has finished.
    ///
    /// If the position left the safe zone, it is moved back to the equivalent slot of the
    /// middle copy with animation disabled for that single write. The adapter must apply the
    /// corrected position in the same frame, without a transition.
    pub fn on_transition_end(&mut self) -> TransitionOutcome {
        if self.disposed || self.items.is_empty() {
            return TransitionOutcome::Ignored;
        }
        if self.phase != Phase::Animating {
            cwarn!(
                track_index = self.track_index,
                "on_transition_end without a transition in flight"
            );
            return TransitionOutcome::Ignored;
        }
        self.phase = Phase::Idle;

        let len = self.items.len();
        if track::in_safe_zone(self.track_index, self.start_index, len) {
            return TransitionOutcome::Settled;
        }

        let from = self.track_index;
        let to = track::wrap_to_safe_zone(from, self.start_index, len);
        debug_assert!(track::in_safe_zone(to, self.start_index, len));
        self.animate = false;
        self.track_index = to;
        cdebug!(from, to, "wrap correction");
        self.rearm_autoplay();
        self.notify();
        TransitionOutcome::Corrected { from, to }
    }

    /// Advances the autoplay timer.
    ///
    /// Returns `true` if a step was taken. Call this from your frame loop or a periodic timer.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.disposed {
            return false;
        }
        let interval_ms = self.options.effective_interval_ms();
        if !self.autoplay.poll(now_ms, interval_ms) {
            return false;
        }
        ctrace!(now_ms, interval_ms, "autoplay step");
        self.next();
        true
    }

    /// Whether autoplay is currently allowed to advance the carousel.
    pub fn is_autoplay_active(&self) -> bool {
        !self.disposed
            && !self.items.is_empty()
            && self.options.auto_play
            && !self.options.is_paused
            && !(self.options.pause_on_hover && self.hovered)
    }

    fn rearm_autoplay(&mut self) {
        let active = self.is_autoplay_active();
        self.autoplay.rearm(active);
    }

    /// Pointer entered the widget. Latched only when `pause_on_hover` is set.
    pub fn pointer_enter(&mut self) {
        if self.disposed || !self.options.pause_on_hover {
            return;
        }
        self.set_hovered(true);
    }

    /// Pointer left the widget.
    pub fn pointer_leave(&mut self) {
        if self.disposed || !self.options.pause_on_hover {
            return;
        }
        self.set_hovered(false);
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        ctrace!(hovered, "hover");
        self.rearm_autoplay();
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn touch_start(&mut self, x: f32) {
        if self.disposed {
            return;
        }
        self.swipe.start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.disposed {
            return;
        }
        self.swipe.update(x);
    }

    /// Ends a touch gesture and navigates if it was a swipe.
    ///
    /// Returns the direction of the step taken, if any.
    pub fn touch_end(&mut self) -> Option<Direction> {
        if self.disposed {
            return None;
        }
        let threshold = self.options.effective_swipe_threshold();
        let direction = self.swipe.finish(threshold)?;
        if self.items.is_empty() {
            return None;
        }
        ctrace!(?direction, "swipe");
        self.step(direction);
        Some(direction)
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Ends the engine's lifecycle.
    ///
    /// Cancels autoplay and drops the callbacks. Every later mutating call is a no-op and no
    /// further notifications fire.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        cdebug!(track_index = self.track_index, "Carousel::dispose");
        self.autoplay.cancel();
        self.swipe.cancel();
        self.hovered = false;
        self.phase = Phase::Idle;
        self.options.on_index_change = None;
        self.options.on_track_index_change = None;
        self.notify_pending.set(false);
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn clone_sets(&self) -> usize {
        self.clone_sets
    }

    pub fn start_index(&self) -> i64 {
        self.start_index
    }

    /// Track positions of the middle copy: `[start_index, start_index + len)`.
    pub fn safe_zone(&self) -> core::ops::Range<i64> {
        self.start_index..self.start_index + self.items.len() as i64
    }

    pub fn track_index(&self) -> i64 {
        self.track_index
    }

    /// Index of the item at the current position; `None` for an empty list.
    pub fn logical_index(&self) -> Option<usize> {
        track::logical_index(self.track_index, self.start_index, self.items.len())
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_safe_zone(&self) -> bool {
        track::in_safe_zone(self.track_index, self.start_index, self.items.len())
    }

    pub fn render_len(&self) -> usize {
        track::render_len(self.items.len(), self.clone_sets)
    }

    /// Returns a lightweight snapshot of the track position.
    pub fn state(&self) -> TrackState {
        TrackState {
            track_index: self.track_index,
            logical_index: self.logical_index(),
            animate: self.animate,
            phase: self.phase,
        }
    }

    /// Returns the track geometry for the current position.
    pub fn layout(&self) -> LayoutState {
        track::layout(
            self.render_len(),
            self.items_per_view,
            self.track_index,
            self.animate,
        )
    }

    /// Slots visible once the current motion has settled.
    pub fn visible_slots(&self) -> SlotRange {
        track::visible_slots(self.render_len(), self.items_per_view, self.track_index)
    }

    pub fn slot(&self, slot_index: usize) -> Option<Slot<'_, T>> {
        if slot_index >= self.render_len() {
            cwarn!(
                slot_index,
                render_len = self.render_len(),
                "slot index out of range"
            );
            return None;
        }
        let logical_index = slot_index % self.items.len();
        Some(Slot {
            item: &self.items[logical_index],
            logical_index,
            slot_index,
        })
    }

    /// Calls `f` once per render slot, in track order, without allocations.
    ///
    /// Nothing is emitted for an empty list.
    pub fn for_each_slot(&self, mut f: impl FnMut(Slot<'_, T>)) {
        for slot in self.slots() {
            f(slot);
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot<'_, T>> + '_ {
        let len = self.items.len();
        (0..self.render_len()).map(move |slot_index| {
            let logical_index = slot_index % len;
            Slot {
                item: &self.items[logical_index],
                logical_index,
                slot_index,
            }
        })
    }
}

fn same_callback<F: ?Sized>(a: &Option<Arc<F>>, b: &Option<Arc<F>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
