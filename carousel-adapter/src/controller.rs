use alloc::vec::Vec;

use carousel::{Carousel, CarouselOptions, Direction, Phase};

use crate::{Breakpoints, Easing, Tween};

/// What the rendering surface should draw this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Current (possibly mid-motion) offset; render as `translateX(-offset%)`.
    pub offset_percent: f64,
    pub track_width_percent: f64,
    pub slot_width_percent: f64,
    /// `true` while a slide motion is in progress.
    pub animating: bool,
    /// `true` if the track jumped back into the safe zone this frame. Draw without a transition.
    pub corrected: bool,
}

/// A framework-neutral controller that wraps a `carousel::Carousel` and animates it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `next` / `prev` and the pointer/touch methods when UI events occur
/// - `on_viewport_width` when the viewport is resized
/// - `tick(now_ms)` each frame, and draw the returned [`Frame`]
///
/// The controller plays the role of the CSS transition: each step tweens the rendered offset
/// over `transition_ms`, a step during a motion retargets the tween from where it currently is,
/// and when the tween settles the carousel is told the transition ended.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    c: Carousel<T>,
    breakpoints: Option<Breakpoints>,
    easing: Easing,
    tween: Option<Tween>,
    offset_percent: f64,
    corrected: bool,
}

impl<T> Controller<T> {
    pub fn new(items: Vec<T>, items_per_view: usize, options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(items, items_per_view, options))
    }

    pub fn from_carousel(c: Carousel<T>) -> Self {
        let offset_percent = c.layout().offset_percent;
        Self {
            c,
            breakpoints: None,
            easing: Easing::default(),
            tween: None,
            offset_percent,
            corrected: false,
        }
    }

    /// Enables responsive sizing. The breakpoints take effect on the next `on_viewport_width`.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.c
    }

    /// Direct access to the engine.
    ///
    /// If you change the position through it, call [`Controller::sync`] afterwards.
    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<T> {
        self.c
    }

    pub fn breakpoints(&self) -> Option<&Breakpoints> {
        self.breakpoints.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn offset_percent(&self) -> f64 {
        self.offset_percent
    }

    pub fn next(&mut self, now_ms: u64) {
        self.c.next();
        self.follow(now_ms);
    }

    pub fn prev(&mut self, now_ms: u64) {
        self.c.prev();
        self.follow(now_ms);
    }

    pub fn pointer_enter(&mut self) {
        self.c.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.c.pointer_leave();
    }

    pub fn touch_start(&mut self, x: f32) {
        self.c.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.c.touch_move(x);
    }

    /// Ends a touch gesture; a recognized swipe starts a motion.
    pub fn touch_end(&mut self, now_ms: u64) -> Option<Direction> {
        let direction = self.c.touch_end()?;
        self.follow(now_ms);
        Some(direction)
    }

    pub fn touch_cancel(&mut self) {
        self.c.touch_cancel();
    }

    pub fn set_paused(&mut self, is_paused: bool) {
        self.c.set_paused(is_paused);
    }

    /// Applies the breakpoints for a new viewport width.
    ///
    /// Returns `true` if the per-view count changed. The track is then reset to the start of the
    /// middle copy without animation.
    pub fn on_viewport_width(&mut self, viewport_width: u32) -> bool {
        let Some(breakpoints) = &self.breakpoints else {
            return false;
        };
        let items_per_view = breakpoints.items_per_view(viewport_width);
        if items_per_view == self.c.items_per_view() {
            return false;
        }
        self.c.set_items_per_view(items_per_view);
        adebug!(viewport_width, items_per_view, "breakpoint reset");
        self.snap();
        true
    }

    /// Reconfigures the engine.
    ///
    /// A motion in progress keeps running unless the track was reset (item count or per-view
    /// count changed), in which case the offset snaps to the new position.
    pub fn configure(&mut self, items: Vec<T>, items_per_view: usize, options: CarouselOptions) {
        let before = self.structure();
        self.c.configure(items, items_per_view, options);
        if self.structure() != before {
            adebug!(
                len = self.c.len(),
                items_per_view = self.c.items_per_view(),
                "configure reset"
            );
            self.snap();
        }
    }

    /// Re-reads the engine position without animation (after external changes).
    pub fn sync(&mut self) {
        self.snap();
    }

    /// Advances autoplay and the slide motion.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        self.corrected = false;
        if self.c.tick(now_ms) {
            self.follow(now_ms);
        }

        if let Some(tween) = self.tween {
            self.offset_percent = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                let outcome = self.c.on_transition_end();
                if outcome.is_corrected() {
                    // Same frame as the completed motion, drawn without a transition.
                    adebug!(?outcome, now_ms, "same-frame correction");
                    self.corrected = true;
                }
                self.offset_percent = self.c.layout().offset_percent;
            }
        }

        self.frame()
    }

    pub fn frame(&self) -> Frame {
        let layout = self.c.layout();
        Frame {
            offset_percent: self.offset_percent,
            track_width_percent: layout.track_width_percent,
            slot_width_percent: layout.slot_width_percent,
            animating: self.tween.is_some(),
            corrected: self.corrected,
        }
    }

    pub fn dispose(&mut self) {
        self.c.dispose();
        self.snap();
    }

    fn follow(&mut self, now_ms: u64) {
        if self.c.is_disposed() {
            return;
        }
        let target = self.c.layout().offset_percent;
        let duration_ms = self.c.options().transition_ms;
        match &mut self.tween {
            Some(tween) => {
                atrace!(now_ms, target, "retarget");
                tween.retarget(now_ms, target, duration_ms);
            }
            None => {
                if target == self.offset_percent {
                    return;
                }
                atrace!(now_ms, from = self.offset_percent, target, "tween start");
                self.tween = Some(Tween::new(
                    self.offset_percent,
                    target,
                    now_ms,
                    duration_ms,
                    self.easing,
                ));
            }
        }
    }

    fn structure(&self) -> (usize, usize, i64, i64) {
        (
            self.c.len(),
            self.c.items_per_view(),
            self.c.start_index(),
            self.c.track_index(),
        )
    }

    fn snap(&mut self) {
        self.tween = None;
        if self.c.phase() == Phase::Animating {
            // Jumping to the target ends the motion.
            self.corrected |= self.c.on_transition_end().is_corrected();
        }
        self.offset_percent = self.c.layout().offset_percent;
    }
}
