use alloc::sync::Arc;

use crate::swipe::DEFAULT_SWIPE_THRESHOLD;

/// Default autoplay period.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;
/// Smallest autoplay period the engine accepts; shorter values are clamped up.
pub const MIN_INTERVAL_MS: u64 = 16;
/// Default duration of one slide motion.
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// A callback fired when the logical (0-based, non-cloned) index changes.
pub type OnIndexChange = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired when the raw, clone-aware track position changes.
pub type OnTrackIndexChange = Arc<dyn Fn(i64) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s so adapters can
/// update a few fields and call `Carousel::set_options` without reallocating closures.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Advance automatically every `interval_ms`.
    pub auto_play: bool,
    pub interval_ms: u64,
    /// Suspend autoplay while the pointer is over the widget.
    pub pause_on_hover: bool,
    /// External override that suspends autoplay regardless of hover.
    pub is_paused: bool,
    /// Duration adapters should animate one step over.
    pub transition_ms: u64,
    /// Minimum horizontal travel for a swipe, in device-independent pixels.
    pub swipe_threshold: f32,

    pub on_index_change: Option<OnIndexChange>,
    pub on_track_index_change: Option<OnTrackIndexChange>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            pause_on_hover: false,
            is_paused: false,
            transition_ms: DEFAULT_TRANSITION_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            on_index_change: None,
            on_track_index_change: None,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from plain configuration data (no callbacks).
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            auto_play: config.auto_play,
            interval_ms: config.interval_ms,
            pause_on_hover: config.pause_on_hover,
            is_paused: config.is_paused,
            transition_ms: config.transition_ms,
            swipe_threshold: config.swipe_threshold,
            on_index_change: None,
            on_track_index_change: None,
        }
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_paused(mut self, is_paused: bool) -> Self {
        self.is_paused = is_paused;
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: f32) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_track_index_change(
        mut self,
        on_track_index_change: Option<impl Fn(i64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_track_index_change = on_track_index_change.map(|f| Arc::new(f) as _);
        self
    }

    /// The autoplay period actually used, clamped to [`MIN_INTERVAL_MS`].
    pub fn effective_interval_ms(&self) -> u64 {
        self.interval_ms.max(MIN_INTERVAL_MS)
    }

    /// The swipe threshold actually used; negative or NaN values fall back to the default.
    pub fn effective_swipe_threshold(&self) -> f32 {
        if self.swipe_threshold >= 0.0 {
            self.swipe_threshold
        } else {
            DEFAULT_SWIPE_THRESHOLD
        }
    }

    /// Extracts the plain-data part of these options.
    pub fn to_config(&self, items_per_view: usize) -> CarouselConfig {
        CarouselConfig {
            items_per_view,
            auto_play: self.auto_play,
            interval_ms: self.interval_ms,
            pause_on_hover: self.pause_on_hover,
            is_paused: self.is_paused,
            transition_ms: self.transition_ms,
            swipe_threshold: self.swipe_threshold,
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("auto_play", &self.auto_play)
            .field("interval_ms", &self.interval_ms)
            .field("pause_on_hover", &self.pause_on_hover)
            .field("is_paused", &self.is_paused)
            .field("transition_ms", &self.transition_ms)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("on_index_change", &self.on_index_change.is_some())
            .field("on_track_index_change", &self.on_track_index_change.is_some())
            .finish()
    }
}

/// Plain configuration data for a carousel, without callbacks.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so a host can keep
/// carousel settings next to the rest of its page configuration. Missing fields take their
/// defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    pub items_per_view: usize,
    pub auto_play: bool,
    pub interval_ms: u64,
    pub pause_on_hover: bool,
    pub is_paused: bool,
    pub transition_ms: u64,
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let options = CarouselOptions::default();
        options.to_config(1)
    }
}
