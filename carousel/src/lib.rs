//! A headless engine for seamlessly looping carousels.
//!
//! For adapter-level utilities (tween-driven motion, responsive breakpoints), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the state and arithmetic behind an "infinite" carousel over a finite
//! list: clone-set sizing, track/logical index mapping, the unanimated wrap correction that
//! hides the loop seam, swipe recognition and autoplay scheduling.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - the item list and how many items fit in the viewport
//! - navigation requests and pointer/touch coordinates
//! - timestamps (`tick(now_ms)`) and a transition-complete signal
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod options;
mod state;
mod swipe;
pub mod track;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use options::{
    CarouselConfig, CarouselOptions, DEFAULT_INTERVAL_MS, DEFAULT_TRANSITION_MS,
    MIN_INTERVAL_MS, OnIndexChange, OnTrackIndexChange,
};
pub use state::{LayoutState, TrackState};
pub use swipe::{DEFAULT_SWIPE_THRESHOLD, SwipeTracker, classify_swipe};
pub use track::MIN_BUFFER_ITEMS;
pub use types::{Direction, Phase, Slot, SlotRange, TransitionOutcome};
