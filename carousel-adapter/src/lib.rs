//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core state and arithmetic. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-driven slide motion that reports transition completion back to the engine
//! - Responsive breakpoints (viewport width -> items per view)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod breakpoints;
mod controller;
mod tween;


pub use breakpoints::Breakpoints;
pub use controller::{Controller, Frame};
pub use tween::{Easing, Tween};
