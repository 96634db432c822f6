//! Index arithmetic for the cloned render track.
//!
//! The track is laid out as `[previous clones] x S + [middle] x 1 + [next clones] x S` where
//! `S = clone_sets(len)`. Every function here is pure; the engine recomputes them whenever the
//! item count changes.

use crate::{LayoutState, SlotRange};

/// Minimum number of slot-equivalents on each side of the middle copy.
///
/// This is the slack available for rapid repeated navigation before a wrap correction runs.
pub const MIN_BUFFER_ITEMS: usize = 50;

/// Number of full copies of the list placed on each side of the middle copy.
///
/// Always at least 2. For an empty list the value is irrelevant and reported as 2.
pub fn clone_sets(len: usize) -> usize {
    if len == 0 {
        return 2;
    }
    MIN_BUFFER_ITEMS.div_ceil(len).max(2)
}

/// First track position of the middle copy (the start of the safe zone).
pub fn start_index(len: usize, clone_sets: usize) -> i64 {
    len.saturating_mul(clone_sets) as i64
}

/// Total number of slots in the render track.
pub fn render_len(len: usize, clone_sets: usize) -> usize {
    len.saturating_mul(clone_sets.saturating_mul(2).saturating_add(1))
}

/// Maps a track position to the index of the item it shows.
///
/// Valid for any `track_index`, including negative ones. Returns `None` for an empty list.
pub fn logical_index(track_index: i64, start_index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let offset = track_index.saturating_sub(start_index).rem_euclid(len as i64);
    Some(offset as usize)
}

/// Returns `true` if `track_index` lies in `[start_index, start_index + len)`.
pub fn in_safe_zone(track_index: i64, start_index: i64, len: usize) -> bool {
    track_index >= start_index && track_index < start_index.saturating_add(len as i64)
}

/// Maps any track position to the equivalent position inside the safe zone.
///
/// Positions already inside the safe zone are returned unchanged.
pub fn wrap_to_safe_zone(track_index: i64, start_index: i64, len: usize) -> i64 {
    match logical_index(track_index, start_index, len) {
        Some(offset) => start_index + offset as i64,
        None => track_index,
    }
}

/// Computes the track geometry for a given position.
///
/// The three percentages stay mutually consistent: translating the track by `-offset_percent`
/// while it is `track_width_percent` wide always shows exactly `items_per_view` whole slots.
pub fn layout(
    render_len: usize,
    items_per_view: usize,
    track_index: i64,
    animate: bool,
) -> LayoutState {
    if render_len == 0 {
        return LayoutState {
            animate,
            ..LayoutState::default()
        };
    }
    let items_per_view = items_per_view.max(1);
    let slot_width_percent = 100.0 / render_len as f64;
    LayoutState {
        slot_width_percent,
        offset_percent: track_index as f64 * slot_width_percent,
        track_width_percent: (render_len as f64 / items_per_view as f64) * 100.0,
        animate,
    }
}

/// Slots visible at rest for a given position, clamped to the render track.
pub fn visible_slots(render_len: usize, items_per_view: usize, track_index: i64) -> SlotRange {
    let start = track_index.clamp(0, render_len as i64) as usize;
    let end = start.saturating_add(items_per_view.max(1)).min(render_len);
    SlotRange {
        start_index: start,
        end_index: end,
    }
}
