use crate::Phase;

/// A lightweight, serializable snapshot of the track position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackState {
    pub track_index: i64,
    /// `None` when the item list is empty.
    pub logical_index: Option<usize>,
    pub animate: bool,
    pub phase: Phase,
}

/// How the rendering surface should lay out and move the track.
///
/// All values are percentages:
/// - `slot_width_percent` is relative to the track's own width.
/// - `offset_percent` is relative to the track's own width (render as `translateX(-offset%)`).
/// - `track_width_percent` is relative to the viewport.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub slot_width_percent: f64,
    pub offset_percent: f64,
    pub track_width_percent: f64,
    /// `false` means the next position write must snap (no transition).
    pub animate: bool,
}
