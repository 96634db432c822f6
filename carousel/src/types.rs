/// Direction of a single navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The signed track delta of one step in this direction.
    pub fn delta(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Whether a slide motion is in flight.
///
/// The wrap correction is instantaneous: it happens inside
/// [`crate::Carousel::on_transition_end`] and is reported through
/// [`TransitionOutcome::Corrected`], never as a phase of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Animating,
}

/// Result of reporting a completed slide motion to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionOutcome {
    /// No motion was in flight (or the engine is empty/disposed).
    Ignored,
    /// The motion ended inside the safe zone; nothing to do.
    Settled,
    /// The motion ended outside the safe zone and the track was moved back without animation.
    Corrected { from: i64, to: i64 },
}

impl TransitionOutcome {
    pub fn is_corrected(&self) -> bool {
        matches!(self, Self::Corrected { .. })
    }
}

/// One slot of the render track.
///
/// `item` borrows from the original list: the clones are never materialized.
#[derive(Debug)]
pub struct Slot<'a, T> {
    pub item: &'a T,
    /// Index of `item` in the original list, in `0..len`.
    pub logical_index: usize,
    /// Position in the render track, in `0..render_len`.
    pub slot_index: usize,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl SlotRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, slot_index: usize) -> bool {
        slot_index >= self.start_index && slot_index < self.end_index
    }
}
