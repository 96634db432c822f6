use crate::Direction;

/// Default minimum horizontal travel (device-independent pixels) for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Classifies a horizontal travel (`start_x - end_x`) as a swipe.
///
/// Travel beyond `threshold` to the left is a forward swipe, beyond `-threshold` a backward
/// one. Anything with a magnitude `<= threshold` is not a gesture.
pub fn classify_swipe(distance: f32, threshold: f32) -> Option<Direction> {
    if distance > threshold {
        Some(Direction::Forward)
    } else if distance < -threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

/// Tracks the horizontal coordinates of one touch/pointer gesture.
///
/// Only the x axis is recorded, so vertical panning is never captured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Ends the gesture and resets the tracker.
    ///
    /// A gesture without a recorded end coordinate (no move, or aborted) yields `None`.
    pub fn finish(&mut self, threshold: f32) -> Option<Direction> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        let distance = start? - end?;
        classify_swipe(distance, threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}
