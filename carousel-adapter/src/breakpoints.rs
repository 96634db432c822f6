use alloc::vec::Vec;

/// Maps a viewport width to how many slides fit side by side.
///
/// `base` applies below the first breakpoint; each `(min_width, items_per_view)` pair applies
/// from `min_width` upward until a wider breakpoint takes over.
///
/// The default shows 1 item below 1024px and 4 items from 1024px.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    base: usize,
    steps: Vec<(u32, usize)>, // sorted by min_width, unique
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(1).with_breakpoint(1024, 4)
    }
}

impl Breakpoints {
    /// Creates a mapping with no breakpoints. `base` is clamped to at least 1.
    pub fn new(base: usize) -> Self {
        Self {
            base: base.max(1),
            steps: Vec::new(),
        }
    }

    /// Adds (or replaces) a breakpoint. `items_per_view` is clamped to at least 1.
    pub fn with_breakpoint(mut self, min_width: u32, items_per_view: usize) -> Self {
        let items_per_view = items_per_view.max(1);
        match self.steps.binary_search_by_key(&min_width, |&(w, _)| w) {
            Ok(i) => self.steps[i].1 = items_per_view,
            Err(i) => self.steps.insert(i, (min_width, items_per_view)),
        }
        self
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn steps(&self) -> &[(u32, usize)] {
        &self.steps
    }

    pub fn items_per_view(&self, viewport_width: u32) -> usize {
        self.steps
            .iter()
            .rev()
            .find(|&&(min_width, _)| viewport_width >= min_width)
            .map_or(self.base, |&(_, n)| n)
    }
}
