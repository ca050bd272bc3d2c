/// Scroll-driven reveal of grid items.
///
/// The visible count grows by `step` each time the sentinel below the grid
/// becomes visible, never shrinks, and never exceeds `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealController {
    visible: usize,
    step: usize,
    total: usize,
}

impl RevealController {
    pub fn new(initial: usize, step: usize, total: usize) -> Self {
        Self {
            visible: initial.min(total),
            step,
            total,
        }
    }

    /// Handles the sentinel entering the viewport. Returns whether more items
    /// became visible.
    pub fn on_sentinel_visible(&mut self) -> bool {
        let next = self.visible.saturating_add(self.step).min(self.total);
        let grew = next > self.visible;
        self.visible = next;
        grew
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }
}
