//! Tab strip press/drag tracking
//!
//! Each tab group owns one of these. A press on a movable tab arms a drag
//! candidate; once the pointer travels past the threshold the candidate
//! becomes a drag start and the strip stops tracking until released.

use super::layout::{PaneId, Point};

/// Default distance (px, either axis) a press must travel before it counts as a drag
pub const DRAG_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabStripState {
    /// Pane whose tab was pressed and may become a drag
    pub drag_candidate: Option<PaneId>,
    /// Where the press happened
    pub drag_start: Point,
    /// A drag start has already been raised for the current press
    pub is_dragging: bool,
}

impl TabStripState {
    /// Forget any press in progress
    pub fn reset(&mut self) {
        self.drag_candidate = None;
        self.is_dragging = false;
    }

    /// Record a press on a movable tab
    pub fn arm(&mut self, pane: PaneId, at: Point) {
        self.drag_candidate = Some(pane);
        self.drag_start = at;
        self.is_dragging = false;
    }

    /// Feed a pointer move. Returns the pane once the move crosses `threshold`.
    ///
    /// Fires at most once per press.
    pub fn track_move(&mut self, at: Point, threshold: f32) -> Option<PaneId> {
        if self.is_dragging {
            return None;
        }
        let candidate = self.drag_candidate?;

        let dx = at.x - self.drag_start.x;
        let dy = at.y - self.drag_start.y;
        if dx.abs() > threshold || dy.abs() > threshold {
            self.is_dragging = true;
            self.drag_candidate = None;
            Some(candidate)
        } else {
            None
        }
    }
}
