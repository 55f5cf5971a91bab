//! Drag session state
//!
//! `Idle -> Dragging -> (Committed | Cancelled) -> Idle`. The terminal states
//! are not stored: ending a session returns to `Idle` and records the
//! outcome on the host.

use super::layout::{GroupId, Orientation, PaneId, Point, Rect, SplitId, SplitSize};
use crate::messages::PointerId;
use crate::view::drop_zone::{DropTarget, DropZone};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}

/// One pane drag gesture, from drag start to release or capture loss
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub pane: PaneId,
    pub source_group: GroupId,
    /// The captured pointer; other pointers are ignored until the session ends
    pub pointer: PointerId,
    /// Group under the pointer at the last move, if any
    pub target_group: Option<GroupId>,
    pub zone: DropZone,
    /// Drop feedback rectangle in host-root coordinates
    pub overlay: Option<Rect>,
}

impl DragSession {
    pub fn new(pane: PaneId, source_group: GroupId, pointer: PointerId) -> Self {
        Self {
            pane,
            source_group,
            pointer,
            target_group: None,
            zone: DropZone::Center,
            overlay: None,
        }
    }

    pub fn set_target(&mut self, target: &DropTarget) {
        self.target_group = Some(target.group);
        self.zone = target.zone;
        self.overlay = Some(target.overlay);
    }

    pub fn clear_target(&mut self) {
        self.target_group = None;
        self.zone = DropZone::Center;
        self.overlay = None;
    }
}

/// How the last drag session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released over a group; `changed` is false for the documented no-op drops
    Committed {
        pane: PaneId,
        target: GroupId,
        zone: DropZone,
        changed: bool,
    },
    /// Released over nothing, or pointer capture was lost
    Cancelled { pane: PaneId },
}

/// A splitter bar being dragged to resize its split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterResize {
    pub split: SplitId,
    pub pointer: PointerId,
    pub orientation: Orientation,
    /// Where the press landed
    pub start: Point,
    /// Laid-out lengths of the two sides at the press
    pub first_len: f32,
    pub second_len: f32,
    /// Sizes to put back if the gesture is cancelled
    pub original_sizes: (SplitSize, SplitSize),
}

impl SplitterResize {
    /// Lengths of the two sides with the bar moved to `pos`
    pub fn lengths_at(&self, pos: Point) -> (f32, f32) {
        let delta = match self.orientation {
            Orientation::Horizontal => pos.x - self.start.x,
            Orientation::Vertical => pos.y - self.start.y,
        };
        let total = (self.first_len + self.second_len).max(0.0);
        let first = (self.first_len + delta).clamp(0.0, total);
        (first, total - first)
    }
}
