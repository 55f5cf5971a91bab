//! Message types for the Elm-style architecture
//!
//! Every pointer event, tab strip event and layout request reaches the host
//! as one of these. Positions are in host-root coordinates.

use crate::model::layout::{GroupId, PaneId, Point};
use crate::view::drop_zone::DropZone;

/// Identifies one pointer (mouse, pen, touch contact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// Which button a press used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other,
}

/// Pointer events routed to the host root (where a drag session captures them)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Moved { pointer: PointerId, pos: Point },
    Released { pointer: PointerId, pos: Point },
    /// Capture was taken away without a release (focus change, forced release)
    CaptureLost { pointer: PointerId },
}

/// What a tab strip press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabHit {
    /// A pane's tab
    Tab(PaneId),
    /// A pane's close affordance
    CloseButton(PaneId),
    /// Strip background
    Strip,
}

/// Events from one tab group's tab strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabStripMsg {
    Pressed {
        group: GroupId,
        pointer: PointerId,
        pos: Point,
        button: PointerButton,
        hit: TabHit,
    },
    Moved {
        group: GroupId,
        pointer: PointerId,
        pos: Point,
    },
    Released {
        group: GroupId,
        pointer: PointerId,
    },
    /// The strip changed its selected tab
    SelectionChanged { group: GroupId, pane: PaneId },
}

/// Signals a tab group raises; consumed by the host and echoed to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSignal {
    PaneDragStarted {
        pane: PaneId,
        source_group: GroupId,
        pointer: PointerId,
    },
    PaneCloseRequested { pane: PaneId, group: GroupId },
}

/// Direct layout requests from the host's caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutMsg {
    ClosePane(PaneId),
    RelocatePane {
        pane: PaneId,
        source: GroupId,
        target: GroupId,
        zone: DropZone,
    },
    SelectPane { group: GroupId, pane: PaneId },
    /// A press that may have landed on a splitter bar. Moves and the release
    /// then arrive as captured pointer events.
    BeginSplitterDrag { pointer: PointerId, pos: Point },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    TabStrip(TabStripMsg),
    /// A signal raised by an external tab strip implementation
    Signal(DockSignal),
    Layout(LayoutMsg),
}
