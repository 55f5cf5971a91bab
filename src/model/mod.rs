//! Model types for the docking host
//!
//! `DockHost` is the whole state of one docking surface: the live tree, the
//! drag session, the last known geometry and the configuration. It is only
//! ever touched from the UI thread; `update()` is the single entry point for
//! events.

pub mod builder;
pub mod drag;
pub mod layout;
pub mod layout_model;
pub mod tab_strip;

pub use builder::{build_layout, single_group_layout, BuildError, SplitSide};
pub use drag::{DragOutcome, DragSession, DragState, SplitterResize};
pub use layout::{
    DockLayout, GroupId, LayoutNode, NodeId, Orientation, Pane, PaneId, Point, Rect, SplitId,
    SplitNode, SplitSize, TabGroup,
};
pub use layout_model::{LayoutModel, PaneModel, SplitModel, TabGroupModel};
pub use tab_strip::TabStripState;

use crate::config::DockConfig;
use crate::view::geometry::LayoutGeometry;

/// A docking surface: the live layout plus everything needed to drive it
#[derive(Debug, Clone)]
pub struct DockHost<C> {
    /// The live layout tree
    pub layout: DockLayout<C>,

    /// Current drag session, if any
    pub drag: DragState,

    /// Group rectangles used for drop-zone detection
    pub geometry: LayoutGeometry,

    pub config: DockConfig,

    /// How the most recent drag session ended
    pub last_drag_outcome: Option<DragOutcome>,

    /// Splitter bar being dragged, if any
    pub resize: Option<SplitterResize>,
}

impl<C> DockHost<C> {
    /// A host showing nothing
    pub fn new(config: DockConfig) -> Self {
        Self {
            layout: DockLayout::new(),
            drag: DragState::Idle,
            geometry: LayoutGeometry::default(),
            config,
            last_drag_outcome: None,
            resize: None,
        }
    }

    /// A host with every pane in a single tab group (nothing if `panes` is empty)
    pub fn with_panes(panes: Vec<Pane<C>>, config: DockConfig) -> Self {
        let mut host = Self::new(config);
        host.set_root_layout(single_group_layout(panes));
        host
    }

    /// A host seeded from a layout description
    pub fn from_model(model: LayoutModel<C>, config: DockConfig) -> Result<Self, BuildError> {
        let mut host = Self::new(config);
        host.set_layout_root(model)?;
        Ok(host)
    }

    /// Replace the entire live tree.
    ///
    /// An active drag session or splitter resize is cancelled; it refers to
    /// the old tree. Externally fed rectangles are dropped too.
    pub fn set_root_layout(&mut self, layout: DockLayout<C>) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.drag) {
            tracing::debug!(target: "drag", pane = ?session.pane, "layout replaced mid-drag, cancelling");
            self.last_drag_outcome = Some(DragOutcome::Cancelled { pane: session.pane });
        }
        if let Some(resize) = self.resize.take() {
            tracing::debug!(target: "drag", split = ?resize.split, "layout replaced mid-resize, cancelling");
        }

        self.layout = layout;
        self.wire_all_groups();
        self.geometry.rebuild(self.layout.root.as_ref());
    }

    /// Build a live tree from `model` and show it.
    ///
    /// On error the current tree is left untouched.
    pub fn set_layout_root(&mut self, model: LayoutModel<C>) -> Result<(), BuildError> {
        let layout = build_layout(model)?;
        self.set_root_layout(layout);
        Ok(())
    }

    /// Start every group's tab strip from a clean state
    fn wire_all_groups(&mut self) {
        for group in self.layout.groups.values_mut() {
            group.strip.reset();
        }
    }

    /// Run the built-in layout pass over `available`.
    ///
    /// Geometry is kept in sync with later tree mutations until the host is
    /// given rectangles externally.
    pub fn compute_layout(&mut self, available: Rect) -> &LayoutGeometry {
        self.geometry = LayoutGeometry::compute(
            self.layout.root.as_ref(),
            available,
            self.config.splitter_width,
        );
        &self.geometry
    }

    /// Record a group rectangle measured by an external renderer.
    ///
    /// From then on the built-in layout pass no longer runs after mutations;
    /// call `compute_layout` again to hand geometry back to it.
    pub fn set_group_rect(&mut self, group: GroupId, rect: Rect) {
        self.geometry.set_group_rect(group, rect);
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Where the drop overlay should currently be shown, if anywhere
    pub fn drop_overlay(&self) -> Option<Rect> {
        self.drag.session().and_then(|s| s.overlay)
    }

    /// True when the host displays nothing
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane<C>> {
        self.layout.pane(id)
    }

    /// Selected pane of a group
    pub fn selected_pane(&self, group: GroupId) -> Option<PaneId> {
        self.layout.group(group).and_then(|g| g.selected)
    }
}
