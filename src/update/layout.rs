//! Layout mutations: relocate, split, collapse, close, select
//!
//! Every function here leaves the tree valid: no reachable group is empty,
//! every selection is a member of its group, and each pane sits in exactly
//! one group. Meaningless requests (dropping a pane onto itself, closing an
//! absent pane) are no-ops and report `false`/`None`.

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{
    DockHost, DockLayout, GroupId, LayoutNode, NodeId, Pane, PaneId, SplitId, SplitNode,
};
use crate::view::drop_zone::DropZone;

/// Handle direct layout requests
pub fn update_layout<C>(host: &mut DockHost<C>, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::ClosePane(pane) => host.close_pane(pane).map(|_| Cmd::Redraw),

        LayoutMsg::RelocatePane {
            pane,
            source,
            target,
            zone,
        } => host
            .relocate_pane(pane, source, target, zone)
            .then_some(Cmd::Redraw),

        LayoutMsg::SelectPane { group, pane } => {
            host.select_pane(group, pane).then_some(Cmd::Redraw)
        }

        LayoutMsg::BeginSplitterDrag { pointer, pos } => {
            super::splitter::begin_splitter_drag(host, pointer, pos)
        }
    }
}

// ============================================================================
// Host entry points
// ============================================================================

impl<C> DockHost<C> {
    /// Close `pane` wherever it is, handing back its content.
    ///
    /// Closing a pane that is not in the tree is tolerated and returns `None`.
    pub fn close_pane(&mut self, pane: PaneId) -> Option<Pane<C>> {
        let closed = close_pane(&mut self.layout, pane);
        if closed.is_some() {
            self.geometry.refresh(self.layout.root.as_ref());
        } else {
            tracing::debug!(target: "tree", ?pane, "close of absent pane ignored");
        }
        closed
    }

    /// Move `pane` from `source` into `target` according to `zone`.
    ///
    /// Returns false when nothing changed.
    pub fn relocate_pane(
        &mut self,
        pane: PaneId,
        source: GroupId,
        target: GroupId,
        zone: DropZone,
    ) -> bool {
        let changed = relocate_pane(&mut self.layout, pane, source, target, zone);
        if changed {
            self.geometry.refresh(self.layout.root.as_ref());
        }
        changed
    }

    /// Make `pane` the selected tab of `group`. Non-members are ignored.
    pub fn select_pane(&mut self, group: GroupId, pane: PaneId) -> bool {
        select_pane(&mut self.layout, group, pane)
    }
}

// ============================================================================
// Tree mutations
// ============================================================================

/// Relocate `pane` from `source` to `target`.
///
/// Center appends it to the target as the selected tab; an edge wraps the
/// target in a new split together with a fresh group holding only `pane`.
/// The source group collapses if it ends up empty.
pub fn relocate_pane<C>(
    layout: &mut DockLayout<C>,
    pane: PaneId,
    source: GroupId,
    target: GroupId,
    zone: DropZone,
) -> bool {
    if source == target && zone == DropZone::Center {
        tracing::debug!(target: "tree", ?pane, ?source, "drop onto own center ignored");
        return false;
    }

    let Some(source_group) = layout.group(source) else {
        tracing::warn!(target: "tree", ?source, "relocate from unknown group");
        return false;
    };
    if !source_group.contains(pane) {
        tracing::warn!(target: "tree", ?pane, ?source, "relocate of pane not in source group");
        return false;
    }
    if !layout.contains_node(NodeId::Group(target)) {
        tracing::warn!(target: "tree", ?target, "relocate into unknown group");
        return false;
    }
    if source == target && source_group.len() == 1 {
        tracing::debug!(target: "tree", ?pane, ?source, ?zone, "edge drop of sole pane onto itself ignored");
        return false;
    }

    // Build the edge split first so a failure leaves the pane where it was
    if zone.is_edge() && split_group(layout, target, pane, zone).is_none() {
        tracing::warn!(target: "tree", ?pane, ?target, ?zone, "edge split failed");
        return false;
    }

    let source_empty = match layout.group_mut(source) {
        Some(group) => {
            group.remove_pane(pane);
            group.is_empty()
        }
        None => return false,
    };

    if !zone.is_edge() {
        if let Some(group) = layout.group_mut(target) {
            group.push_selected(pane);
        }
    }

    if source_empty {
        collapse_empty_group(layout, source);
    }

    tracing::debug!(target: "tree", ?pane, ?source, ?target, ?zone, "pane relocated");
    true
}

/// Replace `target` with a split of `target` and a new group holding `pane`.
///
/// The new group comes first for Left/Top and second for Right/Bottom; both
/// sides get equal star sizes. The caller detaches `pane` from its old
/// group afterwards. Returns `None` for the Center zone or an unreachable
/// target, leaving the tree untouched.
pub fn split_group<C>(
    layout: &mut DockLayout<C>,
    target: GroupId,
    pane: PaneId,
    zone: DropZone,
) -> Option<SplitId> {
    let orientation = zone.orientation()?;
    if !layout.contains_node(NodeId::Group(target)) {
        return None;
    }

    let new_group = layout.insert_group(vec![pane], Some(pane));
    let split_id = layout.next_split_id();
    let (first, second) = if zone.new_group_first() {
        (LayoutNode::Group(new_group), LayoutNode::Group(target))
    } else {
        (LayoutNode::Group(target), LayoutNode::Group(new_group))
    };

    let split = SplitNode::new(split_id, orientation, first, second);
    if layout
        .replace_in_parent(NodeId::Group(target), LayoutNode::Split(split))
        .is_none()
    {
        layout.groups.remove(&new_group);
        return None;
    }

    tracing::debug!(target: "tree", ?split_id, ?new_group, ?target, ?orientation, "split created");
    Some(split_id)
}

/// Remove an empty group from the tree.
///
/// The group's parent split is replaced by the surviving sibling (one level
/// only). An empty root group leaves the host showing nothing. Returns false
/// if the group is unknown or still holds panes.
pub fn collapse_empty_group<C>(layout: &mut DockLayout<C>, group: GroupId) -> bool {
    match layout.group(group) {
        Some(g) if g.is_empty() => {}
        Some(_) => {
            tracing::warn!(target: "tree", ?group, "refusing to collapse non-empty group");
            return false;
        }
        None => return false,
    }

    let node = NodeId::Group(group);
    match layout.find_parent(node) {
        None => {
            if layout.root.as_ref().map(LayoutNode::id) != Some(node) {
                return false;
            }
            layout.root = None;
        }
        Some(parent) => {
            // Take the parent split out, leaving the empty leaf in its slot,
            // then put the survivor where the leaf now sits.
            let Some(LayoutNode::Split(split)) =
                layout.replace_in_parent(NodeId::Split(parent), LayoutNode::Group(group))
            else {
                return false;
            };
            let SplitNode { first, second, .. } = split;
            let survivor = if first.id() == node { *second } else { *first };
            layout.replace_in_parent(node, survivor);
        }
    }

    layout.groups.remove(&group);
    tracing::debug!(target: "tree", ?group, "empty group collapsed");
    true
}

/// Close `pane`: hand off selection, detach, collapse the group if emptied.
///
/// Returns the removed pane, or `None` if it was not in the tree.
pub fn close_pane<C>(layout: &mut DockLayout<C>, pane: PaneId) -> Option<Pane<C>> {
    let group_id = layout.group_containing(pane)?;
    let group = layout.group_mut(group_id)?;
    group.remove_pane(pane);
    if group.is_empty() {
        collapse_empty_group(layout, group_id);
    }

    tracing::debug!(target: "tree", ?pane, group = ?group_id, "pane closed");
    layout.panes.remove(&pane)
}

/// Select `pane` in `group`. Returns true if the selection changed.
pub fn select_pane<C>(layout: &mut DockLayout<C>, group: GroupId, pane: PaneId) -> bool {
    let Some(tab_group) = layout.group_mut(group) else {
        return false;
    };
    if tab_group.selected == Some(pane) {
        return false;
    }
    tab_group.select(pane)
}
