//! Live layout tree - panes, tab groups and binary splits
//!
//! The tree is owned top-down: a split owns both of its children, while tab
//! groups and panes live in id-keyed maps and are referenced from the tree by
//! id. No parent links are stored anywhere; `find_parent()` walks down from
//! the root whenever a parent is needed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tab_strip::TabStripState;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u64);

/// Unique identifier for a tab group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

/// Unique identifier for a split node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SplitId(pub u64);

/// Any node that can occupy a position in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Group(GroupId),
    Split(SplitId),
}

// ============================================================================
// Layout Primitives
// ============================================================================

/// A point in host-root coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Axis along which a split arranges its two children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

/// Size of one side of a split
///
/// Only the layout pass reads these; tree logic never does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum SplitSize {
    /// Proportional weight shared with the other star-sized side
    Star(f32),
    /// Fixed length in pixels
    Pixel(f32),
}

impl Default for SplitSize {
    fn default() -> Self {
        SplitSize::Star(1.0)
    }
}

// ============================================================================
// Panes and Tab Groups
// ============================================================================

/// A single closable, movable unit of content
///
/// `content` is whatever the caller docks; the engine never looks inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane<C> {
    pub header: String,
    pub content: C,
    pub can_close: bool,
    pub can_move: bool,
}

impl<C> Pane<C> {
    /// A pane that can be closed and moved
    pub fn new(header: impl Into<String>, content: C) -> Self {
        Self {
            header: header.into(),
            content,
            can_close: true,
            can_move: true,
        }
    }

    pub fn with_can_close(mut self, can_close: bool) -> Self {
        self.can_close = can_close;
        self
    }

    pub fn with_can_move(mut self, can_move: bool) -> Self {
        self.can_move = can_move;
        self
    }
}

/// A leaf container showing its panes as tabs, one of them selected
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    pub id: GroupId,
    /// Panes in tab order
    pub panes: Vec<PaneId>,
    /// Either `None` or a member of `panes`
    pub selected: Option<PaneId>,
    /// Press/drag tracking for this group's tab strip
    pub strip: TabStripState,
}

impl TabGroup {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            panes: Vec::new(),
            selected: None,
            strip: TabStripState::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.panes.contains(&pane)
    }

    pub fn index_of(&self, pane: PaneId) -> Option<usize> {
        self.panes.iter().position(|p| *p == pane)
    }

    /// Select a member pane. Returns false if `pane` is not in this group.
    pub fn select(&mut self, pane: PaneId) -> bool {
        if !self.contains(pane) {
            return false;
        }
        self.selected = Some(pane);
        true
    }

    /// Append a pane as the last tab and select it
    pub fn push_selected(&mut self, pane: PaneId) {
        self.panes.push(pane);
        self.selected = Some(pane);
    }

    /// Move the selection off `pane` before it leaves the group.
    ///
    /// The tab before it wins; if it was the first tab, the one after it.
    /// With no siblings left the selection becomes `None`.
    pub fn hand_off_selection(&mut self, pane: PaneId) {
        if self.selected != Some(pane) {
            return;
        }
        let Some(idx) = self.index_of(pane) else {
            return;
        };
        self.selected = if self.panes.len() > 1 {
            Some(self.panes[if idx == 0 { 1 } else { idx - 1 }])
        } else {
            None
        };
    }

    /// Hand off selection and detach `pane`. Returns false if it wasn't here.
    pub fn remove_pane(&mut self, pane: PaneId) -> bool {
        let Some(idx) = self.index_of(pane) else {
            return false;
        };
        self.hand_off_selection(pane);
        self.panes.remove(idx);
        if self.strip.drag_candidate == Some(pane) {
            self.strip.reset();
        }
        true
    }
}

// ============================================================================
// Layout Tree
// ============================================================================

/// An internal node dividing its space between exactly two children
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    pub id: SplitId,
    pub orientation: Orientation,
    pub first: Box<LayoutNode>,
    pub second: Box<LayoutNode>,
    pub first_size: SplitSize,
    pub second_size: SplitSize,
}

impl SplitNode {
    /// A split with equal star sizes
    pub fn new(id: SplitId, orientation: Orientation, first: LayoutNode, second: LayoutNode) -> Self {
        Self {
            id,
            orientation,
            first: Box::new(first),
            second: Box::new(second),
            first_size: SplitSize::default(),
            second_size: SplitSize::default(),
        }
    }

    pub fn with_sizes(mut self, first_size: SplitSize, second_size: SplitSize) -> Self {
        self.first_size = first_size;
        self.second_size = second_size;
        self
    }
}

/// A node in the layout tree - either a tab group or a split
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Group(GroupId),
    Split(SplitNode),
}

impl LayoutNode {
    pub fn id(&self) -> NodeId {
        match self {
            LayoutNode::Group(id) => NodeId::Group(*id),
            LayoutNode::Split(split) => NodeId::Split(split.id),
        }
    }

    /// Group ids in this subtree, first child before second
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids = Vec::new();
        collect_group_ids(self, &mut ids);
        ids
    }

    /// Number of split nodes in this subtree
    pub fn split_count(&self) -> usize {
        match self {
            LayoutNode::Group(_) => 0,
            LayoutNode::Split(split) => 1 + split.first.split_count() + split.second.split_count(),
        }
    }
}

// ============================================================================
// Dock Layout (the live tree plus its node storage)
// ============================================================================

/// The live, mutable layout: the tree shape plus the panes and groups it references
///
/// `groups` holds exactly the groups reachable from `root`, and `panes`
/// exactly the panes held by those groups. A `None` root means the host
/// currently shows nothing.
#[derive(Debug, Clone)]
pub struct DockLayout<C> {
    pub panes: HashMap<PaneId, Pane<C>>,
    pub groups: HashMap<GroupId, TabGroup>,
    pub root: Option<LayoutNode>,

    next_pane_id: u64,
    next_group_id: u64,
    next_split_id: u64,
}

impl<C> Default for DockLayout<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> DockLayout<C> {
    /// An empty layout with no tree
    pub fn new() -> Self {
        Self {
            panes: HashMap::new(),
            groups: HashMap::new(),
            root: None,
            next_pane_id: 1,
            next_group_id: 1,
            next_split_id: 1,
        }
    }

    /// Generate a new pane ID
    pub fn next_pane_id(&mut self) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        id
    }

    /// Generate a new group ID
    pub fn next_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        id
    }

    /// Generate a new split ID
    pub fn next_split_id(&mut self) -> SplitId {
        let id = SplitId(self.next_split_id);
        self.next_split_id += 1;
        id
    }

    /// Store a pane and hand back its id. The pane is not placed in any group.
    pub fn insert_pane(&mut self, pane: Pane<C>) -> PaneId {
        let id = self.next_pane_id();
        self.panes.insert(id, pane);
        id
    }

    /// Store a new group holding `panes`.
    ///
    /// A `selected` that isn't one of `panes` falls back to the first pane.
    pub fn insert_group(&mut self, panes: Vec<PaneId>, selected: Option<PaneId>) -> GroupId {
        let id = self.next_group_id();
        let mut group = TabGroup::new(id);
        group.selected = selected
            .filter(|s| panes.contains(s))
            .or_else(|| panes.first().copied());
        group.panes = panes;
        self.groups.insert(id, group);
        id
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane<C>> {
        self.panes.get(&id)
    }

    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(&id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut TabGroup> {
        self.groups.get_mut(&id)
    }

    /// True when the host displays nothing
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// All reachable group ids in tree order
    pub fn collect_group_ids(&self) -> Vec<GroupId> {
        self.root.as_ref().map(LayoutNode::group_ids).unwrap_or_default()
    }

    pub fn split_count(&self) -> usize {
        self.root.as_ref().map_or(0, LayoutNode::split_count)
    }

    /// Find the group currently holding `pane` by walking the tree
    pub fn group_containing(&self, pane: PaneId) -> Option<GroupId> {
        self.collect_group_ids().into_iter().find(|gid| {
            self.groups
                .get(gid)
                .is_some_and(|group| group.contains(pane))
        })
    }

    /// Whether `node` is reachable from the root
    pub fn contains_node(&self, node: NodeId) -> bool {
        match &self.root {
            Some(root) => root.id() == node || self.find_parent(node).is_some(),
            None => false,
        }
    }

    /// Find the split whose direct child is `node`, searching from the root.
    ///
    /// Returns `None` for the root itself and for unreachable nodes.
    pub fn find_parent(&self, node: NodeId) -> Option<SplitId> {
        self.root
            .as_ref()
            .and_then(|root| find_parent_in(root, node))
    }

    /// Look up a reachable split by id
    pub fn split(&self, id: SplitId) -> Option<&SplitNode> {
        self.root.as_ref().and_then(|root| find_split(root, id))
    }

    /// Look up a reachable split by id, mutably
    pub fn split_mut(&mut self, id: SplitId) -> Option<&mut SplitNode> {
        self.root.as_mut().and_then(|root| find_split_mut(root, id))
    }

    /// The position `node` occupies: the root slot or a child slot of its parent split
    fn node_slot_mut(&mut self, node: NodeId) -> Option<&mut LayoutNode> {
        match self.find_parent(node) {
            None => {
                let root = self.root.as_mut()?;
                (root.id() == node).then_some(root)
            }
            Some(parent) => {
                let split = self.split_mut(parent)?;
                if split.first.id() == node {
                    Some(&mut *split.first)
                } else if split.second.id() == node {
                    Some(&mut *split.second)
                } else {
                    None
                }
            }
        }
    }

    /// Put `replacement` where `target` sits (in its parent split, or at the root)
    /// and return the node that was there.
    ///
    /// Returns `None` and drops `replacement` if `target` is not reachable.
    pub fn replace_in_parent(
        &mut self,
        target: NodeId,
        replacement: LayoutNode,
    ) -> Option<LayoutNode> {
        let slot = self.node_slot_mut(target)?;
        Some(std::mem::replace(slot, replacement))
    }
}

// ============================================================================
// Tree walking helpers (standalone to avoid borrow issues)
// ============================================================================

fn collect_group_ids(node: &LayoutNode, out: &mut Vec<GroupId>) {
    match node {
        LayoutNode::Group(id) => out.push(*id),
        LayoutNode::Split(split) => {
            collect_group_ids(&split.first, out);
            collect_group_ids(&split.second, out);
        }
    }
}

fn find_parent_in(current: &LayoutNode, target: NodeId) -> Option<SplitId> {
    match current {
        LayoutNode::Group(_) => None,
        LayoutNode::Split(split) => {
            if split.first.id() == target || split.second.id() == target {
                return Some(split.id);
            }
            find_parent_in(&split.first, target).or_else(|| find_parent_in(&split.second, target))
        }
    }
}

fn find_split(node: &LayoutNode, id: SplitId) -> Option<&SplitNode> {
    match node {
        LayoutNode::Group(_) => None,
        LayoutNode::Split(split) if split.id == id => Some(split),
        LayoutNode::Split(split) => {
            find_split(&split.first, id).or_else(|| find_split(&split.second, id))
        }
    }
}

fn find_split_mut(node: &mut LayoutNode, id: SplitId) -> Option<&mut SplitNode> {
    match node {
        LayoutNode::Group(_) => None,
        LayoutNode::Split(split) => {
            if split.id == id {
                return Some(split);
            }
            match find_split_mut(&mut split.first, id) {
                Some(found) => Some(found),
                None => find_split_mut(&mut split.second, id),
            }
        }
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl<C> DockLayout<C> {
    /// Validate tree invariants in debug builds.
    ///
    /// This function checks that:
    /// - the reachable groups are exactly the stored groups, each reached once
    /// - no reachable group is empty
    /// - each group's selection is a member pane
    /// - every pane sits in exactly one group, and every referenced pane exists
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let reachable = self.collect_group_ids();

        assert_eq!(
            reachable.len(),
            self.groups.len(),
            "reachable groups {:?} do not match stored groups {:?}",
            reachable,
            self.groups.keys().collect::<Vec<_>>()
        );

        let mut seen_panes = std::collections::HashSet::new();
        for group_id in &reachable {
            let group = self
                .groups
                .get(group_id)
                .unwrap_or_else(|| panic!("reachable group {:?} is not stored", group_id));

            assert!(
                !group.is_empty(),
                "group {:?} is empty but still reachable",
                group_id
            );

            if let Some(selected) = group.selected {
                assert!(
                    group.contains(selected),
                    "group {:?} selects {:?} which it does not hold",
                    group_id,
                    selected
                );
            }

            for pane in &group.panes {
                assert!(
                    self.panes.contains_key(pane),
                    "group {:?} references unknown pane {:?}",
                    group_id,
                    pane
                );
                assert!(
                    seen_panes.insert(*pane),
                    "pane {:?} appears in more than one place",
                    pane
                );
            }
        }

        assert_eq!(
            seen_panes.len(),
            self.panes.len(),
            "stored panes are not all placed in a group"
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
