//! Build a live layout tree from a declarative model
//!
//! The live tree mirrors the model node for node. A malformed model is a
//! programmer error: building stops at the first problem and nothing is
//! handed back, so a host never ends up showing half a layout.

use std::fmt;

use super::layout::{DockLayout, GroupId, LayoutNode, Pane, PaneId, SplitNode};
use super::layout_model::{LayoutModel, PaneModel, SplitModel, TabGroupModel};

/// Which side of a split a problem was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSide {
    First,
    Second,
}

/// Reasons a layout model cannot be turned into a live tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A split without one of its two children
    MissingSplitChild(SplitSide),
    /// A pane placed directly where a tab group or split belongs
    PaneOutsideGroup { header: String },
    /// A tab group with no panes
    EmptyGroup,
    /// A selection marker pointing past the group's panes
    SelectionOutOfRange { index: usize, len: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingSplitChild(SplitSide::First) => {
                write!(f, "split is missing its first child")
            }
            BuildError::MissingSplitChild(SplitSide::Second) => {
                write!(f, "split is missing its second child")
            }
            BuildError::PaneOutsideGroup { header } => {
                write!(f, "pane '{}' must be placed inside a tab group", header)
            }
            BuildError::EmptyGroup => write!(f, "tab group has no panes"),
            BuildError::SelectionOutOfRange { index, len } => write!(
                f,
                "selected index {} is out of range for a group of {} panes",
                index, len
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Build the live tree described by `model`
pub fn build_layout<C>(model: LayoutModel<C>) -> Result<DockLayout<C>, BuildError> {
    let mut layout = DockLayout::new();
    let root = build_node(&mut layout, model)?;
    layout.root = Some(root);

    tracing::debug!(
        groups = layout.groups.len(),
        splits = layout.split_count(),
        panes = layout.panes.len(),
        "built layout from model"
    );
    Ok(layout)
}

/// Default arrangement: one tab group holding every pane, the first one selected.
///
/// No panes gives an empty layout.
pub fn single_group_layout<C>(panes: Vec<Pane<C>>) -> DockLayout<C> {
    let mut layout = DockLayout::new();
    if panes.is_empty() {
        return layout;
    }

    let ids: Vec<PaneId> = panes.into_iter().map(|p| layout.insert_pane(p)).collect();
    let group = layout.insert_group(ids, None);
    layout.root = Some(LayoutNode::Group(group));
    layout
}

fn build_node<C>(layout: &mut DockLayout<C>, model: LayoutModel<C>) -> Result<LayoutNode, BuildError> {
    match model {
        LayoutModel::Pane(pane) => Err(BuildError::PaneOutsideGroup {
            header: pane.header,
        }),
        LayoutModel::TabGroup(group) => build_tab_group(layout, group).map(LayoutNode::Group),
        LayoutModel::Split(split) => build_split(layout, split).map(LayoutNode::Split),
    }
}

fn build_pane<C>(layout: &mut DockLayout<C>, model: PaneModel<C>) -> PaneId {
    layout.insert_pane(Pane {
        header: model.header,
        content: model.content,
        can_close: model.can_close,
        can_move: model.can_move,
    })
}

fn build_tab_group<C>(
    layout: &mut DockLayout<C>,
    model: TabGroupModel<C>,
) -> Result<GroupId, BuildError> {
    let len = model.panes.len();
    if len == 0 {
        return Err(BuildError::EmptyGroup);
    }
    if let Some(index) = model.selected {
        if index >= len {
            return Err(BuildError::SelectionOutOfRange { index, len });
        }
    }

    let ids: Vec<PaneId> = model
        .panes
        .into_iter()
        .map(|pane| build_pane(layout, pane))
        .collect();
    let selected = ids[model.selected.unwrap_or(0)];
    Ok(layout.insert_group(ids, Some(selected)))
}

fn build_split<C>(layout: &mut DockLayout<C>, model: SplitModel<C>) -> Result<SplitNode, BuildError> {
    let first = model
        .first
        .ok_or(BuildError::MissingSplitChild(SplitSide::First))?;
    let second = model
        .second
        .ok_or(BuildError::MissingSplitChild(SplitSide::Second))?;

    let id = layout.next_split_id();
    let first = build_node(layout, *first)?;
    let second = build_node(layout, *second)?;

    Ok(SplitNode::new(id, model.orientation, first, second)
        .with_sizes(model.first_size, model.second_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_group_layout_selects_first() {
        let layout = single_group_layout(vec![Pane::new("a", 1), Pane::new("b", 2)]);
        let groups = layout.collect_group_ids();
        assert_eq!(groups.len(), 1);
        let group = layout.group(groups[0]).unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.selected, Some(group.panes[0]));
    }

    #[test]
    fn test_single_group_layout_without_panes_is_empty() {
        let layout: DockLayout<i32> = single_group_layout(Vec::new());
        assert!(layout.is_empty());
        assert!(layout.groups.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BuildError::SelectionOutOfRange { index: 3, len: 2 }.to_string(),
            "selected index 3 is out of range for a group of 2 panes"
        );
        assert_eq!(
            BuildError::MissingSplitChild(SplitSide::Second).to_string(),
            "split is missing its second child"
        );
    }
}
