//! Declarative layout descriptions
//!
//! A `LayoutModel` describes the arrangement a host should start from. It is
//! read once by the builder (`model::builder`) and never consulted again;
//! the live tree in `model::layout` is what drag-and-drop mutates.
//!
//! Models deserialize from YAML with an internal `kind` tag:
//!
//! ```yaml
//! kind: split
//! orientation: vertical
//! first:
//!   kind: tab_group
//!   panes:
//!     - { header: Doc1, content: "first document" }
//! second:
//!   kind: tab_group
//!   panes:
//!     - { header: Output, content: "build output", can_close: false }
//! second_size: { unit: pixel, value: 200.0 }
//! ```

use serde::{Deserialize, Serialize};

use super::layout::{Orientation, SplitSize};

/// One node of a layout description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "snake_case",
    bound(deserialize = "C: Deserialize<'de>")
)]
pub enum LayoutModel<C> {
    Pane(PaneModel<C>),
    TabGroup(TabGroupModel<C>),
    Split(SplitModel<C>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneModel<C> {
    pub header: String,
    pub content: C,
    #[serde(default = "default_true")]
    pub can_close: bool,
    #[serde(default = "default_true")]
    pub can_move: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
pub struct TabGroupModel<C> {
    #[serde(default)]
    pub panes: Vec<PaneModel<C>>,
    /// Index into `panes` of the selected tab
    #[serde(default)]
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
pub struct SplitModel<C> {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub first: Option<Box<LayoutModel<C>>>,
    #[serde(default)]
    pub second: Option<Box<LayoutModel<C>>>,
    #[serde(default)]
    pub first_size: SplitSize,
    #[serde(default)]
    pub second_size: SplitSize,
}

fn default_true() -> bool {
    true
}

impl<C> PaneModel<C> {
    pub fn new(header: impl Into<String>, content: C) -> Self {
        Self {
            header: header.into(),
            content,
            can_close: true,
            can_move: true,
        }
    }

    pub fn can_close(mut self, can_close: bool) -> Self {
        self.can_close = can_close;
        self
    }

    pub fn can_move(mut self, can_move: bool) -> Self {
        self.can_move = can_move;
        self
    }
}

impl<C> TabGroupModel<C> {
    pub fn new(panes: Vec<PaneModel<C>>) -> Self {
        Self {
            panes,
            selected: None,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }
}

impl<C> SplitModel<C> {
    pub fn new(
        orientation: Orientation,
        first: impl Into<LayoutModel<C>>,
        second: impl Into<LayoutModel<C>>,
    ) -> Self {
        Self {
            orientation,
            first: Some(Box::new(first.into())),
            second: Some(Box::new(second.into())),
            first_size: SplitSize::default(),
            second_size: SplitSize::default(),
        }
    }

    pub fn sizes(mut self, first_size: SplitSize, second_size: SplitSize) -> Self {
        self.first_size = first_size;
        self.second_size = second_size;
        self
    }
}

impl<C> From<PaneModel<C>> for LayoutModel<C> {
    fn from(model: PaneModel<C>) -> Self {
        LayoutModel::Pane(model)
    }
}

impl<C> From<TabGroupModel<C>> for LayoutModel<C> {
    fn from(model: TabGroupModel<C>) -> Self {
        LayoutModel::TabGroup(model)
    }
}

impl<C> From<SplitModel<C>> for LayoutModel<C> {
    fn from(model: SplitModel<C>) -> Self {
        LayoutModel::Split(model)
    }
}
