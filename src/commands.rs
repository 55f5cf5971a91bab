//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the embedding UI performs after an update:
//! repainting, pointer capture and the drop overlay.

use crate::messages::{DockSignal, PointerId};
use crate::model::layout::Rect;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The tree changed shape or selection; repaint the host
    Redraw,
    /// Route every event of this pointer to the host root until released
    CapturePointer(PointerId),
    /// Give pointer capture back
    ReleasePointer(PointerId),
    /// Show the drop feedback overlay at this rectangle (host-root coordinates)
    ShowDropOverlay(Rect),
    HideDropOverlay,
    /// A tab group raised a signal (for instrumentation; already handled)
    Signal(DockSignal),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine `self` with an optional follow-up, flattening into one batch
    pub fn and(self, next: Option<Cmd>) -> Cmd {
        match next {
            None | Some(Cmd::None) => self,
            Some(next) => {
                let mut cmds = match self {
                    Cmd::Batch(cmds) => cmds,
                    Cmd::None => Vec::new(),
                    other => vec![other],
                };
                match next {
                    Cmd::Batch(more) => cmds.extend(more),
                    other => cmds.push(other),
                }
                Cmd::Batch(cmds)
            }
        }
    }

    /// All leaf commands, batches flattened in order
    pub fn flatten(&self) -> Vec<&Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Whether the host should repaint its tree
    pub fn needs_redraw(&self) -> bool {
        self.flatten().iter().any(|c| matches!(c, Cmd::Redraw))
    }

    /// Whether this command (or any batched one) matches `pred`
    pub fn contains(&self, pred: impl Fn(&Cmd) -> bool) -> bool {
        self.flatten().into_iter().any(pred)
    }
}
