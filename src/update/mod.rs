//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod drag;
pub mod layout;
mod splitter;
mod tab_strip;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DockHost;

#[cfg(debug_assertions)]
use crate::tracing::TreeSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use drag::{begin_drag, update_pointer};
pub use layout::{
    close_pane, collapse_empty_group, relocate_pane, select_pane, split_group, update_layout,
};
pub use splitter::{begin_splitter_drag, update_resize_pointer};
pub use tab_strip::{update_signal, update_tab_strip};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<C>(host: &mut DockHost<C>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(host, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(host, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<C>(host: &mut DockHost<C>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) if host.resize.is_some() => splitter::update_resize_pointer(host, m),
        Msg::Pointer(m) => drag::update_pointer(host, m),
        Msg::TabStrip(m) => tab_strip::update_tab_strip(host, m),
        Msg::Signal(s) => tab_strip::update_signal(host, s),
        Msg::Layout(m) => layout::update_layout(host, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after tree shape and logs diffs for debugging.
/// Pointer moves are not logged; there are too many of them.
#[cfg(debug_assertions)]
fn update_traced<C>(host: &mut DockHost<C>, msg: Msg) -> Option<Cmd> {
    use crate::messages::{PointerMsg, TabStripMsg};

    let is_noisy = matches!(
        msg,
        Msg::Pointer(PointerMsg::Moved { .. }) | Msg::TabStrip(TabStripMsg::Moved { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = TreeSnapshot::from_layout(&host.layout);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(host, msg);

    let after = TreeSnapshot::from_layout(&host.layout);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "tree", %diff, "state changed");
    }

    host.layout.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Pointer::Released { pointer: PointerId(1), pos: .. }`
/// - `Layout::ClosePane(PaneId(3))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::TabStrip(m) => format!("TabStrip::{:?}", m),
        Msg::Signal(s) => format!("Signal::{:?}", s),
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
