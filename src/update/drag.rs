//! Drag session controller
//!
//! A session starts from a `PaneDragStarted` signal, follows the captured
//! pointer's moves to keep the drop target and overlay current, and ends on
//! release (commit or cancel) or capture loss (cancel). The tree is only
//! touched at commit.

use crate::commands::Cmd;
use crate::messages::{PointerId, PointerMsg};
use crate::model::{DockHost, DragOutcome, DragSession, DragState, GroupId, PaneId, Point};
use crate::view::drop_zone::detect_drop_target;

/// Start a drag session for `pane` leaving `source_group`.
///
/// Ignored while another session or a splitter resize is active, or if
/// `pane` is not in `source_group`.
pub fn begin_drag<C>(
    host: &mut DockHost<C>,
    pane: PaneId,
    source_group: GroupId,
    pointer: PointerId,
) -> Option<Cmd> {
    if let Some(active) = host.drag.session() {
        tracing::debug!(
            target: "drag",
            ?pane,
            active = ?active.pane,
            "drag start ignored, session already active"
        );
        return None;
    }
    if let Some(resize) = &host.resize {
        tracing::debug!(target: "drag", ?pane, split = ?resize.split, "drag start ignored, splitter resize active");
        return None;
    }

    if !host
        .layout
        .group(source_group)
        .is_some_and(|group| group.contains(pane))
    {
        tracing::warn!(target: "drag", ?pane, ?source_group, "drag start for pane not in group");
        return None;
    }

    host.drag = DragState::Dragging(DragSession::new(pane, source_group, pointer));
    tracing::debug!(target: "drag", ?pane, ?source_group, ?pointer, "drag started");

    Some(Cmd::Batch(vec![
        Cmd::HideDropOverlay,
        Cmd::CapturePointer(pointer),
    ]))
}

/// Handle pointer events routed to the host root
pub fn update_pointer<C>(host: &mut DockHost<C>, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Moved { pointer, pos } => drag_move(host, pointer, pos),
        PointerMsg::Released { pointer, pos } => drag_release(host, pointer, pos),
        PointerMsg::CaptureLost { pointer } => drag_cancel(host, pointer),
    }
}

/// Whether `pointer` is the one captured by the active session
fn is_session_pointer<C>(host: &DockHost<C>, pointer: PointerId) -> bool {
    host.drag.session().is_some_and(|s| s.pointer == pointer)
}

fn drag_move<C>(host: &mut DockHost<C>, pointer: PointerId, pos: Point) -> Option<Cmd> {
    if !is_session_pointer(host, pointer) {
        return None;
    }

    let target = detect_drop_target(&host.layout, &host.geometry, pos, &host.config);
    let DragState::Dragging(session) = &mut host.drag else {
        return None;
    };

    let previous = session.overlay;
    match &target {
        Some(target) => session.set_target(target),
        None => session.clear_target(),
    }
    tracing::trace!(target: "drag", x = pos.x, y = pos.y, group = ?session.target_group, zone = ?session.zone, "drag move");

    if session.overlay == previous {
        return None;
    }
    Some(match session.overlay {
        Some(rect) => Cmd::ShowDropOverlay(rect),
        None => Cmd::HideDropOverlay,
    })
}

fn drag_release<C>(host: &mut DockHost<C>, pointer: PointerId, pos: Point) -> Option<Cmd> {
    if !is_session_pointer(host, pointer) {
        return None;
    }
    let DragState::Dragging(session) = std::mem::take(&mut host.drag) else {
        return None;
    };
    end_strip_gesture(host, session.source_group);

    let cmd = Cmd::Batch(vec![Cmd::ReleasePointer(pointer), Cmd::HideDropOverlay]);

    let Some(target) = session.target_group else {
        tracing::debug!(target: "drag", pane = ?session.pane, x = pos.x, y = pos.y, "released over nothing, cancelled");
        host.last_drag_outcome = Some(DragOutcome::Cancelled { pane: session.pane });
        return Some(cmd);
    };

    let changed = host.relocate_pane(session.pane, session.source_group, target, session.zone);
    tracing::debug!(
        target: "drag",
        pane = ?session.pane,
        ?target,
        zone = ?session.zone,
        changed,
        "drag committed"
    );
    host.last_drag_outcome = Some(DragOutcome::Committed {
        pane: session.pane,
        target,
        zone: session.zone,
        changed,
    });

    Some(if changed {
        cmd.and(Some(Cmd::Redraw))
    } else {
        cmd
    })
}

fn drag_cancel<C>(host: &mut DockHost<C>, pointer: PointerId) -> Option<Cmd> {
    if !is_session_pointer(host, pointer) {
        return None;
    }
    let DragState::Dragging(session) = std::mem::take(&mut host.drag) else {
        return None;
    };
    end_strip_gesture(host, session.source_group);

    tracing::debug!(target: "drag", pane = ?session.pane, "capture lost, drag cancelled");
    host.last_drag_outcome = Some(DragOutcome::Cancelled { pane: session.pane });
    Some(Cmd::HideDropOverlay)
}

/// The source strip never sees the release once the host has captured the
/// pointer, so clear its press state here.
fn end_strip_gesture<C>(host: &mut DockHost<C>, source_group: GroupId) {
    if let Some(group) = host.layout.group_mut(source_group) {
        group.strip.reset();
    }
}
