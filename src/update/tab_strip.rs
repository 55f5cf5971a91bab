//! Tab strip events and the signals they raise

use crate::commands::Cmd;
use crate::messages::{DockSignal, PointerButton, TabHit, TabStripMsg};
use crate::model::{DockHost, GroupId};

use super::drag::begin_drag;

/// Handle an event from one group's tab strip
pub fn update_tab_strip<C>(host: &mut DockHost<C>, msg: TabStripMsg) -> Option<Cmd> {
    match msg {
        TabStripMsg::Pressed {
            group,
            pos,
            button,
            hit,
            ..
        } => {
            let Some(tab_group) = host.layout.group(group) else {
                tracing::debug!(target: "strip", ?group, "press on unknown group ignored");
                return None;
            };

            let pane = match hit {
                TabHit::Tab(pane) | TabHit::CloseButton(pane) if tab_group.contains(pane) => {
                    host.layout.pane(pane).map(|p| (pane, p.can_close, p.can_move))
                }
                _ => None,
            };

            match (button, hit, pane) {
                (PointerButton::Left, TabHit::CloseButton(_), Some((pane, can_close, _))) => {
                    reset_strip(host, group);
                    if !can_close {
                        return None;
                    }
                    update_signal(host, DockSignal::PaneCloseRequested { pane, group })
                }
                (PointerButton::Left, TabHit::Tab(_), Some((pane, _, true))) => {
                    if let Some(tab_group) = host.layout.group_mut(group) {
                        tab_group.strip.arm(pane, pos);
                    }
                    None
                }
                _ => {
                    reset_strip(host, group);
                    None
                }
            }
        }

        TabStripMsg::Moved {
            group,
            pointer,
            pos,
        } => {
            let threshold = host.config.drag_threshold;
            let pane = host
                .layout
                .group_mut(group)?
                .strip
                .track_move(pos, threshold)?;
            update_signal(
                host,
                DockSignal::PaneDragStarted {
                    pane,
                    source_group: group,
                    pointer,
                },
            )
        }

        TabStripMsg::Released { group, .. } => {
            reset_strip(host, group);
            None
        }

        TabStripMsg::SelectionChanged { group, pane } => {
            host.select_pane(group, pane).then_some(Cmd::Redraw)
        }
    }
}

/// Consume a tab group signal and echo it to the caller
pub fn update_signal<C>(host: &mut DockHost<C>, signal: DockSignal) -> Option<Cmd> {
    let effect = match signal {
        DockSignal::PaneDragStarted {
            pane,
            source_group,
            pointer,
        } => begin_drag(host, pane, source_group, pointer),
        DockSignal::PaneCloseRequested { pane, .. } => host.close_pane(pane).map(|_| Cmd::Redraw),
    };
    Some(Cmd::Signal(signal).and(effect))
}

fn reset_strip<C>(host: &mut DockHost<C>, group: GroupId) {
    if let Some(tab_group) = host.layout.group_mut(group) {
        tab_group.strip.reset();
    }
}
