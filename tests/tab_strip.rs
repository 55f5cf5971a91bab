//! Tests for tab strip presses, drag recognition and close requests

mod common;

use common::{group_of, headers, host_with, ide_host, pane_id, selected_header, TestHost, MOUSE};
use tabdock::commands::Cmd;
use tabdock::messages::{DockSignal, Msg, PointerButton, TabHit, TabStripMsg};
use tabdock::model::{GroupId, Point};
use tabdock::update::update;

fn press(host: &mut TestHost, group: GroupId, hit: TabHit, button: PointerButton) -> Option<Cmd> {
    update(
        host,
        Msg::TabStrip(TabStripMsg::Pressed {
            group,
            pointer: MOUSE,
            pos: Point::new(100.0, 10.0),
            button,
            hit,
        }),
    )
}

fn strip_move(host: &mut TestHost, group: GroupId, dx: f32, dy: f32) -> Option<Cmd> {
    update(
        host,
        Msg::TabStrip(TabStripMsg::Moved {
            group,
            pointer: MOUSE,
            pos: Point::new(100.0 + dx, 10.0 + dy),
        }),
    )
}

fn started_drag(cmd: &Option<Cmd>) -> bool {
    cmd.as_ref().is_some_and(|c| {
        c.contains(|c| matches!(c, Cmd::Signal(DockSignal::PaneDragStarted { .. })))
    })
}

// ============================================================================
// Drag threshold
// ============================================================================

#[test]
fn test_small_moves_do_not_start_drag() {
    let mut host = host_with(&["A", "B"]);
    let group = group_of(&host, "A");
    let a = pane_id(&host, "A");

    assert_eq!(press(&mut host, group, TabHit::Tab(a), PointerButton::Left), None);
    assert!(!started_drag(&strip_move(&mut host, group, 3.0, -4.0)));
    // Exactly on the threshold is still not a drag
    assert!(!started_drag(&strip_move(&mut host, group, 5.0, 5.0)));
    assert!(!host.drag_state().is_dragging());

    assert!(started_drag(&strip_move(&mut host, group, 0.0, 5.5)));
    assert!(host.drag_state().is_dragging());
}

#[test]
fn test_drag_signal_fires_once_per_press() {
    let mut host = host_with(&["A", "B"]);
    let group = group_of(&host, "A");
    let a = pane_id(&host, "A");

    press(&mut host, group, TabHit::Tab(a), PointerButton::Left);
    assert!(started_drag(&strip_move(&mut host, group, 30.0, 0.0)));
    assert_eq!(strip_move(&mut host, group, 60.0, 0.0), None);
}

#[test]
fn test_configured_threshold() {
    let mut host = host_with(&["A", "B"]);
    host.config.drag_threshold = 20.0;
    let group = group_of(&host, "A");
    let a = pane_id(&host, "A");

    press(&mut host, group, TabHit::Tab(a), PointerButton::Left);
    assert!(!started_drag(&strip_move(&mut host, group, 10.0, 0.0)));
    assert!(started_drag(&strip_move(&mut host, group, 21.0, 0.0)));
}

#[test]
fn test_release_forgets_press() {
    let mut host = host_with(&["A", "B"]);
    let group = group_of(&host, "A");
    let a = pane_id(&host, "A");

    press(&mut host, group, TabHit::Tab(a), PointerButton::Left);
    update(
        &mut host,
        Msg::TabStrip(TabStripMsg::Released {
            group,
            pointer: MOUSE,
        }),
    );
    assert_eq!(strip_move(&mut host, group, 50.0, 0.0), None);
}

#[test]
fn test_non_left_press_never_drags() {
    let mut host = host_with(&["A", "B"]);
    let group = group_of(&host, "A");
    let a = pane_id(&host, "A");

    press(&mut host, group, TabHit::Tab(a), PointerButton::Left);
    // A right press replaces the armed left press
    press(&mut host, group, TabHit::Tab(a), PointerButton::Right);
    assert_eq!(strip_move(&mut host, group, 50.0, 0.0), None);
}

#[test]
fn test_press_on_foreign_or_unknown_ids_is_ignored() {
    let mut host = ide_host();
    let center = group_of(&host, "Doc1");
    let output = pane_id(&host, "Output");

    assert_eq!(press(&mut host, center, TabHit::Tab(output), PointerButton::Left), None);
    assert_eq!(strip_move(&mut host, center, 50.0, 0.0), None);

    assert_eq!(
        press(&mut host, GroupId(999), TabHit::Tab(output), PointerButton::Left),
        None
    );
    assert_eq!(strip_move(&mut host, GroupId(999), 50.0, 0.0), None);
}

// ============================================================================
// Close affordance
// ============================================================================

#[test]
fn test_close_button_closes_pane() {
    let mut host = ide_host();
    let bottom = group_of(&host, "Output");
    let output = pane_id(&host, "Output");

    let cmd = press(&mut host, bottom, TabHit::CloseButton(output), PointerButton::Left)
        .expect("close press should produce commands");
    assert!(cmd.contains(|c| *c
        == Cmd::Signal(DockSignal::PaneCloseRequested {
            pane: output,
            group: bottom
        })));
    assert!(cmd.needs_redraw());

    assert_eq!(headers(&host, bottom), vec!["Debug"]);
    assert_eq!(selected_header(&host, bottom).as_deref(), Some("Debug"));
    assert!(host.pane(output).is_none());
}

#[test]
fn test_close_button_on_unclosable_pane_does_nothing() {
    let mut host = ide_host();
    let group = group_of(&host, "Properties");
    let properties = pane_id(&host, "Properties");

    assert_eq!(
        press(&mut host, group, TabHit::CloseButton(properties), PointerButton::Left),
        None
    );
    assert!(host.pane(properties).is_some());
}

#[test]
fn test_close_signal_for_absent_pane_only_echoes() {
    let mut host = host_with(&["A"]);
    let group = group_of(&host, "A");
    let a = pane_id(&host, "A");
    host.close_pane(a);

    let signal = DockSignal::PaneCloseRequested { pane: a, group };
    let cmd = update(&mut host, Msg::Signal(signal));
    assert_eq!(cmd, Some(Cmd::Signal(signal)));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selection_change_from_strip() {
    let mut host = host_with(&["A", "B", "C"]);
    let group = group_of(&host, "A");
    let c = pane_id(&host, "C");

    let cmd = update(
        &mut host,
        Msg::TabStrip(TabStripMsg::SelectionChanged { group, pane: c }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(selected_header(&host, group).as_deref(), Some("C"));
}

#[test]
fn test_selection_change_to_non_member_is_ignored() {
    let mut host = ide_host();
    let center = group_of(&host, "Doc1");
    let output = pane_id(&host, "Output");

    let cmd = update(
        &mut host,
        Msg::TabStrip(TabStripMsg::SelectionChanged {
            group: center,
            pane: output,
        }),
    );
    assert_eq!(cmd, None);
    assert_eq!(selected_header(&host, center).as_deref(), Some("Doc1"));
}
