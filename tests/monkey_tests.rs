//! Monkey tests - edge cases, fuzzing, and stress testing
//!
//! These tests push the layout engine through long, deterministic but
//! arbitrary sequences of relocations, drags and closes, checking after
//! every step that the tree is still valid.

mod common;

use common::{drag_to, ide_host, pane_id, shape, TestHost, IDE_AREA, MOUSE};
use tabdock::messages::{Msg, PointerMsg};
use tabdock::model::{GroupId, PaneId, Point, Rect};
use tabdock::update::update;
use tabdock::view::DropZone;

/// No reachable group is empty, and every pane is still placed
fn check(host: &TestHost, expected_panes: usize) {
    host.layout.assert_invariants();
    for group in host.layout.collect_group_ids() {
        assert!(!host.layout.group(group).unwrap().is_empty());
    }
    assert_eq!(host.layout.panes.len(), expected_panes);
}

fn sorted_panes(host: &TestHost) -> Vec<PaneId> {
    let mut panes: Vec<PaneId> = host.layout.panes.keys().copied().collect();
    panes.sort();
    panes
}

fn groups(host: &TestHost) -> Vec<GroupId> {
    host.layout.collect_group_ids()
}

// ========================================================================
// Direct relocation sequences
// ========================================================================

#[test]
fn test_long_relocation_sequence_keeps_invariants() {
    let mut host = ide_host();
    let total = host.layout.panes.len();

    for i in 0..500usize {
        let panes = sorted_panes(&host);
        let pane = panes[(i * 7) % panes.len()];
        let source = host.layout.group_containing(pane).unwrap();
        let all_groups = groups(&host);
        let target = all_groups[(i * 13 + 3) % all_groups.len()];
        let zone = DropZone::ALL[(i * 5 + i / 3) % DropZone::ALL.len()];

        host.relocate_pane(pane, source, target, zone);
        check(&host, total);
    }
}

#[test]
fn test_relocations_with_wrong_source_never_change_tree() {
    let mut host = ide_host();
    let total = host.layout.panes.len();

    for i in 0..100usize {
        let panes = sorted_panes(&host);
        let pane = panes[i % panes.len()];
        let all_groups = groups(&host);
        let actual = host.layout.group_containing(pane).unwrap();
        let Some(wrong) = all_groups.iter().copied().find(|g| *g != actual) else {
            continue;
        };
        let before = shape(&host);

        assert!(!host.relocate_pane(pane, wrong, actual, DropZone::ALL[i % 5]));
        assert_eq!(shape(&host), before);
        check(&host, total);

        // Keep the tree moving so later iterations see other shapes
        let target = all_groups[(i * 3) % all_groups.len()];
        host.relocate_pane(pane, actual, target, DropZone::ALL[(i + 2) % 5]);
        check(&host, total);
    }
}

#[test]
fn test_interleaved_relocate_and_close_until_empty() {
    let mut host = ide_host();
    let mut remaining = host.layout.panes.len();

    let mut i = 0usize;
    while remaining > 0 {
        let panes = sorted_panes(&host);
        let pane = panes[(i * 11) % panes.len()];
        if i % 3 == 2 {
            assert!(host.close_pane(pane).is_some());
            remaining -= 1;
        } else {
            let source = host.layout.group_containing(pane).unwrap();
            let all_groups = groups(&host);
            let target = all_groups[(i * 5) % all_groups.len()];
            host.relocate_pane(pane, source, target, DropZone::ALL[i % 5]);
        }
        check(&host, remaining);
        i += 1;
    }

    assert!(host.is_empty());
    assert_eq!(shape(&host), "empty");
}

// ========================================================================
// Gesture sequences through update
// ========================================================================

#[test]
fn test_many_drag_gestures_keep_invariants() {
    let mut host = ide_host();
    let total = host.layout.panes.len();
    let headers = ["Doc1", "Doc2", "Doc3", "Output", "Debug", "Properties"];

    for i in 0..300usize {
        let header = headers[(i * 7) % headers.len()];
        let x = ((i * 131) % 1260) as f32 - 30.0;
        let y = ((i * 97) % 860) as f32 - 30.0;
        drag_to(&mut host, header, Point::new(x, y));

        assert!(!host.drag_state().is_dragging());
        check(&host, total);
    }

    // Solution can't move, but others may have joined it
    let solution = pane_id(&host, "Solution");
    let group = host.layout.group_containing(solution).unwrap();
    assert_eq!(host.layout.group(group).unwrap().panes[0], solution);
}

#[test]
fn test_cancelled_gestures_never_change_tree() {
    let mut host = ide_host();
    let before = shape(&host);

    for i in 0..50usize {
        common::start_drag(&mut host, if i % 2 == 0 { "Doc1" } else { "Debug" });
        for step in 0..10usize {
            let pos = Point::new((i * 37 + step * 91) as f32 % 1200.0, (step * 61) as f32 % 800.0);
            update(&mut host, Msg::Pointer(PointerMsg::Moved { pointer: MOUSE, pos }));
        }
        update(&mut host, Msg::Pointer(PointerMsg::CaptureLost { pointer: MOUSE }));
        assert_eq!(shape(&host), before);
    }
}

// ========================================================================
// Degenerate geometry
// ========================================================================

#[test]
fn test_zero_sized_area_has_no_targets() {
    let mut host = ide_host();
    host.compute_layout(Rect::new(0.0, 0.0, 0.0, 0.0));
    let before = shape(&host);

    drag_to(&mut host, "Doc1", Point::new(0.0, 0.0));
    assert_eq!(shape(&host), before);
    check(&host, 7);
}

#[test]
fn test_oversized_splitters_do_not_panic() {
    let mut host = ide_host();
    host.config.splitter_width = 5000.0;
    host.compute_layout(IDE_AREA);

    for i in 0..20usize {
        drag_to(
            &mut host,
            "Doc2",
            Point::new((i * 60) as f32, (i * 40) as f32),
        );
        check(&host, 7);
    }
}
