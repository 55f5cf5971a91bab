//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabdock::commands::Cmd;
use tabdock::config::DockConfig;
use tabdock::messages::{Msg, PointerButton, PointerId, PointerMsg, TabHit, TabStripMsg};
use tabdock::model::{
    DockHost, GroupId, LayoutModel, LayoutNode, Orientation, Pane, PaneId, PaneModel, Point, Rect,
    SplitModel, SplitSize, TabGroupModel,
};
use tabdock::update::update;

pub type TestHost = DockHost<String>;

/// Pointer used by the scripted gestures below
pub const MOUSE: PointerId = PointerId(1);

/// Area the IDE fixture is laid out in
pub const IDE_AREA: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1200.0,
    height: 800.0,
};

/// Create a pane whose content mentions its header
pub fn pane(header: &str) -> Pane<String> {
    Pane::new(header, format!("{} content", header))
}

/// A host with one tab group holding `headers` in order, first selected
pub fn host_with(headers: &[&str]) -> TestHost {
    DockHost::with_panes(
        headers.iter().map(|h| pane(h)).collect(),
        DockConfig::default(),
    )
}

/// The demo arrangement:
///
/// ```text
/// vertical
/// ├─ horizontal
/// │  ├─ horizontal
/// │  │  ├─ [Solution]           (200px)
/// │  │  └─ [Doc1*, Doc2, Doc3]
/// │  └─ [Properties]            (200px)
/// └─ [Output*, Debug]           (200px)
/// ```
pub fn ide_model() -> LayoutModel<String> {
    let model_pane = |header: &str| PaneModel::new(header, format!("{} content", header));

    let solution = TabGroupModel::new(vec![model_pane("Solution").can_close(false).can_move(false)]);
    let center = TabGroupModel::new(vec![
        model_pane("Doc1"),
        model_pane("Doc2"),
        model_pane("Doc3"),
    ])
    .selected(0);
    let properties = TabGroupModel::new(vec![model_pane("Properties").can_close(false)]);
    let bottom = TabGroupModel::new(vec![model_pane("Output"), model_pane("Debug")]).selected(0);

    let left_center = SplitModel::new(Orientation::Horizontal, solution, center)
        .sizes(SplitSize::Pixel(200.0), SplitSize::Star(1.0));
    let top = SplitModel::new(Orientation::Horizontal, left_center, properties)
        .sizes(SplitSize::Star(1.0), SplitSize::Pixel(200.0));
    SplitModel::new(Orientation::Vertical, top, bottom)
        .sizes(SplitSize::Star(1.0), SplitSize::Pixel(200.0))
        .into()
}

/// The demo arrangement, laid out in `IDE_AREA`.
///
/// With 6px splitters the groups end up at:
/// - Solution   x 0..200,    y 0..594
/// - Doc1..3    x 206..994,  y 0..594
/// - Properties x 1000..1200, y 0..594
/// - Output     x 0..1200,   y 600..800
pub fn ide_host() -> TestHost {
    let mut host = DockHost::from_model(ide_model(), DockConfig::default())
        .expect("demo layout should build");
    host.compute_layout(IDE_AREA);
    host
}

/// Look up a pane by header
pub fn pane_id(host: &TestHost, header: &str) -> PaneId {
    host.layout
        .panes
        .iter()
        .find(|(_, p)| p.header == header)
        .map(|(id, _)| *id)
        .unwrap_or_else(|| panic!("no pane named {}", header))
}

/// Group currently holding the pane named `header`
pub fn group_of(host: &TestHost, header: &str) -> GroupId {
    let id = pane_id(host, header);
    host.layout
        .group_containing(id)
        .unwrap_or_else(|| panic!("pane {} is not in any group", header))
}

/// Tab headers of a group in order
pub fn headers(host: &TestHost, group: GroupId) -> Vec<String> {
    let group = host.layout.group(group).expect("group should exist");
    group
        .panes
        .iter()
        .map(|id| host.layout.pane(*id).expect("pane should exist").header.clone())
        .collect()
}

/// Header of a group's selected tab
pub fn selected_header(host: &TestHost, group: GroupId) -> Option<String> {
    host.selected_pane(group)
        .and_then(|id| host.layout.pane(id))
        .map(|p| p.header.clone())
}

/// Compact description of the tree, e.g. `V(H([A*],[B*,C]),[D*])`.
/// Selected tabs carry a `*`.
pub fn shape(host: &TestHost) -> String {
    match &host.layout.root {
        None => "empty".to_string(),
        Some(node) => shape_of(host, node),
    }
}

fn shape_of(host: &TestHost, node: &LayoutNode) -> String {
    match node {
        LayoutNode::Group(id) => {
            let selected = selected_header(host, *id);
            let tabs: Vec<String> = headers(host, *id)
                .into_iter()
                .map(|h| {
                    if Some(&h) == selected.as_ref() {
                        format!("{}*", h)
                    } else {
                        h
                    }
                })
                .collect();
            format!("[{}]", tabs.join(","))
        }
        LayoutNode::Split(split) => {
            let tag = match split.orientation {
                Orientation::Horizontal => "H",
                Orientation::Vertical => "V",
            };
            format!(
                "{}({},{})",
                tag,
                shape_of(host, &split.first),
                shape_of(host, &split.second)
            )
        }
    }
}

/// Center of a group's laid-out rectangle
pub fn center_of(host: &TestHost, group: GroupId) -> Point {
    use tabdock::view::GeometryProvider;
    let rect = host
        .geometry
        .group_rect(group)
        .expect("group should be laid out");
    Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

/// Press a pane's tab and move far enough to start a drag.
///
/// Returns the command from the threshold-crossing move.
pub fn start_drag(host: &mut TestHost, header: &str) -> Option<Cmd> {
    let pane = pane_id(host, header);
    let group = group_of(host, header);
    let start = Point::new(10.0, 10.0);

    update(
        host,
        Msg::TabStrip(TabStripMsg::Pressed {
            group,
            pointer: MOUSE,
            pos: start,
            button: PointerButton::Left,
            hit: TabHit::Tab(pane),
        }),
    );
    update(
        host,
        Msg::TabStrip(TabStripMsg::Moved {
            group,
            pointer: MOUSE,
            pos: Point::new(start.x + 20.0, start.y),
        }),
    )
}

/// Move the captured pointer
pub fn pointer_move(host: &mut TestHost, pos: Point) -> Option<Cmd> {
    update(
        host,
        Msg::Pointer(PointerMsg::Moved {
            pointer: MOUSE,
            pos,
        }),
    )
}

/// Release the captured pointer
pub fn pointer_release(host: &mut TestHost, pos: Point) -> Option<Cmd> {
    update(
        host,
        Msg::Pointer(PointerMsg::Released {
            pointer: MOUSE,
            pos,
        }),
    )
}

/// A whole drag gesture: start on `header`'s tab, move to `to`, release there
pub fn drag_to(host: &mut TestHost, header: &str, to: Point) -> Option<Cmd> {
    start_drag(host, header);
    pointer_move(host, to);
    pointer_release(host, to)
}
