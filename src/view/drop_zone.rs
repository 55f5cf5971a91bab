//! Drop-zone detection for pane drags
//!
//! Given a pointer position in host-root coordinates, find the tab group
//! under it and classify the pointer into one of five zones of that group's
//! rectangle. Edge bands are evaluated horizontal first: a pointer in a
//! corner always lands in Left or Right, never Top or Bottom.

use serde::{Deserialize, Serialize};

use super::geometry::GeometryProvider;
use crate::config::DockConfig;
use crate::model::layout::{DockLayout, GroupId, Orientation, Point, Rect};

/// Default fraction of width/height that counts as an edge band
pub const EDGE_BAND: f32 = 0.25;

/// Default fraction of the target an edge-zone overlay covers
pub const OVERLAY_FRACTION: f32 = 0.5;

/// Region of a target group deciding how a dropped pane is merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropZone {
    Left,
    Right,
    Top,
    Bottom,
    /// Join the group as a new tab
    #[default]
    Center,
}

impl DropZone {
    /// Orientation of the split an edge drop creates; `None` for Center
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            DropZone::Left | DropZone::Right => Some(Orientation::Horizontal),
            DropZone::Top | DropZone::Bottom => Some(Orientation::Vertical),
            DropZone::Center => None,
        }
    }

    /// Whether the dropped pane's new group goes before the target
    pub fn new_group_first(&self) -> bool {
        matches!(self, DropZone::Left | DropZone::Top)
    }

    #[inline]
    pub fn is_edge(&self) -> bool {
        !matches!(self, DropZone::Center)
    }

    pub const ALL: [DropZone; 5] = [
        DropZone::Left,
        DropZone::Right,
        DropZone::Top,
        DropZone::Bottom,
        DropZone::Center,
    ];
}

/// A resolved drop target for the current pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    pub group: GroupId,
    pub zone: DropZone,
    /// Target group's rectangle in host-root coordinates
    pub group_rect: Rect,
    /// Where the drop feedback overlay goes
    pub overlay: Rect,
}

/// Classify a position relative to a rectangle's top-left corner.
///
/// Checked in a fixed order: left band, right band, top band, bottom band,
/// then center.
pub fn classify(relative: Point, width: f32, height: f32, band: f32) -> DropZone {
    let left_band = width * band;
    let right_band = width * (1.0 - band);
    let top_band = height * band;
    let bottom_band = height * (1.0 - band);

    if relative.x < left_band {
        DropZone::Left
    } else if relative.x > right_band {
        DropZone::Right
    } else if relative.y < top_band {
        DropZone::Top
    } else if relative.y > bottom_band {
        DropZone::Bottom
    } else {
        DropZone::Center
    }
}

/// Overlay rectangle for a zone: the whole group for Center, otherwise
/// `fraction` of it hugging the matching edge.
pub fn overlay_rect(group: Rect, zone: DropZone, fraction: f32) -> Rect {
    let mut overlay = group;
    match zone {
        DropZone::Left => overlay.width = group.width * fraction,
        DropZone::Right => {
            overlay.x += group.width * (1.0 - fraction);
            overlay.width = group.width * fraction;
        }
        DropZone::Top => overlay.height = group.height * fraction,
        DropZone::Bottom => {
            overlay.y += group.height * (1.0 - fraction);
            overlay.height = group.height * fraction;
        }
        DropZone::Center => {}
    }
    overlay
}

/// Find the reachable tab group whose rectangle contains `point`.
///
/// Groups are tried in tree order; groups without a known rectangle are skipped.
pub fn group_at_point<C, G>(layout: &DockLayout<C>, geometry: &G, point: Point) -> Option<GroupId>
where
    G: GeometryProvider + ?Sized,
{
    layout.collect_group_ids().into_iter().find(|group| {
        geometry
            .group_rect(*group)
            .is_some_and(|rect| rect.contains_point(point))
    })
}

/// Resolve the target group, zone and overlay for a pointer position
pub fn detect_drop_target<C, G>(
    layout: &DockLayout<C>,
    geometry: &G,
    point: Point,
    config: &DockConfig,
) -> Option<DropTarget>
where
    G: GeometryProvider + ?Sized,
{
    let group = group_at_point(layout, geometry, point)?;
    let group_rect = geometry.group_rect(group)?;

    let origin = group_rect.origin();
    let relative = Point::new(point.x - origin.x, point.y - origin.y);
    let zone = classify(relative, group_rect.width, group_rect.height, config.edge_band);

    Some(DropTarget {
        group,
        zone,
        group_rect,
        overlay: overlay_rect(group_rect, zone, config.overlay_fraction),
    })
}
