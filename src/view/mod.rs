//! View helpers: geometry and drop-zone hit-testing
//!
//! Nothing here draws. Renderers read `LayoutGeometry` and the drag
//! session's overlay rectangle and paint however they like.

pub mod drop_zone;
pub mod geometry;

pub use drop_zone::{
    classify, detect_drop_target, group_at_point, overlay_rect, DropTarget, DropZone,
};
pub use geometry::{GeometryProvider, LayoutGeometry, SplitterBar};
