//! Geometry for the live tree
//!
//! The drop-zone detector only needs one thing: each tab group's rectangle
//! in host-root coordinates. `GeometryProvider` is that seam. A renderer that
//! lays groups out itself can feed rectangles in with
//! `LayoutGeometry::set_group_rect`; otherwise `LayoutGeometry::compute`
//! runs a layout pass over the tree honouring split sizes.
//!
//! Computed geometry follows tree mutations. The first externally fed
//! rectangle hands ownership to the caller: from then on mutations only drop
//! rectangles of groups that left the tree, and splitter bars are gone.

use std::collections::HashMap;

use crate::model::layout::{
    GroupId, LayoutNode, Orientation, Point, Rect, SplitId, SplitNode, SplitSize,
};

/// Width of splitter bars in pixels
pub const SPLITTER_WIDTH: f32 = 6.0;

/// Source of on-screen rectangles for live tab groups
pub trait GeometryProvider {
    /// The group's rectangle translated into host-root coordinates,
    /// or `None` if the group is not currently laid out.
    fn group_rect(&self, group: GroupId) -> Option<Rect>;
}

/// The bar between a split's two children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterBar {
    pub split: SplitId,
    pub orientation: Orientation,
    pub rect: Rect,
    /// The whole area the split divides, bar included
    pub area: Rect,
}

impl SplitterBar {
    /// Lengths of the two sides along the split's axis
    pub fn side_lengths(&self) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (
                self.rect.x - self.area.x,
                self.area.x + self.area.width - (self.rect.x + self.rect.width),
            ),
            Orientation::Vertical => (
                self.rect.y - self.area.y,
                self.area.y + self.area.height - (self.rect.y + self.rect.height),
            ),
        }
    }
}

/// Group rectangles and splitter bars from the last layout pass
#[derive(Debug, Clone, Default)]
pub struct LayoutGeometry {
    group_rects: HashMap<GroupId, Rect>,
    splitters: Vec<SplitterBar>,
    /// Rectangle passed to the last `compute`, if geometry is computed here
    available: Option<Rect>,
    splitter_width: f32,
}

impl GeometryProvider for LayoutGeometry {
    fn group_rect(&self, group: GroupId) -> Option<Rect> {
        self.group_rects.get(&group).copied()
    }
}

impl LayoutGeometry {
    /// Lay out the tree rooted at `root` inside `available`
    pub fn compute(root: Option<&LayoutNode>, available: Rect, splitter_width: f32) -> Self {
        let mut geometry = Self {
            group_rects: HashMap::new(),
            splitters: Vec::new(),
            available: Some(available),
            splitter_width,
        };
        if let Some(root) = root {
            geometry.layout_node(root, available);
        }
        geometry
    }

    /// Record a rectangle reported by an external renderer.
    ///
    /// Stops the built-in layout pass from overwriting rectangles.
    pub fn set_group_rect(&mut self, group: GroupId, rect: Rect) {
        if self.available.take().is_some() {
            self.splitters.clear();
        }
        self.group_rects.insert(group, rect);
    }

    pub fn clear(&mut self) {
        self.group_rects.clear();
        self.splitters.clear();
        self.available = None;
    }

    /// Start over for a replaced tree.
    ///
    /// Group ids of the new tree may collide with the old one's, so external
    /// rectangles are dropped rather than pruned.
    pub fn rebuild(&mut self, root: Option<&LayoutNode>) {
        match self.available {
            Some(available) => *self = Self::compute(root, available, self.splitter_width),
            None => self.clear(),
        }
    }

    /// Bring geometry up to date after the tree changed shape.
    ///
    /// Computed geometry is recomputed; externally fed rectangles are kept
    /// only for groups still in the tree.
    pub fn refresh(&mut self, root: Option<&LayoutNode>) {
        match self.available {
            Some(available) => *self = Self::compute(root, available, self.splitter_width),
            None => {
                let live = root.map(LayoutNode::group_ids).unwrap_or_default();
                self.group_rects.retain(|id, _| live.contains(id));
            }
        }
    }

    /// Area of the built-in layout pass; `None` once geometry is fed externally
    pub fn available(&self) -> Option<Rect> {
        self.available
    }

    pub fn splitters(&self) -> &[SplitterBar] {
        &self.splitters
    }

    /// Find splitter bar at a given point
    pub fn splitter_at(&self, point: Point) -> Option<&SplitterBar> {
        self.splitters.iter().find(|bar| bar.rect.contains_point(point))
    }

    /// Recursively compute layout for a node
    fn layout_node(&mut self, node: &LayoutNode, rect: Rect) {
        match node {
            LayoutNode::Group(id) => {
                self.group_rects.insert(*id, rect);
            }
            LayoutNode::Split(split) => self.layout_split(split, rect),
        }
    }

    fn layout_split(&mut self, split: &SplitNode, rect: Rect) {
        let total = match split.orientation {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        };
        let bar = self.splitter_width.min(total).max(0.0);
        let (first_len, second_len) =
            split_lengths(total - bar, split.first_size, split.second_size);

        let (first_rect, bar_rect, second_rect) = match split.orientation {
            Orientation::Horizontal => (
                Rect::new(rect.x, rect.y, first_len, rect.height),
                Rect::new(rect.x + first_len, rect.y, bar, rect.height),
                Rect::new(rect.x + first_len + bar, rect.y, second_len, rect.height),
            ),
            Orientation::Vertical => (
                Rect::new(rect.x, rect.y, rect.width, first_len),
                Rect::new(rect.x, rect.y + first_len, rect.width, bar),
                Rect::new(rect.x, rect.y + first_len + bar, rect.width, second_len),
            ),
        };

        self.splitters.push(SplitterBar {
            split: split.id,
            orientation: split.orientation,
            rect: bar_rect,
            area: rect,
        });
        self.layout_node(&split.first, first_rect);
        self.layout_node(&split.second, second_rect);
    }
}

/// Share `space` between two sides. Pixel sizes are taken first (clamped to
/// what's there), star sizes split what remains by weight.
fn split_lengths(space: f32, first: SplitSize, second: SplitSize) -> (f32, f32) {
    let space = space.max(0.0);
    match (first, second) {
        (SplitSize::Pixel(a), SplitSize::Pixel(b)) => {
            let a = a.max(0.0).min(space);
            (a, b.max(0.0).min(space - a))
        }
        (SplitSize::Pixel(a), SplitSize::Star(_)) => {
            let a = a.max(0.0).min(space);
            (a, space - a)
        }
        (SplitSize::Star(_), SplitSize::Pixel(b)) => {
            let b = b.max(0.0).min(space);
            (space - b, b)
        }
        (SplitSize::Star(a), SplitSize::Star(b)) => {
            let (a, b) = (a.max(0.0), b.max(0.0));
            let weight = a + b;
            if weight <= 0.0 {
                (space / 2.0, space / 2.0)
            } else {
                let first_len = space * a / weight;
                (first_len, space - first_len)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_sizes_share_by_weight() {
        assert_eq!(
            split_lengths(300.0, SplitSize::Star(1.0), SplitSize::Star(2.0)),
            (100.0, 200.0)
        );
        assert_eq!(
            split_lengths(100.0, SplitSize::Star(0.0), SplitSize::Star(0.0)),
            (50.0, 50.0)
        );
    }

    #[test]
    fn test_pixel_size_is_taken_first() {
        assert_eq!(
            split_lengths(500.0, SplitSize::Pixel(200.0), SplitSize::Star(1.0)),
            (200.0, 300.0)
        );
        assert_eq!(
            split_lengths(500.0, SplitSize::Star(1.0), SplitSize::Pixel(200.0)),
            (300.0, 200.0)
        );
    }

    #[test]
    fn test_pixel_size_clamped_to_space() {
        assert_eq!(
            split_lengths(150.0, SplitSize::Pixel(200.0), SplitSize::Star(1.0)),
            (150.0, 0.0)
        );
        assert_eq!(
            split_lengths(-10.0, SplitSize::Pixel(200.0), SplitSize::Pixel(5.0)),
            (0.0, 0.0)
        );
    }
}
