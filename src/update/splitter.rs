//! Splitter bar dragging
//!
//! A press on a bar captures the pointer; each move puts the bar under the
//! pointer by rewriting the split's sizes, keeping each side's unit. Release
//! keeps the new sizes, capture loss puts the old ones back.

use crate::commands::Cmd;
use crate::messages::{PointerId, PointerMsg};
use crate::model::{DockHost, Point, SplitSize, SplitterResize};

/// Start resizing the split whose bar is under `pos`.
///
/// Ignored when no bar is there, or while a pane drag or another resize is
/// in progress.
pub fn begin_splitter_drag<C>(
    host: &mut DockHost<C>,
    pointer: PointerId,
    pos: Point,
) -> Option<Cmd> {
    if host.drag.is_dragging() || host.resize.is_some() {
        tracing::debug!(target: "drag", ?pointer, "splitter press ignored, gesture active");
        return None;
    }

    let bar = *host.geometry.splitter_at(pos)?;
    let split = host.layout.split(bar.split)?;
    let (first_len, second_len) = bar.side_lengths();

    host.resize = Some(SplitterResize {
        split: bar.split,
        pointer,
        orientation: bar.orientation,
        start: pos,
        first_len,
        second_len,
        original_sizes: (split.first_size, split.second_size),
    });
    tracing::debug!(target: "drag", split = ?bar.split, first_len, second_len, "splitter drag started");

    Some(Cmd::CapturePointer(pointer))
}

/// Handle captured pointer events while a splitter is being dragged
pub fn update_resize_pointer<C>(host: &mut DockHost<C>, msg: PointerMsg) -> Option<Cmd> {
    let resize = host.resize?;
    match msg {
        PointerMsg::Moved { pointer, pos } if pointer == resize.pointer => {
            let (first_len, second_len) = resize.lengths_at(pos);
            let Some(split) = host.layout.split(resize.split) else {
                // Collapsed under the pointer
                host.resize = None;
                tracing::debug!(target: "drag", split = ?resize.split, "resized split is gone");
                return Some(Cmd::ReleasePointer(pointer));
            };
            let sizes = resized(split.first_size, split.second_size, first_len, second_len);
            set_sizes(host, resize, sizes)
        }
        PointerMsg::Released { pointer, .. } if pointer == resize.pointer => {
            host.resize = None;
            tracing::debug!(target: "drag", split = ?resize.split, "splitter drag ended");
            Some(Cmd::ReleasePointer(pointer))
        }
        PointerMsg::CaptureLost { pointer } if pointer == resize.pointer => {
            host.resize = None;
            tracing::debug!(target: "drag", split = ?resize.split, "capture lost, resize reverted");
            set_sizes(host, resize, resize.original_sizes)
        }
        _ => None,
    }
}

fn set_sizes<C>(
    host: &mut DockHost<C>,
    resize: SplitterResize,
    (first_size, second_size): (SplitSize, SplitSize),
) -> Option<Cmd> {
    let split = host.layout.split_mut(resize.split)?;
    if split.first_size == first_size && split.second_size == second_size {
        return None;
    }
    split.first_size = first_size;
    split.second_size = second_size;
    host.geometry.refresh(host.layout.root.as_ref());
    Some(Cmd::Redraw)
}

/// New sizes giving the two sides these lengths. Pixel sides take the new
/// length; a star side beside a pixel side keeps its weight; two star sides
/// take their lengths as weights.
fn resized(first: SplitSize, second: SplitSize, first_len: f32, second_len: f32) -> (SplitSize, SplitSize) {
    match (first, second) {
        (SplitSize::Pixel(_), SplitSize::Pixel(_)) => {
            (SplitSize::Pixel(first_len), SplitSize::Pixel(second_len))
        }
        (SplitSize::Pixel(_), star @ SplitSize::Star(_)) => (SplitSize::Pixel(first_len), star),
        (star @ SplitSize::Star(_), SplitSize::Pixel(_)) => (star, SplitSize::Pixel(second_len)),
        (SplitSize::Star(_), SplitSize::Star(_)) => {
            (SplitSize::Star(first_len), SplitSize::Star(second_len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_keeps_units() {
        assert_eq!(
            resized(SplitSize::Star(1.0), SplitSize::Pixel(200.0), 494.0, 300.0),
            (SplitSize::Star(1.0), SplitSize::Pixel(300.0))
        );
        assert_eq!(
            resized(SplitSize::Pixel(200.0), SplitSize::Star(2.0), 250.0, 100.0),
            (SplitSize::Pixel(250.0), SplitSize::Star(2.0))
        );
        assert_eq!(
            resized(SplitSize::Star(1.0), SplitSize::Star(1.0), 100.0, 300.0),
            (SplitSize::Star(100.0), SplitSize::Star(300.0))
        );
    }
}
