//! Adapter to convert winit window events into host pointer messages
//!
//! The mouse is reported as `MOUSE_POINTER`; each touch contact gets its own
//! pointer id. Positions are translated into host-root coordinates by
//! subtracting the host's origin within the window.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

use crate::messages::{PointerButton, PointerId, PointerMsg};
use crate::model::Point;

/// Pointer id used for the mouse
pub const MOUSE_POINTER: PointerId = PointerId(0);

/// Convert a winit mouse button
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}

/// Tracks the last cursor position, since winit button events carry none
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Host root's top-left corner in window coordinates
    pub origin: Point,
    last_position: Point,
}

impl PointerTracker {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            last_position: Point::default(),
        }
    }

    /// Last known cursor position in host-root coordinates
    pub fn last_position(&self) -> Point {
        self.last_position
    }

    fn to_host(&self, position: PhysicalPosition<f64>) -> Point {
        Point::new(
            position.x as f32 - self.origin.x,
            position.y as f32 - self.origin.y,
        )
    }

    /// Map a window event to a pointer message for the host root.
    ///
    /// Only moves, left-button releases, touch contacts and focus loss are
    /// relevant; everything else returns `None`.
    pub fn pointer_msg(&mut self, event: &WindowEvent) -> Option<PointerMsg> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.last_position = self.to_host(*position);
                Some(PointerMsg::Moved {
                    pointer: MOUSE_POINTER,
                    pos: self.last_position,
                })
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button,
                ..
            } if pointer_button(*button) == PointerButton::Left => Some(PointerMsg::Released {
                pointer: MOUSE_POINTER,
                pos: self.last_position,
            }),
            WindowEvent::Touch(touch) => self.touch_msg(touch),
            // Losing focus takes capture with it
            WindowEvent::Focused(false) => Some(PointerMsg::CaptureLost {
                pointer: MOUSE_POINTER,
            }),
            _ => None,
        }
    }

    fn touch_msg(&self, touch: &Touch) -> Option<PointerMsg> {
        let pointer = PointerId(touch.id.wrapping_add(1));
        let pos = self.to_host(touch.location);
        match touch.phase {
            TouchPhase::Started => None,
            TouchPhase::Moved => Some(PointerMsg::Moved { pointer, pos }),
            TouchPhase::Ended => Some(PointerMsg::Released { pointer, pos }),
            TouchPhase::Cancelled => Some(PointerMsg::CaptureLost { pointer }),
        }
    }
}
