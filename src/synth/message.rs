use std::time::Duration;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Bounding rectangle of the control surface, in the same coordinate space as
/// pointer events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ControlRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Translate a client coordinate so the rectangle's top-left is the origin.
    pub fn to_local(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        (client_x - self.left, client_y - self.top)
    }

    pub fn contains(&self, client_x: f32, client_y: f32) -> bool {
        let (x, y) = self.to_local(client_x, client_y);
        x >= 0.0 && y >= 0.0 && x < self.width && y < self.height
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
    pub bounds: ControlRect,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SlideMessage {
    /// Pointer pressed on the control surface.
    PointerDown(PointerEvent),
    /// Pointer moved over the control surface.
    PointerMove(PointerEvent),
    /// Pointer released over the control surface.
    PointerUp,
    /// Pointer released anywhere, including outside the control surface.
    GlobalPointerUp,
    /// One frame of the external clock.
    Tick { elapsed: Duration },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SlideMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SlideMessage> {
    fn pop(&mut self) -> Option<SlideMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for std::collections::VecDeque<SlideMessage> {
    fn pop(&mut self) -> Option<SlideMessage> {
        self.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_coordinates_subtract_origin() {
        let rect = ControlRect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.to_local(160.0, 45.0), (150.0, 25.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = ControlRect::new(10.0, 20.0, 200.0, 100.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(209.9, 119.9));
        assert!(!rect.contains(210.0, 50.0));
        assert!(!rect.contains(9.0, 50.0));
    }
}
