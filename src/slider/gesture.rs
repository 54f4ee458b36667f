//! Pointer and touch input unified into one gesture stream.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Mouse-style pointer event. `page_x` is in the same unit as track offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub page_x: f64,
}

impl PointerEvent {
    pub fn down(page_x: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            page_x,
        }
    }

    pub fn moved(page_x: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            page_x,
        }
    }

    pub fn up(page_x: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            page_x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
}

/// Touch event carrying the touches still in contact with the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchKind,
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn start(client_x: f64) -> Self {
        Self {
            kind: TouchKind::Start,
            touches: vec![TouchPoint { client_x }],
        }
    }

    pub fn moved(client_x: f64) -> Self {
        Self {
            kind: TouchKind::Move,
            touches: vec![TouchPoint { client_x }],
        }
    }

    pub fn end() -> Self {
        Self {
            kind: TouchKind::End,
            touches: Vec::new(),
        }
    }
}

/// Device-independent drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Start { x: f64 },
    Move { x: f64 },
    End,
}

/// Anything that can be read as a drag step.
pub trait GestureSource {
    /// `None` when the event carries no usable coordinate.
    fn gesture(&self) -> Option<Gesture>;
}

impl GestureSource for PointerEvent {
    fn gesture(&self) -> Option<Gesture> {
        Some(match self.kind {
            PointerKind::Down => Gesture::Start { x: self.page_x },
            PointerKind::Move => Gesture::Move { x: self.page_x },
            PointerKind::Up => Gesture::End,
        })
    }
}

impl GestureSource for TouchEvent {
    fn gesture(&self) -> Option<Gesture> {
        // Only the first contact drives the drag.
        let first = self.touches.first().map(|touch| touch.client_x);
        match self.kind {
            TouchKind::Start => first.map(|x| Gesture::Start { x }),
            TouchKind::Move => first.map(|x| Gesture::Move { x }),
            TouchKind::End => Some(Gesture::End),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_gesture() {
        assert_eq!(
            PointerEvent::down(12.0).gesture(),
            Some(Gesture::Start { x: 12.0 })
        );
        assert_eq!(
            PointerEvent::moved(7.5).gesture(),
            Some(Gesture::Move { x: 7.5 })
        );
        assert_eq!(PointerEvent::up(0.0).gesture(), Some(Gesture::End));
    }

    #[test]
    fn touch_uses_first_contact() {
        let event = TouchEvent {
            kind: TouchKind::Move,
            touches: vec![TouchPoint { client_x: 40.0 }, TouchPoint { client_x: 90.0 }],
        };
        assert_eq!(event.gesture(), Some(Gesture::Move { x: 40.0 }));
    }

    #[test]
    fn touch_start_without_contacts_is_ignored() {
        let event = TouchEvent {
            kind: TouchKind::Start,
            touches: Vec::new(),
        };
        assert_eq!(event.gesture(), None);
    }

    #[test]
    fn touch_end_needs_no_contacts() {
        assert_eq!(TouchEvent::end().gesture(), Some(Gesture::End));
    }
}
