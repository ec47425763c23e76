//! Rising-edge detection for held buttons.

/// Remembers last tick's state of one button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    was_pressed: bool,
}

impl ButtonEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's state; returns `true` only on the press edge.
    #[inline]
    pub fn update(&mut self, pressed: bool) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        rising
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.was_pressed
    }

    pub fn reset(&mut self) {
        self.was_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_press() {
        let mut edge = ButtonEdge::new();
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_reset_rearms() {
        let mut edge = ButtonEdge::new();
        edge.update(true);
        edge.reset();
        assert!(!edge.is_held());
        assert!(edge.update(true));
    }
}
