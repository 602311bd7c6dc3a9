use glam::Vec2;

/// Pointer tracking for a button-held drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    last_pointer: Vec2,
    dragging: bool,
}

impl DragState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record the pointer for this frame of the drag.
    ///
    /// Returns the displacement since the previous frame, or `None` on the
    /// frame the drag starts.
    pub fn track(&mut self, pointer: Vec2) -> Option<Vec2> {
        let delta = self.dragging.then(|| pointer - self.last_pointer);
        self.last_pointer = pointer;
        self.dragging = true;
        delta
    }

    /// End the drag. Returns whether one was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::take(self).dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_delta() {
        let mut drag = DragState::default();
        assert_eq!(drag.track(Vec2::new(5.0, 5.0)), None);
        assert!(drag.is_dragging());
        assert_eq!(
            drag.track(Vec2::new(8.0, 1.0)),
            Some(Vec2::new(3.0, -4.0))
        );
    }

    #[test]
    fn release_resets_tracking() {
        let mut drag = DragState::default();
        assert!(!drag.release());

        let _ = drag.track(Vec2::ONE);
        assert!(drag.release());
        assert!(!drag.is_dragging());
        assert_eq!(drag.track(Vec2::ZERO), None);
    }
}
