use glam::Vec2;

use super::event::TouchPhase;

/// One finger on the screen, as seen during the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Contact identifier.
    pub id: u64,
    /// Phase reached this frame.
    pub phase: TouchPhase,
    /// Current position in physical pixels.
    pub position: Vec2,
    /// Displacement since the end of the previous frame.
    pub delta: Vec2,
}

impl Touch {
    /// A contact that just started at `position`.
    #[must_use]
    pub fn began(id: u64, position: Vec2) -> Self {
        Self {
            id,
            phase: TouchPhase::Began,
            position,
            delta: Vec2::ZERO,
        }
    }

    /// Where the contact was at the end of the previous frame.
    #[must_use]
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Screen rectangle covered by an interactive UI element.
///
/// Touches that begin inside one never rotate the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiRect {
    /// Top-left corner in physical pixels.
    pub min: Vec2,
    /// Bottom-right corner in physical pixels.
    pub max: Vec2,
}

impl UiRect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Whether `point` lies inside (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
