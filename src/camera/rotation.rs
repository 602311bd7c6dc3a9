use glam::{Quat, Vec2, Vec3};

use super::transform::CameraTransform;

/// Accumulated look angles in degrees.
///
/// Pitch stays within `[-clamp_angle, clamp_angle]` after every
/// [`RotationState::apply`]; yaw is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Horizontal angle; positive turns right.
    pub yaw: f32,
    /// Vertical angle; positive looks up.
    pub pitch: f32,
}

impl RotationState {
    /// Capture the yaw and pitch a transform currently faces.
    #[must_use]
    pub fn from_transform(transform: &CameraTransform) -> Self {
        let (yaw, pitch) = transform.yaw_pitch();
        Self { yaw, pitch }
    }

    /// Add `degrees` (x to yaw, y to pitch) and clamp pitch to
    /// `±clamp_angle`.
    ///
    /// Non-finite deltas, and a clamp angle that is not a positive number,
    /// leave the state unchanged.
    pub fn apply(&mut self, degrees: Vec2, clamp_angle: f32) {
        if !degrees.is_finite() || clamp_angle.is_nan() || clamp_angle <= 0.0
        {
            return;
        }
        self.yaw += degrees.x;
        self.pitch =
            (self.pitch + degrees.y).clamp(-clamp_angle, clamp_angle);
    }

    /// Orientation with these angles and zero roll.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        CameraTransform::from_yaw_pitch(Vec3::ZERO, self.yaw, self.pitch)
            .rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_never_leaves_clamp_range() {
        let mut state = RotationState::default();
        let deltas = [500.0, -20.0, -900.0, 45.0, 79.0, 3.0, -1000.0];
        for dy in deltas {
            state.apply(Vec2::new(1.0, dy), 80.0);
            assert!(state.pitch <= 80.0 && state.pitch >= -80.0);
        }
        assert_eq!(state.pitch, -80.0);
        assert_eq!(state.yaw, 7.0);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut state = RotationState { yaw: 5.0, pitch: 1.0 };
        state.apply(Vec2::new(f32::NAN, 2.0), 80.0);
        state.apply(Vec2::new(0.0, f32::INFINITY), 80.0);
        assert_eq!(state, RotationState { yaw: 5.0, pitch: 1.0 });
    }

    #[test]
    fn unusable_clamp_angle_is_ignored() {
        let mut state = RotationState { yaw: 5.0, pitch: 1.0 };
        for clamp in [-10.0, 0.0, f32::NAN] {
            state.apply(Vec2::new(3.0, 3.0), clamp);
        }
        assert_eq!(state, RotationState { yaw: 5.0, pitch: 1.0 });
    }

    #[test]
    fn orientation_has_no_roll() {
        let state = RotationState {
            yaw: 123.0,
            pitch: -33.0,
        };
        let right = state.orientation() * Vec3::X;
        assert!(right.y.abs() < 1e-5);
    }

    #[test]
    fn captures_transform_angles() {
        let transform =
            CameraTransform::from_yaw_pitch(Vec3::ONE, -60.0, 12.0);
        let state = RotationState::from_transform(&transform);
        assert!((state.yaw + 60.0).abs() < 1e-3);
        assert!((state.pitch - 12.0).abs() < 1e-3);
    }
}
