use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position and orientation of the camera in world space.
///
/// Right-handed, Y up: the camera looks down its local `-Z` with `+X` to
/// its right. Angles are degrees; positive yaw turns right and positive
/// pitch looks up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraTransform {
    /// Local forward axis.
    pub const FORWARD: Vec3 = Vec3::NEG_Z;
    /// Local right axis.
    pub const RIGHT: Vec3 = Vec3::X;

    /// Transform at `position` with the given orientation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transform at `position` facing `yaw`/`pitch` degrees, no roll.
    #[must_use]
    pub fn from_yaw_pitch(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut transform = Self::new(position, Quat::IDENTITY);
        transform.set_euler(pitch, yaw, 0.0);
        transform
    }

    /// World-space direction the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Self::FORWARD
    }

    /// World-space direction to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Self::RIGHT
    }

    /// Forward flattened onto the ground plane and normalized.
    ///
    /// Looking (almost) straight up or down leaves nothing to flatten; the
    /// world forward axis is returned instead.
    #[must_use]
    pub fn planar_forward(&self) -> Vec3 {
        let mut forward = self.forward();
        forward.y = 0.0;
        if forward.length_squared() < 1e-4 {
            return Self::FORWARD;
        }
        forward.normalize()
    }

    /// Move by `offset` expressed in the camera's local axes.
    pub fn translate_local(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;
    }

    /// Move by `offset` expressed in world axes.
    pub fn translate_world(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Orient from `pitch`, `yaw` and `roll` in degrees.
    ///
    /// Yaw is applied about world up, then pitch about the camera's right,
    /// then roll about its forward axis.
    pub fn set_euler(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.rotation = Quat::from_euler(
            EulerRot::YXZ,
            -yaw.to_radians(),
            pitch.to_radians(),
            roll.to_radians(),
        );
    }

    /// Current `(yaw, pitch)` in degrees, pitch within `[-90, 90]`.
    #[must_use]
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let (y, x, _) = self.rotation.to_euler(EulerRot::YXZ);
        (-y.to_degrees(), x.to_degrees())
    }

    /// World-to-view matrix for renderers.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
            .inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_looks_down_negative_z() {
        let t = CameraTransform::default();
        assert!(approx(t.forward(), Vec3::NEG_Z));
        assert!(approx(t.right(), Vec3::X));
    }

    #[test]
    fn positive_yaw_turns_right_positive_pitch_looks_up() {
        let t = CameraTransform::from_yaw_pitch(Vec3::ZERO, 90.0, 0.0);
        assert!(approx(t.forward(), Vec3::X));
        assert!(approx(t.right(), Vec3::Z));

        let t = CameraTransform::from_yaw_pitch(Vec3::ZERO, 0.0, 30.0);
        assert!(t.forward().y > 0.0);
    }

    #[test]
    fn yaw_pitch_round_trip() {
        let t = CameraTransform::from_yaw_pitch(Vec3::ZERO, 35.0, -20.0);
        let (yaw, pitch) = t.yaw_pitch();
        assert!((yaw - 35.0).abs() < 1e-3);
        assert!((pitch + 20.0).abs() < 1e-3);
    }

    #[test]
    fn planar_forward_ignores_pitch() {
        let t = CameraTransform::from_yaw_pitch(Vec3::ZERO, 0.0, -45.0);
        assert!(approx(t.planar_forward(), Vec3::NEG_Z));
    }

    #[test]
    fn planar_forward_straight_up_uses_canonical_axis() {
        let t = CameraTransform::new(
            Vec3::ZERO,
            Quat::from_rotation_arc(Vec3::NEG_Z, Vec3::Y),
        );
        assert!(approx(t.forward(), Vec3::Y));

        let planar = t.planar_forward();
        assert!(planar.is_finite());
        assert_eq!(planar, CameraTransform::FORWARD);
    }

    #[test]
    fn local_translation_follows_orientation() {
        let mut t = CameraTransform::from_yaw_pitch(Vec3::ZERO, 90.0, 0.0);
        t.translate_local(CameraTransform::FORWARD * 2.0);
        assert!(approx(t.position, Vec3::new(2.0, 0.0, 0.0)));

        t.translate_world(Vec3::Y);
        assert!(approx(t.position, Vec3::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let t = CameraTransform::from_yaw_pitch(
            Vec3::new(1.0, 2.0, 3.0),
            10.0,
            5.0,
        );
        let view = t.view_matrix();
        assert!(approx(view.transform_point3(t.position), Vec3::ZERO));

        let ahead = view.transform_point3(t.position + t.forward());
        assert!(approx(ahead, Vec3::NEG_Z));
    }
}
