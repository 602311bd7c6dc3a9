//! Free-look camera: transform math, look-angle accumulation, and the
//! per-frame controller that turns input into camera motion.

/// Per-frame camera controller for the desktop and touch schemes.
pub mod controller;
/// Button-held pointer drag tracking.
pub mod drag;
/// Yaw/pitch accumulation with pitch clamping.
pub mod rotation;
/// Camera position and orientation.
pub mod transform;

pub use controller::CameraController;
pub use drag::DragState;
pub use rotation::RotationState;
pub use transform::CameraTransform;
