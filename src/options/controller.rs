use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Fallbacks;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controller", inline)]
#[serde(default)]
/// Behaviour fixed when the controller is constructed.
pub struct ControllerOptions {
    /// Substitutes for unusable shared sensitivity/clamp values.
    #[schemars(skip)]
    pub fallbacks: Fallbacks,
    /// Lock and hide the cursor while a drag rotates the camera.
    #[schemars(title = "Lock Cursor While Rotating")]
    pub lock_cursor_while_rotating: bool,
    /// Rotation multiplier applied under the touch schemes.
    #[schemars(title = "Touch Sensitivity Scale", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub mobile_sensitivity_scale: f32,
    /// Translation per pixel of pinch distance change, before zoom speed.
    #[schemars(title = "Pinch Zoom Scale", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub pinch_zoom_scale: f32,
    /// Squared pointer/touch displacement below which motion is ignored.
    #[schemars(skip)]
    pub noise_threshold: f32,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            fallbacks: Fallbacks::DEFAULT,
            lock_cursor_while_rotating: true,
            mobile_sensitivity_scale: 0.02,
            pinch_zoom_scale: 0.001,
            noise_threshold: 0.0001,
        }
    }
}
