use std::sync::{Arc, PoisonError, RwLock};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Runtime-adjustable motion settings shared with other components.
///
/// A settings screen (or anything else) may rewrite these between frames,
/// including to values the camera cannot use. The controller reads a
/// snapshot each frame and repairs it locally with [`Tunables::repaired`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tunables", inline)]
#[serde(default)]
pub struct Tunables {
    /// Keyboard translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Scroll and pinch zoom speed.
    #[schemars(title = "Zoom Speed", range(min = 0.0, max = 500.0), extend("step" = 1.0))]
    pub zoom_speed: f32,
    /// Rotation speed in degrees per pointer unit per second.
    #[schemars(title = "Mouse Sensitivity", range(min = 1.0, max = 1000.0), extend("step" = 5.0))]
    pub mouse_sensitivity: f32,
    /// Maximum pitch above or below the horizon, in degrees.
    #[schemars(title = "Clamp Angle", range(min = 1.0, max = 89.0), extend("step" = 1.0))]
    pub clamp_angle: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            zoom_speed: 50.0,
            mouse_sensitivity: Fallbacks::DEFAULT.mouse_sensitivity,
            clamp_angle: Fallbacks::DEFAULT.clamp_angle,
        }
    }
}

/// Values substituted for unusable sensitivity or clamp settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Fallbacks {
    /// Sensitivity used while the shared value is not positive.
    pub mouse_sensitivity: f32,
    /// Clamp angle used while the shared value is not positive.
    pub clamp_angle: f32,
}

impl Fallbacks {
    /// Built-in fallback constants.
    pub const DEFAULT: Self = Self {
        mouse_sensitivity: 200.0,
        clamp_angle: 80.0,
    };

    /// Replace unusable fallbacks with the built-in constants.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            mouse_sensitivity: if is_usable(self.mouse_sensitivity) {
                self.mouse_sensitivity
            } else {
                Self::DEFAULT.mouse_sensitivity
            },
            clamp_angle: if is_usable(self.clamp_angle) {
                self.clamp_angle
            } else {
                Self::DEFAULT.clamp_angle
            },
        }
    }
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which tunables were unusable in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Repairs {
    /// `mouse_sensitivity` was zero, negative or not finite.
    pub mouse_sensitivity: bool,
    /// `clamp_angle` was zero, negative or not finite.
    pub clamp_angle: bool,
}

impl Repairs {
    /// Whether any value had to be replaced.
    #[must_use]
    pub fn any(self) -> bool {
        self.mouse_sensitivity || self.clamp_angle
    }
}

fn is_usable(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl Tunables {
    /// Report which values would be replaced by [`Tunables::repaired`].
    #[must_use]
    pub fn repairs_needed(&self) -> Repairs {
        Repairs {
            mouse_sensitivity: !is_usable(self.mouse_sensitivity),
            clamp_angle: !is_usable(self.clamp_angle),
        }
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut f32> {
        match field {
            "move_speed" => Some(&mut self.move_speed),
            "zoom_speed" => Some(&mut self.zoom_speed),
            "mouse_sensitivity" => Some(&mut self.mouse_sensitivity),
            "clamp_angle" => Some(&mut self.clamp_angle),
            _ => None,
        }
    }

    /// Copy of these tunables with unusable sensitivity and clamp values
    /// replaced by `fallbacks`. Valid values pass through untouched.
    #[must_use]
    pub fn repaired(mut self, fallbacks: &Fallbacks) -> Self {
        let repairs = self.repairs_needed();
        if repairs.mouse_sensitivity {
            self.mouse_sensitivity = fallbacks.mouse_sensitivity;
        }
        if repairs.clamp_angle {
            self.clamp_angle = fallbacks.clamp_angle;
        }
        self
    }
}

/// Read interface to wherever the tunables live.
pub trait TunableSource {
    /// Current values, possibly invalid.
    fn tunables(&self) -> Tunables;

    /// Write fallbacks into the source for any unusable value.
    ///
    /// Called once when the camera activates. Read-only sources ignore it.
    fn seed_fallbacks(&self, _fallbacks: &Fallbacks) {}
}

impl TunableSource for Tunables {
    fn tunables(&self) -> Tunables {
        *self
    }
}

/// Process-wide tunables that a settings component can rewrite at any time.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct SharedTunables {
    inner: Arc<RwLock<Tunables>>,
}

impl SharedTunables {
    /// Wrap `tunables` for sharing.
    #[must_use]
    pub fn new(tunables: Tunables) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tunables)),
        }
    }

    /// Replace all values.
    pub fn set(&self, tunables: Tunables) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) =
            tunables;
    }

    /// Mutate values in place.
    pub fn update(&self, f: impl FnOnce(&mut Tunables)) {
        f(&mut self.inner.write().unwrap_or_else(PoisonError::into_inner));
    }

    /// Set one field by name from a settings UI message, e.g.
    /// `("mouse_sensitivity", 150.0)`.
    ///
    /// Returns `false` (leaving every value unchanged) for unknown fields
    /// or non-numeric values. Unusable numbers are accepted; the
    /// controller repairs them when it reads them.
    pub fn apply_setting(
        &self,
        field: &str,
        value: &serde_json::Value,
    ) -> bool {
        let Some(number) = value.as_f64() else {
            log::debug!("rejected tunable setting {field}: {value}");
            return false;
        };

        let mut applied = false;
        self.update(|t| {
            if let Some(slot) = t.field_mut(field) {
                *slot = number as f32;
                applied = true;
            }
        });
        if !applied {
            log::debug!("unhandled tunable setting: {field}");
        }
        applied
    }
}

impl TunableSource for SharedTunables {
    fn tunables(&self) -> Tunables {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn seed_fallbacks(&self, fallbacks: &Fallbacks) {
        self.update(|t| {
            let repairs = t.repairs_needed();
            if repairs.any() {
                log::info!(
                    "seeding shared camera tunables with fallbacks \
                     (sensitivity: {}, clamp angle: {})",
                    repairs.mouse_sensitivity,
                    repairs.clamp_angle
                );
                *t = t.repaired(fallbacks);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sensitivity_takes_fallback() {
        let fallbacks = Fallbacks::DEFAULT;
        let broken = Tunables {
            mouse_sensitivity: 0.0,
            ..Tunables::default()
        };
        let once = broken.repaired(&fallbacks);
        assert_eq!(once.mouse_sensitivity, fallbacks.mouse_sensitivity);

        let twice = once.repaired(&fallbacks);
        assert_eq!(twice, once);
    }

    #[test]
    fn repair_leaves_valid_values_alone() {
        let tunables = Tunables {
            move_speed: 3.0,
            zoom_speed: 7.0,
            mouse_sensitivity: 12.0,
            clamp_angle: 45.0,
        };
        assert!(!tunables.repairs_needed().any());
        assert_eq!(tunables.repaired(&Fallbacks::DEFAULT), tunables);
    }

    #[test]
    fn nan_and_negative_are_repaired() {
        let tunables = Tunables {
            mouse_sensitivity: f32::NAN,
            clamp_angle: -10.0,
            ..Tunables::default()
        };
        let repairs = tunables.repairs_needed();
        assert!(repairs.mouse_sensitivity);
        assert!(repairs.clamp_angle);

        let fixed = tunables.repaired(&Fallbacks::DEFAULT);
        assert_eq!(fixed.mouse_sensitivity, 200.0);
        assert_eq!(fixed.clamp_angle, 80.0);
    }

    #[test]
    fn read_only_source_is_not_seeded() {
        let tunables = Tunables {
            clamp_angle: 0.0,
            ..Tunables::default()
        };
        tunables.seed_fallbacks(&Fallbacks::DEFAULT);
        assert_eq!(tunables.tunables().clamp_angle, 0.0);
    }

    #[test]
    fn shared_source_is_seeded_and_shared_across_clones() {
        let shared = SharedTunables::new(Tunables {
            mouse_sensitivity: -1.0,
            ..Tunables::default()
        });
        let settings_side = shared.clone();

        shared.seed_fallbacks(&Fallbacks::DEFAULT);
        assert_eq!(settings_side.tunables().mouse_sensitivity, 200.0);

        settings_side.update(|t| t.move_speed = 42.0);
        assert_eq!(shared.tunables().move_speed, 42.0);
    }

    #[test]
    fn settings_messages_update_single_fields() {
        let shared = SharedTunables::default();
        assert!(shared.apply_setting("zoom_speed", &serde_json::json!(12.5)));
        assert!(shared.apply_setting("clamp_angle", &serde_json::json!(0)));
        assert_eq!(shared.tunables().zoom_speed, 12.5);
        assert_eq!(shared.tunables().clamp_angle, 0.0);
        assert_eq!(shared.tunables().move_speed, 10.0);

        assert!(!shared.apply_setting("fov", &serde_json::json!(60.0)));
        assert!(!shared.apply_setting("move_speed", &serde_json::json!("x")));
        assert_eq!(shared.tunables().move_speed, 10.0);
    }

    #[test]
    fn settings_still_apply_while_another_field_is_nan() {
        let shared = SharedTunables::new(Tunables {
            clamp_angle: f32::NAN,
            ..Tunables::default()
        });
        assert!(shared.apply_setting("move_speed", &serde_json::json!(3.0)));
        assert_eq!(shared.tunables().move_speed, 3.0);
        assert!(shared.tunables().clamp_angle.is_nan());

        assert!(shared.apply_setting("clamp_angle", &serde_json::json!(60)));
        assert_eq!(shared.tunables().clamp_angle, 60.0);
    }

    #[test]
    fn concurrent_settings_edits_are_not_lost() {
        let shared = SharedTunables::default();
        std::thread::scope(|scope| {
            for (field, base) in [("move_speed", 0.0), ("zoom_speed", 1000.0)] {
                let settings = shared.clone();
                let _ = scope.spawn(move || {
                    for step in 1..=500 {
                        let value = base + f64::from(step);
                        assert!(settings
                            .apply_setting(field, &serde_json::json!(value)));
                    }
                });
            }
            let _ = scope.spawn(|| {
                for _ in 0..500 {
                    shared.update(|t| t.mouse_sensitivity += 1.0);
                }
            });
        });

        let tunables = shared.tunables();
        assert_eq!(tunables.move_speed, 500.0);
        assert_eq!(tunables.zoom_speed, 1500.0);
        assert_eq!(tunables.mouse_sensitivity, 700.0);
    }

    #[test]
    fn unusable_fallbacks_are_sanitized() {
        let fallbacks = Fallbacks {
            mouse_sensitivity: 0.0,
            clamp_angle: 30.0,
        }
        .sanitized();
        assert_eq!(fallbacks.mouse_sensitivity, 200.0);
        assert_eq!(fallbacks.clamp_angle, 30.0);
    }
}
