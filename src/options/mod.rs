//! Camera configuration with TOML support.
//!
//! Everything a host can tweak lives here: the shared motion tunables, the
//! fallback constants and behaviour knobs fixed at construction, and the
//! movement key bindings. Options are read from TOML; they are never
//! written back.

mod controller;
mod keybindings;
mod tunables;

use std::path::Path;

pub use controller::ControllerOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tunables::{Fallbacks, Repairs, SharedTunables, TunableSource, Tunables};

use crate::error::FreelookError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[tunables]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Shared motion settings (speeds, sensitivity, clamp angle).
    pub tunables: Tunables,
    /// Construction-time controller behaviour.
    pub controller: ControllerOptions,
    /// Movement key bindings.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FreelookError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FreelookError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[tunables]
move_speed = 4.5
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.tunables.move_speed, 4.5);
        // Everything else should be default
        assert_eq!(opts.tunables.clamp_angle, 80.0);
        assert!(opts.controller.lock_cursor_while_rotating);
        assert_eq!(opts.controller.fallbacks, Fallbacks::DEFAULT);
    }

    #[test]
    fn zeroed_tunables_parse_without_error() {
        // The controller repairs these at runtime, loading must not reject
        // them.
        let toml_str = r"
[tunables]
mouse_sensitivity = 0.0
clamp_angle = 0.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert!(opts.tunables.repairs_needed().mouse_sensitivity);
        assert!(opts.tunables.repairs_needed().clamp_angle);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[tunables\n").unwrap_err();
        assert!(matches!(err, FreelookError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/freelook.toml")).unwrap_err();
        assert!(matches!(err, FreelookError::Io(_)));
    }

    #[test]
    fn every_action_has_a_default_binding() {
        let opts = Options::default();
        for action in MoveAction::ALL {
            assert_eq!(opts.keybindings.keys(action).len(), 2, "{action:?}");
        }
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let toml_str = r#"
[keybindings.bindings]
forward = ["KeyZ"]
backward = ["KeyS"]
left = ["KeyQ"]
right = ["KeyD"]
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.keys(MoveAction::Forward), ["KeyZ"]);
        assert_eq!(opts.keybindings.keys(MoveAction::Left), ["KeyQ"]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("tunables"));
        assert!(props.contains_key("controller"));
        assert!(!props.contains_key("keybindings"));

        let controller = &props["controller"]["properties"];
        assert!(controller.get("lock_cursor_while_rotating").is_some());
        assert!(controller.get("fallbacks").is_none());
        assert!(controller.get("noise_threshold").is_none());
    }
}
