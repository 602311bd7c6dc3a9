use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::MoveAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings for planar movement.
///
/// Each action accepts any of several keys, so WASD and the arrow keys can
/// drive the same motion:
/// ```toml
/// [keybindings.bindings]
/// forward = ["KeyW", "ArrowUp"]
/// ```
pub struct KeybindingOptions {
    /// Maps action → key strings (winit `KeyCode` debug names).
    pub bindings: FxHashMap<MoveAction, Vec<String>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings: FxHashMap<_, _> = [
            (MoveAction::Forward, ["KeyW", "ArrowUp"]),
            (MoveAction::Backward, ["KeyS", "ArrowDown"]),
            (MoveAction::Left, ["KeyA", "ArrowLeft"]),
            (MoveAction::Right, ["KeyD", "ArrowRight"]),
        ]
        .into_iter()
        .map(|(action, keys)| {
            let keys = keys.into_iter().map(str::to_owned).collect::<Vec<_>>();
            (action, keys)
        })
        .collect();

        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Keys bound to `action`.
    #[must_use]
    pub fn keys(&self, action: MoveAction) -> &[String] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }
}
