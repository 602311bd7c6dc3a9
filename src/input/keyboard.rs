use serde::{Deserialize, Serialize};

/// Planar movement directions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// left = ["KeyA", "ArrowLeft"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Along the camera's planar forward axis.
    Forward,
    /// Against the planar forward axis.
    Backward,
    /// Strafe along the camera's local left.
    Left,
    /// Strafe along the camera's local right.
    Right,
}

impl MoveAction {
    /// All actions, in a stable order.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];
}
