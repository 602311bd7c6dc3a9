//! Input handling: platform-agnostic events, the per-frame snapshot the
//! camera polls, touch tracking and cursor control.

/// Cursor lock/visibility control.
pub mod cursor;
/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot and the polling trait.
pub mod frame;
/// Bindable movement actions.
mod keyboard;
/// Touch contacts and UI hit regions.
pub mod touch;

pub use cursor::{CursorControl, CursorState};
pub use event::{InputEvent, MouseButton, TouchPhase};
pub use frame::{FrameInput, InputSource};
pub use keyboard::MoveAction;
pub use touch::{Touch, UiRect};
