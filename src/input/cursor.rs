/// Control over the system pointer cursor.
pub trait CursorControl {
    /// Confine the cursor to the window (`true`) or release it.
    fn set_locked(&mut self, locked: bool);
    /// Show or hide the cursor.
    fn set_visible(&mut self, visible: bool);
}

/// Records the cursor state the controller asked for.
///
/// Useful for headless hosts and tests; windowed hosts implement
/// [`CursorControl`] on their window instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// Whether the cursor is locked.
    pub locked: bool,
    /// Whether the cursor is visible.
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            locked: false,
            visible: true,
        }
    }
}

impl CursorControl for CursorState {
    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
