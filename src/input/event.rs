/// Platform-agnostic input events.
///
/// These are fed into a [`FrameInput`](super::FrameInput), which the camera
/// controller polls once per frame.
///
/// # Example
///
/// ```
/// use freelook::input::{FrameInput, InputEvent, InputSource};
///
/// let mut input = FrameInput::new();
/// input.handle_event(&InputEvent::Key { key: "KeyW".into(), pressed: true });
/// assert!(input.key_held("KeyW"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position (y grows downward).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key string in winit `KeyCode` debug format (`"KeyW"`,
        /// `"ArrowUp"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A finger touched, moved on, or left the screen.
    Touch {
        /// Identifier stable for the lifetime of one contact.
        id: u64,
        /// What happened to the contact.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The window lost focus; every held key and button is released.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra).
    Other,
}

impl MouseButton {
    /// Buttons that rotate the camera while held and dragged.
    pub const ROTATE: [Self; 2] = [Self::Right, Self::Middle];
}

/// Lifecycle of a single touch contact within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The contact started this frame.
    Began,
    /// The contact moved this frame.
    Moved,
    /// The contact is down but did not move this frame.
    Stationary,
    /// The contact lifted this frame.
    Ended,
    /// The system cancelled the contact this frame.
    Canceled,
}

impl TouchPhase {
    /// Whether the contact is gone after this frame.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Canceled)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Began,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Canceled,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it carries camera input.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::Touch(touch) => Some(Self::Touch {
                id: touch.id,
                phase: touch.phase.into(),
                x: touch.location.x as f32,
                y: touch.location.y as f32,
            }),
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}
