//! Per-frame input snapshot built from [`InputEvent`]s.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton, TouchPhase};
use super::touch::{Touch, UiRect};

/// Polling interface the camera controller reads each frame.
///
/// Engines with their own input system implement this directly; everyone
/// else feeds events into [`FrameInput`].
pub trait InputSource {
    /// Whether the key (winit `KeyCode` debug name) is held.
    fn key_held(&self, key: &str) -> bool;
    /// Whether a pointing device is available.
    fn pointer_present(&self) -> bool;
    /// Pointer position in physical pixels (y grows downward). Only
    /// meaningful while [`InputSource::pointer_present`] holds.
    fn pointer_position(&self) -> Vec2;
    /// Whether `button` is held.
    fn button_held(&self, button: MouseButton) -> bool;
    /// Scroll accumulated this frame (positive = zoom in).
    fn scroll(&self) -> f32;
    /// Active touches, in order of first contact.
    fn touches(&self) -> &[Touch];
    /// Whether `touch` is over an interactive UI element.
    fn touch_over_ui(&self, touch: &Touch) -> bool;
}

/// Accumulates platform events between frames.
///
/// Feed every event through [`FrameInput::handle_event`], let the camera
/// read it, then call [`FrameInput::end_frame`] so per-frame values (scroll,
/// touch deltas and phases) start fresh.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    keys: FxHashSet<String>,
    buttons: FxHashSet<MouseButton>,
    /// Last known pointer position; `None` until a pointer reports in.
    pointer: Option<Vec2>,
    scroll: f32,
    touches: Vec<Touch>,
    ui_regions: Vec<UiRect>,
}

impl FrameInput {
    /// Empty snapshot: nothing held, no pointer, no touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the screen regions occupied by interactive UI.
    pub fn set_ui_regions(
        &mut self,
        regions: impl IntoIterator<Item = UiRect>,
    ) {
        self.ui_regions.clear();
        self.ui_regions.extend(regions);
    }

    /// Fold one event into the snapshot.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Some(Vec2::new(*x, *y));
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    let _ = self.buttons.insert(*button);
                } else {
                    let _ = self.buttons.remove(button);
                }
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Key { key, pressed } => {
                if *pressed {
                    let _ = self.keys.insert(key.clone());
                } else {
                    let _ = self.keys.remove(key);
                }
            }
            InputEvent::Touch { id, phase, x, y } => {
                self.handle_touch(*id, *phase, Vec2::new(*x, *y));
            }
            InputEvent::FocusLost => {
                self.keys.clear();
                self.buttons.clear();
            }
        }
    }

    fn handle_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        let existing = self.touches.iter().position(|t| t.id == id);

        match (phase, existing) {
            (TouchPhase::Began, Some(index)) => {
                self.touches[index] = Touch::began(id, position);
            }
            (TouchPhase::Began, None) => {
                self.touches.push(Touch::began(id, position));
            }
            (_, Some(index)) => {
                let touch = &mut self.touches[index];
                touch.delta += position - touch.position;
                touch.position = position;
                // A contact that began this frame reports Began until the
                // frame ends, so the began-frame decision is not skipped.
                if phase.is_finished() || touch.phase != TouchPhase::Began {
                    touch.phase = phase;
                }
            }
            // Contact whose start we never saw.
            (_, None) => {
                if !phase.is_finished() {
                    self.touches.push(Touch {
                        phase: TouchPhase::Moved,
                        ..Touch::began(id, position)
                    });
                }
            }
        }
    }

    /// Close the frame: drop lifted touches, mark the rest stationary, and
    /// clear scroll.
    pub fn end_frame(&mut self) {
        self.scroll = 0.0;
        self.touches.retain(|t| !t.phase.is_finished());
        for touch in &mut self.touches {
            touch.phase = TouchPhase::Stationary;
            touch.delta = Vec2::ZERO;
        }
    }
}

impl InputSource for FrameInput {
    fn key_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn pointer_present(&self) -> bool {
        self.pointer.is_some()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer.unwrap_or(Vec2::ZERO)
    }

    fn button_held(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn scroll(&self) -> f32 {
        self.scroll
    }

    fn touches(&self) -> &[Touch] {
        &self.touches
    }

    fn touch_over_ui(&self, touch: &Touch) -> bool {
        self.ui_regions.iter().any(|r| r.contains(touch.position))
    }
}
