use glam::Vec2;

use super::drag::DragState;
use super::rotation::RotationState;
use super::transform::CameraTransform;
use crate::input::{
    CursorControl, InputSource, MouseButton, MoveAction, Touch, TouchPhase,
};
use crate::options::{
    ControllerOptions, KeybindingOptions, Options, Repairs, TunableSource,
    Tunables,
};
use crate::scheme::{ControlScheme, SchemeProvider};
use crate::time::FrameTime;

/// Everything a scheme handler reads during one frame.
struct Frame<'a, I> {
    tunables: Tunables,
    scheme: ControlScheme,
    input: &'a I,
    time: FrameTime,
}

/// Free-look camera driven by keyboard, mouse drag or touch.
///
/// Call [`CameraController::update`] once per rendered frame. Under the
/// desktop scheme WASD/arrows move along the ground plane, a right or
/// middle drag looks around and the wheel zooms; under the touch schemes
/// one finger looks around and two fingers pinch-zoom.
pub struct CameraController {
    transform: CameraTransform,
    rotation: RotationState,
    drag: DragState,
    /// Whether the current single touch started outside interactive UI.
    touch_may_rotate: bool,
    options: ControllerOptions,
    keybindings: KeybindingOptions,
    last_scheme: Option<ControlScheme>,
    last_repairs: Repairs,
}

impl CameraController {
    /// Controller for a camera starting at `transform`.
    #[must_use]
    pub fn new(transform: CameraTransform, options: ControllerOptions) -> Self {
        let fallbacks = options.fallbacks.sanitized();
        if fallbacks != options.fallbacks {
            log::warn!(
                "unusable camera fallbacks {:?}, using {:?}",
                options.fallbacks,
                fallbacks
            );
        }

        Self {
            transform,
            rotation: RotationState::from_transform(&transform),
            drag: DragState::default(),
            touch_may_rotate: false,
            options: ControllerOptions {
                fallbacks,
                ..options
            },
            keybindings: KeybindingOptions::default(),
            last_scheme: None,
            last_repairs: Repairs::default(),
        }
    }

    /// Controller configured from loaded [`Options`].
    #[must_use]
    pub fn from_options(transform: CameraTransform, options: &Options) -> Self {
        Self::new(transform, options.controller.clone())
            .with_keybindings(options.keybindings.clone())
    }

    /// Replace the movement key bindings.
    #[must_use]
    pub fn with_keybindings(mut self, keybindings: KeybindingOptions) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Current camera transform.
    #[must_use]
    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// Accumulated yaw and pitch.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Whether a mouse drag is rotating the camera.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Move the camera elsewhere; yaw and pitch restart from its new
    /// orientation.
    pub fn set_transform(&mut self, transform: CameraTransform) {
        self.transform = transform;
        self.rotation = RotationState::from_transform(&transform);
    }

    /// Start controlling the camera.
    ///
    /// Captures the current orientation and writes the fallbacks into the
    /// tunable source for any unusable sensitivity or clamp value.
    pub fn activate(&mut self, tunables: &impl TunableSource) {
        self.rotation = RotationState::from_transform(&self.transform);
        self.drag = DragState::default();
        self.touch_may_rotate = false;
        tunables.seed_fallbacks(&self.options.fallbacks);
        log::debug!(
            "camera activated at yaw {:.1}, pitch {:.1}",
            self.rotation.yaw,
            self.rotation.pitch
        );
    }

    /// Run one frame of input. Returns the scheme that handled it, or
    /// `None` if the camera stayed static.
    pub fn update(
        &mut self,
        tunables: &impl TunableSource,
        schemes: &impl SchemeProvider,
        input: &impl InputSource,
        cursor: &mut impl CursorControl,
        time: FrameTime,
    ) -> Option<ControlScheme> {
        let tunables = self.repaired_tunables(tunables);

        let scheme = schemes.active_scheme();
        if scheme != self.last_scheme {
            log::debug!(
                "camera control scheme {:?} -> {:?}",
                self.last_scheme,
                scheme
            );
            self.last_scheme = scheme;
        }

        let Some(scheme) = scheme else {
            self.end_drag(cursor);
            return None;
        };

        let frame = Frame {
            tunables,
            scheme,
            input,
            time,
        };
        if scheme.is_touch() {
            self.mobile(&frame, cursor);
        } else {
            self.desktop(&frame, cursor);
        }
        Some(scheme)
    }

    /// Snapshot the tunables with unusable values replaced, logging when
    /// the set of replaced values changes.
    fn repaired_tunables(&mut self, source: &impl TunableSource) -> Tunables {
        let raw = source.tunables();
        let repairs = raw.repairs_needed();

        if repairs != self.last_repairs {
            if repairs.any() {
                log::warn!(
                    "camera tunables unusable (sensitivity {}, clamp angle \
                     {}); using fallbacks",
                    raw.mouse_sensitivity,
                    raw.clamp_angle
                );
            } else {
                log::info!("camera tunables valid again");
            }
            self.last_repairs = repairs;
        }

        raw.repaired(&self.options.fallbacks)
    }

    fn desktop<I: InputSource>(
        &mut self,
        frame: &Frame<'_, I>,
        cursor: &mut impl CursorControl,
    ) {
        let planar_forward = self.transform.planar_forward();
        let step = frame.tunables.move_speed * frame.time.delta;

        if self.action_held(MoveAction::Left, frame.input) {
            self.transform.translate_local(CameraTransform::RIGHT * -step);
        }
        if self.action_held(MoveAction::Right, frame.input) {
            self.transform.translate_local(CameraTransform::RIGHT * step);
        }
        if self.action_held(MoveAction::Forward, frame.input) {
            self.transform.translate_world(planar_forward * step);
        }
        if self.action_held(MoveAction::Backward, frame.input) {
            self.transform.translate_world(-planar_forward * step);
        }

        if rotate_button_held(frame.input) {
            self.drag_rotate(frame, cursor);
        } else {
            self.end_drag(cursor);
        }

        let zoom = frame.input.scroll()
            * frame.time.delta
            * frame.tunables.zoom_speed;
        self.transform.translate_local(CameraTransform::FORWARD * zoom);
    }

    fn mobile<I: InputSource>(
        &mut self,
        frame: &Frame<'_, I>,
        cursor: &mut impl CursorControl,
    ) {
        // Mouse drag still works so touch builds can be tried on a desktop.
        if frame.input.pointer_present() && rotate_button_held(frame.input) {
            self.drag_rotate(frame, cursor);
            return;
        }
        self.end_drag(cursor);

        match frame.input.touches() {
            [touch] => self.touch_rotate(touch, frame),
            [first, second] => self.pinch_zoom(first, second, frame),
            _ => {}
        }
    }

    fn action_held(
        &self,
        action: MoveAction,
        input: &impl InputSource,
    ) -> bool {
        self.keybindings
            .keys(action)
            .iter()
            .any(|key| input.key_held(key))
    }

    fn drag_rotate<I: InputSource>(
        &mut self,
        frame: &Frame<'_, I>,
        cursor: &mut impl CursorControl,
    ) {
        // Tracking from an unknown position would turn the first real
        // report into one huge jump.
        if !frame.input.pointer_present() {
            return;
        }
        if !self.drag.is_dragging() && self.options.lock_cursor_while_rotating
        {
            cursor.set_locked(true);
            cursor.set_visible(false);
        }

        let Some(delta) = self.drag.track(frame.input.pointer_position())
        else {
            return;
        };
        if delta.length_squared() > self.options.noise_threshold {
            // Look speed must not depend on game time scale or pause.
            self.rotate(
                Vec2::new(delta.x, -delta.y),
                frame.time.unscaled_delta,
                frame,
            );
        }
    }

    fn end_drag(&mut self, cursor: &mut impl CursorControl) {
        if self.drag.release() && self.options.lock_cursor_while_rotating {
            cursor.set_locked(false);
            cursor.set_visible(true);
        }
    }

    fn touch_rotate<I: InputSource>(
        &mut self,
        touch: &Touch,
        frame: &Frame<'_, I>,
    ) {
        if touch.phase == TouchPhase::Began {
            self.touch_may_rotate = !frame.input.touch_over_ui(touch);
        }
        if !self.touch_may_rotate {
            return;
        }
        if touch.delta.length_squared() > self.options.noise_threshold {
            self.rotate(
                Vec2::new(touch.delta.x, -touch.delta.y),
                frame.time.delta,
                frame,
            );
        }
    }

    fn pinch_zoom<I: InputSource>(
        &mut self,
        first: &Touch,
        second: &Touch,
        frame: &Frame<'_, I>,
    ) {
        let previous =
            first.previous_position().distance(second.previous_position());
        let current = first.position.distance(second.position);

        // Fingers spreading apart move the camera forward.
        let zoom = (current - previous)
            * self.options.pinch_zoom_scale
            * frame.tunables.zoom_speed;
        self.transform.translate_local(CameraTransform::FORWARD * zoom);
    }

    fn rotate<I: InputSource>(
        &mut self,
        delta: Vec2,
        dt: f32,
        frame: &Frame<'_, I>,
    ) {
        let multiplier = if frame.scheme.is_touch() {
            self.options.mobile_sensitivity_scale
        } else {
            1.0
        };
        let degrees =
            delta * frame.tunables.mouse_sensitivity * multiplier * dt;

        self.rotation.apply(degrees, frame.tunables.clamp_angle);
        self.transform.rotation = self.rotation.orientation();
    }
}

fn rotate_button_held(input: &impl InputSource) -> bool {
    MouseButton::ROTATE
        .into_iter()
        .any(|button| input.button_held(button))
}
