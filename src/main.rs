//! Interactive viewer binary for the freelook camera controller.

use std::{path::Path, sync::Arc};

use freelook::{
    camera::{CameraController, CameraTransform},
    input::{CursorControl, FrameInput, InputEvent},
    options::{Options, SharedTunables, TunableSource},
    scheme::{SceneIndex, SceneSchemeProvider, MOBILE_CONTROLS},
    time::FrameClock,
    FreelookError,
};
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

/// Applies cursor requests from the controller to the window.
struct WindowCursor<'a>(&'a Window);

impl CursorControl for WindowCursor<'_> {
    fn set_locked(&mut self, locked: bool) {
        let result = if locked {
            // Confined keeps CursorMoved events flowing, which drag
            // tracking relies on.
            self.0
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| self.0.set_cursor_grab(CursorGrabMode::Locked))
        } else {
            self.0.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            log::warn!("cursor grab failed: {e}");
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.set_cursor_visible(visible);
    }
}

struct FreelookApp {
    window: Option<Arc<Window>>,
    camera: CameraController,
    input: FrameInput,
    clock: FrameClock,
    tunables: SharedTunables,
    schemes: SceneSchemeProvider<SceneIndex>,
    mobile_enabled: Option<bool>,
    error: Option<FreelookError>,
}

impl FreelookApp {
    fn new(options: &Options) -> Self {
        let start = CameraTransform::from_yaw_pitch(
            Vec3::new(0.0, 2.0, 10.0),
            0.0,
            -10.0,
        );
        let tunables = SharedTunables::new(options.tunables);
        let mut camera = CameraController::from_options(start, options);
        camera.activate(&tunables);

        Self {
            window: None,
            camera,
            input: FrameInput::new(),
            clock: FrameClock::new(),
            tunables,
            schemes: SceneSchemeProvider::new(SceneIndex::new()),
            mobile_enabled: None,
            error: None,
        }
    }

    /// Cycle the "Mobile" entity: absent → enabled → disabled → absent.
    fn cycle_mobile_controls(&mut self) {
        self.mobile_enabled = match self.mobile_enabled {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
        let scene = self.schemes.scene_mut();
        match self.mobile_enabled {
            Some(enabled) => scene.insert(MOBILE_CONTROLS, enabled),
            None => {
                let _ = scene.remove(MOBILE_CONTROLS);
            }
        }
        log::info!("mobile controls entity: {:?}", self.mobile_enabled);
    }

    fn nudge_sensitivity(&self, by: f32) {
        let value = self.tunables.tunables().mouse_sensitivity + by;
        if self
            .tunables
            .apply_setting("mouse_sensitivity", &serde_json::json!(value))
        {
            log::info!("mouse sensitivity set to {value}");
        }
    }

    fn handle_demo_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::KeyM => self.cycle_mobile_controls(),
            KeyCode::KeyP => {
                let paused = !self.clock.paused();
                self.clock.set_paused(paused);
                log::info!("game time paused: {paused}");
            }
            KeyCode::BracketRight => self.nudge_sensitivity(25.0),
            KeyCode::BracketLeft => self.nudge_sensitivity(-25.0),
            KeyCode::Digit0 => {
                // Zero is unusable; the controller falls back until fixed.
                self.tunables.update(|t| t.mouse_sensitivity = 0.0);
            }
            _ => {}
        }
    }

    fn redraw(&mut self, window: &Window) {
        let time = self.clock.tick();
        let scheme = self.camera.update(
            &self.tunables,
            &self.schemes,
            &self.input,
            &mut WindowCursor(window),
            time,
        );
        self.input.end_frame();

        let position = self.camera.transform().position;
        let rotation = self.camera.rotation();
        window.set_title(&format!(
            "Freelook [{scheme:?}] pos ({:.1}, {:.1}, {:.1}) yaw {:.0} \
             pitch {:.0}",
            position.x, position.y, position.z, rotation.yaw, rotation.pitch
        ));
        window.request_redraw();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: FreelookError) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for FreelookApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("Freelook")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.fail(event_loop, FreelookError::Viewer(e.to_string()));
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = InputEvent::from_window_event(&event) {
            self.input.handle_event(&input);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. }
                if event.state.is_pressed() && !event.repeat =>
            {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_demo_key(code);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(window) = self.window.clone() {
                    self.redraw(&window);
                }
            }

            _ => (),
        }
    }
}

fn run() -> Result<(), FreelookError> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };
    log::info!(
        "WASD/arrows move, right or middle drag looks, scroll zooms; \
         M cycles mobile controls, P pauses, [ ] adjust sensitivity"
    );

    let mut app = FreelookApp::new(&options);
    let event_loop =
        EventLoop::new().map_err(|e| FreelookError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run_app(&mut app)
        .map_err(|e| FreelookError::Viewer(e.to_string()))?;

    app.error.map_or(Ok(()), Err)
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
