// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (default clippy thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-look camera controller for interactive 3D scenes.
//!
//! Freelook moves and orients a camera from user input under one of two
//! control schemes: desktop (WASD/arrow movement on the ground plane, drag
//! to look, scroll to zoom) and touch (one finger to look, two to pinch
//! zoom). Pitch is always clamped; bad runtime settings fall back to safe
//! constants instead of freezing the camera.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - call `update` once per frame
//! - [`input::FrameInput`] - collects platform events into the per-frame
//!   snapshot the controller polls
//! - [`scheme::SceneSchemeProvider`] - picks desktop or touch controls from
//!   the mobile control entities in a scene
//! - [`options::Options`] - TOML configuration (tunables, fallbacks, key
//!   bindings)
//!
//! # Frame loop
//!
//! ```
//! use freelook::camera::{CameraController, CameraTransform};
//! use freelook::input::{CursorState, FrameInput, InputEvent};
//! use freelook::options::{Options, SharedTunables};
//! use freelook::scheme::ControlScheme;
//! use freelook::time::FrameTime;
//!
//! let options = Options::default();
//! let tunables = SharedTunables::new(options.tunables);
//! let mut camera =
//!     CameraController::from_options(CameraTransform::default(), &options);
//! camera.activate(&tunables);
//!
//! let mut input = FrameInput::new();
//! let mut cursor = CursorState::default();
//! input.handle_event(&InputEvent::Key { key: "KeyW".into(), pressed: true });
//!
//! let _ = camera.update(
//!     &tunables,
//!     &ControlScheme::Desktop,
//!     &input,
//!     &mut cursor,
//!     FrameTime::fixed(0.1),
//! );
//! input.end_frame();
//! assert!(camera.transform().position.z < 0.0);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scheme;
pub mod time;

pub use error::FreelookError;
