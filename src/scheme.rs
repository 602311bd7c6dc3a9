//! Control-scheme selection.
//!
//! The controller asks a [`SchemeProvider`] once per frame which input
//! scheme is active. Hosts either inject a fixed [`ControlScheme`] or let
//! [`SceneSchemeProvider`] probe the scene for the mobile control entities,
//! whose presence switches the camera to touch input.

use rustc_hash::FxHashMap;

/// Scene entity carrying single-player touch controls.
pub const MOBILE_CONTROLS: &str = "Mobile";
/// Scene entity carrying multiplayer touch controls.
pub const MOBILE_MULTIPLAYER_CONTROLS: &str = "Mobile multiplayer";

/// Input handling mode for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlScheme {
    /// Keyboard movement, mouse-drag rotation, scroll zoom.
    Desktop,
    /// Touch rotation and pinch zoom.
    Mobile,
    /// Touch controls owned by the multiplayer UI; handled like
    /// [`ControlScheme::Mobile`].
    MobileMultiplayer,
}

impl ControlScheme {
    /// Whether this scheme reads touches (and scales rotation down).
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Mobile | Self::MobileMultiplayer)
    }
}

/// Decides which scheme drives the camera this frame.
///
/// `None` leaves the camera static.
pub trait SchemeProvider {
    /// Scheme for the current frame.
    fn active_scheme(&self) -> Option<ControlScheme>;
}

impl SchemeProvider for ControlScheme {
    fn active_scheme(&self) -> Option<ControlScheme> {
        Some(*self)
    }
}

impl SchemeProvider for Option<ControlScheme> {
    fn active_scheme(&self) -> Option<ControlScheme> {
        *self
    }
}

/// Lookup of named scene entities.
pub trait SceneQuery {
    /// `None` if no entity called `name` exists, otherwise whether its
    /// camera controls are enabled.
    fn controls_enabled(&self, name: &str) -> Option<bool>;
}

impl<S: SceneQuery + ?Sized> SceneQuery for &S {
    fn controls_enabled(&self, name: &str) -> Option<bool> {
        (**self).controls_enabled(name)
    }
}

/// Map-backed [`SceneQuery`] for hosts without a scene graph of their own.
#[derive(Debug, Clone, Default)]
pub struct SceneIndex {
    entities: FxHashMap<String, bool>,
}

impl SceneIndex {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entity and its controls-enabled flag.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        controls_enabled: bool,
    ) {
        let _ = self.entities.insert(name.into(), controls_enabled);
    }

    /// Remove an entity. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entities.remove(name).is_some()
    }
}

impl SceneQuery for SceneIndex {
    fn controls_enabled(&self, name: &str) -> Option<bool> {
        self.entities.get(name).copied()
    }
}

/// Picks the scheme from the mobile control entities present in a scene.
///
/// - neither entity present → [`ControlScheme::Desktop`]
/// - [`MOBILE_CONTROLS`] present with controls enabled →
///   [`ControlScheme::Mobile`]
/// - [`MOBILE_MULTIPLAYER_CONTROLS`] present with controls enabled, and the
///   multiplayer variant turned on → [`ControlScheme::MobileMultiplayer`]
/// - anything else → no scheme
#[derive(Debug, Clone)]
pub struct SceneSchemeProvider<S> {
    scene: S,
    multiplayer: bool,
}

impl<S: SceneQuery> SceneSchemeProvider<S> {
    /// Probe `scene`, honouring only the single-player controls.
    #[must_use]
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            multiplayer: false,
        }
    }

    /// Also honour the multiplayer controls entity.
    #[must_use]
    pub fn with_multiplayer(mut self, enabled: bool) -> Self {
        self.multiplayer = enabled;
        self
    }

    /// The probed scene.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the probed scene.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

impl<S: SceneQuery> SchemeProvider for SceneSchemeProvider<S> {
    fn active_scheme(&self) -> Option<ControlScheme> {
        let single = self.scene.controls_enabled(MOBILE_CONTROLS);
        let multi = self.scene.controls_enabled(MOBILE_MULTIPLAYER_CONTROLS);

        match (single, multi) {
            (None, None) => Some(ControlScheme::Desktop),
            (Some(true), _) => Some(ControlScheme::Mobile),
            (_, Some(true)) if self.multiplayer => {
                Some(ControlScheme::MobileMultiplayer)
            }
            _ => None,
        }
    }
}
