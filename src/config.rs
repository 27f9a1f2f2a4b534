//=========================================================================
// Tour Configuration
//
// Tunables for the observe controller: ambient emitter orbit, audio
// levels, status messages and overlay presentation.
//
// Architecture:
// ```text
//     TourConfigBuilder  ──build()──>  TourConfig  ──>  ObserveMode::new()
//         │
//         ├─ with_emitter_orbit()
//         ├─ with_audio_levels()
//         ├─ with_messages()
//         └─ with_audio_queue_capacity()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{UVec2, Vec3, Vec4};

//=== Internal Dependencies ===============================================

use crate::core::tour::Notice;
use crate::error::{TourError, TourResult};

//=== Messages ============================================================

/// Status-line strings shown for each [`Notice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub help: String,
    pub illegal_input: String,
    pub dead_end: String,
    pub victory: String,
}

impl Messages {
    /// Returns the text for a notice.
    pub fn text(&self, notice: Notice) -> &str {
        match notice {
            Notice::Help => &self.help,
            Notice::IllegalInput => &self.illegal_input,
            Notice::DeadEnd => &self.dead_end,
            Notice::Victory => &self.victory,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            help: "--- SWITCH CAMERAS WITH LEFT/RIGHT/UP/DOWN ---".to_owned(),
            illegal_input: "--- Illegal Input! ---".to_owned(),
            dead_end: "--- Dead End! You can Press DOWN to restart ---".to_owned(),
            victory: "--- congratulation! You get out of this place!! ---".to_owned(),
        }
    }
}

//=== EmitterConfig =======================================================

/// Orbit and playback settings for the ambient loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterConfig {
    /// World-space center of the orbit.
    pub center: Vec3,
    /// Orbit radius in world units.
    pub radius: f32,
    /// Playback volume of the loop.
    pub volume: f32,
    /// Distance at which the loop becomes inaudible.
    pub max_distance: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            center: Vec3::new(10.0, 4.0, 1.0),
            radius: 10.0,
            volume: 1.0,
            max_distance: 10.0,
        }
    }
}

//=== OverlayConfig =======================================================

/// Presentation of the status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    /// Virtual pixel size of the overlay view.
    pub view_size: UVec2,
    /// Text scale passed to the sprite primitive.
    pub scale: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            view_size: UVec2::new(320, 200),
            scale: 1.0,
        }
    }
}

//=== TourConfig ==========================================================

/// Complete controller configuration.
///
/// Fields are public so hosts can tweak a default value in place; values
/// are checked again by [`TourConfig::validate`] when the controller is
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct TourConfig {
    pub emitter: EmitterConfig,
    pub messages: Messages,
    pub overlay: OverlayConfig,
    /// Background color cleared before the scene is drawn.
    pub clear_color: Vec4,
    /// Capacity of the command queue between the controller and the mixer.
    pub audio_queue_capacity: usize,
}

impl TourConfig {
    /// Starts a builder populated with defaults.
    pub fn builder() -> TourConfigBuilder {
        TourConfigBuilder::new()
    }

    /// Checks values that a builder would have rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> TourResult<()> {
        let emitter = &self.emitter;
        if !emitter.center.is_finite() {
            return Err(invalid("emitter center must be finite"));
        }
        if !(emitter.radius.is_finite() && emitter.radius >= 0.0) {
            return Err(invalid("emitter radius must be finite and non-negative"));
        }
        if !(emitter.volume.is_finite() && emitter.volume >= 0.0) {
            return Err(invalid("emitter volume must be finite and non-negative"));
        }
        if !(emitter.max_distance.is_finite() && emitter.max_distance > 0.0) {
            return Err(invalid("emitter max distance must be positive"));
        }
        let messages = &self.messages;
        for (name, text) in [
            ("help", &messages.help),
            ("illegal input", &messages.illegal_input),
            ("dead end", &messages.dead_end),
            ("victory", &messages.victory),
        ] {
            if text.is_empty() {
                return Err(invalid(&format!("{} message must not be empty", name)));
            }
        }
        if self.overlay.view_size.x == 0 || self.overlay.view_size.y == 0 {
            return Err(invalid("overlay view size must be non-zero"));
        }
        if self.audio_queue_capacity == 0 {
            return Err(invalid("audio queue capacity must be positive"));
        }
        Ok(())
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            emitter: EmitterConfig::default(),
            messages: Messages::default(),
            overlay: OverlayConfig::default(),
            clear_color: Vec4::new(0.85, 0.85, 0.90, 0.0),
            audio_queue_capacity: 64,
        }
    }
}

fn invalid(reason: &str) -> TourError {
    TourError::InvalidConfig(reason.to_owned())
}

//=== TourConfigBuilder ===================================================

/// Fluent builder for [`TourConfig`].
///
/// # Default Values
///
/// - **Emitter orbit**: center (10, 4, 1), radius 10
/// - **Audio levels**: volume 1.0, max distance 10
/// - **Overlay**: 320x200 virtual pixels, scale 1.0
/// - **Audio queue**: 64 commands
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use observe_tour::config::TourConfig;
///
/// let config = TourConfig::builder()
///     .with_emitter_orbit(Vec3::ZERO, 4.0)
///     .with_audio_levels(0.5, 20.0)
///     .build();
///
/// assert_eq!(config.emitter.radius, 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct TourConfigBuilder {
    config: TourConfig,
}

impl TourConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: TourConfig::default(),
        }
    }

    /// Sets the center and radius of the ambient emitter's orbit.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or not finite.
    pub fn with_emitter_orbit(mut self, center: Vec3, radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius >= 0.0,
            "Emitter radius must be non-negative, got {}",
            radius
        );
        self.config.emitter.center = center;
        self.config.emitter.radius = radius;
        self
    }

    /// Sets the loop volume and its audible range.
    ///
    /// # Panics
    ///
    /// Panics if `volume` is negative or `max_distance` is not positive.
    pub fn with_audio_levels(mut self, volume: f32, max_distance: f32) -> Self {
        assert!(volume >= 0.0, "Volume must be non-negative, got {}", volume);
        assert!(max_distance > 0.0, "Max distance must be positive, got {}", max_distance);
        self.config.emitter.volume = volume;
        self.config.emitter.max_distance = max_distance;
        self
    }

    /// Replaces the status-line strings.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.config.messages = messages;
        self
    }

    /// Sets the background clear color.
    pub fn with_clear_color(mut self, color: Vec4) -> Self {
        self.config.clear_color = color;
        self
    }

    /// Sets the overlay's virtual view size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_overlay_view(mut self, view_size: UVec2) -> Self {
        assert!(
            view_size.x > 0 && view_size.y > 0,
            "Overlay view must be non-empty, got {}x{}",
            view_size.x,
            view_size.y
        );
        self.config.overlay.view_size = view_size;
        self
    }

    /// Sets the command queue capacity toward the audio mixer.
    ///
    /// Position updates are dropped when the queue is full; larger values
    /// tolerate longer mixer stalls.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_audio_queue_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Audio queue capacity must be positive");
        self.config.audio_queue_capacity = capacity;
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> TourConfig {
        self.config
    }
}

impl Default for TourConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
