//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use observe_tour::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Controller and configuration
pub use crate::config::{EmitterConfig, Messages, OverlayConfig, TourConfig, TourConfigBuilder};
pub use crate::error::{TourError, TourResult};
pub use crate::observe::ObserveMode;

// Mode system
pub use crate::mode::{Mode, ModeKey, ModeStack, ModeTransition};

// Input
pub use crate::core::input::{Direction, InputEvent, KeyCode, Modifiers};
pub use crate::platform::InputTranslator;

// Scene and rendering
pub use crate::core::scene::{Camera, OverlayView, Renderer, SceneProvider, TextExtents, Transform};

// Navigation
pub use crate::core::camera::{CameraRing, Step};
pub use crate::core::tour::{Notice, Position, PositionMachine};

// Audio
pub use crate::audio::{
    channel, AudioDevice, ChannelAudio, Mixer, PlayingSample, Sample, SharedListener,
};
