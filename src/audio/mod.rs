//=========================================================================
// Audio
//
// The consumed audio interface plus a channel-backed implementation.
//
// Architecture:
// ```text
//  Controller thread:                  Audio thread:
//  ┌───────────────────────────┐      ┌──────────────────────────┐
//  │ AmbientEmitter            │      │ Mixer                    │
//  │  └─ ChannelVoice ─────────┼─────>│  pump(): voice table     │
//  │     set_position / stop   │ MPSC │                          │
//  │                           │      │  spatialize():           │
//  │ SharedListener ───────────┼──┬──>│   listener snapshot      │
//  │  set_pose_from_frame()    │ lock │   under the same lock    │
//  └───────────────────────────┘      └──────────────────────────┘
// ```
//
// Notes:
// Sample decoding and the DSP that renders voices to a device stay with
// the host. The mixer here only tracks voices and turns the listener pose
// into per-voice gains.
//
//=========================================================================

//=== Submodules ==========================================================

mod channel;
mod emitter;
mod listener;
mod mixer;

//=== External Crates =====================================================

use glam::Vec3;

//=== Public API ==========================================================

pub use channel::{channel, AudioCommand, ChannelAudio, ChannelVoice, VoiceId};
pub use emitter::AmbientEmitter;
pub use listener::{Listener, ListenerGuard, SharedListener};
pub use mixer::{Mixer, Voice, VoiceMix};

//=== Sample ==============================================================

/// Handle to a decoded sample owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sample {
    name: String,
}

impl Sample {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//=== PlayingSample =======================================================

/// A voice that is currently playing.
///
/// `stop` is idempotent: the first call stops the voice and later calls
/// do nothing.
pub trait PlayingSample: Send {
    /// Moves the voice's world position.
    fn set_position(&self, position: Vec3);

    /// Stops the voice.
    fn stop(&self);

    /// Returns `true` once `stop` has been called.
    fn is_stopped(&self) -> bool;
}

//=== AudioDevice =========================================================

/// Starts positional voices.
pub trait AudioDevice {
    type Voice: PlayingSample;

    /// Starts `sample` looping at `position`, audible out to `max_distance`.
    fn loop_3d(&self, sample: &Sample, volume: f32, position: Vec3, max_distance: f32)
        -> Self::Voice;
}
