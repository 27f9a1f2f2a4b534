//=========================================================================
// Channel Audio Device
//=========================================================================
//
// `AudioDevice` implementation that forwards voice commands to the audio
// thread over a bounded crossbeam channel.
//
// Delivery policy:
// - Start: bounded wait, then the voice stays silent with a warning
// - SetPosition: try_send; dropped when the queue is full, since the next
//   frame's position supersedes it
// - Stop: bounded wait, then dropped with a warning
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, SendTimeoutError, Sender, TrySendError};
use glam::Vec3;
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{AudioDevice, PlayingSample, Sample};

/// How long `Start` and `Stop` wait for queue space before giving up.
const SEND_TIMEOUT: Duration = Duration::from_millis(250);

//=== AudioCommand ========================================================

/// Identifier assigned to each started voice.
pub type VoiceId = u64;

/// Messages from the controller side to the mixer.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    /// Begin looping a sample.
    Start {
        voice: VoiceId,
        sample: Sample,
        volume: f32,
        position: Vec3,
        max_distance: f32,
    },

    /// Move a playing voice.
    SetPosition { voice: VoiceId, position: Vec3 },

    /// Stop a voice and forget it.
    Stop { voice: VoiceId },
}

/// Creates a connected device and the receiving end for a [`Mixer`].
///
/// [`Mixer`]: super::Mixer
///
/// # Panics
///
/// Panics if `capacity == 0`.
pub fn channel(capacity: usize) -> (ChannelAudio, Receiver<AudioCommand>) {
    assert!(capacity > 0, "Audio queue capacity must be positive");
    let (sender, receiver) = bounded(capacity);
    (ChannelAudio::new(sender), receiver)
}

//=== ChannelAudio ========================================================

/// Audio device backed by a command channel.
pub struct ChannelAudio {
    sender: Sender<AudioCommand>,
    next_voice: AtomicU64,
}

impl ChannelAudio {
    /// Wraps an existing sender.
    pub fn new(sender: Sender<AudioCommand>) -> Self {
        Self {
            sender,
            next_voice: AtomicU64::new(1),
        }
    }
}

impl AudioDevice for ChannelAudio {
    type Voice = ChannelVoice;

    fn loop_3d(&self, sample: &Sample, volume: f32, position: Vec3, max_distance: f32) -> ChannelVoice {
        let voice = self.next_voice.fetch_add(1, Ordering::Relaxed);
        let start = AudioCommand::Start {
            voice,
            sample: sample.clone(),
            volume,
            position,
            max_distance,
        };

        debug!(target: "audio", "Starting loop {:?} as voice {}", sample.name(), voice);
        match self.sender.send_timeout(start, SEND_TIMEOUT) {
            Ok(()) => {}
            Err(SendTimeoutError::Timeout(_)) => {
                warn!(target: "audio", "Mixer stalled, voice {} will be silent", voice);
            }
            Err(SendTimeoutError::Disconnected(_)) => {
                warn!(target: "audio", "Mixer disconnected, voice {} will be silent", voice);
            }
        }

        ChannelVoice {
            id: voice,
            sender: self.sender.clone(),
            stopped: AtomicBool::new(false),
        }
    }
}

//=== ChannelVoice ========================================================

/// Handle to a voice started through [`ChannelAudio`].
pub struct ChannelVoice {
    id: VoiceId,
    sender: Sender<AudioCommand>,
    stopped: AtomicBool,
}

impl ChannelVoice {
    pub fn id(&self) -> VoiceId {
        self.id
    }
}

impl PlayingSample for ChannelVoice {
    fn set_position(&self, position: Vec3) {
        if self.is_stopped() {
            return;
        }
        match self.sender.try_send(AudioCommand::SetPosition { voice: self.id, position }) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                trace!(target: "audio", "Queue full, dropping position for voice {}", self.id);
            }
            Err(TrySendError::Disconnected(_)) => {
                trace!(target: "audio", "Mixer gone, dropping position for voice {}", self.id);
            }
        }
    }

    fn stop(&self) {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return;
        }
        debug!(target: "audio", "Stopping voice {}", self.id);
        match self.sender.send_timeout(AudioCommand::Stop { voice: self.id }, SEND_TIMEOUT) {
            Ok(()) => {}
            Err(SendTimeoutError::Timeout(_)) => {
                warn!(target: "audio", "Mixer stalled, stop for voice {} not delivered", self.id);
            }
            Err(SendTimeoutError::Disconnected(_)) => {
                debug!(target: "audio", "Mixer already gone when stopping voice {}", self.id);
            }
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
