//=========================================================================
// Mixer
//=========================================================================
//
// Audio-side consumer of voice commands and the listener pose.
//
// Flow (audio thread, once per buffer):
//   pump()        → drain AudioCommands into the voice table
//   spatialize()  → one listener snapshot under the lock
//                 → per-voice distance falloff and stereo pan
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use crossbeam_channel::Receiver;
use glam::Vec3;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::channel::{AudioCommand, VoiceId};
use super::listener::{Listener, SharedListener};
use super::Sample;

//=== Voice ===============================================================

/// A voice known to the mixer.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub sample: Sample,
    pub volume: f32,
    pub position: Vec3,
    pub max_distance: f32,
}

impl Voice {
    /// Left/right gains for this voice as heard by `listener`.
    ///
    /// Gain falls off linearly to zero at `max_distance`. Pan is the cosine
    /// between the listener's right vector and the direction to the voice;
    /// a voice at the listener's position is centered.
    pub fn gains(&self, listener: &Listener) -> (f32, f32) {
        let offset = self.position - listener.position;
        let distance = offset.length();
        let falloff = (1.0 - distance / self.max_distance).clamp(0.0, 1.0);
        let amplitude = self.volume * falloff;

        let pan = offset
            .normalize_or_zero()
            .dot(listener.right.normalize_or_zero())
            .clamp(-1.0, 1.0);

        (amplitude * 0.5 * (1.0 - pan), amplitude * 0.5 * (1.0 + pan))
    }
}

//=== VoiceMix ============================================================

/// Gains computed for one voice in one mixing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceMix {
    pub voice: VoiceId,
    pub left: f32,
    pub right: f32,
}

//=== Mixer ===============================================================

/// Tracks playing voices and spatializes them against the listener.
pub struct Mixer {
    commands: Receiver<AudioCommand>,
    listener: SharedListener,
    voices: BTreeMap<VoiceId, Voice>,
}

impl Mixer {
    pub fn new(commands: Receiver<AudioCommand>, listener: SharedListener) -> Self {
        Self {
            commands,
            listener,
            voices: BTreeMap::new(),
        }
    }

    //--- Command Processing -----------------------------------------------

    /// Applies every queued command and returns how many there were.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.commands.try_recv() {
            self.apply(command);
            applied += 1;
        }
        if applied > 0 {
            trace!(target: "audio", "Mixer applied {} commands", applied);
        }
        applied
    }

    fn apply(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Start { voice, sample, volume, position, max_distance } => {
                debug!(target: "audio", "Voice {} started ({:?})", voice, sample.name());
                self.voices.insert(voice, Voice { sample, volume, position, max_distance });
            }
            AudioCommand::SetPosition { voice, position } => {
                if let Some(entry) = self.voices.get_mut(&voice) {
                    entry.position = position;
                }
            }
            AudioCommand::Stop { voice } => {
                if self.voices.remove(&voice).is_some() {
                    debug!(target: "audio", "Voice {} stopped", voice);
                }
            }
        }
    }

    //--- Mixing -----------------------------------------------------------

    /// Computes gains for every voice from a single listener snapshot.
    pub fn spatialize(&self) -> Vec<VoiceMix> {
        let listener = self.listener.snapshot();
        self.voices
            .iter()
            .map(|(&voice, entry)| {
                let (left, right) = entry.gains(&listener);
                VoiceMix { voice, left, right }
            })
            .collect()
    }

    //--- Queries ----------------------------------------------------------

    pub fn voice(&self, id: VoiceId) -> Option<&Voice> {
        self.voices.get(&id)
    }

    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    pub fn listener(&self) -> &SharedListener {
        &self.listener
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
