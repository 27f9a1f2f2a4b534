//=========================================================================
// Ambient Emitter
//=========================================================================
//
// A looping voice orbiting a fixed center.
//
// The orbit angle advances by elapsed seconds and wraps at a full turn;
// the voice is moved to center + radius * (cos, sin, 0) every update and
// stopped when the emitter is dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::TAU;

use glam::Vec3;
use log::trace;

//=== Internal Dependencies ===============================================

use super::PlayingSample;
use crate::config::EmitterConfig;

//=== AmbientEmitter ======================================================

/// Owns one playing voice and moves it along a horizontal circle.
pub struct AmbientEmitter<V: PlayingSample> {
    voice: V,
    angle: f32,
    center: Vec3,
    radius: f32,
}

impl<V: PlayingSample> AmbientEmitter<V> {
    /// Takes ownership of an already started voice.
    pub fn new(voice: V, config: &EmitterConfig) -> Self {
        Self {
            voice,
            angle: 0.0,
            center: config.center,
            radius: config.radius,
        }
    }

    /// Advances the orbit and moves the voice.
    pub fn update(&mut self, elapsed: f32) {
        self.angle = (self.angle + elapsed).rem_euclid(TAU);
        let position = self.position();
        trace!(target: "audio", "Emitter angle {:.3} at {:?}", self.angle, position);
        self.voice.set_position(position);
    }

    /// Current orbit angle in `[0, TAU)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// World position for the current angle.
    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        self.center + self.radius * Vec3::new(cos, sin, 0.0)
    }

    pub fn voice(&self) -> &V {
        &self.voice
    }
}

impl<V: PlayingSample> Drop for AmbientEmitter<V> {
    fn drop(&mut self) {
        self.voice.stop();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const EPSILON: f32 = 1e-4;

    //--- Test Helpers -----------------------------------------------------

    #[derive(Default, Clone)]
    struct RecordingVoice {
        positions: Arc<Mutex<Vec<Vec3>>>,
        stops: Arc<AtomicUsize>,
    }

    impl PlayingSample for RecordingVoice {
        fn set_position(&self, position: Vec3) {
            self.positions.lock().unwrap().push(position);
        }

        fn stop(&self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }

        fn is_stopped(&self) -> bool {
            self.stops.load(Ordering::SeqCst) > 0
        }
    }

    fn emitter() -> (AmbientEmitter<RecordingVoice>, RecordingVoice) {
        let voice = RecordingVoice::default();
        (AmbientEmitter::new(voice.clone(), &EmitterConfig::default()), voice)
    }

    //=====================================================================
    // Orbit
    //=====================================================================

    #[test]
    fn starts_at_angle_zero() {
        let (emitter, _) = emitter();
        assert_eq!(emitter.angle(), 0.0);
        assert_eq!(emitter.position(), Vec3::new(20.0, 4.0, 1.0));
    }

    #[test]
    fn quarter_turn_moves_to_plus_y() {
        let (mut emitter, voice) = emitter();
        emitter.update(TAU / 4.0);

        let position = *voice.positions.lock().unwrap().last().unwrap();
        assert!((position - Vec3::new(10.0, 14.0, 1.0)).length() < EPSILON, "got {:?}", position);
    }

    #[test]
    fn angle_wraps_at_full_turn() {
        let (mut emitter, _) = emitter();
        for _ in 0..10 {
            emitter.update(1.0);
        }
        assert!(emitter.angle() >= 0.0 && emitter.angle() < TAU);
        assert!((emitter.angle() - (10.0 - TAU)).abs() < EPSILON);
    }

    #[test]
    fn orbit_stays_on_circle() {
        let (mut emitter, voice) = emitter();
        for _ in 0..50 {
            emitter.update(0.37);
        }
        for position in voice.positions.lock().unwrap().iter() {
            let offset = *position - Vec3::new(10.0, 4.0, 1.0);
            assert!((offset.length() - 10.0).abs() < EPSILON);
            assert_eq!(offset.z, 0.0);
        }
    }

    //=====================================================================
    // Lifecycle
    //=====================================================================

    #[test]
    fn drop_stops_voice_once() {
        let (emitter, voice) = emitter();
        drop(emitter);
        assert_eq!(voice.stops.load(Ordering::SeqCst), 1);
    }
}
