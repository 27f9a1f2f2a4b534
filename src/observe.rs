//=========================================================================
// Observe Mode
//=========================================================================
//
// The tour controller handed to the host's mode stack.
//
// Architecture:
//   ObserveMode
//     ├─ ring: CameraRing            (owned camera snapshot, mode order)
//     ├─ machine: PositionMachine    (position + status notice)
//     ├─ emitter: AmbientEmitter     (owns the looping voice)
//     ├─ listener: SharedListener    (shared with the mixer)
//     ├─ renderer: R                 (host drawing primitives)
//     └─ overlay: StatusOverlay
//
// Flow (once per frame, strictly sequential):
//   handle_event() → PositionMachine::apply → ring steps
//   update()       → emitter orbit, listener pose under the lock
//   draw()         → align once → clear → scene → status line
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{UVec2, Vec3};
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::audio::{AmbientEmitter, AudioDevice, PlayingSample, Sample, SharedListener};
use crate::config::TourConfig;
use crate::core::camera::CameraRing;
use crate::core::input::InputEvent;
use crate::core::scene::{Renderer, SceneProvider};
use crate::core::tour::{Notice, Position, PositionMachine};
use crate::error::TourResult;
use crate::mode::Mode;
use crate::overlay::StatusOverlay;

//=== ObserveMode =========================================================

/// Steps through a scene's cameras with the arrow keys.
pub struct ObserveMode<V: PlayingSample, R: Renderer> {
    ring: CameraRing,
    machine: PositionMachine,
    emitter: AmbientEmitter<V>,
    listener: SharedListener,
    renderer: R,
    overlay: StatusOverlay,
    config: TourConfig,
}

impl<V: PlayingSample, R: Renderer> ObserveMode<V, R> {
    /// Builds the controller and starts the ambient loop at the origin.
    ///
    /// The scene's cameras are copied into the ring; the scene itself is
    /// not retained.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoCameras`] for a scene without cameras and
    /// [`TourError::InvalidConfig`] for a config that fails validation.
    ///
    /// [`TourError::NoCameras`]: crate::TourError::NoCameras
    /// [`TourError::InvalidConfig`]: crate::TourError::InvalidConfig
    pub fn new<S, A>(
        scene: &S,
        audio: &A,
        sample: &Sample,
        listener: SharedListener,
        renderer: R,
        config: TourConfig,
    ) -> TourResult<Self>
    where
        S: SceneProvider + ?Sized,
        A: AudioDevice<Voice = V>,
    {
        config.validate()?;
        let ring = CameraRing::from_scene(scene)?;
        if ring.len() < Position::COUNT {
            warn!(
                target: "tour",
                "Scene has {} cameras for {} positions, some positions share a camera",
                ring.len(),
                Position::COUNT
            );
        }

        let voice = audio.loop_3d(
            sample,
            config.emitter.volume,
            Vec3::ZERO,
            config.emitter.max_distance,
        );
        let emitter = AmbientEmitter::new(voice, &config.emitter);
        let overlay = StatusOverlay::new(&config.overlay);

        info!(
            target: "tour",
            "Observe mode ready: {} cameras, ambient loop {:?}",
            ring.len(),
            sample.name()
        );

        Ok(Self {
            ring,
            machine: PositionMachine::new(),
            emitter,
            listener,
            renderer,
            overlay,
            config,
        })
    }

    //--- Queries ----------------------------------------------------------

    /// Current mode, `-1` until the first draw or input aligns the tour.
    pub fn mode(&self) -> i32 {
        self.machine.mode()
    }

    pub fn position(&self) -> Option<Position> {
        self.machine.position()
    }

    pub fn notice(&self) -> Notice {
        self.machine.notice()
    }

    /// Status line currently shown in the overlay.
    pub fn status_text(&self) -> &str {
        self.config.messages.text(self.machine.notice())
    }

    pub fn ring(&self) -> &CameraRing {
        &self.ring
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn emitter(&self) -> &AmbientEmitter<V> {
        &self.emitter
    }

    pub fn listener(&self) -> &SharedListener {
        &self.listener
    }
}

impl<V: PlayingSample, R: Renderer> Mode for ObserveMode<V, R> {
    fn handle_event(&mut self, event: &InputEvent, _window_size: UVec2) -> bool {
        let Some(direction) = event.direction() else {
            return false;
        };

        let notice = self.machine.apply(direction, &mut self.ring);
        debug!(
            target: "tour",
            "{:?} -> mode {}, camera {:?}, {:?}",
            direction,
            self.machine.mode(),
            self.ring.current().name,
            notice
        );
        true
    }

    fn update(&mut self, elapsed: f32) {
        self.emitter.update(elapsed);

        let frame = self.ring.current().make_local_to_world();
        self.listener.set_pose_from_frame(&frame);
    }

    fn draw(&mut self, drawable_size: UVec2) {
        self.machine.align(&mut self.ring);

        self.renderer.clear(self.config.clear_color);

        let camera = self.ring.current_mut();
        camera.aspect = drawable_size.x as f32 / drawable_size.y.max(1) as f32;
        trace!(target: "tour", "Drawing camera {:?} at aspect {:.3}", camera.name, camera.aspect);
        self.renderer.draw_scene(self.ring.current());

        let text = self.config.messages.text(self.machine.notice());
        self.overlay.draw(&mut self.renderer, text, drawable_size);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
