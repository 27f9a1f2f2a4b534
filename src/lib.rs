//=========================================================================
// Observe Tour: Library Root
//
// A camera-tour controller for a pre-authored 3D scene: arrow keys step
// through a fixed graph of cameras, an ambient loop orbits the scene and
// a status line reports illegal moves, dead ends and the exit.
//
// Responsibilities:
// - Expose the `ObserveMode` controller and its configuration
// - Define the consumed scene, renderer and audio interfaces
// - Provide the mode contract and stack the host drives each frame
//
// Typical usage:
// ```no_run
// use observe_tour::prelude::*;
// # fn host<R: Renderer + 'static>(scene: Vec<Camera>, renderer: R) -> Result<(), TourError> {
// let config = TourConfig::default();
// let listener = SharedListener::new();
// let (audio, commands) = channel(config.audio_queue_capacity);
// let _mixer = Mixer::new(commands, listener.clone());
//
// let observe = ObserveMode::new(
//     &scene,
//     &audio,
//     &Sample::new("bgm.wav"),
//     listener,
//     renderer,
//     config,
// )?;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Modes { Observe }
// impl ModeKey for Modes {}
//
// let mut modes = ModeStack::new();
// modes.register_default(Modes::Observe, observe);
// # Ok(())
// # }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine-independent pieces: input, scene interface,
// camera ring and the position state machine.
//
pub mod core;

pub mod audio;
pub mod config;
pub mod error;
pub mod mode;
pub mod observe;
pub mod overlay;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use config::{TourConfig, TourConfigBuilder};
pub use error::{TourError, TourResult};
pub use observe::ObserveMode;
