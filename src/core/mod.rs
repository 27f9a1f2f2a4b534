//=========================================================================
// Core
//
// Engine-independent pieces of the tour controller.
//
// Responsibilities:
// - Input events and their directional meaning (`input`)
// - The consumed scene and renderer interface (`scene`)
// - The circular camera selection (`camera`)
// - Positions, the transition table and the state machine (`tour`)
//
// Notes:
// Nothing in `core` touches audio or the host's frame loop; the observe
// mode wires these pieces to those collaborators.
//
//=========================================================================

pub mod camera;
pub mod input;
pub mod scene;
pub mod tour;

//=== Re-exports ==========================================================

pub use camera::{CameraRing, Step, StepCounters};
pub use input::{Direction, InputEvent, KeyCode, Modifiers};
pub use scene::{Camera, OverlayView, Renderer, SceneProvider, TextExtents, Transform};
pub use tour::{Notice, Outcome, Position, PositionMachine};
