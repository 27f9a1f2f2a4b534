//=========================================================================
// Tour
//=========================================================================
//
// The navigation core: a fixed transition table over five positions and
// the state machine that applies it to the camera ring.
//
// Architecture:
//   Direction ──> TRANSITIONS[position][direction] ──> Outcome
//                                                        │
//   PositionMachine ── MoveTo ──> move_to() ──> CameraRing::step()
//                   └─ Notice ──> status line
//
//=========================================================================

//=== Module Declarations =================================================

mod machine;
mod position;

//=== Public API ==========================================================

pub use machine::{MachineState, PositionMachine};
pub use position::{transition, Notice, Outcome, Position, TRANSITIONS};
