//=========================================================================
// Input
//
// Discrete key events as delivered by the host, and their interpretation
// as tour directions.
//
// Notes:
// Input state tracking (held keys, action bindings) belongs to the host.
// Modes only see individual events and report whether they consumed them.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod direction;

//=== Public API ==========================================================

pub use direction::Direction;
pub use event::{InputEvent, KeyCode, Modifiers};
