//=========================================================================
// Mode System
//=========================================================================
//
// The contract between the host's frame loop and interactive controllers,
// and a stack for swapping controllers in and out.
//
// Architecture:
//   ModeStack
//     ├─ modes: HashMap<K, Box<dyn Mode>>
//     ├─ stack: Vec<K>
//     └─ transitions: TransitionQueue<K>
//
// Flow (once per frame, strictly sequential):
//   handle_event() per input → update(elapsed) → draw(size)
//   → process_transitions()
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::UVec2;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== Module Declarations =================================================

mod mode_stack;
mod transition_queue;

//=== Public API ==========================================================

pub use mode_stack::{ModeKey, ModeStack, ModeTransition};
pub use transition_queue::TransitionQueue;

//=== Mode Trait ==========================================================

/// An interactive controller driven by the host once per frame.
///
/// Only the three per-frame entry points are required; lifecycle hooks
/// default to doing nothing.
///
/// ```rust
/// # use glam::UVec2;
/// # use observe_tour::prelude::*;
/// struct Idle;
///
/// impl Mode for Idle {
///     fn handle_event(&mut self, _event: &InputEvent, _window_size: UVec2) -> bool {
///         false
///     }
///     fn update(&mut self, _elapsed: f32) {}
///     fn draw(&mut self, _drawable_size: UVec2) {}
/// }
/// ```
pub trait Mode {
    /// Offers an input event; returns `true` if the mode consumed it.
    fn handle_event(&mut self, event: &InputEvent, window_size: UVec2) -> bool;

    /// Advances simulation by `elapsed` seconds.
    fn update(&mut self, elapsed: f32);

    /// Renders one frame at `drawable_size` pixels.
    fn draw(&mut self, drawable_size: UVec2);

    /// Called when the mode enters the active stack.
    fn on_enter(&mut self) {}

    /// Called when the mode leaves the active stack.
    fn on_exit(&mut self) {}

    /// Whether modes below this one keep updating and drawing.
    ///
    /// Overlays such as a pause menu are transparent; full-screen modes
    /// are opaque.
    fn is_transparent(&self) -> bool {
        false
    }
}
