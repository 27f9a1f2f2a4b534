//=========================================================================
// Position State Machine
//=========================================================================
//
// Tracks where the user stands in the tour and keeps the camera ring in
// step with it.
//
// Flow:
//   apply(direction) → transition table → Outcome
//     ├─ MoveTo(target) → move_to(): one ring step per mode unit
//     └─ Notice(n)      → status only, ring untouched
//
// Invariant: once aligned, ring index == origin + mode (mod ring length).
// Alignment fixes the origin from the ring's head, so a ring built by
// `CameraRing::from_scene` has origin 0 and index i holds position i.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::position::{transition, Notice, Outcome, Position};
use crate::core::camera::{CameraRing, Step};
use crate::core::input::Direction;

//=== MachineState ========================================================

/// Alignment state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// Before the first frame; the ring still sits at its head.
    Unaligned,
    /// At a position whose camera is current.
    At(Position),
}

//=== PositionMachine =====================================================

/// Position state plus the last status produced by input.
#[derive(Debug, Clone)]
pub struct PositionMachine {
    state: MachineState,
    notice: Notice,
    origin: usize,
}

impl PositionMachine {
    //--- Construction -----------------------------------------------------

    /// Creates an unaligned machine showing the help prompt.
    pub fn new() -> Self {
        Self {
            state: MachineState::Unaligned,
            notice: Notice::Help,
            origin: 0,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Current state.
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// Mode number: `-1` while unaligned, otherwise `0..=4`.
    pub fn mode(&self) -> i32 {
        match self.state {
            MachineState::Unaligned => -1,
            MachineState::At(position) => position.index() as i32,
        }
    }

    /// Current position, or `None` while unaligned.
    pub fn position(&self) -> Option<Position> {
        match self.state {
            MachineState::Unaligned => None,
            MachineState::At(position) => Some(position),
        }
    }

    /// Returns `true` once the initial alignment has run.
    pub fn is_aligned(&self) -> bool {
        self.state != MachineState::Unaligned
    }

    /// Status produced by the most recent input.
    pub fn notice(&self) -> Notice {
        self.notice
    }

    /// Ring index of the `Hub` camera, fixed by alignment.
    pub fn origin(&self) -> usize {
        self.origin
    }

    //--- Transitions ------------------------------------------------------

    /// Performs the one-time initial alignment.
    ///
    /// The ring's head is the camera for `Spur`; walking back to `Hub`
    /// takes exactly one backward step. Does nothing once aligned.
    ///
    /// Any ring can be aligned. With [`CameraRing::from_scene`] the hub
    /// lands at index 0; other rings keep their own order and the hub is
    /// the camera just behind their head.
    pub fn align(&mut self, ring: &mut CameraRing) {
        if self.is_aligned() {
            return;
        }
        let len = ring.len();
        self.origin = (ring.index() + len - Position::Spur.index() % len) % len;
        self.state = MachineState::At(Position::Spur);
        self.move_to(Position::Hub, ring);
        debug!(target: "tour", "Aligned at {:?}, camera {:?}", Position::Hub, ring.current().name);
    }

    /// Walks to `target`, stepping the ring once per mode unit.
    ///
    /// Steps backward while above the target and forward while below it,
    /// so exactly `|mode - target|` steps are taken in the direction of
    /// the mode delta. Returns the number of steps. An unaligned machine
    /// aligns first.
    pub fn move_to(&mut self, target: Position, ring: &mut CameraRing) -> usize {
        let Some(from) = self.position() else {
            self.align(ring);
            return self.move_to(target, ring);
        };

        let delta = target.index() as i64 - from.index() as i64;
        let step = if delta < 0 { Step::Backward } else { Step::Forward };
        let goal = ring.counters().get(step) + delta.unsigned_abs();
        let steps = ring.advance_to(goal, step);

        self.state = MachineState::At(target);
        debug_assert_eq!(
            ring.index(),
            (self.origin + target.index()) % ring.len(),
            "camera ring out of step with position {:?}",
            target
        );
        trace!(target: "tour", "{:?} -> {:?} in {} ring steps", from, target, steps);
        steps
    }

    /// Handles one directional input and returns the resulting notice.
    ///
    /// The status resets to the help prompt first; a message outcome then
    /// replaces it. Moves never fail and message outcomes leave both the
    /// position and the ring untouched.
    pub fn apply(&mut self, direction: Direction, ring: &mut CameraRing) -> Notice {
        self.align(ring);
        self.notice = Notice::Help;

        let Some(from) = self.position() else {
            return self.notice;
        };

        match transition(from, direction) {
            Outcome::MoveTo(target) => {
                self.move_to(target, ring);
            }
            Outcome::Notice(notice) => {
                debug!(target: "tour", "{:?} at {:?}: {:?}", direction, from, notice);
                self.notice = notice;
            }
        }
        self.notice
    }
}

impl Default for PositionMachine {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
