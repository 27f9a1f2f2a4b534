//=========================================================================
// Positions & Transition Table
//=========================================================================
//
// The tour's layout as data: five positions, four directions, and one
// outcome per (position, direction) pair.
//
// Layout:
// ```text
//            Goal(4) ──RIGHT──> victory
//              ↑ UP/LEFT   │ LEFT
//          Passage(3) <────┘
//              ↑ UP
//   Fork(2) <─LEFT─ Hub(0) ─RIGHT─> Spur(1)
//      └────RIGHT────>  ↑  <──LEFT────┘
//                 DOWN from anywhere
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::Direction;

use Outcome::{MoveTo, Notice as Say};
use Position::{Fork, Goal, Hub, Passage, Spur};

//=== Position ============================================================

/// A location in the tour layout.
///
/// The discriminant is the position's mode number and its camera's ring
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    /// Starting point; every DOWN leads back here.
    Hub = 0,
    /// Short branch right of the hub that leads nowhere.
    Spur = 1,
    /// Branch left of the hub that opens upward.
    Fork = 2,
    /// Corridor between the fork and the goal.
    Passage = 3,
    /// The exit; RIGHT from here wins.
    Goal = 4,
}

impl Position {
    /// All positions in mode order.
    pub const ALL: [Position; 5] = [Self::Hub, Self::Spur, Self::Fork, Self::Passage, Self::Goal];

    /// Number of positions in the layout.
    pub const COUNT: usize = Self::ALL.len();

    /// Mode number of this position.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position with the given mode number.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

//=== Notice ==============================================================

/// User-facing status produced by an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Default prompt explaining the controls.
    Help,
    /// Input that has no meaning at this position.
    IllegalInput,
    /// A direction that leads nowhere.
    DeadEnd,
    /// The tour has been solved.
    Victory,
}

//=== Outcome =============================================================

/// Result of one directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Walk to the position, stepping the camera ring along the way.
    MoveTo(Position),
    /// Stay put and replace the status line.
    Notice(Notice),
}

//=== Transition Table ====================================================

/// Outcomes indexed by `[position][direction]`, directions in
/// `Down, Up, Left, Right` order.
#[rustfmt::skip]
pub const TRANSITIONS: [[Outcome; 4]; Position::COUNT] = [
    //  DOWN          UP                         LEFT                    RIGHT
    [MoveTo(Hub), Say(Notice::IllegalInput), MoveTo(Fork),            MoveTo(Spur)],
    [MoveTo(Hub), Say(Notice::DeadEnd),      MoveTo(Hub),             Say(Notice::DeadEnd)],
    [MoveTo(Hub), MoveTo(Passage),           Say(Notice::DeadEnd),    MoveTo(Hub)],
    [MoveTo(Hub), MoveTo(Goal),              MoveTo(Goal),            Say(Notice::DeadEnd)],
    [MoveTo(Hub), Say(Notice::IllegalInput), MoveTo(Passage),         Say(Notice::Victory)],
];

/// Looks up the outcome of pressing `direction` at `from`.
#[inline]
pub fn transition(from: Position, direction: Direction) -> Outcome {
    TRANSITIONS[from.index()][direction.column()]
}

//=========================================================================
// Unit Tests
//=========================================================================
