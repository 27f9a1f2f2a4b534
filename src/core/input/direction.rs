//=========================================================================
// Direction
//
// The four directional inputs understood by the tour.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::KeyCode;

//=== Direction ===========================================================

/// Directional input driving the position state machine.
///
/// Discriminants double as the column index into the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down = 0,
    Up = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All directions in table-column order.
    pub const ALL: [Direction; 4] = [Self::Down, Self::Up, Self::Left, Self::Right];

    /// Maps arrow keys to directions. Every other key yields `None`.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowDown => Some(Self::Down),
            KeyCode::ArrowUp => Some(Self::Up),
            KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }

    /// The direction whose move undoes this one, where the layout allows it.
    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[inline]
    pub(crate) const fn column(self) -> usize {
        self as usize
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
