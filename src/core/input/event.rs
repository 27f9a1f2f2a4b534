//=========================================================================
// Input Event Types
//
// Engine-side representation of the discrete key events delivered by the
// host's event source.
//
// Responsibilities:
// - Represent physical keys in a stable, platform-independent way
// - Carry modifier state alongside key presses
// - Classify arrow-key presses as tour directions
//
// Event Flow:
// ```text
// Host event pump (Winit)
//         ↓
//    InputTranslator (platform)
//         ↓
//    InputEvent (this module)
//         ↓
//    Mode::handle_event → Direction → PositionMachine
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Direction;

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the arrow keys drive the tour; the remaining codes exist so that
/// hosts can forward every key press and let modes decide whether to
/// consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Fallback for keys the platform reports but the engine does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished. The tour ignores
/// modifiers entirely: Shift+Up is still Up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
}

//=== InputEvent ==========================================================

/// Low-level input event handed to modes by the host.
///
/// Only `KeyDown` can carry tour input. `KeyUp`, cursor motion and
/// anything unrecognized pass through modes unconsumed.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Mouse cursor moved (screen space, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event.
    Unidentified,
}

impl InputEvent {
    /// Shorthand for an unmodified key press.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Shorthand for an unmodified key release.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Returns the tour direction for an arrow-key press.
    ///
    /// Releases are never directional, so holding and releasing an arrow
    /// key moves exactly once.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::KeyDown { key, .. } => Direction::from_key(*key),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
