//=========================================================================
// Input Translator
//=========================================================================
//
// Converts Winit window events into mode InputEvents.
//
// Architecture:
//   Host event loop → InputTranslator → InputEvent → ModeStack::handle_event
//
// Modifier state is cached from ModifiersChanged events and applied to
// every later key event. Keys without a mapping (F13-F24, media keys) are
// filtered and yield None.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers};

//=== InputTranslator =====================================================

/// Stateful Winit-to-mode event translator.
///
/// Owns no window and no event loop; the host feeds it the events it
/// receives.
#[derive(Debug, Default)]
pub struct InputTranslator {
    current_modifiers: Modifiers,
}

impl InputTranslator {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    pub fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Translates one window event.
    ///
    /// Modifier changes update the cache and produce no event. Events the
    /// modes have no use for (resize, focus, redraw) yield `None`.
    pub fn translate_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.update_modifiers(state.state());
                None
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let translated = self.process_key_event(key_event);
                if translated.is_none() {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
                translated
            }
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            _ => None,
        }
    }

    /// Converts a Winit key event (filters unmapped keys).
    pub fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.translate_key(key_event.physical_key, key_event.state)
    }

    /// Converts a physical key and press state.
    pub fn translate_key(&self, physical_key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.current_modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps A-Z, 0-9, arrows and common special keys. Everything else is
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------
            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Direction;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;
    use winit::keyboard::NativeKeyCode;

    fn make_modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        if shift { state.insert(ModifiersState::SHIFT); }
        if ctrl { state.insert(ModifiersState::CONTROL); }
        if alt { state.insert(ModifiersState::ALT); }
        state
    }

    fn code(code: WinitKeyCode) -> PhysicalKey {
        PhysicalKey::Code(code)
    }

    //=====================================================================
    // Modifiers
    //=====================================================================

    #[test]
    fn starts_with_no_modifiers() {
        let translator = InputTranslator::new();
        assert_eq!(translator.current_modifiers(), Modifiers::NONE);
    }

    #[test]
    fn modifiers_persist_across_events() {
        let mut translator = InputTranslator::new();
        translator.update_modifiers(make_modifiers(true, false, true));

        for key in [WinitKeyCode::KeyS, WinitKeyCode::ArrowUp] {
            match translator.translate_key(code(key), ElementState::Pressed) {
                Some(InputEvent::KeyDown { modifiers, .. }) => {
                    assert!(modifiers.shift && !modifiers.ctrl && modifiers.alt);
                }
                other => panic!("Expected KeyDown, got {:?}", other),
            }
        }
    }

    //=====================================================================
    // Key Events
    //=====================================================================

    #[test]
    fn arrow_press_becomes_direction() {
        let translator = InputTranslator::new();
        let event = translator
            .translate_key(code(WinitKeyCode::ArrowLeft), ElementState::Pressed)
            .expect("arrow keys are mapped");
        assert_eq!(event.direction(), Some(Direction::Left));
    }

    #[test]
    fn release_becomes_key_up() {
        let translator = InputTranslator::new();
        let event = translator.translate_key(code(WinitKeyCode::ArrowDown), ElementState::Released);
        assert_eq!(event, Some(InputEvent::key_up(KeyCode::ArrowDown)));
        assert_eq!(event.and_then(|e| e.direction()), None, "Releases are not directional");
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let translator = InputTranslator::new();
        assert_eq!(translator.translate_key(code(WinitKeyCode::F13), ElementState::Pressed), None);
        assert_eq!(
            translator.translate_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed
            ),
            None
        );
    }

    //=====================================================================
    // Window Events
    //=====================================================================

    #[test]
    fn modifiers_changed_applies_to_later_keys() {
        let mut translator = InputTranslator::new();
        let changed = WindowEvent::ModifiersChanged(ModifiersState::SHIFT.into());

        assert_eq!(translator.translate_window_event(&changed), None, "Modifier changes emit nothing");
        assert_eq!(translator.current_modifiers(), Modifiers::SHIFT);

        match translator.translate_key(code(WinitKeyCode::ArrowUp), ElementState::Pressed) {
            Some(InputEvent::KeyDown { key, modifiers }) => {
                assert_eq!(key, KeyCode::ArrowUp);
                assert!(modifiers.shift);
            }
            other => panic!("Expected KeyDown, got {:?}", other),
        }
    }

    #[test]
    fn cursor_moved_becomes_mouse_moved() {
        let mut translator = InputTranslator::new();
        let moved = WindowEvent::CursorMoved {
            // SAFETY: the dummy id is only compared, never handed to a backend
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(12.5, 40.0),
        };

        assert_eq!(
            translator.translate_window_event(&moved),
            Some(InputEvent::MouseMoved { x: 12.5, y: 40.0 })
        );
    }

    #[test]
    fn unrelated_window_events_are_ignored() {
        let mut translator = InputTranslator::new();
        assert_eq!(translator.translate_window_event(&WindowEvent::RedrawRequested), None);
        assert_eq!(translator.translate_window_event(&WindowEvent::Focused(true)), None);
    }

    //=====================================================================
    // Key Conversion
    //=====================================================================

    #[test]
    fn keycode_conversion_arrows() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::ArrowUp);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowDown), KeyCode::ArrowDown);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowRight), KeyCode::ArrowRight);
    }

    #[test]
    fn keycode_conversion_alphanumeric() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::Digit7);
    }

    #[test]
    fn keycode_conversion_special() {
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Unidentified);
    }
}
