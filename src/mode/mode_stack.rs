//=========================================================================
// Mode Stack
//=========================================================================
//
// Registers modes by key and keeps a stack of active keys.
//
// Modes are stored once and referenced by key, so a mode keeps its state
// (tour position, status line) while another mode covers it. The topmost
// opaque mode and every transparent mode above it form the active set.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use glam::UVec2;
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Mode, TransitionQueue};
use crate::core::input::InputEvent;

//=== Mode Transition =====================================================

/// Stack operations requested by the host or by modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition<K: ModeKey> {
    /// Adds a mode to the top of the stack.
    Push(K),

    /// Removes a specific mode from the stack.
    Remove(K),

    /// Replaces a mode in place with another.
    Replace(K, K),

    /// Removes every mode from the stack.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<K: ModeKey> Default for ModeTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Mode Key Trait ======================================================

/// Marker trait for mode identifiers, typically a host-defined enum.
pub trait ModeKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== Mode Stack ==========================================================

/// Owns registered modes and dispatches the per-frame entry points to the
/// active ones.
pub struct ModeStack<K: ModeKey> {
    modes: HashMap<K, Box<dyn Mode>>,
    stack: Vec<K>,
    transitions: TransitionQueue<K>,
}

impl<K: ModeKey> ModeStack<K> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack with no registered modes.
    pub fn new() -> Self {
        Self {
            modes: HashMap::new(),
            stack: Vec::new(),
            transitions: TransitionQueue::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a mode under `key`, replacing any previous registration.
    pub fn register_mode<T>(&mut self, key: K, mode: T)
    where
        T: Mode + 'static,
    {
        if self.modes.insert(key, Box::new(mode)).is_some() {
            warn!("Mode {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a mode and pushes it immediately, calling `on_enter`.
    pub fn register_default<T>(&mut self, key: K, mode: T)
    where
        T: Mode + 'static,
    {
        self.register_mode(key, mode);
        self.push_internal(key);
    }

    /// Queues a stack change for the next [`process_transitions`].
    ///
    /// [`process_transitions`]: ModeStack::process_transitions
    pub fn request(&mut self, transition: ModeTransition<K>) {
        self.transitions.push(transition);
    }

    //--- Per-Frame Entry Points -------------------------------------------

    /// Offers `event` to active modes from the top down.
    ///
    /// Returns `true` as soon as one mode consumes it.
    pub fn handle_event(&mut self, event: &InputEvent, window_size: UVec2) -> bool {
        for key in self.collect_active_modes().into_iter().rev() {
            if let Some(mode) = self.modes.get_mut(&key) {
                if mode.handle_event(event, window_size) {
                    return true;
                }
            }
        }
        false
    }

    /// Advances every active mode, bottom-up.
    pub fn update(&mut self, elapsed: f32) {
        for key in self.collect_active_modes() {
            if let Some(mode) = self.modes.get_mut(&key) {
                mode.update(elapsed);
            }
        }
    }

    /// Draws every active mode, bottom-up, so overlays land on top.
    pub fn draw(&mut self, drawable_size: UVec2) {
        for key in self.collect_active_modes() {
            if let Some(mode) = self.modes.get_mut(&key) {
                mode.draw(drawable_size);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies queued transitions in FIFO order.
    ///
    /// Call at the frame boundary, after `draw`.
    pub fn process_transitions(&mut self) {
        for transition in self.transitions.take() {
            match transition {
                ModeTransition::Push(key) => self.push_internal(key),
                ModeTransition::Remove(key) => self.remove_internal(key),
                ModeTransition::Replace(old_key, new_key) => self.replace_internal(old_key, new_key),
                ModeTransition::Clear => self.clear_internal(),
                ModeTransition::Empty => {}
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Keys on the stack, bottom first.
    pub fn stack(&self) -> &[K] {
        &self.stack
    }

    /// Topmost key, if any.
    pub fn top(&self) -> Option<K> {
        self.stack.last().copied()
    }

    /// Returns `true` if a mode is registered under `key`.
    pub fn is_registered(&self, key: K) -> bool {
        self.modes.contains_key(&key)
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: K) {
        if self.stack.contains(&key) {
            warn!("Mode {:?} is already in the stack, skipping push", key);
            return;
        }
        let Some(mode) = self.modes.get_mut(&key) else {
            warn!("Attempted to push unregistered mode {:?}", key);
            return;
        };

        debug!("Pushing mode {:?} onto stack", key);
        self.stack.push(key);
        mode.on_enter();
    }

    fn remove_internal(&mut self, key: K) {
        let Some(pos) = self.stack.iter().position(|&k| k == key) else {
            debug!("Mode {:?} not found in stack, skipping removal", key);
            return;
        };

        debug!("Removing mode {:?} from stack at position {}", key, pos);
        self.stack.remove(pos);
        if let Some(mode) = self.modes.get_mut(&key) {
            mode.on_exit();
        }
    }

    fn replace_internal(&mut self, old_key: K, new_key: K) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!("Mode {:?} not found in stack, skipping replacement", old_key);
            return;
        };
        if self.stack.contains(&new_key) {
            warn!("Mode {:?} is already in the stack, skipping replacement", new_key);
            return;
        }
        if !self.modes.contains_key(&new_key) {
            warn!("Attempted to replace with unregistered mode {:?}", new_key);
            return;
        }

        debug!("Replacing mode {:?} with {:?} at position {}", old_key, new_key, pos);
        if let Some(mode) = self.modes.get_mut(&old_key) {
            mode.on_exit();
        }
        self.stack[pos] = new_key;
        if let Some(mode) = self.modes.get_mut(&new_key) {
            mode.on_enter();
        }
    }

    fn clear_internal(&mut self) {
        debug!("Clearing all modes from stack");
        for key in self.stack.drain(..).rev() {
            if let Some(mode) = self.modes.get_mut(&key) {
                mode.on_exit();
            }
        }
    }

    fn collect_active_modes(&self) -> Vec<K> {
        let mut active = Vec::new();

        // Walk top-down, stopping after the first opaque mode
        for &key in self.stack.iter().rev() {
            active.push(key);
            if let Some(mode) = self.modes.get(&key) {
                if !mode.is_transparent() {
                    break;
                }
            }
        }

        active.reverse();
        active
    }
}

impl<K: ModeKey> Default for ModeStack<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Key {
        Tour,
        Pause,
        Credits,
    }

    impl ModeKey for Key {}

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        consumes: bool,
        transparent: bool,
        log: Log,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self { name, consumes: true, transparent: false, log: Rc::clone(log) }
        }

        fn transparent(mut self) -> Self {
            self.transparent = true;
            self
        }

        fn passive(mut self) -> Self {
            self.consumes = false;
            self
        }

        fn record(&self, what: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, what));
        }
    }

    impl Mode for Probe {
        fn handle_event(&mut self, _event: &InputEvent, _window_size: UVec2) -> bool {
            self.record("event");
            self.consumes
        }
        fn update(&mut self, _elapsed: f32) {
            self.record("update");
        }
        fn draw(&mut self, _drawable_size: UVec2) {
            self.record("draw");
        }
        fn on_enter(&mut self) {
            self.record("enter");
        }
        fn on_exit(&mut self) {
            self.record("exit");
        }
        fn is_transparent(&self) -> bool {
            self.transparent
        }
    }

    fn take(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.borrow_mut())
    }

    const SIZE: UVec2 = UVec2::new(800, 600);

    //=====================================================================
    // ModeTransition
    //=====================================================================

    #[test]
    fn transition_default_is_empty() {
        let transition: ModeTransition<Key> = ModeTransition::default();
        assert_eq!(transition, ModeTransition::Empty);
    }

    //=====================================================================
    // Registration & Lifecycle
    //=====================================================================

    #[test]
    fn register_default_enters_mode() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));

        assert_eq!(modes.stack(), &[Key::Tour]);
        assert_eq!(take(&log), ["tour:enter"]);
    }

    #[test]
    fn push_of_unregistered_mode_is_ignored() {
        let mut modes = ModeStack::<Key>::new();
        modes.request(ModeTransition::Push(Key::Pause));
        modes.process_transitions();
        assert!(modes.stack().is_empty());
    }

    #[test]
    fn transitions_apply_at_frame_boundary() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));
        modes.register_mode(Key::Pause, Probe::new("pause", &log));
        take(&log);

        modes.request(ModeTransition::Push(Key::Pause));
        assert_eq!(modes.top(), Some(Key::Tour), "Nothing changes before processing");

        modes.process_transitions();
        assert_eq!(modes.top(), Some(Key::Pause));
        assert_eq!(take(&log), ["pause:enter"]);
    }

    #[test]
    fn replace_swaps_in_place() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));
        modes.register_mode(Key::Credits, Probe::new("credits", &log));
        take(&log);

        modes.request(ModeTransition::Replace(Key::Tour, Key::Credits));
        modes.process_transitions();

        assert_eq!(modes.stack(), &[Key::Credits]);
        assert_eq!(take(&log), ["tour:exit", "credits:enter"]);
    }

    #[test]
    fn clear_exits_top_down() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));
        modes.register_default(Key::Pause, Probe::new("pause", &log).transparent());
        take(&log);

        modes.request(ModeTransition::Clear);
        modes.process_transitions();

        assert!(modes.stack().is_empty());
        assert_eq!(take(&log), ["pause:exit", "tour:exit"]);
    }

    //=====================================================================
    // Dispatch
    //=====================================================================

    #[test]
    fn opaque_top_hides_lower_modes() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));
        modes.register_default(Key::Credits, Probe::new("credits", &log));
        take(&log);

        modes.update(0.016);
        modes.draw(SIZE);
        assert_eq!(take(&log), ["credits:update", "credits:draw"]);
    }

    #[test]
    fn transparent_top_draws_over_lower_mode() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));
        modes.register_default(Key::Pause, Probe::new("pause", &log).transparent());
        take(&log);

        modes.draw(SIZE);
        assert_eq!(take(&log), ["tour:draw", "pause:draw"]);
    }

    #[test]
    fn events_stop_at_first_consumer() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log));
        modes.register_default(Key::Pause, Probe::new("pause", &log).transparent());
        take(&log);

        assert!(modes.handle_event(&InputEvent::key_down(KeyCode::ArrowUp), SIZE));
        assert_eq!(take(&log), ["pause:event"]);
    }

    #[test]
    fn unconsumed_events_fall_through() {
        let log = Log::default();
        let mut modes = ModeStack::new();
        modes.register_default(Key::Tour, Probe::new("tour", &log).passive());
        modes.register_default(Key::Pause, Probe::new("pause", &log).transparent().passive());
        take(&log);

        assert!(!modes.handle_event(&InputEvent::key_down(KeyCode::Space), SIZE));
        assert_eq!(take(&log), ["pause:event", "tour:event"]);
    }
}
