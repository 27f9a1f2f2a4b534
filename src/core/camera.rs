//=========================================================================
// Camera Ring
//=========================================================================
//
// Fixed-order, circular collection of scene cameras with a "current"
// selection that steps left and right with wrap-around.
//
// Architecture:
//   CameraRing
//     ├─ cameras: Vec<Camera>   (order fixed at construction)
//     ├─ current: usize         (the only thing that ever moves)
//     └─ counters: StepCounters (forward/backward steps taken)
//
// Ordering contract:
//   Ring index i holds the camera for tour position i. `from_scene`
//   establishes this from the scene's authored order: the scene's first
//   camera is the initial head and position 0 is one step behind it, so
//   the authored list is rotated right by one and the head starts at 1.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::scene::{Camera, SceneProvider};
use crate::error::{TourError, TourResult};

//=== Step ================================================================

/// One move of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Toward higher indices, wrapping from last to first.
    Forward,
    /// Toward lower indices, wrapping from first to last.
    Backward,
}

//=== StepCounters ========================================================

/// Running totals of steps taken since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub forward: u64,
    pub backward: u64,
}

impl StepCounters {
    /// Total steps in either direction.
    pub fn total(&self) -> u64 {
        self.forward + self.backward
    }

    /// Steps taken in the direction of `step`.
    pub fn get(&self, step: Step) -> u64 {
        match step {
            Step::Forward => self.forward,
            Step::Backward => self.backward,
        }
    }
}

//=== CameraRing ==========================================================

/// Circular camera selection.
///
/// Membership and order never change after construction; only the
/// current index is rebound. The ring is never empty.
#[derive(Debug, Clone)]
pub struct CameraRing {
    cameras: Vec<Camera>,
    current: usize,
    counters: StepCounters,
}

impl CameraRing {
    //--- Construction -----------------------------------------------------

    /// Creates a ring over `cameras` with the first camera current.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoCameras`] if `cameras` is empty.
    pub fn new(cameras: Vec<Camera>) -> TourResult<Self> {
        Self::with_head(cameras, 0)
    }

    /// Creates a ring with `head` (taken modulo the ring length) current.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoCameras`] if `cameras` is empty.
    pub fn with_head(cameras: Vec<Camera>, head: usize) -> TourResult<Self> {
        if cameras.is_empty() {
            return Err(TourError::NoCameras);
        }
        let current = head % cameras.len();
        Ok(Self {
            cameras,
            current,
            counters: StepCounters::default(),
        })
    }

    /// Snapshots the scene's cameras in position order.
    ///
    /// The scene's first camera becomes the initial head. After the
    /// observe mode's initial alignment (one backward step) the ring sits
    /// at index 0, which holds the scene's last camera.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoCameras`] if the scene has no cameras.
    pub fn from_scene<S: SceneProvider + ?Sized>(scene: &S) -> TourResult<Self> {
        let mut cameras = scene.cameras().to_vec();
        if cameras.is_empty() {
            return Err(TourError::NoCameras);
        }
        cameras.rotate_right(1);
        let ring = Self::with_head(cameras, 1)?;
        debug!(
            target: "tour",
            "Camera ring built with {} cameras, head {:?}",
            ring.len(),
            ring.current().name
        );
        Ok(ring)
    }

    //--- Stepping ---------------------------------------------------------

    /// Moves the current selection by one, wrapping at either end.
    pub fn step(&mut self, step: Step) {
        let len = self.cameras.len();
        self.current = match step {
            Step::Forward => {
                self.counters.forward += 1;
                (self.current + 1) % len
            }
            Step::Backward => {
                self.counters.backward += 1;
                (self.current + len - 1) % len
            }
        };
        trace!(target: "tour", "Ring {:?} -> index {}", step, self.current);
    }

    /// Applies `step` exactly `count` times.
    pub fn advance(&mut self, count: usize, step: Step) {
        let target = self.counters.get(step) + count as u64;
        self.advance_to(target, step);
    }

    /// Steps in one direction until that direction's step counter reaches
    /// `target`.
    ///
    /// Returns the number of steps taken; a target the counter has already
    /// reached takes none.
    pub fn advance_to(&mut self, target: u64, step: Step) -> usize {
        let mut taken = 0;
        while self.counters.get(step) < target {
            self.step(step);
            taken += 1;
        }
        taken
    }

    //--- Queries ----------------------------------------------------------

    /// Index of the current camera.
    pub fn index(&self) -> usize {
        self.current
    }

    /// The current camera.
    pub fn current(&self) -> &Camera {
        &self.cameras[self.current]
    }

    /// Mutable access to the current camera, for per-frame aspect updates.
    pub fn current_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.current]
    }

    /// Camera at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Camera> {
        self.cameras.get(index)
    }

    /// Number of cameras (never zero).
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Steps taken so far.
    pub fn counters(&self) -> StepCounters {
        self.counters
    }

    /// Cameras in ring order.
    pub fn iter(&self) -> impl Iterator<Item = &Camera> {
        self.cameras.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::Transform;

    //--- Test Helpers -----------------------------------------------------

    fn cameras(names: &[&str]) -> Vec<Camera> {
        names
            .iter()
            .map(|name| Camera::new(*name, Transform::default()))
            .collect()
    }

    fn ring(len: usize) -> CameraRing {
        let names: Vec<String> = (0..len).map(|i| format!("cam{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        CameraRing::new(cameras(&refs)).unwrap()
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn empty_ring_is_rejected() {
        assert_eq!(CameraRing::new(Vec::new()).unwrap_err(), TourError::NoCameras);
        assert_eq!(
            CameraRing::from_scene(&Vec::<Camera>::new()).unwrap_err(),
            TourError::NoCameras
        );
    }

    #[test]
    fn new_starts_at_first_camera() {
        let ring = ring(3);
        assert_eq!(ring.index(), 0);
        assert_eq!(ring.current().name, "cam0");
        assert_eq!(ring.counters(), StepCounters::default());
    }

    #[test]
    fn with_head_wraps_head() {
        let ring = CameraRing::with_head(cameras(&["a", "b"]), 3).unwrap();
        assert_eq!(ring.index(), 1);
    }

    #[test]
    fn from_scene_rotates_last_camera_to_front() {
        let scene = cameras(&["first", "second", "third", "fourth", "last"]);
        let ring = CameraRing::from_scene(&scene).unwrap();

        let order: Vec<&str> = ring.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, ["last", "first", "second", "third", "fourth"]);
        assert_eq!(ring.current().name, "first", "Scene's first camera is the head");
        assert_eq!(ring.index(), 1);
    }

    #[test]
    fn from_scene_single_camera() {
        let scene = cameras(&["only"]);
        let ring = CameraRing::from_scene(&scene).unwrap();
        assert_eq!(ring.index(), 0);
        assert_eq!(ring.current().name, "only");
    }

    //=====================================================================
    // Stepping
    //=====================================================================

    #[test]
    fn forward_wraps_last_to_first() {
        let mut ring = ring(3);
        ring.advance(2, Step::Forward);
        assert_eq!(ring.index(), 2);
        ring.step(Step::Forward);
        assert_eq!(ring.index(), 0);
    }

    #[test]
    fn backward_wraps_first_to_last() {
        let mut ring = ring(3);
        ring.step(Step::Backward);
        assert_eq!(ring.index(), 2);
        assert_eq!(ring.current().name, "cam2");
    }

    #[test]
    fn single_camera_steps_in_place() {
        let mut ring = ring(1);
        ring.step(Step::Forward);
        ring.step(Step::Backward);
        assert_eq!(ring.index(), 0);
        assert_eq!(ring.counters().total(), 2);
    }

    #[test]
    fn counters_track_direction() {
        let mut ring = ring(4);
        ring.advance(3, Step::Forward);
        ring.advance(5, Step::Backward);
        assert_eq!(ring.counters(), StepCounters { forward: 3, backward: 5 });
    }

    #[test]
    fn full_lap_returns_to_start() {
        let mut ring = ring(5);
        ring.advance(5, Step::Backward);
        assert_eq!(ring.index(), 0);
    }

    #[test]
    fn advance_to_walks_counter_to_target() {
        let scene = cameras(&["a", "b", "c", "d", "e"]);
        let mut ring = CameraRing::from_scene(&scene).unwrap();
        assert_eq!(ring.index(), 1);

        assert_eq!(ring.advance_to(2, Step::Forward), 2);
        assert_eq!(ring.index(), 3);
        assert_eq!(ring.counters(), StepCounters { forward: 2, backward: 0 });
    }

    #[test]
    fn advance_to_is_cumulative_per_direction() {
        let mut ring = ring(3);
        assert_eq!(ring.advance_to(4, Step::Forward), 4, "Wraps 0 -> 1 -> 2 -> 0 -> 1");
        assert_eq!(ring.index(), 1);
        assert_eq!(ring.advance_to(3, Step::Forward), 0, "Counter already past target");
        assert_eq!(ring.advance_to(1, Step::Backward), 1);
        assert_eq!(ring.index(), 0);
    }

    #[test]
    fn counters_get_by_direction() {
        let counters = StepCounters { forward: 2, backward: 7 };
        assert_eq!(counters.get(Step::Forward), 2);
        assert_eq!(counters.get(Step::Backward), 7);
    }

    #[test]
    fn current_mut_changes_only_current() {
        let mut ring = ring(2);
        ring.current_mut().aspect = 1.5;
        assert_eq!(ring.get(0).unwrap().aspect, 1.5);
        assert_eq!(ring.get(1).unwrap().aspect, 1.0);
        assert!(ring.get(2).is_none());
    }
}
