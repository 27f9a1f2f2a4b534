//=========================================================================
// Listener
//=========================================================================
//
// The audio listener pose shared between the controller and the mixer.
//
// Position and right vector are read together by the mixer, so they are
// written together: every access goes through one mutex, and the guard
// releases it on every exit path.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::{Mat4, Vec3};

//=== Listener ============================================================

/// Listener pose in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listener {
    pub position: Vec3,
    /// Unit-ish vector toward the listener's right ear.
    pub right: Vec3,
}

impl Default for Listener {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            right: Vec3::X,
        }
    }
}

//=== SharedListener ======================================================

/// Cloneable handle to the listener pose.
#[derive(Debug, Clone, Default)]
pub struct SharedListener {
    inner: Arc<Mutex<Listener>>,
}

impl SharedListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the audio lock.
    ///
    /// A writer that panicked mid-update cannot leave a torn pose behind
    /// (both fields are plain copies), so poisoning is cleared rather than
    /// propagated.
    pub fn lock(&self) -> ListenerGuard<'_> {
        ListenerGuard {
            guard: self.inner.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Writes position (column 3) and right vector (column 0) of a world
    /// frame in a single critical section.
    pub fn set_pose_from_frame(&self, frame: &Mat4) {
        let mut listener = self.lock();
        listener.set_position(frame.w_axis.truncate());
        listener.set_right(frame.x_axis.truncate());
    }

    /// Copies the pose out under the lock.
    pub fn snapshot(&self) -> Listener {
        *self.lock()
    }
}

//=== ListenerGuard =======================================================

/// Scoped access to the listener; the lock is released on drop.
pub struct ListenerGuard<'a> {
    guard: MutexGuard<'a, Listener>,
}

impl ListenerGuard<'_> {
    pub fn set_position(&mut self, position: Vec3) {
        self.guard.position = position;
    }

    pub fn set_right(&mut self, right: Vec3) {
        self.guard.right = right;
    }
}

impl Deref for ListenerGuard<'_> {
    type Target = Listener;

    fn deref(&self) -> &Listener {
        &self.guard
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
