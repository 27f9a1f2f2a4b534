//=========================================================================
// Scene Interface
//=========================================================================
//
// The narrow slice of the host's scene and renderer that the tour
// consumes.
//
// Architecture:
//   Host scene (meshes, drawables, loaded cameras)
//     ├─ SceneProvider::cameras()  → CameraRing snapshot at construction
//     └─ Renderer                  → clear, draw with current camera, text
//
// Asset loading and GPU state remain the host's business. Cameras are
// copied out once, so the controller never aliases host storage.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat4, Vec3};

//=== Module Declarations =================================================

mod render;

//=== Public API ==========================================================

pub use render::{OverlayView, Renderer, TextExtents};

//=== Transform ===========================================================

/// World placement of a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    local_to_world: Mat4,
}

impl Transform {
    /// Wraps a local-to-world matrix.
    pub fn new(local_to_world: Mat4) -> Self {
        Self { local_to_world }
    }

    /// Places a node at `position` with columns `right`, `up` and `back`.
    pub fn from_axes(position: Vec3, right: Vec3, up: Vec3, back: Vec3) -> Self {
        Self::new(Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            back.extend(0.0),
            position.extend(1.0),
        ))
    }

    /// Places an axis-aligned node at `position`.
    pub fn from_translation(position: Vec3) -> Self {
        Self::new(Mat4::from_translation(position))
    }

    /// Returns the local-to-world matrix.
    pub fn make_local_to_world(&self) -> Mat4 {
        self.local_to_world
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

//=== Camera ==============================================================

/// A camera authored in the scene.
///
/// Only `aspect` changes at runtime; the renderer updates it to the
/// drawable size every frame before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub name: String,
    pub transform: Transform,
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Near clip distance (infinite far plane).
    pub near: f32,
    /// Width over height.
    pub aspect: f32,
}

impl Camera {
    /// Creates a camera with the scene defaults (60 degree fov).
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            fovy: 60.0_f32.to_radians(),
            near: 0.01,
            aspect: 1.0,
        }
    }

    /// Returns the camera's world frame.
    ///
    /// Column 0 is the right vector and column 3 the position.
    pub fn make_local_to_world(&self) -> Mat4 {
        self.transform.make_local_to_world()
    }

    /// World-space position of the camera.
    pub fn position(&self) -> Vec3 {
        self.make_local_to_world().w_axis.truncate()
    }

    /// Builds the clip-from-world matrix for the current aspect.
    pub fn make_projection(&self) -> Mat4 {
        Mat4::perspective_infinite_rh(self.fovy, self.aspect, self.near)
    }
}

//=== SceneProvider =======================================================

/// Source of the scene's cameras in authored order.
pub trait SceneProvider {
    /// Cameras in the order they were loaded.
    fn cameras(&self) -> &[Camera];
}

impl SceneProvider for Vec<Camera> {
    fn cameras(&self) -> &[Camera] {
        self
    }
}

impl SceneProvider for [Camera] {
    fn cameras(&self) -> &[Camera] {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
