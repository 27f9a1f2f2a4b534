//=========================================================================
// Renderer Interface
//=========================================================================
//
// Drawing primitives the tour needs from the host: a frame clear, a scene
// draw through one camera, and sprite-atlas text for the status line.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{U8Vec4, UVec2, Vec2, Vec4};

//=== Internal Dependencies ===============================================

use super::Camera;

//=== TextExtents =========================================================

/// Pixel bounds of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtents {
    pub min: Vec2,
    pub max: Vec2,
}

impl TextExtents {
    /// Horizontal midpoint of the bounds.
    pub fn center_x(&self) -> f32 {
        0.5 * (self.max.x + self.min.x)
    }
}

//=== OverlayView =========================================================

/// Virtual pixel rectangle mapped onto the drawable for text.
///
/// The host scales the view to the drawable so that virtual pixels land
/// on whole device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayView {
    pub min: Vec2,
    pub max: Vec2,
}

impl OverlayView {
    /// View spanning `(0, 0)` to `size`.
    pub fn sized(size: UVec2) -> Self {
        Self {
            min: Vec2::ZERO,
            max: size.as_vec2(),
        }
    }

    /// Horizontal center of the view.
    pub fn center_x(&self) -> f32 {
        0.5 * (self.min.x + self.max.x)
    }
}

//=== Renderer ============================================================

/// Host renderer consumed by the observe mode.
///
/// Calls arrive in frame order: `clear`, `draw_scene`, then
/// `begin_overlay` followed by any number of text calls. Depth testing
/// for the scene and standard alpha blending for the overlay are the
/// host's responsibility.
pub trait Renderer {
    /// Clears color and depth.
    fn clear(&mut self, color: Vec4);

    /// Draws every drawable in the scene through `camera`.
    fn draw_scene(&mut self, camera: &Camera);

    /// Switches to the text overlay for the rest of the frame.
    fn begin_overlay(&mut self, view: OverlayView, drawable_size: UVec2);

    /// Measures `text` anchored at `anchor`.
    fn text_extents(&self, text: &str, anchor: Vec2, scale: f32) -> TextExtents;

    /// Draws `text` with its baseline origin at `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Vec2, scale: f32, color: U8Vec4);
}
