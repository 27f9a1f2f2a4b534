//=========================================================================
// Status Overlay
//=========================================================================
//
// Draws the status line centered near the bottom of a small virtual view:
// a black pass one pixel below a white pass, giving the text a drop
// shadow against any scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{U8Vec4, UVec2, Vec2};

//=== Internal Dependencies ===============================================

use crate::config::OverlayConfig;
use crate::core::scene::{OverlayView, Renderer};

const SHADOW: U8Vec4 = U8Vec4::new(0x00, 0x00, 0x00, 0xff);
const TEXT: U8Vec4 = U8Vec4::new(0xff, 0xff, 0xff, 0xff);

//=== StatusOverlay =======================================================

/// Lays out and draws one line of status text.
#[derive(Debug, Clone, Copy)]
pub struct StatusOverlay {
    view: OverlayView,
    scale: f32,
}

impl StatusOverlay {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            view: OverlayView::sized(config.view_size),
            scale: config.scale,
        }
    }

    /// Left edge that centers `text` in the view, snapped to whole pixels.
    pub fn centered_x<R: Renderer + ?Sized>(&self, renderer: &R, text: &str) -> f32 {
        let extents = renderer.text_extents(text, Vec2::ZERO, self.scale);
        (self.view.center_x() - extents.center_x()).round()
    }

    /// Draws `text` over whatever the renderer has already drawn.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, text: &str, drawable_size: UVec2) {
        renderer.begin_overlay(self.view, drawable_size);

        let x = self.centered_x(renderer, text);
        renderer.draw_text(text, Vec2::new(x, 1.0), self.scale, SHADOW);
        renderer.draw_text(text, Vec2::new(x, 2.0), self.scale, TEXT);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
