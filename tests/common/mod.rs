//=========================================================================
// Shared Test Collaborators
//=========================================================================

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::{U8Vec4, UVec2, Vec2, Vec3, Vec4};
use observe_tour::audio::{AudioCommand, ChannelVoice};
use observe_tour::prelude::*;

//--- Logging ---------------------------------------------------------------

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//--- Scene -----------------------------------------------------------------

/// Cameras `cam0..camN`, each at `(i, 0, 0)` with a distinct right vector.
pub fn scene(len: usize) -> Vec<Camera> {
    (0..len)
        .map(|i| {
            let angle = i as f32 * 0.5;
            let right = Vec3::new(angle.cos(), angle.sin(), 0.0);
            let transform = Transform::from_axes(Vec3::new(i as f32, 0.0, 0.0), right, Vec3::Z, right.cross(Vec3::Z));
            Camera::new(format!("cam{}", i), transform)
        })
        .collect()
}

//--- Renderer --------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RenderLog {
    pub clears: Vec<Vec4>,
    pub cameras: Vec<String>,
    pub aspects: Vec<f32>,
    pub texts: Vec<(String, Vec2, U8Vec4)>,
}

/// Renderer that records every call into a shared log.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub log: Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn last_camera(&self) -> Option<String> {
        self.log.borrow().cameras.last().cloned()
    }

    pub fn last_text(&self) -> Option<String> {
        self.log.borrow().texts.last().map(|(text, _, _)| text.clone())
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Vec4) {
        self.log.borrow_mut().clears.push(color);
    }

    fn draw_scene(&mut self, camera: &Camera) {
        let mut log = self.log.borrow_mut();
        log.cameras.push(camera.name.clone());
        log.aspects.push(camera.aspect);
    }

    fn begin_overlay(&mut self, _view: OverlayView, _drawable_size: UVec2) {}

    fn text_extents(&self, text: &str, anchor: Vec2, scale: f32) -> TextExtents {
        TextExtents {
            min: anchor,
            max: anchor + Vec2::new(text.chars().count() as f32 * 6.0 * scale, 8.0 * scale),
        }
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, _scale: f32, color: U8Vec4) {
        self.log.borrow_mut().texts.push((text.to_owned(), anchor, color));
    }
}

//--- Harness ---------------------------------------------------------------

pub const WINDOW: UVec2 = UVec2::new(1280, 720);

pub struct Tour {
    pub mode: ObserveMode<ChannelVoice, RecordingRenderer>,
    pub renderer: RecordingRenderer,
    pub mixer: Mixer,
    pub listener: SharedListener,
}

impl Tour {
    pub fn new(cameras: usize) -> Self {
        init_logging();
        let config = TourConfig::default();
        let listener = SharedListener::new();
        let (audio, commands) = channel(config.audio_queue_capacity);
        let mixer = Mixer::new(commands, listener.clone());
        let renderer = RecordingRenderer::default();

        let mode = ObserveMode::new(
            &scene(cameras),
            &audio,
            &Sample::new("bgm.wav"),
            listener.clone(),
            renderer.clone(),
            config,
        )
        .expect("non-empty scene");

        Self { mode, renderer, mixer, listener }
    }

    /// Host frame: inputs, then update, then draw.
    pub fn frame(&mut self, keys: &[KeyCode]) -> Vec<bool> {
        let consumed = keys
            .iter()
            .map(|&key| self.mode.handle_event(&InputEvent::key_down(key), WINDOW))
            .collect();
        self.mode.update(1.0 / 60.0);
        self.mode.draw(WINDOW);
        consumed
    }
}

pub fn drain(commands: &crossbeam_channel::Receiver<AudioCommand>) -> Vec<AudioCommand> {
    commands.try_iter().collect()
}
