use cgmath::Vector4;

use crate::input::{KeyCode, KeyState, KeyTransition};
use crate::movement::{update_position, Position};
use crate::palette::{select_preset, Color};

/// Input delivered by the windowing layer, queued until the next frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { code: KeyCode, pressed: bool },
    /// The window was asked to close by the platform.
    CloseRequested,
}

impl InputEvent {
    pub fn press(code: KeyCode) -> Self {
        Self::Key {
            code,
            pressed: true,
        }
    }

    pub fn release(code: KeyCode) -> Self {
        Self::Key {
            code,
            pressed: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    ClosingRequested,
    Terminated,
}

/// Values written to the shader uniforms for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    pub color: Vector4<f32>,
    pub position: Vector4<f32>,
}

/// Everything the frame loop mutates.
pub struct AppState {
    pub keys: KeyState,
    pub position: Position,
    pub color: Color,
    pub wireframe: bool,
    pub phase: LoopPhase,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            keys: KeyState::new(),
            position: Position::default(),
            color: Color::default(),
            wireframe: false,
            phase: LoopPhase::Running,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { code, pressed } => {
                if self.keys.set_key(code, pressed) == KeyTransition::Pressed {
                    self.on_press(code);
                }
            }
            InputEvent::CloseRequested => self.request_close(),
        }
    }

    fn on_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::ESCAPE => self.request_close(),
            KeyCode::W => {
                self.wireframe = !self.wireframe;
                log::debug!("wireframe {}", if self.wireframe { "on" } else { "off" });
            }
            _ => {
                if let Some(color) = code.digit().and_then(select_preset) {
                    self.color = color;
                }
            }
        }
    }

    pub fn request_close(&mut self) {
        if self.phase == LoopPhase::Running {
            self.phase = LoopPhase::ClosingRequested;
        }
    }

    /// Per-frame movement step.
    pub fn advance(&mut self) {
        update_position(&self.keys, &mut self.position);
    }

    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            color: self.color.to_vec4(),
            position: self.position.to_vec4(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
