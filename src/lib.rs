pub mod fps;
pub mod frame_loop;
pub mod input;
pub mod movement;
pub mod palette;
pub mod shader_source;
pub mod state;

pub use frame_loop::{EventQueue, FrameLoop, FrameTarget};
pub use state::{AppState, FrameUniforms, InputEvent, LoopPhase};
