//! Scene rendering: animation, orbit camera and renderer-agnostic frame output.
//!
//! # Invariants
//! - Scene animation is a pure function of elapsed time and parameters.
//! - Renderers read frames; they never mutate scene or drawing state.
//! - The CPU wave functions and the GPU wave shader compute the same formula.

mod camera;
pub mod frame;
mod renderer;
pub mod scenes;

pub use camera::OrbitCamera;
pub use frame::Frame;
pub use renderer::{DebugTextRenderer, Renderer};
pub use scenes::{CubePose, WaveParams, WaveUniforms};
