//! wgpu render backend for the scene switcher.
//!
//! Draws the lit spinning cube, the shader-displaced wave plane, and drawn
//! segments as lines with a marker cube at each midpoint.
//!
//! # Invariants
//! - Renderer never mutates scene or drawing state.
//! - Per-segment GPU data is rebuilt from the segment list every frame.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, GpuError};
pub use gpu::WgpuRenderer;
