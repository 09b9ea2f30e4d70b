use std::fmt::Write;

use crate::camera::OrbitCamera;
use crate::frame::Frame;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a frame description and a camera and produces output.
/// It never feeds back into scene state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame<'_>, camera: &OrbitCamera) -> Self::Output;
}

/// Text renderer for headless use.
///
/// Produces a human-readable description of the frame. Used by the CLI and
/// for testing the render interface without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame<'_>, camera: &OrbitCamera) -> String {
        let mut out = String::new();
        let eye = camera.position();
        let _ = writeln!(out, "=== Scene: {} ===", frame.scene().label());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) fov={:.0}",
            eye.x,
            eye.y,
            eye.z,
            camera.fov.to_degrees()
        );

        match frame {
            Frame::Cube(pose) => {
                let _ = writeln!(out, "Cube rotation: x={:.3} y={:.3} rad", pose.x, pose.y);
            }
            Frame::Wave(uniforms) => {
                let _ = writeln!(
                    out,
                    "Wave: time={:.3} height={:.2}",
                    uniforms.time, uniforms.height
                );
            }
            Frame::Lines(segments) => {
                let _ = writeln!(out, "Segments: {}", segments.len());
                for s in segments.iter() {
                    let m = s.midpoint();
                    let _ = writeln!(
                        out,
                        "  [{}] ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2}) mid=({:.2}, {:.2}, {:.2})",
                        s.id, s.start.x, s.start.y, s.start.z, s.end.x, s.end.y, s.end.z, m.x, m.y, m.z
                    );
                }
            }
        }

        out
    }
}
