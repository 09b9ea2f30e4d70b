use sceneswitch_common::{RayCamera, SceneKind};
use sceneswitch_drawing::{DrawOutcome, DrawingConfig, LineDrawing};
use sceneswitch_input::{PointerEvent, SurfaceRect};
use sceneswitch_render::{CubePose, Frame, WaveParams, WaveUniforms};

/// Per-scene state for whichever scene is on screen.
#[derive(Debug, Clone)]
enum ActiveScene {
    Cube,
    WavePlane,
    LineDrawing(LineDrawing),
}

impl ActiveScene {
    fn kind(&self) -> SceneKind {
        match self {
            Self::Cube => SceneKind::Cube,
            Self::WavePlane => SceneKind::WavePlane,
            Self::LineDrawing(_) => SceneKind::LineDrawing,
        }
    }
}

/// Application state shared by the desktop app and the CLI.
///
/// Holds the selected scene and the wave height, routes pointer input to the
/// drawing while it is on screen, and turns elapsed time into a [`Frame`].
/// Wave height outlives scene switches; a drawing does not.
#[derive(Debug, Clone)]
pub struct SceneShell {
    scene: ActiveScene,
    wave: WaveParams,
    drawing_config: DrawingConfig,
}

impl Default for SceneShell {
    fn default() -> Self {
        Self::new(SceneKind::default(), DrawingConfig::default())
    }
}

impl SceneShell {
    pub fn new(scene: SceneKind, drawing_config: DrawingConfig) -> Self {
        let mut shell = Self {
            scene: ActiveScene::Cube,
            wave: WaveParams::default(),
            drawing_config,
        };
        shell.select(scene);
        shell
    }

    pub fn scene(&self) -> SceneKind {
        self.scene.kind()
    }

    /// Switch scenes. Selecting the current scene keeps its state.
    pub fn select(&mut self, scene: SceneKind) {
        if scene == self.scene() {
            return;
        }
        self.scene = match scene {
            SceneKind::Cube => ActiveScene::Cube,
            SceneKind::WavePlane => ActiveScene::WavePlane,
            SceneKind::LineDrawing => {
                ActiveScene::LineDrawing(LineDrawing::with_config(self.drawing_config.clone()))
            }
        };
        tracing::info!(scene = %scene, "scene selected");
    }

    pub fn wave(&self) -> &WaveParams {
        &self.wave
    }

    /// The wave height control is only offered on the wave scene.
    pub fn shows_height_control(&self) -> bool {
        self.scene() == SceneKind::WavePlane
    }

    pub fn wave_height(&self) -> f32 {
        self.wave.height()
    }

    pub fn set_wave_height(&mut self, height: f32) {
        self.wave.set_height(height);
        tracing::debug!(height = self.wave.height(), "wave height set");
    }

    pub fn set_wave_height_text(&mut self, text: &str) {
        self.wave.set_height_text(text);
        tracing::debug!(height = self.wave.height(), input = text, "wave height set");
    }

    /// The active drawing, if the line-drawing scene is on screen.
    pub fn drawing(&self) -> Option<&LineDrawing> {
        match &self.scene {
            ActiveScene::LineDrawing(drawing) => Some(drawing),
            _ => None,
        }
    }

    /// Route a pointer event. Scenes other than line drawing ignore pointers.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        surface: &SurfaceRect,
        camera: &impl RayCamera,
    ) -> DrawOutcome {
        match &mut self.scene {
            ActiveScene::LineDrawing(drawing) => drawing.handle(event, surface, camera),
            _ => DrawOutcome::Ignored,
        }
    }

    /// Describe the frame to draw `elapsed` seconds after start.
    pub fn frame(&self, elapsed: f32) -> Frame<'_> {
        match &self.scene {
            ActiveScene::Cube => Frame::Cube(CubePose::at(elapsed)),
            ActiveScene::WavePlane => Frame::Wave(WaveUniforms {
                time: elapsed,
                height: self.wave.height(),
            }),
            ActiveScene::LineDrawing(drawing) => Frame::Lines(drawing.segments()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use sceneswitch_input::PointerButton;
    use sceneswitch_render::OrbitCamera;

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            button: PointerButton::Secondary,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn starts_on_cube() {
        let shell = SceneShell::default();
        assert_eq!(shell.scene(), SceneKind::Cube);
        assert_eq!(shell.wave_height(), 0.5);
        assert!(!shell.shows_height_control());
        assert!(shell.drawing().is_none());
    }

    #[test]
    fn height_control_only_on_wave() {
        let mut shell = SceneShell::default();
        shell.select(SceneKind::WavePlane);
        assert!(shell.shows_height_control());
        shell.select(SceneKind::LineDrawing);
        assert!(!shell.shows_height_control());
    }

    #[test]
    fn frame_follows_selected_scene() {
        let mut shell = SceneShell::default();
        assert_eq!(shell.frame(2.0), Frame::Cube(CubePose { x: 1.0, y: 1.0 }));

        shell.select(SceneKind::WavePlane);
        shell.set_wave_height(1.5);
        assert_eq!(
            shell.frame(0.0),
            Frame::Wave(WaveUniforms {
                time: 0.0,
                height: 1.5
            })
        );
    }

    #[test]
    fn wave_height_survives_scene_switch() {
        let mut shell = SceneShell::default();
        shell.set_wave_height(1.2);
        shell.select(SceneKind::LineDrawing);
        shell.select(SceneKind::WavePlane);
        assert!((shell.wave_height() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn malformed_height_text_falls_back_to_zero() {
        let mut shell = SceneShell::new(SceneKind::WavePlane, DrawingConfig::default());
        shell.set_wave_height_text("not a number");
        assert_eq!(shell.wave_height(), 0.0);
    }

    #[test]
    fn pointer_ignored_outside_drawing() {
        let mut shell = SceneShell::default();
        let surface = SurfaceRect::from_size(800.0, 600.0);
        let camera = OrbitCamera::default();
        let outcome = shell.handle_pointer(press(400.0, 300.0), &surface, &camera);
        assert_eq!(outcome, DrawOutcome::Ignored);
    }

    #[test]
    fn leaving_drawing_discards_segments() {
        let mut shell = SceneShell::new(SceneKind::LineDrawing, DrawingConfig::default());
        let surface = SurfaceRect::from_size(800.0, 600.0);
        let camera = OrbitCamera::default();
        shell.handle_pointer(press(400.0, 300.0), &surface, &camera);
        assert_eq!(shell.drawing().unwrap().segments().len(), 1);

        shell.select(SceneKind::LineDrawing);
        assert_eq!(shell.drawing().unwrap().segments().len(), 1);

        shell.select(SceneKind::Cube);
        shell.select(SceneKind::LineDrawing);
        let drawing = shell.drawing().unwrap();
        assert!(drawing.segments().is_empty());
        assert!(!drawing.is_dragging());
    }

    #[test]
    fn drawing_config_carries_into_new_drawings() {
        let config = DrawingConfig {
            max_segments: Some(3),
        };
        let mut shell = SceneShell::new(SceneKind::Cube, config);
        shell.select(SceneKind::LineDrawing);
        assert_eq!(shell.drawing().unwrap().config().max_segments, Some(3));
    }
}
