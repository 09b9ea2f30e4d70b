use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec2;
use sceneswitch_common::SceneKind;
use sceneswitch_drawing::DrawingConfig;
use sceneswitch_input::{PointerButton, PointerEvent, SurfaceRect};
use sceneswitch_render::{OrbitCamera, WaveParams};
use sceneswitch_render_wgpu::{GpuContext, WgpuRenderer};
use sceneswitch_shell::SceneShell;
use sceneswitch_tools::DrawingInspector;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "sceneswitch-desktop", about = "Interactive 3D scene switcher")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene shown at startup: cube, wave_plane or line_drawing
    #[arg(long, default_value = "cube")]
    scene: SceneKind,

    /// Initial wave height; anything unparsable counts as 0
    #[arg(long)]
    wave_height: Option<String>,

    /// Stop accepting new lines after this many (unbounded by default)
    #[arg(long)]
    max_segments: Option<usize>,
}

/// Pixels of wheel travel per zoom step on touchpads.
const PIXELS_PER_ZOOM_STEP: f32 = 50.0;

/// Application state.
struct AppState {
    shell: SceneShell,
    camera: OrbitCamera,
    surface: SurfaceRect,
    // Input state
    cursor: Vec2,
    orbiting: bool,
    started: Instant,
}

impl AppState {
    fn new(cli: &Cli) -> Self {
        let mut shell = SceneShell::new(
            cli.scene,
            DrawingConfig {
                max_segments: cli.max_segments,
            },
        );
        if let Some(text) = &cli.wave_height {
            shell.set_wave_height_text(text);
        }

        Self {
            shell,
            camera: OrbitCamera::default(),
            surface: SurfaceRect::from_size(1280.0, 720.0),
            cursor: Vec2::ZERO,
            orbiting: false,
            started: Instant::now(),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface = SurfaceRect::from_size(width as f32, height as f32);
        self.camera.aspect = self.surface.aspect();
    }

    fn pointer(&mut self, event: PointerEvent) {
        let outcome = self.shell.handle_pointer(event, &self.surface, &self.camera);
        tracing::trace!(?event, ?outcome, "pointer");
    }

    fn cursor_moved(&mut self, position: Vec2) {
        if self.orbiting {
            self.camera.orbit(position - self.cursor, self.surface.height);
        }
        self.cursor = position;
        self.pointer(PointerEvent::Move { position });
    }

    fn mouse_input(&mut self, button: MouseButton, pressed: bool) {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            _ => return,
        };
        if button == PointerButton::Primary {
            self.orbiting = pressed;
        }
        let event = if pressed {
            PointerEvent::Down {
                button,
                position: self.cursor,
            }
        } else {
            PointerEvent::Up { button }
        };
        self.pointer(event);
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        egui::Window::new("Scene")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let mut selected = self.shell.scene();
                egui::ComboBox::from_id_salt("scene_select")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for kind in SceneKind::ALL {
                            ui.selectable_value(&mut selected, kind, kind.label());
                        }
                    });
                if selected != self.shell.scene() {
                    self.shell.select(selected);
                }

                if self.shell.shows_height_control() {
                    ui.separator();
                    let mut height = self.shell.wave_height();
                    let slider = egui::Slider::new(
                        &mut height,
                        WaveParams::MIN_HEIGHT..=WaveParams::MAX_HEIGHT,
                    )
                    .step_by(WaveParams::HEIGHT_STEP as f64)
                    .text("Wave Height");
                    if ui.add(slider).changed() {
                        self.shell.set_wave_height(height);
                    }
                }

                if let Some(drawing) = self.shell.drawing() {
                    ui.separator();
                    ui.label(DrawingInspector::summary(drawing).to_string());
                }

                ui.separator();
                ui.small("LMB: Orbit | Wheel: Zoom | RMB: Draw (Line Drawing)");
            });
    }
}

/// Window plus everything that needs a live GPU.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    state: AppState,
    graphics: Option<Graphics>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            graphics: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let attrs = Window::default_attributes()
            .with_title("Scene Switcher")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height)?;
        let renderer = WgpuRenderer::new(&gpu.device, gpu.surface_format(), size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.surface_format(), None, 1, false);

        Ok(Graphics {
            window,
            gpu,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let Some(gfx) = self.graphics.as_mut() else {
            return;
        };
        let Some(output) = gfx.gpu.acquire() else {
            return;
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let elapsed = self.state.started.elapsed().as_secs_f32();
        let frame = self.state.shell.frame(elapsed);
        gfx.renderer.render(
            &gfx.gpu.device,
            &gfx.gpu.queue,
            &view,
            &self.state.camera,
            &frame,
        );

        let raw_input = gfx.egui_winit.take_egui_input(&gfx.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.state.draw_ui(ctx);
        });
        gfx.egui_winit
            .handle_platform_output(&gfx.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = gfx.gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let device = &gfx.gpu.device;
        let queue = &gfx.gpu.queue;
        for (id, image_delta) in &full_output.textures_delta.set {
            gfx.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        gfx.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gfx.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gfx.egui_renderer.free_texture(id);
        }

        output.present();
        gfx.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(gfx) => {
                let size = gfx.window.inner_size();
                self.state.resize(size.width, size.height);
                self.graphics = Some(gfx);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gfx) = &mut self.graphics {
            let response = gfx.egui_winit.on_window_event(&gfx.window, &event);
            // Releases always reach the scene so a drag cannot outlive the button.
            let is_release = matches!(
                event,
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                }
            );
            if response.consumed && !is_release {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.gpu.resize(new_size.width, new_size.height);
                    let (width, height) = gfx.gpu.size();
                    gfx.renderer.resize(&gfx.gpu.device, width, height);
                    self.state.resize(width, height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state
                    .cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                button,
                state: btn_state,
                ..
            } => {
                self.state
                    .mouse_input(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_ZOOM_STEP,
                };
                self.state.camera.zoom(steps);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.graphics {
            gfx.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!(scene = %cli.scene, "sceneswitch-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(AppState::new(&cli));
    event_loop.run_app(&mut app)?;

    Ok(())
}
