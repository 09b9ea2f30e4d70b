use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use glam::Vec2;
use sceneswitch_common::SceneKind;
use sceneswitch_drawing::{DrawOutcome, DrawingConfig};
use sceneswitch_input::{PointerButton, PointerEvent, SurfaceRect};
use sceneswitch_render::scenes::{wave_color, wave_offset};
use sceneswitch_render::{DebugTextRenderer, OrbitCamera, Renderer};
use sceneswitch_shell::SceneShell;
use sceneswitch_tools::DrawingInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sceneswitch-cli", about = "Headless scene switcher operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available scenes
    Scenes,
    /// Print the cube pose at a point in time
    Cube {
        /// Elapsed seconds
        #[arg(short, long, default_value = "0")]
        time: f32,
    },
    /// Sample the wave displacement across the plane's centre row
    Wave {
        /// Elapsed seconds
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Wave height; anything unparsable counts as 0
        #[arg(long, default_value = "0.5")]
        height: String,
        /// Number of samples from the left edge to the right edge
        #[arg(short, long, default_value = "11")]
        samples: usize,
    },
    /// Replay a right-button drag and print the resulting segment
    Draw {
        /// Press position in NDC, as X,Y
        #[arg(long, value_parser = parse_point, default_value = "0,0")]
        from: Vec2,
        /// Release position in NDC, as X,Y
        #[arg(long, value_parser = parse_point, default_value = "0.5,0.5")]
        to: Vec2,
        /// Intermediate pointer moves between press and release
        #[arg(long, default_value = "1")]
        moves: usize,
        /// Surface width in pixels
        #[arg(long, default_value = "800")]
        width: f32,
        /// Surface height in pixels
        #[arg(long, default_value = "600")]
        height: f32,
        /// Emit the segments as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_point(s: &str) -> Result<Vec2> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y but got {s:?}"))?;
    let x: f32 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f32 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let renderer = DebugTextRenderer::new();

    match cli.command {
        Commands::Scenes => {
            for kind in SceneKind::ALL {
                println!("{:<14} {}", kind.as_str(), kind.label());
            }
        }
        Commands::Cube { time } => {
            let shell = SceneShell::new(SceneKind::Cube, DrawingConfig::default());
            print!("{}", renderer.render(&shell.frame(time), &OrbitCamera::default()));
        }
        Commands::Wave {
            time,
            height,
            samples,
        } => {
            let mut shell = SceneShell::new(SceneKind::WavePlane, DrawingConfig::default());
            shell.set_wave_height_text(&height);
            print!("{}", renderer.render(&shell.frame(time), &OrbitCamera::default()));

            let samples = samples.max(2);
            for i in 0..samples {
                let u = i as f32 / (samples - 1) as f32;
                let uv = Vec2::new(u, 0.5);
                let c = wave_color(uv, time);
                println!(
                    "  u={u:.2} z_offset={:+.4} color=({:.3}, {:.3}, {:.3})",
                    wave_offset(uv, time, shell.wave_height()),
                    c.x,
                    c.y,
                    c.z
                );
            }
        }
        Commands::Draw {
            from,
            to,
            moves,
            width,
            height,
            json,
        } => {
            if width <= 0.0 || height <= 0.0 {
                bail!("surface size must be positive, got {width}x{height}");
            }
            let surface = SurfaceRect::from_size(width, height);
            let camera = OrbitCamera {
                aspect: surface.aspect(),
                ..OrbitCamera::default()
            };
            let mut shell = SceneShell::new(SceneKind::LineDrawing, DrawingConfig::default());

            let mut events = vec![PointerEvent::Down {
                button: PointerButton::Secondary,
                position: surface.from_ndc(from),
            }];
            let moves = moves.max(1);
            for step in 1..=moves {
                let ndc = from.lerp(to, step as f32 / moves as f32);
                events.push(PointerEvent::Move {
                    position: surface.from_ndc(ndc),
                });
            }
            events.push(PointerEvent::Up {
                button: PointerButton::Secondary,
            });

            for event in events {
                let outcome = shell.handle_pointer(event, &surface, &camera);
                if outcome == DrawOutcome::Missed {
                    tracing::warn!(?event, "pointer ray missed its plane");
                }
            }

            let drawing = shell
                .drawing()
                .context("line drawing scene is not active")?;
            if json {
                println!("{}", serde_json::to_string_pretty(drawing.segments())?);
            } else {
                print!("{}", renderer.render(&shell.frame(0.0), &camera));
                println!("{}", DrawingInspector::summary(drawing));
                for info in DrawingInspector::list_segments(drawing) {
                    println!("{info}");
                }
            }
        }
    }

    Ok(())
}
