//! End-to-end pointer sessions through the shell with the default orbit camera.

use glam::Vec2;
use sceneswitch_common::{Plane, SceneKind, SegmentId};
use sceneswitch_drawing::{DrawOutcome, DrawingConfig};
use sceneswitch_input::{PointerButton, PointerEvent, SurfaceRect};
use sceneswitch_render::{Frame, OrbitCamera};
use sceneswitch_shell::SceneShell;

fn surface() -> SurfaceRect {
    SurfaceRect::from_size(800.0, 600.0)
}

fn camera() -> OrbitCamera {
    OrbitCamera {
        aspect: surface().aspect(),
        ..OrbitCamera::default()
    }
}

fn drag(shell: &mut SceneShell, from: Vec2, to: Vec2) -> Vec<DrawOutcome> {
    let surface = surface();
    let camera = camera();
    vec![
        shell.handle_pointer(
            PointerEvent::Down {
                button: PointerButton::Secondary,
                position: surface.from_ndc(from),
            },
            &surface,
            &camera,
        ),
        shell.handle_pointer(
            PointerEvent::Move {
                position: surface.from_ndc(to),
            },
            &surface,
            &camera,
        ),
        shell.handle_pointer(
            PointerEvent::Up {
                button: PointerButton::Secondary,
            },
            &surface,
            &camera,
        ),
    ]
}

#[test]
fn drag_center_to_upper_right() {
    let mut shell = SceneShell::new(SceneKind::LineDrawing, DrawingConfig::default());
    let outcomes = drag(&mut shell, Vec2::ZERO, Vec2::new(0.5, 0.5));
    assert_eq!(
        outcomes,
        vec![
            DrawOutcome::Started(SegmentId(0)),
            DrawOutcome::Extended(SegmentId(0)),
            DrawOutcome::Finished(SegmentId(0)),
        ]
    );

    let Frame::Lines(segments) = shell.frame(0.0) else {
        panic!("expected line frame");
    };
    assert_eq!(segments.len(), 1);
    let s = segments[0];
    assert!(s.start.distance(s.end) > 0.1);
    let mid = s.midpoint();
    assert!(Plane::GROUND.signed_distance(mid).abs() < 1e-4);
    assert!(mid.distance(s.start) < s.start.distance(s.end));
    assert!(mid.distance(s.end) < s.start.distance(s.end));
}

#[test]
fn several_sessions_keep_earlier_segments() {
    let mut shell = SceneShell::new(SceneKind::LineDrawing, DrawingConfig::default());
    drag(&mut shell, Vec2::new(-0.5, 0.0), Vec2::new(-0.2, 0.3));
    let first = shell.drawing().unwrap().segments()[0];
    drag(&mut shell, Vec2::new(0.4, -0.4), Vec2::new(0.6, 0.1));
    drag(&mut shell, Vec2::new(0.0, 0.6), Vec2::new(0.1, 0.7));

    let drawing = shell.drawing().unwrap();
    assert_eq!(drawing.segments().len(), 3);
    assert_eq!(drawing.segments()[0], first);
    let ids: Vec<u64> = drawing.segments().iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn orbiting_with_primary_button_draws_nothing() {
    let mut shell = SceneShell::new(SceneKind::LineDrawing, DrawingConfig::default());
    let surface = surface();
    let camera = camera();
    let outcome = shell.handle_pointer(
        PointerEvent::Down {
            button: PointerButton::Primary,
            position: Vec2::new(400.0, 300.0),
        },
        &surface,
        &camera,
    );
    assert_eq!(outcome, DrawOutcome::Ignored);
    shell.handle_pointer(
        PointerEvent::Move {
            position: Vec2::new(500.0, 200.0),
        },
        &surface,
        &camera,
    );
    assert!(shell.drawing().unwrap().segments().is_empty());
}

#[test]
fn release_with_no_press_changes_nothing() {
    let mut shell = SceneShell::new(SceneKind::LineDrawing, DrawingConfig::default());
    let outcome = shell.handle_pointer(
        PointerEvent::Up {
            button: PointerButton::Secondary,
        },
        &surface(),
        &camera(),
    );
    assert_eq!(outcome, DrawOutcome::Ignored);
    let drawing = shell.drawing().unwrap();
    assert!(drawing.segments().is_empty());
    assert!(!drawing.is_dragging());
}
