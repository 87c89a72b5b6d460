mod common;

use common::*;
use glam::Vec2;
use portfolio_core::*;
use smallvec::smallvec;

fn scene() -> FluidScene {
    FluidScene::new(desktop(), Theme::default(), FieldConfig::default(), 7)
}

fn lone_particles(scene: &mut FluidScene, positions: &[(f32, f32)]) {
    scene.field.particles = positions
        .iter()
        .map(|&(x, y)| Particle::new(Vec2::new(x, y), Rgba::new(90, 120, 255, 0.5), 1.0, 1.0))
        .collect();
}

#[test]
fn drag_below_threshold_yields_nothing() {
    assert!(drag_disturbances(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0)).is_empty());
    assert!(drag_disturbances(Vec2::ZERO, Vec2::new(3.0, 4.0)).is_empty());
}

#[test]
fn drag_samples_path_with_half_force() {
    let d = drag_disturbances(Vec2::ZERO, Vec2::new(50.0, 0.0));
    assert_eq!(d.len(), 1 + DRAG_PATH_SAMPLES);
    assert_eq!(d[0].source, Vec2::new(50.0, 0.0));
    assert!((d[0].force - 5.0).abs() < 1e-6);
    let xs: Vec<f32> = d[1..].iter().map(|s| s.source.x).collect();
    for (x, expected) in xs.iter().zip([0.0, 10.0, 20.0, 30.0, 40.0]) {
        assert!((x - expected).abs() < 1e-4, "{xs:?}");
    }
    assert!(d[1..].iter().all(|s| (s.force - 2.5).abs() < 1e-6));
}

#[test]
fn drag_force_is_capped() {
    let d = drag_disturbances(Vec2::ZERO, Vec2::new(1000.0, 0.0));
    assert_eq!(d[0].force, DRAG_FORCE_MAX);
}

#[test]
fn stationary_pointer_applies_no_disturbance() {
    let mut s = scene();
    let mut r = Recorder::default();
    let here = Vec2::new(100.0, 100.0);
    s.tick([InputEvent::PointerMove(here)], 0.0, &mut r);

    lone_particles(&mut s, &[(100.0, 110.0)]);
    let stats = s.tick([InputEvent::PointerMove(here)], 0.016, &mut r);
    assert!(!stats.dragged);
    assert_eq!(stats.disturbances, 0);
    assert_eq!(s.field.particles[0].intensity, 0.0);
}

#[test]
fn moving_pointer_excites_nearby_particles_only() {
    let mut s = scene();
    lone_particles(&mut s, &[(50.0, 10.0), (500.0, 500.0)]);
    let mut r = Recorder::default();
    let stats = s.tick([InputEvent::PointerMove(Vec2::new(50.0, 0.0))], 0.0, &mut r);
    assert!(stats.dragged);
    assert_eq!(stats.disturbances, 6);
    assert!(s.field.particles[0].intensity > 0.0);
    assert!(s.field.particles[0].vel.y > 0.0);
    assert_eq!(s.field.particles[1].intensity, 0.0);
}

#[test]
fn previous_pointer_commits_after_the_frame() {
    let mut s = scene();
    let mut r = Recorder::default();
    s.tick([InputEvent::PointerMove(Vec2::new(40.0, 30.0))], 0.0, &mut r);
    assert_eq!(s.pointer.previous, Vec2::new(40.0, 30.0));
    // no new input: nothing moved since last frame
    let stats = s.tick(std::iter::empty(), 0.016, &mut r);
    assert!(!stats.dragged);
}

#[test]
fn touches_disturb_every_frame_until_lifted() {
    let mut s = scene();
    let mut r = Recorder::default();
    let touches: TouchList = smallvec![
        TouchPoint { id: 4, pos: Vec2::new(10.0, 10.0) },
        TouchPoint { id: 2, pos: Vec2::new(300.0, 200.0) },
    ];
    s.tick([InputEvent::TouchMove(touches)], 0.0, &mut r);
    assert_eq!(s.pointer.current, Vec2::new(10.0, 10.0));

    let stats = s.tick(std::iter::empty(), 0.016, &mut r);
    assert_eq!(stats.disturbances, 2);
    assert!(s
        .frame_disturbances()
        .iter()
        .all(|d| d.force == TOUCH_FORCE));

    let stats = s.tick([InputEvent::TouchEnd(smallvec![4])], 0.032, &mut r);
    assert_eq!(stats.disturbances, 1);
    let stats = s.tick([InputEvent::TouchEnd(smallvec![2])], 0.048, &mut r);
    assert_eq!(stats.disturbances, 0);
}

#[test]
fn resize_reseeds_before_drawing() {
    let mut s = scene();
    assert_eq!(s.field.len(), 160);
    let mut r = Recorder::default();
    let stats = s.tick(
        [
            InputEvent::Resize(Viewport::new(1600.0, 1200.0)),
            InputEvent::Resize(Viewport::new(400.0, 300.0)),
        ],
        0.0,
        &mut r,
    );
    assert!(stats.reseeded);
    assert_eq!(s.viewport(), Viewport::new(400.0, 300.0));
    // 400 px is a mobile width: 120000 / 5000
    assert_eq!(s.field.len(), 24);
    assert_eq!(r.calls[0], Call::Resize(400, 300));
    assert_eq!(r.circles().len(), 24);
}

#[test]
fn frame_draws_in_fixed_order() {
    let mut s = scene();
    let mut r = Recorder::default();
    s.tick(std::iter::empty(), 1.5, &mut r);

    assert_eq!(r.calls[0], Call::Composite(CompositeMode::SourceOver));
    assert_eq!(r.calls[1], Call::Background(Theme::default().background));
    assert_eq!(
        r.calls[2],
        Call::Vignette {
            center: Vec2::new(400.0, 300.0),
            outer_radius: 800.0 / 1.5
        }
    );
    assert_eq!(r.calls[3], Call::Composite(CompositeMode::Lighter));
    let n = s.field.len();
    assert!(r.calls[4..4 + n]
        .iter()
        .all(|c| matches!(c, Call::Circle { .. })));
    let tail = &r.calls[4 + n..];
    assert_eq!(tail.len(), 4);
    assert_eq!(tail[0], Call::Composite(CompositeMode::Overlay));
    for (call, anchor_y) in tail[1..3].iter().zip([180.0_f32, 360.0]) {
        match call {
            Call::Band { points, gradient_y } => {
                assert_eq!(*points, 82);
                assert!((gradient_y.0 - anchor_y).abs() < 1e-3);
                assert_eq!(gradient_y.1, 600.0);
            }
            other => panic!("expected band, got {other:?}"),
        }
    }
    assert_eq!(tail[3], Call::Composite(CompositeMode::SourceOver));
}

#[test]
fn empty_viewport_still_ticks() {
    let mut s = FluidScene::new(Viewport::default(), Theme::default(), FieldConfig::default(), 1);
    let mut r = Recorder::default();
    let stats = s.tick([InputEvent::PointerMove(Vec2::new(20.0, 0.0))], 0.0, &mut r);
    assert_eq!(stats.particles_drawn, 0);
    assert!(r.circles().is_empty());
}
