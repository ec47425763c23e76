//! Controller Tests - Gravity, Jumping, Movement, Casting and Look
//!
//! Drives a full CharacterController through in-memory collaborators and
//! checks the per-tick behaviour a host relies on.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Quat, Vec2, Vec3};
use spellcaster_engine::animation::{AnimationLog, AnimationSink, Hand, params};
use spellcaster_engine::camera::CameraRig;
use spellcaster_engine::diagnostics::{Diagnostics, Gizmo, GizmoColor, GizmoLog};
use spellcaster_engine::physics::{Block, BlockWorld, GroundProbe, LayerMask, Ray};
use spellcaster_engine::player::{JumpKind, MoveAnimation};
use spellcaster_engine::{
    AnimationEvent, CharacterController, CharacterMotor, ControlScheme, ControllerConfig,
    FrameInput, KinematicBody,
};

// ============================================================================
// Fakes
// ============================================================================

/// Ground probe whose answer the test sets directly.
struct FakeProbe {
    grounded: bool,
}

impl GroundProbe for FakeProbe {
    fn check_sphere(&self, _center: Vec3, _radius: f32, _layers: LayerMask) -> bool {
        self.grounded
    }
}

/// Animator that records into a log the test keeps a handle to.
#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<AnimationLog>>);

impl AnimationSink for SharedLog {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.0.borrow_mut().set_bool(name, value);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.0.borrow_mut().set_float(name, value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.0.borrow_mut().set_trigger(name);
    }

    fn play(&mut self, clip: &str, layer: u32, normalized_time: f32) {
        self.0.borrow_mut().play(clip, layer, normalized_time);
    }
}

#[derive(Default)]
struct RigState {
    rotation: Option<Quat>,
    writes: usize,
}

/// Camera rig that aims straight ahead from eye height.
#[derive(Clone, Default)]
struct FakeRig {
    state: Rc<RefCell<RigState>>,
    aim: Option<Ray>,
}

impl CameraRig for FakeRig {
    fn set_local_rotation(&mut self, rotation: Quat) {
        let mut state = self.state.borrow_mut();
        state.rotation = Some(rotation);
        state.writes += 1;
    }

    fn aim_ray(&self) -> Option<Ray> {
        self.aim
    }
}

#[derive(Clone, Default)]
struct SharedGizmos(Rc<RefCell<GizmoLog>>);

impl Diagnostics for SharedGizmos {
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor) {
        self.0.borrow_mut().draw_sphere(center, radius, color);
    }

    fn draw_ray(&mut self, ray: Ray, length: f32, color: GizmoColor) {
        self.0.borrow_mut().draw_ray(ray, length, color);
    }
}

const DT: f32 = 0.02;

fn scripted(config: ControllerConfig) -> CharacterController<KinematicBody, FakeProbe> {
    CharacterController::new(
        config,
        KinematicBody::new(Vec3::new(0.0, 5.0, 0.0), DT),
        FakeProbe { grounded: true },
    )
}

fn on_flat_ground(step: f32) -> CharacterController<KinematicBody, BlockWorld> {
    let mut world = BlockWorld::new();
    world.insert(Block::ground(200.0));
    CharacterController::new(
        ControllerConfig::default(),
        KinematicBody::new(Vec3::ZERO, step),
        world,
    )
}

fn jump() -> FrameInput {
    FrameInput {
        jump: true,
        ..Default::default()
    }
}

// ============================================================================
// Gravity
// ============================================================================

#[test]
fn test_airborne_tick_applies_gravity() {
    let mut controller = scripted(ControllerConfig::default());
    controller.probe_mut().grounded = false;
    controller.set_vertical_velocity(5.0);

    controller.tick(&FrameInput::new(), DT);

    let expected = 5.0 - 30.0 * DT;
    assert!((controller.state().vertical_velocity - expected).abs() < 1e-5);
}

#[test]
fn test_fall_speed_clamped_to_terminal_velocity() {
    let mut controller = scripted(ControllerConfig::default());
    controller.probe_mut().grounded = false;

    for _ in 0..200 {
        controller.tick(&FrameInput::new(), 0.1);
        let v = controller.state().vertical_velocity;
        assert!(v >= -53.0 && v <= 53.0);
    }
    assert_eq!(controller.state().vertical_velocity, -53.0);
}

#[test]
fn test_falling_flag_after_fall_timeout() {
    let mut controller = scripted(ControllerConfig::default());
    controller.probe_mut().grounded = false;

    let report = controller.tick(&FrameInput::new(), 0.1);
    assert_eq!(report.bool_param(params::FALLING), Some(false));
    let report = controller.tick(&FrameInput::new(), 0.1);
    assert_eq!(report.bool_param(params::FALLING), Some(true));

    controller.probe_mut().grounded = true;
    let report = controller.tick(&FrameInput::new(), 0.1);
    assert_eq!(report.bool_param(params::FALLING), Some(false));
}

// ============================================================================
// Jumping
// ============================================================================

#[test]
fn test_first_jump_sets_launch_velocity() {
    let mut controller = scripted(ControllerConfig::default());

    let report = controller.tick(&jump(), DT);

    assert_eq!(report.jump, Some(JumpKind::Jump));
    let launch = (2.0_f32 * 2.0 * 30.0).sqrt();
    assert!((controller.state().vertical_velocity - launch).abs() < 1e-5);
    assert_eq!(controller.state().jump_count, 1);
}

#[test]
fn test_jump_count_never_exceeds_max() {
    let mut controller = scripted(ControllerConfig::default());

    assert_eq!(controller.tick(&jump(), DT).jump, Some(JumpKind::Jump));
    controller.probe_mut().grounded = false;
    controller.tick(&FrameInput::new(), DT);

    let report = controller.tick(&jump(), DT);
    assert_eq!(report.jump, Some(JumpKind::Flip));
    assert_eq!(report.trigger_count(params::FLIP), 1);
    controller.tick(&FrameInput::new(), DT);

    let before = controller.state().vertical_velocity;
    let report = controller.tick(&jump(), DT);
    assert_eq!(report.jump, None);
    assert_eq!(report.trigger_count(params::JUMP), 0);
    assert_eq!(report.trigger_count(params::FLIP), 0);
    assert_eq!(controller.state().jump_count, 2);
    assert!((controller.state().vertical_velocity - (before - 30.0 * DT)).abs() < 1e-5);
}

#[test]
fn test_held_jump_does_not_repeat() {
    let mut controller = scripted(ControllerConfig::default());
    controller.tick(&jump(), DT);
    controller.probe_mut().grounded = false;

    for _ in 0..10 {
        assert_eq!(controller.tick(&jump(), DT).jump, None);
    }
    assert_eq!(controller.state().jump_count, 1);
}

#[test]
fn test_landing_edge_fires_one_land() {
    let log = SharedLog::default();
    let mut controller = scripted(ControllerConfig::default()).with_animator(log.clone());

    controller.tick(&jump(), DT);
    controller.probe_mut().grounded = false;
    controller.tick(&FrameInput::new(), DT);
    controller.tick(&jump(), DT);
    assert_eq!(controller.state().jump_count, 2);

    controller.probe_mut().grounded = true;
    let report = controller.tick(&FrameInput::new(), DT);
    assert!(report.landed);
    assert_eq!(report.trigger_count(params::LAND), 1);
    assert_eq!(controller.state().jump_count, 0);

    for _ in 0..5 {
        assert!(!controller.tick(&FrameInput::new(), DT).landed);
    }
    assert_eq!(log.0.borrow().trigger_count(params::LAND), 1);
}

#[test]
fn test_walking_off_ledge_keeps_full_jump() {
    let mut controller = scripted(ControllerConfig::default());
    controller.probe_mut().grounded = false;
    controller.tick(&FrameInput::new(), DT);

    assert_eq!(controller.tick(&jump(), DT).jump, Some(JumpKind::Jump));
}

#[test]
fn test_single_jump_config() {
    let config = ControllerConfig::from_json(r#"{ "max_jump_count": 1 }"#).unwrap();
    let mut controller = scripted(config);

    controller.tick(&jump(), DT);
    controller.probe_mut().grounded = false;
    controller.tick(&FrameInput::new(), DT);
    assert_eq!(controller.tick(&jump(), DT).jump, None);
}

// ============================================================================
// Horizontal Movement
// ============================================================================

#[test]
fn test_speed_converges_without_overshoot() {
    let step = 0.1;
    let mut controller = on_flat_ground(step);
    let input = FrameInput::moving(Vec2::Y);

    let first = controller.tick(&input, step);
    assert_eq!(first.speed, 5.0);

    for _ in 0..20 {
        let report = controller.tick(&input, step);
        assert!(report.speed <= 5.0 + 1e-4);
    }
    assert_eq!(controller.state().current_speed, 5.0);
}

#[test]
fn test_speed_ramps_monotonically_at_small_steps() {
    let step = 0.01;
    let mut controller = on_flat_ground(step);
    let input = FrameInput::moving(Vec2::Y);

    let mut previous = 0.0;
    for _ in 0..200 {
        let speed = controller.tick(&input, step).speed;
        assert!(speed + 1e-3 >= previous);
        assert!(speed <= 5.0 + 1e-3);
        previous = speed;
    }
    assert_eq!(controller.state().current_speed, 5.0);
}

#[test]
fn test_walking_forward_scenario() {
    let step = 1.0 / 60.0;
    let mut controller = on_flat_ground(step);
    let input = FrameInput::moving(Vec2::Y);

    let mut last = None;
    for _ in 0..120 {
        last = Some(controller.tick(&input, step));
    }
    let report = last.unwrap();

    assert!((controller.state().current_speed - 5.0).abs() < 1e-3);
    assert_eq!(report.movement, MoveAnimation::Running);
    assert_eq!(report.bool_param(params::IS_RUNNING), Some(true));
    for flag in [
        params::IS_RUNNING_BACK,
        params::IS_STRAFING_LEFT,
        params::IS_STRAFING_RIGHT,
        params::IS_SPRINTING,
    ] {
        assert_eq!(report.bool_param(flag), Some(false), "{flag} should be off");
    }
    assert_eq!(report.bool_param(params::MOVING), Some(true));

    let position = controller.motor().position();
    assert!(position.z < -5.0);
    assert!(position.x.abs() < 1e-4);
    assert_eq!(position.y, 0.0);
}

#[test]
fn test_sprint_strafe_is_not_sprinting() {
    let mut controller = on_flat_ground(DT);
    let input = FrameInput {
        move_input: Vec2::X,
        sprint: true,
        ..Default::default()
    };
    let report = controller.tick(&input, DT);
    assert_eq!(report.movement, MoveAnimation::StrafingRight);
    assert_eq!(report.bool_param(params::IS_SPRINTING), Some(false));
}

#[test]
fn test_releasing_input_stops() {
    let step = 0.05;
    let mut controller = on_flat_ground(step);
    for _ in 0..40 {
        controller.tick(&FrameInput::moving(Vec2::Y), step);
    }
    for _ in 0..80 {
        controller.tick(&FrameInput::new(), step);
    }
    assert_eq!(controller.state().current_speed, 0.0);
    let report = controller.tick(&FrameInput::new(), step);
    assert_eq!(report.movement, MoveAnimation::Idle);
    assert_eq!(report.bool_param(params::MOVING), Some(false));
}

#[test]
fn test_moving_follows_speed_while_decelerating() {
    let step = 0.05;
    let mut controller = on_flat_ground(step);
    for _ in 0..40 {
        controller.tick(&FrameInput::moving(Vec2::Y), step);
    }

    // Input released but the body is still sliding to a stop
    let report = controller.tick(&FrameInput::new(), step);
    assert!(report.speed > 0.0);
    assert_eq!(report.bool_param(params::MOVING), Some(true));
    assert_eq!(report.movement, MoveAnimation::Idle);

    let mut report = report;
    for _ in 0..80 {
        report = controller.tick(&FrameInput::new(), step);
    }
    assert_eq!(report.speed, 0.0);
    assert_eq!(report.bool_param(params::MOVING), Some(false));
}

// ============================================================================
// Casting
// ============================================================================

#[test]
fn test_cast_plays_exactly_one_clip() {
    let cases = [
        ((true, false), params::ATTACK_PRIMARY),
        ((false, true), params::ATTACK_SECONDARY),
        ((true, true), params::ATTACK_LEGENDARY),
    ];

    for ((primary, secondary), clip) in cases {
        let log = SharedLog::default();
        let mut controller = scripted(ControllerConfig::default()).with_animator(log.clone());
        let input = FrameInput {
            primary,
            secondary,
            ..Default::default()
        };

        let report = controller.tick(&input, DT);
        assert_eq!(report.played_clips(), vec![clip]);
        assert!(controller.state().is_casting);

        for _ in 0..20 {
            assert!(controller.tick(&input, DT).played_clips().is_empty());
        }
        let log = log.0.borrow();
        assert_eq!(log.play_count(clip), 1);
        let total = log.play_count(params::ATTACK_PRIMARY)
            + log.play_count(params::ATTACK_SECONDARY)
            + log.play_count(params::ATTACK_LEGENDARY);
        assert_eq!(total, 1);
    }
}

#[test]
fn test_cast_rearms_after_release() {
    let mut controller = scripted(ControllerConfig::default());
    let press = FrameInput {
        primary: true,
        ..Default::default()
    };

    controller.tick(&press, DT);
    for _ in 0..10 {
        controller.tick(&FrameInput::new(), DT);
    }
    assert!(!controller.state().is_casting);
    assert_eq!(
        controller.tick(&press, DT).played_clips(),
        vec![params::ATTACK_PRIMARY]
    );
}

#[test]
fn test_attack_event_resolves_target() {
    let mut world = BlockWorld::new();
    world.insert(Block::ground(50.0));
    world.insert(Block::new(Vec3::new(0.0, 1.5, -6.0), Vec3::ONE).with_tag("Block"));

    let rig = FakeRig {
        aim: Some(Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::NEG_Z)),
        ..Default::default()
    };
    let mut controller = CharacterController::new(
        ControllerConfig::default(),
        KinematicBody::new(Vec3::ZERO, DT),
        world.clone(),
    )
    .with_raycaster(world)
    .with_camera_rig(rig);

    let target = controller
        .on_animation_event(AnimationEvent::Attack(Hand::Right))
        .expect("aim ray should hit the tagged block");

    assert!((target.hit.point - Vec3::new(0.0, 1.5, -5.5)).length() < 1e-4);
    assert!((target.adjacent - Vec3::new(0.0, 1.5, -5.0)).length() < 1e-4);
    assert_eq!(controller.last_cast_ray(), Some(target.ray));

    let hand = controller.motor().hand_position(Hand::Right);
    assert_eq!(target.ray.origin, hand);
    assert!(target.ray.direction.z < 0.0);
}

#[test]
fn test_attack_event_ignores_untagged_hits() {
    let mut world = BlockWorld::new();
    world.insert(Block::new(Vec3::new(0.0, 1.5, -6.0), Vec3::ONE).with_tag("Tree"));

    let rig = FakeRig {
        aim: Some(Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::NEG_Z)),
        ..Default::default()
    };
    let mut controller = scripted(ControllerConfig::default())
        .with_raycaster(world)
        .with_camera_rig(rig);

    assert!(controller.on_animation_event(AnimationEvent::Attack(Hand::Left)).is_none());
    assert!(controller.last_cast_ray().is_none());
}

#[test]
fn test_land_event_clears_jumping() {
    let log = SharedLog::default();
    let mut controller = scripted(ControllerConfig::default()).with_animator(log.clone());

    controller.tick(&jump(), DT);
    assert_eq!(log.0.borrow().last_bool(params::IS_JUMPING), Some(true));

    controller.on_animation_event(AnimationEvent::Land);
    assert_eq!(log.0.borrow().last_bool(params::IS_JUMPING), Some(false));
}

// ============================================================================
// Look
// ============================================================================

#[test]
fn test_look_drives_rig_and_body() {
    let rig = FakeRig::default();
    let mut controller = on_flat_ground(DT).with_camera_rig(rig.clone());

    let input = FrameInput::looking(Vec2::new(10.0, 5.0), ControlScheme::KeyboardMouse);
    let report = controller.tick(&input, DT);

    let update = report.look.expect("look input above threshold");
    assert_eq!(update.pitch, 10.0);
    assert_eq!(update.yaw_delta, 20.0);
    assert!((controller.motor().yaw() - 20.0).abs() < 1e-4);

    let state = rig.state.borrow();
    assert_eq!(state.writes, 1);
    let expected = Quat::from_rotation_x(10.0_f32.to_radians());
    assert!(state.rotation.unwrap().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_small_look_is_ignored() {
    let rig = FakeRig::default();
    let mut controller = on_flat_ground(DT).with_camera_rig(rig.clone());

    let input = FrameInput::looking(Vec2::new(0.001, 0.0), ControlScheme::KeyboardMouse);
    assert!(controller.tick(&input, DT).look.is_none());
    assert_eq!(rig.state.borrow().writes, 0);
    assert_eq!(controller.motor().yaw(), 0.0);
}

#[test]
fn test_pitch_stays_within_clamps() {
    let mut controller = on_flat_ground(DT);
    let sweeps = [40.0, 40.0, 40.0, -100.0, -100.0, -100.0, 500.0, -1000.0, 3.0];

    for dy in sweeps {
        let input = FrameInput::looking(Vec2::new(0.0, dy), ControlScheme::KeyboardMouse);
        controller.tick(&input, DT);
        let pitch = controller.state().camera_pitch;
        assert!((-80.0..=70.0).contains(&pitch), "pitch {pitch} escaped clamps");
    }
}

#[test]
fn test_gamepad_look_scales_by_dt() {
    let mut controller = on_flat_ground(0.05);
    let input = FrameInput::looking(Vec2::new(0.0, 10.0), ControlScheme::Gamepad);
    let report = controller.tick(&input, 0.05);
    assert!((report.look.unwrap().pitch - 1.0).abs() < 1e-5);
}

// ============================================================================
// Optional Collaborators
// ============================================================================

#[test]
fn test_missing_collaborators_are_skipped() {
    let mut controller = on_flat_ground(DT);
    let input = FrameInput {
        move_input: Vec2::Y,
        look: Vec2::new(3.0, 3.0),
        jump: true,
        primary: true,
        ..Default::default()
    };

    let report = controller.tick(&input, DT);
    assert!(!report.animation.is_empty());
    assert!(report.look.is_some());
    assert!(
        controller
            .on_animation_event(AnimationEvent::Attack(Hand::Right))
            .is_none()
    );
    controller.on_animation_event(AnimationEvent::Land);
    controller.on_animation_event(AnimationEvent::FootLeft);
}

#[cfg(debug_assertions)]
#[test]
fn test_diagnostics_draw_probe_colors() {
    let gizmos = SharedGizmos::default();
    let mut controller = scripted(ControllerConfig::default()).with_diagnostics(gizmos.clone());

    controller.tick(&FrameInput::new(), DT);
    match gizmos.0.borrow().last_sphere() {
        Some(Gizmo::Sphere { color, radius, .. }) => {
            assert_eq!(*color, spellcaster_engine::diagnostics::GROUNDED_COLOR);
            assert_eq!(*radius, 0.5);
        }
        other => panic!("expected a probe sphere, got {other:?}"),
    }

    controller.probe_mut().grounded = false;
    controller.tick(&FrameInput::new(), DT);
    match gizmos.0.borrow().last_sphere() {
        Some(Gizmo::Sphere { color, .. }) => {
            assert_eq!(*color, spellcaster_engine::diagnostics::AIRBORNE_COLOR);
        }
        other => panic!("expected a probe sphere, got {other:?}"),
    }
}
