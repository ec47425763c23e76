//! Controller Simulator - Headless Scripted Run
//!
//! Run with: `cargo run --bin controller_sim [config.json]`
//!
//! Drives a character over flat ground through a fixed input script (walk,
//! sprint, jump and flip, attacks, strafing while turning) at 60 Hz and logs
//! the controller state. Set `RUST_LOG=debug` to see state transitions or
//! `RUST_LOG=trace` for every tick.

use glam::{Quat, Vec2, Vec3};
use tracing::info;

use spellcaster_engine::animation::{AnimationEvent, AnimationSink, Hand};
use spellcaster_engine::physics::{Block, BlockWorld, Ray};
use spellcaster_engine::{
    CameraRig, CharacterController, CharacterMotor, ControlScheme, ControllerConfig, FrameInput,
    KinematicBody,
};

/// Simulation rate
const TICK: f32 = 1.0 / 60.0;

/// Animator that reports triggers and clip starts to the log.
struct LoggingAnimator;

impl AnimationSink for LoggingAnimator {
    fn set_bool(&mut self, _name: &str, _value: bool) {}

    fn set_float(&mut self, _name: &str, _value: f32) {}

    fn set_trigger(&mut self, name: &str) {
        info!(trigger = name, "animator");
    }

    fn play(&mut self, clip: &str, layer: u32, normalized_time: f32) {
        info!(clip, layer, normalized_time, "animator");
    }
}

/// Fixed eye-height rig aiming down -Z from the spawn point.
struct SimRig {
    pitch: Quat,
}

impl CameraRig for SimRig {
    fn set_local_rotation(&mut self, rotation: Quat) {
        self.pitch = rotation;
    }

    fn aim_ray(&self) -> Option<Ray> {
        Some(Ray::new(Vec3::new(0.0, 1.6, 0.0), self.pitch * Vec3::NEG_Z))
    }
}

/// One scripted phase: an input held for a number of ticks.
struct Phase {
    name: &'static str,
    ticks: u32,
    input: FrameInput,
}

fn script() -> Vec<Phase> {
    let walk = FrameInput::moving(Vec2::Y);
    let sprint = FrameInput {
        sprint: true,
        ..walk
    };
    let jump = FrameInput { jump: true, ..walk };
    let attack = FrameInput {
        primary: true,
        ..Default::default()
    };
    let legendary = FrameInput {
        primary: true,
        secondary: true,
        ..Default::default()
    };
    let strafe_turn = FrameInput {
        move_input: Vec2::NEG_X,
        look: Vec2::new(1.5, -0.5),
        control_scheme: ControlScheme::KeyboardMouse,
        ..Default::default()
    };

    vec![
        Phase { name: "walk", ticks: 60, input: walk },
        Phase { name: "sprint", ticks: 60, input: sprint },
        Phase { name: "jump", ticks: 1, input: jump },
        Phase { name: "rise", ticks: 12, input: walk },
        Phase { name: "flip", ticks: 1, input: jump },
        Phase { name: "air", ticks: 60, input: walk },
        Phase { name: "attack", ticks: 10, input: attack },
        Phase { name: "release", ticks: 10, input: FrameInput::new() },
        Phase { name: "legendary", ticks: 10, input: legendary },
        Phase { name: "strafe_turn", ticks: 45, input: strafe_turn },
        Phase { name: "idle", ticks: 30, input: FrameInput::new() },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading controller config");
            ControllerConfig::load(&path)?
        }
        None => ControllerConfig::default(),
    };

    let mut world = BlockWorld::new();
    world.insert(Block::ground(500.0));
    world.insert(Block::new(Vec3::new(0.0, 1.5, -40.0), Vec3::splat(3.0)).with_tag("Block"));

    let mut controller =
        CharacterController::new(config, KinematicBody::new(Vec3::ZERO, TICK), world.clone())
            .with_raycaster(world)
            .with_animator(LoggingAnimator)
            .with_camera_rig(SimRig {
                pitch: Quat::IDENTITY,
            });

    let mut tick = 0u32;
    for phase in script() {
        info!(phase = phase.name, ticks = phase.ticks, "phase");
        for _ in 0..phase.ticks {
            let report = controller.tick(&phase.input, TICK);
            tick += 1;

            if report.cast.is_some() {
                let hand = if tick % 2 == 0 { Hand::Left } else { Hand::Right };
                match controller.on_animation_event(AnimationEvent::Attack(hand)) {
                    Some(target) => info!(
                        point = ?target.hit.point,
                        adjacent = ?target.adjacent,
                        "cast hit"
                    ),
                    None => info!("cast found no target"),
                }
            }
            if report.landed {
                controller.on_animation_event(AnimationEvent::Land);
            }
        }

        let state = controller.state();
        info!(
            tick,
            position = ?controller.motor().position(),
            speed = state.current_speed,
            vertical_velocity = state.vertical_velocity,
            grounded = state.grounded,
            jump_count = state.jump_count,
            pitch = state.camera_pitch,
            "state"
        );
    }

    Ok(())
}
