//! Character Controller
//!
//! Per-tick orchestration of ground check, gravity, jumping, horizontal
//! movement, casting and look. Collaborators are injected at construction;
//! the motor and ground probe are required, everything else is optional and
//! its side effects are skipped when absent.
//!
//! # Tick Order
//!
//! 1. Ground probe and landing edge
//! 2. Grounded bias, fall timeout and gravity
//! 3. Jump on the rising edge of the jump button
//! 4. Horizontal speed, direction and the combined displacement
//! 5. Cast start / lock-out
//! 6. Camera pitch and body yaw
//!
//! Animation output is collected into a list of commands, forwarded to the
//! animator (if any) at the end of the tick and returned in the [`TickReport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use spellcaster_engine::config::ControllerConfig;
//! use spellcaster_engine::physics::{Block, BlockWorld};
//! use spellcaster_engine::player::{CharacterController, KinematicBody};
//!
//! let mut world = BlockWorld::new();
//! world.insert(Block::ground(50.0));
//!
//! let body = KinematicBody::new(Vec3::ZERO, 1.0 / 60.0);
//! let mut controller = CharacterController::new(ControllerConfig::default(), body, world)
//!     .with_animator(my_animator);
//!
//! let report = controller.tick(&frame_input, 1.0 / 60.0);
//! ```

use glam::Vec3;

use super::cast::{CastController, CastKind};
use super::locomotion::{Locomotion, MoveAnimation};
use super::motor::CharacterMotor;
use super::vertical::{JumpKind, VerticalMotion};
use crate::animation::{
    AnimationCommand, AnimationEvent, AnimationSink, RootMotionFilter, dispatch, params,
};
use crate::camera::{CameraRig, LookController, LookUpdate};
use crate::config::ControllerConfig;
#[cfg(debug_assertions)]
use crate::diagnostics::{AIRBORNE_COLOR, CAST_RAY_COLOR, GROUNDED_COLOR};
use crate::diagnostics::Diagnostics;
use crate::input::{ButtonEdge, FrameInput};
use crate::physics::{GroundCheck, GroundProbe, Ray, RayHit, Raycaster, adjacent_to_hit, resolve_cast};

/// Longest tick the controller will integrate, in seconds
pub const MAX_TICK_DELTA: f32 = 0.1;

/// Snapshot of the controller's derived state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub was_grounded: bool,
    pub falling: bool,
    pub jump_count: u32,
    pub jump_timeout_remaining: f32,
    pub fall_timeout_remaining: f32,
    pub is_casting: bool,
    pub cast_timeout_remaining: f32,
    /// Smoothed horizontal speed in m/s
    pub current_speed: f32,
    /// Camera pitch in degrees
    pub camera_pitch: f32,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub grounded: bool,
    /// Airborne last tick, grounded this tick
    pub landed: bool,
    pub jump: Option<JumpKind>,
    /// Displacement submitted to the motor
    pub displacement: Vec3,
    /// Horizontal speed after smoothing
    pub speed: f32,
    pub movement: MoveAnimation,
    pub cast: Option<CastKind>,
    pub look: Option<LookUpdate>,
    /// Animation commands in the order they were issued
    pub animation: Vec<AnimationCommand>,
}

impl TickReport {
    /// Last value this tick wrote to bool parameter `name`.
    pub fn bool_param(&self, name: &str) -> Option<bool> {
        self.animation.iter().rev().find_map(|command| match *command {
            AnimationCommand::SetBool(n, value) if n == name => Some(value),
            _ => None,
        })
    }

    /// Number of times trigger `name` fired this tick.
    pub fn trigger_count(&self, name: &str) -> usize {
        self.animation
            .iter()
            .filter(|command| matches!(command, AnimationCommand::Trigger(n) if *n == name))
            .count()
    }

    /// Clips started this tick.
    pub fn played_clips(&self) -> Vec<&'static str> {
        self.animation
            .iter()
            .filter_map(|command| match *command {
                AnimationCommand::Play { clip, .. } => Some(clip),
                _ => None,
            })
            .collect()
    }
}

/// A cast aimed at a targetable object.
#[derive(Debug, Clone, PartialEq)]
pub struct CastTarget {
    /// Ray from the casting hand to the hit point
    pub ray: Ray,
    pub hit: RayHit,
    /// Where a block placed against the hit face would be centred
    pub adjacent: Vec3,
}

/// Locomotion and action controller for one character.
pub struct CharacterController<M: CharacterMotor, P: GroundProbe> {
    config: ControllerConfig,
    ground_check: GroundCheck,
    vertical: VerticalMotion,
    locomotion: Locomotion,
    cast: CastController,
    look: LookController,
    root_motion: RootMotionFilter,
    jump_button: ButtonEdge,
    last_cast_ray: Option<Ray>,

    motor: M,
    probe: P,
    animator: Option<Box<dyn AnimationSink>>,
    camera_rig: Option<Box<dyn CameraRig>>,
    raycaster: Option<Box<dyn Raycaster>>,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    diagnostics: Option<Box<dyn Diagnostics>>,
}

impl<M: CharacterMotor, P: GroundProbe> CharacterController<M, P> {
    /// Create a controller in the spawn state. `config` is sanitized first.
    pub fn new(config: ControllerConfig, motor: M, probe: P) -> Self {
        let config = config.sanitized();
        tracing::debug!(
            move_speed = config.move_speed,
            sprint_speed = config.sprint_speed,
            max_jump_count = config.max_jump_count,
            "character controller created"
        );

        Self {
            ground_check: GroundCheck::from_config(&config),
            vertical: VerticalMotion::from_config(&config),
            locomotion: Locomotion::from_config(&config),
            cast: CastController::from_config(&config),
            look: LookController::from_config(&config),
            root_motion: RootMotionFilter::new(config.root_motion_scale),
            jump_button: ButtonEdge::new(),
            last_cast_ray: None,
            config,
            motor,
            probe,
            animator: None,
            camera_rig: None,
            raycaster: None,
            diagnostics: None,
        }
    }

    pub fn with_animator(mut self, animator: impl AnimationSink + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    pub fn with_camera_rig(mut self, rig: impl CameraRig + 'static) -> Self {
        self.camera_rig = Some(Box::new(rig));
        self
    }

    pub fn with_raycaster(mut self, raycaster: impl Raycaster + 'static) -> Self {
        self.raycaster = Some(Box::new(raycaster));
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Some(Box::new(diagnostics));
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    /// Ray of the most recent cast that found a target.
    pub fn last_cast_ray(&self) -> Option<Ray> {
        self.last_cast_ray
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            vertical_velocity: self.vertical.velocity(),
            grounded: self.vertical.is_grounded(),
            was_grounded: self.vertical.was_grounded(),
            falling: self.vertical.is_falling(),
            jump_count: self.vertical.jump_count(),
            jump_timeout_remaining: self.vertical.jump_timeout_remaining(),
            fall_timeout_remaining: self.vertical.fall_timeout_remaining(),
            is_casting: self.cast.is_casting(),
            cast_timeout_remaining: self.cast.timeout_remaining(),
            current_speed: self.locomotion.current_speed(),
            camera_pitch: self.look.pitch(),
        }
    }

    /// Override the vertical velocity, e.g. for knockback or launch pads.
    pub fn set_vertical_velocity(&mut self, velocity: f32) {
        self.vertical.set_velocity(velocity);
    }

    /// Advance the controller by `dt` seconds.
    ///
    /// Never fails. `dt` is clamped to `[0, MAX_TICK_DELTA]`; a non-finite
    /// `dt` is treated as 0.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) -> TickReport {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_TICK_DELTA)
        } else {
            0.0
        };
        let mut commands = Vec::with_capacity(16);

        // Ground
        let position = self.motor.position();
        let up = self.motor.up();
        let grounded = self.ground_check.is_grounded(&self.probe, position, up);
        let landed = self.vertical.update_grounded(grounded);
        commands.push(AnimationCommand::SetBool(params::GROUNDED, grounded));
        if landed {
            commands.push(AnimationCommand::Trigger(params::LAND));
        }

        // Gravity
        self.vertical.apply_gravity(dt);
        commands.push(AnimationCommand::SetBool(
            params::FALLING,
            self.vertical.is_falling(),
        ));

        // Jump
        let jump = if self.jump_button.update(input.jump) {
            self.vertical.try_jump()
        } else {
            None
        };
        if let Some(kind) = jump {
            let trigger = match kind {
                JumpKind::Jump => params::JUMP,
                JumpKind::Flip => params::FLIP,
            };
            commands.push(AnimationCommand::Trigger(trigger));
            commands.push(AnimationCommand::SetBool(params::IS_JUMPING, true));
        }

        // Horizontal
        let velocity = self.motor.velocity();
        let measured_speed = (velocity - up * velocity.dot(up)).length();
        let step = self.locomotion.update(
            input,
            measured_speed,
            self.motor.forward(),
            self.motor.right(),
            dt,
        );
        let displacement = step.displacement(dt) + up * (self.vertical.velocity() * dt);
        self.motor.move_by(displacement);

        commands.push(AnimationCommand::SetBool(params::MOVING, step.speed > 0.0));
        commands.push(AnimationCommand::SetFloat(params::VELOCITY_X, input.move_input.x));
        commands.push(AnimationCommand::SetFloat(params::VELOCITY_Z, input.move_input.y));
        commands.extend(step.animation.commands());
        commands.push(AnimationCommand::SetBool(params::CROUCHING, input.crouch));

        // Cast
        let cast = self.cast.update(input.primary, input.secondary, dt);
        if let Some(kind) = cast {
            commands.push(kind.play_command(self.config.cast_layer));
        }

        // Look
        let look = self.look.apply(input.look, input.control_scheme, dt);
        if let Some(update) = look {
            if let Some(rig) = self.camera_rig.as_deref_mut() {
                rig.set_local_rotation(self.look.rig_rotation());
            }
            self.motor.rotate_yaw(update.yaw_delta);
        }

        #[cfg(debug_assertions)]
        self.draw_diagnostics(position, up, grounded);

        dispatch(&commands, self.animator.as_deref_mut());

        tracing::trace!(
            grounded,
            vertical_velocity = self.vertical.velocity(),
            speed = step.speed,
            jump_count = self.vertical.jump_count(),
            casting = self.cast.is_casting(),
            "tick"
        );

        TickReport {
            grounded,
            landed,
            jump,
            displacement,
            speed: step.speed,
            movement: step.animation,
            cast,
            look,
            animation: commands,
        }
    }

    /// Handle a callback authored into an animation clip.
    ///
    /// Returns the resolved target for attack events that hit something
    /// targetable.
    pub fn on_animation_event(&mut self, event: AnimationEvent) -> Option<CastTarget> {
        match event {
            AnimationEvent::FootLeft | AnimationEvent::FootRight => {
                tracing::trace!(?event, "footstep");
                None
            }
            AnimationEvent::Hit => {
                tracing::debug!("hit event");
                None
            }
            AnimationEvent::Land => {
                dispatch(
                    &[AnimationCommand::SetBool(params::IS_JUMPING, false)],
                    self.animator.as_deref_mut(),
                );
                None
            }
            AnimationEvent::Attack(hand) => {
                let screen_ray = self.camera_rig.as_deref()?.aim_ray()?;
                let raycaster = self.raycaster.as_deref()?;
                let origin = self.motor.hand_position(hand);

                let Some((ray, hit)) = resolve_cast(
                    raycaster,
                    screen_ray,
                    origin,
                    self.config.target_ray_length,
                    &self.config.target_tag,
                ) else {
                    tracing::trace!(?hand, "attack found no target");
                    return None;
                };

                tracing::debug!(?hand, point = ?hit.point, "attack resolved");
                self.last_cast_ray = Some(ray);
                Some(CastTarget {
                    ray,
                    adjacent: adjacent_to_hit(&hit),
                    hit,
                })
            }
        }
    }

    /// Apply the animator's root motion for this frame.
    ///
    /// Only upward lift survives the filter. It is applied with
    /// [`CharacterMotor::translate`] so the speed read back next tick is the
    /// locomotion speed. Returns the lift that was applied.
    pub fn apply_root_motion(&mut self, delta: Vec3) -> Vec3 {
        let lift = self.root_motion.filter(delta);
        if lift != Vec3::ZERO {
            self.motor.translate(lift);
        }
        lift
    }

    /// Return to the spawn state. Collaborators stay attached.
    pub fn reset(&mut self) {
        self.vertical.reset();
        self.locomotion.reset();
        self.cast.reset();
        self.look.reset();
        self.jump_button.reset();
        self.last_cast_ray = None;
        tracing::debug!("character controller reset");
    }

    #[cfg(debug_assertions)]
    fn draw_diagnostics(&mut self, position: Vec3, up: Vec3, grounded: bool) {
        let Some(diagnostics) = self.diagnostics.as_deref_mut() else {
            return;
        };

        let color = if grounded { GROUNDED_COLOR } else { AIRBORNE_COLOR };
        diagnostics.draw_sphere(
            self.ground_check.probe_center(position, up),
            self.ground_check.radius,
            color,
        );
        if let Some(ray) = self.last_cast_ray {
            diagnostics.draw_ray(ray, self.config.target_ray_length, CAST_RAY_COLOR);
        }
    }
}
