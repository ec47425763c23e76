//! Spellcaster Engine Library
//!
//! A host-independent character controller: walking and sprinting with
//! smoothed speed, gravity with a multi-jump budget, camera pitch and body
//! yaw, root-motion lift and attack casts aimed by ray.
//!
//! The host engine owns collision, animation, rendering and input devices.
//! The controller reaches them only through the traits re-exported here and
//! is driven once per simulation tick.
//!
//! # Modules
//!
//! - [`player`] - [`CharacterController`] and its per-tick state machines
//! - [`physics`] - ground probe, ray queries, targeting and a block world
//! - [`camera`] - pitch clamping, look input and a follow camera
//! - [`animation`] - animator commands, events and root-motion filtering
//! - [`input`] - per-tick input snapshot and keyboard helpers
//! - [`config`] - [`ControllerConfig`] loading and sanitising
//! - [`diagnostics`] - optional debug gizmos
//!
//! # Example
//!
//! ```ignore
//! use spellcaster_engine::{CharacterController, ControllerConfig, FrameInput, KinematicBody};
//! use spellcaster_engine::physics::{Block, BlockWorld};
//! use glam::{Vec2, Vec3};
//!
//! let mut world = BlockWorld::new();
//! world.insert(Block::ground(50.0));
//!
//! let dt = 1.0 / 60.0;
//! let mut controller =
//!     CharacterController::new(ControllerConfig::default(), KinematicBody::new(Vec3::ZERO, dt), world);
//!
//! let report = controller.tick(&FrameInput::moving(Vec2::Y), dt);
//! assert!(report.grounded);
//! ```

pub mod animation;
pub mod camera;
pub mod config;
pub mod diagnostics;
pub mod input;
pub mod physics;
pub mod player;

pub use animation::{AnimationCommand, AnimationEvent, AnimationLog, AnimationSink, Hand};
pub use camera::{CameraRig, FollowCamera, LookController};
pub use config::{ConfigError, ControllerConfig};
pub use diagnostics::Diagnostics;
pub use input::{ControlScheme, FrameInput, InputState};
pub use physics::{GroundProbe, LayerMask, Ray, RayHit, Raycaster};
pub use player::{
    CastKind, CharacterController, CharacterMotor, ControllerState, JumpKind, KinematicBody,
    TickReport,
};
