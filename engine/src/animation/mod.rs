//! Animation Module
//!
//! The controller never talks to a skeleton directly. Each tick it produces a
//! list of [`AnimationCommand`]s which are forwarded to the host's
//! [`AnimationSink`], if one is attached.
//!
//! # Components
//!
//! - [`AnimationSink`] - host animator interface
//! - [`AnimationCommand`] - one parameter write, trigger, or clip request
//! - [`AnimationLog`] - a sink that records everything it receives
//! - [`AnimationEvent`] - callbacks fired by authored clips back into the controller
//! - [`RootMotionFilter`] - vertical-only root motion

pub mod params;
pub mod root_motion;

pub use root_motion::{DEFAULT_ROOT_MOTION_SCALE, RootMotionFilter};

/// Host animator interface.
///
/// All calls are fire-and-forget; the controller does not read anything back.
pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_trigger(&mut self, name: &str);
    /// Start `clip` on `layer` from `normalized_time` (0 = beginning).
    fn play(&mut self, clip: &str, layer: u32, normalized_time: f32);
}

/// A single request to the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    SetBool(&'static str, bool),
    SetFloat(&'static str, f32),
    Trigger(&'static str),
    Play {
        clip: &'static str,
        layer: u32,
        normalized_time: f32,
    },
}

impl AnimationCommand {
    /// Forward this command to `sink`.
    pub fn apply<S: AnimationSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            AnimationCommand::SetBool(name, value) => sink.set_bool(name, value),
            AnimationCommand::SetFloat(name, value) => sink.set_float(name, value),
            AnimationCommand::Trigger(name) => sink.set_trigger(name),
            AnimationCommand::Play {
                clip,
                layer,
                normalized_time,
            } => sink.play(clip, layer, normalized_time),
        }
    }
}

/// Forward every command to `sink`. With no sink attached this is a no-op.
pub fn dispatch<S: AnimationSink + ?Sized>(commands: &[AnimationCommand], sink: Option<&mut S>) {
    if let Some(sink) = sink {
        for command in commands {
            command.apply(&mut *sink);
        }
    }
}

/// Which hand an attack event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Callbacks authored into animation clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    FootLeft,
    FootRight,
    /// The landing clip finished
    Land,
    Hit,
    /// The attack clip reached its release frame
    Attack(Hand),
}

/// An [`AnimationSink`] that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct AnimationLog {
    commands: Vec<(String, AnimationValue)>,
}

/// Owned form of a recorded command.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationValue {
    Bool(bool),
    Float(f32),
    Trigger,
    Play { layer: u32, normalized_time: f32 },
}

impl AnimationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn entries(&self) -> &[(String, AnimationValue)] {
        &self.commands
    }

    /// Number of times trigger `name` was set.
    pub fn trigger_count(&self, name: &str) -> usize {
        self.commands
            .iter()
            .filter(|(n, v)| n == name && *v == AnimationValue::Trigger)
            .count()
    }

    /// Number of times clip `name` was played.
    pub fn play_count(&self, name: &str) -> usize {
        self.commands
            .iter()
            .filter(|(n, v)| n == name && matches!(v, AnimationValue::Play { .. }))
            .count()
    }

    /// Most recent value written to bool parameter `name`.
    pub fn last_bool(&self, name: &str) -> Option<bool> {
        self.commands.iter().rev().find_map(|(n, v)| match v {
            AnimationValue::Bool(b) if n == name => Some(*b),
            _ => None,
        })
    }

    /// Most recent value written to float parameter `name`.
    pub fn last_float(&self, name: &str) -> Option<f32> {
        self.commands.iter().rev().find_map(|(n, v)| match v {
            AnimationValue::Float(f) if n == name => Some(*f),
            _ => None,
        })
    }
}

impl AnimationSink for AnimationLog {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.commands.push((name.to_string(), AnimationValue::Bool(value)));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.commands.push((name.to_string(), AnimationValue::Float(value)));
    }

    fn set_trigger(&mut self, name: &str) {
        self.commands.push((name.to_string(), AnimationValue::Trigger));
    }

    fn play(&mut self, clip: &str, layer: u32, normalized_time: f32) {
        self.commands.push((
            clip.to_string(),
            AnimationValue::Play {
                layer,
                normalized_time,
            },
        ));
    }
}
