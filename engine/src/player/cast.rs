//! Cast Actions
//!
//! Primary and secondary attacks with a single lock-out. Pressing either
//! button while idle starts a cast and plays one clip; further presses are
//! ignored until the timeout has run out and both buttons are released.

use crate::animation::{AnimationCommand, params};
use crate::config::ControllerConfig;
use crate::input::ButtonEdge;

/// Which attack clip a cast plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    Primary,
    Secondary,
    /// Both buttons held together
    Legendary,
}

impl CastKind {
    /// Pick the cast for the currently held buttons.
    pub fn from_buttons(primary: bool, secondary: bool) -> Option<Self> {
        match (primary, secondary) {
            (true, true) => Some(CastKind::Legendary),
            (true, false) => Some(CastKind::Primary),
            (false, true) => Some(CastKind::Secondary),
            (false, false) => None,
        }
    }

    /// Animation clip name.
    pub fn clip(self) -> &'static str {
        match self {
            CastKind::Primary => params::ATTACK_PRIMARY,
            CastKind::Secondary => params::ATTACK_SECONDARY,
            CastKind::Legendary => params::ATTACK_LEGENDARY,
        }
    }

    /// Play request for this cast's clip from its first frame.
    pub fn play_command(self, layer: u32) -> AnimationCommand {
        AnimationCommand::Play {
            clip: self.clip(),
            layer,
            normalized_time: 0.0,
        }
    }
}

/// Casting lock-out state.
#[derive(Debug, Clone)]
pub struct CastController {
    is_casting: bool,
    timeout_remaining: f32,
    cast_timeout: f32,
    primary: ButtonEdge,
    secondary: ButtonEdge,
}

impl Default for CastController {
    fn default() -> Self {
        Self::new(ControllerConfig::default().cast_timeout)
    }
}

impl CastController {
    pub fn new(cast_timeout: f32) -> Self {
        Self {
            is_casting: false,
            timeout_remaining: 0.0,
            cast_timeout,
            primary: ButtonEdge::new(),
            secondary: ButtonEdge::new(),
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(config.cast_timeout)
    }

    #[inline]
    pub fn is_casting(&self) -> bool {
        self.is_casting
    }

    #[inline]
    pub fn timeout_remaining(&self) -> f32 {
        self.timeout_remaining
    }

    /// Advance one tick. Returns the cast started this tick, if any.
    pub fn update(&mut self, primary: bool, secondary: bool, dt: f32) -> Option<CastKind> {
        let primary_pressed = self.primary.update(primary);
        let secondary_pressed = self.secondary.update(secondary);

        if self.is_casting {
            self.timeout_remaining = (self.timeout_remaining - dt).max(0.0);
            if self.timeout_remaining <= 0.0 && !primary && !secondary {
                self.is_casting = false;
                tracing::trace!("cast finished");
            }
            return None;
        }

        if !(primary_pressed || secondary_pressed) {
            return None;
        }

        let kind = CastKind::from_buttons(primary, secondary)?;
        self.is_casting = true;
        self.timeout_remaining = self.cast_timeout;
        tracing::debug!(?kind, "cast started");
        Some(kind)
    }

    pub fn reset(&mut self) {
        self.is_casting = false;
        self.timeout_remaining = 0.0;
        self.primary.reset();
        self.secondary.reset();
    }
}
