//! Animator parameter and clip names.
//!
//! These are the names the character's animator graph is authored against.

// Bool parameters
pub const GROUNDED: &str = "Grounded";
pub const FALLING: &str = "Falling";
pub const MOVING: &str = "Moving";
pub const CROUCHING: &str = "Crouching";
pub const IS_JUMPING: &str = "IsJumping";
pub const IS_RUNNING: &str = "IsRunning";
pub const IS_RUNNING_BACK: &str = "IsRunningBack";
pub const IS_STRAFING_LEFT: &str = "IsStrafingLeft";
pub const IS_STRAFING_RIGHT: &str = "IsStrafingRight";
pub const IS_SPRINTING: &str = "IsSprinting";

// Float parameters
pub const VELOCITY_X: &str = "Velocity X";
pub const VELOCITY_Z: &str = "Velocity Z";

// Triggers
pub const LAND: &str = "Land";
pub const JUMP: &str = "Jump";
pub const FLIP: &str = "Flip";

// Clips
pub const ATTACK_PRIMARY: &str = "AttackPrimary";
pub const ATTACK_SECONDARY: &str = "AttackSecondary";
pub const ATTACK_LEGENDARY: &str = "AttackLegendary";
