//! Shared defaults for divider drag gestures.
//!
//! Values are logical pixels of accumulated travel along the divider's axis.

/// How far a divider may travel towards the negative end of its axis
/// (left or up) within one gesture.
pub const DEFAULT_MIN_SIZE: f32 = 200.0;

/// How far a divider may travel towards the positive end of its axis
/// (right or down) within one gesture.
pub const DEFAULT_MAX_SIZE: f32 = 800.0;
