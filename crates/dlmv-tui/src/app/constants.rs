//! Application constants.

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;

/// How long transient messages stay on screen, in milliseconds.
pub const MESSAGE_TTL_MS: u64 = 3000;
