/// Smallest accepted board dimension (rows or columns).
pub const GRID_DIM_MIN: u8 = 1;

/// Largest accepted board dimension (rows or columns).
/// Out-of-range requests are clamped, never rejected.
pub const GRID_DIM_MAX: u8 = 10;

/// Row count used when nothing is configured (the in-game table is 2x4).
pub const DEFAULT_ROWS: u8 = 2;

/// Column count used when nothing is configured.
pub const DEFAULT_COLS: u8 = 4;

/// Id of the distinguished lock token in the built-in catalog.
/// Placing it locks the target cell immediately, no partner required.
pub const LOCK_TOKEN_ID: &str = "padlock";
