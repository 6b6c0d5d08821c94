//! Simulation constants and tuning defaults.
//!
//! Values that a round may override live in `config::GameRules`; the
//! constants here are its defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Stage ---

/// Stage width in points.
pub const STAGE_WIDTH: f64 = 320.0;

/// Stage height in points.
pub const STAGE_HEIGHT: f64 = 568.0;

// --- Invader formation ---

pub const INVADER_WIDTH: f64 = 24.0;
pub const INVADER_HEIGHT: f64 = 16.0;

/// Horizontal gap between neighbouring invaders in a row.
pub const INVADER_GRID_SPACING_X: f64 = 12.0;

/// Vertical gap between rows (rows are placed on a pitch of twice the
/// invader height, this is kept for frames that need the spacing itself).
pub const INVADER_GRID_SPACING_Y: f64 = 12.0;

pub const INVADER_ROW_COUNT: u32 = 6;
pub const INVADER_COL_COUNT: u32 = 6;

/// Y coordinate of the formation origin; row 1 sits one pitch above it.
pub const INVADER_BASE_ORIGIN_Y: f64 = 180.0;

/// Distance the formation moves per move application (both lateral and drop).
pub const FORMATION_STEP: f64 = 10.0;

/// Seconds between two formation move applications.
pub const TIME_PER_MOVE: f64 = 1.0;

/// Distance from the stage edge at which the formation turns around.
pub const FORMATION_EDGE_MARGIN: f64 = 1.0;

// --- Ship ---

pub const SHIP_WIDTH: f64 = 30.0;
pub const SHIP_HEIGHT: f64 = 16.0;

/// Ship mass used to turn steering force into acceleration.
pub const SHIP_MASS: f64 = 0.02;

/// Force applied per unit of steering input.
pub const STEERING_FORCE_SCALE: f64 = 40.0;

/// Steering magnitudes at or below this value apply no force.
pub const STEERING_DEADZONE: f64 = 0.2;

/// Cap on the ship's lateral speed (points per second).
pub const SHIP_MAX_SPEED: f64 = 240.0;

/// Starting ship health (1.0 = full).
pub const SHIP_MAX_HEALTH: f64 = 1.0;

/// Health lost each time an invader bullet hits the ship.
pub const SHIP_DAMAGE_PER_HIT: f64 = 0.334;

// --- Bullets ---

pub const BULLET_WIDTH: f64 = 4.0;
pub const BULLET_HEIGHT: f64 = 8.0;

/// Seconds for a ship bullet to reach the top of the stage.
pub const SHIP_BULLET_TRAVEL_SECS: f64 = 1.0;

/// Seconds for an invader bullet to reach the bottom of the stage.
pub const INVADER_BULLET_TRAVEL_SECS: f64 = 2.0;

/// Grace delay after a bullet arrives before it is removed (three frames).
pub const BULLET_LINGER_SECS: f64 = 3.0 / 60.0;

// --- Scoring ---

/// Points awarded per destroyed invader.
pub const SCORE_PER_INVADER: u32 = 100;
