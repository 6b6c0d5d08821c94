//! Round rules: every tunable of the simulation, with defaults from
//! `constants`. Loaded from JSON; missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Size;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value outside its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunables for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub stage: Size,

    pub invader_size: Size,
    pub invader_grid_spacing: Size,
    pub invader_rows: u32,
    pub invader_cols: u32,
    pub invader_base_origin_y: f64,
    pub formation_step: f64,
    pub time_per_move: f64,
    pub formation_edge_margin: f64,

    pub ship_size: Size,
    pub ship_mass: f64,
    pub ship_max_speed: f64,
    pub steering_force_scale: f64,
    pub steering_deadzone: f64,
    pub ship_max_health: f64,
    pub ship_damage_per_hit: f64,

    pub bullet_size: Size,
    pub ship_bullet_travel_secs: f64,
    pub invader_bullet_travel_secs: f64,
    pub bullet_linger_secs: f64,

    pub score_per_invader: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            stage: Size::new(STAGE_WIDTH, STAGE_HEIGHT),
            invader_size: Size::new(INVADER_WIDTH, INVADER_HEIGHT),
            invader_grid_spacing: Size::new(INVADER_GRID_SPACING_X, INVADER_GRID_SPACING_Y),
            invader_rows: INVADER_ROW_COUNT,
            invader_cols: INVADER_COL_COUNT,
            invader_base_origin_y: INVADER_BASE_ORIGIN_Y,
            formation_step: FORMATION_STEP,
            time_per_move: TIME_PER_MOVE,
            formation_edge_margin: FORMATION_EDGE_MARGIN,
            ship_size: Size::new(SHIP_WIDTH, SHIP_HEIGHT),
            ship_mass: SHIP_MASS,
            ship_max_speed: SHIP_MAX_SPEED,
            steering_force_scale: STEERING_FORCE_SCALE,
            steering_deadzone: STEERING_DEADZONE,
            ship_max_health: SHIP_MAX_HEALTH,
            ship_damage_per_hit: SHIP_DAMAGE_PER_HIT,
            bullet_size: Size::new(BULLET_WIDTH, BULLET_HEIGHT),
            ship_bullet_travel_secs: SHIP_BULLET_TRAVEL_SECS,
            invader_bullet_travel_secs: INVADER_BULLET_TRAVEL_SECS,
            bullet_linger_secs: BULLET_LINGER_SECS,
            score_per_invader: SCORE_PER_INVADER,
        }
    }
}

impl GameRules {
    /// Parse and validate rules from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let rules: GameRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load and validate rules from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check every value is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size("stage", self.stage)?;
        check_size("invader_size", self.invader_size)?;
        check_size("ship_size", self.ship_size)?;
        check_size("bullet_size", self.bullet_size)?;
        if self.invader_rows == 0 {
            return Err(invalid("invader_rows", "must be at least 1"));
        }
        if self.invader_cols == 0 {
            return Err(invalid("invader_cols", "must be at least 1"));
        }
        check_positive("time_per_move", self.time_per_move)?;
        check_positive("formation_step", self.formation_step)?;
        if self.formation_edge_margin.is_nan() || self.formation_edge_margin < 0.0 {
            return Err(invalid("formation_edge_margin", "must not be negative"));
        }
        check_positive("ship_mass", self.ship_mass)?;
        check_positive("ship_max_speed", self.ship_max_speed)?;
        check_positive("steering_force_scale", self.steering_force_scale)?;
        check_positive("ship_max_health", self.ship_max_health)?;
        check_positive("ship_damage_per_hit", self.ship_damage_per_hit)?;
        check_positive("ship_bullet_travel_secs", self.ship_bullet_travel_secs)?;
        check_positive("invader_bullet_travel_secs", self.invader_bullet_travel_secs)?;
        if self.bullet_linger_secs < 0.0 {
            return Err(invalid("bullet_linger_secs", "must not be negative"));
        }
        if !(0.0..1.0).contains(&self.steering_deadzone) {
            return Err(invalid("steering_deadzone", "must be in [0, 1)"));
        }
        Ok(())
    }

    /// Formation origin; the first column sits a third of the way across.
    pub fn invader_base_origin_x(&self) -> f64 {
        self.stage.width / 3.0
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be positive"))
    }
}

fn check_size(field: &'static str, size: Size) -> Result<(), ConfigError> {
    if size.width > 0.0 && size.height > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "width and height must be positive"))
    }
}
