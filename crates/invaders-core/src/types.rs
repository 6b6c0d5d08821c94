//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in stage space (points).
/// x grows to the right, y grows upward; the origin is the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Bounding size of an entity (points).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned frame of an entity, derived from its center and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line interpolation toward `other`. `t` is clamped to [0, 1].
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Same position moved by (dx, dy).
    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

impl Rect {
    /// Frame of an entity centered on `center`.
    pub fn centered(center: Position, size: Size) -> Self {
        Self {
            min_x: center.x - size.half_width(),
            min_y: center.y - size.half_height(),
            max_x: center.x + size.half_width(),
            max_y: center.y + size.half_height(),
        }
    }

    /// Whether two frames overlap (touching edges count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick. Elapsed time is derived from the tick count so
    /// it does not accumulate rounding drift.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
