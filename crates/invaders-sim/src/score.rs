//! Running score and ship health for a round.
//!
//! Stored in the engine, not as ECS entities.

use invaders_core::config::GameRules;
use invaders_core::state::ScoreView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub health: f64,
    pub invaders_destroyed: u32,
    pub ship_hits: u32,
}

impl ScoreState {
    /// Fresh state for a round: zero score, full health.
    pub fn new(rules: &GameRules) -> Self {
        Self {
            health: rules.ship_max_health,
            ..Default::default()
        }
    }

    /// Record a destroyed invader. Returns the points awarded.
    pub fn record_invader_destroyed(&mut self, rules: &GameRules) -> u32 {
        self.invaders_destroyed += 1;
        self.score += rules.score_per_invader;
        rules.score_per_invader
    }

    /// Record a hit on the ship. Returns the health lost.
    pub fn record_ship_hit(&mut self, rules: &GameRules) -> f64 {
        self.ship_hits += 1;
        let lost = rules.ship_damage_per_hit.min(self.health);
        self.health -= lost;
        lost
    }

    pub fn view(&self, invaders_remaining: u32) -> ScoreView {
        ScoreView {
            score: self.score,
            health: self.health,
            invaders_destroyed: self.invaders_destroyed,
            invaders_remaining,
        }
    }
}
