//! Events emitted by the simulation for audio and HUD feedback.
//!
//! Both streams are fire-and-forget: they are drained into the snapshot
//! every tick and nothing acknowledges them.

use serde::{Deserialize, Serialize};

/// Sound cues for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A ship bullet was fired.
    ShipFired,
    /// An invader bullet was fired.
    InvaderFired,
    /// An invader bullet hit the ship.
    ShipHit,
    /// A ship bullet destroyed an invader.
    InvaderHit,
}

impl AudioEvent {
    /// Sound file the cue maps to.
    pub fn sound_name(self) -> &'static str {
        match self {
            AudioEvent::ShipFired => "ShipBullet.wav",
            AudioEvent::InvaderFired => "InvaderBullet.wav",
            AudioEvent::ShipHit => "ShipHit.wav",
            AudioEvent::InvaderHit => "InvaderHit.wav",
        }
    }
}

/// Score and health signals for the HUD collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScoreEvent {
    ScoreIncrement { points: u32 },
    HealthDecrement { amount: f64 },
}
