//! Session lifecycle
//!
//! `Playing -> Dead`, `Playing -> Won`, and back to `Playing` on restart.
//! Restart re-compiles the supplied level and, when a checkpoint has been
//! captured, re-seeds the player and grid from it. The level supplied by the
//! host is never mutated.

use serde::{Deserialize, Serialize};

use crate::level::Grid;
use crate::sim::{Enemy, GameEvent, InputState, Player, World};
use crate::tuning::Tuning;

pub use crate::sim::Checkpoint;

/// Host-visible play state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Dead,
    Won,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Playing => "playing",
            SessionState::Dead => "dead",
            SessionState::Won => "won",
        }
    }
}

/// One play session of a level
#[derive(Debug, Clone)]
pub struct Session {
    level: Grid,
    tuning: Tuning,
    world: World,
    checkpoint: Option<Checkpoint>,
    state: SessionState,
}

impl Session {
    /// Start playing `level` from its player marker
    pub fn new(level: Grid, tuning: Tuning) -> Self {
        let world = World::compile(&level, &tuning);
        log::info!(
            "Session started: {} enemies, {} keys",
            world.enemies.len(),
            world.total_keys
        );
        Self {
            level,
            tuning,
            world,
            checkpoint: None,
            state: SessionState::Playing,
        }
    }

    /// Advance one frame. Does nothing unless playing.
    pub fn step(&mut self, input: &InputState) -> Vec<GameEvent> {
        if self.state != SessionState::Playing {
            return Vec::new();
        }

        let events = self.world.step(input, &self.tuning);
        for event in &events {
            match event {
                GameEvent::CheckpointReached { col, row, snapshot } => {
                    if self.checkpoint.as_ref() != Some(snapshot) {
                        log::info!("Checkpoint saved at ({col}, {row})");
                    }
                    self.checkpoint = Some(snapshot.clone());
                }
                GameEvent::Died => {
                    log::info!("Player died (score {})", self.world.player.score);
                    self.state = SessionState::Dead;
                }
                GameEvent::Won => {
                    log::info!("Level cleared (score {})", self.world.player.score);
                    self.state = SessionState::Won;
                }
                GameEvent::CoinCollected { .. } | GameEvent::KeyCollected { .. } => {}
            }
        }
        events
    }

    /// Restart from the last checkpoint, or from the level start
    pub fn restart(&mut self) {
        self.world = World::compile(&self.level, &self.tuning);
        match &self.checkpoint {
            Some(checkpoint) => {
                self.world.apply_checkpoint(checkpoint);
                log::info!("Restarted from checkpoint");
            }
            None => log::info!("Restarted from level start"),
        }
        self.state = SessionState::Playing;
    }

    /// Switch to a different level, discarding any checkpoint
    pub fn load_level(&mut self, level: Grid) {
        self.level = level;
        self.checkpoint = None;
        self.restart();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.world.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.world.enemies
    }

    /// Runtime grid (markers and collected pickups cleared)
    pub fn grid(&self) -> &Grid {
        &self.world.grid
    }

    /// The level as supplied by the host
    pub fn level(&self) -> &Grid {
        &self.level
    }

    pub fn total_keys(&self) -> u32 {
        self.world.total_keys
    }

    pub fn checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoint.as_ref()
    }
}
