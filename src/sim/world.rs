//! Runtime world compiled from a level
//!
//! Compiling turns editor markers into actors: the player spawn becomes the
//! start position, enemy markers become patrol enemies (and are cleared from
//! the grid), and keys are counted for the goal requirement.

use glam::Vec2;

use super::state::{Checkpoint, Enemy, GameEvent, InputState, Pickup, Player};
use super::tick::update_physics;
use crate::level::{CellKind, Grid};
use crate::spawn_point;
use crate::tuning::Tuning;

/// Start position used when a level has no player marker
pub const FALLBACK_SPAWN: Vec2 = Vec2::new(50.0, 50.0);

/// Everything one play session mutates
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub grid: Grid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Keys present in the level at start
    pub total_keys: u32,
    pub spawn: Vec2,
}

impl World {
    /// Compile a level into a fresh world. The level itself is not modified.
    pub fn compile(level: &Grid, tuning: &Tuning) -> Self {
        let mut grid = level.clone();
        let mut spawn = FALLBACK_SPAWN;
        let mut total_keys = 0;
        let mut enemies = Vec::new();

        for (col, row, kind) in level.iter() {
            match kind {
                CellKind::PlayerSpawn => spawn = spawn_point(col, row),
                CellKind::Key => total_keys += 1,
                _ => {
                    if let Some(axis) = Enemy::axis_for(kind) {
                        enemies.push(Enemy::new(
                            axis,
                            spawn_point(col, row),
                            tuning.enemy_size,
                            tuning.enemy_speed,
                        ));
                        grid.set(col, row, CellKind::Empty);
                    }
                }
            }
        }

        log::debug!(
            "Compiled level: {} enemies, {} keys, spawn ({}, {})",
            enemies.len(),
            total_keys,
            spawn.x,
            spawn.y
        );

        Self {
            grid,
            player: Player::new(spawn, tuning.player_size),
            enemies,
            total_keys,
            spawn,
        }
    }

    /// Re-seed player and grid from a checkpoint snapshot. Enemies and the
    /// key total stay as compiled from the source level.
    pub fn apply_checkpoint(&mut self, checkpoint: &Checkpoint) {
        self.grid = checkpoint.grid.clone();
        self.player = Player::new(checkpoint.pos, self.player.size);
        self.player.score = checkpoint.score;
        self.player.keys = checkpoint.keys;
    }

    /// Advance one frame and report what happened.
    ///
    /// Collected coins and keys are cleared from the grid as soon as they
    /// are touched. A checkpoint touch snapshots the player's progress and
    /// the grid at that moment; the cell itself stays.
    pub fn step(&mut self, input: &InputState, tuning: &Tuning) -> Vec<GameEvent> {
        if self.player.is_finished() {
            return Vec::new();
        }

        let mut events = Vec::new();
        update_physics(
            &mut self.player,
            &mut self.grid,
            input,
            &mut self.enemies,
            self.total_keys,
            tuning,
            |grid: &mut Grid, player: &Player, pickup: Pickup| {
                let Pickup { col, row, kind } = pickup;
                match kind {
                    CellKind::Coin => {
                        grid.set(col, row, CellKind::Empty);
                        events.push(GameEvent::CoinCollected { col, row });
                    }
                    CellKind::Key => {
                        grid.set(col, row, CellKind::Empty);
                        events.push(GameEvent::KeyCollected { col, row });
                    }
                    CellKind::Checkpoint => {
                        let snapshot = Checkpoint {
                            pos: spawn_point(col, row),
                            score: player.score,
                            keys: player.keys,
                            grid: grid.clone(),
                        };
                        events.push(GameEvent::CheckpointReached { col, row, snapshot });
                    }
                    _ => {}
                }
            },
        );

        // Reaching the goal wins even if a hazard was touched in the same step
        if self.player.won {
            events.push(GameEvent::Won);
        } else if self.player.dead {
            events.push(GameEvent::Died);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Axis;

    fn level(rows: &[&str]) -> Grid {
        Grid::parse(rows).unwrap()
    }

    #[test]
    fn test_compile_materializes_markers() {
        let src = level(&["P.E.H", "K..K.", "XXXXG"]);
        let world = World::compile(&src, &Tuning::default());

        assert_eq!(world.spawn, spawn_point(0, 0));
        assert_eq!(world.player.pos, Vec2::new(4.0, 8.0));
        assert_eq!(world.total_keys, 2);
        assert_eq!(world.enemies.len(), 2);
        assert_eq!(world.enemies[0].axis, Axis::Vertical);
        assert_eq!(world.enemies[0].pos, spawn_point(2, 0));
        assert_eq!(world.enemies[1].axis, Axis::Horizontal);
        assert_eq!(world.enemies[1].vel, Vec2::new(2.0, 0.0));

        // Markers cleared in the runtime grid, source untouched
        assert_eq!(world.grid.get(2, 0), Some(CellKind::Empty));
        assert_eq!(world.grid.get(4, 0), Some(CellKind::Empty));
        assert_eq!(src.get(2, 0), Some(CellKind::EnemyVertical));
        assert_eq!(world.grid.get(0, 0), Some(CellKind::PlayerSpawn));
    }

    #[test]
    fn test_compile_without_player_marker() {
        let world = World::compile(&level(&["..G"]), &Tuning::default());
        assert_eq!(world.spawn, FALLBACK_SPAWN);
    }

    #[test]
    fn test_step_reports_pickups_and_clears() {
        // Player stands on the floor right before a coin, key and checkpoint
        let mut world = World::compile(&level(&["PCKV..", "XXXXXX"]), &Tuning::default());
        let right = InputState { right: true, ..Default::default() };

        let mut events = Vec::new();
        for _ in 0..30 {
            events.extend(world.step(&right, &Tuning::default()));
        }

        assert!(events.contains(&GameEvent::CoinCollected { col: 1, row: 0 }));
        assert!(events.contains(&GameEvent::KeyCollected { col: 2, row: 0 }));
        let snapshot = events.iter().find_map(|e| match e {
            GameEvent::CheckpointReached { col: 3, row: 0, snapshot } => Some(snapshot.clone()),
            _ => None,
        });
        let snapshot = snapshot.expect("checkpoint reached");
        assert_eq!(snapshot.pos, spawn_point(3, 0));
        assert_eq!(snapshot.score, 100);
        assert_eq!(snapshot.keys, 1);
        assert_eq!(snapshot.grid.get(1, 0), Some(CellKind::Empty));
        assert_eq!(snapshot.grid.get(3, 0), Some(CellKind::Checkpoint));

        assert_eq!(world.grid.count(CellKind::Coin), 0);
        assert_eq!(world.grid.count(CellKind::Key), 0);
        assert_eq!(world.grid.count(CellKind::Checkpoint), 1);
        assert_eq!(world.player.score, 100);
    }

    #[test]
    fn test_goal_and_spike_in_same_step_wins() {
        // Player straddles cols 0-1 and drops onto the goal and a spike at once
        let mut world = World::compile(&level(&["..", "GS", "XX"]), &Tuning::default());
        world.player.pos = Vec2::new(20.0, 4.0);

        let mut events = Vec::new();
        for _ in 0..10 {
            events.extend(world.step(&InputState::default(), &Tuning::default()));
        }
        assert!(world.player.won);
        assert!(world.player.dead);
        assert_eq!(events, vec![GameEvent::Won]);
    }

    #[test]
    fn test_step_emits_terminal_event_once() {
        let mut world = World::compile(&level(&["PS", "XX"]), &Tuning::default());
        let right = InputState { right: true, ..Default::default() };
        let mut died = 0;
        for _ in 0..20 {
            died += world
                .step(&right, &Tuning::default())
                .iter()
                .filter(|e| **e == GameEvent::Died)
                .count();
        }
        assert_eq!(died, 1);
    }

    #[test]
    fn test_apply_checkpoint() {
        let src = level(&["P.C.V", "XXXXX"]);
        let mut world = World::compile(&src, &Tuning::default());
        let mut grid = world.grid.clone();
        grid.set(2, 0, CellKind::Empty);
        let cp = Checkpoint {
            pos: spawn_point(4, 0),
            score: 100,
            keys: 0,
            grid,
        };
        world.apply_checkpoint(&cp);
        assert_eq!(world.player.pos, spawn_point(4, 0));
        assert_eq!(world.player.score, 100);
        assert_eq!(world.grid.get(2, 0), Some(CellKind::Empty));
        assert_eq!(world.player.vel, Vec2::ZERO);
    }
}
