//! Cell vocabulary
//!
//! Every grid cell is one of a closed set of kinds, each with a single
//! character code used by the editor, level files and the generator.

use serde::{Deserialize, Serialize};

/// Tile semantics for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum CellKind {
    #[default]
    Empty,
    /// Solid block (floor, wall, ceiling)
    Block,
    /// Kills on touch
    Spike,
    /// Win on touch once all keys are held
    Goal,
    /// Launches the player upward when landed on
    JumpPad,
    Coin,
    Key,
    /// Save point; touching it captures a checkpoint
    Checkpoint,
    /// Player start marker
    PlayerSpawn,
    /// Spawns an enemy patrolling up and down
    EnemyVertical,
    /// Spawns an enemy patrolling left and right
    EnemyHorizontal,
}

impl CellKind {
    /// All kinds in editor palette order
    pub const ALL: [CellKind; 11] = [
        CellKind::Block,
        CellKind::Spike,
        CellKind::JumpPad,
        CellKind::EnemyVertical,
        CellKind::EnemyHorizontal,
        CellKind::Coin,
        CellKind::Key,
        CellKind::Checkpoint,
        CellKind::PlayerSpawn,
        CellKind::Goal,
        CellKind::Empty,
    ];

    pub fn as_char(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Block => 'X',
            CellKind::Spike => 'S',
            CellKind::Goal => 'G',
            CellKind::JumpPad => 'J',
            CellKind::Coin => 'C',
            CellKind::Key => 'K',
            CellKind::Checkpoint => 'V',
            CellKind::PlayerSpawn => 'P',
            CellKind::EnemyVertical => 'E',
            CellKind::EnemyHorizontal => 'H',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellKind::Empty),
            'X' => Some(CellKind::Block),
            'S' => Some(CellKind::Spike),
            'G' => Some(CellKind::Goal),
            'J' => Some(CellKind::JumpPad),
            'C' => Some(CellKind::Coin),
            'K' => Some(CellKind::Key),
            'V' => Some(CellKind::Checkpoint),
            'P' => Some(CellKind::PlayerSpawn),
            'E' => Some(CellKind::EnemyVertical),
            'H' => Some(CellKind::EnemyHorizontal),
            _ => None,
        }
    }

    /// Blocks movement of the player and reverses enemies
    #[inline]
    pub fn is_solid(self) -> bool {
        self == CellKind::Block
    }

    /// Kills the player on overlap. Both enemy markers count, so a grid
    /// that was never compiled treats either marker as deadly.
    #[inline]
    pub fn is_hazard(self) -> bool {
        matches!(
            self,
            CellKind::Spike | CellKind::EnemyVertical | CellKind::EnemyHorizontal
        )
    }

    /// Reported to the host through the pickup handler
    #[inline]
    pub fn is_pickup(self) -> bool {
        matches!(self, CellKind::Coin | CellKind::Key | CellKind::Checkpoint)
    }

    /// Marker that becomes a patrol enemy at session start
    #[inline]
    pub fn is_enemy_spawn(self) -> bool {
        matches!(self, CellKind::EnemyVertical | CellKind::EnemyHorizontal)
    }
}

impl From<CellKind> for char {
    fn from(kind: CellKind) -> char {
        kind.as_char()
    }
}

impl TryFrom<char> for CellKind {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        CellKind::from_char(c).ok_or_else(|| format!("unknown cell code {c:?}"))
    }
}
