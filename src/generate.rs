//! Level generation boundary
//!
//! A generator turns a free-text prompt into a candidate grid. The language
//! model transport is supplied by the host; this module builds the request
//! text, decodes the reply and checks its dimensions. Whether the result is
//! playable (one player, one goal) is checked by the host like any other
//! level source.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{COLS, ROWS};
use crate::error::{MakerError, Result};
use crate::level::{CellKind, Grid};

/// Anything that can propose a level from a prompt
pub trait LevelGenerator {
    fn generate(&mut self, prompt: &str) -> Result<Grid>;
}

/// Instruction text sent to the language model
pub fn build_prompt(request: &str, cols: usize, rows: usize) -> String {
    format!(
        "Generate a stage for a 2D platformer in the style of a level maker game.\n\
         The stage is a grid {cols} cells wide and {rows} cells tall.\n\
         Use these characters:\n\
         . : empty\n\
         X : block (ground, walls)\n\
         P : player start (exactly one)\n\
         G : goal (exactly one)\n\
         S : spike (touching it is a miss)\n\
         J : jump pad\n\
         C : coin\n\
         K : key (all keys are required to open the goal)\n\
         V : save point\n\
         E : enemy moving vertically\n\
         H : enemy moving horizontally\n\
         \n\
         User request: {request}\n\
         \n\
         Always include exactly one P and one G, and make the stage clearable.\n\
         Reply with a JSON array of {rows} strings, each exactly {cols} characters."
    )
}

/// Decode a model reply: a JSON array of `rows` strings of `cols` cells each
pub fn parse_response(json: &str, cols: usize, rows: usize) -> Result<Grid> {
    let lines: Vec<String> = serde_json::from_str(json.trim())?;
    let width = lines.first().map_or(0, |l| l.chars().count());
    let ragged = lines.iter().any(|l| l.chars().count() != cols);
    if lines.len() != rows || ragged {
        return Err(MakerError::Dimensions {
            expected_cols: cols,
            expected_rows: rows,
            cols: width,
            rows: lines.len(),
        });
    }
    Grid::parse(&lines)
}

/// Generator backed by a language model reachable through `transport`,
/// which sends the prompt text and returns the raw reply body.
pub struct ModelGenerator<T> {
    transport: T,
    cols: usize,
    rows: usize,
}

impl<T> ModelGenerator<T>
where
    T: FnMut(&str) -> Result<String>,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cols: COLS,
            rows: ROWS,
        }
    }
}

impl<T> LevelGenerator for ModelGenerator<T>
where
    T: FnMut(&str) -> Result<String>,
{
    fn generate(&mut self, prompt: &str) -> Result<Grid> {
        let request = build_prompt(prompt, self.cols, self.rows);
        let reply = (self.transport)(&request)?;
        parse_response(&reply, self.cols, self.rows)
    }
}

/// Ask `generator` for a level, falling back to `current` on failure.
///
/// Returns the level to use plus the error to report to the user, if any.
/// An empty prompt is a no-op.
pub fn generate_or_keep<G>(generator: &mut G, prompt: &str, current: &Grid) -> (Grid, Option<MakerError>)
where
    G: LevelGenerator + ?Sized,
{
    if prompt.trim().is_empty() {
        return (current.clone(), None);
    }
    match generator.generate(prompt) {
        Ok(grid) => {
            log::info!("Generated level for prompt {prompt:?}");
            (grid, None)
        }
        Err(e) => {
            log::warn!("Level generation failed, keeping current level: {e}");
            (current.clone(), Some(e))
        }
    }
}

/// Offline generator: a seeded layout of floor, gaps, platforms, hazards and
/// pickups. The same seed and prompt always give the same level.
#[derive(Debug, Clone)]
pub struct ProceduralGenerator {
    pub seed: u64,
    pub cols: usize,
    pub rows: usize,
}

impl ProceduralGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            cols: COLS,
            rows: ROWS,
        }
    }

    fn build(&self, rng: &mut Pcg32) -> Grid {
        let (cols, rows) = (self.cols, self.rows);
        let mut grid = Grid::new(cols, rows);
        let ground = rows - 3; // row actors stand in

        for row in rows - 2..rows {
            for col in 0..cols {
                grid.set(col, row, CellKind::Block);
            }
        }

        // Gaps in the floor, never under the start or goal
        let safe = 4..cols.saturating_sub(4);
        let mut col = safe.start + rng.random_range(0..3);
        while col + 2 < safe.end {
            if rng.random_bool(0.3) {
                let width = rng.random_range(1..=2);
                for c in col..col + width {
                    grid.set(c, rows - 2, CellKind::Empty);
                    grid.set(c, rows - 1, CellKind::Empty);
                }
                col += width + 3;
            } else {
                if rng.random_bool(0.25) {
                    grid.set(col, ground, CellKind::Spike);
                }
                col += 2;
            }
        }

        // Floating platforms with a coin on top
        let platforms = rng.random_range(2..=4);
        for _ in 0..platforms {
            let len = rng.random_range(3..=5);
            let start = rng.random_range(3..cols.saturating_sub(len + 3).max(4));
            let row = rng.random_range(rows.saturating_sub(7)..rows - 4);
            for c in start..start + len {
                grid.set(c, row, CellKind::Block);
            }
            grid.set(start + len / 2, row - 1, CellKind::Coin);
            if rng.random_bool(0.3) {
                grid.set(start, row - 1, CellKind::Key);
            }
        }

        // One patrol enemy over solid ground
        let enemy_col = rng.random_range(cols / 3..cols * 2 / 3);
        if grid.get(enemy_col as i32, (rows - 2) as i32) == Some(CellKind::Block) {
            grid.set(enemy_col, ground, CellKind::EnemyHorizontal);
        }

        grid.set(1, ground, CellKind::PlayerSpawn);
        grid.set(cols - 2, ground, CellKind::Goal);
        grid
    }
}

impl LevelGenerator for ProceduralGenerator {
    fn generate(&mut self, prompt: &str) -> Result<Grid> {
        if self.cols < 12 || self.rows < 8 {
            return Err(MakerError::Generation(format!(
                "grid {}x{} too small for procedural levels",
                self.cols, self.rows
            )));
        }
        let mut rng = Pcg32::seed_from_u64(self.seed ^ prompt_hash(prompt));
        Ok(self.build(&mut rng))
    }
}

/// FNV-1a over the prompt bytes
fn prompt_hash(prompt: &str) -> u64 {
    prompt.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
