use alloc::vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game of the selected difficulty, renewed on every reset.
///
/// Mines are placed on the first reveal with `G`, keeping that cell and its neighbors clear. Actions that cannot
/// apply (out of range, on a revealed or flagged cell, after the game ended) are ignored and report `NoChange`.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMinefieldGenerator> {
    difficulty: Difficulty,
    grid: Grid,
    status: GameStatus,
    mines_left: isize,
    stopwatch: Stopwatch,
    triggered_mine: Option<Coord2>,
    generator: G,
}

impl Game {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_generator(difficulty, RandomMinefieldGenerator::new(seed))
    }
}

impl<G: MinefieldGenerator> Game<G> {
    pub fn with_generator(difficulty: Difficulty, generator: G) -> Self {
        let config = difficulty.config();
        Self {
            difficulty,
            grid: Grid::new(config.size),
            status: GameStatus::Idle,
            mines_left: config.mines as isize,
            stopwatch: Stopwatch::new(),
            triggered_mine: None,
            generator,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.difficulty.config()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.grid.get(coords)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Preset mine count minus placed flags, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.mines_left
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.stopwatch.elapsed_secs()
    }

    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// One-second clock input from the host, only counted while playing.
    pub fn tick(&mut self) -> bool {
        self.stopwatch.tick()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::debug!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
        self.reset();
    }

    /// Stops the clock and starts over with an empty grid of the current difficulty.
    pub fn reset(&mut self) {
        let config = self.config();
        self.stopwatch.reset();
        self.grid = Grid::new(config.size);
        self.status = GameStatus::Idle;
        self.mines_left = config.mines as isize;
        self.triggered_mine = None;
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.status.is_finished() {
            log::debug!("Ignored flag at {:?}, game is over", coords);
            return MarkOutcome::NoChange;
        }

        let Some(cell) = self.grid.get_mut(coords) else {
            log::debug!("Ignored flag at {:?}, out of range", coords);
            return MarkOutcome::NoChange;
        };
        if cell.is_revealed {
            return MarkOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        self.mines_left += if cell.is_flagged { -1 } else { 1 };
        MarkOutcome::Changed
    }

    /// Opens `coords`, placing the mines first when the game has not started yet.
    ///
    /// The only error comes from mine placement, when the generator cannot honor the preset.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        if self.status.is_finished() {
            log::debug!("Ignored reveal at {:?}, game is over", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let Some(cell) = self.grid.get(coords) else {
            log::debug!("Ignored reveal at {:?}, out of range", coords);
            return Ok(RevealOutcome::NoChange);
        };
        if !cell.is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.status.is_idle() {
            let mines = self.config().mines;
            place_mines(&mut self.grid, &mut self.generator, mines, coords)?;
            self.status = GameStatus::Playing;
            self.stopwatch.start();
            log::info!("Started {} game at {:?}", self.difficulty, coords);
        }

        Ok(self.flood_reveal(coords))
    }

    fn flood_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.grid[visit_coords];
            if !cell.is_hidden() {
                continue;
            }
            cell.is_revealed = true;

            if cell.is_mine {
                self.lose(visit_coords);
                return RevealOutcome::HitMine;
            }

            if cell.neighbor_mines == 0 {
                to_visit.extend(
                    self.grid
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.grid[pos].is_hidden()),
                );
            }
        }

        if self.grid.unrevealed_safe_count() == 0 {
            self.win();
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn lose(&mut self, mine: Coord2) {
        self.status = GameStatus::Lost;
        self.stopwatch.stop();
        self.triggered_mine = Some(mine);
        self.grid.reveal_all_mines();
        log::info!(
            "Lost {} game on mine {:?} after {}s",
            self.difficulty,
            mine,
            self.stopwatch.elapsed_secs()
        );
    }

    fn win(&mut self) {
        self.status = GameStatus::Won;
        self.stopwatch.stop();
        self.grid.flag_all_mines();
        self.mines_left = 0;
        log::info!(
            "Won {} game after {}s",
            self.difficulty,
            self.stopwatch.elapsed_secs()
        );
    }
}
