use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    /// Produces a layout for `config` that keeps the safe zone around `start` clear.
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Result<MineLayout>;
}

/// Replays a fixed layout regardless of the first click, which may then be a mine.
impl MinefieldGenerator for MineLayout {
    fn generate(&mut self, config: GameConfig, _start: Coord2) -> Result<MineLayout> {
        if self.size() != config.size {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(self.clone())
    }
}

/// Places `mines` mines on `grid` around the safe cell `start` and fills in the neighbor counts.
pub fn place_mines<G: MinefieldGenerator + ?Sized>(
    grid: &mut Grid,
    generator: &mut G,
    mines: CellCount,
    start: Coord2,
) -> Result<()> {
    if !grid.contains(start) {
        return Err(GameError::InvalidCoords);
    }

    let config = GameConfig::new_unchecked(grid.size(), mines);
    let layout = generator.generate(config, start)?;
    grid.lay_mines(&layout)?;

    log::debug!(
        "Placed {} mines on {}x{} around {:?}",
        layout.mine_count(),
        config.cols(),
        config.rows(),
        start
    );
    Ok(())
}
