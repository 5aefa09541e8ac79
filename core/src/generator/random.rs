use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Purely random placement that keeps the 3x3 block around the first click mine-free.
///
/// Sparse boards use rejection sampling over random coordinates. Once the quota exceeds half of the eligible cells
/// the generator instead draws an index among the cells still free, so every draw places a mine.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator {
    rng: SmallRng,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn sample_rejecting(&mut self, mines: &mut Array2<bool>, config: GameConfig, start: Coord2) {
        let (size_x, size_y) = config.size;
        let mut mines_placed = 0;

        while mines_placed < config.mines {
            let coords = (self.rng.random_range(0..size_x), self.rng.random_range(0..size_y));
            let cell = &mut mines[coords.to_nd_index()];
            if *cell || chebyshev_distance(coords, start) <= 1 {
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }
    }

    fn sample_indexed(&mut self, mines: &mut Array2<bool>, config: GameConfig, start: Coord2) {
        let mut free_cells = config.eligible_cells(start);

        for _ in 0..config.mines {
            let place = self.rng.random_range(0..free_cells);
            let chosen = mines
                .indexed_iter_mut()
                .filter(|(index, is_mine)| {
                    !**is_mine && chebyshev_distance(from_nd_index(*index), start) > 1
                })
                .nth(place.into());
            if let Some((_, is_mine)) = chosen {
                *is_mine = true;
            }
            free_cells -= 1;
        }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Result<MineLayout> {
        GameConfig::new(config.size, config.mines)?;

        let available = config.eligible_cells(start);
        if config.mines > available {
            log::warn!(
                "Cannot place {} mines on {}x{} around {:?}, only {} cells are eligible",
                config.mines,
                config.cols(),
                config.rows(),
                start,
                available
            );
            return Err(GameError::TooManyMines {
                requested: config.mines,
                available,
            });
        }

        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        if config.mines.saturating_mul(2) <= available {
            self.sample_rejecting(&mut mines, config, start);
        } else {
            log::debug!(
                "Dense board, {} mines for {} eligible cells, sampling by index",
                config.mines,
                available
            );
            self.sample_indexed(&mut mines, config, start);
        }

        Ok(MineLayout::from_mine_mask(mines))
    }
}
