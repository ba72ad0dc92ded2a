use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform generation strategy that optionally keeps the first clicked cell and its neighbours
/// free of mines.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    exclude: Option<Coord2>,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, exclude: Option<Coord2>) -> Self {
        Self { seed, exclude }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let size = config.size;
        if let Some((x, y)) = self.exclude {
            if x >= size || y >= size {
                return Err(GameError::InvalidCoords);
            }
        }

        let zone = exclusion_zone_size(size, self.exclude);
        check_playable(config, zone)?;

        let mut board = Board::new(size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut attempts: u32 = 0;

        // rejection sampling, bounded in practice since at least one playable cell stays free
        while board.mine_count() < config.mines {
            attempts += 1;
            let coords = (rng.random_range(0..size), rng.random_range(0..size));

            let excluded = self
                .exclude
                .is_some_and(|center| chebyshev_distance(coords, center) <= 1);
            if excluded {
                continue;
            }

            board.place_mine(coords);
        }

        board.compute_adjacency();
        log::debug!(
            "Generated {}x{} board with {} mines in {} draws, excluding {:?}",
            size,
            size,
            board.mine_count(),
            attempts,
            self.exclude
        );
        Ok(board)
    }
}
