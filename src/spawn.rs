//! Random tile placement between moves.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::engine::{Grid, Position, Rank};

/// Places a new tile on a uniformly chosen empty cell.
///
/// Rank 1 (displayed 2) nine times in ten, rank 2 (displayed 4) otherwise.
/// Randomness comes only from the `Rng` passed in, so a seeded `StdRng`
/// reproduces a game exactly.
///
/// ```
/// use term_2048::engine::Grid;
/// use term_2048::spawn::TileSpawner;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(123);
/// let mut grid = Grid::new(4, 4);
/// let (pos, rank) = TileSpawner::new().spawn(&mut grid, &mut rng).unwrap();
/// assert_eq!(grid.get(pos).unwrap(), rank);
/// assert_eq!(grid.empty_positions().len(), 15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TileSpawner {
    /// Out of ten draws, how many produce the low rank.
    low_rank_weight: u32,
}

impl TileSpawner {
    pub const LOW_RANK: Rank = 1;
    pub const HIGH_RANK: Rank = 2;

    pub fn new() -> Self {
        TileSpawner { low_rank_weight: 9 }
    }

    /// Place one tile. Returns `None` (and leaves `grid` alone) when it is full.
    pub fn spawn<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Option<(Position, Rank)> {
        let pos = *grid.empty_positions().choose(rng)?;
        let rank = self.random_rank(rng);
        grid.set(pos, rank).ok()?;
        debug!(?pos, rank, "spawned tile");
        Some((pos, rank))
    }

    fn random_rank<R: Rng + ?Sized>(&self, rng: &mut R) -> Rank {
        if rng.gen_range(0..10) < self.low_rank_weight { Self::LOW_RANK } else { Self::HIGH_RANK }
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn fills_every_cell_then_stops() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(4, 4);
        let spawner = TileSpawner::new();
        for _ in 0..16 {
            assert!(spawner.spawn(&mut grid, &mut rng).is_some());
        }
        assert!(grid.empty_positions().is_empty());

        let before = grid.clone();
        assert_eq!(spawner.spawn(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn only_spawns_into_empty_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::try_from(vec![vec![3, 3, 0], vec![3, 3, 3]]).unwrap();
        let (pos, rank) = TileSpawner::new().spawn(&mut grid, &mut rng).unwrap();
        assert_eq!(pos, Position::new(2, 0));
        assert!(rank == TileSpawner::LOW_RANK || rank == TileSpawner::HIGH_RANK);
    }

    #[test]
    fn seeded_rng_reproduces_spawns() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(4, 4);
            (0..8).map(|_| TileSpawner::new().spawn(&mut grid, &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn rank_split_is_roughly_nine_to_one() {
        let mut rng = StdRng::seed_from_u64(2048);
        let spawner = TileSpawner::new();
        let draws = 10_000;
        let low = (0..draws).filter(|_| spawner.random_rank(&mut rng) == TileSpawner::LOW_RANK).count();
        let share = low as f64 / draws as f64;
        assert!((0.87..0.93).contains(&share), "low-rank share {share}");
    }
}
