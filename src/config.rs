//! Game settings shared by the binaries.

use crate::engine::Rank;

/// Configurable knobs for a game. Defaults match the classic board.
///
/// - `width`/`height`: grid dimensions in cells.
/// - `max_rank`: the game is won once any tile reaches this rank (11 = 2048).
/// - `start_tiles`: tiles spawned before the first move (at least one).
/// - `cell_width`/`cell_height`: characters per cell in the box-drawn views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub max_rank: Rank,
    pub start_tiles: usize,
    pub cell_width: usize,
    pub cell_height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { width: 4, height: 4, max_rank: 11, start_tiles: 1, cell_width: 4, cell_height: 2 }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("max rank must be between 1 and {}, got {0}", Rank::MAX - 1)]
    MaxRank(Rank),
    #[error("at least one start tile is needed before the first move")]
    NoStartTiles,
    #[error("{start_tiles} start tiles do not fit on {cells} cells")]
    TooManyStartTiles { start_tiles: usize, cells: usize },
    #[error("cells must be at least 2x2 characters, got {width}x{height}")]
    CellTooSmall { width: usize, height: usize },
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.max_rank == 0 || self.max_rank == Rank::MAX {
            return Err(ConfigError::MaxRank(self.max_rank));
        }
        let cells = self.width * self.height;
        if self.start_tiles == 0 {
            return Err(ConfigError::NoStartTiles);
        }
        if self.start_tiles > cells {
            return Err(ConfigError::TooManyStartTiles { start_tiles: self.start_tiles, cells });
        }
        if self.cell_width < 2 || self.cell_height < 2 {
            return Err(ConfigError::CellTooSmall { width: self.cell_width, height: self.cell_height });
        }
        Ok(())
    }
}
