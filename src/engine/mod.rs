//! Grid and slide/merge engine.
//!
//! - [`Grid`]: a fixed-size matrix of tile ranks (0 = empty, rank `r` displays as `2^r`).
//! - [`SlideEngine`]: executes one directional move over a whole grid.
//! - [`Position`]: a (column, row) cell coordinate.
//!
//! ```
//! use term_2048::engine::{Grid, Move, Position, SlideEngine};
//!
//! let mut grid = Grid::new(4, 1);
//! grid.set(Position::new(0, 0), 1).unwrap();
//! grid.set(Position::new(2, 0), 1).unwrap();
//!
//! let mut engine = SlideEngine::new();
//! assert!(engine.execute(&mut grid, Move::Left));
//! assert_eq!(grid.rows(), vec![vec![2, 0, 0, 0]]);
//! assert!(!engine.execute(&mut grid, Move::Left));
//! ```

use std::fmt;

mod grid;
mod position;
mod slide;

pub use grid::{Grid, GridError};
pub use position::Position;
pub use slide::SlideEngine;

/// Tile rank stored in a grid cell. `0` is an empty cell.
pub type Rank = u8;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in a fixed order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The direction that undoes this one's packing.
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}
