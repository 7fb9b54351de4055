use std::fmt;

use super::{Position, Rank};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos} is outside a {width}x{height} grid")]
    OutOfBounds { pos: Position, width: usize, height: usize },
    #[error("cannot slide rank {from_rank} from {from} onto rank {to_rank} at {to}")]
    InvalidSlideTarget { from: Position, to: Position, from_rank: Rank, to_rank: Rank },
    #[error("rows have unequal lengths (expected {expected}, row {row} has {found})")]
    RaggedRows { expected: usize, row: usize, found: usize },
}

/// Row-major matrix of tile ranks. `0` marks an empty cell.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Rank>,
}

impl Grid {
    /// An all-empty `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Grid { width, height, cells: vec![0; width * height] }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// True if `pos` lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool { self.index(pos).is_some() }

    /// Rank at `pos`, or `None` when `pos` is off the grid.
    #[inline]
    pub fn rank(&self, pos: Position) -> Option<Rank> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    pub fn get(&self, pos: Position) -> Result<Rank, GridError> {
        self.rank(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    pub fn set(&mut self, pos: Position, rank: Rank) -> Result<(), GridError> {
        let idx = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[idx] = rank;
        Ok(())
    }

    /// Snapshot of every row, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Rank>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells.chunks(self.width).map(<[Rank]>::to_vec).collect()
    }

    /// Snapshot of every column, left to right.
    pub fn columns(&self) -> Vec<Vec<Rank>> {
        (0..self.width)
            .map(|col| (0..self.height).map(|row| self.cells[row * self.width + col]).collect())
            .collect()
    }

    /// Highest rank on the grid (0 if every cell is empty).
    pub fn max_rank(&self) -> Rank {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Every empty cell, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter().filter(|&(_, rank)| rank == 0).map(|(pos, _)| pos).collect()
    }

    /// Number of occupied cells.
    pub fn count_tiles(&self) -> usize {
        self.cells.iter().filter(|&&rank| rank != 0).count()
    }

    /// `(position, rank)` for every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Rank)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(idx, &rank)| {
            (Position::new((idx % width) as i32, (idx / width) as i32), rank)
        })
    }

    /// Move the tile at `from` onto `to`, merging when the ranks match.
    ///
    /// `to` must be empty or hold the same rank as `from`. Returns `true` if the
    /// move was a merge. `from` is empty afterwards either way.
    pub fn slide_one(&mut self, from: Position, to: Position) -> Result<bool, GridError> {
        debug_assert_ne!(from, to, "slide_one called with identical endpoints");
        let from_rank = self.get(from)?;
        let to_rank = self.get(to)?;

        let (new_rank, merged) = if to_rank == 0 {
            (from_rank, false)
        } else if to_rank == from_rank {
            let bumped = to_rank
                .checked_add(1)
                .ok_or(GridError::InvalidSlideTarget { from, to, from_rank, to_rank })?;
            (bumped, true)
        } else {
            return Err(GridError::InvalidSlideTarget { from, to, from_rank, to_rank });
        };

        self.set(to, new_rank)?;
        self.set(from, 0)?;
        Ok(merged)
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let col = usize::try_from(pos.col).ok()?;
        let row = usize::try_from(pos.row).ok()?;
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }

    fn out_of_bounds(&self, pos: Position) -> GridError {
        GridError::OutOfBounds { pos, width: self.width, height: self.height }
    }
}

impl TryFrom<Vec<Vec<Rank>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Rank>>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRows { expected: width, row, found: line.len() });
            }
            cells.extend(line);
        }
        Ok(Grid { width, height, cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|rank| format!("{rank:>2}")).collect();
            writeln!(f, "[{}]", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Rank]]) -> Grid {
        Grid::try_from(rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(3, 2);
        assert_eq!(g.rows(), vec![vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(g.max_rank(), 0);
        assert_eq!(g.empty_positions().len(), 6);
        assert_eq!(g.count_tiles(), 0);
    }

    #[test]
    fn get_and_set_round_trip_in_bounds() {
        let mut g = Grid::new(4, 4);
        g.set(Position::new(3, 1), 5).unwrap();
        assert_eq!(g.get(Position::new(3, 1)), Ok(5));
        assert_eq!(g.rank(Position::new(3, 1)), Some(5));
        assert_eq!(g.get(Position::new(1, 3)), Ok(0));
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mut g = Grid::new(4, 2);
        for pos in [Position::new(-1, 0), Position::new(4, 0), Position::new(0, 2), Position::new(0, -1)] {
            assert!(!g.contains(pos));
            assert_eq!(g.rank(pos), None);
            assert_eq!(g.get(pos), Err(GridError::OutOfBounds { pos, width: 4, height: 2 }));
            assert!(matches!(g.set(pos, 1), Err(GridError::OutOfBounds { .. })));
        }
    }

    #[test]
    fn rows_and_columns_are_snapshots() {
        let mut g = grid(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(g.rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(g.columns(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);

        let mut rows = g.rows();
        rows[0][0] = 9;
        assert_eq!(g.get(Position::new(0, 0)), Ok(1));

        g.set(Position::new(0, 0), 7).unwrap();
        assert_eq!(rows[0][0], 9);
    }

    #[test]
    fn max_rank_finds_terminal_tile() {
        let mut g = grid(&[&[1, 3, 10, 0], &[2, 0, 0, 4]]);
        g.set(Position::new(1, 1), 11).unwrap();
        assert_eq!(g.max_rank(), 11);
        assert!(g.max_rank() >= 11);
    }

    #[test]
    fn empty_positions_are_row_major() {
        let g = grid(&[&[0, 1], &[2, 0]]);
        assert_eq!(g.empty_positions(), vec![Position::new(0, 0), Position::new(1, 1)]);
    }

    #[test]
    fn slide_one_into_empty_cell_copies_rank() {
        let mut g = grid(&[&[0, 0, 3]]);
        let merged = g.slide_one(Position::new(2, 0), Position::new(0, 0)).unwrap();
        assert!(!merged);
        assert_eq!(g.rows(), vec![vec![3, 0, 0]]);
    }

    #[test]
    fn slide_one_onto_equal_rank_merges() {
        let mut g = grid(&[&[2, 0, 2]]);
        let merged = g.slide_one(Position::new(2, 0), Position::new(0, 0)).unwrap();
        assert!(merged);
        assert_eq!(g.rows(), vec![vec![3, 0, 0]]);
    }

    #[test]
    fn slide_one_onto_other_rank_is_rejected() {
        let mut g = grid(&[&[1, 2]]);
        let err = g.slide_one(Position::new(1, 0), Position::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidSlideTarget {
                from: Position::new(1, 0),
                to: Position::new(0, 0),
                from_rank: 2,
                to_rank: 1,
            }
        );
        assert_eq!(g.rows(), vec![vec![1, 2]]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::try_from(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, GridError::RaggedRows { expected: 2, row: 1, found: 1 });
    }

    #[test]
    fn display_prints_rank_matrix() {
        let g = grid(&[&[1, 0], &[0, 11]]);
        assert_eq!(g.to_string(), "[ 1  0]\n[ 0 11]\n");
    }
}
