use std::fmt;

use super::Move;

/// A cell coordinate on a [`Grid`](super::Grid).
///
/// Coordinates are signed: stepping off an edge yields a position the grid
/// does not contain rather than wrapping or saturating.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Position { col, row }
    }

    #[inline]
    pub const fn left(self) -> Self {
        Position::new(self.col - 1, self.row)
    }

    #[inline]
    pub const fn right(self) -> Self {
        Position::new(self.col + 1, self.row)
    }

    #[inline]
    pub const fn up(self) -> Self {
        Position::new(self.col, self.row - 1)
    }

    #[inline]
    pub const fn down(self) -> Self {
        Position::new(self.col, self.row + 1)
    }

    /// One unit step in `dir`. No bounds checking.
    #[inline]
    pub const fn step(self, dir: Move) -> Self {
        match dir {
            Move::Up => self.up(),
            Move::Down => self.down(),
            Move::Left => self.left(),
            Move::Right => self.right(),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P({},{})", self.col, self.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbours_are_unit_steps() {
        let p = Position::new(2, 3);
        assert_eq!(p.left(), Position::new(1, 3));
        assert_eq!(p.right(), Position::new(3, 3));
        assert_eq!(p.up(), Position::new(2, 2));
        assert_eq!(p.down(), Position::new(2, 4));
    }

    #[test]
    fn neighbours_may_leave_the_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.left(), Position::new(-1, 0));
        assert_eq!(origin.up(), Position::new(0, -1));
    }

    #[test]
    fn step_matches_named_neighbour() {
        let p = Position::new(1, 1);
        assert_eq!(p.step(Move::Up), p.up());
        assert_eq!(p.step(Move::Down), p.down());
        assert_eq!(p.step(Move::Left), p.left());
        assert_eq!(p.step(Move::Right), p.right());
    }

    #[test]
    fn hashes_by_coordinates() {
        let mut set = HashSet::new();
        set.insert(Position::new(1, 2));
        assert!(set.contains(&Position::new(1, 2)));
        assert!(!set.contains(&Position::new(2, 1)));
    }
}
