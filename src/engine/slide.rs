use std::collections::HashSet;

use tracing::{debug, trace};

use super::{Grid, Move, Position, Rank};

/// How one direction decomposes the grid into lines and walks them.
#[derive(Clone, Copy)]
struct ScanPlan {
    axis: Axis,
    /// Visit each line back to front (the target wall is at the high index).
    reversed: bool,
    step: fn(Position) -> Position,
}

#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Columns,
}

impl ScanPlan {
    fn for_move(dir: Move) -> Self {
        match dir {
            Move::Left => ScanPlan { axis: Axis::Rows, reversed: false, step: Position::left },
            Move::Right => ScanPlan { axis: Axis::Rows, reversed: true, step: Position::right },
            Move::Up => ScanPlan { axis: Axis::Columns, reversed: false, step: Position::up },
            Move::Down => ScanPlan { axis: Axis::Columns, reversed: true, step: Position::down },
        }
    }

    fn lines(&self, grid: &Grid) -> Vec<Vec<Rank>> {
        match self.axis {
            Axis::Rows => grid.rows(),
            Axis::Columns => grid.columns(),
        }
    }

    /// Grid position of cell `inner` on line `outer`.
    fn position(&self, outer: usize, inner: usize) -> Position {
        match self.axis {
            Axis::Rows => Position::new(inner as i32, outer as i32),
            Axis::Columns => Position::new(outer as i32, inner as i32),
        }
    }
}

/// Executes whole-grid moves.
///
/// Holds the per-move set of cells that already absorbed a merge; it is reset
/// at the start of every [`execute`](SlideEngine::execute), so one engine can
/// be reused for a whole game.
#[derive(Debug, Default)]
pub struct SlideEngine {
    merged: HashSet<Position>,
}

impl SlideEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slide and merge every tile on `grid` towards `dir`.
    ///
    /// Returns `true` if any tile moved. A cell receives at most one merge per
    /// call, so `[1, 1, 1, 0]` slid left becomes `[2, 1, 0, 0]`.
    ///
    /// # Panics
    ///
    /// If a computed destination is neither empty nor rank-matching. That is a
    /// defect in the destination search and the grid would otherwise be corrupted.
    pub fn execute(&mut self, grid: &mut Grid, dir: Move) -> bool {
        self.merged.clear();
        let plan = ScanPlan::for_move(dir);

        let mut changed = false;
        for (outer, line) in plan.lines(grid).iter().enumerate() {
            let len = line.len();
            for visit in 0..len {
                let inner = if plan.reversed { len - 1 - visit } else { visit };
                if line[inner] == 0 {
                    continue;
                }
                let from = plan.position(outer, inner);
                changed |= self.slide_tile(grid, from, plan.step);
            }
        }

        debug!(%dir, changed, merges = self.merged.len(), "executed move");
        changed
    }

    /// Merges performed by the most recent [`execute`](SlideEngine::execute).
    pub fn last_merges(&self) -> usize {
        self.merged.len()
    }

    /// True if moving `grid` towards `dir` would change it. `grid` is untouched.
    pub fn can_move(grid: &Grid, dir: Move) -> bool {
        let mut scratch = grid.clone();
        SlideEngine::new().execute(&mut scratch, dir)
    }

    /// True if at least one direction changes `grid`.
    pub fn has_any_move(grid: &Grid) -> bool {
        Move::ALL.into_iter().any(|dir| Self::can_move(grid, dir))
    }

    fn slide_tile(&mut self, grid: &mut Grid, from: Position, step: fn(Position) -> Position) -> bool {
        let Some(to) = self.furthest_position(grid, from, step) else {
            return false;
        };
        let merged = grid
            .slide_one(from, to)
            .unwrap_or_else(|err| panic!("slide engine chose an illegal destination: {err}"));
        if merged {
            self.merged.insert(to);
        }
        trace!(?from, ?to, merged, "slid tile");
        true
    }

    /// Where the tile at `from` ends up, or `None` if it cannot move.
    fn furthest_position(&self, grid: &Grid, from: Position, step: fn(Position) -> Position) -> Option<Position> {
        let rank = grid.rank(from).filter(|&r| r != 0)?;

        let mut to = from;
        let mut next = step(from);
        while grid.rank(next) == Some(0) {
            to = next;
            next = step(next);
        }

        let mergeable = rank < Rank::MAX && !self.merged.contains(&next);
        if mergeable && grid.rank(next) == Some(rank) {
            to = next;
        }

        (to != from).then_some(to)
    }
}
