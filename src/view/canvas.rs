use bitflags::bitflags;

use crate::engine::{Grid, Rank};

bitflags! {
    /// Which of a character cell's four edges a grid line passes through.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Edges: u8 {
        const UP = 0b0001;
        const DOWN = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

/// Box-drawing glyphs indexed by `Edges` bits.
const BOX_CHARS: [char; 16] = [
    ' ', '╵', '╷', '│', '╴', '┘', '┐', '┤', '╶', '└', '┌', '├', '─', '┴', '┬', '┼',
];

/// One glyph per rank; rank 0 (empty) is a blank.
const RANK_GLYPHS: &str = " 123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl Edges {
    fn glyph(self) -> char {
        BOX_CHARS[self.bits() as usize]
    }
}

/// Paints a grid as lines of box-drawing characters.
///
/// Each cell is `cell_width` x `cell_height` characters with its tile glyph at
/// the centre; tiles show their rank, not the `2^rank` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    cell_width: usize,
    cell_height: usize,
}

impl Canvas {
    /// Cells narrower or shorter than 2 characters are widened to 2, so every glyph
    /// sits inside a cell instead of on a grid line.
    pub fn new(cell_width: usize, cell_height: usize) -> Self {
        Canvas { cell_width: cell_width.max(2), cell_height: cell_height.max(2) }
    }

    /// Glyph drawn for `rank`; ranks past `Z` draw `?`.
    pub fn rank_glyph(rank: Rank) -> char {
        RANK_GLYPHS.chars().nth(rank as usize).unwrap_or('?')
    }

    pub fn paint(&self, grid: &Grid) -> Vec<String> {
        let out_width = grid.width() * self.cell_width + 1;
        let out_height = grid.height() * self.cell_height + 1;

        let mut chars: Vec<Vec<char>> = (0..out_height)
            .map(|y| (0..out_width).map(|x| self.edges_at(x, y, out_width, out_height).glyph()).collect())
            .collect();

        for (pos, rank) in grid.iter() {
            let y = pos.row as usize * self.cell_height + self.cell_height / 2;
            let x = pos.col as usize * self.cell_width + self.cell_width / 2;
            chars[y][x] = Self::rank_glyph(rank);
        }

        chars.into_iter().map(String::from_iter).collect()
    }

    fn edges_at(&self, x: usize, y: usize, out_width: usize, out_height: usize) -> Edges {
        let mut edges = Edges::empty();
        if y % self.cell_height == 0 {
            if x != 0 {
                edges |= Edges::LEFT;
            }
            if x != out_width - 1 {
                edges |= Edges::RIGHT;
            }
        }
        if x % self.cell_width == 0 {
            if y != 0 {
                edges |= Edges::UP;
            }
            if y != out_height - 1 {
                edges |= Edges::DOWN;
            }
        }
        edges
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(4, 2)
    }
}
