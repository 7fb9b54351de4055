//! Rendering and player input.
//!
//! The game loop only talks to the [`Renderer`] and [`CommandSource`] traits.
//! Two implementations ship with the crate:
//! - [`TextView`]: prints a box-drawn grid and reads `wasd`/`q` lines.
//! - [`TerminalView`]: raw-mode terminal driven by the arrow keys.

use std::io;

use crate::engine::{Grid, Move};

mod canvas;
mod terminal;
mod text;

pub use canvas::Canvas;
pub use terminal::TerminalView;
pub use text::TextView;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Slide(Move),
    Exit,
    /// Unrecognised input; the loop treats it as a no-op.
    Invalid,
}

impl Command {
    /// Map one line of typed input (`w`, `a`, `s`, `d`, `q`).
    pub fn from_text(input: &str) -> Command {
        match input.trim().to_ascii_lowercase().as_str() {
            "w" => Command::Slide(Move::Up),
            "a" => Command::Slide(Move::Left),
            "s" => Command::Slide(Move::Down),
            "d" => Command::Slide(Move::Right),
            "q" => Command::Exit,
            _ => Command::Invalid,
        }
    }
}

pub trait Renderer {
    fn draw(&mut self, grid: &Grid) -> io::Result<()>;
}

pub trait CommandSource {
    fn next_command(&mut self) -> io::Result<Command>;
}

/// Something that can both draw the grid and read commands.
pub trait View: Renderer + CommandSource {}

impl<T: Renderer + CommandSource> View for T {}
