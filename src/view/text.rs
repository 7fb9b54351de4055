use std::io::{self, BufRead, Write};

use super::{Canvas, Command, CommandSource, Renderer};
use crate::engine::Grid;

const PROMPT: &str = "CMD (wasd|q)> ";

/// Line-oriented view: prints the painted grid and reads one command per line.
///
/// Generic over its streams so tests can script input and capture output.
/// End of input reads as [`Command::Exit`].
pub struct TextView<R, W> {
    input: R,
    output: W,
    canvas: Canvas,
}

impl TextView<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(canvas: Canvas) -> Self {
        TextView::new(io::stdin().lock(), io::stdout(), canvas)
    }
}

impl<R: BufRead, W: Write> TextView<R, W> {
    pub fn new(input: R, output: W, canvas: Canvas) -> Self {
        TextView { input, output, canvas }
    }

    /// Give back the output stream (e.g. to inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Renderer for TextView<R, W> {
    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        for line in self.canvas.paint(grid) {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> CommandSource for TextView<R, W> {
    fn next_command(&mut self) -> io::Result<Command> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Command::Exit);
        }
        Ok(Command::from_text(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Move;
    use std::io::Cursor;

    #[test]
    fn reads_commands_until_end_of_input() {
        let input = Cursor::new("w\nx\nD\n");
        let mut view = TextView::new(input, Vec::new(), Canvas::default());
        assert_eq!(view.next_command().unwrap(), Command::Slide(Move::Up));
        assert_eq!(view.next_command().unwrap(), Command::Invalid);
        assert_eq!(view.next_command().unwrap(), Command::Slide(Move::Right));
        assert_eq!(view.next_command().unwrap(), Command::Exit);

        let printed = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(printed, PROMPT.repeat(4));
    }

    #[test]
    fn draw_prints_painted_lines() {
        let grid = Grid::try_from(vec![vec![1, 0]]).unwrap();
        let mut view = TextView::new(Cursor::new(""), Vec::new(), Canvas::default());
        view.draw(&grid).unwrap();
        let printed = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(printed, "┌───┬───┐\n│ 1 │   │\n└───┴───┘\n");
    }
}
