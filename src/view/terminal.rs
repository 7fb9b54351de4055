use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use super::{Canvas, Command, CommandSource, Renderer};
use crate::engine::{Grid, Move};

const HELP: &str = "arrows: slide   q: quit";

/// Full-screen raw-mode view driven by the arrow keys.
///
/// Takes over the terminal (raw mode, alternate screen, hidden cursor) on
/// construction and hands it back when dropped.
pub struct TerminalView {
    out: Stdout,
    canvas: Canvas,
}

impl TerminalView {
    pub fn new(canvas: Canvas) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Built before the screen setup so a failure there still restores raw mode on drop.
        let mut view = TerminalView { out: io::stdout(), canvas };
        execute!(view.out, terminal::EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(view)
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Renderer for TerminalView {
    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        let lines = self.canvas.paint(grid);
        for (y, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16), Print(line))?;
        }
        queue!(self.out, MoveTo(0, lines.len() as u16 + 1), Print(HELP))?;
        self.out.flush()
    }
}

impl CommandSource for TerminalView {
    fn next_command(&mut self) -> io::Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(cmd) = command_for_key(key) {
                    return Ok(cmd);
                }
            }
        }
    }
}

/// Map a key event to a command. Key releases yield `None`.
pub(crate) fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let cmd = match key.code {
        KeyCode::Up => Command::Slide(Move::Up),
        KeyCode::Down => Command::Slide(Move::Down),
        KeyCode::Left => Command::Slide(Move::Left),
        KeyCode::Right => Command::Slide(Move::Right),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Exit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Exit,
        _ => Command::Invalid,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_slide() {
        assert_eq!(command_for_key(press(KeyCode::Up)), Some(Command::Slide(Move::Up)));
        assert_eq!(command_for_key(press(KeyCode::Down)), Some(Command::Slide(Move::Down)));
        assert_eq!(command_for_key(press(KeyCode::Left)), Some(Command::Slide(Move::Left)));
        assert_eq!(command_for_key(press(KeyCode::Right)), Some(Command::Slide(Move::Right)));
    }

    #[test]
    fn quit_keys_exit() {
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Exit));
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Exit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_c), Some(Command::Exit));
    }

    #[test]
    fn other_keys_are_invalid_and_releases_ignored() {
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), Some(Command::Invalid));
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), Some(Command::Invalid));
        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(command_for_key(release), None);
    }
}
