//! The play loop: render, read a command, slide, spawn.

use std::io;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::{Grid, Move, Position, Rank, SlideEngine};
use crate::spawn::TileSpawner;
use crate::view::{Command, View};

/// How a game ended. Each variant carries the number of moves that changed the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A tile reached the configured maximum rank.
    Won { moves: u64 },
    /// The player asked to exit.
    Quit { moves: u64 },
    /// No direction can change the grid any more.
    Stuck { moves: u64 },
}

/// One game session: owns the grid and drives it through a [`View`].
pub struct Game<V, R> {
    grid: Grid,
    engine: SlideEngine,
    spawner: TileSpawner,
    rng: R,
    view: V,
    max_rank: Rank,
    moves: u64,
}

impl<V: View, R: Rng> Game<V, R> {
    /// A fresh `config.width` x `config.height` grid with `config.start_tiles` spawned.
    pub fn new(config: &GameConfig, view: V, rng: R) -> Self {
        let mut game = Game::with_grid(Grid::new(config.width, config.height), config.max_rank, view, rng);
        for _ in 0..config.start_tiles {
            game.spawn_tile();
        }
        game
    }

    /// Resume from an existing grid; nothing is spawned up front.
    pub fn with_grid(grid: Grid, max_rank: Rank, view: V, rng: R) -> Self {
        Game { grid, engine: SlideEngine::new(), spawner: TileSpawner::new(), rng, view, max_rank, moves: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Moves so far that changed the grid.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub fn is_game_over(&self) -> bool {
        self.grid.max_rank() >= self.max_rank
    }

    pub fn spawn_tile(&mut self) -> Option<(Position, Rank)> {
        self.spawner.spawn(&mut self.grid, &mut self.rng)
    }

    /// Slide towards `dir`; if anything moved and the game is not yet won, spawn a
    /// tile. Returns whether the grid changed.
    pub fn apply(&mut self, dir: Move) -> bool {
        let changed = self.engine.execute(&mut self.grid, dir);
        if changed {
            self.moves += 1;
            if !self.is_game_over() {
                self.spawn_tile();
            }
        }
        changed
    }

    /// Play until the game is won, stuck, or the player exits.
    ///
    /// The grid is drawn before every command and once more at the end.
    pub fn run(&mut self) -> io::Result<Outcome> {
        info!(width = self.grid.width(), height = self.grid.height(), max_rank = self.max_rank, "game started");
        let outcome = loop {
            if self.is_game_over() {
                break Outcome::Won { moves: self.moves };
            }
            if !SlideEngine::has_any_move(&self.grid) {
                break Outcome::Stuck { moves: self.moves };
            }

            self.view.draw(&self.grid)?;
            match self.view.next_command()? {
                Command::Slide(dir) => {
                    if !self.apply(dir) {
                        debug!(%dir, "move changed nothing");
                    }
                }
                Command::Exit => break Outcome::Quit { moves: self.moves },
                Command::Invalid => debug!("ignored invalid command"),
            }
        };
        self.view.draw(&self.grid)?;
        info!(?outcome, max_rank = self.grid.max_rank(), "game finished");
        Ok(outcome)
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
