//! term-2048: the 2048 sliding-tile puzzle for the terminal
//!
//! This crate provides:
//! - A `Grid` of tile ranks and a direction-agnostic `SlideEngine` (`engine` module)
//! - A seeded-RNG `TileSpawner` (`spawn` module)
//! - The play loop `Game` with its `Outcome` (`game` module)
//! - Box-drawn text and raw-terminal views (`view` module)
//! - `GameConfig` shared by the binaries (`config` module)
//!
//! Ranks, not values: a cell holding rank `r` shows the tile `2^r`; rank 0 is empty.
//!
//! Quick start:
//! ```
//! use term_2048::engine::{Grid, Move, SlideEngine};
//! use term_2048::spawn::TileSpawner;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut grid = Grid::new(4, 4);
//! let spawner = TileSpawner::new();
//! spawner.spawn(&mut grid, &mut rng);
//!
//! let mut engine = SlideEngine::new();
//! for dir in Move::ALL {
//!     if engine.execute(&mut grid, dir) {
//!         spawner.spawn(&mut grid, &mut rng);
//!     }
//! }
//! assert!(grid.max_rank() >= 1);
//! ```
//!
//! Full loop with a scripted text view
//! ```
//! use std::io::Cursor;
//! use term_2048::config::GameConfig;
//! use term_2048::game::{Game, Outcome};
//! use term_2048::view::{Canvas, TextView};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let view = TextView::new(Cursor::new("a\nw\nq\n"), Vec::new(), Canvas::default());
//! let mut game = Game::new(&GameConfig::default(), view, StdRng::seed_from_u64(7));
//! assert!(matches!(game.run().unwrap(), Outcome::Quit { .. }));
//! ```
//!
pub mod config;
pub mod engine;
pub mod game;
pub mod spawn;
pub mod view;
