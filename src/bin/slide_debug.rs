//! Step through a fixed column stack sliding down, one frame per Enter.

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;

use term_2048::engine::{Grid, Move, Position, SlideEngine};
use term_2048::view::{Canvas, Renderer, TextView};

#[derive(Parser, Debug)]
#[command(name = "slide_debug", about = "Render a scripted column slide frame by frame")]
struct Args {
    /// Print every frame without waiting for Enter
    #[arg(long)]
    no_wait: bool,
    /// Number of down-slides to perform
    #[arg(long, default_value_t = 3)]
    slides: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut grid = Grid::new(4, 4);
    for (row, rank) in [(1, 2), (2, 1), (3, 1)] {
        grid.set(Position::new(2, row), rank)?;
    }

    let mut view = TextView::new(io::empty(), io::stdout(), Canvas::default());
    let mut engine = SlideEngine::new();
    let mut stdin = io::stdin().lock();

    view.draw(&grid)?;
    for step in 1..=args.slides {
        if !args.no_wait {
            let mut line = String::new();
            stdin.read_line(&mut line).context("failed to read from stdin")?;
        }
        let changed = engine.execute(&mut grid, Move::Down);
        println!("slide {step}: changed={changed}");
        view.draw(&grid)?;
    }
    Ok(())
}
