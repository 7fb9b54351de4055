use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use term_2048::config::GameConfig;
use term_2048::engine::Rank;
use term_2048::game::{Game, Outcome};
use term_2048::view::{Canvas, TerminalView, TextView, View};

#[derive(Parser, Debug)]
#[command(name = "term-2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// Full-screen raw terminal driven by the arrow keys (default: type wasd + Enter)
    #[arg(short = 'c', long = "curses")]
    curses: bool,
    /// Seed for tile spawns; the same seed and inputs replay the same game
    #[arg(short = 's', long)]
    seed: Option<u64>,
    /// Grid width in cells
    #[arg(long, default_value_t = 4)]
    width: usize,
    /// Grid height in cells
    #[arg(long, default_value_t = 4)]
    height: usize,
    /// Rank that ends the game (11 = the 2048 tile)
    #[arg(long, default_value_t = 11)]
    max_rank: Rank,
    /// Tiles spawned before the first move
    #[arg(long, default_value_t = 1)]
    start_tiles: usize,
    /// Tracing filter written to stderr, e.g. "info", "term_2048=debug"
    #[arg(long, default_value = "warn")]
    log: String,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            max_rank: self.max_rank,
            start_tiles: self.start_tiles,
            ..GameConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.config();
    config.validate().context("invalid game settings")?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let canvas = Canvas::new(config.cell_width, config.cell_height);

    let outcome = if args.curses {
        let view = TerminalView::new(canvas).context("failed to set up the terminal")?;
        play(&config, view, rng)?
    } else {
        play(&config, TextView::stdio(canvas), rng)?
    };

    match outcome {
        Outcome::Won { moves } => println!("You reached rank {} in {} moves!", config.max_rank, moves),
        Outcome::Stuck { moves } => println!("No moves left after {} moves.", moves),
        Outcome::Quit { moves } => println!("Quit after {} moves.", moves),
    }
    Ok(())
}

/// Runs the game and drops the view (restoring the terminal) before returning.
fn play<V: View>(config: &GameConfig, view: V, rng: StdRng) -> anyhow::Result<Outcome> {
    let mut game = Game::new(config, view, rng);
    game.run().context("terminal I/O failed")
}
