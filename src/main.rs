use anyhow::{ensure, Result};
use clap::Parser;
use go_board_core::{Benchmark, BenchmarkConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "go_board_bench",
    about = "Random-playout benchmark for the 19x19 board core",
    version
)]
struct Args {
    /// Number of playouts per run
    #[clap(short, long, default_value_t = 10_000)]
    playouts: usize,

    /// PRNG seed; the same seed replays the same games
    #[clap(short, long, default_value_t = 123)]
    seed: u32,

    /// Plies after which a playout is cut off
    #[clap(long)]
    max_moves: Option<usize>,

    /// Fail unless the run plays exactly this many moves
    #[clap(long)]
    expect_moves: Option<usize>,

    /// How many times to repeat the run
    #[clap(short, long, default_value_t = 1)]
    runs: usize,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    ensure!(args.playouts > 0, "need at least one playout");

    let defaults = BenchmarkConfig::default();
    let config = BenchmarkConfig {
        playouts: args.playouts,
        seed: args.seed,
        max_moves: args.max_moves.unwrap_or(defaults.max_moves),
        expected_moves: args.expect_moves,
    };

    let mut bench = Benchmark::new(config);
    for _ in 0..args.runs {
        println!("{}", bench.run());
    }
    Ok(())
}
