use std::io::{BufWriter, Write};

use anyhow::{ensure, Context};
use clap::Parser;
use pair_partition::logging;
use rand::{Rng, SeedableRng};

/// Prints a random operation stream for `solve`, with h != d on every line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 200_000)]
    items: usize,
    #[arg(long, default_value_t = 400_000)]
    ops: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let _logger = logging::start_stderr("warn").context("starting logger")?;
    let args = Args::parse();
    ensure!(args.items >= 2, "need at least 2 items to pick distinct pairs");
    log::info!("generating {args:?}");

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{} {}", args.items, args.ops)?;
    for _ in 0..args.ops {
        let h = rng.gen_range(1..=args.items);
        let mut d = rng.gen_range(1..args.items);
        if d >= h {
            d += 1;
        }
        writeln!(out, "{h} {d}")?;
    }
    out.flush()?;
    Ok(())
}
