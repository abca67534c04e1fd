use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pair_partition::{input, logging, Engine, PairCounter};

/// Reads `n m` and m pairs `h d`, printing the co-resident pair count after each connect.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Read from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Recompute every derived quantity after each operation. O(n) per operation.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let _logger = logging::start_stderr("warn").context("starting logger")?;
    let args = Args::parse();

    let mut text = String::new();
    match &args.input {
        Some(path) => {
            text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
        }
    }
    let input = input::parse(&text)?;

    let mut engine = Engine::new(input.items)?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, &(h, d)) in input.ops.iter().enumerate() {
        let stat = engine
            .connect(h, d)
            .with_context(|| format!("operation {} ({h} {d})", i + 1))?;
        if args.check {
            engine.check_invariants();
        }
        writeln!(out, "{stat}")?;
    }
    out.flush()?;
    log::info!("processed {} operations", input.ops.len());
    Ok(())
}
