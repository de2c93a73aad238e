//! Binary that writes a random simple graph with `N` vertices and `M` edges in edge-list format.

use std::error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use brute_cover::generator;
use clap::Parser;
use flexi_logger::Logger;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[clap(version, about = "Random edge-list input generator")]
struct Cli {
    /// Number of vertices, numbered `0..N`.
    n: usize,
    /// Number of distinct edges.
    m: usize,
    #[clap(short, long, default_value = "input.txt")]
    output: PathBuf,
    /// Seed for reproducible output.
    #[clap(short, long)]
    seed: Option<u64>,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_str("info")?.start()?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let edges = generator::random_edges(cli.n, cli.m, &mut rng)?;
    let mut out = BufWriter::new(File::create(&cli.output)?);
    generator::write_input(cli.n, &edges, &mut out)?;
    out.flush()?;
    info!(
        "Generated graph input file '{}' with {} vertices and {} edges.",
        cli.output.display(),
        cli.n,
        cli.m
    );
    Ok(())
}
