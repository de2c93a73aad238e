//! Binary that reads graphs in edge-list format, prints their adjacency lists and computes a
//! minimum vertex cover of each by checking every vertex subset.

use std::error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use brute_cover::{graph::Graph, report};
use clap::Parser;
use flexi_logger::Logger;

#[derive(Parser)]
#[clap(version, about = "Minimum vertex cover by exhaustive search")]
struct Cli {
    /// Edge-list files, solved in the given order.
    #[clap(default_value = "input.txt")]
    inputs: Vec<PathBuf>,
    /// Appends a timing row per solved input to this CSV file.
    #[clap(long)]
    summary: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn error::Error>> {
    // Logs go to stderr, stdout is reserved for the report.
    let _logger = Logger::try_with_str("warn")?.start()?;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for input in &cli.inputs {
        let graph = Graph::read_from_file(input)?;
        report::write_adjacency(&graph, &mut stdout)?;
        let result = graph.smallest_vertex_cover()?;
        report::write_result(&result, &mut stdout)?;
        stdout.flush()?;
        if let Some(summary) = &cli.summary {
            report::append_summary(summary, &graph, &result)?;
        }
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
