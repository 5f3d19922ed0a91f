use std::path::PathBuf;

use anyhow::Result;
use log::info;

use apsp::prelude::*;

mod clock;
mod csv;

use clock::{CpuClock, WallClock};
use csv::CsvFile;

const HELP: &str = "\
compare - benchmark all-pairs shortest path algorithms

USAGE:
  compare [OPTIONS] [OUTPUT]

ARGS:
  <OUTPUT>               Results file, appended to if it exists [default: results.csv]

OPTIONS:
  -h, --help             Print this help
      --increments NUM   Number of node-count increments [default: 8]
      --node-step NUM    Node-count increment size [default: 100]
      --repeats NUM      Solver runs per generated graph [default: 4]
      --percent-base NUM First edge density of the sweep [default: 20]
      --percent-max NUM  Last edge density of the sweep [default: 80]
      --percent-step NUM Edge density step [default: 15]
      --double-sided     Generate every edge in both directions
      --seed NUM         Seed for reproducible graphs
";

struct Args {
    output: PathBuf,
    config: SweepConfig,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let defaults = SweepConfig::default();
    let config = SweepConfig {
        max_increments: pargs
            .opt_value_from_str("--increments")?
            .unwrap_or(defaults.max_increments),
        node_increment: pargs
            .opt_value_from_str("--node-step")?
            .unwrap_or(defaults.node_increment),
        repeat_per_graph: pargs
            .opt_value_from_str("--repeats")?
            .unwrap_or(defaults.repeat_per_graph),
        percent_base: pargs
            .opt_value_from_str("--percent-base")?
            .unwrap_or(defaults.percent_base),
        percent_max: pargs
            .opt_value_from_str("--percent-max")?
            .unwrap_or(defaults.percent_max),
        percent_step: pargs
            .opt_value_from_str("--percent-step")?
            .unwrap_or(defaults.percent_step),
        double_sided: pargs.contains("--double-sided"),
        seed: pargs.opt_value_from_str("--seed")?,
    };

    let output = pargs
        .opt_free_from_os_str(|arg| Ok::<_, std::convert::Infallible>(PathBuf::from(arg)))?
        .unwrap_or_else(|| PathBuf::from("results.csv"));

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Unknown arguments: {remaining:?}");
        std::process::exit(1);
    }

    Ok(Args { output, config })
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = parse_args()?;

    let mut sink = MemorySink::new();
    run_sweep::<WallClock, CpuClock, _>(args.config, &mut sink)?;

    let rows = sink.into_rows();
    if rows.is_empty() {
        log::warn!("No configuration passed verification, nothing to write");
        return Ok(());
    }

    // The file is grouped by algorithm: all Floyd-Warshall rows first, then
    // all Dijkstra rows.
    let (floyd_rows, dijkstra_rows): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .partition(|row| row.algorithm == FLOYD_WARSHALL);

    let file = CsvFile::new(&args.output);
    file.append_rows(&floyd_rows)?;
    file.append_rows(&dijkstra_rows)?;

    info!(
        "Wrote {} measurement rows to {}",
        floyd_rows.len() + dijkstra_rows.len(),
        file.path().display()
    );

    Ok(())
}
