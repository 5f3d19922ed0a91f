use log::{info, warn};

use crate::dijkstra::all_pairs_dijkstra;
use crate::floyd_warshall::floyd_warshall;
use crate::prelude::{Error, Graph, GraphGenerator, SquareMatrix};
use crate::verify::{verify, DEFAULT_TOLERANCE};

/// The name under which Floyd-Warshall measurements are recorded.
pub const FLOYD_WARSHALL: &str = "Floyd Warshall";

/// The name under which Dijkstra measurements are recorded.
pub const DIJKSTRA: &str = "Dijkstra";

/// The build tag recorded with every measurement row.
pub const BUILD_CONFIG: &str = if cfg!(debug_assertions) {
    "Debug"
} else {
    "Release"
};

/// A started measurement clock.
///
/// A clock value is constructed freshly for every measurement via
/// [`Clock::start`]; there is no shared timer state between measurements.
/// [`Clock::elapsed_millis`] is meaningful once [`Clock::stop`] has been
/// called.
pub trait Clock {
    fn start() -> Self;

    fn stop(&mut self);

    fn elapsed_millis(&self) -> f64;
}

/// One timing measurement: a solver, repeated over one generated graph.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRow {
    pub algorithm: &'static str,
    pub wall_millis: f64,
    pub cpu_millis: f64,
    pub node_count: usize,
    pub edge_percent: usize,
    pub repeats: usize,
    pub build_config: &'static str,
}

/// Consumes measurement rows in the order they are produced.
///
/// Sinks are append-only; a previously accepted row is never altered.
pub trait ResultSink {
    fn append(&mut self, row: MeasurementRow);
}

/// A sink that collects rows in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: Vec<MeasurementRow>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<MeasurementRow> {
        self.rows
    }
}

impl ResultSink for MemorySink {
    fn append(&mut self, row: MeasurementRow) {
        self.rows.push(row);
    }
}

/// Parameters of a benchmark sweep.
///
/// The sweep visits every combination of node count (`node_increment`,
/// `2 * node_increment`, .., `max_increments * node_increment`) and edge
/// density (`percent_base` up to `percent_max` in steps of `percent_step`,
/// with the last step clamped to `percent_max` exactly). `percent_step` must
/// be positive for the density loop to advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub max_increments: usize,
    pub repeat_per_graph: usize,
    pub node_increment: usize,
    pub percent_base: usize,
    pub percent_max: usize,
    pub percent_step: usize,
    pub double_sided: bool,
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_increments: 8,
            repeat_per_graph: 4,
            node_increment: 100,
            percent_base: 20,
            percent_max: 80,
            percent_step: 15,
            double_sided: false,
            seed: None,
        }
    }
}

/// Runs the full benchmark sweep.
///
/// For every configuration one graph is generated and each solver runs
/// `repeat_per_graph` times under a single wall-clock and CPU-clock
/// measurement (`W` and `C`). Every Floyd-Warshall result is verified
/// against its Dijkstra counterpart at [`DEFAULT_TOLERANCE`]; a
/// configuration whose results disagree is logged and skipped, and the sweep
/// continues. Agreeing configurations emit one row per solver into the sink.
pub fn run_sweep<W, C, S>(config: SweepConfig, sink: &mut S) -> Result<(), Error>
where
    W: Clock,
    C: Clock,
    S: ResultSink,
{
    for increment in 1..=config.max_increments {
        let node_count = config.node_increment * increment;

        let mut percent = config.percent_base;
        while percent <= config.percent_max {
            let graph = generate(&config, node_count, percent)?;
            run_solvers::<W, C, S>(&graph, &config, percent, sink);

            if percent == config.percent_max {
                break;
            }
            percent = usize::min(percent + config.percent_step, config.percent_max);
        }

        info!(
            "Finished increment {}/{} of the sweep",
            increment, config.max_increments
        );
    }

    Ok(())
}

fn generate(config: &SweepConfig, node_count: usize, percent: usize) -> Result<Graph, Error> {
    let mut generator = GraphGenerator::new()
        .node_count(node_count)
        .edge_percent(percent)
        .double_sided(config.double_sided);

    if let Some(seed) = config.seed {
        // Every sweep cell gets its own derived seed.
        generator = generator.seed(seed ^ ((node_count as u64) << 16) ^ percent as u64);
    }

    generator.generate()
}

fn run_solvers<W, C, S>(graph: &Graph, config: &SweepConfig, percent: usize, sink: &mut S)
where
    W: Clock,
    C: Clock,
    S: ResultSink,
{
    let node_count = graph.node_count();
    let repeats = config.repeat_per_graph;

    let (floyd_results, floyd_row) =
        measure::<W, C>(FLOYD_WARSHALL, graph, percent, repeats, floyd_warshall);
    let (dijkstra_results, dijkstra_row) =
        measure::<W, C>(DIJKSTRA, graph, percent, repeats, all_pairs_dijkstra);

    for (dense, sparse) in floyd_results.iter().zip(dijkstra_results.iter()) {
        if let Err(err) = verify(dense, sparse, DEFAULT_TOLERANCE) {
            warn!("Skipping results for {node_count} nodes at {percent}%: {err}");
            return;
        }
    }

    sink.append(floyd_row);
    sink.append(dijkstra_row);

    info!("Solvers agree over {repeats} runs for {node_count} nodes at {percent}%");
}

fn measure<W, C>(
    algorithm: &'static str,
    graph: &Graph,
    percent: usize,
    repeats: usize,
    solver: impl Fn(&Graph) -> SquareMatrix,
) -> (Vec<SquareMatrix>, MeasurementRow)
where
    W: Clock,
    C: Clock,
{
    let mut results = Vec::with_capacity(repeats);

    let mut wall = W::start();
    let mut cpu = C::start();
    for _ in 0..repeats {
        results.push(solver(graph));
    }
    wall.stop();
    cpu.stop();

    let row = MeasurementRow {
        algorithm,
        wall_millis: wall.elapsed_millis(),
        cpu_millis: cpu.elapsed_millis(),
        node_count: graph.node_count(),
        edge_percent: percent,
        repeats,
        build_config: BUILD_CONFIG,
    };

    (results, row)
}
