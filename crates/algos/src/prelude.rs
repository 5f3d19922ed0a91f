pub use apsp_builder::prelude::*;

pub use crate::dijkstra::all_pairs_dijkstra;
pub use crate::dijkstra::dijkstra;

pub use crate::floyd_warshall::floyd_warshall;

pub use crate::harness::run_sweep;
pub use crate::harness::Clock;
pub use crate::harness::MeasurementRow;
pub use crate::harness::MemorySink;
pub use crate::harness::ResultSink;
pub use crate::harness::SweepConfig;
pub use crate::harness::BUILD_CONFIG;
pub use crate::harness::DIJKSTRA;
pub use crate::harness::FLOYD_WARSHALL;

pub use crate::verify::verify;
pub use crate::verify::VerificationError;
pub use crate::verify::DEFAULT_TOLERANCE;
