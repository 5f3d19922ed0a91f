pub use crate::generate::GraphGenerator;

pub use crate::graph::Edge;
pub use crate::graph::Graph;
pub use crate::graph::Node;
pub use crate::graph::NodeId;
pub use crate::graph::MAX_EDGE_LENGTH;
pub use crate::graph::UNREACHABLE;

pub use crate::matrix::SquareMatrix;

pub use crate::Error;
