// Re-export key components
pub use crate::error::Error;
pub use crate::heap::PriorityHeap;
pub use crate::search::astar::AStar;
pub use crate::search::record::PathRecord;
pub use crate::search::traits::{GraphOracle, Heuristic, SearchTracer, ZeroHeuristic};

// Cost units used for edges and heuristic estimates
pub use crate::Cost;
