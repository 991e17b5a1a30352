// A* search driver and the capability contracts it consumes

pub mod astar;
pub mod record;
pub mod traits;

// Re-export main interfaces
pub use astar::AStar;
pub use record::PathRecord;
pub use traits::{GraphOracle, Heuristic, SearchTracer, ZeroHeuristic};
