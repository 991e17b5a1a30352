//! Generic A* best-first search over implicit graphs.
//!
//! The graph is never materialized: adjacency, edge costs and the goal
//! condition are supplied through the [`GraphOracle`] trait, and the
//! remaining-cost estimate through [`Heuristic`]. Both are injected once
//! into the [`AStar`] driver, which resolves paths with
//! [`AStar::search_path`].
//!
//! ```rust
//! use viastar::prelude::*;
//!
//! struct Line;
//!
//! impl GraphOracle<i32> for Line {
//!     fn edge_cost(&self, _node: &i32, _from: &i32) -> Cost {
//!         1.0
//!     }
//!     fn is_goal(&self, node: &i32) -> bool {
//!         *node == 3
//!     }
//!     fn neighbors(&self, node: &i32) -> Vec<i32> {
//!         vec![node - 1, node + 1]
//!     }
//! }
//!
//! let mut search = AStar::new(Line, ZeroHeuristic);
//! let path = search.search_path(&0, &3).unwrap();
//! assert_eq!(path, vec![0, 1, 2, 3]);
//! ```

pub mod error;
pub mod heap;
pub mod prelude;
pub mod search;

pub use error::Error;
pub use search::{AStar, GraphOracle, Heuristic, PathRecord, SearchTracer, ZeroHeuristic};

/// Edge traversal and heuristic cost, in caller-defined units.
pub type Cost = f64;
