use serde::Serialize;

use crate::Cost;

/// Bookkeeping record for one node known to the search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRecord<T> {
    pub node: T,
    /// Predecessor on the best known path; `None` marks the start node.
    pub parent: Option<T>,
    /// Accumulated cost from the start along the best known path (g).
    pub cost_from_start: Cost,
    /// Remaining-cost estimate captured when the record was created (h).
    pub heuristic_to_goal: Cost,
}

impl<T> PathRecord<T> {
    pub fn new(node: T, parent: Option<T>, cost_from_start: Cost, heuristic_to_goal: Cost) -> Self {
        Self {
            node,
            parent,
            cost_from_start,
            heuristic_to_goal,
        }
    }

    /// Estimated total path cost through this node (f = g + h).
    pub fn total_cost(&self) -> Cost {
        self.cost_from_start + self.heuristic_to_goal
    }

    /// Open-list ordering: lowest f-cost first, equal f-costs resolved
    /// toward the smaller g-cost.
    pub fn higher_priority(a: &Self, b: &Self) -> bool {
        let own = a.total_cost();
        let other = b.total_cost();
        if own < other {
            true
        } else if own > other {
            false
        } else {
            a.cost_from_start < b.cost_from_start
        }
    }
}
