use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};

use crate::error::Error;
use crate::heap::PriorityHeap;
use crate::search::record::PathRecord;
use crate::search::traits::{GraphOracle, Heuristic, SearchTracer};

/// A* search driver over an implicit graph.
///
/// The driver owns its oracle and heuristic; all per-search state (open
/// list, best-known map, visited set) lives inside [`Self::search_path`]
/// and is discarded on return, so a driver can be reused for any number
/// of searches.
pub struct AStar<T, O, H> {
    oracle: O,
    heuristic: H,
    tracer: Option<Box<dyn SearchTracer<T>>>,
}

impl<T, O, H> AStar<T, O, H>
where
    T: Clone + Eq + Hash + Debug,
    O: GraphOracle<T>,
    H: Heuristic<T>,
{
    pub fn new(oracle: O, heuristic: H) -> Self {
        Self {
            oracle,
            heuristic,
            tracer: None,
        }
    }

    /// Like [`Self::new`], with a tracing hook invoked on every relaxation.
    pub fn with_tracer(oracle: O, heuristic: H, tracer: Box<dyn SearchTracer<T>>) -> Self {
        Self {
            oracle,
            heuristic,
            tracer: Some(tracer),
        }
    }

    /// Find a least-cost path from `start` to a node accepted by the
    /// oracle's goal predicate, in start-to-goal order.
    ///
    /// `goal` is what the caller aimed the heuristic at; termination is
    /// decided solely by [`GraphOracle::is_goal`]. An exhausted open list
    /// without a goal node surfaces as [`Error::MalformedPath`].
    pub fn search_path(&mut self, start: &T, goal: &T) -> Result<Vec<T>, Error> {
        debug!("Searching for a path from {start:?} to {goal:?}");

        let mut records: HashMap<T, PathRecord<T>> = HashMap::new();
        let mut visited: HashSet<T> = HashSet::new();
        let mut open = PriorityHeap::with_ordering(PathRecord::higher_priority);

        let start_record =
            PathRecord::new(start.clone(), None, 0.0, self.heuristic.estimate(start));
        open.push(start_record.clone());
        records.insert(start.clone(), start_record);

        let mut current = start.clone();
        while !open.is_empty() {
            current = open.pop()?.node;

            // A cheaper record for this node was already expanded; the
            // popped entry is stale
            if visited.contains(&current) {
                continue;
            }

            if self.oracle.is_goal(&current) {
                break;
            }

            let neighbors = self.oracle.neighbors(&current);
            let (current_cost, current_parent) = {
                let record = records
                    .get(&current)
                    .ok_or_else(|| Error::MissingRecord(format!("{current:?}")))?;
                (record.cost_from_start, record.parent.clone())
            };
            visited.insert(current.clone());

            for next in neighbors {
                // Skip only the immediate back-edge; longer cycles are
                // pruned by cost
                if current_parent.as_ref() == Some(&next) {
                    continue;
                }

                let next_cost = current_cost + self.oracle.edge_cost(&next, &current);

                if let Some(known) = records.get(&next) {
                    if known.cost_from_start <= next_cost {
                        continue;
                    }
                    if visited.remove(&next) {
                        trace!("Re-opening {next:?} with improved cost {next_cost}");
                    }
                }

                let record = PathRecord::new(
                    next.clone(),
                    Some(current.clone()),
                    next_cost,
                    self.heuristic.estimate(&next),
                );
                records.insert(next.clone(), record.clone());
                open.push(record);

                if let Some(tracer) = self.tracer.as_mut() {
                    tracer.on_relax(&records);
                }
            }
        }

        let path = follow(&current, &records)?;

        if path.first() != Some(start) {
            return Err(Error::MalformedPath(format!(
                "path does not begin at the start node {start:?}"
            )));
        }
        match path.last() {
            Some(last) if self.oracle.is_goal(last) => {}
            _ => {
                return Err(Error::MalformedPath(
                    "path does not reach a goal node; the goal may be unreachable".into(),
                ));
            }
        }

        debug!(
            "Found a path of {} nodes after {} expansions",
            path.len(),
            visited.len()
        );
        Ok(path)
    }
}

// Walk parent links back from `target` to the start record, then reverse
// into start-to-goal order
fn follow<T>(target: &T, records: &HashMap<T, PathRecord<T>>) -> Result<Vec<T>, Error>
where
    T: Clone + Eq + Hash + Debug,
{
    let mut out = Vec::new();
    let mut current = target.clone();
    loop {
        out.push(current.clone());
        let record = records
            .get(&current)
            .ok_or_else(|| Error::MissingRecord(format!("{current:?}")))?;
        match &record.parent {
            Some(parent) => current = parent.clone(),
            None => break,
        }
    }
    out.reverse();
    Ok(out)
}
