use std::collections::BinaryHeap;

use log::{debug, trace};
use petgraph::graph::NodeIndex;

use super::path::{Route, reconstruct_route};
use super::state::{SearchSpace, State};
use super::{SearchObserver, resolve_endpoints};
use crate::{Error, SearchConfig, model::Coordinate, model::RoadGraph};

/// Dijkstra's algorithm: route with the smallest total road length from
/// `start` to `goal`.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a vertex or the config is
/// invalid. An unreachable goal, or one beyond `config.max_cost`, is
/// `Ok(None)`.
pub fn dijkstra<C, O>(
    graph: &RoadGraph<C>,
    start: &C,
    goal: &C,
    config: &SearchConfig,
    observer: &mut O,
) -> Result<Option<Route<C>>, Error>
where
    C: Coordinate,
    O: SearchObserver<C> + ?Sized,
{
    config.validate()?;
    let (start_node, goal_node) = resolve_endpoints(graph, start, goal)?;
    let route = best_first(graph, start_node, goal_node, config, observer, |_| 0.0);
    log_outcome("Dijkstra", start, goal, route.as_ref());
    Ok(route)
}

/// Lazy-deletion best-first search shared by Dijkstra and A*.
///
/// Frontier entries are keyed by `cost + heuristic(node)`. Stale entries stay
/// in the heap and are dropped when popped for an already finalized node. A
/// finalized node reached again more cheaply is reopened, so an admissible
/// but inconsistent heuristic still yields an optimal route. Each node is
/// reported to `observer` and counted in `nodes_visited` once.
pub(super) fn best_first<C, O, H>(
    graph: &RoadGraph<C>,
    start: NodeIndex,
    goal: NodeIndex,
    config: &SearchConfig,
    observer: &mut O,
    heuristic: H,
) -> Option<Route<C>>
where
    C: Coordinate,
    O: SearchObserver<C> + ?Sized,
    H: Fn(NodeIndex) -> f64,
{
    let node_count = graph.vertex_count();
    let mut space = SearchSpace::new(node_count);
    let mut heap = BinaryHeap::new();

    let start_priority = heuristic(start);
    space.cost[start.index()] = 0.0;
    space.priority[start.index()] = start_priority;
    heap.push(State::new(start_priority, start));

    while let Some(State { node, .. }) = heap.pop() {
        if !space.close(node) {
            trace!("Skipping stale frontier entry for {}", graph.location(node));
            continue;
        }
        if space.record_visit(node) {
            observer.on_visit(&graph.location(node));
        }

        if node == goal {
            return Some(reconstruct_route(graph, &space, start, goal));
        }

        let cost = space.cost[node.index()];
        for (next, length) in graph.outgoing(node) {
            let next_cost = cost + length;
            if config.exceeds_cost(next_cost) {
                trace!(
                    "Pruning {} at cost {next_cost}: beyond cutoff",
                    graph.location(next)
                );
                continue;
            }

            // Compare on priority, propagate plain cost
            let next_priority = next_cost + heuristic(next);
            if next_priority < space.priority[next.index()] {
                // Only an inconsistent heuristic can improve a finalized node
                if space.is_closed(next) {
                    trace!("Reopening {} at cost {next_cost}", graph.location(next));
                    space.reopen(next);
                }
                space.cost[next.index()] = next_cost;
                space.priority[next.index()] = next_priority;
                space.parent[next.index()] = Some((node, length));
                heap.push(State::new(next_priority, next));
            }
        }
    }

    None
}

pub(super) fn log_outcome<C: Coordinate>(
    algorithm: &str,
    start: &C,
    goal: &C,
    route: Option<&Route<C>>,
) {
    match route {
        Some(route) => debug!(
            "{algorithm} reached {goal} with cost {} after visiting {} nodes",
            route.cost(),
            route.nodes_visited()
        ),
        None => debug!("{algorithm} found no path from {start} to {goal}"),
    }
}
