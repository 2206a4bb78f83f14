use std::collections::VecDeque;

use log::debug;
use petgraph::graph::NodeIndex;

use super::path::{Route, reconstruct_route};
use super::state::SearchSpace;
use super::{SearchObserver, resolve_endpoints};
use crate::{Error, SearchConfig, model::Coordinate, model::RoadGraph};

/// Route with the fewest road segments from `start` to `goal`, ignoring
/// segment lengths.
///
/// Nodes are marked when enqueued, so each one enters the queue at most once,
/// and reported to `observer` when dequeued. `config.max_hops` limits the
/// route length in segments.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a vertex or the config is
/// invalid. An unreachable goal is `Ok(None)`.
pub fn breadth_first_search<C, O>(
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

    let mut space = SearchSpace::new(graph.vertex_count());
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();

    space.close(start_node);
    queue.push_back((start_node, 0));

    while let Some((current, depth)) = queue.pop_front() {
        space.record_visit(current);
        observer.on_visit(&graph.location(current));

        if current == goal_node {
            let route = reconstruct_route(graph, &space, start_node, goal_node);
            debug!(
                "BFS reached {goal} in {} hops after visiting {} nodes",
                route.hops(),
                route.nodes_visited()
            );
            return Ok(Some(route));
        }

        if config.exceeds_hops(depth + 1) {
            continue;
        }

        for (next, length) in graph.outgoing(current) {
            if space.close(next) {
                space.parent[next.index()] = Some((current, length));
                queue.push_back((next, depth + 1));
            }
        }
    }

    debug!(
        "BFS found no path from {start} to {goal} after visiting {} nodes",
        space.visited()
    );
    Ok(None)
}
