use super::dijkstra::{best_first, log_outcome};
use super::path::Route;
use super::{SearchObserver, resolve_endpoints};
use crate::{Error, SearchConfig, model::Coordinate, model::RoadGraph};

/// A* search guided by the straight-line distance to the goal.
///
/// Returns an optimal route as long as no road is shorter than the
/// straight-line distance between its endpoints, i.e. `Coordinate::distance_to`
/// is in the same unit as the road lengths.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a vertex or the config is
/// invalid. An unreachable goal is `Ok(None)`.
pub fn astar<C, O>(
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
    astar_with_heuristic(graph, start, goal, config, observer, C::distance_to)
}

/// A* search with a caller supplied estimate of the remaining cost.
///
/// `heuristic(location, goal)` must not overestimate the true remaining cost
/// for the route to be optimal, e.g. scale distances when road lengths are
/// travel times. It need not be consistent: a finalized node that later gets
/// a cheaper path is reopened, at the price of extra work.
///
/// # Errors
///
/// Same as [`astar`].
pub fn astar_with_heuristic<C, O, H>(
    graph: &RoadGraph<C>,
    start: &C,
    goal: &C,
    config: &SearchConfig,
    observer: &mut O,
    heuristic: H,
) -> Result<Option<Route<C>>, Error>
where
    C: Coordinate,
    O: SearchObserver<C> + ?Sized,
    H: Fn(&C, &C) -> f64,
{
    config.validate()?;
    let (start_node, goal_node) = resolve_endpoints(graph, start, goal)?;
    let route = best_first(graph, start_node, goal_node, config, observer, |node| {
        heuristic(&graph.location(node), goal)
    });
    log_outcome("A*", start, goal, route.as_ref());
    Ok(route)
}
