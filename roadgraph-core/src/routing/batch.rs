use log::info;
use rayon::prelude::*;

use super::{Route, SearchAlgorithm};
use crate::{Error, SearchConfig, model::Coordinate, model::RoadGraph};

/// Answers independent `(start, goal)` queries in parallel.
///
/// Results are in query order. Each query carries its own result, so one
/// unknown endpoint does not fail the rest of the batch.
pub fn route_many<C>(
    graph: &RoadGraph<C>,
    queries: &[(C, C)],
    algorithm: SearchAlgorithm,
    config: &SearchConfig,
) -> Vec<Result<Option<Route<C>>, Error>>
where
    C: Coordinate + Send + Sync,
{
    info!("Routing {} queries with {algorithm}", queries.len());

    let results: Vec<_> = queries
        .par_iter()
        .map(|(start, goal)| algorithm.run(graph, start, goal, config, &mut |_: &C| {}))
        .collect();

    let found = results
        .iter()
        .filter(|result| matches!(result, Ok(Some(_))))
        .count();
    info!("Found {found} of {} routes", queries.len());

    results
}
