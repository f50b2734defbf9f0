pub mod brute_force;
pub mod greedy;
pub mod two_opt;

// Common optimizer contract, strategy selection, and shared plumbing

use std::str::FromStr;

use crate::error::{Result, RouteError};
use crate::models::{NodeId, Route, ShoppingList, StoreLayout, StoreNode, Strategy};
use crate::utils::distance::DistanceCache;

pub use self::brute_force::BruteForceOptimizer;
pub use self::greedy::GreedyOptimizer;
pub use self::two_opt::TwoOptOptimizer;

/// Contract shared by all route optimization strategies.
///
/// An optimizer borrows a read-only layout; each `optimize` call is a
/// pure, blocking computation with its own private distance cache, so one
/// layout can back any number of optimizers across threads.
pub trait RouteOptimizer {
    /// Computes a route that begins at `start` (default: layout entrance),
    /// finishes at `end` (default: layout exit, falling back to the start
    /// for a round trip), and visits every node the shopping list requires
    /// exactly once.
    fn optimize(
        &self,
        shopping_list: &ShoppingList,
        start: Option<NodeId>,
        end: Option<NodeId>,
    ) -> Result<Route>;

    /// The strategy this optimizer implements
    fn strategy(&self) -> Strategy;
}

/// Creates the optimizer registered under `name` for the given layout.
///
/// Recognized names: `brute_force`, `greedy`, `2opt`. Lets callers swap
/// strategies without touching the data model or their own control flow.
pub fn create_optimizer<'a>(
    name: &str,
    layout: &'a StoreLayout,
) -> Result<Box<dyn RouteOptimizer + 'a>> {
    match Strategy::from_str(name)? {
        Strategy::BruteForce => Ok(Box::new(BruteForceOptimizer::new(layout))),
        Strategy::Greedy => Ok(Box::new(GreedyOptimizer::new(layout))),
        Strategy::TwoOpt => Ok(Box::new(TwoOptOptimizer::new(layout))),
    }
}

/// Resolves the start/end endpoints for one optimization call.
///
/// Without an explicit end or a designated exit the tour returns to its
/// start.
pub(crate) fn resolve_endpoints<'a>(
    layout: &'a StoreLayout,
    start: Option<NodeId>,
    end: Option<NodeId>,
) -> Result<(&'a StoreNode, &'a StoreNode)> {
    let start_id = match start.or(layout.entrance()) {
        Some(id) => id,
        None => {
            return Err(RouteError::Configuration(
                "no start node given and layout has no entrance".to_string(),
            ))
        }
    };
    let start_node = layout.node(start_id).ok_or_else(|| {
        RouteError::Configuration(format!("start node {} not found in layout", start_id))
    })?;

    let end_id = end.or(layout.exit()).unwrap_or(start_id);
    let end_node = layout.node(end_id).ok_or_else(|| {
        RouteError::Configuration(format!("end node {} not found in layout", end_id))
    })?;

    Ok((start_node, end_node))
}

/// Resolves the shopping list's required node set against the layout,
/// ascending by id. Fails before any distance is computed.
pub(crate) fn resolve_required<'a>(
    layout: &'a StoreLayout,
    shopping_list: &ShoppingList,
) -> Result<Vec<&'a StoreNode>> {
    let required = shopping_list.required_nodes();
    if required.is_empty() {
        return Err(RouteError::EmptyShoppingList);
    }
    required
        .into_iter()
        .map(|id| layout.node(id).ok_or(RouteError::UnresolvedNode(id)))
        .collect()
}

/// Total distance of a visiting order under the given cache
pub(crate) fn route_distance(cache: &mut DistanceCache, order: &[&StoreNode]) -> f64 {
    order
        .windows(2)
        .map(|pair| cache.distance(pair[0], pair[1]))
        .sum()
}

/// Assembles the final route value, recomputing the total from the final
/// order rather than trusting intermediate heuristic state
pub(crate) fn build_route(
    cache: &mut DistanceCache,
    order: &[&StoreNode],
    strategy: Strategy,
    refine_passes: Option<u32>,
) -> Route {
    Route {
        nodes: order.iter().map(|node| (*node).clone()).collect(),
        total_distance: route_distance(cache, order),
        strategy,
        refine_passes,
    }
}
