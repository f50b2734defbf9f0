// Exhaustive permutation search for small required sets

use tracing::debug;

use crate::algorithms::{self, RouteOptimizer};
use crate::error::{Result, RouteError};
use crate::models::{NodeId, Route, ShoppingList, StoreLayout, StoreNode, Strategy};
use crate::utils::distance::{DistanceCache, Metric};

/// Default ceiling on the required-set size
pub const DEFAULT_MAX_NODES: usize = 10;

/// Tries every visiting order of the required nodes and keeps the
/// shortest.
///
/// Factorial in the required-set size, so guarded by `max_nodes`; the
/// guard fails loudly instead of silently downgrading to a heuristic.
/// Exact distance ties resolve to the lexicographically smallest order by
/// node id, which keeps results deterministic across runs.
pub struct BruteForceOptimizer<'a> {
    layout: &'a StoreLayout,
    metric: Metric,
    max_nodes: usize,
}

impl<'a> BruteForceOptimizer<'a> {
    pub fn new(layout: &'a StoreLayout) -> Self {
        Self {
            layout,
            metric: Metric::default(),
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Overrides the distance metric (default: Euclidean)
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Overrides the required-set size guard (default: 10)
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

impl RouteOptimizer for BruteForceOptimizer<'_> {
    fn optimize(
        &self,
        shopping_list: &ShoppingList,
        start: Option<NodeId>,
        end: Option<NodeId>,
    ) -> Result<Route> {
        let (start_node, end_node) = algorithms::resolve_endpoints(self.layout, start, end)?;
        let targets = algorithms::resolve_required(self.layout, shopping_list)?;

        if targets.len() > self.max_nodes {
            return Err(RouteError::TooManyNodes {
                actual: targets.len(),
                limit: self.max_nodes,
            });
        }

        let mut interior: Vec<&StoreNode> = targets
            .iter()
            .copied()
            .filter(|node| node.id != start_node.id && node.id != end_node.id)
            .collect();

        // Whether the tour has a final leg to the end node; false only in
        // the degenerate single-stop case
        let closing = end_node.id != start_node.id || !interior.is_empty();

        let mut cache = DistanceCache::new(self.metric);
        let mut best: Vec<&StoreNode> = Vec::new();
        let mut best_distance = f64::INFINITY;
        let mut current: Vec<&StoreNode> = Vec::with_capacity(interior.len());

        search(
            &mut cache,
            end_node,
            closing,
            &mut interior,
            &mut current,
            start_node,
            0.0,
            &mut best,
            &mut best_distance,
        );

        let mut order = vec![start_node];
        order.extend_from_slice(&best);
        if closing {
            order.push(end_node);
        }

        let route = algorithms::build_route(&mut cache, &order, Strategy::BruteForce, None);
        debug!(
            required = targets.len(),
            pairs_cached = cache.len(),
            distance = route.total_distance,
            "brute force search finished"
        );
        Ok(route)
    }

    fn strategy(&self) -> Strategy {
        Strategy::BruteForce
    }
}

/// Depth-first enumeration of interior orders with running prefix
/// distances.
///
/// `remaining` arrives sorted by id and candidates are tried in index
/// order, so complete orders appear lexicographically by id and the
/// strict `<` acceptance keeps the first minimum. Space stays O(n): one
/// order is materialized at a time.
#[allow(clippy::too_many_arguments)]
fn search<'n>(
    cache: &mut DistanceCache,
    end: &'n StoreNode,
    closing: bool,
    remaining: &mut Vec<&'n StoreNode>,
    current: &mut Vec<&'n StoreNode>,
    last: &'n StoreNode,
    prefix_distance: f64,
    best: &mut Vec<&'n StoreNode>,
    best_distance: &mut f64,
) {
    if remaining.is_empty() {
        let total = if closing {
            prefix_distance + cache.distance(last, end)
        } else {
            prefix_distance
        };
        if total < *best_distance {
            *best_distance = total;
            best.clear();
            best.extend_from_slice(current);
        }
        return;
    }

    for index in 0..remaining.len() {
        let next = remaining.remove(index);
        let leg = cache.distance(last, next);
        current.push(next);
        search(
            cache,
            end,
            closing,
            remaining,
            current,
            next,
            prefix_distance + leg,
            best,
            best_distance,
        );
        current.pop();
        remaining.insert(index, next);
    }
}
