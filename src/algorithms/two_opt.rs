// 2-opt local search refinement over a greedy seed tour

use tracing::debug;

use crate::algorithms::{self, greedy, RouteOptimizer};
use crate::error::Result;
use crate::models::{NodeId, Route, ShoppingList, StoreLayout, StoreNode, Strategy};
use crate::utils::distance::{DistanceCache, Metric};

/// Default ceiling on improvement passes
pub const DEFAULT_MAX_PASSES: u32 = 1000;

/// Improvements smaller than this are floating-point noise, not moves;
/// ignoring them guarantees termination
const IMPROVEMENT_EPS: f64 = 1e-9;

/// Refines a greedy seed tour by reversing interior segments.
///
/// Each pass scans every candidate segment and applies the single best
/// improving reversal; passes repeat until a full scan finds no
/// improvement or the pass cap is reached. Total distance never
/// increases, so the search always terminates at a local optimum.
pub struct TwoOptOptimizer<'a> {
    layout: &'a StoreLayout,
    metric: Metric,
    max_passes: u32,
}

impl<'a> TwoOptOptimizer<'a> {
    pub fn new(layout: &'a StoreLayout) -> Self {
        Self {
            layout,
            metric: Metric::default(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Overrides the distance metric (default: Euclidean)
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Overrides the improvement pass cap (default: 1000). Hosts wanting
    /// bounded latency set this low.
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Refines an existing tour without rebuilding the greedy seed.
    ///
    /// Assumes the seed was produced over this optimizer's layout. The
    /// first and last stops stay pinned; only interior segments are
    /// reversal candidates.
    pub fn refine(&self, seed: &Route) -> Result<Route> {
        let mut cache = DistanceCache::new(self.metric);
        let mut order: Vec<&StoreNode> = seed.nodes.iter().collect();
        let passes = improve(&mut cache, &mut order, self.max_passes);

        let route = algorithms::build_route(&mut cache, &order, Strategy::TwoOpt, Some(passes));
        debug!(
            seed_distance = seed.total_distance,
            refined_distance = route.total_distance,
            passes,
            "2-opt refinement finished"
        );
        Ok(route)
    }
}

impl RouteOptimizer for TwoOptOptimizer<'_> {
    fn optimize(
        &self,
        shopping_list: &ShoppingList,
        start: Option<NodeId>,
        end: Option<NodeId>,
    ) -> Result<Route> {
        let (start_node, end_node) = algorithms::resolve_endpoints(self.layout, start, end)?;
        let targets = algorithms::resolve_required(self.layout, shopping_list)?;

        let mut cache = DistanceCache::new(self.metric);
        let mut order = greedy::nearest_neighbor_order(&mut cache, &targets, start_node, end_node);
        let seed_distance = algorithms::route_distance(&mut cache, &order);

        let passes = improve(&mut cache, &mut order, self.max_passes);
        let route = algorithms::build_route(&mut cache, &order, Strategy::TwoOpt, Some(passes));

        debug!(
            seed_distance,
            refined_distance = route.total_distance,
            passes,
            "2-opt route built"
        );
        Ok(route)
    }

    fn strategy(&self) -> Strategy {
        Strategy::TwoOpt
    }
}

/// Applies the best improving reversal per pass until none remains or the
/// cap is hit. Returns the number of passes that applied a move.
///
/// Reversing `order[i..=j]` only touches the two boundary edges, so each
/// candidate is scored from four cached distances. Positions 0 and
/// len - 1 never fall inside a candidate segment, keeping the endpoints
/// pinned.
fn improve(cache: &mut DistanceCache, order: &mut [&StoreNode], max_passes: u32) -> u32 {
    let mut passes = 0;

    while passes < max_passes {
        let mut best_delta = -IMPROVEMENT_EPS;
        let mut best_move: Option<(usize, usize)> = None;

        for i in 1..order.len().saturating_sub(2) {
            for j in (i + 1)..order.len() - 1 {
                let removed =
                    cache.distance(order[i - 1], order[i]) + cache.distance(order[j], order[j + 1]);
                let added =
                    cache.distance(order[i - 1], order[j]) + cache.distance(order[i], order[j + 1]);
                let delta = added - removed;
                if delta < best_delta {
                    best_delta = delta;
                    best_move = Some((i, j));
                }
            }
        }

        match best_move {
            Some((i, j)) => {
                order[i..=j].reverse();
                passes += 1;
            }
            None => break,
        }
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::GreedyOptimizer;
    use crate::models::Item;

    fn square_layout() -> StoreLayout {
        let mut layout = StoreLayout::new("Square Store");
        layout
            .add_node(StoreNode::new(1, "A", 0.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(2, "B", 10.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(3, "C", 10.0, 10.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(4, "D", 0.0, 10.0).unwrap())
            .unwrap();
        layout.set_entrance(1).unwrap();
        layout.set_exit(1).unwrap();
        layout
    }

    fn list_for(nodes: &[NodeId]) -> ShoppingList {
        let mut list = ShoppingList::new("List");
        for (index, node_id) in nodes.iter().enumerate() {
            list.add_item(Item::new(format!("Item {}", index + 1), *node_id).unwrap());
        }
        list
    }

    fn crossed_seed(layout: &StoreLayout) -> Route {
        // A -> C -> B -> D -> A crosses itself twice
        let order = [1, 3, 2, 4, 1];
        Route {
            nodes: order
                .iter()
                .map(|id| layout.node(*id).unwrap().clone())
                .collect(),
            total_distance: 0.0, // refine recomputes
            strategy: Strategy::TwoOpt,
            refine_passes: None,
        }
    }

    #[test]
    fn test_refine_uncrosses_a_tour() {
        let layout = square_layout();
        let optimizer = TwoOptOptimizer::new(&layout);

        let refined = optimizer.refine(&crossed_seed(&layout)).unwrap();

        assert!((refined.total_distance - 40.0).abs() < 1e-9);
        assert!(refined.refine_passes.unwrap() >= 1);

        // Endpoints stay pinned
        assert_eq!(refined.nodes.first().map(|node| node.id), Some(1));
        assert_eq!(refined.nodes.last().map(|node| node.id), Some(1));
    }

    #[test]
    fn test_refine_is_idempotent() {
        let layout = square_layout();
        let optimizer = TwoOptOptimizer::new(&layout);

        let refined = optimizer.refine(&crossed_seed(&layout)).unwrap();
        let again = optimizer.refine(&refined).unwrap();

        assert_eq!(again.refine_passes, Some(0));
        assert!((again.total_distance - refined.total_distance).abs() < 1e-12);
        assert_eq!(again.node_ids(), refined.node_ids());
    }

    #[test]
    fn test_pass_cap_limits_work() {
        let layout = square_layout();
        let optimizer = TwoOptOptimizer::new(&layout).with_max_passes(0);

        let seed = crossed_seed(&layout);
        let capped = optimizer.refine(&seed).unwrap();

        assert_eq!(capped.refine_passes, Some(0));
        assert_eq!(capped.node_ids(), seed.node_ids());
    }

    #[test]
    fn test_optimize_never_worse_than_greedy() {
        let layout = square_layout();
        let list = list_for(&[2, 3, 4]);

        let greedy_route = GreedyOptimizer::new(&layout)
            .optimize(&list, None, None)
            .unwrap();
        let refined = TwoOptOptimizer::new(&layout)
            .optimize(&list, None, None)
            .unwrap();

        assert!(refined.total_distance <= greedy_route.total_distance + 1e-9);
        assert_eq!(refined.strategy, Strategy::TwoOpt);
        assert!(refined.refine_passes.is_some());
    }

    #[test]
    fn test_short_tours_are_left_alone() {
        let layout = square_layout();
        let optimizer = TwoOptOptimizer::new(&layout);

        let route = optimizer.optimize(&list_for(&[2]), None, None).unwrap();

        assert_eq!(route.node_ids(), vec![1, 2, 1]);
        assert_eq!(route.refine_passes, Some(0));
    }
}
