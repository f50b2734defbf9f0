// Greedy nearest-neighbor route construction

use tracing::debug;

use crate::algorithms::{self, RouteOptimizer};
use crate::error::Result;
use crate::models::{NodeId, Route, ShoppingList, StoreLayout, StoreNode, Strategy};
use crate::utils::distance::{DistanceCache, Metric};

/// Builds a route by always walking to the nearest unvisited required
/// node.
///
/// O(n^2) in the required-set size with the per-call cache; feasible but
/// not generally optimal. Its visiting order also seeds 2-opt refinement.
pub struct GreedyOptimizer<'a> {
    layout: &'a StoreLayout,
    metric: Metric,
}

impl<'a> GreedyOptimizer<'a> {
    pub fn new(layout: &'a StoreLayout) -> Self {
        Self {
            layout,
            metric: Metric::default(),
        }
    }

    /// Overrides the distance metric (default: Euclidean)
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }
}

impl RouteOptimizer for GreedyOptimizer<'_> {
    fn optimize(
        &self,
        shopping_list: &ShoppingList,
        start: Option<NodeId>,
        end: Option<NodeId>,
    ) -> Result<Route> {
        let (start_node, end_node) = algorithms::resolve_endpoints(self.layout, start, end)?;
        let targets = algorithms::resolve_required(self.layout, shopping_list)?;

        let mut cache = DistanceCache::new(self.metric);
        let order = nearest_neighbor_order(&mut cache, &targets, start_node, end_node);
        let route = algorithms::build_route(&mut cache, &order, Strategy::Greedy, None);

        debug!(
            stops = route.stop_count(),
            distance = route.total_distance,
            "greedy route built"
        );
        Ok(route)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Greedy
    }
}

/// Nearest-neighbor visiting order over `targets`, endpoints included.
///
/// Required nodes equal to an endpoint are satisfied by the endpoint
/// itself. Distance ties go to the lower node id: `targets` arrives
/// sorted by id and only a strictly closer node replaces the current
/// candidate.
pub(crate) fn nearest_neighbor_order<'n>(
    cache: &mut DistanceCache,
    targets: &[&'n StoreNode],
    start: &'n StoreNode,
    end: &'n StoreNode,
) -> Vec<&'n StoreNode> {
    let mut remaining: Vec<&StoreNode> = targets
        .iter()
        .copied()
        .filter(|node| node.id != start.id && node.id != end.id)
        .collect();

    let mut order = vec![start];
    let mut current = start;

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;
        for (index, candidate) in remaining.iter().enumerate() {
            let distance = cache.distance(current, candidate);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = index;
            }
        }
        current = remaining.remove(nearest);
        order.push(current);
    }

    // Close the tour unless it is the degenerate single-stop case where
    // start and end coincide and nothing else needs visiting
    if end.id != start.id || order.len() > 1 {
        order.push(end);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::models::Item;

    fn linear_layout() -> StoreLayout {
        let mut layout = StoreLayout::new("Linear Store");
        layout
            .add_node(StoreNode::new(1, "Entrance", 0.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(2, "Node 1", 10.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(3, "Node 2", 20.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(4, "Node 3", 30.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(5, "Exit", 40.0, 0.0).unwrap())
            .unwrap();
        layout.set_entrance(1).unwrap();
        layout.set_exit(5).unwrap();
        layout
    }

    fn list_for(nodes: &[NodeId]) -> ShoppingList {
        let mut list = ShoppingList::new("List");
        for (index, node_id) in nodes.iter().enumerate() {
            list.add_item(Item::new(format!("Item {}", index + 1), *node_id).unwrap());
        }
        list
    }

    #[test]
    fn test_linear_layout_visited_in_order() {
        let layout = linear_layout();
        let optimizer = GreedyOptimizer::new(&layout);

        let route = optimizer.optimize(&list_for(&[2, 3, 4]), None, None).unwrap();

        assert_eq!(route.node_ids(), vec![1, 2, 3, 4, 5]);
        assert_eq!(route.total_distance, 40.0);
        assert_eq!(route.strategy, Strategy::Greedy);
        assert_eq!(route.refine_passes, None);
    }

    #[test]
    fn test_ties_break_to_lower_id() {
        // Two required nodes equidistant from the entrance
        let mut layout = StoreLayout::new("Tie Store");
        layout
            .add_node(StoreNode::new(1, "Entrance", 5.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(2, "Left", 0.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(3, "Right", 10.0, 0.0).unwrap())
            .unwrap();
        layout.set_entrance(1).unwrap();

        let optimizer = GreedyOptimizer::new(&layout);
        let route = optimizer.optimize(&list_for(&[2, 3]), None, None).unwrap();

        assert_eq!(route.node_ids(), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_round_trip_without_exit() {
        let mut layout = linear_layout();
        layout.remove_node(5).unwrap(); // drops the exit designation too

        let optimizer = GreedyOptimizer::new(&layout);
        let route = optimizer.optimize(&list_for(&[2, 4]), None, None).unwrap();

        assert_eq!(route.node_ids(), vec![1, 2, 4, 1]);
        assert_eq!(route.total_distance, 60.0);
    }

    #[test]
    fn test_required_node_equal_to_endpoint() {
        let layout = linear_layout();
        let optimizer = GreedyOptimizer::new(&layout);

        // The entrance itself is on the list; it is satisfied by the start
        let route = optimizer.optimize(&list_for(&[1, 3]), None, None).unwrap();
        assert_eq!(route.node_ids(), vec![1, 3, 5]);
    }

    #[test]
    fn test_manhattan_metric() {
        let mut layout = StoreLayout::new("Diagonal Store");
        layout
            .add_node(StoreNode::new(1, "Entrance", 0.0, 0.0).unwrap())
            .unwrap();
        layout
            .add_node(StoreNode::new(2, "Corner", 10.0, 10.0).unwrap())
            .unwrap();
        layout.set_entrance(1).unwrap();

        let list = list_for(&[2]);

        let euclidean = GreedyOptimizer::new(&layout)
            .optimize(&list, None, None)
            .unwrap();
        let manhattan = GreedyOptimizer::new(&layout)
            .with_metric(Metric::Manhattan)
            .optimize(&list, None, None)
            .unwrap();

        assert!((euclidean.total_distance - 2.0 * 200f64.sqrt()).abs() < 1e-9);
        assert_eq!(manhattan.total_distance, 40.0);
    }

    #[test]
    fn test_empty_list_fails() {
        let layout = linear_layout();
        let optimizer = GreedyOptimizer::new(&layout);

        assert!(matches!(
            optimizer.optimize(&ShoppingList::new("Empty"), None, None),
            Err(RouteError::EmptyShoppingList)
        ));
    }

    #[test]
    fn test_unresolved_node_fails() {
        let layout = linear_layout();
        let optimizer = GreedyOptimizer::new(&layout);

        assert!(matches!(
            optimizer.optimize(&list_for(&[2, 99]), None, None),
            Err(RouteError::UnresolvedNode(99))
        ));
    }
}
