// Distance metrics and the per-invocation distance cache

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{NodeId, Position, StoreNode};

/// Distance metric between two positions on the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Straight-line distance
    #[default]
    Euclidean,
    /// Axis-aligned distance, closer to how shoppers move along aisles
    Manhattan,
}

impl Metric {
    /// Measures the distance between two positions. Symmetric and
    /// non-negative under both metrics.
    pub fn measure(&self, a: &Position, b: &Position) -> f64 {
        match self {
            Metric::Euclidean => a.euclidean_to(b),
            Metric::Manhattan => a.manhattan_to(b),
        }
    }
}

/// Memoizes pairwise node distances for one optimizer invocation.
///
/// Keyed by the unordered id pair, so both directions hit the same entry.
/// Scoped to a single call: a process-wide cache would go stale if a
/// layout were rebuilt with different coordinates under the same ids.
#[derive(Debug)]
pub struct DistanceCache {
    metric: Metric,
    cache: HashMap<(NodeId, NodeId), f64>,
}

impl DistanceCache {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            cache: HashMap::new(),
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Distance between two nodes, computed at most once per pair
    pub fn distance(&mut self, a: &StoreNode, b: &StoreNode) -> f64 {
        let key = if a.id <= b.id { (a.id, b.id) } else { (b.id, a.id) };
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }
        let distance = self.metric.measure(&a.position, &b.position);
        self.cache.insert(key, distance);
        distance
    }

    /// Number of distinct pairs computed so far
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
