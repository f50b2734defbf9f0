// Route model: the ordered visiting sequence an optimizer produces

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::models::{NodeId, StoreNode};

/// The algorithm that produced a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BruteForce,
    Greedy,
    TwoOpt,
}

impl Strategy {
    /// Every strategy the factory can construct
    pub const ALL: [Strategy; 3] = [Strategy::BruteForce, Strategy::Greedy, Strategy::TwoOpt];

    /// The name the factory recognizes
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute_force",
            Strategy::Greedy => "greedy",
            Strategy::TwoOpt => "2opt",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute_force" => Ok(Strategy::BruteForce),
            "greedy" => Ok(Strategy::Greedy),
            "2opt" => Ok(Strategy::TwoOpt),
            other => Err(RouteError::UnknownStrategy(other.to_string())),
        }
    }
}

/// An ordered visiting sequence through the store, endpoints included
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes in visiting order, beginning at the start and finishing at
    /// the end endpoint
    pub nodes: Vec<StoreNode>,

    /// Sum of consecutive pairwise distances, recomputed from the final
    /// order
    pub total_distance: f64,

    /// The strategy that produced this route
    pub strategy: Strategy,

    /// Full improvement passes applied, reported by 2-opt refinement
    pub refine_passes: Option<u32>,
}

impl Route {
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id).collect()
    }

    /// Consecutive (from, to) legs of the route
    pub fn segments(&self) -> Vec<(&StoreNode, &StoreNode)> {
        self.nodes
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .collect()
    }

    /// Number of stops, endpoints included
    pub fn stop_count(&self) -> usize {
        self.nodes.len()
    }
}
