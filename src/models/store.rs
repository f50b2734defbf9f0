// Store layout model: the aggregate of spatial nodes plus entrance/exit

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::models::{NodeId, StoreNode};

/// The navigable layout of a single store.
///
/// Owns the node map and the entrance/exit designation. Mutated only while
/// the layout is being built; optimizers treat it as read-only, so one
/// layout can back any number of concurrent route computations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreLayout {
    /// Display name of the store
    pub name: String,

    nodes: HashMap<NodeId, StoreNode>,
    entrance: Option<NodeId>,
    exit: Option<NodeId>,
}

impl StoreLayout {
    /// Creates a new empty layout
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            nodes: HashMap::new(),
            entrance: None,
            exit: None,
        }
    }

    /// Adds a node to the layout; fails if its id is already taken
    pub fn add_node(&mut self, node: StoreNode) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(RouteError::Configuration(format!(
                "node {} already exists in layout",
                node.id
            )));
        }
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Removes a node, clearing any entrance/exit designation that
    /// referenced it
    pub fn remove_node(&mut self, id: NodeId) -> Result<StoreNode> {
        let node = self.nodes.remove(&id).ok_or_else(|| {
            RouteError::Configuration(format!("node {} not found in layout", id))
        })?;
        if self.entrance == Some(id) {
            self.entrance = None;
        }
        if self.exit == Some(id) {
            self.exit = None;
        }
        Ok(node)
    }

    /// Gets a node by its id
    pub fn node(&self, id: NodeId) -> Option<&StoreNode> {
        self.nodes.get(&id)
    }

    /// Checks whether the layout contains the given node id
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes in the layout
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &StoreNode> {
        self.nodes.values()
    }

    /// Designates the entrance; the node must already exist
    pub fn set_entrance(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(RouteError::Configuration(format!(
                "entrance node {} not found in layout",
                id
            )));
        }
        self.entrance = Some(id);
        Ok(())
    }

    /// Designates the exit; the node must already exist
    pub fn set_exit(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(RouteError::Configuration(format!(
                "exit node {} not found in layout",
                id
            )));
        }
        self.exit = Some(id);
        Ok(())
    }

    pub fn entrance(&self) -> Option<NodeId> {
        self.entrance
    }

    pub fn exit(&self) -> Option<NodeId> {
        self.exit
    }

    /// The entrance node, if one is designated
    pub fn entrance_node(&self) -> Option<&StoreNode> {
        self.entrance.and_then(|id| self.nodes.get(&id))
    }

    /// The exit node, if one is designated
    pub fn exit_node(&self) -> Option<&StoreNode> {
        self.exit.and_then(|id| self.nodes.get(&id))
    }

    /// All nodes in a numbered aisle, ascending by id
    pub fn find_by_aisle(&self, aisle: u32) -> Vec<&StoreNode> {
        let mut nodes: Vec<&StoreNode> = self
            .nodes
            .values()
            .filter(|node| node.aisle == Some(aisle))
            .collect();
        nodes.sort_by_key(|node| node.id);
        nodes
    }

    /// Bounding box of all node coordinates as (min_x, min_y, max_x, max_y).
    /// An empty layout reports all zeros.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        if self.nodes.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for node in self.nodes.values() {
            min_x = min_x.min(node.position.x);
            min_y = min_y.min(node.position.y);
            max_x = max_x.max(node.position.x);
            max_y = max_y.max(node.position.y);
        }

        (min_x, min_y, max_x, max_y)
    }

    /// Parses a layout from JSON and re-validates its invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: StoreLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Serializes the layout to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the invariants a hand-edited or deserialized layout could
    /// violate: map keys agree with node ids, coordinates are
    /// non-negative, and entrance/exit resolve to real nodes.
    pub fn validate(&self) -> Result<()> {
        for (id, node) in &self.nodes {
            if *id != node.id {
                return Err(RouteError::Configuration(format!(
                    "node map key {} does not match node id {}",
                    id, node.id
                )));
            }
            if node.position.x < 0.0 || node.position.y < 0.0 {
                return Err(RouteError::Configuration(format!(
                    "node {} has negative coordinates",
                    node.id
                )));
            }
        }
        if let Some(entrance) = self.entrance {
            if !self.contains(entrance) {
                return Err(RouteError::Configuration(format!(
                    "entrance node {} not found in layout",
                    entrance
                )));
            }
        }
        if let Some(exit) = self.exit {
            if !self.contains(exit) {
                return Err(RouteError::Configuration(format!(
                    "exit node {} not found in layout",
                    exit
                )));
            }
        }
        Ok(())
    }
}
