// Spatial node model representing points of interest inside a store

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::models::NodeId;

/// A point on the store's 2D floor plan, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position
    pub fn euclidean_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Axis-aligned distance to another position
    pub fn manhattan_to(&self, other: &Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// A named, immutable point of interest inside a store.
///
/// Nodes are plain values: id and position never change after construction,
/// so they can be cloned into routes without aliasing concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreNode {
    /// Unique identifier within the owning layout
    pub id: NodeId,

    /// Human-readable name, e.g. "Produce Section"
    pub name: String,

    /// Where the node sits on the floor plan
    pub position: Position,

    /// Aisle number, when the node sits in a numbered aisle
    pub aisle: Option<u32>,

    /// Optional free-text description
    pub description: Option<String>,
}

impl StoreNode {
    /// Creates a node at the given coordinates.
    ///
    /// The floor plan has its origin at a corner, so coordinates must be
    /// non-negative.
    pub fn new<S: Into<String>>(id: NodeId, name: S, x: f64, y: f64) -> Result<Self> {
        if x < 0.0 || y < 0.0 {
            return Err(RouteError::Configuration(format!(
                "node {} has negative coordinates ({}, {})",
                id, x, y
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            position: Position::new(x, y),
            aisle: None,
            description: None,
        })
    }

    /// Tags the node with an aisle number
    pub fn with_aisle(mut self, aisle: u32) -> Self {
        self.aisle = Some(aisle);
        self
    }

    /// Attaches a free-text description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Coordinates as an (x, y) pair
    pub fn coordinates(&self) -> (f64, f64) {
        (self.position.x, self.position.y)
    }
}
