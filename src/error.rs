//! Error types for layout construction and route optimization.

use thiserror::Error;

use crate::models::NodeId;

/// Main error type for route optimization operations
#[derive(Debug, Error)]
pub enum RouteError {
    /// Malformed store layout, node, item, or endpoint configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A shopping list entry references a node the layout does not contain
    #[error("node {0} not found in store layout")]
    UnresolvedNode(NodeId),

    /// The shopping list resolves to no locations at all
    #[error("shopping list resolves to no locations to visit")]
    EmptyShoppingList,

    /// Strategy name not recognized by the factory
    #[error("unknown strategy `{0}`, expected one of: brute_force, greedy, 2opt")]
    UnknownStrategy(String),

    /// Brute force invoked above its size guard
    #[error("brute force limited to {limit} required nodes, got {actual}")]
    TooManyNodes { actual: usize, limit: usize },

    /// Store layout JSON could not be parsed
    #[error("failed to parse store layout: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for route optimization operations
pub type Result<T> = std::result::Result<T, RouteError>;
