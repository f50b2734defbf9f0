// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{
    create_optimizer, BruteForceOptimizer, GreedyOptimizer, RouteOptimizer, TwoOptOptimizer,
};
pub use error::{Result, RouteError};
pub use models::{Item, Route, ShelfSection, ShoppingList, StoreLayout, StoreNode, Strategy};
pub use utils::distance::{DistanceCache, Metric};
