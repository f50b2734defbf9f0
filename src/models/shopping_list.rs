// Shopping list model: the ordered set of items for one store visit

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::models::{Cost, Item, NodeId};

/// An ordered collection of items to pick up in one store visit.
///
/// Item order reflects entry order, not visiting order; the optimizer
/// decides the visiting order from the derived required-node set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    pub name: String,
    items: Vec<Item>,
}

impl ShoppingList {
    /// Creates a new empty shopping list
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item to the list
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item with the given name, returning how many were
    /// dropped
    pub fn remove_item(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        before - self.items.len()
    }

    /// The items in entry order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of distinct list entries
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all entries, quantities included
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The distinct nodes a route must visit to satisfy every item.
    /// Duplicate references collapse to a single visit; the set iterates
    /// ascending by id so downstream processing is deterministic.
    pub fn required_nodes(&self) -> BTreeSet<NodeId> {
        self.items.iter().map(|item| item.node_id).collect()
    }

    /// All items located at the given node
    pub fn items_at(&self, node_id: NodeId) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_at(node_id)).collect()
    }

    /// Groups items by the node they resolve to
    pub fn group_by_node(&self) -> HashMap<NodeId, Vec<&Item>> {
        let mut groups: HashMap<NodeId, Vec<&Item>> = HashMap::new();
        for item in &self.items {
            groups.entry(item.node_id).or_default().push(item);
        }
        groups
    }

    /// Total estimated cost over priced items (price x quantity).
    /// Returns None when no item carries a price.
    pub fn total_cost(&self) -> Option<Cost> {
        let mut total = 0.0;
        let mut has_prices = false;

        for item in &self.items {
            if let Some(price) = item.price {
                total += price * item.quantity as f64;
                has_prices = true;
            }
        }

        if has_prices {
            Some(total)
        } else {
            None
        }
    }
}
