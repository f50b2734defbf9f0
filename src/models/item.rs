// Item model representing purchasable entries tied to a store node

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::models::{Cost, NodeId, StoreLayout};

/// Where an item sits relative to its node's aisle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShelfSection {
    Left,
    Right,
    EndCap,
    TopShelf,
    BottomShelf,
    #[default]
    Unspecified,
}

impl ShelfSection {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ShelfSection::Left => "Left",
            ShelfSection::Right => "Right",
            ShelfSection::EndCap => "End-cap",
            ShelfSection::TopShelf => "Top-shelf",
            ShelfSection::BottomShelf => "Bottom-shelf",
            ShelfSection::Unspecified => "Unspecified",
        }
    }
}

/// A purchasable entry on a shopping list, located at a store node.
///
/// Immutable after creation; replace the item to change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Name of the item, never empty
    pub name: String,

    /// The node where the item can be picked up
    pub node_id: NodeId,

    /// Sub-section within the node's aisle
    pub shelf: ShelfSection,

    pub category: Option<String>,
    pub barcode: Option<String>,

    /// Unit price, non-negative when present
    pub price: Option<Cost>,

    /// Units to pick up, at least 1
    pub quantity: u32,
}

impl Item {
    /// Creates an item with quantity 1 and no optional metadata
    pub fn new<S: Into<String>>(name: S, node_id: NodeId) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RouteError::Configuration(
                "item name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            node_id,
            shelf: ShelfSection::Unspecified,
            category: None,
            barcode: None,
            price: None,
            quantity: 1,
        })
    }

    /// Sets the quantity; must be at least 1
    pub fn with_quantity(mut self, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(RouteError::Configuration(format!(
                "item {} must have a positive quantity",
                self.name
            )));
        }
        self.quantity = quantity;
        Ok(self)
    }

    /// Sets the unit price; must be non-negative
    pub fn with_price(mut self, price: Cost) -> Result<Self> {
        if price < 0.0 {
            return Err(RouteError::Configuration(format!(
                "item {} cannot have a negative price",
                self.name
            )));
        }
        self.price = Some(price);
        Ok(self)
    }

    pub fn with_shelf(mut self, shelf: ShelfSection) -> Self {
        self.shelf = shelf;
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_barcode<S: Into<String>>(mut self, barcode: S) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Checks if this item is located at the given node
    pub fn is_at(&self, node_id: NodeId) -> bool {
        self.node_id == node_id
    }

    /// Human-readable description of where to find the item, e.g.
    /// "Aisle 3 (Left)"
    pub fn location_description(&self, layout: &StoreLayout) -> String {
        let node = match layout.node(self.node_id) {
            Some(node) => node,
            None => return "Unknown location".to_string(),
        };

        let mut location = match node.aisle {
            Some(aisle) => format!("Aisle {}", aisle),
            None if !node.name.is_empty() => node.name.clone(),
            None => format!("Node {}", node.id),
        };
        if self.shelf != ShelfSection::Unspecified {
            location.push_str(&format!(" ({})", self.shelf.label()));
        }
        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreNode;

    #[test]
    fn test_valid_item_creation() {
        let item = Item::new("Bananas", 3)
            .unwrap()
            .with_quantity(6)
            .unwrap()
            .with_price(0.35)
            .unwrap()
            .with_shelf(ShelfSection::Left)
            .with_category("Produce")
            .with_barcode("4011");

        assert_eq!(item.name, "Bananas");
        assert_eq!(item.node_id, 3);
        assert_eq!(item.quantity, 6);
        assert_eq!(item.price, Some(0.35));
        assert_eq!(item.shelf, ShelfSection::Left);
        assert_eq!(item.category.as_deref(), Some("Produce"));
        assert_eq!(item.barcode.as_deref(), Some("4011"));
    }

    #[test]
    fn test_invalid_item_creation() {
        assert!(Item::new("", 1).is_err());
        assert!(Item::new("   ", 1).is_err());
        assert!(Item::new("Milk", 1).unwrap().with_quantity(0).is_err());
        assert!(Item::new("Milk", 1).unwrap().with_price(-1.0).is_err());
    }

    #[test]
    fn test_is_at() {
        let item = Item::new("Milk", 7).unwrap();
        assert!(item.is_at(7));
        assert!(!item.is_at(8));
    }

    #[test]
    fn test_location_description() {
        let mut layout = StoreLayout::new("Test Store");
        layout
            .add_node(StoreNode::new(1, "Produce Section", 1.0, 10.0).unwrap().with_aisle(1))
            .unwrap();
        layout
            .add_node(StoreNode::new(2, "Bakery Section", 13.0, 10.0).unwrap())
            .unwrap();

        let bananas = Item::new("Bananas", 1)
            .unwrap()
            .with_shelf(ShelfSection::Left);
        assert_eq!(bananas.location_description(&layout), "Aisle 1 (Left)");

        let bread = Item::new("Bread", 2).unwrap();
        assert_eq!(bread.location_description(&layout), "Bakery Section");

        let lost = Item::new("Mystery", 99).unwrap();
        assert_eq!(lost.location_description(&layout), "Unknown location");
    }
}
