// Synthetic store layouts for demos, tests, and benchmarks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::{NodeId, StoreLayout, StoreNode};

/// Node id of the entrance in [`sample_supermarket`]
pub const ENTRANCE_ID: NodeId = 1;
/// Node id of the checkout (the exit) in [`sample_supermarket`]
pub const CHECKOUT_ID: NodeId = 2;
/// Node id of the produce section in [`sample_supermarket`]
pub const PRODUCE_ID: NodeId = 3;
/// Node id of the meat department in [`sample_supermarket`]
pub const MEAT_ID: NodeId = 4;
/// Node id of the bakery section in [`sample_supermarket`]
pub const BAKERY_ID: NodeId = 7;
/// Node id of the frozen foods section in [`sample_supermarket`]
pub const FROZEN_ID: NodeId = 8;

/// A typical single-floor supermarket: entrance and checkout up front,
/// perimeter departments along the edges, numbered aisles in the middle.
///
/// Departments use ids 3-8; aisle nodes use ids 9-20 and carry aisle
/// numbers 1-12. Entrance and exit are set, so routes default to
/// entrance -> checkout.
pub fn sample_supermarket() -> Result<StoreLayout> {
    let mut layout = StoreLayout::new("Sample Supermarket");

    layout.add_node(StoreNode::new(ENTRANCE_ID, "Entrance", 0.0, 0.0)?)?;
    layout.add_node(StoreNode::new(CHECKOUT_ID, "Checkout", 0.0, 1.0)?)?;

    layout.add_node(StoreNode::new(PRODUCE_ID, "Produce Section", 1.0, 10.0)?)?;
    layout.add_node(StoreNode::new(MEAT_ID, "Meat Department", 10.0, 10.0)?)?;
    layout.add_node(StoreNode::new(5, "Seafood Department", 11.0, 10.0)?)?;
    layout.add_node(StoreNode::new(6, "Deli Department", 12.0, 10.0)?)?;
    layout.add_node(StoreNode::new(BAKERY_ID, "Bakery Section", 13.0, 10.0)?)?;
    layout.add_node(StoreNode::new(FROZEN_ID, "Frozen Foods", 14.0, 5.0)?)?;

    let aisles = [
        ("Dairy", 2.0, 8.0),
        ("Eggs", 3.0, 8.0),
        ("General Grocery", 4.0, 8.0),
        ("Breakfast", 5.0, 8.0),
        ("Grains & Pasta", 6.0, 8.0),
        ("Baking", 7.0, 8.0),
        ("Canned Goods", 8.0, 8.0),
        ("Snacks", 9.0, 8.0),
        ("Coffee & Tea", 10.0, 8.0),
        ("Beverages", 11.0, 8.0),
        ("Cooking Oils", 12.0, 8.0),
        ("Condiments", 13.0, 8.0),
    ];
    for (index, (name, x, y)) in aisles.iter().enumerate() {
        let aisle_number = index as u32 + 1;
        let node = StoreNode::new(
            9 + index as NodeId,
            format!("Aisle {} - {}", aisle_number, name),
            *x,
            *y,
        )?
        .with_aisle(aisle_number);
        layout.add_node(node)?;
    }

    layout.set_entrance(ENTRANCE_ID)?;
    layout.set_exit(CHECKOUT_ID)?;
    Ok(layout)
}

/// A reproducible scattered layout for benchmarks and property tests.
///
/// Node 1 is the entrance at the origin; the remaining ids up to
/// `node_count` land uniformly inside a square of the given extent. No
/// exit is set, so routes default to a round trip.
pub fn random_layout(node_count: usize, extent: f64, seed: u64) -> Result<StoreLayout> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut layout = StoreLayout::new(format!("Random Layout ({} nodes)", node_count));

    layout.add_node(StoreNode::new(1, "Entrance", 0.0, 0.0)?)?;
    for id in 2..=node_count as NodeId {
        let x = rng.gen_range(0.0..extent);
        let y = rng.gen_range(0.0..extent);
        layout.add_node(StoreNode::new(id, format!("Shelf {}", id), x, y)?)?;
    }

    layout.set_entrance(1)?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_supermarket() {
        let layout = sample_supermarket().unwrap();

        assert_eq!(layout.node_count(), 20);
        assert_eq!(layout.entrance(), Some(ENTRANCE_ID));
        assert_eq!(layout.exit(), Some(CHECKOUT_ID));
        assert_eq!(layout.find_by_aisle(1).len(), 1);
        assert_eq!(layout.find_by_aisle(12).len(), 1);
        assert!(layout.validate().is_ok());

        let (min_x, min_y, max_x, max_y) = layout.bounds();
        assert_eq!((min_x, min_y), (0.0, 0.0));
        assert_eq!((max_x, max_y), (14.0, 10.0));
    }

    #[test]
    fn test_random_layout_is_reproducible() {
        let first = random_layout(12, 40.0, 99).unwrap();
        let second = random_layout(12, 40.0, 99).unwrap();

        assert_eq!(first.node_count(), 12);
        assert_eq!(first.entrance(), Some(1));
        assert_eq!(first.exit(), None);
        for node in first.nodes() {
            let twin = second.node(node.id).unwrap();
            assert_eq!(node.coordinates(), twin.coordinates());
        }
    }
}
