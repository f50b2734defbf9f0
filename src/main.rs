use std::process;
use std::time::Instant;

use grocery_router::algorithms::create_optimizer;
use grocery_router::error::{Result, RouteError};
use grocery_router::models::{Item, NodeId, ShelfSection, ShoppingList, StoreLayout, Strategy};
use grocery_router::utils::sample_layout::{self, sample_supermarket};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let layout = sample_supermarket()?;
    let (_, _, max_x, max_y) = layout.bounds();
    println!(
        "Store: {} ({} locations, floor {:.0} x {:.0})",
        layout.name,
        layout.node_count(),
        max_x,
        max_y
    );

    let dairy_aisle = first_node_in_aisle(&layout, 1)?;
    let coffee_aisle = first_node_in_aisle(&layout, 9)?;

    let mut shopping_list = ShoppingList::new("Weekly Groceries");
    shopping_list.add_item(
        Item::new("Bananas", sample_layout::PRODUCE_ID)?
            .with_quantity(6)?
            .with_price(0.35)?,
    );
    shopping_list.add_item(
        Item::new("Chicken Breast", sample_layout::MEAT_ID)?.with_price(7.99)?,
    );
    shopping_list.add_item(
        Item::new("Sourdough Loaf", sample_layout::BAKERY_ID)?.with_price(4.50)?,
    );
    shopping_list.add_item(
        Item::new("Milk", dairy_aisle)?
            .with_quantity(2)?
            .with_price(2.49)?
            .with_shelf(ShelfSection::Left),
    );
    shopping_list.add_item(
        Item::new("Ground Coffee", coffee_aisle)?
            .with_price(8.99)?
            .with_shelf(ShelfSection::TopShelf),
    );
    shopping_list.add_item(
        Item::new("Ice Cream", sample_layout::FROZEN_ID)?.with_price(5.49)?,
    );

    println!("\nShopping list: {}", shopping_list.name);
    for item in shopping_list.items() {
        println!(
            "  {} x{} - {}",
            item.name,
            item.quantity,
            item.location_description(&layout)
        );
    }
    if let Some(total) = shopping_list.total_cost() {
        println!(
            "  {} units total, estimated ${:.2}",
            shopping_list.item_count(),
            total
        );
    }
    println!(
        "  {} stops required",
        shopping_list.required_nodes().len()
    );

    for strategy in Strategy::ALL {
        let optimizer = create_optimizer(strategy.as_str(), &layout)?;

        let start_time = Instant::now();
        let route = optimizer.optimize(&shopping_list, None, None)?;
        let elapsed = start_time.elapsed();

        println!(
            "\n{} route: {:.2} units in {} stops (found in {:.2?})",
            strategy,
            route.total_distance,
            route.stop_count(),
            elapsed
        );
        for (index, node) in route.nodes.iter().enumerate() {
            println!("  {}. {}", index + 1, node.name);
        }
        if let Some(passes) = route.refine_passes {
            println!("  refined in {} passes", passes);
        }
    }

    Ok(())
}

fn first_node_in_aisle(layout: &StoreLayout, aisle: u32) -> Result<NodeId> {
    layout
        .find_by_aisle(aisle)
        .first()
        .map(|node| node.id)
        .ok_or_else(|| {
            RouteError::Configuration(format!("sample layout has no aisle {}", aisle))
        })
}
