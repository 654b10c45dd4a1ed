//! Taking an order at the counter
//!
//! The order lives in an `OrderBuilder` until the customer is done. Typing `0`
//! at any prompt offers to cancel; a cancelled builder is simply dropped, so
//! nothing is numbered or written.

use anyhow::Result;

use comanda::domain::value_objects::parse_quantity;
use comanda::presentation::output::{menu, order_detail};
use comanda::presentation::FileRestaurant;
use comanda::OrderBuilder;

use super::prompt;

enum Step {
    Added,
    Skipped,
    Cancelled,
}

pub fn create_order(restaurant: &mut FileRestaurant) -> Result<()> {
    if restaurant.dishes().iter().all(|d| !d.is_available()) {
        println!("No dishes available. Add dishes to the menu first.");
        return Ok(());
    }

    let customer = prompt::text("Customer name (0 to cancel)")?;
    if prompt::is_cancel(&customer) {
        println!("Order cancelled.");
        return Ok(());
    }
    let mut builder = match restaurant.begin_order(&customer) {
        Ok(builder) => builder,
        Err(e) if e.is_validation() => {
            eprintln!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print!("{}", menu(&restaurant.menu_by_category()));

    loop {
        let next_prompt = match add_line(restaurant, &mut builder)? {
            Step::Cancelled => {
                println!("Order cancelled.");
                return Ok(());
            }
            Step::Added => {
                println!("Running total: {}", builder.running_total());
                "Add more dishes to the order?"
            }
            Step::Skipped => "Try another dish?",
        };
        if !prompt::confirm(next_prompt, true)? {
            break;
        }
    }

    if builder.is_empty() {
        println!("No dishes were added. Order cancelled.");
        return Ok(());
    }

    let order = restaurant.commit_order(builder)?;
    println!("\nOrder registered.\n");
    print!("{}", order_detail(order));
    prompt::pause()
}

fn add_line(restaurant: &FileRestaurant, builder: &mut OrderBuilder) -> Result<Step> {
    let dish_id = prompt::text("Dish id (0 to cancel the order)")?;
    if prompt::is_cancel(&dish_id) {
        return cancel_or_skip();
    }

    let dish = match restaurant.dish(&dish_id) {
        Ok(dish) => dish,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(Step::Skipped);
        }
    };
    if !dish.is_available() {
        eprintln!("'{}' is not available right now.", dish.name());
        return Ok(Step::Skipped);
    }

    let quantity = prompt::text(&format!(
        "Quantity of '{}' (0 to cancel the order)",
        dish.name()
    ))?;
    if prompt::is_cancel(&quantity) {
        return cancel_or_skip();
    }
    let quantity = match parse_quantity(&quantity) {
        Ok(quantity) => quantity,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(Step::Skipped);
        }
    };

    match builder.add_item(dish, quantity) {
        Ok(line) => {
            println!(
                "Added {}x {} ({})",
                line.quantity(),
                line.dish().name(),
                line.subtotal()
            );
            Ok(Step::Added)
        }
        Err(e) if e.is_validation() => {
            eprintln!("{}", e);
            Ok(Step::Skipped)
        }
        Err(e) => Err(e.into()),
    }
}

fn cancel_or_skip() -> Result<Step> {
    if prompt::confirm("Cancel this order?", false)? {
        Ok(Step::Cancelled)
    } else {
        Ok(Step::Skipped)
    }
}
