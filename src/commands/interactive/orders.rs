//! Order log and closing screens

use anyhow::Result;

use comanda::presentation::output::{closing, order_detail, order_summary};
use comanda::presentation::FileRestaurant;
use comanda::{ComandaError, Money, OrderNumber};

use super::prompt;

pub fn list_orders(restaurant: &FileRestaurant) -> Result<()> {
    let orders = restaurant.orders();
    if orders.is_empty() {
        println!("No orders registered in this session.");
        return Ok(());
    }

    for order in orders {
        println!("{}", order_summary(order));
    }
    let total: Money = orders.iter().map(|o| o.total()).sum();
    println!("\n{} order(s), {} in total", orders.len(), total);
    Ok(())
}

pub fn find_order(restaurant: &FileRestaurant) -> Result<()> {
    let number = OrderNumber::parse(&prompt::text("Order number")?)?;
    let order = restaurant
        .find_order(number)
        .ok_or(ComandaError::OrderNotFound {
            number: number.value(),
        })?;
    print!("{}", order_detail(order));
    Ok(())
}

pub fn remove_order(restaurant: &mut FileRestaurant) -> Result<()> {
    let number = OrderNumber::parse(&prompt::text("Order number to remove")?)?;
    let order = restaurant
        .find_order(number)
        .ok_or(ComandaError::OrderNotFound {
            number: number.value(),
        })?;
    print!("{}", order_detail(order));

    if !prompt::confirm("Remove this order?", false)? {
        println!("Removal cancelled.");
        return Ok(());
    }
    let removed = restaurant.remove_order(number)?;
    println!("Order #{} removed.", removed.number());
    Ok(())
}

pub fn save_order_listing(restaurant: &FileRestaurant) -> Result<()> {
    let path = restaurant.save_order_listing()?;
    println!("Order listing saved to {}", path.display());
    Ok(())
}

pub fn clear_orders(restaurant: &mut FileRestaurant) -> Result<()> {
    let orders = restaurant.orders();
    let tickets = restaurant.stored_tickets()?;
    if orders.is_empty() && tickets == 0 {
        println!("No orders to delete.");
        return Ok(());
    }

    let revenue: Money = orders.iter().map(|o| o.total()).sum();
    println!(
        "{} order(s) this session ({}), {} ticket file(s) on disk.",
        orders.len(),
        revenue,
        tickets
    );
    println!("This deletes every ticket file and restarts numbering at 1.");
    if !prompt::confirm("Delete the whole order listing?", false)? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let deleted = restaurant.clear_orders()?;
    println!("{} ticket file(s) deleted. Next order number: 1", deleted);
    Ok(())
}

pub fn generate_closing(restaurant: &mut FileRestaurant) -> Result<()> {
    let report = restaurant.generate_closing()?;
    println!(
        "Closing report generated: {} order(s), {}",
        report.order_count(),
        report.total_revenue()
    );
    Ok(())
}

pub fn show_closing(restaurant: &FileRestaurant) -> Result<()> {
    let report = restaurant.closing().ok_or(ComandaError::NoClosingReport)?;
    print!("{}", closing(report));
    prompt::pause()
}

pub fn save_closing(restaurant: &FileRestaurant) -> Result<()> {
    let path = restaurant.save_closing()?;
    println!("Closing report saved to {}", path.display());
    Ok(())
}
