//! `comanda orders ...` handlers

use anyhow::Result;
use serde_json::json;

use comanda::domain::value_objects::parse_quantity;
use comanda::presentation::output::{emit, next_order_label, order_detail, order_json};
use comanda::presentation::{open_restaurant, OrdersCommand, OutputFormat};
use comanda::{ComandaError, Config};

pub fn run(command: OrdersCommand, config: &Config, format: OutputFormat) -> Result<()> {
    let (mut restaurant, _startup) = open_restaurant(config)?;

    match command {
        OrdersCommand::Create { customer, items } => {
            let items = items
                .iter()
                .map(|raw| parse_item(raw))
                .collect::<Result<Vec<_>>>()?;

            let mut builder = restaurant.begin_order(&customer)?;
            for item in &items {
                restaurant.add_to_order(&mut builder, &item.dish_id, item.quantity)?;
            }
            let order = restaurant.commit_order(builder)?;

            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "orders.create",
                    "order": order_json(order),
                }))?;
            } else {
                print!("{}", order_detail(order));
            }
        }

        OrdersCommand::Status => {
            let next = restaurant.next_order_number();
            let tickets = restaurant.stored_tickets()?;
            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "orders.status",
                    "next_order": next,
                    "stored_tickets": tickets,
                }))?;
            } else {
                println!("Next order number: {}", next_order_label(next));
                println!("Stored tickets:    {}", tickets);
            }
        }

        OrdersCommand::Clear { yes } => {
            let tickets = restaurant.stored_tickets()?;
            let prompt = format!(
                "Delete {} stored ticket(s) and restart numbering at 1?",
                tickets
            );
            if !super::confirmed(&prompt, yes)? {
                println!("Aborted.");
                return Ok(());
            }

            let deleted = restaurant.clear_orders()?;
            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "orders.clear",
                    "deleted": deleted,
                    "next_order": restaurant.next_order_number(),
                }))?;
            } else {
                println!("Deleted {} ticket(s). Next order number: 1", deleted);
            }
        }
    }

    Ok(())
}

/// One `--item` argument
#[derive(Debug)]
struct OrderCommandItem {
    dish_id: String,
    quantity: u32,
}

/// Parse `DISH_ID=QUANTITY`
fn parse_item(raw: &str) -> Result<OrderCommandItem> {
    let (dish_id, quantity) = raw.split_once('=').ok_or_else(|| {
        ComandaError::invalid("item", format!("'{}' is not in DISH_ID=QUANTITY form", raw))
    })?;
    let quantity = parse_quantity(quantity)?;

    Ok(OrderCommandItem {
        dish_id: dish_id.trim().to_string(),
        quantity,
    })
}
