//! `comanda dish ...` handlers

use anyhow::Result;
use serde_json::json;

use comanda::presentation::output::{dish_json, dish_line, emit, menu};
use comanda::presentation::{open_restaurant, DishCommand, OutputFormat};
use comanda::{Config, DishPatch};

pub fn run(command: DishCommand, config: &Config, format: OutputFormat) -> Result<()> {
    let (mut restaurant, _startup) = open_restaurant(config)?;

    match command {
        DishCommand::Add {
            id,
            name,
            price,
            category,
        } => {
            let dish = restaurant.add_dish(&id, &name, &price, &category)?;
            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "dish.add",
                    "dish": dish_json(dish),
                }))?;
            } else {
                println!("Added {}", dish_line(dish));
            }
        }

        DishCommand::List => {
            if format.is_json() {
                let dishes: Vec<_> = restaurant.dishes().iter().map(dish_json).collect();
                emit(json!({
                    "event": "data",
                    "command": "dish.list",
                    "dishes": dishes,
                }))?;
            } else {
                print!("{}", menu(&restaurant.menu_by_category()));
            }
        }

        DishCommand::Show { id } => {
            let dish = restaurant.dish(&id)?;
            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "dish.show",
                    "dish": dish_json(dish),
                }))?;
            } else {
                println!("{}", dish_line(dish));
            }
        }

        DishCommand::Edit {
            id,
            name,
            price,
            category,
            available,
        } => {
            let patch = DishPatch {
                name,
                price,
                category,
                available,
            };
            let edit = restaurant.edit_dish(&id, &patch)?;
            let warnings: Vec<String> = edit.warnings.iter().map(ToString::to_string).collect();

            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "dish.edit",
                    "dish": dish_json(&edit.dish),
                    "warnings": warnings,
                }))?;
            } else {
                for warning in &warnings {
                    eprintln!("[WARN] {}", warning);
                }
                println!("Updated {}", dish_line(&edit.dish));
            }
        }

        DishCommand::Remove { id, yes } => {
            let prompt = {
                let dish = restaurant.dish(&id)?;
                format!("Remove '{}' [{}] from the menu?", dish.name(), dish.id())
            };
            if !super::confirmed(&prompt, yes)? {
                println!("Aborted.");
                return Ok(());
            }

            let dish = restaurant.remove_dish(&id)?;
            if format.is_json() {
                emit(json!({
                    "event": "data",
                    "command": "dish.remove",
                    "dish": dish_json(&dish),
                }))?;
            } else {
                println!("Removed {}", dish_line(&dish));
            }
        }
    }

    Ok(())
}
