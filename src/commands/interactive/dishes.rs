//! Menu management screens

use anyhow::Result;

use comanda::presentation::output::{dish_line, menu};
use comanda::presentation::FileRestaurant;
use comanda::DishPatch;

use super::prompt;

pub fn add_dish(restaurant: &mut FileRestaurant) -> Result<()> {
    let id = prompt::required("Dish id (e.g. P001)")?;
    let name = prompt::required("Name")?;
    let price = prompt::required("Price")?;
    let category = prompt::required("Category (Starter/Main/Dessert/Drink)")?;

    let dish = restaurant.add_dish(&id, &name, &price, &category)?;
    println!("Added {}", dish_line(dish));
    Ok(())
}

pub fn show_menu(restaurant: &FileRestaurant) -> Result<()> {
    print!("{}", menu(&restaurant.menu_by_category()));
    Ok(())
}

pub fn find_dish(restaurant: &FileRestaurant) -> Result<()> {
    let id = prompt::required("Dish id")?;
    println!("{}", dish_line(restaurant.dish(&id)?));
    Ok(())
}

/// Blank answers keep the current value
pub fn edit_dish(restaurant: &mut FileRestaurant) -> Result<()> {
    let id = prompt::required("Dish id to edit")?;
    let current = restaurant.dish(&id)?.clone();
    println!("{}", dish_line(&current));
    println!("Leave a field blank to keep its current value.");

    let patch = DishPatch::new()
        .with_name(prompt::text(&format!("Name [{}]", current.name()))?)
        .with_price(prompt::text(&format!("Price [{}]", current.price()))?)
        .with_category(prompt::text(&format!("Category [{}]", current.category()))?)
        .with_available(prompt::confirm("Available?", current.is_available())?);

    let edit = restaurant.edit_dish(&id, &patch)?;
    for warning in &edit.warnings {
        eprintln!("[WARN] {}", warning);
    }
    println!("Updated {}", dish_line(&edit.dish));
    Ok(())
}

pub fn remove_dish(restaurant: &mut FileRestaurant) -> Result<()> {
    let id = prompt::required("Dish id to remove")?;
    let name = restaurant.dish(&id)?.name().to_string();

    if !prompt::confirm(&format!("Remove '{}'?", name), false)? {
        println!("Removal cancelled.");
        return Ok(());
    }
    let dish = restaurant.remove_dish(&id)?;
    println!("Removed {}", dish_line(&dish));
    Ok(())
}
