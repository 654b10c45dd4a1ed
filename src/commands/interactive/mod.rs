//! Interactive session
//!
//! A menu loop over the restaurant. Errors from an action are printed and the
//! loop continues; only Exit (or a broken terminal) ends the session.

mod dishes;
mod order_flow;
mod orders;
mod prompt;

use anyhow::{bail, Result};
use dialoguer::Select;
use is_terminal::IsTerminal;

use comanda::presentation::output::{next_order_label, startup_notes};
use comanda::presentation::{open_restaurant, FileRestaurant, OutputFormat};
use comanda::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddDish,
    ShowMenu,
    FindDish,
    EditDish,
    RemoveDish,
    CreateOrder,
    ListOrders,
    FindOrder,
    RemoveOrder,
    SaveOrderListing,
    ClearOrders,
    GenerateClosing,
    ShowClosing,
    SaveClosing,
    Exit,
}

impl Action {
    const ALL: [Action; 15] = [
        Action::AddDish,
        Action::ShowMenu,
        Action::FindDish,
        Action::EditDish,
        Action::RemoveDish,
        Action::CreateOrder,
        Action::ListOrders,
        Action::FindOrder,
        Action::RemoveOrder,
        Action::SaveOrderListing,
        Action::ClearOrders,
        Action::GenerateClosing,
        Action::ShowClosing,
        Action::SaveClosing,
        Action::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::AddDish => "[1]  Add dish",
            Action::ShowMenu => "[2]  Show menu",
            Action::FindDish => "[3]  Find dish",
            Action::EditDish => "[4]  Edit dish",
            Action::RemoveDish => "[5]  Remove dish",
            Action::CreateOrder => "[6]  New order",
            Action::ListOrders => "[7]  List orders",
            Action::FindOrder => "[8]  Find order",
            Action::RemoveOrder => "[9]  Remove order",
            Action::SaveOrderListing => "[10] Save order listing",
            Action::ClearOrders => "[11] Delete order listing",
            Action::GenerateClosing => "[12] Generate closing report",
            Action::ShowClosing => "[13] Show closing report",
            Action::SaveClosing => "[14] Save closing report",
            Action::Exit => "[0]  Exit",
        }
    }
}

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        bail!("the interactive session has no JSON output; use a subcommand (see 'comanda --help')");
    }
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("the interactive session needs a terminal; see 'comanda --help' for subcommands");
    }

    let (mut restaurant, startup) = open_restaurant(config)?;

    println!("{}", config.restaurant.name);
    if !config.restaurant.tagline.is_empty() {
        println!("{}", config.restaurant.tagline);
    }
    for note in startup_notes(&startup) {
        eprintln!("[WARN] {}", note);
    }
    println!(
        "{} dish(es) on the menu. Next order number: {}\n",
        startup.dishes_loaded,
        next_order_label(startup.next_order)
    );

    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = Action::ALL[selection];
        if action == Action::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        if let Err(err) = dispatch(&mut restaurant, action) {
            eprint!("{}", super::format_error(&err));
        }
        println!();
    }
}

fn dispatch(restaurant: &mut FileRestaurant, action: Action) -> Result<()> {
    match action {
        Action::AddDish => dishes::add_dish(restaurant),
        Action::ShowMenu => dishes::show_menu(restaurant),
        Action::FindDish => dishes::find_dish(restaurant),
        Action::EditDish => dishes::edit_dish(restaurant),
        Action::RemoveDish => dishes::remove_dish(restaurant),
        Action::CreateOrder => order_flow::create_order(restaurant),
        Action::ListOrders => orders::list_orders(restaurant),
        Action::FindOrder => orders::find_order(restaurant),
        Action::RemoveOrder => orders::remove_order(restaurant),
        Action::SaveOrderListing => orders::save_order_listing(restaurant),
        Action::ClearOrders => orders::clear_orders(restaurant),
        Action::GenerateClosing => orders::generate_closing(restaurant),
        Action::ShowClosing => orders::show_closing(restaurant),
        Action::SaveClosing => orders::save_closing(restaurant),
        Action::Exit => Ok(()),
    }
}
