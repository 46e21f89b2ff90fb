use clap::Parser;
use std::path::Path;

use party_pizza_planner_rs::cli::{Cli, Command};
use party_pizza_planner_rs::demo::generate_demo_guests;
use party_pizza_planner_rs::engine::generate_recommendations;
use party_pizza_planner_rs::error::{PlannerError, Result};
use party_pizza_planner_rs::interface::{
    display_catalog, display_guest_list, display_order, prompt_expected_guests, prompt_style,
    prompt_yes_no,
};
use party_pizza_planner_rs::models::PizzaStyle;
use party_pizza_planner_rs::state::{load_catalog, load_guests, save_order, CatalogIndex};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            guests,
            style,
            expected,
            output,
        } => cmd_plan(&cli.catalog, &guests, style, expected, output),
        Command::Catalog => cmd_catalog(&cli.catalog),
        Command::Demo {
            guests,
            style,
            expected,
            seed,
        } => cmd_demo(&cli.catalog, guests, &style, expected, seed),
    }
}

fn parse_style(input: &str) -> Result<PizzaStyle> {
    PizzaStyle::parse(input).ok_or_else(|| PlannerError::UnknownStyle(input.to_string()))
}

fn load_index(catalog_path: &str) -> Result<Option<CatalogIndex>> {
    let path = Path::new(catalog_path);
    if !path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path);
        eprintln!("Create a catalog JSON with your available toppings and beverages.");
        return Ok(None);
    }
    Ok(Some(CatalogIndex::new(load_catalog(path)?)))
}

/// Generate a pizza order from guest RSVPs.
fn cmd_plan(
    catalog_path: &str,
    guests_path: &str,
    style: Option<String>,
    expected: Option<u32>,
    output: Option<String>,
) -> Result<()> {
    let Some(index) = load_index(catalog_path)? else {
        return Ok(());
    };

    let guests_file = Path::new(guests_path);
    if !guests_file.exists() {
        eprintln!("Guest file not found: {}", guests_path);
        return Ok(());
    }

    let guests = load_guests(guests_file, &index)?;
    println!("Loaded {} guest responses", guests.len());

    let style = match style {
        Some(s) => parse_style(&s)?,
        None => prompt_style()?,
    };
    let expected = match expected {
        Some(e) => e,
        None => prompt_expected_guests(guests.len())?,
    };

    println!();
    println!(
        "Planning a {} order for {} expected guests...",
        style, expected
    );

    let order = generate_recommendations(
        &guests,
        index.toppings(),
        index.beverages(),
        style,
        Some(expected),
    )?;

    display_order(&order);

    match output {
        Some(path) => {
            save_order(&path, &order)?;
            println!("Order saved to {}.", path);
        }
        None => {
            if !order.is_empty() && prompt_yes_no("Save order to pizza_order.json?", false)? {
                save_order("pizza_order.json", &order)?;
                println!("Order saved.");
            }
        }
    }

    Ok(())
}

/// List the host's catalog.
fn cmd_catalog(catalog_path: &str) -> Result<()> {
    if let Some(index) = load_index(catalog_path)? {
        display_catalog(index.catalog());
    }
    Ok(())
}

/// Generate a reproducible demo party and plan it.
fn cmd_demo(
    catalog_path: &str,
    guest_count: usize,
    style: &str,
    expected: Option<u32>,
    seed: u64,
) -> Result<()> {
    let Some(index) = load_index(catalog_path)? else {
        return Ok(());
    };

    let style = parse_style(style)?;
    let guests = generate_demo_guests(guest_count, index.catalog(), seed);

    display_guest_list(&guests);

    let order = generate_recommendations(
        &guests,
        index.toppings(),
        index.beverages(),
        style,
        expected,
    )?;

    display_order(&order);
    Ok(())
}
