use clap::Parser;
use std::path::Path;

use cat_ration_rs::cli::{Cli, Command};
use cat_ration_rs::catalog::load_items;
use cat_ration_rs::error::Result;
use cat_ration_rs::interface::{
    collect_pet_profile, display_item_list, display_portions, prompt_include_treat, select_items,
};
use cat_ration_rs::solver::{solve, NutritionTargets};

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
            calories,
            treat,
            json,
        } => cmd_plan(&cli.file, calories, treat, json),
        Command::List => cmd_list(&cli.file),
    }
}

/// Solve one meal interactively.
fn cmd_plan(file_path: &str, calories: Option<f64>, treat_flag: bool, json: bool) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Item catalog not found: {}", file_path);
        eprintln!("Provide a CSV catalog via --file.");
        return Ok(());
    }

    let items = load_items(path)?;
    if items.is_empty() {
        println!("Catalog is empty; nothing to plan.");
        return Ok(());
    }
    println!("Loaded {} items", items.len());

    let selected = select_items(&items)?;

    let target = match calories {
        Some(c) => c,
        None => collect_pet_profile()?.calories_per_meal()?,
    };

    let include_treat = if treat_flag {
        true
    } else {
        prompt_include_treat()?
    };

    println!();
    println!("Solving for {:.2} calories...", target);

    let targets = NutritionTargets::default();
    let solution = solve(&selected, target, include_treat, &targets)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        display_portions(&solution, &selected, target);
    }

    Ok(())
}

/// Print the normalized catalog.
fn cmd_list(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Item catalog not found: {}", file_path);
        return Ok(());
    }

    let items = load_items(path)?;
    display_item_list(&items);
    Ok(())
}
