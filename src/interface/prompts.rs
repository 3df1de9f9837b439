use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{RationError, Result};
use crate::models::{ActivityLevel, Item, ItemKind, PetProfile};

fn kind_word(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Food => "food",
        ItemKind::Treat => "treat",
    }
}

/// Prompt for the subset of catalog items to solve over.
///
/// An empty selection means "use everything", matching the catalog-wide
/// default most meals want.
pub fn select_items(items: &[Item]) -> Result<Vec<Item>> {
    let labels: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "{} ({}) - {} cal/oz, P:{}% C:{}% F:{}%",
                item.name,
                kind_word(item.kind),
                item.calories_per_oz,
                item.min_protein,
                item.max_carbs,
                item.min_fat
            )
        })
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select items to include (space toggles, enter confirms; empty = all)")
        .items(&labels)
        .interact()?;

    if chosen.is_empty() {
        println!("Selected all {} items.", items.len());
        return Ok(items.to_vec());
    }

    Ok(chosen.into_iter().map(|i| items[i].clone()).collect())
}

/// Prompt for the pet profile used to derive the per-meal calorie target.
pub fn collect_pet_profile() -> Result<PetProfile> {
    let weight_input: String = Input::new()
        .with_prompt("Body weight in kg")
        .interact_text()?;
    let weight_kg: f64 = weight_input
        .parse()
        .map_err(|_| RationError::InvalidInput("Invalid weight".to_string()))?;

    let activity = match Select::new()
        .with_prompt("Activity level")
        .items(&["Low", "Moderate", "High"])
        .default(0)
        .interact()?
    {
        0 => ActivityLevel::Low,
        1 => ActivityLevel::Moderate,
        _ => ActivityLevel::High,
    };

    let neutered = Confirm::new()
        .with_prompt("Neutered?")
        .default(true)
        .interact()?;

    let meals_input: String = Input::new()
        .with_prompt("Meals per day")
        .default("2".to_string())
        .interact_text()?;
    let meals_per_day: u32 = meals_input
        .parse()
        .map_err(|_| RationError::InvalidInput("Invalid meal count".to_string()))?;

    Ok(PetProfile {
        weight_kg,
        activity,
        neutered,
        meals_per_day,
    })
}

/// Ask whether the meal must contain at least one treat.
pub fn prompt_include_treat() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Guarantee at least one treat in the meal?")
        .default(false)
        .interact()?)
}
