use crate::models::{Item, ItemKind};

/// Mass-weighted macro percentages of a quantity vector.
#[derive(Debug, Clone, Copy)]
pub struct MacroProfile {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Weighted-average macros for a bowl, or `None` when total mass is zero.
pub fn weighted_macros(items: &[Item], quantities: &[f64]) -> Option<MacroProfile> {
    let total_oz: f64 = quantities.iter().sum();
    if total_oz <= 0.0 {
        return None;
    }

    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;
    for (item, &q) in items.iter().zip(quantities) {
        protein += q * item.min_protein;
        carbs += q * item.max_carbs;
        fat += q * item.min_fat;
    }

    Some(MacroProfile {
        protein: protein / total_oz,
        carbs: carbs / total_oz,
        fat: fat / total_oz,
    })
}

/// Total calories delivered by a quantity vector.
pub fn total_calories(items: &[Item], quantities: &[f64]) -> f64 {
    items
        .iter()
        .zip(quantities)
        .map(|(item, &q)| q * item.calories_per_oz)
        .sum()
}

/// Calories contributed by treat items alone.
pub fn treat_calories(items: &[Item], quantities: &[f64]) -> f64 {
    items
        .iter()
        .zip(quantities)
        .filter(|(item, _)| item.kind == ItemKind::Treat)
        .map(|(item, &q)| q * item.calories_per_oz)
        .sum()
}

/// Total treat mass in a quantity vector.
pub fn treat_ounces(items: &[Item], quantities: &[f64]) -> f64 {
    items
        .iter()
        .zip(quantities)
        .filter(|(item, _)| item.kind == ItemKind::Treat)
        .map(|(_, &q)| q)
        .sum()
}
