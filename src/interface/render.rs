use crate::models::{Item, ItemKind, Solution};
use crate::solver::calculations::{total_calories, treat_calories, weighted_macros};

/// Display a solved ration as a formatted table with achieved totals.
pub fn display_portions(solution: &Solution, items: &[Item], target_calories: f64) {
    if solution.is_empty() {
        println!("No combination of the selected items meets the targets.");
        println!("Try a different selection or relax the treat preference.");
        return;
    }

    let quantities: Vec<f64> = solution.portions().iter().map(|p| p.ounces).collect();
    let achieved = total_calories(items, &quantities);
    let from_treats = treat_calories(items, &quantities);

    println!();
    println!("=== Ration ===");
    println!();

    let max_name_len = solution
        .portions()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10);

    for (item, portion) in items.iter().zip(solution.portions()) {
        if portion.ounces <= 0.0 {
            continue;
        }
        let tag = match item.kind {
            ItemKind::Food => "",
            ItemKind::Treat => "  [treat]",
        };
        println!(
            "  {:<width$}  {:>6.2} oz{}",
            portion.name,
            portion.ounces,
            tag,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Target calories: {:.2}", target_calories);
    println!("Achieved calories: {:.2}", achieved);
    println!("Total mass: {:.2} oz", solution.total_ounces());
    if from_treats > 0.0 {
        println!("Treat calories: {:.2}", from_treats);
    }

    if let Some(profile) = weighted_macros(items, &quantities) {
        println!(
            "Weighted macros: P:{:.1}% C:{:.1}% F:{:.1}%",
            profile.protein, profile.carbs, profile.fat
        );
    }
    println!();
}

/// Display the normalized item catalog.
pub fn display_item_list(items: &[Item]) {
    if items.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    let foods: Vec<&Item> = items.iter().filter(|i| i.kind == ItemKind::Food).collect();
    let treats: Vec<&Item> = items.iter().filter(|i| i.kind == ItemKind::Treat).collect();

    println!();
    if !foods.is_empty() {
        println!("=== Foods ({}) ===", foods.len());
        for item in foods {
            print_item(item);
        }
        println!();
    }
    if !treats.is_empty() {
        println!("=== Treats ({}) ===", treats.len());
        for item in treats {
            print_item(item);
        }
        println!();
    }
}

fn print_item(item: &Item) {
    println!(
        "  {} - {} cal/oz, protein {}%, carbs {}%, fat {}% (dry matter)",
        item.name, item.calories_per_oz, item.min_protein, item.max_carbs, item.min_fat
    );
}
