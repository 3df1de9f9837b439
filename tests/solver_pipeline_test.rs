use assert_float_eq::assert_float_absolute_eq;

use cat_ration_rs::models::{Item, ItemKind, Label};
use cat_ration_rs::solver::calculations::{total_calories, treat_calories, weighted_macros};
use cat_ration_rs::solver::{solve, NutritionTargets};
use cat_ration_rs::RationError;

fn make_item(name: &str, kind: ItemKind, cal: f64, protein: f64, carbs: f64, fat: f64) -> Item {
    Item::from_label(Label {
        name: name.to_string(),
        kind,
        calories: cal,
        weight: 1.0,
        weight_unit: "oz".to_string(),
        min_protein: protein,
        max_fiber: 0.0,
        min_fat: fat,
        max_moisture: 0.0,
        ash: 0.0,
        max_carbs: Some(carbs),
    })
    .unwrap()
}

fn quantities(solution: &cat_ration_rs::Solution) -> Vec<f64> {
    solution.portions().iter().map(|p| p.ounces).collect()
}

#[test]
fn test_single_item_worked_example() {
    let items = vec![make_item("A", ItemKind::Food, 100.0, 60.0, 1.0, 50.0)];
    let targets = NutritionTargets::default();

    let solution = solve(&items, 300.0, false, &targets).unwrap();

    assert_eq!(solution.portions().len(), 1);
    assert_eq!(solution.ounces_of("A"), Some(3.0));

    let q = quantities(&solution);
    assert_float_absolute_eq!(total_calories(&items, &q), 300.0, 0.1);

    let profile = weighted_macros(&items, &q).unwrap();
    assert!(profile.protein >= targets.min_protein);
    assert!(profile.carbs * (1.0 - targets.carb_overestimation) <= targets.max_carbs);
    assert!(profile.fat >= targets.min_fat);
}

#[test]
fn test_mixture_meets_macro_targets() {
    // Neither food alone works: Lean misses the fat floor, Rich misses
    // the carb ceiling; the solver has to blend them.
    let items = vec![
        make_item("Lean", ItemKind::Food, 40.0, 60.0, 0.5, 40.0),
        make_item("Rich", ItemKind::Food, 120.0, 56.0, 4.0, 70.0),
    ];
    let targets = NutritionTargets::default();

    let solution = solve(&items, 320.0, false, &targets).unwrap();
    assert!(!solution.is_empty());

    let q = quantities(&solution);
    // Portion rounding moves totals slightly; allow a looser band here.
    assert_float_absolute_eq!(total_calories(&items, &q), 320.0, 0.5);

    let profile = weighted_macros(&items, &q).unwrap();
    assert!(profile.protein >= targets.min_protein - 0.1);
    assert!(profile.carbs * (1.0 - targets.carb_overestimation) <= targets.max_carbs + 0.1);
    assert!(profile.fat >= targets.min_fat - 0.1);
}

#[test]
fn test_protein_floor_falls_back_to_best_effort() {
    // A single food at protein 30 can never reach the 55 floor; the
    // approximation must still hit the calorie target exactly.
    let items = vec![make_item("Low", ItemKind::Food, 100.0, 30.0, 1.0, 50.0)];
    let targets = NutritionTargets::default();

    let solution = solve(&items, 300.0, false, &targets).unwrap();
    assert_eq!(solution.ounces_of("Low"), Some(3.0));

    let q = quantities(&solution);
    assert_float_absolute_eq!(total_calories(&items, &q), 300.0, 0.1);

    let profile = weighted_macros(&items, &q).unwrap();
    assert!(profile.protein < targets.min_protein);
}

#[test]
fn test_treat_calories_stay_under_cap() {
    let items = vec![
        make_item("Food", ItemKind::Food, 50.0, 60.0, 1.0, 50.0),
        make_item("Treat", ItemKind::Treat, 500.0, 60.0, 1.0, 50.0),
    ];
    let targets = NutritionTargets::default();

    let solution = solve(&items, 300.0, false, &targets).unwrap();
    assert!(!solution.is_empty());

    let q = quantities(&solution);
    assert!(treat_calories(&items, &q) <= targets.treat_cal_fraction * 300.0 + 0.1);
}

#[test]
fn test_identical_inputs_solve_identically() {
    let items = vec![
        make_item("A", ItemKind::Food, 100.0, 45.0, 1.0, 50.0),
        make_item("B", ItemKind::Food, 60.0, 20.0, 3.0, 30.0),
    ];
    let targets = NutritionTargets::default();

    let first = solve(&items, 250.0, false, &targets).unwrap();
    let second = solve(&items, 250.0, false, &targets).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invocation_errors_precede_solving() {
    let targets = NutritionTargets::default();

    assert!(matches!(
        solve(&[], 300.0, false, &targets),
        Err(RationError::NoItems)
    ));

    let items = vec![make_item("A", ItemKind::Food, 100.0, 60.0, 1.0, 50.0)];
    assert!(matches!(
        solve(&items, 0.0, false, &targets),
        Err(RationError::InvalidInput(_))
    ));
    assert!(matches!(
        solve(&items, -5.0, false, &targets),
        Err(RationError::InvalidInput(_))
    ));
}

#[test]
fn test_solution_preserves_input_order_with_zero_entries() {
    let items = vec![
        make_item("First", ItemKind::Food, 40.0, 60.0, 0.5, 40.0),
        make_item("Second", ItemKind::Food, 120.0, 56.0, 0.5, 70.0),
    ];
    let targets = NutritionTargets::default();

    let solution = solve(&items, 240.0, false, &targets).unwrap();

    let names: Vec<&str> = solution.portions().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    // Minimum mass puts everything on the denser food; the zero entry for
    // the other item is still reported.
    assert_eq!(solution.ounces_of("First"), Some(0.0));
    assert_eq!(solution.ounces_of("Second"), Some(2.0));
}
