use good_lp::{default_solver, variable, variables, Expression, Solution, SolverModel, Variable};

use crate::models::{Item, ItemKind};
use crate::solver::constants::NutritionTargets;

/// Solve the exact portioning linear program.
///
/// Minimizes total mass subject to the calorie equality and the macro
/// ratio constraints. Weighted-average constraints are reformulated into
/// linear form: `avg(v) <= t` over masses `q` becomes
/// `sum(q_i * (v_i - t)) <= 0`, which is what keeps the problem linear.
///
/// Returns `None` when the program is infeasible or the solver fails;
/// the caller falls back to the approximation optimizer.
pub(crate) fn solve_exact(
    items: &[Item],
    total_calories: f64,
    targets: &NutritionTargets,
    cap_applies: bool,
) -> Option<Vec<f64>> {
    let mut vars = variables!();
    let quantities: Vec<Variable> = items
        .iter()
        .map(|_| vars.add(variable().min(0.0)))
        .collect();

    let mut total_mass = Expression::with_capacity(items.len());
    let mut calories = Expression::with_capacity(items.len());
    let mut carb_excess = Expression::with_capacity(items.len());
    let mut protein_shortfall = Expression::with_capacity(items.len());
    let mut fat_shortfall = Expression::with_capacity(items.len());
    let mut treat_calories = Expression::default();

    for (item, &q) in items.iter().zip(&quantities) {
        total_mass.add_mul(1.0, q);
        calories.add_mul(item.calories_per_oz, q);
        carb_excess.add_mul(
            item.adjusted_max_carbs(targets.carb_overestimation) - targets.max_carbs,
            q,
        );
        // Sign flipped so the minimum-threshold constraints read as <= 0.
        protein_shortfall.add_mul(targets.min_protein - item.min_protein, q);
        fat_shortfall.add_mul(targets.min_fat - item.min_fat, q);
        if item.kind == ItemKind::Treat {
            treat_calories.add_mul(item.calories_per_oz, q);
        }
    }

    let mut model = vars
        .minimise(total_mass)
        .using(default_solver)
        .with(calories.eq(total_calories))
        .with(carb_excess.leq(0.0))
        .with(protein_shortfall.leq(0.0))
        .with(fat_shortfall.leq(0.0));

    if cap_applies {
        model = model.with(treat_calories.leq(targets.treat_cal_fraction * total_calories));
    }

    let solution = model.solve().ok()?;
    Some(quantities.iter().map(|&q| solution.value(q)).collect())
}
