use argmin::core::{CostFunction, Error, Executor, State};
use argmin::solver::neldermead::NelderMead;

use crate::models::{Item, ItemKind};
use crate::solver::constants::{MASS_BIAS, NutritionTargets};

const MAX_ITERS: u64 = 2_000;
const SD_TOLERANCE: f64 = 1e-10;

// Cost returned when the free parameters collapse to zero total calories
// and no valid rescaling exists.
const DEGENERATE_COST: f64 = 1e12;

/// Map free parameters to a quantity vector that meets the calorie
/// equality exactly.
///
/// Squaring keeps every quantity non-negative without box constraints;
/// rescaling by `target / achieved` pins total calories. Weighted macro
/// averages are scale-invariant, so the rescale never changes which
/// constraints are violated, only the mass bias term.
fn quantities_from_free(items: &[Item], total_calories: f64, free: &[f64]) -> Option<Vec<f64>> {
    let raw: Vec<f64> = free.iter().map(|z| z * z).collect();
    let achieved: f64 = raw
        .iter()
        .zip(items)
        .map(|(q, item)| q * item.calories_per_oz)
        .sum();

    if achieved <= f64::EPSILON {
        return None;
    }

    let scale = total_calories / achieved;
    Some(raw.into_iter().map(|q| q * scale).collect())
}

/// Penalty objective: sum of squared macro violations plus a small mass
/// bias. The calorie equality is enforced by the parameterization, never
/// penalized.
struct PenaltyObjective<'a> {
    items: &'a [Item],
    total_calories: f64,
    targets: &'a NutritionTargets,
    cap_applies: bool,
}

impl PenaltyObjective<'_> {
    fn violation_cost(&self, quantities: &[f64]) -> f64 {
        let total_oz: f64 = quantities.iter().sum::<f64>() + 1e-10;

        let mut protein = 0.0;
        let mut carbs = 0.0;
        let mut fat = 0.0;
        for (item, &q) in self.items.iter().zip(quantities) {
            protein += q * item.min_protein;
            carbs += q * item.max_carbs;
            fat += q * item.min_fat;
        }
        protein /= total_oz;
        carbs /= total_oz;
        fat /= total_oz;

        let adjusted_carbs = carbs * (1.0 - self.targets.carb_overestimation);
        let protein_penalty = (self.targets.min_protein - protein).max(0.0).powi(2);
        let carbs_penalty = (adjusted_carbs - self.targets.max_carbs).max(0.0).powi(2);
        let fat_penalty = (self.targets.min_fat - fat).max(0.0).powi(2);

        let mut cost = protein_penalty + carbs_penalty + fat_penalty;

        if self.cap_applies {
            let treat_cal: f64 = self
                .items
                .iter()
                .zip(quantities)
                .filter(|(item, _)| item.kind == ItemKind::Treat)
                .map(|(item, &q)| q * item.calories_per_oz)
                .sum();
            let cap = self.targets.treat_cal_fraction * self.total_calories;
            cost += (treat_cal - cap).max(0.0).powi(2);
        }

        cost + quantities.iter().sum::<f64>() * MASS_BIAS
    }
}

impl CostFunction for PenaltyObjective<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, free: &Self::Param) -> Result<Self::Output, Error> {
        Ok(
            match quantities_from_free(self.items, self.total_calories, free) {
                Some(quantities) => self.violation_cost(&quantities),
                None => DEGENERATE_COST,
            },
        )
    }
}

/// Best-effort quantities when no exact solution exists.
///
/// A single deterministic Nelder-Mead descent from the equal-calorie
/// starting point. Returns `None` on optimizer failure, which the caller
/// reports as an empty solution.
pub(crate) fn best_effort(
    items: &[Item],
    total_calories: f64,
    targets: &NutritionTargets,
    cap_applies: bool,
) -> Option<Vec<f64>> {
    let n = items.len();

    // Initial guess: equal calorie contribution from every item, expressed
    // in the squared-parameter space.
    let start: Vec<f64> = items
        .iter()
        .map(|item| (total_calories / (n as f64 * item.calories_per_oz)).sqrt())
        .collect();
    if start.iter().any(|z| !z.is_finite()) {
        return None;
    }

    let mut simplex = vec![start.clone()];
    for i in 0..n {
        let mut vertex = start.clone();
        vertex[i] = vertex[i] * 1.1 + 0.05;
        simplex.push(vertex);
    }

    let objective = PenaltyObjective {
        items,
        total_calories,
        targets,
        cap_applies,
    };
    let solver = NelderMead::new(simplex).with_sd_tolerance(SD_TOLERANCE).ok()?;

    let outcome = Executor::new(objective, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
        .ok()?;

    let state = outcome.state();
    if !state.get_best_cost().is_finite() || state.get_best_cost() >= DEGENERATE_COST {
        return None;
    }
    let best = state.get_best_param()?;

    quantities_from_free(items, total_calories, best)
}
