pub mod approx;
pub mod calculations;
pub mod constants;
pub mod linear;
mod ranking;
pub mod treats;

pub use constants::NutritionTargets;

use crate::error::{RationError, Result};
use crate::models::{Item, ItemKind, Solution};

/// Solve for the quantities of each item that deliver the target calories
/// under the macro ratio constraints.
///
/// The exact linear program is attempted first; on infeasibility the
/// penalty-based approximation takes over. With `include_treat` set, the
/// base solution is post-processed so at least one treat appears, when a
/// valid rewrite exists. An empty solution means no viable combination
/// was found; it is a result, not an error.
pub fn solve(
    items: &[Item],
    total_calories: f64,
    include_treat: bool,
    targets: &NutritionTargets,
) -> Result<Solution> {
    if items.is_empty() {
        return Err(RationError::NoItems);
    }
    if total_calories <= 0.0 {
        return Err(RationError::InvalidInput(format!(
            "total calories must be positive, got {}",
            total_calories
        )));
    }

    // The treat calorie cap only applies when a treat can actually appear.
    let cap_applies = items.iter().any(|item| item.kind == ItemKind::Treat);

    let quantities = linear::solve_exact(items, total_calories, targets, cap_applies)
        .or_else(|| approx::best_effort(items, total_calories, targets, cap_applies));

    let base = match quantities {
        Some(q) => Solution::from_quantities(items, &q),
        None => Solution::empty(),
    };

    if include_treat && !base.is_empty() {
        Ok(treats::ensure_treat(items, &base, total_calories, targets))
    } else {
        Ok(base)
    }
}
