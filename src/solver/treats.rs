use std::cmp::Ordering;

use crate::models::{Item, ItemKind, Solution};
use crate::solver::calculations::{treat_ounces, weighted_macros};
use crate::solver::constants::{
    NutritionTargets, RELAXED_MAX_CARBS, RELAXED_MIN_FAT, RELAXED_MIN_PROTEIN,
    SIMPLE_ADDITION_OUNCES, TREAT_TRIAL_OUNCES,
};
use crate::solver::ranking::TreatCandidate;

/// Rewrite a base solution so that at least one treat is present.
///
/// Best effort: a base that already contains a treat is returned
/// unchanged, and if neither the substitution search nor the simple
/// addition fallback produces a valid rewrite, the base solution is kept
/// as-is. Treat inclusion never discards an otherwise valid result.
pub(crate) fn ensure_treat(
    items: &[Item],
    base: &Solution,
    total_calories: f64,
    targets: &NutritionTargets,
) -> Solution {
    let quantities: Vec<f64> = base.portions().iter().map(|p| p.ounces).collect();

    if items
        .iter()
        .zip(&quantities)
        .any(|(item, &q)| item.kind == ItemKind::Treat && q > 0.0)
    {
        return base.clone();
    }

    let cap = targets.treat_cal_fraction * total_calories;

    if let Some(candidate) = greedy_substitution(items, &quantities, cap, targets) {
        return Solution::from_quantities(items, &candidate.quantities);
    }

    if let Some(rewritten) = simple_addition(items, &quantities, cap) {
        return Solution::from_quantities(items, &rewritten);
    }

    base.clone()
}

/// Try every (treat, amount, food) substitution and keep the candidate
/// with the most treat mass.
///
/// Treats are visited in input order, foods cheapest calorie density
/// first. Each substitution removes the calorie-equivalent mass from one
/// food and must pass the relaxed nutrition bounds.
fn greedy_substitution(
    items: &[Item],
    quantities: &[f64],
    cap: f64,
    targets: &NutritionTargets,
) -> Option<TreatCandidate> {
    let mut food_order: Vec<usize> = (0..items.len())
        .filter(|&i| items[i].kind == ItemKind::Food && quantities[i] > 0.0)
        .collect();
    food_order.sort_by(|&a, &b| {
        items[a]
            .calories_per_oz
            .partial_cmp(&items[b].calories_per_oz)
            .unwrap_or(Ordering::Equal)
    });

    let mut best: Option<TreatCandidate> = None;

    for (treat_idx, treat) in items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.kind == ItemKind::Treat)
    {
        for amount in trial_amounts(treat, cap) {
            for &food_idx in &food_order {
                let food = &items[food_idx];
                let displaced = amount * treat.calories_per_oz / food.calories_per_oz;
                if displaced > quantities[food_idx] {
                    continue;
                }

                let mut candidate = quantities.to_vec();
                candidate[food_idx] -= displaced;
                candidate[treat_idx] += amount;

                if !meets_relaxed_bounds(items, &candidate, targets) {
                    continue;
                }

                let challenger = TreatCandidate {
                    treat_ounces: treat_ounces(items, &candidate),
                    quantities: candidate,
                };
                match &best {
                    Some(incumbent) if !challenger.outranks(incumbent) => {}
                    _ => best = Some(challenger),
                }
            }
        }
    }

    best
}

/// Candidate treat amounts: the fixed trial sizes that fit under the
/// calorie cap, plus the cap-limited maximum.
fn trial_amounts(treat: &Item, cap: f64) -> Vec<f64> {
    let mut amounts: Vec<f64> = TREAT_TRIAL_OUNCES
        .iter()
        .copied()
        .filter(|oz| oz * treat.calories_per_oz <= cap)
        .collect();
    amounts.push(cap / treat.calories_per_oz);
    amounts
}

fn meets_relaxed_bounds(items: &[Item], quantities: &[f64], targets: &NutritionTargets) -> bool {
    let Some(profile) = weighted_macros(items, quantities) else {
        return false;
    };
    let adjusted_carbs = profile.carbs * (1.0 - targets.carb_overestimation);

    profile.protein >= RELAXED_MIN_PROTEIN
        && adjusted_carbs <= RELAXED_MAX_CARBS
        && profile.fat >= RELAXED_MIN_FAT
}

/// Last-resort fallback: add a fixed sliver of the lowest-carb treat,
/// paid for by reducing the densest food in the bowl.
///
/// The densest food is chosen here (unlike the substitution search, which
/// walks foods cheapest-first) so the mass disruption stays minimal.
fn simple_addition(items: &[Item], quantities: &[f64], cap: f64) -> Option<Vec<f64>> {
    let (treat_idx, treat) = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.kind == ItemKind::Treat)
        .min_by(|(_, a), (_, b)| {
            a.max_carbs
                .partial_cmp(&b.max_carbs)
                .unwrap_or(Ordering::Equal)
        })?;

    if SIMPLE_ADDITION_OUNCES * treat.calories_per_oz > cap {
        return None;
    }

    let food_idx = (0..items.len())
        .filter(|&i| items[i].kind == ItemKind::Food && quantities[i] > 0.0)
        .max_by(|&a, &b| {
            items[a]
                .calories_per_oz
                .partial_cmp(&items[b].calories_per_oz)
                .unwrap_or(Ordering::Equal)
        })?;

    let displaced =
        SIMPLE_ADDITION_OUNCES * treat.calories_per_oz / items[food_idx].calories_per_oz;
    if displaced > quantities[food_idx] {
        return None;
    }

    let mut rewritten = quantities.to_vec();
    rewritten[food_idx] -= displaced;
    rewritten[treat_idx] += SIMPLE_ADDITION_OUNCES;
    Some(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;
    use crate::solver::calculations::total_calories;

    fn item(name: &str, kind: ItemKind, cal: f64, protein: f64, carbs: f64, fat: f64) -> Item {
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

    fn base(items: &[Item], quantities: &[f64]) -> Solution {
        Solution::from_quantities(items, quantities)
    }

    #[test]
    fn test_base_with_treat_is_kept() {
        let items = vec![
            item("Food", ItemKind::Food, 100.0, 60.0, 1.0, 50.0),
            item("Treat", ItemKind::Treat, 100.0, 60.0, 1.0, 50.0),
        ];
        let targets = NutritionTargets::default();
        let base = base(&items, &[2.7, 0.3]);

        let result = ensure_treat(&items, &base, 300.0, &targets);
        assert_eq!(result, base);
    }

    #[test]
    fn test_substitution_prefers_largest_treat_amount() {
        let items = vec![
            item("Food", ItemKind::Food, 100.0, 60.0, 1.0, 50.0),
            item("Treat", ItemKind::Treat, 50.0, 30.0, 8.0, 20.0),
        ];
        let targets = NutritionTargets::default();
        let base = base(&items, &[3.0, 0.0]);

        let result = ensure_treat(&items, &base, 300.0, &targets);

        // Cap allows 30 treat calories: 0.6 oz at 50 cal/oz, displacing
        // 0.3 oz of food.
        assert_eq!(result.ounces_of("Treat"), Some(0.6));
        assert_eq!(result.ounces_of("Food"), Some(2.7));

        let rewritten: Vec<f64> = result.portions().iter().map(|p| p.ounces).collect();
        assert!((total_calories(&items, &rewritten) - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_bowl_cannot_fund_a_treat() {
        let items = vec![
            item("Food", ItemKind::Food, 1000.0, 60.0, 1.0, 50.0),
            item("Treat", ItemKind::Treat, 2.0, 60.0, 1.0, 50.0),
        ];
        let targets = NutritionTargets::default();
        let base = base(&items, &[0.0, 0.0]);

        // Zero-quantity bowl: no food to reduce, both stages fail.
        let result = ensure_treat(&items, &base, 300.0, &targets);
        assert_eq!(result, base);
    }

    #[test]
    fn test_simple_addition_fallback() {
        // Food protein sits exactly on the relaxed floor, so any
        // substitution with a zero-protein treat dips below 40 and fails;
        // the fixed 0.01 oz addition still goes through.
        let items = vec![
            item("Food", ItemKind::Food, 100.0, 40.0, 1.0, 50.0),
            item("Treat", ItemKind::Treat, 100.0, 0.0, 1.0, 50.0),
        ];
        let targets = NutritionTargets::default();
        let base = base(&items, &[3.0, 0.0]);

        let result = ensure_treat(&items, &base, 300.0, &targets);
        assert_eq!(result.ounces_of("Treat"), Some(0.01));
        assert_eq!(result.ounces_of("Food"), Some(2.99));
    }

    #[test]
    fn test_both_stages_fail_returns_base() {
        // Treat so dense that 0.01 oz already exceeds the 30-calorie cap;
        // substitution candidates all fail the relaxed protein bound.
        let items = vec![
            item("Food", ItemKind::Food, 100.0, 40.0, 1.0, 50.0),
            item("Treat", ItemKind::Treat, 5000.0, 0.0, 1.0, 50.0),
        ];
        let targets = NutritionTargets::default();
        let base = base(&items, &[3.0, 0.0]);

        let result = ensure_treat(&items, &base, 300.0, &targets);
        assert_eq!(result, base);
    }

    #[test]
    fn test_simple_addition_picks_lowest_carb_treat() {
        let items = vec![
            item("Food", ItemKind::Food, 100.0, 40.0, 1.0, 50.0),
            item("Sweet", ItemKind::Treat, 100.0, 0.0, 9.0, 50.0),
            item("Plain", ItemKind::Treat, 100.0, 0.0, 2.0, 50.0),
        ];
        let targets = NutritionTargets::default();
        let base = base(&items, &[3.0, 0.0, 0.0]);

        let result = ensure_treat(&items, &base, 300.0, &targets);
        assert_eq!(result.ounces_of("Plain"), Some(0.01));
        assert_eq!(result.ounces_of("Sweet"), Some(0.0));
    }
}
