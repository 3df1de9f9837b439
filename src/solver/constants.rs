/// Macro targets and correction factors for one deployment.
///
/// Passed explicitly into the solver so tests can vary the targets;
/// production callers use [`NutritionTargets::default`].
#[derive(Debug, Clone)]
pub struct NutritionTargets {
    /// Minimum weighted protein percentage (dry-matter basis).
    pub min_protein: f64,

    /// Maximum weighted carbohydrate percentage, after overestimation
    /// adjustment.
    pub max_carbs: f64,

    /// Minimum weighted fat percentage.
    pub min_fat: f64,

    /// Fraction of total calories that treats may contribute.
    pub treat_cal_fraction: f64,

    /// Crude-fiber carb overestimation correction, applied
    /// multiplicatively before any carb comparison.
    pub carb_overestimation: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            min_protein: 55.0,
            max_carbs: 2.0,
            min_fat: 45.0,
            treat_cal_fraction: 0.1,
            carb_overestimation: 0.21,
        }
    }
}

// Relaxed bounds used only while searching for a treat substitution.
// Treat inclusion is a best-effort secondary objective, so candidates are
// held to looser thresholds than the primary targets.
pub(crate) const RELAXED_MIN_PROTEIN: f64 = 40.0;
pub(crate) const RELAXED_MAX_CARBS: f64 = 10.0;
pub(crate) const RELAXED_MIN_FAT: f64 = 30.0;

/// Fixed treat amounts tried during greedy substitution, in ounces.
/// The cap-limited maximum amount is tried as a fourth candidate.
pub(crate) const TREAT_TRIAL_OUNCES: [f64; 3] = [0.01, 0.02, 0.05];

/// Fixed treat amount added by the simple-addition fallback, in ounces.
pub(crate) const SIMPLE_ADDITION_OUNCES: f64 = 0.01;

/// Linear mass bias in the approximation objective, preferring lighter
/// bowls among near-equal constraint violations.
pub(crate) const MASS_BIAS: f64 = 0.01;
