use std::str::FromStr;

use serde::Serialize;

use crate::error::{RationError, Result};

pub(crate) const OZ_PER_LB: f64 = 16.0;
pub(crate) const GRAMS_PER_OZ: f64 = 28.3495;
const KG_TO_OZ: f64 = GRAMS_PER_OZ * 1000.0;

/// Round to two decimal places, the resolution used for all stored
/// nutrition values and portion sizes.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Conversion factor from a labeled weight unit to ounces.
fn ounces_factor(unit: &str) -> Option<f64> {
    match unit.to_lowercase().as_str() {
        "oz" | "ozs" | "ounce" | "ounces" => Some(1.0),
        "lb" | "lbs" | "pound" | "pounds" => Some(OZ_PER_LB),
        "g" | "gram" | "grams" => Some(1.0 / GRAMS_PER_OZ),
        "kg" | "kilogram" | "kilograms" | "kilo" => Some(KG_TO_OZ),
        _ => None,
    }
}

/// Whether an item is a staple food or a treat.
///
/// Treats are capped at a fraction of total calories and are the only
/// items eligible for the treat-inclusion search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Food,
    Treat,
}

impl FromStr for ItemKind {
    type Err = RationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "food" => Ok(ItemKind::Food),
            "treat" => Ok(ItemKind::Treat),
            other => Err(RationError::UnknownItemKind(other.to_string())),
        }
    }
}

/// Raw as-labeled nutrition facts for one item.
///
/// Percentages are as printed on the label (as-fed basis, including
/// moisture). `max_carbs` may be given directly; otherwise carbs are
/// derived as `100 - (protein + fat + fiber + moisture + ash)`.
#[derive(Debug, Clone)]
pub struct Label {
    pub name: String,
    pub kind: ItemKind,
    pub calories: f64,
    pub weight: f64,
    pub weight_unit: String,
    pub min_protein: f64,
    pub max_fiber: f64,
    pub min_fat: f64,
    pub max_moisture: f64,
    pub ash: f64,
    pub max_carbs: Option<f64>,
}

/// A normalized item: calorie density in ounces plus macro percentages
/// on a dry-matter basis. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub calories_per_oz: f64,
    pub min_protein: f64,
    pub max_carbs: f64,
    pub min_fat: f64,
}

impl Item {
    /// Normalize raw label data into the canonical per-ounce, dry-matter
    /// representation.
    ///
    /// Fails on an unrecognized weight unit or moisture at or above 100%
    /// (undefined dry mass). `max_carbs` is not range-checked; inconsistent
    /// labels can push it past 100 and the solver tolerates that.
    pub fn from_label(label: Label) -> Result<Self> {
        let factor = ounces_factor(&label.weight_unit)
            .ok_or_else(|| RationError::UnsupportedWeightUnit(label.weight_unit.clone()))?;

        if label.max_moisture >= 100.0 {
            return Err(RationError::InvalidMoisture(label.max_moisture));
        }

        let weight_oz = label.weight * factor;
        let calories_per_oz = round2(label.calories / weight_oz);

        let carbs_as_fed = label.max_carbs.unwrap_or_else(|| {
            100.0
                - (label.min_protein
                    + label.min_fat
                    + label.max_fiber
                    + label.max_moisture
                    + label.ash)
        });

        // Moisture of zero means the label already reports dry matter.
        let (protein, carbs, fat) = if label.max_moisture == 0.0 {
            (label.min_protein, carbs_as_fed, label.min_fat)
        } else {
            let dry_mass = 100.0 - label.max_moisture;
            (
                (label.min_protein / dry_mass) * 100.0,
                (carbs_as_fed / dry_mass) * 100.0,
                (label.min_fat / dry_mass) * 100.0,
            )
        };

        Ok(Self {
            name: label.name,
            kind: label.kind,
            calories_per_oz,
            min_protein: round2(protein),
            max_carbs: round2(carbs),
            min_fat: round2(fat),
        })
    }

    /// Carb percentage corrected for crude-fiber overestimation.
    ///
    /// Labels computed from crude fiber overstate carbs; the correction
    /// factor scales them down before any comparison to the carb target.
    #[inline]
    pub fn adjusted_max_carbs(&self, overestimation: f64) -> f64 {
        self.max_carbs * (1.0 - overestimation)
    }

    #[inline]
    pub fn is_treat(&self) -> bool {
        self.kind == ItemKind::Treat
    }
}
