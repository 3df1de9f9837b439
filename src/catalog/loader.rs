use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{Item, ItemKind, Label};

/// One row of the item catalog CSV.
///
/// `max_fiber` and `ash` default to zero when the column is empty or
/// absent; `max_carbs` is optional and overrides the derived value.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    calories: f64,
    weight: f64,
    weight_unit: String,
    min_protein: f64,
    #[serde(default)]
    max_fiber: f64,
    min_fat: f64,
    max_moisture: f64,
    #[serde(default)]
    ash: f64,
    #[serde(default)]
    max_carbs: Option<f64>,
}

/// Load and normalize the item catalog from a CSV file.
///
/// Malformed numeric fields surface as CSV errors; unknown item kinds,
/// unsupported weight units, and impossible moisture values surface as
/// their own typed errors from the item constructor.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();

    for record in reader.deserialize() {
        let record: ItemRecord = record?;
        let kind: ItemKind = record.kind.parse()?;
        items.push(Item::from_label(Label {
            name: record.name,
            kind,
            calories: record.calories,
            weight: record.weight,
            weight_unit: record.weight_unit,
            min_protein: record.min_protein,
            max_fiber: record.max_fiber,
            min_fat: record.min_fat,
            max_moisture: record.max_moisture,
            ash: record.ash,
            max_carbs: record.max_carbs,
        })?);
    }

    Ok(items)
}
