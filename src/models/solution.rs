use serde::Serialize;

use crate::models::item::round2;
use crate::models::Item;

/// One line of a solved ration: an item name and its portion in ounces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portion {
    pub name: String,
    pub ounces: f64,
}

/// An ordered set of portions, one per input item (zero quantities
/// included). An empty solution means no viable combination exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Solution {
    portions: Vec<Portion>,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pair raw solver quantities with item names, rounding to the
    /// two-decimal portion resolution. Order follows the input items.
    pub fn from_quantities(items: &[Item], quantities: &[f64]) -> Self {
        let portions = items
            .iter()
            .zip(quantities)
            .map(|(item, &q)| Portion {
                name: item.name.clone(),
                ounces: round2(q),
            })
            .collect();
        Self { portions }
    }

    pub fn portions(&self) -> &[Portion] {
        &self.portions
    }

    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }

    pub fn total_ounces(&self) -> f64 {
        self.portions.iter().map(|p| p.ounces).sum()
    }

    /// Portion size for a named item, if present.
    pub fn ounces_of(&self, name: &str) -> Option<f64> {
        self.portions
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.ounces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemKind, Label};

    fn item(name: &str) -> Item {
        Item::from_label(Label {
            name: name.to_string(),
            kind: ItemKind::Food,
            calories: 100.0,
            weight: 1.0,
            weight_unit: "oz".to_string(),
            min_protein: 60.0,
            max_fiber: 0.0,
            min_fat: 50.0,
            max_moisture: 0.0,
            ash: 0.0,
            max_carbs: Some(1.0),
        })
        .unwrap()
    }

    #[test]
    fn test_from_quantities_rounds_and_keeps_order() {
        let items = vec![item("A"), item("B")];
        let solution = Solution::from_quantities(&items, &[1.006, 0.0]);

        assert_eq!(solution.portions().len(), 2);
        assert_eq!(solution.portions()[0].name, "A");
        assert_eq!(solution.portions()[1].ounces, 0.0);
        assert_eq!(solution.ounces_of("A"), Some(1.01));
    }

    #[test]
    fn test_empty_solution() {
        let solution = Solution::empty();
        assert!(solution.is_empty());
        assert_eq!(solution.total_ounces(), 0.0);
        assert_eq!(solution.ounces_of("A"), None);
    }
}
