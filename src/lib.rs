pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;

pub use error::{RationError, Result};
pub use models::{Item, ItemKind, Label, PetProfile, Solution};
pub use solver::{NutritionTargets, solve};
