pub mod item;
pub mod profile;
pub mod solution;

pub use item::{Item, ItemKind, Label};
pub use profile::{ActivityLevel, PetProfile};
pub use solution::{Portion, Solution};

pub(crate) use item::round2;
