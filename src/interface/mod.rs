pub mod prompts;
pub mod render;

pub use prompts::{collect_pet_profile, prompt_include_treat, select_items};
pub use render::{display_item_list, display_portions};
