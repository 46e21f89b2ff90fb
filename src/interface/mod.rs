pub mod prompts;
pub mod render;

pub use prompts::{prompt_expected_guests, prompt_style, prompt_yes_no};
pub use render::{display_catalog, display_guest_list, display_order};
