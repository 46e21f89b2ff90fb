pub mod consolidate;
pub mod constants;
pub mod grouping;
pub mod normalize;
pub mod recommend;
pub mod scoring;
pub mod sizing;
pub mod splitting;
pub mod synth;
pub mod toppings;

pub use consolidate::{consolidate, PizzaDraft};
pub use grouping::{partition_guests, GuestGroup};
pub use normalize::{normalize_guests, NormalizedGuest};
pub use recommend::generate_recommendations;
pub use scoring::{compatibility, group_affinity};
pub use sizing::size_for_group;
pub use splitting::{conflict_score, should_split, split_group};
pub use synth::{allocate_shares, synthesize_beverages, synthesize_pizzas};
pub use toppings::{eligible_ids, select_toppings};
