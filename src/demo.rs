use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Catalog, DietaryRestriction, GuestPreference};

const GUEST_NAMES: [&str; 16] = [
    "Alice", "Bob", "Cara", "Dan", "Elena", "Felix", "Grace", "Hugo", "Iris", "Jonas", "Kira",
    "Liam", "Mira", "Noah", "Olive", "Pete",
];

/// Generate a reproducible random party for the demo command.
///
/// Same seed, same catalog, same guests; the engine itself is
/// deterministic, so the whole demo run is too.
pub fn generate_demo_guests(count: usize, catalog: &Catalog, seed: u64) -> Vec<GuestPreference> {
    let mut rng = StdRng::seed_from_u64(seed);

    let topping_ids: Vec<String> = catalog.toppings.iter().map(|t| t.id.clone()).collect();
    let beverage_ids: Vec<String> = catalog.beverages.iter().map(|b| b.id.clone()).collect();

    (0..count)
        .map(|i| {
            let name = if i < GUEST_NAMES.len() {
                GUEST_NAMES[i].to_string()
            } else {
                format!("{} {}", GUEST_NAMES[i % GUEST_NAMES.len()], i / GUEST_NAMES.len() + 1)
            };
            let mut guest = GuestPreference::named(i as u32 + 1, &name);

            if rng.gen_bool(0.2) {
                if let Some(&restriction) = DietaryRestriction::ALL.choose(&mut rng) {
                    guest.dietary_restrictions.insert(restriction);
                }
            }

            if !topping_ids.is_empty() {
                let likes = rng.gen_range(1..=3.min(topping_ids.len()));
                guest.liked_toppings = topping_ids
                    .choose_multiple(&mut rng, likes)
                    .cloned()
                    .collect();

                let dislikes = rng.gen_range(0..=2.min(topping_ids.len()));
                guest.disliked_toppings = topping_ids
                    .choose_multiple(&mut rng, dislikes)
                    .cloned()
                    .collect();
            }

            if !beverage_ids.is_empty() {
                let likes = rng.gen_range(1..=2.min(beverage_ids.len()));
                guest.liked_beverages = beverage_ids
                    .choose_multiple(&mut rng, likes)
                    .cloned()
                    .collect();
            }

            guest
        })
        .collect()
}
