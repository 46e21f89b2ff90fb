use std::collections::BTreeSet;

use crate::engine::constants::MAX_TOPPINGS_PER_PIZZA;
use crate::engine::normalize::NormalizedGuest;
use crate::models::{Topping, ToppingId};

/// Catalog topping ids a dietary profile allows.
pub fn eligible_ids(toppings: &[Topping], excluded: &BTreeSet<ToppingId>) -> BTreeSet<ToppingId> {
    toppings
        .iter()
        .filter(|t| !excluded.contains(&t.id))
        .map(|t| t.id.clone())
        .collect()
}

/// Choose up to three toppings for a group (or half-pizza) of guests.
///
/// A topping is in the running only if nobody in the group dislikes it
/// (one dislike vetoes it for everyone) and the shared dietary profile
/// allows it. Survivors are ranked by like count, ties broken by name so
/// identical inputs always order identically. Toppings nobody likes are
/// never picked; a pizza with no surviving toppings is simply plain.
pub fn select_toppings(
    members: &[usize],
    guests: &[NormalizedGuest],
    excluded: &BTreeSet<ToppingId>,
    toppings: &[Topping],
) -> Vec<ToppingId> {
    let mut ranked: Vec<(usize, &str, &ToppingId)> = Vec::new();

    for topping in toppings {
        if excluded.contains(&topping.id) {
            continue;
        }
        if members
            .iter()
            .any(|&m| guests[m].disliked.contains(&topping.id))
        {
            continue;
        }
        let likes = members
            .iter()
            .filter(|&&m| guests[m].liked.contains(&topping.id))
            .count();
        if likes == 0 {
            continue;
        }
        ranked.push((likes, topping.name.as_str(), &topping.id));
    }

    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    ranked
        .into_iter()
        .take(MAX_TOPPINGS_PER_PIZZA)
        .map(|(_, _, id)| id.clone())
        .collect()
}
