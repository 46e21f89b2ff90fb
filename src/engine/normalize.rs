use std::collections::BTreeSet;

use crate::error::{PlannerError, Result};
use crate::models::{
    exclusion_set, Beverage, BeverageId, DietaryRestriction, GuestPreference, Topping, ToppingId,
};

/// A guest's preferences after validation against the host catalog.
///
/// `index` is the guest's position in the input list and is the tie-break
/// key everywhere downstream, keeping the whole run deterministic.
#[derive(Debug, Clone)]
pub struct NormalizedGuest {
    pub index: usize,
    pub name: String,
    pub restrictions: BTreeSet<DietaryRestriction>,
    pub excluded: BTreeSet<ToppingId>,
    pub liked: BTreeSet<ToppingId>,
    pub disliked: BTreeSet<ToppingId>,
    pub liked_beverages: BTreeSet<BeverageId>,
    pub disliked_beverages: BTreeSet<BeverageId>,
}

/// Validate and normalize raw RSVPs against the host catalog.
///
/// Preferences for items the host does not offer are dropped silently.
/// An item both liked and disliked is treated as disliked: the veto wins,
/// so the liked and disliked sets come out disjoint.
pub fn normalize_guests(
    guests: &[GuestPreference],
    toppings: &[Topping],
    beverages: &[Beverage],
) -> Result<Vec<NormalizedGuest>> {
    let topping_ids: BTreeSet<&str> = toppings.iter().map(|t| t.id.as_str()).collect();
    let beverage_ids: BTreeSet<&str> = beverages.iter().map(|b| b.id.as_str()).collect();

    let mut normalized = Vec::with_capacity(guests.len());

    for (index, guest) in guests.iter().enumerate() {
        if !guest.has_name() {
            return Err(PlannerError::InvalidGuest(format!(
                "guest #{} has no name",
                index + 1
            )));
        }

        let disliked = restrict(&guest.disliked_toppings, &topping_ids);
        let mut liked = restrict(&guest.liked_toppings, &topping_ids);
        liked.retain(|id| !disliked.contains(id));

        let disliked_beverages = restrict(&guest.disliked_beverages, &beverage_ids);
        let mut liked_beverages = restrict(&guest.liked_beverages, &beverage_ids);
        liked_beverages.retain(|id| !disliked_beverages.contains(id));

        normalized.push(NormalizedGuest {
            index,
            name: guest.name.trim().to_string(),
            excluded: exclusion_set(&guest.dietary_restrictions, toppings),
            restrictions: guest.dietary_restrictions.clone(),
            liked,
            disliked,
            liked_beverages,
            disliked_beverages,
        });
    }

    Ok(normalized)
}

fn restrict(ids: &BTreeSet<String>, available: &BTreeSet<&str>) -> BTreeSet<String> {
    ids.iter()
        .filter(|id| available.contains(id.as_str()))
        .cloned()
        .collect()
}
