use std::collections::BTreeSet;

use crate::engine::normalize::NormalizedGuest;
use crate::engine::scoring::group_affinity;
use crate::models::{DietaryRestriction, PizzaStyle, ToppingId};

/// A transient grouping of guests who will share one pizza.
///
/// Members are indices into the normalized guest list, in input order.
/// Everyone in a group has the same resolved exclusion set, so topping
/// selection can treat the group as one dietary profile.
#[derive(Debug, Clone)]
pub struct GuestGroup {
    pub members: Vec<usize>,
    pub restrictions: BTreeSet<DietaryRestriction>,
    pub excluded: BTreeSet<ToppingId>,
}

impl GuestGroup {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn member_names(&self, guests: &[NormalizedGuest]) -> Vec<String> {
        self.members
            .iter()
            .map(|&m| guests[m].name.clone())
            .collect()
    }
}

/// Partition guests into pizza-sized groups.
///
/// Guests are first bucketed by exact exclusion-set equality (a vegan and a
/// vegetarian-plus-dairy-free guest share a bucket: their forbidden toppings
/// coincide). Guests with no surviving likes get a pizza of their own; the
/// rest of each bucket is clustered greedily by compatibility.
pub fn partition_guests(guests: &[NormalizedGuest], style: PizzaStyle) -> Vec<GuestGroup> {
    let max = style.max_guests_per_pizza();

    // Buckets in first-seen order so output follows input order.
    let mut buckets: Vec<(BTreeSet<ToppingId>, Vec<usize>)> = Vec::new();
    for (i, guest) in guests.iter().enumerate() {
        match buckets.iter_mut().find(|(excl, _)| *excl == guest.excluded) {
            Some((_, members)) => members.push(i),
            None => buckets.push((guest.excluded.clone(), vec![i])),
        }
    }

    let mut groups = Vec::new();
    for (excluded, indices) in buckets {
        // No likes means no signal to cluster on; a solo pizza avoids
        // dragging a shared pie toward plain.
        let (silent, voiced): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .copied()
            .partition(|&i| guests[i].liked.is_empty());

        for i in silent {
            groups.push(make_group(vec![i], &excluded, guests));
        }
        for members in cluster_bucket(guests, &voiced, max) {
            groups.push(make_group(members, &excluded, guests));
        }
    }

    groups
}

/// Greedy nearest-neighbor clustering within one dietary bucket.
///
/// Seed each group with the lowest-index unassigned guest, then repeatedly
/// pull in the unassigned guest with the highest summed affinity to the
/// current members (ties go to the earlier guest) until the group is full.
/// O(n^2) per bucket; intentionally not an exact partition - party sizes
/// make the gap to optimal immaterial and greedy keeps runs deterministic.
fn cluster_bucket(guests: &[NormalizedGuest], indices: &[usize], max: usize) -> Vec<Vec<usize>> {
    let mut unassigned: Vec<usize> = indices.to_vec();
    let mut groups = Vec::new();

    while !unassigned.is_empty() {
        let mut current = vec![unassigned.remove(0)];

        while current.len() < max && !unassigned.is_empty() {
            let mut best_pos = 0;
            let mut best_score = i64::MIN;
            for (pos, &candidate) in unassigned.iter().enumerate() {
                let score = group_affinity(&current, candidate, guests);
                if score > best_score {
                    best_score = score;
                    best_pos = pos;
                }
            }
            current.push(unassigned.remove(best_pos));
        }

        groups.push(current);
    }

    groups
}

fn make_group(
    members: Vec<usize>,
    excluded: &BTreeSet<ToppingId>,
    guests: &[NormalizedGuest],
) -> GuestGroup {
    let mut restrictions = BTreeSet::new();
    for &m in &members {
        restrictions.extend(guests[m].restrictions.iter().copied());
    }
    GuestGroup {
        members,
        restrictions,
        excluded: excluded.clone(),
    }
}
