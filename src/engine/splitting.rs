use std::collections::BTreeSet;

use crate::engine::grouping::GuestGroup;
use crate::engine::normalize::NormalizedGuest;
use crate::engine::scoring::compatibility;
use crate::models::ToppingId;

/// Total topping conflict inside a group.
///
/// For every dietary-eligible topping, the conflict contribution is
/// `min(likers, dislikers)`: each such pair means someone loses whichever
/// way the topping goes.
pub fn conflict_score(
    members: &[usize],
    guests: &[NormalizedGuest],
    eligible: &BTreeSet<ToppingId>,
) -> u32 {
    eligible
        .iter()
        .map(|topping| {
            let likers = members
                .iter()
                .filter(|&&m| guests[m].liked.contains(topping))
                .count() as u32;
            let dislikers = members
                .iter()
                .filter(|&&m| guests[m].disliked.contains(topping))
                .count() as u32;
            likers.min(dislikers)
        })
        .sum()
}

/// Split trigger: conflict of at least half the group size (rounded up).
pub fn should_split(
    members: &[usize],
    guests: &[NormalizedGuest],
    eligible: &BTreeSet<ToppingId>,
) -> bool {
    if members.len() < 2 {
        return false;
    }
    let threshold = members.len().div_ceil(2) as u32;
    conflict_score(members, guests, eligible) >= threshold
}

/// Bisect a conflicted group into two half-pizza guest sets.
///
/// The two least compatible guests seed the halves (the earlier guest goes
/// left); everyone else joins whichever seed they get along with better,
/// ties going to the smaller half, then left.
pub fn split_group(group: &GuestGroup, guests: &[NormalizedGuest]) -> (Vec<usize>, Vec<usize>) {
    let members = &group.members;
    debug_assert!(members.len() >= 2);

    let mut seed_left = members[0];
    let mut seed_right = members[1];
    let mut worst = i64::MAX;
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            let score = compatibility(&guests[a], &guests[b]);
            if score < worst {
                worst = score;
                seed_left = a;
                seed_right = b;
            }
        }
    }

    let mut left = vec![seed_left];
    let mut right = vec![seed_right];

    for &m in members {
        if m == seed_left || m == seed_right {
            continue;
        }
        let to_left = compatibility(&guests[m], &guests[seed_left]);
        let to_right = compatibility(&guests[m], &guests[seed_right]);

        if to_left > to_right {
            left.push(m);
        } else if to_right > to_left {
            right.push(m);
        } else if left.len() <= right.len() {
            left.push(m);
        } else {
            right.push(m);
        }
    }

    (left, right)
}
