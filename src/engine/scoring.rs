use crate::engine::normalize::NormalizedGuest;

/// Pairwise affinity between two guests' topping preferences.
///
/// `2 * shared_likes - cross_dislikes`, where a cross-dislike is one guest
/// liking a topping the other dislikes. Symmetric and pure; negative means
/// net conflict. Used only as a ranking key, with ties broken by guest
/// input order at the call sites.
pub fn compatibility(a: &NormalizedGuest, b: &NormalizedGuest) -> i64 {
    let shared = a.liked.intersection(&b.liked).count() as i64;
    let a_likes_b_hates = a.liked.intersection(&b.disliked).count() as i64;
    let b_likes_a_hates = b.liked.intersection(&a.disliked).count() as i64;

    2 * shared - a_likes_b_hates - b_likes_a_hates
}

/// Summed affinity between a candidate and every current group member.
pub fn group_affinity(
    members: &[usize],
    candidate: usize,
    guests: &[NormalizedGuest],
) -> i64 {
    members
        .iter()
        .map(|&m| compatibility(&guests[m], &guests[candidate]))
        .sum()
}
