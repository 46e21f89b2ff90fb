use crate::engine::consolidate::{consolidate, PizzaDraft};
use crate::engine::constants::BEVERAGE_UNITS_PER_GUEST;
use crate::engine::grouping::{partition_guests, GuestGroup};
use crate::engine::normalize::{normalize_guests, NormalizedGuest};
use crate::engine::sizing::size_for_group;
use crate::engine::splitting::{should_split, split_group};
use crate::engine::synth::{synthesize_beverages, synthesize_pizzas};
use crate::engine::toppings::{eligible_ids, select_toppings};
use crate::error::Result;
use crate::models::{
    Beverage, BeverageRecommendation, GuestPreference, PizzaHalf, PizzaStyle, Recommendations,
    Topping,
};

/// Turn guest RSVPs into a concrete pizza-and-beverage order.
///
/// Pure and synchronous: the same inputs in the same order always produce
/// byte-identical output. An empty catalog is a legitimate host setup, not
/// an error; the affected recommendation list just comes back empty.
pub fn generate_recommendations(
    guests: &[GuestPreference],
    available_toppings: &[Topping],
    available_beverages: &[Beverage],
    style: PizzaStyle,
    expected_guest_count: Option<u32>,
) -> Result<Recommendations> {
    let normalized = normalize_guests(guests, available_toppings, available_beverages)?;

    let responded = normalized.len() as u32;
    let non_respondents = expected_guest_count
        .map(|expected| expected.saturating_sub(responded))
        .unwrap_or(0);

    let mut drafts: Vec<PizzaDraft> = Vec::new();
    if !available_toppings.is_empty() {
        for group in partition_guests(&normalized, style) {
            drafts.push(build_draft(&group, &normalized, available_toppings, style));
        }
        drafts.extend(synthesize_pizzas(non_respondents, available_toppings, style));
    }

    let mut beverages = if available_beverages.is_empty() {
        Vec::new()
    } else {
        tally_beverages(&normalized, available_beverages)
    };
    beverages.extend(synthesize_beverages(non_respondents, available_beverages));

    Ok(Recommendations {
        pizzas: consolidate(drafts),
        beverages,
    })
}

/// One group's pizza: either a single topping list, or - when internal
/// conflict crosses the split threshold - a half-and-half with two
/// independently topped halves.
fn build_draft(
    group: &GuestGroup,
    guests: &[NormalizedGuest],
    toppings: &[Topping],
    style: PizzaStyle,
) -> PizzaDraft {
    let guest_count = group.size() as u32;
    let (size, quantity) = size_for_group(style, guest_count);
    let eligible = eligible_ids(toppings, &group.excluded);

    let names = |members: &[usize]| -> Vec<String> {
        members.iter().map(|&m| guests[m].name.clone()).collect()
    };

    let (selected, halves) = if should_split(&group.members, guests, &eligible) {
        let (left, right) = split_group(group, guests);
        let left_half = PizzaHalf {
            toppings: select_toppings(&left, guests, &group.excluded, toppings),
            guests: names(&left),
        };
        let right_half = PizzaHalf {
            toppings: select_toppings(&right, guests, &group.excluded, toppings),
            guests: names(&right),
        };
        (Vec::new(), Some((left_half, right_half)))
    } else {
        (
            select_toppings(&group.members, guests, &group.excluded, toppings),
            None,
        )
    };

    PizzaDraft {
        toppings: selected,
        halves,
        size,
        style,
        restrictions: group.restrictions.clone(),
        guest_count,
        guests: group.member_names(guests),
        quantity,
        for_non_respondents: false,
    }
}

/// One line per catalog beverage with real demand: at least one liker, and
/// likers strictly outnumbering dislikers. Two units per liking guest.
fn tally_beverages(
    guests: &[NormalizedGuest],
    beverages: &[Beverage],
) -> Vec<BeverageRecommendation> {
    let mut recs: Vec<BeverageRecommendation> = beverages
        .iter()
        .filter_map(|bev| {
            let likers = guests
                .iter()
                .filter(|g| g.liked_beverages.contains(&bev.id))
                .count() as u32;
            let dislikers = guests
                .iter()
                .filter(|g| g.disliked_beverages.contains(&bev.id))
                .count() as u32;
            if likers == 0 || likers <= dislikers {
                return None;
            }
            Some(BeverageRecommendation {
                beverage: bev.id.clone(),
                quantity: likers * BEVERAGE_UNITS_PER_GUEST,
                guest_count: likers,
                for_non_respondents: false,
            })
        })
        .collect();

    recs.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| a.beverage.cmp(&b.beverage))
    });
    recs
}
