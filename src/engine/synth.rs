use std::collections::BTreeSet;

use crate::engine::consolidate::PizzaDraft;
use crate::engine::constants::{
    BEVERAGE_UNITS_PER_GUEST, BUFFER_PIZZA_DIVISOR, NON_RESPONDENT_WEIGHTS, WATER_WEIGHT,
};
use crate::engine::sizing::personal_size;
use crate::models::{
    exclusion_set, Beverage, BeverageKind, BeverageRecommendation, DietaryRestriction, PizzaStyle,
    Topping, ToppingId,
};

/// Default pizza categories non-respondents are spread across, in weight
/// order: cheese, pepperoni, vegetarian-mushroom, vegetarian-veggie.
const DEFAULT_CATEGORIES: [(&[&str], &[DietaryRestriction]); 4] = [
    (&["cheese"], &[]),
    (&["cheese", "pepperoni"], &[]),
    (&["cheese", "mushrooms"], &[DietaryRestriction::Vegetarian]),
    (
        &["cheese", "mushrooms", "onions"],
        &[DietaryRestriction::Vegetarian],
    ),
];

const VEGAN_BUFFER_TOPPINGS: [&str; 2] = ["mushrooms", "onions"];
const GLUTEN_FREE_BUFFER_TOPPINGS: [&str; 1] = ["cheese"];

/// Spread `n` non-respondents across the default categories by largest
/// remainder, so the shares always sum to exactly `n`.
pub fn allocate_shares(n: u32) -> [u32; 4] {
    let mut shares = [0u32; 4];
    let mut fractions: Vec<(usize, f64)> = Vec::new();
    let mut assigned = 0;

    for (i, weight) in NON_RESPONDENT_WEIGHTS.iter().enumerate() {
        let exact = n as f64 * weight;
        shares[i] = exact.floor() as u32;
        assigned += shares[i];
        fractions.push((i, exact - exact.floor()));
    }

    fractions.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut remainder = n - assigned;
    for (i, _) in fractions {
        if remainder == 0 {
            break;
        }
        shares[i] += 1;
        remainder -= 1;
    }

    shares
}

/// Synthetic default pizzas covering guests who never responded.
///
/// Each category of `k` allocated guests becomes one line of `k` pizzas at
/// one-guest scale, plus a vegan and a gluten-free buffer pizza per ten
/// non-respondents. Buffer pizzas cover nobody in particular, so they carry
/// a zero guest count.
pub fn synthesize_pizzas(n: u32, toppings: &[Topping], style: PizzaStyle) -> Vec<PizzaDraft> {
    if n == 0 || toppings.is_empty() {
        return Vec::new();
    }

    let shares = allocate_shares(n);
    let size = personal_size(style);
    let mut drafts = Vec::new();

    for ((default_toppings, restriction_tags), share) in DEFAULT_CATEGORIES.iter().zip(shares) {
        if share == 0 {
            continue;
        }
        let restrictions: BTreeSet<DietaryRestriction> =
            restriction_tags.iter().copied().collect();
        drafts.push(PizzaDraft {
            toppings: resolve_defaults(default_toppings, &restrictions, toppings),
            halves: None,
            size,
            style,
            restrictions,
            guest_count: share,
            guests: Vec::new(),
            quantity: share,
            for_non_respondents: true,
        });
    }

    // Rounded to nearest, never negative.
    let buffer = (n + BUFFER_PIZZA_DIVISOR / 2) / BUFFER_PIZZA_DIVISOR;
    if buffer > 0 {
        for (default_toppings, tag) in [
            (&VEGAN_BUFFER_TOPPINGS[..], DietaryRestriction::Vegan),
            (
                &GLUTEN_FREE_BUFFER_TOPPINGS[..],
                DietaryRestriction::GlutenFree,
            ),
        ] {
            let restrictions: BTreeSet<DietaryRestriction> = [tag].into_iter().collect();
            drafts.push(PizzaDraft {
                toppings: resolve_defaults(default_toppings, &restrictions, toppings),
                halves: None,
                size,
                style,
                restrictions,
                guest_count: 0,
                guests: Vec::new(),
                quantity: buffer,
                for_non_respondents: true,
            });
        }
    }

    drafts
}

/// Keep only default toppings the host actually offers and the line's
/// dietary profile allows.
fn resolve_defaults(
    wanted: &[&str],
    restrictions: &BTreeSet<DietaryRestriction>,
    toppings: &[Topping],
) -> Vec<ToppingId> {
    let excluded = exclusion_set(restrictions, toppings);
    wanted
        .iter()
        .filter_map(|id| toppings.iter().find(|t| t.id == *id))
        .filter(|t| !excluded.contains(&t.id))
        .map(|t| t.id.clone())
        .collect()
}

/// Default beverages for non-respondents: two units per missing guest,
/// split proportionally with water weighted above everything else, each
/// category rounded up.
pub fn synthesize_beverages(n: u32, beverages: &[Beverage]) -> Vec<BeverageRecommendation> {
    if n == 0 || beverages.is_empty() {
        return Vec::new();
    }

    let weight = |b: &Beverage| {
        if b.kind == BeverageKind::Water {
            WATER_WEIGHT
        } else {
            1.0
        }
    };
    let total_weight: f64 = beverages.iter().map(weight).sum();
    let total_units = (n * BEVERAGE_UNITS_PER_GUEST) as f64;

    beverages
        .iter()
        .map(|b| BeverageRecommendation {
            beverage: b.id.clone(),
            quantity: (total_units * weight(b) / total_weight).ceil() as u32,
            guest_count: n,
            for_non_respondents: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToppingKind;

    fn topping(id: &str, kind: ToppingKind) -> Topping {
        Topping {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            contains_gluten: false,
        }
    }

    fn catalog() -> Vec<Topping> {
        vec![
            topping("cheese", ToppingKind::Cheese),
            topping("pepperoni", ToppingKind::Meat),
            topping("mushrooms", ToppingKind::Vegetable),
            topping("onions", ToppingKind::Vegetable),
        ]
    }

    #[test]
    fn test_allocate_shares_exact_split() {
        assert_eq!(allocate_shares(10), [4, 4, 1, 1]);
        assert_eq!(allocate_shares(20), [8, 8, 2, 2]);
    }

    #[test]
    fn test_allocate_shares_conserves_total() {
        for n in 0..50 {
            assert_eq!(allocate_shares(n).iter().sum::<u32>(), n);
        }
    }

    #[test]
    fn test_synthesize_covers_all_non_respondents() {
        let drafts = synthesize_pizzas(10, &catalog(), PizzaStyle::NewYork);
        let covered: u32 = drafts.iter().map(|d| d.guest_count).sum();
        assert_eq!(covered, 10);
        assert!(drafts.iter().all(|d| d.for_non_respondents));
    }

    #[test]
    fn test_buffer_pizzas_per_ten() {
        let drafts = synthesize_pizzas(10, &catalog(), PizzaStyle::NewYork);
        let vegan: Vec<_> = drafts
            .iter()
            .filter(|d| d.restrictions.contains(&DietaryRestriction::Vegan))
            .collect();
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].quantity, 1);
        assert_eq!(vegan[0].guest_count, 0);
        // A vegan buffer pizza never carries cheese.
        assert!(!vegan[0].toppings.contains(&"cheese".to_string()));

        // Too few missing guests for a buffer.
        let small = synthesize_pizzas(3, &catalog(), PizzaStyle::NewYork);
        assert!(small
            .iter()
            .all(|d| !d.restrictions.contains(&DietaryRestriction::Vegan)));
    }

    #[test]
    fn test_zero_non_respondents_is_quiet() {
        assert!(synthesize_pizzas(0, &catalog(), PizzaStyle::NewYork).is_empty());
        assert!(synthesize_beverages(0, &[]).is_empty());
    }

    #[test]
    fn test_beverage_split_favors_water() {
        let beverages = vec![
            Beverage {
                id: "water".to_string(),
                name: "Water".to_string(),
                kind: BeverageKind::Water,
            },
            Beverage {
                id: "cola".to_string(),
                name: "Cola".to_string(),
                kind: BeverageKind::Soda,
            },
        ];

        let recs = synthesize_beverages(10, &beverages);
        assert_eq!(recs.len(), 2);
        // 20 units over weights 1.5 + 1.0: water 12, cola 8.
        assert_eq!(recs[0].quantity, 12);
        assert_eq!(recs[1].quantity, 8);
        assert!(recs.iter().all(|r| r.for_non_respondents));
    }
}
