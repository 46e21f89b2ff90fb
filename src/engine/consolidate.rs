use std::collections::{BTreeMap, BTreeSet};

use crate::engine::constants::NEAPOLITAN_GUESTS_PER_PIZZA;
use crate::models::{
    DietaryRestriction, PizzaHalf, PizzaRecommendation, PizzaSize, PizzaStyle, ToppingId,
};

/// A pizza as produced by the pipeline, before line items are merged.
#[derive(Debug, Clone)]
pub struct PizzaDraft {
    pub toppings: Vec<ToppingId>,
    pub halves: Option<(PizzaHalf, PizzaHalf)>,
    pub size: PizzaSize,
    pub style: PizzaStyle,
    pub restrictions: BTreeSet<DietaryRestriction>,
    pub guest_count: u32,
    pub guests: Vec<String>,
    pub quantity: u32,
    pub for_non_respondents: bool,
}

/// Structural identity of a line item: two drafts merge iff their keys match.
/// Topping order is a ranking, not identity, so keys hold sorted copies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct LineKey {
    toppings: Vec<ToppingId>,
    left: Vec<ToppingId>,
    right: Vec<ToppingId>,
    restrictions: Vec<DietaryRestriction>,
    size: PizzaSize,
}

fn line_key(draft: &PizzaDraft) -> LineKey {
    let sorted = |list: &[ToppingId]| {
        let mut v = list.to_vec();
        v.sort();
        v
    };
    let (left, right) = match &draft.halves {
        Some((l, r)) => (sorted(&l.toppings), sorted(&r.toppings)),
        None => (Vec::new(), Vec::new()),
    };
    LineKey {
        toppings: sorted(&draft.toppings),
        left,
        right,
        restrictions: draft.restrictions.iter().copied().collect(),
        size: draft.size,
    }
}

/// Merge structurally identical pizzas into quantity-bearing line items.
///
/// Synthetic and real pizzas merge alike; a merged line only keeps the
/// non-respondent tag when every contributing pizza carried it. Neapolitan
/// lines re-derive their quantity from the merged guest count (one pizza
/// per 1.5 guests, rounded up). The result is sorted by quantity, then by
/// key, so identical inputs always produce byte-identical output.
pub fn consolidate(drafts: Vec<PizzaDraft>) -> Vec<PizzaRecommendation> {
    let mut merged: BTreeMap<LineKey, PizzaDraft> = BTreeMap::new();

    for draft in drafts {
        let key = line_key(&draft);
        match merged.get_mut(&key) {
            Some(existing) => {
                existing.quantity += draft.quantity;
                existing.guest_count += draft.guest_count;
                existing.guests.extend(draft.guests);
                if let (Some(a), Some(b)) = (existing.halves.as_mut(), draft.halves) {
                    a.0.guests.extend(b.0.guests);
                    a.1.guests.extend(b.1.guests);
                }
                existing.for_non_respondents =
                    existing.for_non_respondents && draft.for_non_respondents;
            }
            None => {
                merged.insert(key, draft);
            }
        }
    }

    let mut lines: Vec<(LineKey, PizzaDraft)> = merged.into_iter().collect();

    for (_, draft) in &mut lines {
        if draft.style == PizzaStyle::Neapolitan && draft.guest_count > 0 {
            let exact = draft.guest_count as f64 / NEAPOLITAN_GUESTS_PER_PIZZA;
            draft.quantity = exact.ceil() as u32;
        }
    }

    lines.sort_by(|a, b| b.1.quantity.cmp(&a.1.quantity).then_with(|| a.0.cmp(&b.0)));

    lines
        .into_iter()
        .enumerate()
        .map(|(i, (_, draft))| PizzaRecommendation {
            id: i as u32 + 1,
            toppings: draft.toppings,
            size: draft.size,
            style: draft.style,
            dietary_restrictions: draft.restrictions,
            guest_count: draft.guest_count,
            guests: draft.guests,
            quantity: draft.quantity,
            halves: draft.halves,
            for_non_respondents: draft.for_non_respondents,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(toppings: &[&str], size: PizzaSize, guests: &[&str]) -> PizzaDraft {
        PizzaDraft {
            toppings: toppings.iter().map(|s| s.to_string()).collect(),
            halves: None,
            size,
            style: PizzaStyle::NewYork,
            restrictions: BTreeSet::new(),
            guest_count: guests.len() as u32,
            guests: guests.iter().map(|s| s.to_string()).collect(),
            quantity: 1,
            for_non_respondents: false,
        }
    }

    #[test]
    fn test_identical_lines_merge() {
        let drafts = vec![
            draft(&["pepperoni"], PizzaSize::Inches(14), &["Alice", "Bob"]),
            draft(&["pepperoni"], PizzaSize::Inches(14), &["Cara", "Dan"]),
        ];

        let lines = consolidate(drafts);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].guest_count, 4);
        assert_eq!(lines[0].guests, vec!["Alice", "Bob", "Cara", "Dan"]);
    }

    #[test]
    fn test_different_sizes_stay_separate() {
        let drafts = vec![
            draft(&["pepperoni"], PizzaSize::Inches(14), &["Alice"]),
            draft(&["pepperoni"], PizzaSize::Inches(18), &["Bob"]),
        ];
        assert_eq!(consolidate(drafts).len(), 2);
    }

    #[test]
    fn test_topping_order_does_not_block_merge() {
        let drafts = vec![
            draft(&["pepperoni", "mushrooms"], PizzaSize::Inches(14), &["Alice"]),
            draft(&["mushrooms", "pepperoni"], PizzaSize::Inches(14), &["Bob"]),
        ];
        assert_eq!(consolidate(drafts).len(), 1);
    }

    #[test]
    fn test_sorted_by_quantity_descending() {
        let drafts = vec![
            draft(&["olives"], PizzaSize::Inches(14), &["Alice"]),
            draft(&["pepperoni"], PizzaSize::Inches(14), &["Bob"]),
            draft(&["pepperoni"], PizzaSize::Inches(14), &["Cara"]),
        ];

        let lines = consolidate(drafts);
        assert_eq!(lines[0].toppings, vec!["pepperoni"]);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].toppings, vec!["olives"]);
    }

    #[test]
    fn test_neapolitan_quantity_from_merged_guest_count() {
        let mut drafts = Vec::new();
        for pair in [["A", "B"], ["C", "D"], ["E", "F"], ["G", "H"]] {
            let mut d = draft(&["mushrooms"], PizzaSize::Personal, &pair);
            d.style = PizzaStyle::Neapolitan;
            drafts.push(d);
        }
        let mut last = draft(&["mushrooms"], PizzaSize::Personal, &["I"]);
        last.style = PizzaStyle::Neapolitan;
        drafts.push(last);

        let lines = consolidate(drafts);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].guest_count, 9);
        // ceil(9 / 1.5)
        assert_eq!(lines[0].quantity, 6);
    }

    #[test]
    fn test_mixed_merge_drops_non_respondent_tag() {
        let real = draft(&["cheese"], PizzaSize::Inches(10), &["Alice"]);
        let mut synthetic = draft(&["cheese"], PizzaSize::Inches(10), &[]);
        synthetic.guest_count = 4;
        synthetic.quantity = 4;
        synthetic.for_non_respondents = true;

        let lines = consolidate(vec![real, synthetic]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
        assert!(!lines[0].for_non_respondents);
    }
}
