use crate::engine::constants::{servings, SIZE_LADDER_INCHES};
use crate::models::{PizzaSize, PizzaStyle};

/// Map a guest count to a discrete size plus an implied pizza count.
///
/// Round styles take the smallest ladder size whose serving capacity covers
/// the group; a group too big even for the largest size gets several of the
/// largest. Neapolitan is always personal-sized; its real pizza count is a
/// per-line ratio settled at consolidation time, so here it is one.
pub fn size_for_group(style: PizzaStyle, guest_count: u32) -> (PizzaSize, u32) {
    match style {
        PizzaStyle::Neapolitan => (PizzaSize::Personal, 1),
        PizzaStyle::NewYork | PizzaStyle::Detroit => {
            for &diameter in &SIZE_LADDER_INCHES {
                if servings(diameter as f64) >= guest_count as f64 {
                    return (PizzaSize::Inches(diameter), 1);
                }
            }
            let largest = SIZE_LADDER_INCHES[SIZE_LADDER_INCHES.len() - 1];
            let capacity = servings(largest as f64);
            let quantity = (guest_count as f64 / capacity).ceil() as u32;
            (PizzaSize::Inches(largest), quantity)
        }
    }
}

/// The size a synthetic default pizza is ordered at: one-guest scale.
pub fn personal_size(style: PizzaStyle) -> PizzaSize {
    match style {
        PizzaStyle::Neapolitan => PizzaSize::Personal,
        PizzaStyle::NewYork | PizzaStyle::Detroit => PizzaSize::Inches(SIZE_LADDER_INCHES[0]),
    }
}
