use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::catalog::{BeverageId, DietaryRestriction, ToppingId};

/// Pizza style chosen by the host for the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PizzaStyle {
    NewYork,
    Detroit,
    Neapolitan,
}

impl PizzaStyle {
    pub const ALL: [PizzaStyle; 3] = [
        PizzaStyle::NewYork,
        PizzaStyle::Detroit,
        PizzaStyle::Neapolitan,
    ];

    /// How many guests can share one pizza of this style.
    ///
    /// Neapolitan pizzas are personal-sized, so at most two guests split one.
    pub fn max_guests_per_pizza(&self) -> usize {
        match self {
            PizzaStyle::Neapolitan => 2,
            PizzaStyle::NewYork | PizzaStyle::Detroit => 5,
        }
    }

    /// Parse a user-supplied style name (case-insensitive, tolerant of
    /// separators and common abbreviations).
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "new-york" | "newyork" | "ny" => Some(PizzaStyle::NewYork),
            "detroit" => Some(PizzaStyle::Detroit),
            "neapolitan" | "napoli" => Some(PizzaStyle::Neapolitan),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PizzaStyle::NewYork => "New York",
            PizzaStyle::Detroit => "Detroit",
            PizzaStyle::Neapolitan => "Neapolitan",
        }
    }
}

impl fmt::Display for PizzaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discrete pizza size. Round styles use the diameter ladder; Neapolitan
/// pizzas are always personal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Personal,
    Inches(u32),
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PizzaSize::Personal => f.write_str("personal"),
            PizzaSize::Inches(d) => write!(f, "{}\"", d),
        }
    }
}

/// One independently-topped half of a half-and-half pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaHalf {
    pub toppings: Vec<ToppingId>,
    pub guests: Vec<String>,
}

/// A quantity-bearing pizza line item, the engine's sole pizza output.
///
/// Created by the consolidation stage and never mutated after emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaRecommendation {
    pub id: u32,

    /// Ranked topping list, at most three entries. Empty for plain pizzas
    /// and for half-and-half pizzas (whose toppings live on the halves).
    pub toppings: Vec<ToppingId>,

    pub size: PizzaSize,
    pub style: PizzaStyle,
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,

    /// Guests this line item feeds, across all its pizzas.
    pub guest_count: u32,
    pub guests: Vec<String>,

    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halves: Option<(PizzaHalf, PizzaHalf)>,

    /// Synthetic coverage for expected guests who never responded.
    #[serde(default)]
    pub for_non_respondents: bool,
}

impl PizzaRecommendation {
    pub fn is_half_and_half(&self) -> bool {
        self.halves.is_some()
    }

    pub fn is_plain(&self) -> bool {
        self.toppings.is_empty() && self.halves.is_none()
    }
}

/// A beverage line item, emitted independently of pizzas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeverageRecommendation {
    pub beverage: BeverageId,
    pub quantity: u32,
    pub guest_count: u32,

    #[serde(default)]
    pub for_non_respondents: bool,
}

/// The engine's full output for one recommendation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub pizzas: Vec<PizzaRecommendation>,
    pub beverages: Vec<BeverageRecommendation>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty() && self.beverages.is_empty()
    }

    /// Total number of physical pizzas across all line items.
    pub fn total_pizzas(&self) -> u32 {
        self.pizzas.iter().map(|p| p.quantity).sum()
    }
}
