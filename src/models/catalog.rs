use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Catalog items are keyed by a lowercase slug id (e.g. "pepperoni").
pub type ToppingId = String;
pub type BeverageId = String;

/// Broad topping category, used to resolve dietary exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToppingKind {
    Meat,
    Vegetable,
    Cheese,
    Fruit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeverageKind {
    Water,
    Soda,
    Juice,
}

/// A topping the host can put on pizzas.
///
/// Immutable reference data supplied by the host; the engine never creates
/// or modifies catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topping {
    pub id: ToppingId,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ToppingKind,

    /// Crumbled sausage with breadcrumb filler, croutons, and the like.
    #[serde(default)]
    pub contains_gluten: bool,
}

/// A beverage the host can order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beverage {
    pub id: BeverageId,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: BeverageKind,
}

/// The host's full catalog of orderable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub toppings: Vec<Topping>,

    #[serde(default)]
    pub beverages: Vec<Beverage>,
}

/// A guest's dietary restriction tag.
///
/// Each tag maps to a fixed exclusion rule over catalog toppings; a guest
/// with several tags takes the union of exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 4] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
    ];

    /// Whether this restriction forbids the given topping.
    pub fn excludes(&self, topping: &Topping) -> bool {
        match self {
            DietaryRestriction::Vegetarian => topping.kind == ToppingKind::Meat,
            DietaryRestriction::Vegan => {
                topping.kind == ToppingKind::Meat || topping.kind == ToppingKind::Cheese
            }
            DietaryRestriction::GlutenFree => topping.contains_gluten,
            DietaryRestriction::DairyFree => topping.kind == ToppingKind::Cheese,
        }
    }

    /// Parse a user-supplied tag (case-insensitive, tolerant of separators).
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase().replace([' ', '_'], "-");
        match key.as_str() {
            "vegetarian" => Some(DietaryRestriction::Vegetarian),
            "vegan" => Some(DietaryRestriction::Vegan),
            "gluten-free" | "glutenfree" | "gf" => Some(DietaryRestriction::GlutenFree),
            "dairy-free" | "dairyfree" | "df" => Some(DietaryRestriction::DairyFree),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
        }
    }
}

/// Resolve a restriction set into the topping ids it forbids, against the
/// host's available catalog.
pub fn exclusion_set(
    restrictions: &BTreeSet<DietaryRestriction>,
    toppings: &[Topping],
) -> BTreeSet<ToppingId> {
    toppings
        .iter()
        .filter(|t| restrictions.iter().any(|r| r.excludes(t)))
        .map(|t| t.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topping(id: &str, kind: ToppingKind) -> Topping {
        Topping {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            contains_gluten: false,
        }
    }

    #[test]
    fn test_vegan_excludes_meat_and_cheese() {
        let pepperoni = topping("pepperoni", ToppingKind::Meat);
        let mozzarella = topping("mozzarella", ToppingKind::Cheese);
        let mushrooms = topping("mushrooms", ToppingKind::Vegetable);

        assert!(DietaryRestriction::Vegan.excludes(&pepperoni));
        assert!(DietaryRestriction::Vegan.excludes(&mozzarella));
        assert!(!DietaryRestriction::Vegan.excludes(&mushrooms));
    }

    #[test]
    fn test_gluten_free_uses_flag() {
        let mut sausage = topping("sausage", ToppingKind::Meat);
        sausage.contains_gluten = true;

        assert!(DietaryRestriction::GlutenFree.excludes(&sausage));
        assert!(!DietaryRestriction::GlutenFree.excludes(&topping(
            "mushrooms",
            ToppingKind::Vegetable
        )));
    }

    #[test]
    fn test_parse_tolerates_separators() {
        assert_eq!(
            DietaryRestriction::parse("Gluten Free"),
            Some(DietaryRestriction::GlutenFree)
        );
        assert_eq!(
            DietaryRestriction::parse("dairy_free"),
            Some(DietaryRestriction::DairyFree)
        );
        assert_eq!(DietaryRestriction::parse("VEGAN"), Some(DietaryRestriction::Vegan));
        assert_eq!(DietaryRestriction::parse("keto"), None);
    }

    #[test]
    fn test_exclusion_set_union() {
        let catalog = vec![
            topping("pepperoni", ToppingKind::Meat),
            topping("mozzarella", ToppingKind::Cheese),
            topping("mushrooms", ToppingKind::Vegetable),
        ];

        let restrictions: BTreeSet<_> =
            [DietaryRestriction::Vegetarian, DietaryRestriction::DairyFree]
                .into_iter()
                .collect();

        let excluded = exclusion_set(&restrictions, &catalog);
        assert!(excluded.contains("pepperoni"));
        assert!(excluded.contains("mozzarella"));
        assert!(!excluded.contains("mushrooms"));
    }
}
