use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::{Beverage, Catalog, Topping};

/// Free-text tokens from RSVP spreadsheets rarely match catalog ids
/// exactly, so resolution falls back to fuzzy matching above this score.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Case-insensitive lookup over the host's immutable catalog.
///
/// Items resolve by id, by display name, or - failing both - by the best
/// fuzzy match over either. The catalogs themselves are never modified.
pub struct CatalogIndex {
    catalog: Catalog,
    topping_keys: HashMap<String, usize>,
    beverage_keys: HashMap<String, usize>,
}

impl CatalogIndex {
    pub fn new(catalog: Catalog) -> Self {
        let mut topping_keys = HashMap::new();
        for (i, topping) in catalog.toppings.iter().enumerate() {
            topping_keys.insert(topping.id.to_lowercase(), i);
            topping_keys.insert(topping.name.to_lowercase(), i);
        }

        let mut beverage_keys = HashMap::new();
        for (i, beverage) in catalog.beverages.iter().enumerate() {
            beverage_keys.insert(beverage.id.to_lowercase(), i);
            beverage_keys.insert(beverage.name.to_lowercase(), i);
        }

        Self {
            catalog,
            topping_keys,
            beverage_keys,
        }
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.catalog.toppings
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.catalog.beverages
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a free-text token to a catalog topping, if any.
    pub fn resolve_topping(&self, token: &str) -> Option<&Topping> {
        let key = token.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        if let Some(&i) = self.topping_keys.get(&key) {
            return Some(&self.catalog.toppings[i]);
        }
        best_fuzzy(&key, &self.catalog.toppings, |t| (&t.id, &t.name))
    }

    /// Resolve a free-text token to a catalog beverage, if any.
    pub fn resolve_beverage(&self, token: &str) -> Option<&Beverage> {
        let key = token.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        if let Some(&i) = self.beverage_keys.get(&key) {
            return Some(&self.catalog.beverages[i]);
        }
        best_fuzzy(&key, &self.catalog.beverages, |b| (&b.id, &b.name))
    }
}

/// Highest-scoring fuzzy match above the threshold; first catalog entry
/// wins ties so resolution stays deterministic.
fn best_fuzzy<'a, T>(
    key: &str,
    items: &'a [T],
    fields: impl Fn(&T) -> (&String, &String),
) -> Option<&'a T> {
    let mut best: Option<(&T, f64)> = None;
    for item in items {
        let (id, name) = fields(item);
        let score = jaro_winkler(&id.to_lowercase(), key)
            .max(jaro_winkler(&name.to_lowercase(), key));
        if score > FUZZY_MATCH_THRESHOLD && best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BeverageKind, ToppingKind};

    fn sample_catalog() -> Catalog {
        Catalog {
            toppings: vec![
                Topping {
                    id: "pepperoni".to_string(),
                    name: "Pepperoni".to_string(),
                    kind: ToppingKind::Meat,
                    contains_gluten: false,
                },
                Topping {
                    id: "mushrooms".to_string(),
                    name: "Mushrooms".to_string(),
                    kind: ToppingKind::Vegetable,
                    contains_gluten: false,
                },
            ],
            beverages: vec![Beverage {
                id: "water".to_string(),
                name: "Sparkling Water".to_string(),
                kind: BeverageKind::Water,
            }],
        }
    }

    #[test]
    fn test_exact_lookup_case_insensitive() {
        let index = CatalogIndex::new(sample_catalog());
        assert!(index.resolve_topping("PEPPERONI").is_some());
        assert!(index.resolve_topping("Mushrooms").is_some());
        assert!(index.resolve_beverage("water").is_some());
    }

    #[test]
    fn test_fuzzy_lookup_catches_typos() {
        let index = CatalogIndex::new(sample_catalog());
        let resolved = index.resolve_topping("peperoni").unwrap();
        assert_eq!(resolved.id, "pepperoni");
    }

    #[test]
    fn test_unrelated_token_resolves_to_nothing() {
        let index = CatalogIndex::new(sample_catalog());
        assert!(index.resolve_topping("anchovies").is_none());
        assert!(index.resolve_topping("").is_none());
    }
}
