use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::catalog::{BeverageId, DietaryRestriction, ToppingId};

/// One guest's RSVP: who they are and what they will (not) eat.
///
/// Created from a host-supplied catalog and one RSVP submission; read-only
/// to the recommendation engine. Liked and disliked sets may overlap in raw
/// submissions; normalization resolves the overlap in favor of the dislike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestPreference {
    #[serde(default)]
    pub id: u32,

    pub name: String,

    #[serde(default)]
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,

    #[serde(default)]
    pub liked_toppings: BTreeSet<ToppingId>,

    #[serde(default)]
    pub disliked_toppings: BTreeSet<ToppingId>,

    #[serde(default)]
    pub liked_beverages: BTreeSet<BeverageId>,

    #[serde(default)]
    pub disliked_beverages: BTreeSet<BeverageId>,
}

impl GuestPreference {
    /// A bare RSVP with just a name, everything else empty.
    pub fn named(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            dietary_restrictions: BTreeSet::new(),
            liked_toppings: BTreeSet::new(),
            disliked_toppings: BTreeSet::new(),
            liked_beverages: BTreeSet::new(),
            disliked_beverages: BTreeSet::new(),
        }
    }

    /// Structural validity: a guest record must carry a non-blank name.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_name() {
        assert!(GuestPreference::named(1, "Alice").has_name());
        assert!(!GuestPreference::named(2, "   ").has_name());
        assert!(!GuestPreference::named(3, "").has_name());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let guest: GuestPreference = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        assert_eq!(guest.name, "Bob");
        assert!(guest.liked_toppings.is_empty());
        assert!(guest.dietary_restrictions.is_empty());
    }
}
