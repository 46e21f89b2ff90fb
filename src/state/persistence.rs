use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{Catalog, DietaryRestriction, GuestPreference, Recommendations};
use crate::state::CatalogIndex;

/// Load the host's catalog from a JSON file.
///
/// Deduplicates by lowercase id, keeping the first occurrence.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let mut catalog: Catalog = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    catalog.toppings.retain(|t| seen.insert(t.id.to_lowercase()));
    let mut seen = HashSet::new();
    catalog
        .beverages
        .retain(|b| seen.insert(b.id.to_lowercase()));

    Ok(catalog)
}

/// One row of a host-exported RSVP spreadsheet. Multi-valued cells use
/// `;` separators.
#[derive(Debug, Deserialize)]
struct GuestRow {
    name: String,

    #[serde(default)]
    restrictions: String,

    #[serde(default)]
    likes: String,

    #[serde(default)]
    dislikes: String,

    #[serde(default)]
    beverage_likes: String,

    #[serde(default)]
    beverage_dislikes: String,
}

/// Load guest RSVPs from a CSV export or a JSON array.
///
/// CSV tokens resolve against the catalog case-insensitively with a fuzzy
/// fallback; tokens matching nothing are dropped silently, the same rule
/// the engine applies to unavailable preferences. Ids are assigned by
/// position.
pub fn load_guests<P: AsRef<Path>>(path: P, index: &CatalogIndex) -> Result<Vec<GuestPreference>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let mut guests = if is_csv {
        load_guests_csv(path, index)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<GuestPreference>>(&content)?
    };

    for (i, guest) in guests.iter_mut().enumerate() {
        guest.id = i as u32 + 1;
    }
    Ok(guests)
}

fn load_guests_csv(path: &Path, index: &CatalogIndex) -> Result<Vec<GuestPreference>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut guests = Vec::new();

    for row in reader.deserialize::<GuestRow>() {
        let row = row?;
        let mut guest = GuestPreference::named(0, row.name.trim());
        guest.dietary_restrictions = parse_restrictions(&row.restrictions);
        guest.liked_toppings = resolve_toppings(&row.likes, index);
        guest.disliked_toppings = resolve_toppings(&row.dislikes, index);
        guest.liked_beverages = resolve_beverages(&row.beverage_likes, index);
        guest.disliked_beverages = resolve_beverages(&row.beverage_dislikes, index);
        guests.push(guest);
    }

    Ok(guests)
}

fn cells(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(';').map(str::trim).filter(|t| !t.is_empty())
}

fn parse_restrictions(cell: &str) -> BTreeSet<DietaryRestriction> {
    cells(cell).filter_map(DietaryRestriction::parse).collect()
}

fn resolve_toppings(cell: &str, index: &CatalogIndex) -> BTreeSet<String> {
    cells(cell)
        .filter_map(|token| index.resolve_topping(token))
        .map(|t| t.id.clone())
        .collect()
}

fn resolve_beverages(cell: &str, index: &CatalogIndex) -> BTreeSet<String> {
    cells(cell)
        .filter_map(|token| index.resolve_beverage(token))
        .map(|b| b.id.clone())
        .collect()
}

/// Save a generated order to a JSON file.
pub fn save_order<P: AsRef<Path>>(path: P, order: &Recommendations) -> Result<()> {
    let json = serde_json::to_string_pretty(order)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_catalog_json() -> &'static str {
        r#"{
            "toppings": [
                {"id": "pepperoni", "name": "Pepperoni", "type": "meat"},
                {"id": "mushrooms", "name": "Mushrooms", "type": "vegetable"},
                {"id": "pepperoni", "name": "Duplicate", "type": "meat"}
            ],
            "beverages": [
                {"id": "water", "name": "Water", "type": "water"}
            ]
        }"#
    }

    fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog_dedupes_by_id() {
        let file = write_temp(sample_catalog_json(), ".json");
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.toppings.len(), 2);
        assert_eq!(catalog.toppings[0].name, "Pepperoni");
        assert_eq!(catalog.beverages.len(), 1);
    }

    #[test]
    fn test_load_guests_csv_resolves_tokens() {
        let catalog_file = write_temp(sample_catalog_json(), ".json");
        let catalog = load_catalog(catalog_file.path()).unwrap();
        let index = CatalogIndex::new(catalog);

        let csv = "name,restrictions,likes,dislikes,beverage_likes,beverage_dislikes\n\
                   Alice,vegetarian,Mushrooms;peperoni,,water,\n\
                   Bob,,unknown topping,Pepperoni,,\n";
        let file = write_temp(csv, ".csv");

        let guests = load_guests(file.path(), &index).unwrap();
        assert_eq!(guests.len(), 2);

        let alice = &guests[0];
        assert_eq!(alice.id, 1);
        assert!(alice
            .dietary_restrictions
            .contains(&DietaryRestriction::Vegetarian));
        assert!(alice.liked_toppings.contains("mushrooms"));
        assert!(alice.liked_toppings.contains("pepperoni"));
        assert!(alice.liked_beverages.contains("water"));

        let bob = &guests[1];
        assert!(bob.liked_toppings.is_empty());
        assert!(bob.disliked_toppings.contains("pepperoni"));
    }

    #[test]
    fn test_load_guests_json() {
        let catalog_file = write_temp(sample_catalog_json(), ".json");
        let index = CatalogIndex::new(load_catalog(catalog_file.path()).unwrap());

        let json = r#"[{"name": "Cara", "liked_toppings": ["mushrooms"]}]"#;
        let file = write_temp(json, ".json");

        let guests = load_guests(file.path(), &index).unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Cara");
        assert_eq!(guests[0].id, 1);
    }

    #[test]
    fn test_save_order_roundtrip() {
        let order = Recommendations::default();
        let file = NamedTempFile::new().unwrap();
        save_order(file.path(), &order).unwrap();

        let reloaded: Recommendations =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert!(reloaded.is_empty());
    }
}
