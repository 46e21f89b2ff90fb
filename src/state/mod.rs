mod catalog_index;
mod persistence;

pub use catalog_index::CatalogIndex;
pub use persistence::{load_catalog, load_guests, save_order};
