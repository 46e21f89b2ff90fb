mod catalog;
mod guest;
mod recommendation;

pub use catalog::{
    exclusion_set, Beverage, BeverageId, BeverageKind, Catalog, DietaryRestriction, Topping,
    ToppingId, ToppingKind,
};
pub use guest::GuestPreference;
pub use recommendation::{
    BeverageRecommendation, PizzaHalf, PizzaRecommendation, PizzaSize, PizzaStyle, Recommendations,
};
