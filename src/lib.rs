pub mod cli;
pub mod demo;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use engine::generate_recommendations;
pub use error::{PlannerError, Result};
pub use models::{
    Beverage, BeverageRecommendation, Catalog, DietaryRestriction, GuestPreference,
    PizzaRecommendation, PizzaStyle, Recommendations, Topping,
};
