/// Maximum toppings on one pizza (or one half).
pub const MAX_TOPPINGS_PER_PIZZA: usize = 3;

/// Discrete diameter ladder for New York and Detroit pizzas, inches.
pub const SIZE_LADDER_INCHES: [u32; 6] = [10, 12, 14, 16, 18, 20];

/// Serving capacity is normalized to an 18" pizza feeding four guests.
pub const REFERENCE_DIAMETER_INCHES: f64 = 18.0;
pub const REFERENCE_SERVINGS: f64 = 4.0;

/// Neapolitan pizzas are personal-sized: one pizza per 1.5 guests.
pub const NEAPOLITAN_GUESTS_PER_PIZZA: f64 = 1.5;

/// Drinks ordered per covered guest.
pub const BEVERAGE_UNITS_PER_GUEST: u32 = 2;

/// Water gets this weight in the default beverage split; every other
/// beverage gets 1.0.
pub const WATER_WEIGHT: f64 = 1.5;

/// Non-respondent pizza split: cheese / pepperoni / mushroom / veggie.
pub const NON_RESPONDENT_WEIGHTS: [f64; 4] = [0.4, 0.4, 0.1, 0.1];

/// One extra vegan and one extra gluten-free buffer pizza per this many
/// non-respondents (rounded to nearest).
pub const BUFFER_PIZZA_DIVISOR: u32 = 10;

/// Serving capacity of a round pizza with the given diameter.
pub fn servings(diameter_inches: f64) -> f64 {
    let ratio = diameter_inches / REFERENCE_DIAMETER_INCHES;
    ratio * ratio * REFERENCE_SERVINGS
}
