use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::PizzaStyle;

/// Prompt for the pizza style of the whole order.
pub fn prompt_style() -> Result<PizzaStyle> {
    let options: Vec<&str> = PizzaStyle::ALL.iter().map(PizzaStyle::label).collect();

    let selection = Select::new()
        .with_prompt("Which pizza style are you ordering?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(PizzaStyle::ALL[selection])
}

/// Prompt for the total expected head count, defaulting to the number of
/// guests who responded.
pub fn prompt_expected_guests(responded: usize) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many guests do you expect in total?")
        .default(responded.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
