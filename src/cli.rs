use clap::{Parser, Subcommand};

/// PartyPizzaPlanner — turns guest RSVP preferences into a concrete pizza order.
#[derive(Parser, Debug)]
#[command(name = "party_pizza_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the topping/beverage catalog JSON file.
    #[arg(short, long, default_value = "catalog.json")]
    pub catalog: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a pizza order from guest RSVPs.
    Plan {
        /// Path to the guest RSVP file (.csv export or .json array).
        #[arg(short, long, default_value = "guests.csv")]
        guests: String,

        /// Pizza style (new-york, detroit, neapolitan). Prompted if omitted.
        #[arg(short, long)]
        style: Option<String>,

        /// Total expected guest count, including non-respondents.
        #[arg(short, long)]
        expected: Option<u32>,

        /// Write the generated order to this JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the host's catalog.
    Catalog,

    /// Generate a reproducible demo party and plan it.
    Demo {
        /// Number of demo guests to generate.
        #[arg(long, default_value_t = 12)]
        guests: usize,

        /// Pizza style (new-york, detroit, neapolitan).
        #[arg(long, default_value = "new-york")]
        style: String,

        /// Total expected guest count, including non-respondents.
        #[arg(long)]
        expected: Option<u32>,

        /// RNG seed for guest generation.
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            guests: "guests.csv".to_string(),
            style: None,
            expected: None,
            output: None,
        }
    }
}
