use clap::{Parser, Subcommand};

/// CatRation — A cat food portioning CLI that solves meal quantities for calories and macro targets.
#[derive(Parser, Debug)]
#[command(name = "cat_ration")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the item catalog CSV file.
    #[arg(short, long, default_value = "items.csv")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve portion sizes for one meal.
    Plan {
        /// Target calories for the meal; prompts for a pet profile when
        /// omitted.
        #[arg(long)]
        calories: Option<f64>,

        /// Require at least one treat in the result.
        #[arg(long)]
        treat: bool,

        /// Print the solution as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List the item catalog with normalized nutrition values.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            calories: None,
            treat: false,
            json: false,
        }
    }
}
