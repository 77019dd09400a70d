use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use campus_budget::cli::{
    handle_categories_command, handle_summary_command, handle_tips_command, EvalArgs,
};
use campus_budget::config::{paths::BudgetPaths, settings::Settings};
use campus_budget::models::Mode;
use campus_budget::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "campus-budget",
    version,
    about = "Terminal budgeting planner for college students",
    long_about = "CampusBudget is a terminal budgeting planner for college students. \
                  Plan monthly or semester budgets, track expenses by category, \
                  visualize where the money goes, and get AI budgeting tips."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive budgeting form
    #[command(alias = "ui")]
    Tui,

    /// Evaluate a budget once and print the summary
    Summary {
        #[command(flatten)]
        eval: EvalArgs,

        /// Write the evaluation as a one-snapshot CSV
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },

    /// List the category sets
    Categories {
        /// Show only one mode's categories
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,
    },

    /// Request AI budgeting tips for a budget
    Tips {
        #[command(flatten)]
        eval: EvalArgs,

        /// API key for the advice service
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(&settings)?;
        }
        Some(Commands::Summary { eval, save }) => {
            handle_summary_command(&eval, save)?;
        }
        Some(Commands::Categories { mode }) => {
            handle_categories_command(mode)?;
        }
        Some(Commands::Tips { eval, api_key }) => {
            handle_tips_command(&settings, &eval, api_key)?;
        }
        Some(Commands::Config) => {
            println!("CampusBudget Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no (defaults in use)" }
            );
            println!();
            println!("Settings:");
            println!("  Default mode:    {}", settings.default_mode);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Advice model:    {}", settings.advice.model);
            println!(
                "  Advice key:      {}",
                if settings.advice.api_key.is_some() || std::env::var("GEMINI_API_KEY").is_ok() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }
    }

    Ok(())
}
