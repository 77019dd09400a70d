//! The `categories` command: print a mode's category set

use crate::error::BudgetResult;
use crate::models::{categories_for, Mode};

/// Handle the `categories` command
///
/// With no mode given, prints both sets.
pub fn handle_categories_command(mode: Option<Mode>) -> BudgetResult<()> {
    let modes: Vec<Mode> = match mode {
        Some(m) => vec![m],
        None => Mode::all().to_vec(),
    };

    for (i, mode) in modes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} categories:", mode);
        for cat in categories_for(*mode) {
            println!("  {:<24} {}", cat.label, cat.description);
        }
    }

    Ok(())
}
