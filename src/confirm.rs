use std::io;

use colored::Colorize;
use inquire::Confirm;

use crate::{
    error::AppResult,
    profile::{ProfileUpdate, UserId},
    report,
};

/// Shows the planned change and asks the operator to approve it
pub fn confirm_update(user_id: UserId, update: &ProfileUpdate) -> AppResult<bool> {
    report::plan(&mut io::stdout(), user_id, update)?;

    let approved: bool = Confirm::new(&format!("{}", "write these values?".blue()))
        .with_default(false)
        .prompt()?;

    if !approved {
        println!("{}", "quitting".yellow());
    }
    Ok(approved)
}
