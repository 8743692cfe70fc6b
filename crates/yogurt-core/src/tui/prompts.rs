//! Charm-style CLI prompts using cliclack

use crate::error::Rejection;
use crate::rules::Notice;
use anyhow::Result;
use std::io::IsTerminal;

/// True when both stdin and stderr are attached to a terminal
pub fn is_interactive() -> bool {
    console::user_attended_stderr() && std::io::stdin().is_terminal()
}

/// Ask where a new factory should be created
pub fn ask_factory_location(default: &str) -> Result<String> {
    let input: String = cliclack::input("Where would you like to create this factory?")
        .placeholder(default)
        .default_input(default)
        .interact()?;

    if input.trim().is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Show non-fatal notices from the rule engine
pub fn log_notices(notices: &[Notice]) -> Result<()> {
    for notice in notices {
        cliclack::log::warning(notice.message())?;
    }
    Ok(())
}

/// Show why a request was refused
pub fn log_rejection(rejection: &Rejection) -> Result<()> {
    cliclack::log::error(format!("{} ({})", rejection.message, rejection.reason))?;
    cliclack::outro("Operation aborted")?;
    Ok(())
}
