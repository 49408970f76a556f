//! Validate configuration command

use colored::Colorize;

use crate::config::{get_config, validate_config};
use crate::interfaces::cli::CliError;

/// Validate the resolved configuration, reporting every violation
pub fn check_config() -> Result<(), CliError> {
    let config = get_config();

    match validate_config(&config) {
        Ok(()) => {
            println!(
                "{} {} {}",
                "Configuration OK".green().bold(),
                format!("({} social links,", config.links.len()).dimmed(),
                format!("{} posts per page)", config.site.pagination_size).dimmed()
            );
            Ok(())
        }
        Err(violations) => {
            println!("{}", "Configuration is invalid:".red().bold());
            for violation in &violations {
                println!("  {} {}", "-".red(), violation.white());
            }
            Err(CliError::CommandError(format!(
                "{} validation error(s)",
                violations.len()
            )))
        }
    }
}
