//! List social links command

use colored::Colorize;

use crate::config::get_config;
use crate::interfaces::cli::CliError;

/// List the social-link registry in display order
pub fn list_links(json: bool) -> Result<(), CliError> {
    let config = get_config();

    if json {
        let json_str = serde_json::to_string_pretty(&config.links)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize to JSON: {}", e)))?;
        println!("{}", json_str);
        return Ok(());
    }

    if config.links.is_empty() {
        println!("{}", "No social links configured.".yellow());
        return Ok(());
    }

    println!();
    for (index, link) in config.links.iter().enumerate() {
        println!(
            "  {} {:<12} {} {}",
            format!("{}.", index + 1).dimmed(),
            link.name.green(),
            link.url,
            format!("[{}]", link.icon).cyan()
        );
    }
    println!();
    println!("{} {}", config.links.len().to_string().bold(), "links");

    Ok(())
}
