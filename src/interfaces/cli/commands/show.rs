//! Show resolved configuration command

use colored::Colorize;

use crate::config::get_config;
use crate::interfaces::cli::CliError;

/// Print the resolved configuration (defaults + site.toml + ENV)
pub fn show_config(json: bool) -> Result<(), CliError> {
    let config = get_config();

    if json {
        let json_str = serde_json::to_string_pretty(&*config)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize to JSON: {}", e)))?;
        println!("{}", json_str);
        return Ok(());
    }

    println!();
    println!("{}", "[site]".bold());
    println!("  {}: {}", "site".bold(), config.site.site.green());
    println!("  {}: {}", "author".bold(), config.site.author);
    println!("  {}: {}", "title".bold(), config.site.title);
    println!("  {}: {}", "description".bold(), config.site.description);
    println!("  {}: {}", "lang".bold(), config.site.lang.cyan());
    println!("  {}: {}", "og_locale".bold(), config.site.og_locale.cyan());
    println!(
        "  {}: {}",
        "share_message".bold(),
        config.site.share_message
    );
    println!(
        "  {}: {}",
        "pagination_size".bold(),
        config.site.pagination_size.to_string().yellow()
    );

    println!();
    println!("{}", "[links]".bold());
    for link in &config.links {
        println!(
            "  {} {} ({})",
            link.name.green(),
            link.url,
            link.icon.to_string().cyan()
        );
    }

    println!();
    println!("{}", "[logging]".bold());
    println!("  {}: {}", "level".bold(), config.logging.level);
    println!("  {}: {}", "format".bold(), config.logging.format);
    println!(
        "  {}: {}",
        "file".bold(),
        config.logging.file.as_deref().unwrap_or("(console)")
    );
    println!();

    Ok(())
}
