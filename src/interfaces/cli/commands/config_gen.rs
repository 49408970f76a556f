//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::BlogConfig;
use crate::interfaces::cli::CliError;

/// Write an example configuration file for editing
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "site.example.toml".to_string());

    // 已有文件只在 --force 或用户确认后覆盖
    if Path::new(&path).exists() && !force && !confirm_overwrite(&path) {
        println!("{}", "Aborted.".red());
        return Ok(());
    }

    BlogConfig::default()
        .save_to_file(&path)
        .map_err(|e| CliError::CommandError(format!("Unable to write configuration file: {}", e)))?;

    println!(
        "{} {}",
        "Wrote example configuration to".green(),
        path.blue()
    );
    println!(
        "{}",
        "Edit the file, then run `siteconf check` to validate it".yellow()
    );
    Ok(())
}

fn confirm_overwrite(path: &str) -> bool {
    print!(
        "{} {} {}",
        "File".yellow(),
        path.blue(),
        "already exists. Overwrite? [y/N] ".yellow()
    );
    io::stdout().flush().ok();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
