//! CLI command implementations

mod check;
mod config_gen;
mod links;
mod show;

pub use check::check_config;
pub use config_gen::config_generate;
pub use links::list_links;
pub use show::show_config;
