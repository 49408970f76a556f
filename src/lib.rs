//! Siteconf - Static configuration for a personal blog site
//!
//! This library owns the data the site generator is configured with:
//! the site-wide configuration record (base URL, author, locale, pagination)
//! and the ordered social-link registry rendered in the site footer.
//! Values are compiled-in defaults, optionally overridden by `site.toml`
//! and `SC__`-prefixed environment variables.
//!
//! # Features
//! - **cli**: Command-line interface (`init` / `show` / `check` / `links`)
//!
//! # Architecture
//! - `config`: Configuration structs, loading and validation
//! - `links`: Social-link registry and embedded icon assets
//! - `interfaces`: User interfaces (CLI)
//! - `system`: Logging and system utilities
//! - `utils`: URL and locale tag checks

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod links;
pub mod system;
pub mod utils;
