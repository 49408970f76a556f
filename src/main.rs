#[cfg(feature = "cli")]
fn main() {
    use clap::Parser;
    use siteconf::cli::Cli;
    use siteconf::config;
    use siteconf::system::init_logging;

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 配置必须先于日志系统初始化
    config::init_config(cli.config.as_deref());
    let loaded = config::get_config();
    let _guard = init_logging(&loaded.logging);

    tracing::debug!("configuration resolved, dispatching command");

    if let Err(e) = siteconf::interfaces::cli::run_cli_command(cli.command) {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("siteconf was built without the `cli` feature");
    std::process::exit(1);
}
