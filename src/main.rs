use anyhow::Context;
use clap::Parser;
use sakila_tui::cli::Cli;
use sakila_tui::logging::init_tracing;
use sakila_tui::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = init_tracing();

    let config = cli
        .resolve_config()
        .context("failed to load configuration")?;
    tracing::info!(
        base_url = %config.api.base_url,
        route = %config.ui.start_route,
        log_file = ?log_file,
        "starting sakila-tui"
    );

    runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}
