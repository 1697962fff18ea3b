//! indent-bars - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands, ConfigCommands};

/// Log to stderr so output on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Colors are off when `NO_COLOR` is set.
fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Stipple {
            cell_width,
            cell_height,
            rotation,
            xbm,
            highlight,
        } => commands::stipple::handle(
            config,
            cell_width,
            cell_height,
            rotation,
            xbm.as_deref(),
            highlight,
        ),
        Commands::Palette { depths } => commands::palette::handle(config, depths, color_enabled()),
        Commands::Preview {
            file,
            cursor_line,
            no_color,
        } => commands::preview::handle(config, &file, cursor_line, !no_color && color_enabled()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config),
            ConfigCommands::Path => commands::config::handle_path(config),
            ConfigCommands::Init { force } => commands::config::handle_init(config, force),
        },
    }
}
