mod app_config;
mod commands;

use anyhow::Context;
use app_config::Config;
use commands::{brew, ducks, menu, CommandLine, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?config, "config loaded");

    let output = match commands.command {
        Commands::Brew {
            roast,
            size,
            condiments,
            json,
        } => {
            brew::brew(roast, size, condiments, json, &config.menu)?
        }
        Commands::Menu { size, json } => {
            let size = size.unwrap_or(config.menu.default_size);
            menu::menu(size, &config.menu.currency, json)?
        }
        Commands::Ducks { kind } => ducks::ducks(kind),
    };

    println!("{output}");
    Ok(())
}
