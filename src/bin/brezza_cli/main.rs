//! brezza-cli: command-line client for the Brezza blog backend.
//! Thin dispatch over the library's `ApiClient`; the only state it owns is
//! the persisted token file.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod ctx;
mod handlers;
mod io;
mod print;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};
use ctx::{CliError, build_ctx_from_cli};
use handlers::{auth, categories, dashboard, links, media, posts, site, tags};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = build_ctx_from_cli(&cli)?;

    match cli.command {
        Commands::Auth(cmd) => auth::handle(&ctx, cmd.action).await?,
        Commands::Posts(cmd) => posts::handle(&ctx, cmd.action).await?,
        Commands::Categories(cmd) => categories::handle(&ctx, cmd.action).await?,
        Commands::Tags(cmd) => tags::handle(&ctx, cmd.action).await?,
        Commands::Links(cmd) => links::handle(&ctx, cmd.action).await?,
        Commands::Media(cmd) => media::handle(&ctx, cmd.action).await?,
        Commands::Config(cmd) => site::handle_config(&ctx, cmd.action).await?,
        Commands::Site(cmd) => site::handle_site(&ctx, cmd.action).await?,
        Commands::Dashboard(cmd) => dashboard::handle(&ctx, cmd.action).await?,
    }

    Ok(())
}
