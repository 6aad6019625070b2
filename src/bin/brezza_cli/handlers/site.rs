#![deny(clippy::all, clippy::pedantic)]

use brezza::types::{ConfigRequest, SiteConfig};

use crate::args::{ConfigCmd, SiteCmd};
use crate::ctx::{CliError, Ctx};
use crate::io::{read_value, read_opt_value};
use crate::print::print_json;

pub async fn handle_config(ctx: &Ctx, cmd: ConfigCmd) -> Result<(), CliError> {
    match cmd {
        ConfigCmd::Get { key: Some(key) } => {
            let entry = ctx.client.config_entry(&key).await?;
            print_json(&entry)
        }
        ConfigCmd::Get { key: None } => {
            let entries = ctx.client.config_entries().await?;
            print_json(&entries)
        }
        ConfigCmd::Set {
            key,
            value,
            value_file,
        } => {
            let value = read_value(value, value_file)?;
            let entry = ctx.client.save_config(&ConfigRequest { key, value }).await?;
            print_json(&entry)
        }
    }
}

pub async fn handle_site(ctx: &Ctx, cmd: SiteCmd) -> Result<(), CliError> {
    match cmd {
        SiteCmd::Get => {
            let config = ctx.client.site_config().await?;
            print_json(&config)
        }
        SiteCmd::Save { file } => {
            let raw = read_opt_value(None, Some(file))?
                .ok_or_else(|| CliError::InvalidInput("site config file required".into()))?;
            let config: SiteConfig = serde_json::from_str(&raw)
                .map_err(|e| CliError::InvalidInput(format!("site config: {e}")))?;
            ctx.client.save_site_config(&config).await?;
            print_json(&serde_json::json!({ "status": "saved" }))
        }
    }
}
