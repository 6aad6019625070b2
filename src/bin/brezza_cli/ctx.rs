#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use brezza::{ApiClient, ApiError};

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("site URL is required (use --site or BREZZA_SITE_URL)")]
    MissingSite,
    #[error("failed to read token file: {0}")]
    TokenFile(std::io::Error),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug)]
pub struct Ctx {
    pub client: ApiClient,
    pub token_file: Option<PathBuf>,
}

pub fn build_ctx_from_cli(cli: &Cli) -> Result<Ctx, CliError> {
    let site = cli.site.clone().ok_or(CliError::MissingSite)?;
    let mut client = ApiClient::new(&site)?;
    if let Some(token) = stored_token(cli)? {
        client.set_token(token);
    }
    Ok(Ctx {
        client,
        token_file: cli.token_file.clone(),
    })
}

/// A persisted token file wins over the env fallback; a missing file just
/// means nobody logged in yet.
fn stored_token(cli: &Cli) -> Result<Option<String>, CliError> {
    if let Some(path) = &cli.token_file {
        match fs::read_to_string(path) {
            Ok(contents) => return Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(CliError::TokenFile(err)),
        }
    }
    Ok(cli.token_env.clone())
}
