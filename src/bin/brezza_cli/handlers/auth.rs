#![deny(clippy::all, clippy::pedantic)]

use brezza::types::LoginRequest;

use crate::args::AuthCmd;
use crate::ctx::{CliError, Ctx};
use crate::io::{remove_token, write_token};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: AuthCmd) -> Result<(), CliError> {
    match cmd {
        AuthCmd::Login { username, password } => login(ctx, username, password).await,
        AuthCmd::Logout => logout(ctx).await,
        AuthCmd::Me => me(ctx).await,
    }
}

async fn login(ctx: &Ctx, username: String, password: String) -> Result<(), CliError> {
    let response = ctx.client.login(&LoginRequest { username, password }).await?;
    if let Some(path) = &ctx.token_file {
        write_token(path, &response.token)?;
    }
    print_json(&response)?;
    Ok(())
}

/// The token file is dropped even when the backend call fails, so a stale
/// session can always be cleared locally.
async fn logout(ctx: &Ctx) -> Result<(), CliError> {
    let result = ctx.client.logout().await;
    remove_token(ctx.token_file.as_deref())?;
    result?;
    print_json(&serde_json::json!({ "status": "logged out" }))?;
    Ok(())
}

async fn me(ctx: &Ctx) -> Result<(), CliError> {
    let user = ctx.client.current_user().await?;
    print_json(&user)?;
    Ok(())
}
