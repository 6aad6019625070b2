#![deny(clippy::all, clippy::pedantic)]

use std::path::Path;

use brezza::client::MediaListQuery;

use crate::args::MediaCmd;
use crate::ctx::{CliError, Ctx};
use crate::io::read_bytes;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: MediaCmd) -> Result<(), CliError> {
    match cmd {
        MediaCmd::List {
            page,
            size,
            uploader_id,
        } => {
            let filters = MediaListQuery {
                page,
                size,
                uploader_id,
            };
            let media = ctx.client.list_media(&filters).await?;
            print_json(&media)
        }
        MediaCmd::Recent { limit } => {
            let media = ctx.client.recent_media(limit).await?;
            print_json(&media)
        }
        MediaCmd::Upload { file, mime } => upload(ctx, &file, mime).await,
        MediaCmd::Delete { id } => {
            ctx.client.delete_media(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}

async fn upload(ctx: &Ctx, file: &Path, mime: Option<String>) -> Result<(), CliError> {
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::InvalidInput("upload path has no file name".into()))?
        .to_string();
    let mime_type =
        mime.unwrap_or_else(|| mime_guess::from_path(file).first_or_octet_stream().to_string());
    let contents = read_bytes(file)?;

    let media = ctx
        .client
        .upload_media(&file_name, &mime_type, contents)
        .await?;
    print_json(&media)
}
