#![deny(clippy::all, clippy::pedantic)]

use brezza::types::TagRequest;

use crate::args::TagsCmd;
use crate::ctx::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: TagsCmd) -> Result<(), CliError> {
    match cmd {
        TagsCmd::List => {
            let tags = ctx.client.list_tags().await?;
            print_json(&tags)
        }
        TagsCmd::Get { id } => {
            let tag = ctx.client.get_tag(id).await?;
            print_json(&tag)
        }
        TagsCmd::Create { name, slug } => {
            let tag = ctx.client.create_tag(&TagRequest { name, slug }).await?;
            print_json(&tag)
        }
        TagsCmd::Update { id, name, slug } => {
            let tag = ctx
                .client
                .update_tag(id, &TagRequest { name, slug })
                .await?;
            print_json(&tag)
        }
        TagsCmd::Delete { id } => {
            ctx.client.delete_tag(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}
