#![deny(clippy::all, clippy::pedantic)]

use brezza::types::FriendLinkRequest;

use crate::args::LinksCmd;
use crate::ctx::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: LinksCmd) -> Result<(), CliError> {
    match cmd {
        LinksCmd::List => {
            let links = ctx.client.list_friend_links().await?;
            print_json(&links)
        }
        LinksCmd::Get { id } => {
            let link = ctx.client.get_friend_link(id).await?;
            print_json(&link)
        }
        LinksCmd::Create {
            name,
            url,
            avatar,
            description,
            sort_order,
        } => {
            let body = FriendLinkRequest {
                name,
                url,
                avatar,
                description,
                sort_order,
            };
            let link = ctx.client.create_friend_link(&body).await?;
            print_json(&link)
        }
        LinksCmd::Update {
            id,
            name,
            url,
            avatar,
            description,
            sort_order,
        } => {
            let body = FriendLinkRequest {
                name,
                url,
                avatar,
                description,
                sort_order,
            };
            let link = ctx.client.update_friend_link(id, &body).await?;
            print_json(&link)
        }
        LinksCmd::Delete { id } => {
            ctx.client.delete_friend_link(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}
