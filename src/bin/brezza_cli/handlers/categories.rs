#![deny(clippy::all, clippy::pedantic)]

use brezza::types::CategoryRequest;

use crate::args::CategoriesCmd;
use crate::ctx::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: CategoriesCmd) -> Result<(), CliError> {
    match cmd {
        CategoriesCmd::List => {
            let categories = ctx.client.list_categories().await?;
            print_json(&categories)
        }
        CategoriesCmd::Get { id } => {
            let category = ctx.client.get_category(id).await?;
            print_json(&category)
        }
        CategoriesCmd::Create {
            name,
            slug,
            description,
            parent_id,
            sort_order,
        } => {
            let body = CategoryRequest {
                name,
                slug,
                description,
                parent_id,
                sort_order,
            };
            let category = ctx.client.create_category(&body).await?;
            print_json(&category)
        }
        CategoriesCmd::Update {
            id,
            name,
            slug,
            description,
            parent_id,
            sort_order,
        } => {
            let body = CategoryRequest {
                name,
                slug,
                description,
                parent_id,
                sort_order,
            };
            let category = ctx.client.update_category(id, &body).await?;
            print_json(&category)
        }
        CategoriesCmd::Delete { id } => {
            ctx.client.delete_category(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
    }
}
