#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use brezza::client::PostListQuery;
use brezza::types::PostRequest;

use crate::args::PostsCmd;
use crate::ctx::{CliError, Ctx};
use crate::io::read_opt_value;
use crate::print::print_json;

struct PostInput {
    title: String,
    slug: String,
    summary: Option<String>,
    content: Option<String>,
    content_file: Option<PathBuf>,
    cover: Option<String>,
    status: Option<i32>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
}

impl PostInput {
    fn into_request(self) -> Result<PostRequest, CliError> {
        let content = read_opt_value(self.content, self.content_file)?;
        Ok(PostRequest {
            title: self.title,
            slug: self.slug,
            summary: self.summary,
            content,
            cover: self.cover,
            status: self.status,
            category_id: self.category_id,
            tag_ids: (!self.tag_ids.is_empty()).then_some(self.tag_ids),
        })
    }
}

pub async fn handle(ctx: &Ctx, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::List {
            page,
            size,
            status,
            category_id,
        } => list(ctx, page, size, status, category_id).await,
        PostsCmd::Get { id } => get(ctx, id).await,
        PostsCmd::Create {
            title,
            slug,
            summary,
            content,
            content_file,
            cover,
            status,
            category_id,
            tag_ids,
        } => {
            let input = PostInput {
                title,
                slug,
                summary,
                content,
                content_file,
                cover,
                status,
                category_id,
                tag_ids,
            };
            create(ctx, input).await
        }
        PostsCmd::Update {
            id,
            title,
            slug,
            summary,
            content,
            content_file,
            cover,
            status,
            category_id,
            tag_ids,
        } => {
            let input = PostInput {
                title,
                slug,
                summary,
                content,
                content_file,
                cover,
                status,
                category_id,
                tag_ids,
            };
            update(ctx, id, input).await
        }
        PostsCmd::Delete { id } => delete(ctx, id).await,
    }
}

async fn list(
    ctx: &Ctx,
    page: Option<u32>,
    size: Option<u32>,
    status: Option<i32>,
    category_id: Option<i64>,
) -> Result<(), CliError> {
    let filters = PostListQuery {
        page,
        size,
        status,
        category_id,
        tag_id: None,
    };
    let posts = ctx.client.list_posts(&filters).await?;
    print_json(&posts)?;
    Ok(())
}

async fn get(ctx: &Ctx, id: i64) -> Result<(), CliError> {
    let post = ctx.client.get_post(id).await?;
    print_json(&post)?;
    Ok(())
}

async fn create(ctx: &Ctx, input: PostInput) -> Result<(), CliError> {
    let body = input.into_request()?;
    let post = ctx.client.create_post(&body).await?;
    print_json(&post)?;
    Ok(())
}

async fn update(ctx: &Ctx, id: i64, input: PostInput) -> Result<(), CliError> {
    let body = input.into_request()?;
    let post = ctx.client.update_post(id, &body).await?;
    print_json(&post)?;
    Ok(())
}

async fn delete(ctx: &Ctx, id: i64) -> Result<(), CliError> {
    ctx.client.delete_post(id).await?;
    print_json(&serde_json::json!({ "deleted": id }))?;
    Ok(())
}
