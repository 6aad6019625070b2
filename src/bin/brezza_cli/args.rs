//! Command-line surface for `brezza-cli`.
//! Kept in a shared file so tests can reuse the same definitions as the
//! binary itself.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brezza-cli", version, about = "Brezza blog API CLI", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. <https://blog.example.com>
    #[arg(long, env = "BREZZA_SITE_URL")]
    pub site: Option<String>,

    /// Path to the persisted bearer token (written by `auth login`)
    #[arg(long, env = "BREZZA_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Token from env (CLI flag intentionally disabled to avoid shell history leaks)
    #[arg(hide = true, env = "BREZZA_TOKEN")]
    pub token_env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Login, logout, current user
    Auth(AuthArgs),
    /// Post management
    Posts(PostsArgs),
    /// Category management
    Categories(CategoriesArgs),
    /// Tag management
    Tags(TagsArgs),
    /// Friend link management
    Links(LinksArgs),
    /// Media library and uploads
    Media(MediaArgs),
    /// Raw key/value configuration
    Config(ConfigArgs),
    /// Assembled site configuration
    Site(SiteArgs),
    /// Dashboard statistics
    Dashboard(DashboardArgs),
}

#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub action: AuthCmd,
}

#[derive(Subcommand, Debug)]
pub enum AuthCmd {
    /// Log in and persist the issued token to --token-file
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Invalidate the session and always drop the stored token
    Logout,
    /// Show the authenticated user
    Me,
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// List posts with optional filters
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        status: Option<i32>,
        #[arg(long)]
        category_id: Option<i64>,
    },
    /// Get a post by id
    Get { id: i64 },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: String,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
        #[arg(long)]
        cover: Option<String>,
        #[arg(long)]
        status: Option<i32>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long = "tag-id")]
        tag_ids: Vec<i64>,
    },
    /// Update a post
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: String,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        content_file: Option<PathBuf>,
        #[arg(long)]
        cover: Option<String>,
        #[arg(long)]
        status: Option<i32>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long = "tag-id")]
        tag_ids: Vec<i64>,
    },
    /// Delete a post
    Delete { id: i64 },
}

#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub action: CategoriesCmd,
}

#[derive(Subcommand, Debug)]
pub enum CategoriesCmd {
    List,
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        parent_id: Option<i64>,
        #[arg(long)]
        sort_order: Option<i32>,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        parent_id: Option<i64>,
        #[arg(long)]
        sort_order: Option<i32>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub action: TagsCmd,
}

#[derive(Subcommand, Debug)]
pub enum TagsCmd {
    List,
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Parser, Debug)]
pub struct LinksArgs {
    #[command(subcommand)]
    pub action: LinksCmd,
}

#[derive(Subcommand, Debug)]
pub enum LinksCmd {
    List,
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        sort_order: Option<i32>,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        sort_order: Option<i32>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Parser, Debug)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub action: MediaCmd,
}

#[derive(Subcommand, Debug)]
pub enum MediaCmd {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        uploader_id: Option<i64>,
    },
    Recent {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Upload one file; mime type is guessed from the extension unless given
    Upload {
        file: PathBuf,
        #[arg(long)]
        mime: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigCmd,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Show one entry by key, or all entries
    Get { key: Option<String> },
    /// Write one entry
    Set {
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        value_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct SiteArgs {
    #[command(subcommand)]
    pub action: SiteCmd,
}

#[derive(Subcommand, Debug)]
pub enum SiteCmd {
    /// Show the assembled site configuration
    Get,
    /// Replace the site configuration from a JSON file
    Save { file: PathBuf },
}

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub action: DashboardCmd,
}

#[derive(Subcommand, Debug)]
pub enum DashboardCmd {
    Stats,
}
