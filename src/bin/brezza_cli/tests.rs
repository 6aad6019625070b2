#![deny(clippy::all, clippy::pedantic)]

use httpmock::MockServer;
use serde_json::json;
use tempfile::tempdir;

use brezza::ApiClient;

use crate::args::{AuthCmd, Cli, Commands, ConfigCmd, DashboardArgs, DashboardCmd, PostsCmd};
use crate::ctx::{CliError, Ctx, build_ctx_from_cli};
use crate::handlers::{auth, posts, site};

fn ctx(server: &MockServer) -> Ctx {
    Ctx {
        client: ApiClient::new(&server.base_url()).expect("client"),
        token_file: None,
    }
}

fn stats_cli(site: Option<String>) -> Cli {
    Cli {
        site,
        token_file: None,
        token_env: None,
        command: Commands::Dashboard(DashboardArgs {
            action: DashboardCmd::Stats,
        }),
    }
}

#[test]
fn build_ctx_prefers_token_file_over_env() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("token");
    std::fs::write(&path, "file-token\n").expect("write token");

    let mut cli = stats_cli(Some("https://example.com".to_string()));
    cli.token_file = Some(path);
    cli.token_env = Some("env-token".to_string());

    let ctx = build_ctx_from_cli(&cli).expect("ctx");
    assert_eq!(ctx.client.token(), Some("file-token"));
}

#[test]
fn build_ctx_falls_back_to_env_when_file_missing() {
    let dir = tempdir().expect("tempdir");

    let mut cli = stats_cli(Some("https://example.com".to_string()));
    cli.token_file = Some(dir.path().join("absent"));
    cli.token_env = Some("env-token".to_string());

    let ctx = build_ctx_from_cli(&cli).expect("ctx");
    assert_eq!(ctx.client.token(), Some("env-token"));
}

#[test]
fn build_ctx_errors_without_site() {
    let err = build_ctx_from_cli(&stats_cli(None)).expect_err("missing site should fail");
    assert!(matches!(err, CliError::MissingSite));
}

#[tokio::test]
async fn login_persists_the_issued_token() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/auth/login")
            .json_body(json!({"username": "admin", "password": "pw"}));
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"token": "tok-1", "username": "admin", "email": "admin@example.com"}
        }));
    });

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("token");
    let mut ctx = ctx(&server);
    ctx.token_file = Some(path.clone());

    auth::handle(
        &ctx,
        AuthCmd::Login {
            username: "admin".to_string(),
            password: "pw".to_string(),
        },
    )
    .await?;

    mock.assert();
    let stored = std::fs::read_to_string(&path).expect("token file written");
    assert_eq!(stored, "tok-1");
    Ok(())
}

#[tokio::test]
async fn logout_drops_the_token_file_even_when_backend_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/auth/logout");
        then.status(500).body("boom");
    });

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("token");
    std::fs::write(&path, "tok").expect("seed token");

    let mut ctx = ctx(&server);
    ctx.client.set_token("tok");
    ctx.token_file = Some(path.clone());

    let err = auth::handle(&ctx, AuthCmd::Logout)
        .await
        .expect_err("backend failure propagates");
    assert!(matches!(err, CliError::Api(_)));
    assert!(!path.exists(), "token file must be gone after logout");
}

#[tokio::test]
async fn me_sends_the_bearer_header() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/auth/me")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"id": 1, "username": "admin", "email": "admin@example.com",
                     "nickname": null, "avatar": null}
        }));
    });

    let mut ctx = ctx(&server);
    ctx.client.set_token("tok");
    auth::handle(&ctx, AuthCmd::Me).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_list_sends_filters_as_query_params() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/admin/posts")
            .query_param("page", "1")
            .query_param("size", "5");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"content": [], "page": 1, "size": 5, "totalElements": 0, "totalPages": 0}
        }));
    });

    let ctx = ctx(&server);
    posts::handle(
        &ctx,
        PostsCmd::List {
            page: Some(1),
            size: Some(5),
            status: None,
            category_id: None,
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn config_set_reads_the_value_file() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/admin/config")
            .json_body(json!({"key": "site.title", "value": "from-file"}));
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"key": "site.title", "value": "from-file", "description": null}
        }));
    });

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("value.txt");
    std::fs::write(&path, "from-file").expect("write value");

    let ctx = ctx(&server);
    site::handle_config(
        &ctx,
        ConfigCmd::Set {
            key: "site.title".to_string(),
            value: None,
            value_file: Some(path),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}
