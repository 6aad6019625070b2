//! Integration tests for the API client and cache against a stub backend.

use std::time::Duration;

use httpmock::MockServer;
use serde_json::json;

use brezza::client::{PostListQuery, clear_site_config_cache, clear_taxonomy_cache};
use brezza::{ApiClient, ApiError, CacheConfig, CacheManager};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url()).expect("client")
}

fn cache() -> CacheManager {
    CacheManager::new(&CacheConfig {
        default_ttl: Duration::from_secs(300),
    })
}

fn site_config_body() -> serde_json::Value {
    json!({
        "basic": {
            "title": "Brezza", "description": "a blog", "logo": "", "favicon": "",
            "siteUrl": "https://blog.example.com", "backgroundType": "none",
            "backgroundUrl": "", "overlayOpacity": 0.4
        },
        "seo": {"keywords": ["rust"], "ogImage": "", "twitterCard": "", "twitterSite": ""},
        "analytics": {"googleAnalyticsId": "", "baiduTongjiId": ""},
        "footer": {"copyright": "", "icpNumber": "", "icpUrl": "",
                   "policeNumber": "", "policeUrl": ""},
        "author": {"name": "ada", "avatar": "", "bio": "", "location": "", "email": ""},
        "socialLinks": [],
        "skills": []
    })
}

#[tokio::test]
async fn success_envelope_unwraps_data() -> Result<(), ApiError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/blog/tags");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": [{"id": 1, "name": "rust", "slug": "rust"}]
        }));
    });

    let tags = client(&server).blog_tags().await?;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].slug, "rust");
    Ok(())
}

#[tokio::test]
async fn envelope_failure_surfaces_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/auth/me");
        then.status(200)
            .json_body(json!({"code": 403, "message": "forbidden", "data": null}));
    });

    let err = client(&server)
        .current_user()
        .await
        .expect_err("envelope code != 200 must fail");
    assert!(matches!(err, ApiError::Envelope(_)));
    assert_eq!(err.to_string(), "forbidden");
}

#[tokio::test]
async fn http_failure_with_unparseable_body_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/admin/dashboard/stats");
        then.status(500).body("<html>oops</html>");
    });

    let err = client(&server)
        .dashboard_stats()
        .await
        .expect_err("500 must fail");
    assert_eq!(err.to_string(), "HTTP 500");
    assert_eq!(err.status(), Some(500));
    assert!(!err.is_auth_failure());
}

#[tokio::test]
async fn http_failure_prefers_the_json_message_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/blog/posts/slug/missing");
        then.status(404)
            .json_body(json!({"code": 404, "message": "post not found", "data": null}));
    });

    let err = client(&server)
        .post_by_slug("missing")
        .await
        .expect_err("404 must fail");
    assert_eq!(err.to_string(), "post not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unauthorized_status_is_flagged_as_auth_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/auth/me");
        then.status(401).body("");
    });

    let err = client(&server)
        .current_user()
        .await
        .expect_err("401 must fail");
    assert!(err.is_auth_failure());
    assert_eq!(err.to_string(), "HTTP 401");
}

#[tokio::test]
async fn empty_success_body_is_a_distinct_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/auth/me");
        then.status(200).body("");
    });

    let err = client(&server)
        .current_user()
        .await
        .expect_err("empty body must fail");
    assert!(matches!(err, ApiError::EmptyResponse));
    assert_eq!(err.to_string(), "empty response from server");
}

#[tokio::test]
async fn missing_token_omits_the_authorization_header() -> Result<(), ApiError> {
    let server = MockServer::start();
    // A request without a token can never match this mock.
    let authed = server.mock(|when, then| {
        when.method("GET")
            .path("/api/auth/me")
            .header_exists("authorization");
        then.status(200)
            .json_body(json!({"code": 200, "message": "", "data": null}));
    });
    let anonymous = server.mock(|when, then| {
        when.method("GET").path("/api/auth/me");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"id": 1, "username": "admin", "email": "a@b.c",
                     "nickname": null, "avatar": null}
        }));
    });

    client(&server).current_user().await?;

    assert_eq!(authed.hits(), 0);
    assert_eq!(anonymous.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn installed_token_is_sent_as_bearer() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/auth/me")
            .header("authorization", "Bearer tok-9");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"id": 1, "username": "admin", "email": "a@b.c",
                     "nickname": null, "avatar": null}
        }));
    });

    client(&server).with_token("tok-9").current_user().await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn login_token_authenticates_the_next_call() -> Result<(), ApiError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/auth/login");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"token": "issued-tok", "username": "admin", "email": "a@b.c"}
        }));
    });
    let me = server.mock(|when, then| {
        when.method("GET")
            .path("/api/auth/me")
            .header("authorization", "Bearer issued-tok");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"id": 1, "username": "admin", "email": "a@b.c",
                     "nickname": null, "avatar": null}
        }));
    });

    let client = client(&server);
    let auth = client
        .login(&brezza::types::LoginRequest {
            username: "admin".to_string(),
            password: "pw".to_string(),
        })
        .await?;

    client.with_token(auth.token).current_user().await?;
    me.assert();
    Ok(())
}

#[tokio::test]
async fn post_filters_use_the_backend_parameter_names() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/admin/posts")
            .query_param("page", "2")
            .query_param("categoryId", "3")
            .query_param("tagId", "4");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {"content": [], "page": 2, "size": 10,
                     "totalElements": 0, "totalPages": 0}
        }));
    });

    let filters = PostListQuery {
        page: Some(2),
        category_id: Some(3),
        tag_id: Some(4),
        ..PostListQuery::default()
    };
    client(&server).with_token("tok").list_posts(&filters).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn delete_accepts_a_null_data_envelope() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/api/admin/posts/9");
        then.status(200)
            .json_body(json!({"code": 200, "message": "", "data": null}));
    });

    client(&server).with_token("tok").delete_post(9).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn cached_site_config_hits_the_backend_once() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/blog/config/site");
        then.status(200)
            .json_body(json!({"code": 200, "message": "", "data": site_config_body()}));
    });

    let client = client(&server);
    let cache = cache();

    let first = client.blog_site_config_cached(&cache).await?;
    let second = client.blog_site_config_cached(&cache).await?;
    assert_eq!(first.basic.title, "Brezza");
    assert_eq!(second.basic.title, "Brezza");
    assert_eq!(mock.hits(), 1);

    clear_site_config_cache(&cache);
    client.blog_site_config_cached(&cache).await?;
    assert_eq!(mock.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn taxonomy_invalidation_forces_a_refetch() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/blog/tags");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": [{"id": 1, "name": "rust", "slug": "rust"}]
        }));
    });

    let client = client(&server);
    let cache = cache();

    client.blog_tags_cached(&cache).await?;
    client.blog_tags_cached(&cache).await?;
    assert_eq!(mock.hits(), 1);

    clear_taxonomy_cache(&cache);
    client.blog_tags_cached(&cache).await?;
    assert_eq!(mock.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn failed_producer_leaves_the_cache_empty() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/blog/tags");
        then.status(502).body("bad gateway");
    });

    let client = client(&server);
    let cache = cache();

    client
        .blog_tags_cached(&cache)
        .await
        .expect_err("502 must fail");
    client
        .blog_tags_cached(&cache)
        .await
        .expect_err("still failing");

    // both misses reached the backend; nothing was cached
    assert_eq!(mock.hits(), 2);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn upload_sends_multipart_with_auth() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/admin/media/upload")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {
                "id": 1, "filename": "x.png", "originalFilename": "a.png",
                "filepath": "/uploads/x.png", "mimeType": "image/png",
                "size": 3, "uploaderId": 1, "createdAt": "2024-01-15T10:30:00"
            }
        }));
    });

    let media = client(&server)
        .with_token("tok")
        .upload_media("a.png", "image/png", b"png".to_vec())
        .await?;
    assert_eq!(media.original_filename, "a.png");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_parse_backend_payloads() -> Result<(), ApiError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/blog/posts");
        then.status(200).json_body(json!({
            "code": 200,
            "message": "",
            "data": {
                "content": [{
                    "id": 1, "title": "hello", "slug": "hello", "summary": null,
                    "content": null, "cover": null, "status": 1, "viewCount": 12,
                    "categoryId": 2, "authorId": 1,
                    "createdAt": "2024-01-15T10:30:00",
                    "updatedAt": "2024-01-15T10:30:00",
                    "publishedAt": "2024-01-16T08:00:00",
                    "categoryName": "notes", "categorySlug": "notes",
                    "tags": [{"id": 1, "name": "rust", "slug": "rust"}]
                }],
                "page": 0, "size": 10, "totalElements": 1, "totalPages": 1
            }
        }));
    });

    let page = client(&server)
        .published_posts(&PostListQuery::default())
        .await?;
    assert_eq!(page.total_elements, 1);
    let post = &page.content[0];
    assert_eq!(post.view_count, 12);
    assert_eq!(post.category_slug.as_deref(), Some("notes"));
    assert!(post.published_at.is_some());
    Ok(())
}
