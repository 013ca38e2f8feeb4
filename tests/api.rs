//! 요청 파이프라인 전체(인증 → 검증 → 서비스 → 응답)를 실제 `App`으로 검증합니다.

use std::net::SocketAddr;

use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::{test, web};
use serde_json::{json, Value};

use conduit_api::app::{create_app, rate_limiter};
use conduit_api::config::{JwtConfig, PasswordConfig, RateLimitConfig};
use conduit_api::services::AppServices;

const CLIENT: &str = "127.0.0.1:40000";

macro_rules! app {
    () => {
        app!(RateLimitConfig { per_second: 1000, burst_size: 1000 })
    };
    ($limits:expr) => {{
        let services = AppServices::in_memory(
            JwtConfig {
                secret: "integration-secret".to_string(),
                expiration_hours: 1,
            },
            PasswordConfig { bcrypt_cost: 4 },
        );
        let limiter = rate_limiter(&$limits).expect("valid rate limit");

        test::init_service(create_app(web::Data::new(services), limiter)).await
    }};
}

/// 요청을 보내고 `(상태, JSON 본문)`을 돌려줍니다. 빈 본문은 `Value::Null`.
///
/// Rate Limiter 가 피어 IP 로 키를 잡으므로 모든 요청에 피어 주소를 붙입니다.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let peer: SocketAddr = CLIENT.parse().expect("socket address");
        let res = test::call_service(&$app, $req.peer_addr(peer).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        let value: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("JSON body")
        };
        (status, value)
    }};
}

/// 가입 후 `Authorization` 헤더 값을 돌려줍니다.
macro_rules! register {
    ($app:expr, $name:expr) => {{
        let (status, body) = send!(
            $app,
            test::TestRequest::post().uri("/api/users").set_json(json!({
                "user": {
                    "username": $name,
                    "email": format!("{}@conduit.io", $name),
                    "password": "password123"
                }
            }))
        );
        assert_eq!(status, StatusCode::OK, "{}", body);
        format!("Token {}", body["user"]["token"].as_str().expect("token"))
    }};
}

macro_rules! publish {
    ($app:expr, $auth:expr, $title:expr) => {{
        let (status, body) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/articles")
                .insert_header((header::AUTHORIZATION, $auth.as_str()))
                .set_json(json!({
                    "article": {
                        "title": $title,
                        "description": "Ever wonder how?",
                        "body": "You have to believe",
                        "tagList": ["dragons", "training"]
                    }
                }))
        );
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["article"]["slug"].as_str().expect("slug").to_string()
    }};
}

#[actix_web::test]
async fn health_returns_true() {
    let app = app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));
}

#[actix_web::test]
async fn required_auth_without_header_is_unauthorized() {
    let app = app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/user"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"]["code"], "token_not_found");
}

#[actix_web::test]
async fn required_auth_reports_resolution_failures() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/user")
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"]["code"], "token_malformed");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/user")
            .insert_header((header::AUTHORIZATION, "Token abc.def.ghi"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["errors"]["code"], "token_invalid");
}

#[actix_web::test]
async fn optional_auth_proceeds_anonymously() {
    let app = app!();
    let auth = register!(app, "jake");
    publish!(app, auth, "How to train your dragon");

    for header_value in [None, Some("Token not-a-jwt"), Some("Basic jake")] {
        let mut req = test::TestRequest::get().uri("/api/articles");
        if let Some(value) = header_value {
            req = req.insert_header((header::AUTHORIZATION, value));
        }

        let (status, body) = send!(app, req);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["articlesCount"], 1);
        assert_eq!(body["articles"][0]["favorited"], false);
    }
}

#[actix_web::test]
async fn short_username_reports_only_that_field() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "user": { "username": "ab", "email": "jake@jake.jake", "password": "jakejake" }
        }))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "errors": { "user.username": ["Minimum length is 3"] } }));
}

#[actix_web::test]
async fn registration_aggregates_every_field_error() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "user": { "username": "ab", "email": "bad", "password": "x" }
        }))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "errors": {
                "user.email": ["Not a valid email"],
                "user.password": ["Minimum length is 5"],
                "user.username": ["Minimum length is 3"]
            }
        })
    );
}

#[actix_web::test]
async fn login_with_bad_email_is_unprocessable() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/users/login").set_json(json!({
            "user": { "email": "bad", "password": "password123" }
        }))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "errors": { "user.email": ["Not a valid email"] } }));
}

#[actix_web::test]
async fn malformed_json_is_rejected_on_every_body_endpoint() {
    let app = app!();
    let auth = register!(app, "jake");
    let slug = publish!(app, auth, "Dragons");

    let endpoints = [
        test::TestRequest::post().uri("/api/users/login"),
        test::TestRequest::post().uri("/api/users"),
        test::TestRequest::put().uri("/api/user"),
        test::TestRequest::post().uri("/api/articles"),
        test::TestRequest::put().uri(&format!("/api/articles/{}", slug)),
        test::TestRequest::post().uri(&format!("/api/articles/{}/comments", slug)),
    ];

    for req in endpoints {
        let req = req
            .insert_header((header::AUTHORIZATION, auth.as_str()))
            .insert_header(ContentType::json())
            .set_payload("{\"user\": ");

        let (status, body) = send!(app, req);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "errors": "Malformed JSON payload" }));
    }
}

#[actix_web::test]
async fn list_defaults_to_twenty_from_the_newest() {
    let app = app!();
    let auth = register!(app, "jake");
    for n in 0..25 {
        publish!(app, auth, format!("Article {}", n));
    }

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/articles?limit=abc&offset="));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["articlesCount"], 25);
    assert_eq!(body["articles"].as_array().map(Vec::len), Some(20));
    assert_eq!(body["articles"][0]["title"], "Article 24");

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/articles?limit=10&offset=20"));
    assert_eq!(body["articles"].as_array().map(Vec::len), Some(5));
}

#[actix_web::test]
async fn only_the_author_may_delete_an_article() {
    let app = app!();
    let jake = register!(app, "jake");
    let jane = register!(app, "jane");
    let slug = publish!(app, jake, "Dragons");
    let uri = format!("/api/articles/{}", slug);

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&uri).insert_header((header::AUTHORIZATION, jane.as_str()))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["errors"]["code"], "article_not_permitted");

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&uri).insert_header((header::AUTHORIZATION, jake.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = send!(app, test::TestRequest::get().uri(&uri));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["code"], "article_not_found");
}

#[actix_web::test]
async fn user_domain_errors_map_to_their_statuses() {
    let app = app!();
    register!(app, "jake");

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "user": { "username": "jake", "email": "other@conduit.io", "password": "password123" }
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["code"], "user_username_taken");

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/users/login").set_json(json!({
            "user": { "email": "jake@conduit.io", "password": "wrong-password" }
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["code"], "user_bad_credentials");

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/profiles/nobody"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["code"], "user_not_found");
}

#[actix_web::test]
async fn profile_feed_and_favorites_reflect_the_viewer() {
    let app = app!();
    let jake = register!(app, "jake");
    let jane = register!(app, "jane");
    let slug = publish!(app, jane, "Wyverns");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/profiles/jane/follow")
            .insert_header((header::AUTHORIZATION, jake.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["following"], true);

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/articles/feed")
            .insert_header((header::AUTHORIZATION, jake.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["articlesCount"], 1);
    assert_eq!(body["articles"][0]["author"]["following"], true);

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/articles/{}/favorite", slug))
            .insert_header((header::AUTHORIZATION, jake.as_str()))
    );
    assert_eq!(body["article"]["favorited"], true);
    assert_eq!(body["article"]["favoritesCount"], 1);
    assert_eq!(body["article"]["tagList"], json!(["dragons", "training"]));

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/tags"));
    assert_eq!(body, json!({ "tags": ["dragons", "training"] }));

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/articles?favorited=jake"));
    assert_eq!(body["articlesCount"], 1);

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/user")
            .insert_header((header::AUTHORIZATION, jake.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "jake");
    assert_eq!(format!("Token {}", body["user"]["token"].as_str().unwrap_or_default()), jake);
}

#[actix_web::test]
async fn comments_follow_their_own_error_domain() {
    let app = app!();
    let jake = register!(app, "jake");
    let jane = register!(app, "jane");
    let slug = publish!(app, jake, "Dragons");
    let comments_uri = format!("/api/articles/{}/comments", slug);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&comments_uri)
            .insert_header((header::AUTHORIZATION, jane.as_str()))
            .set_json(json!({ "comment": { "body": "Thank you so much!" } }))
    );
    assert_eq!(status, StatusCode::OK);
    let id = body["comment"]["id"].as_u64().expect("comment id");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&comments_uri)
            .insert_header((header::AUTHORIZATION, jane.as_str()))
            .set_json(json!({ "comment": {} }))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "errors": { "comment.body": ["Required"] } }));

    let (_, body) = send!(app, test::TestRequest::get().uri(&comments_uri));
    assert_eq!(body["comments"].as_array().map(Vec::len), Some(1));

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("{}/{}", comments_uri, id))
            .insert_header((header::AUTHORIZATION, jake.as_str()))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["errors"]["code"], "comment_not_permitted");

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/articles/missing/comments")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["code"], "comment_slug_not_found");

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("{}/{}", comments_uri, id))
            .insert_header((header::AUTHORIZATION, jane.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[actix_web::test]
async fn unmatched_requests_use_the_fallback() {
    let app = app!();

    let (status, body) = send!(app, test::TestRequest::default().method(Method::OPTIONS).uri("/api/articles"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/nowhere"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["code"], "route_not_found");
}

#[actix_web::test]
async fn framework_rejections_are_json() {
    let app = app!();
    let auth = register!(app, "jake");

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri("/api/articles/dragons/comments/not-a-number")
            .insert_header((header::AUTHORIZATION, auth.as_str()))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["code"], "request_rejected");
}

#[actix_web::test]
async fn cors_preflight_is_answered_with_an_empty_200() {
    let app = app!();

    let peer: SocketAddr = CLIENT.parse().expect("socket address");
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/articles/dragons")
        .peer_addr(peer)
        .insert_header((header::ORIGIN, "http://localhost:4200"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, content-type, accept-language"))
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn options_with_origin_reaches_the_fallback() {
    let app = app!();

    let peer: SocketAddr = CLIENT.parse().expect("socket address");
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/articles")
        .peer_addr(peer)
        .insert_header((header::ORIGIN, "http://localhost:4200"))
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(test::read_body(res).await.is_empty());
}

#[actix_web::test]
async fn rejected_preflight_still_has_a_json_body() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/articles")
            .insert_header((header::ORIGIN, "http://localhost:4200"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PUT"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "x-not-allowed"))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["code"], "request_rejected");
}

#[actix_web::test]
async fn rate_limited_requests_get_a_json_429() {
    let app = app!(RateLimitConfig { per_second: 1, burst_size: 1 });

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);

    let peer: SocketAddr = CLIENT.parse().expect("socket address");
    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/health").peer_addr(peer).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.headers().contains_key("x-ratelimit-after"));

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["errors"]["code"], "request_rejected");
}
