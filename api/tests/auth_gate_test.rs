//! Integration tests for the authentication gate and the product-deletion
//! cascade, driven through the real route table with in-memory stores.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use actix_web::cookie::Cookie;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web, App};
use chrono::{Duration, Utc};

use sf_core::clock::{Clock, ManualClock};
use sf_core::domain::entities::token::VerificationOutcome;
use sf_core::domain::entities::user::{User, UserRole};
use sf_core::events::topics::PRODUCT_DELETED;
use sf_core::events::{EventBus, ProductDeletedHandler, RetryPolicy};
use sf_core::repositories::{InventoryRepository, UserRepository};
use sf_core::services::{InventoryService, ProductService, TokenService, UserService};
use sf_infra::{
    BcryptPasswordHasher, MemoryInventoryRepository, MemoryProductRepository,
    MemoryUserRepository,
};
use sf_shared::config::JwtConfig;

use sf_api::routes::{self, AppState};

type TestState = AppState<MemoryUserRepository, MemoryProductRepository, MemoryInventoryRepository>;

struct TestContext {
    state: web::Data<TestState>,
    clock: Arc<ManualClock>,
    tokens: Arc<TokenService>,
    users: Arc<MemoryUserRepository>,
    inventories: Arc<MemoryInventoryRepository>,
}

/// Access tokens live 60 s, refresh tokens 3600 s; the manual clock moves
/// requests across those boundaries.
fn test_context() -> TestContext {
    let clock = Arc::new(ManualClock::starting_at(Utc::now()));
    let jwt_config = JwtConfig {
        access_token_expiry: 60,
        refresh_token_expiry: 3600,
        ..JwtConfig::new("integration-test-secret")
    };

    let tokens = Arc::new(
        TokenService::new(&jwt_config, Arc::clone(&clock) as Arc<dyn Clock>).unwrap(),
    );

    let users = Arc::new(MemoryUserRepository::new());
    let products = Arc::new(MemoryProductRepository::new());
    let inventories = Arc::new(MemoryInventoryRepository::new());

    // Short backoff so retry paths finish within the test budget.
    let mut bus = EventBus::new();
    bus.subscribe(
        PRODUCT_DELETED,
        Arc::new(ProductDeletedHandler::new(
            Arc::clone(&inventories),
            RetryPolicy {
                max_attempts: 3,
                delay: StdDuration::from_millis(20),
            },
        )),
    );
    let bus = Arc::new(bus);

    let state = web::Data::new(AppState {
        users: Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::new(BcryptPasswordHasher::new()),
            Arc::clone(&tokens),
        )),
        products: Arc::new(ProductService::new(Arc::clone(&products), bus)),
        inventories: Arc::new(InventoryService::new(Arc::clone(&inventories))),
        tokens: Arc::clone(&tokens),
    });

    TestContext {
        state,
        clock,
        tokens,
        users,
        inventories,
    }
}

async fn seed_user(context: &TestContext) -> User {
    context
        .users
        .create(User::new("jane@example.com", "irrelevant", UserRole::User))
        .await
        .unwrap()
}

macro_rules! test_app {
    ($context:expr) => {{
        let state = $context.state.clone();
        test::init_service(
            App::new().configure(move |cfg| routes::configure(cfg, state.clone())),
        )
        .await
    }};
}

#[actix_rt::test]
async fn missing_authorization_header_is_rejected() {
    let context = test_context();
    let app = test_app!(&context);

    let request = test::TestRequest::get().uri("/api/v1/users/me").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
}

#[actix_rt::test]
async fn malformed_bearer_token_is_rejected() {
    let context = test_context();
    let app = test_app!(&context);

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, "Bearer not-a-real-token"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
}

#[actix_rt::test]
async fn valid_access_token_reaches_the_handler() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    let access = context.tokens.issue_access_token(&user.identity()).unwrap();

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", access.token)))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["email"], "jane@example.com");
}

#[actix_rt::test]
async fn expired_access_without_refresh_cookie_is_bad_request() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    let access = context.tokens.issue_access_token(&user.identity()).unwrap();
    context.clock.advance(Duration::seconds(61));

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", access.token)))
        .to_request();
    let response = test::call_service(&app, request).await;

    // 400 with a re-login hint — never 401, never success.
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["errors"][0]["message"], "you may need to login again");
}

#[actix_rt::test]
async fn expired_access_with_valid_refresh_is_renewed() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    let pair = context.tokens.issue_pair(&user.identity()).unwrap();
    context.clock.advance(Duration::seconds(61));

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", pair.access_token)))
        .cookie(Cookie::new("refresh_token", pair.refresh_token.clone()))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 200);

    // The renewed token rides back on the response Authorization header
    // and verifies as valid with the refresh token's identity.
    let header = response
        .headers()
        .get(AUTHORIZATION)
        .expect("renewed token header")
        .to_str()
        .unwrap();
    let renewed = header.strip_prefix("Bearer ").expect("bearer scheme");
    match context.tokens.verify(renewed) {
        VerificationOutcome::Valid(claims) => {
            assert_eq!(claims.sub, user.id.to_string());
            assert_eq!(claims.email, user.email);
        }
        other => panic!("expected renewed token to be valid, got {other:?}"),
    }

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["email"], "jane@example.com");
}

#[actix_rt::test]
async fn refresh_token_as_bearer_is_rejected() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    // A perfectly valid refresh token authorizes nothing on its own.
    let pair = context.tokens.issue_pair(&user.identity()).unwrap();

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", pair.refresh_token)))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
}

#[actix_rt::test]
async fn expired_refresh_token_is_rejected() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    let pair = context.tokens.issue_pair(&user.identity()).unwrap();
    // Past both expiries: the refresh token is not renewable either.
    context.clock.advance(Duration::seconds(3601));

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", pair.access_token)))
        .cookie(Cookie::new("refresh_token", pair.refresh_token.clone()))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
}

#[actix_rt::test]
async fn tampered_refresh_token_is_rejected() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    let pair = context.tokens.issue_pair(&user.identity()).unwrap();
    context.clock.advance(Duration::seconds(61));

    let mut tampered = pair.refresh_token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let request = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", pair.access_token)))
        .cookie(Cookie::new("refresh_token", tampered))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), 401);
}

#[actix_rt::test]
async fn signup_then_login_sets_refresh_cookie() {
    let context = test_context();
    let app = test_app!(&context);

    let signup = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "email": "shopper@example.com",
            "password": "correct-horse"
        }))
        .to_request();
    let response = test::call_service(&app, signup).await;
    assert_eq!(response.status(), 201);

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "shopper@example.com",
            "password": "correct-horse"
        }))
        .to_request();
    let response = test::call_service(&app, login).await;
    assert_eq!(response.status(), 200);

    let cookie = response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "refresh_token")
        .expect("refresh cookie");
    assert_eq!(cookie.http_only(), Some(true));

    let body: serde_json::Value = test::read_body_json(response).await;
    let access = body["data"]["access_token"].as_str().unwrap();
    assert!(context.tokens.verify(access).is_valid());
}

#[actix_rt::test]
async fn login_with_wrong_password_is_bad_request() {
    let context = test_context();
    let app = test_app!(&context);

    let signup = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(serde_json::json!({
            "email": "shopper@example.com",
            "password": "correct-horse"
        }))
        .to_request();
    test::call_service(&app, signup).await;

    let login = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "shopper@example.com",
            "password": "wrong-horse"
        }))
        .to_request();
    let response = test::call_service(&app, login).await;

    assert_eq!(response.status(), 400);
}

/// Poll until the inventory record for `product_id` is gone.
async fn wait_for_cascade(inventories: &MemoryInventoryRepository, product_id: uuid::Uuid) -> bool {
    for _ in 0..100 {
        match inventories.find_by_product(product_id).await {
            Ok(None) => return true,
            _ => tokio::time::sleep(StdDuration::from_millis(10)).await,
        }
    }
    false
}

#[actix_rt::test]
async fn deleting_a_product_cascades_to_its_inventory() {
    let context = test_context();
    let user = seed_user(&context).await;
    let app = test_app!(&context);

    let access = context.tokens.issue_access_token(&user.identity()).unwrap();
    let bearer = format!("Bearer {}", access.token);

    let create = test::TestRequest::post()
        .uri("/api/v1/products")
        .insert_header((AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({
            "name": "Standing Desk",
            "description": "Oak, height adjustable",
            "price_cents": 14900,
            "category": "furniture"
        }))
        .to_request();
    let response = test::call_service(&app, create).await;
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = test::read_body_json(response).await;
    let product_id: uuid::Uuid = body["data"]["id"].as_str().unwrap().parse().unwrap();

    let create_inventory = test::TestRequest::post()
        .uri("/api/v1/inventories")
        .insert_header((AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({
            "product_id": product_id,
            "quantity": 12,
            "location": "WH-1"
        }))
        .to_request();
    let response = test::call_service(&app, create_inventory).await;
    assert_eq!(response.status(), 201);

    // Two transient lookup failures stay within the cascade's budget.
    context.inventories.fail_next(2);

    let delete = test::TestRequest::delete()
        .uri(&format!("/api/v1/products/{product_id}"))
        .insert_header((AUTHORIZATION, bearer))
        .to_request();
    let response = test::call_service(&app, delete).await;
    assert_eq!(response.status(), 200);

    assert!(
        wait_for_cascade(&context.inventories, product_id).await,
        "inventory record should be deleted by the cascade"
    );
}
