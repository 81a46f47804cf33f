//! Route registration.

pub mod auth;
pub mod inventories;
pub mod products;
pub mod users;

use std::sync::Arc;

use actix_web::web;

use sf_core::repositories::{InventoryRepository, ProductRepository, UserRepository};
use sf_core::services::{InventoryService, ProductService, TokenService, UserService};

use crate::middleware::AuthGate;

/// Application state that holds the shared services
pub struct AppState<U, P, I>
where
    U: UserRepository,
    P: ProductRepository,
    I: InventoryRepository,
{
    pub users: Arc<UserService<U>>,
    pub products: Arc<ProductService<P>>,
    pub inventories: Arc<InventoryService<I>>,
    pub tokens: Arc<TokenService>,
}

/// Mount all /api/v1 routes.
///
/// The auth scope is public; everything else sits behind the
/// authentication gate.
pub fn configure<U, P, I>(cfg: &mut web::ServiceConfig, state: web::Data<AppState<U, P, I>>)
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    I: InventoryRepository + 'static,
{
    let gate = AuthGate::new(Arc::clone(&state.tokens));

    cfg.app_data(state.clone()).service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup::<U, P, I>))
                    .route("/login", web::post().to(auth::login::<U, P, I>)),
            )
            .service(
                web::scope("")
                    .wrap(gate)
                    .route("/users/me", web::get().to(users::profile::<U, P, I>))
                    .route("/users/me", web::patch().to(users::update_profile::<U, P, I>))
                    .route("/products", web::post().to(products::create::<U, P, I>))
                    .route("/products", web::get().to(products::list::<U, P, I>))
                    .route("/products/{id}", web::get().to(products::get::<U, P, I>))
                    .route("/products/{id}", web::patch().to(products::update::<U, P, I>))
                    .route("/products/{id}", web::delete().to(products::delete::<U, P, I>))
                    .route(
                        "/products/{id}/status",
                        web::patch().to(products::set_status::<U, P, I>),
                    )
                    .route(
                        "/inventories",
                        web::post().to(inventories::create::<U, P, I>),
                    )
                    .route(
                        "/inventories/{id}",
                        web::get().to(inventories::get::<U, P, I>),
                    )
                    .route(
                        "/inventories/{id}",
                        web::patch().to(inventories::update::<U, P, I>),
                    )
                    .route(
                        "/inventories/product/{product_id}",
                        web::get().to(inventories::get_by_product::<U, P, I>),
                    )
                    .route(
                        "/inventories/product/{product_id}/add",
                        web::post().to(inventories::add_stock::<U, P, I>),
                    )
                    .route(
                        "/inventories/product/{product_id}/remove",
                        web::post().to(inventories::remove_stock::<U, P, I>),
                    ),
            ),
    );
}
