use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use sf_core::clock::{Clock, SystemClock};
use sf_core::events::{EventBus, ProductDeletedHandler, RetryPolicy};
use sf_core::events::topics;
use sf_core::services::{InventoryService, ProductService, TokenService, UserService};
use sf_infra::{
    BcryptPasswordHasher, MemoryInventoryRepository, MemoryProductRepository,
    MemoryUserRepository,
};
use sf_shared::config::{JwtConfig, ServerConfig};

use sf_api::routes::{self, AppState};
use sf_api::middleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting StoreFront API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the development signing secret");
    }

    // Storage collaborators
    let user_repo = Arc::new(MemoryUserRepository::new());
    let product_repo = Arc::new(MemoryProductRepository::new());
    let inventory_repo = Arc::new(MemoryInventoryRepository::new());

    // Token lifecycle over the wall clock; a bad signing secret is fatal
    // here, before the server ever binds.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tokens = Arc::new(
        TokenService::new(&jwt_config, clock).expect("jwt signing secret must be configured"),
    );

    // Event wiring happens once, before serving: the handler registry is
    // read-only from here on.
    let mut bus = EventBus::new();
    bus.subscribe(
        topics::PRODUCT_DELETED,
        Arc::new(ProductDeletedHandler::new(
            Arc::clone(&inventory_repo),
            RetryPolicy::default(),
        )),
    );
    let bus = Arc::new(bus);

    let state = web::Data::new(AppState {
        users: Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::new(BcryptPasswordHasher::new()),
            Arc::clone(&tokens),
        )),
        products: Arc::new(ProductService::new(Arc::clone(&product_repo), Arc::clone(&bus))),
        inventories: Arc::new(InventoryService::new(Arc::clone(&inventory_repo))),
        tokens,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::create_cors())
            .configure(|cfg| routes::configure(cfg, state.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
