use std::net::SocketAddr;
use clap::Parser;
use lambda_http::{run, Error};
use tracing::info;
use bookshelf::catalog::controller::create_router;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::config::ServerArgs;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::{Configuration, RunMode};
use bookshelf::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = ServerArgs::parse();
    let config = Configuration::from(&args);
    setup_tracing(config.json_logs);

    let catalog = create_catalog_service(&config);
    let books = catalog.list_books().await?.len();
    info!(
        branch = %config.branch_id,
        store = ?config.store,
        mode = ?config.run_mode,
        books,
        "starting bookshelf catalog"
    );

    let state = AppState::new(config.clone(), catalog);

    match config.run_mode {
        // See https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html
        RunMode::Lambda => run(create_router::<lambda_http::Body>(state)).await,
        RunMode::Http => {
            let app = create_router::<axum::body::Body>(state);
            let addr: SocketAddr = config.listen_addr.parse()?;
            info!("catalog listening on {}", addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
