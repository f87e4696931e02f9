mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Router, response::Redirect, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::{
    infrastructure::{
        in_memory_activity_repository::InMemoryActivityRepository, seed_catalog::seed_catalog,
    },
    presentation::handlers::activity_handler::create_activity_router,
    usecase::{
        list_activities_usecase::ListActivitiesUsecase, signup_usecase::SignupUsecase,
        unregister_usecase::UnregisterUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let activity_repository = InMemoryActivityRepository::from_catalog(seed_catalog());
    let list_service = ListActivitiesUsecase::new(activity_repository.clone());
    let signup_service = SignupUsecase::new(activity_repository.clone());
    let unregister_service = UnregisterUsecase::new(activity_repository);

    let app = Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .merge(create_activity_router(
            list_service,
            signup_service,
            unregister_service,
        ))
        .nest_service("/static", ServeDir::new("static"));

    let port = dotenvy::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
