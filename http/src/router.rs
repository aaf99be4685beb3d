use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing, Router,
};
use judging_session::{middleware::SessionLayer, Visit};

use crate::{config::ServerConfig, render::render};

pub(crate) fn router(config: &ServerConfig) -> Router {
    let session_layer = SessionLayer::builder()
        .with_config(config.session.clone())
        .build();

    Router::new()
        .route(&config.route, routing::get(judging).post(judging))
        .with_state(config.route.clone())
        .layer(session_layer)
}

#[tracing::instrument(skip_all, fields(session = %visit.key(), visits = visit.visits()))]
async fn judging(State(route): State<String>, visit: Visit) -> Response {
    tracing::info!("Judging visitor");
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render(&visit, &route),
    )
        .into_response()
}
