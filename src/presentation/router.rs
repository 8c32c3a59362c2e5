use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::CompletionClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_interview_handler, end_interview_handler, get_interview_handler,
    get_translation_handler, health_handler, list_interviews_handler, list_messages_handler,
    list_translations_handler, respond_handler, submit_translation_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: CompletionClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = Router::new()
        .route(
            "/translations",
            post(submit_translation_handler::<C>).get(list_translations_handler::<C>),
        )
        .route("/translations/{id}", get(get_translation_handler::<C>))
        .route(
            "/interviews",
            post(create_interview_handler::<C>).get(list_interviews_handler::<C>),
        )
        .route("/interviews/{id}", get(get_interview_handler::<C>))
        .route(
            "/interviews/{id}/messages",
            get(list_messages_handler::<C>).post(respond_handler::<C>),
        )
        .route("/interviews/{id}/end", post(end_interview_handler::<C>));

    Router::new()
        .route("/health", get(health_handler::<C>))
        .nest("/api/v1", api)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
