// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{admin, quiz, upload},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Student routes (questions, submit) and admin routes (add, import, results).
/// * Serves the browser client from `PUBLIC_DIR` for any other path.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let quiz_routes: Router<AppState> = Router::new()
        .route("/get-questions", get(quiz::get_questions))
        .route("/submit-answers", post(quiz::submit_answers));

    let admin_routes: Router<AppState> = Router::new()
        .route("/add-question", post(admin::add_question))
        .route("/add-questions-from-file", post(admin::add_questions_from_file))
        .route("/get-answers", get(quiz::get_answers))
        .route(
            "/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(state.config.max_upload_bytes)),
        );

    let public = ServeDir::new(&state.config.public_dir);

    Router::new()
        .merge(quiz_routes)
        .merge(admin_routes)
        .fallback_service(public)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
