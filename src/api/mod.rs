//! HTTP surface of the notes service
//!
//! ```text
//! GET    /notes                  list
//! GET    /notes/:id              get one
//! POST   /notes                  create
//! PATCH  /notes/completed/:id    toggle completed
//! PATCH  /notes/description/:id  replace description
//! DELETE /notes/delete/:id       delete
//! ```

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod types;

use crate::app::NoteService;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch},
};
use log::info;
use std::sync::Arc;
use std::time::Instant;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use extractors::NoteId;
pub use types::{CreateNoteRequest, NoteEnvelope, UpdateDescriptionRequest};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NoteService>,
}

/// Builds the router with all note routes and request logging
pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/notes", get(handlers::list_notes).post(handlers::create_note))
        .route("/notes/:id", get(handlers::get_note))
        .route("/notes/completed/:id", patch(handlers::toggle_completed))
        .route("/notes/description/:id", patch(handlers::update_description))
        .route("/notes/delete/:id", delete(handlers::delete_note))
        .fallback(handlers::route_not_found)
        // No size cap on request bodies
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(log_request))
        .with_state(AppState { service })
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{method} {path} -> {} ({:?})",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
