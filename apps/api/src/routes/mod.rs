pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::graph::handlers as graph;
use crate::state::AppState;
use crate::taxonomy::handlers as taxonomy;
use crate::timeline::handlers as timeline;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Core computations
        .route(
            "/api/v1/experience/aggregate",
            post(timeline::handle_aggregate),
        )
        .route("/api/v1/experience/bucket", get(timeline::handle_bucket))
        .route(
            "/api/v1/skills/taxonomy",
            post(taxonomy::handle_build_taxonomy),
        )
        // Graph projection
        .route(
            "/api/v1/candidates",
            get(graph::handle_list_candidates).post(graph::handle_create_candidate),
        )
        .route(
            "/api/v1/candidates/:name",
            delete(graph::handle_delete_candidate),
        )
        .route(
            "/api/v1/candidates/:name/job-roles",
            get(graph::handle_candidate_job_roles),
        )
        .route(
            "/api/v1/job-roles",
            get(graph::handle_list_job_roles).post(graph::handle_create_job_role),
        )
        .route(
            "/api/v1/job-roles/:title",
            delete(graph::handle_delete_job_role),
        )
        .route(
            "/api/v1/job-roles/:title/candidates",
            get(graph::handle_job_role_candidates),
        )
        // Graph queries
        .route("/api/v1/match", get(graph::handle_match))
        .with_state(state)
}
