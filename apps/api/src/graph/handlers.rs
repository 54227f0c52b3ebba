//! Axum route handlers for candidates, job roles and graph matching.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::graph::projector::{
    project_candidate, project_job_role, CandidateProjection, JobRoleProjection, Placement,
};
use crate::graph::store::{CandidateSummary, NodeKey};
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ParsedResume;
use crate::profile::{build_candidate_profile, CandidateProfile};
use crate::state::AppState;
use crate::timeline::ExperienceBucket;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CandidateResponse {
    pub profile: CandidateProfile,
    pub projection: CandidateProjection,
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub bucket: String,
    pub skill: String,
    pub subskill: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub bucket: ExperienceBucket,
    pub skill: String,
    pub subskill: Option<String>,
    pub candidates: Vec<CandidateSummary>,
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Candidates
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates
///
/// Builds the candidate profile from a parsed resume and projects it into the graph.
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(resume): Json<ParsedResume>,
) -> Result<Json<CandidateResponse>, AppError> {
    let profile = build_candidate_profile(&resume, state.today());
    let placement = Placement::for_resume(
        &resume,
        &state.config.default_industry,
        &state.config.default_job_role,
    );
    let projection = project_candidate(state.graph.as_ref(), &profile, &placement).await?;
    Ok(Json(CandidateResponse {
        profile,
        projection,
    }))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    Ok(Json(state.graph.list_candidates().await?))
}

/// DELETE /api/v1/candidates/:name
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    require_non_blank("name", &name)?;
    if !state.graph.detach_delete(&NodeKey::candidate(&name)).await? {
        return Err(AppError::NotFound(format!("Candidate '{name}' not found")));
    }
    tracing::info!("Deleted candidate '{name}'");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/candidates/:name/job-roles
pub async fn handle_candidate_job_roles(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.graph.job_roles_for_candidate(&name).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Job roles
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/job-roles
pub async fn handle_create_job_role(
    State(state): State<AppState>,
    Json(jd): Json<ParsedJobDescription>,
) -> Result<Json<JobRoleProjection>, AppError> {
    require_non_blank("job_title", &jd.job_title)?;
    let projection =
        project_job_role(state.graph.as_ref(), &jd, &state.config.default_industry).await?;
    Ok(Json(projection))
}

/// GET /api/v1/job-roles
pub async fn handle_list_job_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.graph.list_job_roles().await?))
}

/// DELETE /api/v1/job-roles/:title
pub async fn handle_delete_job_role(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, AppError> {
    require_non_blank("title", &title)?;
    if !state.graph.detach_delete(&NodeKey::job_role(&title)).await? {
        return Err(AppError::NotFound(format!("Job role '{title}' not found")));
    }
    tracing::info!("Deleted job role '{title}'");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/job-roles/:title/candidates
pub async fn handle_job_role_candidates(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    let candidates = state.graph.candidates_for_job(&title).await?;
    tracing::info!("Found {} matching candidates for job '{title}'", candidates.len());
    Ok(Json(candidates))
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/match?bucket=&skill=[&subskill=][&industry=]
///
/// Without a subskill: candidates under the skill at that experience band.
/// With a subskill: candidates at the end of the full
/// Industry -> JobRole -> Experience -> Skill -> SubSkill chain.
pub async fn handle_match(
    State(state): State<AppState>,
    Query(params): Query<MatchQuery>,
) -> Result<Json<MatchResponse>, AppError> {
    let bucket: ExperienceBucket = params.bucket.parse()?;
    require_non_blank("skill", &params.skill)?;
    let subskill = params.subskill.filter(|s| !s.trim().is_empty());

    let candidates = match &subskill {
        Some(subskill) => {
            let industry = params
                .industry
                .as_deref()
                .unwrap_or(&state.config.default_industry);
            state
                .graph
                .candidates_for_subskill(industry, bucket, &params.skill, subskill)
                .await?
        }
        None => state.graph.candidates_for_skill(bucket, &params.skill).await?,
    };

    Ok(Json(MatchResponse {
        bucket,
        skill: params.skill,
        subskill,
        candidates,
    }))
}
