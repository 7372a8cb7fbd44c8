use axum::{extract::State, Json};
use crate::api::models::{AnalyzeRequest, AnalyzeResponse};
use crate::api::AppState;
use crate::errors::GitGradeError;
use crate::fetch::RepoUrl;
use crate::pipeline::Pipeline;

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, GitGradeError> {
    RepoUrl::parse(&req.url)?;

    let settings = state.settings.with_credentials(req.api_key, req.github_token);
    let pipeline = Pipeline::from_settings(&settings)?;
    let outcome = pipeline.analyze(&req.url).await?;

    Ok(Json(outcome.into()))
}
