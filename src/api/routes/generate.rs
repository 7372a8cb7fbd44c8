use axum::{extract::State, Json};
use crate::api::models::{GenerateRequest, GenerateResponse};
use crate::api::AppState;
use crate::errors::GitGradeError;
use crate::fetch::RepoUrl;
use crate::models::GenerationMode;
use crate::pipeline::Pipeline;

pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, GitGradeError> {
    let mode = match GenerationMode::from_name(&req.kind) {
        Some(GenerationMode::Audit) | None => {
            return Err(GitGradeError::Config(format!(
                "Unknown generation kind '{}': use 'readme' or 'tests'",
                req.kind
            )));
        }
        Some(mode) => mode,
    };
    RepoUrl::parse(&req.url)?;

    let settings = state.settings.with_credentials(req.api_key, req.github_token);
    let pipeline = Pipeline::from_settings(&settings)?;
    let outcome = pipeline.generate_artifact(&req.url, mode).await?;

    Ok(Json(outcome.into()))
}
