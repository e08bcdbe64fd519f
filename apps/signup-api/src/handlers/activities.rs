use crate::error::ApiError;
use crate::AppState;
use activity_directory::{ActivityListing, DirectoryError};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

/// Raw query pairs, kept in request order so a repeated key can be resolved.
pub type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

#[derive(Debug, Default)]
pub struct EmailParams {
    pub email: Option<String>,
}

impl EmailParams {
    /// The last `email` value wins when the key is repeated.
    fn from_query(query: QueryPairs) -> Result<Self, ApiError> {
        let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Ok(Self { email })
    }

    fn require_email(self) -> Result<String, ApiError> {
        self.email.ok_or(ApiError::MissingParameter("email"))
    }
}

/// GET /activities
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(state.directory.list().await)
}

/// POST /activities/{activity_name}/signup?email=...
pub async fn signup_for_activity(
    Path(activity_name): Path<String>,
    query: QueryPairs,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let email = EmailParams::from_query(query)?.require_email()?;
    let confirmation = state
        .directory
        .enroll(&activity_name, &email)
        .await
        .inspect_err(|e| log_rejection("Signup", &activity_name, &email, e))?;

    Ok(Json(json!({ "message": confirmation.to_string() })))
}

/// DELETE /activities/{activity_name}/unregister?email=...
pub async fn unregister_from_activity(
    Path(activity_name): Path<String>,
    query: QueryPairs,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let email = EmailParams::from_query(query)?.require_email()?;
    let confirmation = state
        .directory
        .withdraw(&activity_name, &email)
        .await
        .inspect_err(|e| log_rejection("Unregister", &activity_name, &email, e))?;

    Ok(Json(json!({ "message": confirmation.to_string() })))
}

fn log_rejection(action: &str, activity: &str, email: &str, err: &DirectoryError) {
    warn!("{} rejected for {} in {}: {}", action, email, activity, err);
}
