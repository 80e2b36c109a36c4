use axum::{extract::State, Extension, Json};
use ibonq_scraper::City;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<City>>, ApiError> {
    let cities = state.client.fetch_cities().await.map_err(|e| {
        tracing::warn!(request_id = %req_id.0, error = %e, "city inquiry failed");
        ApiError::upstream("Failed to fetch cities")
    })?;

    Ok(Json(cities))
}
