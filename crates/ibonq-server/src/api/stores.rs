use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use ibonq_scraper::Store;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

const CITY_REQUIRED: &str = "City is required";

/// First non-blank `city` value, untrimmed. Repeated keys are tolerated.
fn city_param(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, value)| key == "city" && !value.trim().is_empty())
        .map(|(_, value)| value)
}

pub(super) async fn list_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Store>>, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "unreadable store query");
            return Err(ApiError::bad_request(CITY_REQUIRED));
        }
    };
    let Some(city) = city_param(pairs) else {
        return Err(ApiError::bad_request(CITY_REQUIRED));
    };

    let stores = state.client.fetch_stores(&city).await.map_err(|e| {
        tracing::warn!(request_id = %req_id.0, city, error = %e, "store inquiry failed");
        ApiError::upstream(format!("Failed to fetch stores for city: {city}"))
    })?;

    Ok(Json(stores))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn city_param_takes_first_city() {
        assert_eq!(
            city_param(pairs(&[("city", "A"), ("city", "B")])),
            Some("A".to_string())
        );
    }

    #[test]
    fn city_param_skips_blank_values_and_other_keys() {
        assert_eq!(
            city_param(pairs(&[("zip", "100"), ("city", " "), ("city", " X")])),
            Some(" X".to_string())
        );
        assert_eq!(city_param(pairs(&[("zip", "100")])), None);
    }
}
