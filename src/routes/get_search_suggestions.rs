use std::collections::HashMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    services::location_resolver::resolver::SearchOutcome, types::app_state::AppState,
    utils::validated_query::ValidatedQuery,
};

#[derive(Validate, Deserialize)]
pub struct GetSearchSuggestionsPayload {
    #[validate(length(max = 256, message = "Must be at most 256 characters"))]
    pub q: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetSearchSuggestionsResponseSuggestion {
    pub place_id: Option<u64>,
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    #[serde(rename = "class")]
    pub place_class: Option<String>,
    pub importance: Option<f64>,
    pub address: Option<HashMap<String, String>>,
}

#[derive(Serialize, Deserialize)]
pub struct GetSearchSuggestionsResponseData {
    pub suggestions: Vec<GetSearchSuggestionsResponseSuggestion>,
}

#[derive(Serialize, Deserialize)]
pub struct GetSearchSuggestionsResponse {
    pub data: GetSearchSuggestionsResponseData,
}

pub async fn get_search_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(GetSearchSuggestionsPayload { q }): ValidatedQuery<GetSearchSuggestionsPayload>,
) -> Response {
    let suggestions = match state.resolver.search_by_text(&q).await {
        SearchOutcome::Suggestions(candidates) => candidates,
        SearchOutcome::Superseded => Vec::new(),
    };

    Json(GetSearchSuggestionsResponse {
        data: GetSearchSuggestionsResponseData {
            suggestions: suggestions
                .into_iter()
                .map(|c| GetSearchSuggestionsResponseSuggestion {
                    place_id: c.place_id,
                    display_name: c.display_name,
                    latitude: c.lat,
                    longitude: c.lon,
                    place_type: c.place_type,
                    place_class: c.place_class,
                    importance: c.importance,
                    address: c.address,
                })
                .collect(),
        },
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;
    use crate::services::location_resolver::notifier::NotificationKind;

    #[tokio::test]
    async fn two_character_query_records_no_upstream_call() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .nominatim_server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/search-suggestions?q=ab")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetSearchSuggestionsResponse = serde_json::from_slice(&body).unwrap();
        assert!(body.data.suggestions.is_empty());
    }

    #[tokio::test]
    async fn qualifying_query_returns_candidates_in_upstream_order() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .nominatim_server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::UrlEncoded(
                "q".to_string(),
                "10 Downing Street".to_string(),
            ))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!([
                    {
                        "place_id": 1,
                        "display_name": "10 Downing Street, London",
                        "lat": "51.5034",
                        "lon": "-0.1276",
                        "type": "house",
                        "class": "place",
                        "importance": 0.62,
                        "address": { "city": "London", "country": "United Kingdom" }
                    },
                    {
                        "place_id": 2,
                        "display_name": "Downing Street, Cambridge",
                        "lat": "52.2025",
                        "lon": "0.1218"
                    }
                ])
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/search-suggestions?q=10%20Downing%20Street")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetSearchSuggestionsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.suggestions.len(), 2);
        assert_eq!(
            body.data.suggestions[0].display_name,
            "10 Downing Street, London"
        );
        assert_eq!(body.data.suggestions[0].latitude, 51.5034);
        assert_eq!(body.data.suggestions[0].longitude, -0.1276);
        assert_eq!(
            body.data.suggestions[1].display_name,
            "Downing Street, Cambridge"
        );

        let toasts = mock_app.toasts.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn empty_upstream_result_raises_an_error_toast() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .nominatim_server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/search-suggestions?q=nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetSearchSuggestionsResponse = serde_json::from_slice(&body).unwrap();
        assert!(body.data.suggestions.is_empty());

        let toasts = mock_app.toasts.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert_eq!(toasts[0].message, "No location found");
    }

    #[tokio::test]
    async fn upstream_failure_still_responds_with_empty_suggestions() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .nominatim_server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_status(500)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/search-suggestions?q=london")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetSearchSuggestionsResponse = serde_json::from_slice(&body).unwrap();
        assert!(body.data.suggestions.is_empty());

        let toasts = mock_app.toasts.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Error fetching location");
    }

    #[tokio::test]
    async fn missing_query_parameter_is_rejected() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/search-suggestions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
