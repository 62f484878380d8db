use urlencoding::encode;

use super::types::{geocoding_error::GeocodingError, reverse_place::ReversePlace};
use crate::types::candidate::Candidate;

// Nominatim's usage policy requires an identifying user agent.
const USER_AGENT: &str = concat!("waypoint-api/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GeocodingClient {
    host: String,
    client: reqwest::Client,
}

impl GeocodingClient {
    pub fn new(host: &str) -> Self {
        GeocodingClient {
            host: host.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, GeocodingError> {
        let url = format!(
            "{}/search?format=json&addressdetails=1&q={}",
            self.host,
            encode(query)
        );

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| GeocodingError::Request(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| GeocodingError::Request(format!("Upstream returned an error: {}", e)))?;

        resp.json::<Vec<Candidate>>()
            .await
            .map_err(|e| GeocodingError::Decode(format!("Failed to get response body: {}", e)))
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<ReversePlace, GeocodingError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1",
            self.host, lat, lon
        );

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| GeocodingError::Request(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| GeocodingError::Request(format!("Upstream returned an error: {}", e)))?;

        resp.json::<ReversePlace>()
            .await
            .map_err(|e| GeocodingError::Decode(format!("Failed to get response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_decodes_candidate_array() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("format".to_string(), "json".to_string()),
                mockito::Matcher::UrlEncoded("addressdetails".to_string(), "1".to_string()),
                mockito::Matcher::UrlEncoded("q".to_string(), "10 Downing Street".to_string()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!([{
                    "place_id": 1,
                    "display_name": "10 Downing Street, London",
                    "lat": "51.5034",
                    "lon": "-0.1276"
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let client = GeocodingClient::new(server.url().as_str());
        let candidates = client.search("10 Downing Street").await.unwrap();

        mock.assert();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "10 Downing Street, London");
        assert_eq!(candidates[0].lat, 51.5034);
    }

    #[tokio::test]
    async fn search_maps_http_failure_to_request_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_status(500)
            .create_async()
            .await;

        let client = GeocodingClient::new(server.url().as_str());
        let result = client.search("anywhere").await;

        assert!(matches!(result, Err(GeocodingError::Request(_))));
    }

    #[tokio::test]
    async fn search_maps_malformed_body_to_decode_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = GeocodingClient::new(server.url().as_str());
        let result = client.search("anywhere").await;

        assert!(matches!(result, Err(GeocodingError::Decode(_))));
    }

    #[tokio::test]
    async fn reverse_decodes_single_object() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lat".to_string(), "51.5".to_string()),
                mockito::Matcher::UrlEncoded("lon".to_string(), "-0.12".to_string()),
                mockito::Matcher::UrlEncoded("zoom".to_string(), "18".to_string()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "display_name": "Somewhere in London",
                    "address": { "city": "London" }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GeocodingClient::new(server.url().as_str());
        let place = client.reverse(51.5, -0.12).await.unwrap();

        mock.assert();
        assert_eq!(place.usable_display_name(), Some("Somewhere in London"));
    }
}
