use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::data::models::Coordinates;
use crate::geocode::error::GeocodeError;

pub mod error;

/// Resolves free-text places to coordinates. Best effort: any failure is
/// reported as `None`.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place: &str) -> Option<Coordinates>;
}

#[derive(Debug, Deserialize)]
struct Candidate {
    lat: String,
    lon: String
}

/// Client for a Nominatim-compatible `/search` endpoint.
pub struct NominatimGeocoder {
    client: Client,
    url: String
}

impl NominatimGeocoder {
    pub fn new(
        url: &str,
        timeout: Duration,
        user_agent: &str
    ) -> Result<NominatimGeocoder, GeocodeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(NominatimGeocoder { client, url: url.to_owned() })
    }

    /// One request, first candidate only. `Ok(None)` when nothing matched.
    pub async fn lookup(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let resp = self.client
            .get(&self.url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(GeocodeError::Status(resp.status().as_u16()));
        }

        let candidates: Vec<Candidate> = resp.json().await?;
        match candidates.into_iter().next() {
            Some(candidate) => parse_candidate(candidate).map(Some),
            None => Ok(None)
        }
    }
}

fn parse_candidate(candidate: Candidate) -> Result<Coordinates, GeocodeError> {
    let lat = candidate.lat.trim().parse::<f64>().ok();
    let lon = candidate.lon.trim().parse::<f64>().ok();

    let coordinates = match (lat, lon) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
        _ => None
    };

    coordinates.ok_or_else(|| GeocodeError::InvalidCoordinates {
        lat: candidate.lat,
        lon: candidate.lon
    })
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, place: &str) -> Option<Coordinates> {
        if place.trim().is_empty() {
            debug!("No place given, skipping geocoding");
            return None;
        }

        match self.lookup(place).await {
            Ok(Some(coordinates)) => Some(coordinates),
            Ok(None) => {
                warn!("No geocoding match for {:?}", place);
                None
            },
            Err(err) => {
                warn!("Could not geocode {:?}: {}", place, err);
                None
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{Geocoder, NominatimGeocoder};
    use crate::geocode::error::GeocodeError;

    fn geocoder(server: &MockServer, timeout: Duration) -> NominatimGeocoder {
        NominatimGeocoder::new(
            &format!("{}/search", server.uri()),
            timeout,
            "omenucesoir-test/0.1"
        )
        .expect("Could not build geocoder")
    }

    #[actix_rt::test]
    async fn test_resolve_takes_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Paris"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "lat": "48.8588897", "lon": "2.3200410", "display_name": "Paris" },
                { "lat": "33.6617962", "lon": "-95.5555130", "display_name": "Paris, TX" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let coords = geocoder(&server, Duration::from_secs(5))
            .resolve("Paris")
            .await
            .expect("Expected coordinates");

        assert_eq!(coords.lat(), 48.8588897);
        assert_eq!(coords.lon(), 2.3200410);
    }

    #[actix_rt::test]
    async fn test_resolve_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let geocoder = geocoder(&server, Duration::from_secs(5));

        assert!(matches!(geocoder.lookup("Nulle part").await, Ok(None)));
        assert_eq!(geocoder.resolve("Nulle part").await, None);
    }

    #[actix_rt::test]
    async fn test_resolve_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let geocoder = geocoder(&server, Duration::from_secs(5));

        assert!(matches!(
            geocoder.lookup("Lyon").await,
            Err(GeocodeError::Status(503))
        ));
        assert_eq!(geocoder.resolve("Lyon").await, None);
    }

    #[actix_rt::test]
    async fn test_resolve_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "lat": "1.0", "lon": "2.0" }]))
                    .set_delay(Duration::from_millis(500))
            )
            .mount(&server)
            .await;

        let geocoder = geocoder(&server, Duration::from_millis(50));

        assert!(matches!(
            geocoder.lookup("Lyon").await,
            Err(GeocodeError::Timeout)
        ));
        assert_eq!(geocoder.resolve("Lyon").await, None);
    }

    #[actix_rt::test]
    async fn test_resolve_invalid_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "lat": "north", "lon": "2.0" }
            ])))
            .mount(&server)
            .await;

        let geocoder = geocoder(&server, Duration::from_secs(5));

        assert!(matches!(
            geocoder.lookup("Lyon").await,
            Err(GeocodeError::InvalidCoordinates { .. })
        ));
        assert_eq!(geocoder.resolve("Lyon").await, None);
    }

    #[actix_rt::test]
    async fn test_resolve_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        assert_eq!(geocoder(&server, Duration::from_secs(5)).resolve("Lyon").await, None);
    }

    #[actix_rt::test]
    async fn test_blank_place_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        assert_eq!(geocoder(&server, Duration::from_secs(5)).resolve("   ").await, None);
    }
}
