use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{get_businesses, get_events, get_location, get_movies, get_weather, livez},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Any origin may query the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/location", get(get_location))
        .route("/weather", get(get_weather))
        .route("/yelp", get(get_businesses))
        .route("/movies", get(get_movies))
        .route("/meetup", get(get_events))
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, time::Duration};

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{
        aggregator::Providers, config::Config, handlers::FAILURE_MESSAGE, storage::test_store,
    };

    async fn app_for(mock_server: &MockServer) -> Router {
        app_with_config(Config::with_provider_url(&mock_server.uri())).await
    }

    async fn app_with_config(config: Config) -> Router {
        let state = AppState::new(
            Arc::new(test_store().await),
            Providers::from_config(&config),
            config.request_timeout(),
        );
        create_app(state)
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn mount_seattle_geocode(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .and(query_param("address", "Seattle, WA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{
                    "formatted_address": "Seattle, WA, USA",
                    "geometry": {"location": {"lat": 47.6062, "lng": -122.3321}}
                }],
                "status": "OK"
            })))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_livez() {
        let mock_server = MockServer::start().await;
        let app = app_for(&mock_server).await;

        let response = get(&app, "/livez").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_location_is_geocoded_once() {
        let mock_server = MockServer::start().await;
        mount_seattle_geocode(&mock_server).await;
        let app = app_for(&mock_server).await;

        let first = body_json(get(&app, "/location?data=Seattle%2C%20WA").await).await;
        let second = body_json(get(&app, "/location?data=Seattle%2C%20WA").await).await;

        assert_eq!(first["search_query"], "Seattle, WA");
        assert_eq!(first["formatted_query"], "Seattle, WA, USA");
        assert_eq!(first["latitude"], 47.6062);
        assert_eq!(first["longitude"], -122.3321);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_seattle_weather_scenario() {
        let mock_server = MockServer::start().await;
        mount_seattle_geocode(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/forecast/weather-key/47.6062,-122.3321"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {
                    "data": [
                        {"time": 1704096000, "summary": "Rain throughout the day."},
                        {"time": 1704182400, "summary": "Mostly cloudy."},
                        {"time": 1704268800, "summary": "Clear."}
                    ]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = app_for(&mock_server).await;

        let location = body_json(get(&app, "/location?data=Seattle%2C%20WA").await).await;

        let response = get(&app, "/weather?data=Seattle%2C%20WA").await;
        assert_eq!(response.status(), StatusCode::OK);
        let weather = body_json(response).await;
        let days = weather.as_array().unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0]["forecast"], "Rain throughout the day.");
        assert_eq!(days[0]["time"], "Mon Jan 01 2024");
        assert_eq!(days[2]["forecast"], "Clear.");
        assert!(days
            .iter()
            .all(|day| day["location_id"] == location["id"]));

        // Served from the cache: the forecast mock only allows one call
        let cached = body_json(get(&app, "/weather?data=Seattle%2C%20WA").await).await;
        assert_eq!(cached, weather);
    }

    #[tokio::test]
    async fn test_meetup_endpoint_serves_events() {
        let mock_server = MockServer::start().await;
        mount_seattle_geocode(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/2/open_events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{
                    "name": "Rust Hack Night",
                    "link": "https://www.meetup.com/seattle-rust/events/1/",
                    "group": {"name": "Seattle Rust"}
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = app_for(&mock_server).await;

        let events = body_json(get(&app, "/meetup?data=Seattle%2C%20WA").await).await;

        assert_eq!(events[0]["name"], "Rust Hack Night");
        assert_eq!(events[0]["host"], "Seattle Rust");
    }

    #[tokio::test]
    async fn test_empty_provider_result_is_not_cached() {
        let mock_server = MockServer::start().await;
        mount_seattle_geocode(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 1,
                "results": []
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let app = app_for(&mock_server).await;

        for _ in 0..2 {
            let response = get(&app, "/movies?data=Seattle%2C%20WA").await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, serde_json::json!([]));
        }
    }

    #[tokio::test]
    async fn test_provider_failure_returns_generic_500() {
        let mock_server = MockServer::start().await;
        mount_seattle_geocode(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/v3/businesses/search"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let app = app_for(&mock_server).await;

        let response = get(&app, "/yelp?data=Seattle%2C%20WA").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unknown_place_returns_generic_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [],
                "status": "ZERO_RESULTS"
            })))
            .mount(&mock_server)
            .await;

        let app = app_for(&mock_server).await;

        let response = get(&app, "/location?data=Atlantis").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_slow_provider_returns_generic_500_and_still_caches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({
                        "results": [{
                            "formatted_address": "Seattle, WA, USA",
                            "geometry": {"location": {"lat": 47.6062, "lng": -122.3321}}
                        }],
                        "status": "OK"
                    }))
                    .set_delay(Duration::from_secs(2)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = app_with_config(Config {
            request_timeout_seconds: 1,
            ..Config::with_provider_url(&mock_server.uri())
        })
        .await;

        let response = get(&app, "/location?data=Seattle").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, FAILURE_MESSAGE);

        // The abandoned lookup finishes in the background and is stored
        tokio::time::sleep(Duration::from_secs(2)).await;
        let response = get(&app, "/location?data=Seattle").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["formatted_query"], "Seattle, WA, USA");
    }

    #[tokio::test]
    async fn test_missing_search_query_returns_generic_500() {
        let mock_server = MockServer::start().await;
        let app = app_for(&mock_server).await;

        for uri in ["/weather", "/weather?data="] {
            let response = get(&app, uri).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_text(response).await, FAILURE_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let mock_server = MockServer::start().await;
        let app = app_for(&mock_server).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .header(header::ORIGIN, "https://city-explorer.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
