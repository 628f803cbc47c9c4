use crate::{api, SharedState};
use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use axum_server::tls_rustls::RustlsConfig;
use std::net::TcpListener;
use tower_http::trace::TraceLayer;

/// The main application object
pub struct App {
    shared_state: SharedState,
}

impl App {
    /// Create a new application object
    ///
    /// # Arguments
    /// * `shared_state` - State handed to every handler
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }

    /// Build the route table
    ///
    /// `/` answers with the current timestamp, any other single path
    /// segment is redirected to a search. Deeper paths fall through to 404.
    pub fn router(&self) -> Router {
        Router::<_>::new()
            .route("/", get(api::timestamp::timestamp))
            .route("/:short_key", get(api::redirect::redirect))
            .with_state(self.shared_state.clone())
            .fallback(unknown_route)
            .layer(TraceLayer::new_for_http())
    }

    /// Start a server and serve the application
    ///
    /// # Arguments
    /// * `address` - The address to bind to
    /// * `tls_config` - Serve HTTPS with this config, plain HTTP if `None`
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if binding or serving failed
    pub async fn serve(
        self,
        address: &str,
        tls_config: Option<RustlsConfig>,
    ) -> Result<(), crate::err::Error> {
        let router = self.router();
        let listener = TcpListener::bind(address)?;

        match tls_config {
            None => {
                tracing::info!("Listening on: http://{}", address);

                axum_server::from_tcp(listener)
                    .serve(router.into_make_service())
                    .await?;
            }
            Some(tls_config) => {
                tracing::info!("Listening on: https://{}", address);

                axum_server::from_tcp_rustls(listener, tls_config)
                    .serve(router.into_make_service())
                    .await?;
            }
        }

        Ok(())
    }
}

async fn unknown_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, ISO_FORMAT};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
        response::Response,
    };
    use chrono::{NaiveDateTime, TimeZone, Utc};
    use tower::ServiceExt;

    fn fixed_app(h: u32, m: u32, s: u32) -> Router {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 5, h, m, s).unwrap());
        App::new(SharedState::new(clock)).router()
    }

    async fn send(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_root_returns_timestamp() {
        let response = send(fixed_app(12, 0, 0), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"timestamp":"2024-03-05T12:00:00Z"}"#
        );
    }

    #[tokio::test]
    async fn test_root_with_system_clock() {
        let router = App::new(SharedState::default()).router();
        let response = send(router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        let stamp = json["timestamp"].as_str().unwrap();
        let parsed = NaiveDateTime::parse_from_str(stamp, ISO_FORMAT)
            .unwrap()
            .and_utc();
        assert!((Utc::now() - parsed).num_seconds().abs() <= 2);
    }

    #[tokio::test]
    async fn test_redirect() {
        let response = send(fixed_app(12, 0, 1), "/hello").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            location(&response),
            "https://duckduckgo.com/?q=hello+2024-03-05T12%3A00%3A01Z"
        );
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_redirect_reencodes_decoded_segment() {
        let response = send(fixed_app(12, 0, 1), "/a%20b").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            location(&response),
            "https://duckduckgo.com/?q=a%20b+2024-03-05T12%3A00%3A01Z"
        );
    }

    #[tokio::test]
    async fn test_redirect_encoded_slash() {
        let response = send(fixed_app(12, 0, 1), "/a%2Fb").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            location(&response),
            "https://duckduckgo.com/?q=a%2Fb+2024-03-05T12%3A00%3A01Z"
        );
    }

    #[tokio::test]
    async fn test_repeated_requests() {
        let router = App::new(SharedState::default()).router();
        for _ in 0..5 {
            let response = send(router.clone(), "/again").await;
            assert_eq!(response.status(), StatusCode::FOUND);

            let query = location(&response)
                .strip_prefix(api::redirect::SEARCH_BASE)
                .unwrap();
            let (key, stamp) = query.split_once('+').unwrap();
            assert_eq!(key, "again");
            let stamp = urlencoding::decode(stamp).unwrap();
            assert!(NaiveDateTime::parse_from_str(&stamp, ISO_FORMAT).is_ok());
        }
    }

    #[tokio::test]
    async fn test_multi_segment_not_found() {
        let response = send(fixed_app(12, 0, 0), "/a/b").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());

        let response = send(fixed_app(12, 0, 0), "/a/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let response = fixed_app(12, 0, 0)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
