//! Network operations for delivering notifications.
//!
//! This module posts a single notification request to the YM Sports
//! notification API and classifies the outcome. No retries are attempted.

use crate::errors::{SendError, SendResult};
use crate::models::notification::{ApiErrorBody, NotificationRequest, NotificationResult};
use std::{io, time::Duration};
use tracing::{debug, info, warn};

/// URL of the notification API
pub const API_URL: &str = "https://ym-sports.vercel.app/api/notify";

/// Seconds to wait for the API before giving up
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how long to wait when delivering a notification.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub timeout: Duration,
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint {
            url: API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Sends `request` to the notification API.
///
/// The request is serialized as JSON and posted once. A `200` response body is
/// decoded into a [`NotificationResult`]; every other status is a failure.
///
/// # Errors
/// - [`SendError::Api`] on any non-200 status, carrying the response body
/// - [`SendError::Timeout`] when the endpoint timeout elapses
/// - [`SendError::Connection`] when no connection could be established
/// - [`SendError::Unexpected`] for anything else, including an unreadable body
///
/// # Examples
/// ```no_run
/// use push_notifier::network::{send_notification, Endpoint};
/// use push_notifier::templates::{resolve, Overrides};
///
/// let request = resolve("some-user-id", "test", Overrides::default()).unwrap();
/// let result = send_notification(&request, &Endpoint::default()).unwrap();
/// println!("Delivered to {} of {} devices", result.sent, result.total);
/// ```
pub fn send_notification(
    request: &NotificationRequest,
    endpoint: &Endpoint,
) -> SendResult<NotificationResult> {
    let payload = serde_json::to_string(request)
        .map_err(|e| SendError::Unexpected(format!("failed to encode payload: {}", e)))?;

    let config = ureq::Agent::config_builder()
        .timeout_global(Some(endpoint.timeout))
        .http_status_as_error(false)
        .build();
    let agent = ureq::Agent::new_with_config(config);

    info!(url = %endpoint.url, user_id = %request.user_id, "posting notification");
    debug!(%payload, "notification payload");

    let mut response = agent
        .post(&endpoint.url)
        .header("Content-Type", "application/json")
        .send(payload.as_bytes())
        .map_err(classify_transport_error)?;

    let response_status = response.status().as_u16();
    debug!(status = response_status, "notification API responded");

    let response_text = response
        .body_mut()
        .read_to_string()
        .map_err(classify_transport_error)?;

    if response_status != 200 {
        warn!(status = response_status, "notification API rejected the request");
        return Err(SendError::Api {
            status: response_status,
            body: ApiErrorBody::parse(response_text),
        });
    }

    serde_json::from_str(&response_text)
        .map_err(|e| SendError::Unexpected(format!("invalid JSON in API response: {}", e)))
}

/// Maps a ureq failure to the timeout/connection/unexpected classification.
fn classify_transport_error(error: ureq::Error) -> SendError {
    let classified = match &error {
        ureq::Error::Timeout(_) => SendError::Timeout,
        ureq::Error::Io(e) if is_timeout(e) => SendError::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
            SendError::Connection(error.to_string())
        }
        ureq::Error::Io(e) if is_connection_failure(e) => SendError::Connection(e.to_string()),
        _ => SendError::Unexpected(error.to_string()),
    };
    warn!(error = %classified, "notification request failed");
    classified
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn is_connection_failure(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::AddrNotAvailable
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::net::TcpListener;

    const DELIVERED: &str =
        r#"{"sent":1,"failed":0,"total":1,"details":[{"endpoint":"abc...","success":true}]}"#;

    fn request() -> NotificationRequest {
        NotificationRequest {
            user_id: "u-1".into(),
            title: "🧪 Teste".into(),
            body: "corpo".into(),
            url: "/dashboard".into(),
        }
    }

    fn endpoint(server: &MockServer) -> Endpoint {
        Endpoint {
            url: server.url("/api/notify"),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn posts_json_and_parses_result() {
        let server = MockServer::start();
        let notify = server.mock(|when, then| {
            when.method(POST)
                .path("/api/notify")
                .header("content-type", "application/json")
                .json_body(json!({
                    "user_id": "u-1",
                    "title": "🧪 Teste",
                    "body": "corpo",
                    "url": "/dashboard"
                }));
            then.status(200)
                .header("content-type", "application/json")
                .body(DELIVERED);
        });

        let result = send_notification(&request(), &endpoint(&server)).unwrap();

        notify.assert();
        assert_eq!(result.sent, 1);
        assert_eq!(result.details.len(), 1);
    }

    #[test]
    fn negative_counts_are_accepted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/notify");
            then.status(200).body(r#"{"sent":1,"failed":-1,"total":1}"#);
        });

        let result = send_notification(&request(), &endpoint(&server)).unwrap();
        assert_eq!(result.failed, -1);
    }

    #[test]
    fn non_200_is_api_error_with_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/notify");
            then.status(500).body(r#"{"error":"boom"}"#);
        });

        match send_notification(&request(), &endpoint(&server)) {
            Err(SendError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, ApiErrorBody::Json(json!({"error": "boom"})));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn non_200_keeps_raw_text_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/notify");
            then.status(404).body("no such route");
        });

        match send_notification(&request(), &endpoint(&server)) {
            Err(SendError::Api { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, ApiErrorBody::Text("no such route".into()));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_success_body_is_unexpected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/notify");
            then.status(200).body("not json");
        });

        assert!(matches!(
            send_notification(&request(), &endpoint(&server)),
            Err(SendError::Unexpected(_))
        ));
    }

    #[test]
    fn slow_server_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/notify");
            then.status(200).body("{}").delay(Duration::from_secs(3));
        });

        let endpoint = Endpoint {
            url: server.url("/api/notify"),
            timeout: Duration::from_millis(500),
        };
        assert!(matches!(
            send_notification(&request(), &endpoint),
            Err(SendError::Timeout)
        ));
    }

    #[test]
    fn closed_port_is_connection_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let endpoint = Endpoint {
            url: format!("http://127.0.0.1:{}/api/notify", port),
            timeout: Duration::from_secs(5),
        };

        assert!(matches!(
            send_notification(&request(), &endpoint),
            Err(SendError::Connection(_))
        ));
    }

    #[test]
    fn default_endpoint_is_the_compiled_in_api() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.url, API_URL);
        assert_eq!(endpoint.timeout, Duration::from_secs(10));
    }
}
