//! Root status endpoint.

use axum::Json;
use serde::Serialize;

/// Reported service status.
pub const STATUS: &str = "secure";

/// Reported service version. Fixed, independent of the crate version.
pub const VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl StatusResponse {
    pub fn current() -> Self {
        Self {
            status: STATUS,
            version: VERSION,
        }
    }
}

/// ANY / — returns the fixed service status, whatever the request carried.
pub async fn get() -> Json<StatusResponse> {
    Json(StatusResponse::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_fields_in_order() {
        let body = serde_json::to_string(&StatusResponse::current()).unwrap();
        assert_eq!(body, r#"{"status":"secure","version":"1.0.0"}"#);
    }

    #[test]
    fn test_current_uses_constants() {
        let response = StatusResponse::current();
        assert_eq!(response.status, STATUS);
        assert_eq!(response.version, VERSION);
    }

    #[tokio::test]
    async fn test_handler_returns_current_status() {
        let Json(response) = get().await;
        assert_eq!(response, StatusResponse::current());
    }
}
