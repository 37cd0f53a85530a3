use crate::config::Credentials;
use crate::ports::outbound::{ApiError, ApiTransport, Method};
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Okta governance API transport over a blocking reqwest client.
///
/// One authenticated session is built per run and reused for every call.
/// 429 responses wait out the provider's reset hint and retry; network
/// errors retry with linearly increasing backoff; every other non-2xx
/// maps straight into the `ApiError` taxonomy with the response body
/// attached for diagnostics.
pub struct OktaTransport {
    client: Client,
    base_url: String,
}

impl OktaTransport {
    const TIMEOUT_SECONDS: u64 = 10;
    const MAX_ATTEMPTS: u32 = 3;
    const RETRY_DELAY_SECS: u64 = 2;
    const RATE_LIMIT_FALLBACK_SECS: i64 = 60;

    pub fn new(credentials: &Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("SSWS {}", credentials.api_token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let version = env!("CARGO_PKG_VERSION");
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("oig-sync/{}", version))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: credentials.org_url(),
        })
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> std::result::Result<reqwest::blocking::Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        let reqwest_method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(reqwest_method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder.send()
    }

    /// How long to wait before retrying a 429, from the provider's
    /// epoch-seconds reset header. Minimum one second; 60s when the
    /// header is absent or unparseable.
    fn rate_limit_wait(reset_header: Option<&str>, now_epoch: i64) -> Duration {
        let reset = reset_header
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(now_epoch + Self::RATE_LIMIT_FALLBACK_SECS);
        Duration::from_secs((reset - now_epoch).max(1) as u64)
    }

    /// Empty 2xx bodies normalize to JSON null; everything else must
    /// parse as JSON.
    fn parse_body(status: u16, text: &str) -> std::result::Result<Value, ApiError> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(text).map_err(|_| ApiError::Unexpected {
            status,
            body: text.to_string(),
        })
    }

    fn map_failure(path: &str, status: u16, body: String) -> ApiError {
        match status {
            401 | 403 => ApiError::Auth { body },
            404 => ApiError::NotFound {
                path: path.to_string(),
            },
            409 => ApiError::Conflict { body },
            500..=599 => ApiError::Server { status, body },
            _ => ApiError::Unexpected { status, body },
        }
    }
}

impl ApiTransport for OktaTransport {
    fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> std::result::Result<Value, ApiError> {
        for attempt in 1..=Self::MAX_ATTEMPTS {
            let response = match self.request(method, path, query, body) {
                Ok(response) => response,
                Err(e) => {
                    if attempt < Self::MAX_ATTEMPTS {
                        std::thread::sleep(Duration::from_secs(
                            Self::RETRY_DELAY_SECS * attempt as u64,
                        ));
                        continue;
                    }
                    return Err(ApiError::Network {
                        details: e.to_string(),
                    });
                }
            };

            let status = response.status().as_u16();

            if status == 429 {
                if attempt < Self::MAX_ATTEMPTS {
                    let reset = response
                        .headers()
                        .get("x-rate-limit-reset")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    let wait = Self::rate_limit_wait(
                        reset.as_deref(),
                        chrono::Utc::now().timestamp(),
                    );
                    eprintln!("⏳ Rate limited. Waiting {} second(s)...", wait.as_secs());
                    std::thread::sleep(wait);
                    continue;
                }
                return Err(ApiError::RateLimited);
            }

            let text = response.text().map_err(|e| ApiError::Network {
                details: e.to_string(),
            })?;

            if (200..300).contains(&status) {
                return Self::parse_body(status, &text);
            }
            return Err(Self::map_failure(path, status, text));
        }

        // Unreachable: the final attempt always returns above.
        Err(ApiError::RateLimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            org_name: "acme".to_string(),
            base_url: "okta.com".to_string(),
            api_token: "test-token".to_string(),
        }
    }

    #[test]
    fn test_transport_creation() {
        let transport = OktaTransport::new(&credentials());
        assert!(transport.is_ok());
        assert_eq!(transport.unwrap().base_url, "https://acme.okta.com");
    }

    #[test]
    fn test_rate_limit_wait_from_header() {
        let wait = OktaTransport::rate_limit_wait(Some("1100"), 1000);
        assert_eq!(wait, Duration::from_secs(100));
    }

    #[test]
    fn test_rate_limit_wait_past_reset_clamps_to_one_second() {
        let wait = OktaTransport::rate_limit_wait(Some("900"), 1000);
        assert_eq!(wait, Duration::from_secs(1));
    }

    #[test]
    fn test_rate_limit_wait_fallback_on_missing_or_garbled_header() {
        assert_eq!(
            OktaTransport::rate_limit_wait(None, 1000),
            Duration::from_secs(60)
        );
        assert_eq!(
            OktaTransport::rate_limit_wait(Some("soon"), 1000),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn test_parse_body_empty_is_null() {
        assert_eq!(OktaTransport::parse_body(204, "").unwrap(), Value::Null);
        assert_eq!(OktaTransport::parse_body(200, "  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_body_json() {
        let value = OktaTransport::parse_body(200, r#"{"data": []}"#).unwrap();
        assert!(value.get("data").is_some());
    }

    #[test]
    fn test_parse_body_garbage_is_unexpected() {
        let err = OktaTransport::parse_body(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Unexpected { status: 200, .. }));
    }

    #[test]
    fn test_map_failure_taxonomy() {
        assert!(matches!(
            OktaTransport::map_failure("/p", 401, String::new()),
            ApiError::Auth { .. }
        ));
        assert!(matches!(
            OktaTransport::map_failure("/p", 404, String::new()),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            OktaTransport::map_failure("/p", 409, String::new()),
            ApiError::Conflict { .. }
        ));
        assert!(matches!(
            OktaTransport::map_failure("/p", 503, String::new()),
            ApiError::Server { status: 503, .. }
        ));
        assert!(matches!(
            OktaTransport::map_failure("/p", 418, String::new()),
            ApiError::Unexpected { status: 418, .. }
        ));
    }
}
