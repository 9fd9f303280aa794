//! Transaction categorization client
//!
//! Asks the budgeting backend to assign categories to a user's
//! transactions. The client is constructed explicitly around a
//! `CategorizationTransport`, so tests drive it with an in-memory fake and
//! nothing is shared process-wide.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::settings::CategorizationSettings;
use crate::error::{BudgetLensError, BudgetLensResult};
use crate::models::{TransactionId, UserId};

/// Endpoint path, relative to the backend base URL
pub const CATEGORIZE_PATH: &str = "transactions/categorize";

/// Raw response from a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to a path on the backend
pub trait CategorizationTransport {
    fn post_json(&self, path: &str, body: &serde_json::Value) -> BudgetLensResult<TransportResponse>;
}

/// Transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> BudgetLensResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|err| BudgetLensError::Config(format!("invalid base_url: {err}")))?;
        // Url::join drops the last segment unless the base ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| BudgetLensError::Transport(err.to_string()))?;

        Ok(Self { base_url, http })
    }

    pub fn from_settings(settings: &CategorizationSettings) -> BudgetLensResult<Self> {
        Self::new(&settings.base_url, Duration::from_secs(settings.timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl CategorizationTransport for HttpTransport {
    fn post_json(&self, path: &str, body: &serde_json::Value) -> BudgetLensResult<TransportResponse> {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|err| BudgetLensError::Config(format!("invalid endpoint {path}: {err}")))?;

        let res = self
            .http
            .post(endpoint)
            .json(body)
            .send()
            .map_err(|err| BudgetLensError::Transport(err.to_string()))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .map_err(|err| BudgetLensError::Transport(err.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

/// Request to categorize transactions
///
/// An empty `transaction_ids` asks the backend to categorize every
/// uncategorized transaction for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizeRequest {
    pub user_id: UserId,
    #[serde(default)]
    pub transaction_ids: Vec<TransactionId>,
}

/// Backend summary of a categorization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizeResponse {
    pub categorized: usize,
    #[serde(default)]
    pub uncategorized: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the categorization endpoint
#[derive(Debug, Clone)]
pub struct CategorizationClient<T> {
    transport: T,
}

impl<T: CategorizationTransport> CategorizationClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Trigger categorization on the backend
    pub fn categorize(&self, request: &CategorizeRequest) -> BudgetLensResult<CategorizeResponse> {
        let body = serde_json::to_value(request)?;
        tracing::info!(
            user = %request.user_id,
            transactions = request.transaction_ids.len(),
            "requesting transaction categorization"
        );

        let res = match self.transport.post_json(CATEGORIZE_PATH, &body) {
            Ok(res) => res,
            Err(err) => {
                tracing::warn!(error = %err, "categorization request failed");
                return Err(err);
            }
        };

        if res.is_success() {
            let summary: CategorizeResponse = serde_json::from_str(&res.body)?;
            tracing::info!(
                categorized = summary.categorized,
                uncategorized = summary.uncategorized,
                "categorization complete"
            );
            return Ok(summary);
        }

        let message = serde_json::from_str::<ErrorResponse>(&res.body)
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::warn!(status = res.status, %message, "categorization rejected");

        Err(BudgetLensError::Http {
            status: res.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records requests and answers with a canned response
    struct FakeTransport {
        response: BudgetLensResult<TransportResponse>,
        requests: RefCell<Vec<(String, serde_json::Value)>>,
    }

    impl FakeTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                response: Ok(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(BudgetLensError::Transport("connection refused".into())),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl CategorizationTransport for FakeTransport {
        fn post_json(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> BudgetLensResult<TransportResponse> {
            self.requests
                .borrow_mut()
                .push((path.to_string(), body.clone()));
            match &self.response {
                Ok(res) => Ok(res.clone()),
                Err(err) => Err(BudgetLensError::Transport(err.to_string())),
            }
        }
    }

    fn request() -> CategorizeRequest {
        CategorizeRequest {
            user_id: UserId::new(),
            transaction_ids: vec![TransactionId::new(), TransactionId::new()],
        }
    }

    #[test]
    fn test_successful_categorization() {
        let client = CategorizationClient::new(FakeTransport::answering(
            200,
            r#"{"categorized": 2, "uncategorized": 0}"#,
        ));
        let req = request();

        let summary = client.categorize(&req).unwrap();
        assert_eq!(summary.categorized, 2);
        assert_eq!(summary.uncategorized, 0);

        let requests = client.transport().requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, CATEGORIZE_PATH);
        assert_eq!(
            requests[0].1["user_id"],
            serde_json::Value::String(req.user_id.to_string())
        );
        assert_eq!(requests[0].1["transaction_ids"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_error_body_is_surfaced() {
        let client = CategorizationClient::new(FakeTransport::answering(
            422,
            r#"{"error": "unknown user"}"#,
        ));
        let err = client.categorize(&request()).unwrap_err();
        assert!(matches!(
            err,
            BudgetLensError::Http { status: 422, ref message } if message == "unknown user"
        ));
    }

    #[test]
    fn test_unparseable_error_body() {
        let client = CategorizationClient::new(FakeTransport::answering(500, "<html>"));
        let err = client.categorize(&request()).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: unknown error");
    }

    #[test]
    fn test_transport_failure() {
        let client = CategorizationClient::new(FakeTransport::failing());
        let err = client.categorize(&request()).unwrap_err();
        assert!(matches!(err, BudgetLensError::Transport(_)));
    }

    #[test]
    fn test_malformed_success_body() {
        let client = CategorizationClient::new(FakeTransport::answering(200, "not json"));
        let err = client.categorize(&request()).unwrap_err();
        assert!(matches!(err, BudgetLensError::Json(_)));
    }

    #[test]
    fn test_http_transport_base_url() {
        let transport =
            HttpTransport::new("http://localhost:8080/api", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.base_url().as_str(), "http://localhost:8080/api/");
        assert_eq!(
            transport.base_url().join(CATEGORIZE_PATH).unwrap().as_str(),
            "http://localhost:8080/api/transactions/categorize"
        );

        assert!(HttpTransport::new("not a url", Duration::from_secs(5)).is_err());
    }
}
