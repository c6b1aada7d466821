use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::{Boundary, GroupBuyRecord, GroupBuyStatus};

/// Group-buy as sent by the backend.
///
/// Some endpoints use camelCase keys; both spellings land here.
#[derive(Debug, Deserialize)]
pub struct GroupBuy {
    pub id: u64,

    #[serde(default, alias = "name")]
    pub title: Option<String>,

    pub status: GroupBuyStatus,

    #[serde(default, alias = "startTime")]
    pub start_time: Option<String>,

    #[serde(default, alias = "endTime")]
    pub end_time: Option<String>,

    #[serde(default, alias = "finalSelectionEnd")]
    pub final_selection_end: Option<String>,

    #[serde(default, alias = "sellerSelectionEnd")]
    pub seller_selection_end: Option<String>,
}

impl From<GroupBuy> for GroupBuyRecord {
    fn from(wire: GroupBuy) -> Self {
        Self {
            id: wire.id,
            title: wire.title.filter(|t| !t.trim().is_empty()),
            status: wire.status,
            start_time: Boundary::from(wire.start_time.as_deref()),
            end_time: Boundary::from(wire.end_time.as_deref()),
            final_selection_end: Boundary::from(wire.final_selection_end.as_deref()),
            seller_selection_end: Boundary::from(wire.seller_selection_end.as_deref()),
        }
    }
}

/// Decode a response body into a canonical record.
pub fn parse_groupbuy(body: &str) -> Result<GroupBuyRecord, ApiError> {
    let wire: GroupBuy = serde_json::from_str(body)?;
    Ok(wire.into())
}

/// Read-only client for the group-buy backend.
#[derive(Debug, Clone)]
pub struct GroupBuyClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GroupBuyClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn groupbuy_url(&self, id: u64) -> String {
        format!("{}/groupbuys/{}/", self.base_url, id)
    }

    /// Fetch one group-buy by id.
    pub async fn fetch_groupbuy(&self, id: u64) -> Result<GroupBuyRecord, ApiError> {
        let url = self.groupbuy_url(id);
        debug!(%url, "fetching group-buy");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_groupbuy(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::parse_timestamp;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            token: None,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_parse_snake_case_body() {
        let record = parse_groupbuy(
            r#"{
                "id": 12,
                "title": "에어팟 프로 공구",
                "status": "final_selection_buyers",
                "start_time": "2025-04-01T00:00:00+09:00",
                "end_time": "2025-04-03T00:00:00",
                "final_selection_end": "2025-04-04T00:00:00+09:00",
                "seller_selection_end": null,
                "current_participants": 8
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, 12);
        assert_eq!(record.title.as_deref(), Some("에어팟 프로 공구"));
        assert_eq!(record.status, GroupBuyStatus::FinalSelectionBuyers);
        assert_eq!(record.start_time, parse_timestamp("2025-04-01T00:00:00+09:00"));
        // naive → KST
        assert_eq!(record.end_time, parse_timestamp("2025-04-03T00:00:00+09:00"));
        assert_eq!(record.seller_selection_end, Boundary::Absent);
    }

    #[test]
    fn test_parse_camel_case_body() {
        let record = parse_groupbuy(
            r#"{
                "id": 5,
                "status": "recruiting",
                "startTime": "2025-04-01T00:00:00+09:00",
                "endTime": "2025-04-03T00:00:00+09:00"
            }"#,
        )
        .unwrap();

        assert_eq!(record.status, GroupBuyStatus::Recruiting);
        assert_eq!(record.end_time, parse_timestamp("2025-04-03T00:00:00+09:00"));
        assert_eq!(record.final_selection_end, Boundary::Absent);
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_parse_keeps_bad_fields_as_malformed() {
        let record = parse_groupbuy(
            r#"{"id": 1, "status": "settling", "end_time": "tomorrow", "title": "  "}"#,
        )
        .unwrap();

        assert_eq!(record.status, GroupBuyStatus::Unknown("settling".into()));
        assert_eq!(record.end_time, Boundary::Malformed("tomorrow".into()));
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(parse_groupbuy("[]"), Err(ApiError::Decode(_))));
        assert!(matches!(parse_groupbuy("{\"status\": \"recruiting\"}"), Err(ApiError::Decode(_))));
    }

    const BODY: &str = r#"{
        "id": 31,
        "status": "bidding",
        "start_time": "2025-04-01T00:00:00+09:00",
        "end_time": "2025-04-03T00:00:00+09:00"
    }"#;

    #[tokio::test]
    async fn test_fetch_decodes_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/groupbuys/31/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let client = GroupBuyClient::new(&api_config(&format!("{}/api", server.uri()))).unwrap();
        let record = client.fetch_groupbuy(31).await.unwrap();

        assert_eq!(record.id, 31);
        assert_eq!(record.status, GroupBuyStatus::Bidding);
        assert_eq!(record.end_time, parse_timestamp("2025-04-03T00:00:00+09:00"));
    }

    #[tokio::test]
    async fn test_fetch_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groupbuys/31/"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = api_config(&server.uri());
        config.token = Some("secret-token".to_string());
        let client = GroupBuyClient::new(&config).unwrap();

        // unmatched requests get wiremock's default 404
        assert_eq!(client.fetch_groupbuy(31).await.unwrap().id, 31);
    }

    #[tokio::test]
    async fn test_fetch_without_token_has_no_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groupbuys/31/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .mount(&server)
            .await;

        let client = GroupBuyClient::new(&api_config(&server.uri())).unwrap();
        client.fetch_groupbuy(31).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groupbuys/404/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = GroupBuyClient::new(&api_config(&server.uri())).unwrap();
        let err = client.fetch_groupbuy(404).await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(404)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groupbuys/7/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GroupBuyClient::new(&api_config(&server.uri())).unwrap();
        let err = client.fetch_groupbuy(7).await.unwrap_err();

        match err {
            ApiError::Status { status, url } => {
                assert_eq!(status, 500);
                assert!(url.ends_with("/groupbuys/7/"));
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_bad_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groupbuys/8/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = GroupBuyClient::new(&api_config(&server.uri())).unwrap();
        let err = client.fetch_groupbuy(8).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn test_groupbuy_url_trims_trailing_slash() {
        let client = GroupBuyClient::new(&api_config("https://api.example.com/api/")).unwrap();
        assert_eq!(client.groupbuy_url(31), "https://api.example.com/api/groupbuys/31/");

        let client = GroupBuyClient::new(&api_config("http://localhost:8000")).unwrap();
        assert_eq!(client.groupbuy_url(1), "http://localhost:8000/groupbuys/1/");
    }
}
