//! HTTP implementation of [`AskApi`] on top of reqwest.

use crate::client::{endpoints, AskApi};
use crate::types::{
    ApiInfo, AskRequest, AskResponse, BatchSearchQuery, BatchSearchResponse, SearchQuery,
    SearchResponse,
};
use lexask_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the question-answering service.
pub struct HttpAskClient {
    /// Base URL without a trailing slash
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAskClient {
    /// Create a client for `base_url` with an optional request timeout.
    ///
    /// Without a timeout a request waits for as long as the service takes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        reqwest::Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid server URL '{}': {}", base_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> AppResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::decode(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> AppResult<R> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::decode(response).await
    }

    /// Map the status and body of a response to the typed result.
    ///
    /// Error bodies are only logged; their structure is not interpreted.
    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> AppResult<R> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("Error body ({}): {}", status, error_text);
            return Err(AppError::Transport(format!(
                "API request failed with status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("Unexpected response body: {}", e)))
    }
}

#[async_trait::async_trait]
impl AskApi for HttpAskClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ask(&self, request: &AskRequest) -> AppResult<AskResponse> {
        tracing::info!(compare = request.compare, "Sending question to {}", self.base_url);

        let response: AskResponse = self.post_json(endpoints::ASK, request).await?;

        tracing::info!(
            references = response.rag_response.references.len(),
            direct = response.direct_response.is_some(),
            "Received answer"
        );
        Ok(response)
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<SearchResponse> {
        tracing::info!("Searching for: {}", query.query);
        self.post_json(endpoints::SEARCH, query).await
    }

    async fn batch_search(&self, query: &BatchSearchQuery) -> AppResult<BatchSearchResponse> {
        tracing::info!("Batch searching {} queries", query.queries.len());
        self.post_json(endpoints::BATCH_SEARCH, query).await
    }

    async fn info(&self) -> AppResult<ApiInfo> {
        self.get_json(endpoints::ROOT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexask_core::ErrorKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP exchange and hand back the raw request.
    async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{}", addr), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let body = raw.split("\r\n\r\n").nth(1).unwrap_or("");
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_ask_posts_json_and_decodes_answer() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"rag_response":{"answer":"民事诉讼是……","references":[{"text":"短文本","score":0.91}]}}"#,
        )
        .await;

        let client = HttpAskClient::new(&base_url, None).unwrap();
        let response = client
            .ask(&AskRequest::new("什么是民事诉讼？", false))
            .await
            .unwrap();

        assert_eq!(response.rag_response.answer, "民事诉讼是……");
        assert_eq!(response.rag_response.references[0].score, 0.91);
        assert!(response.direct_response.is_none());

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api/ask HTTP/1.1"));
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert_eq!(
            request_body(&raw),
            serde_json::json!({"query": "什么是民事诉讼？", "compare": false})
        );
    }

    #[tokio::test]
    async fn test_server_error_is_transport_failure() {
        let (base_url, server) =
            serve_once("500 Internal Server Error", r#"{"detail":"系统未初始化"}"#).await;

        let client = HttpAskClient::new(&base_url, None).unwrap();
        let err = client.ask(&AskRequest::new("q", true)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("500"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_failure() {
        let (base_url, server) = serve_once("200 OK", r#"{"answer":"wrong shape"}"#).await;

        let client = HttpAskClient::new(&base_url, None).unwrap();
        let err = client.ask(&AskRequest::new("q", false)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpAskClient::new(&format!("http://{}", addr), None).unwrap();
        let err = client.ask(&AskRequest::new("q", false)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_search_sends_only_set_fields() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"results":[{"rank":1,"text":"合伙债务","score":0.8123}]}"#,
        )
        .await;

        let client = HttpAskClient::new(&base_url, None).unwrap();
        let response = client
            .search(&SearchQuery::new("合伙").with_top_k(2))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].text, "合伙债务");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /search HTTP/1.1"));
        assert_eq!(
            request_body(&raw),
            serde_json::json!({"query": "合伙", "top_k": 2})
        );
    }

    #[tokio::test]
    async fn test_info_uses_get() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"message":"欢迎使用法律文档检索系统API"}"#).await;

        let client = HttpAskClient::new(&format!("{}/", base_url), None).unwrap();
        let info = client.info().await.unwrap();

        assert_eq!(info.message, "欢迎使用法律文档检索系统API");
        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /api HTTP/1.1"));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        match HttpAskClient::new("not a url", None) {
            Err(err) => assert_eq!(err.kind(), ErrorKind::Config),
            Ok(_) => panic!("Expected error for invalid URL"),
        }
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpAskClient::new("http://localhost:8000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(endpoints::ASK), "http://localhost:8000/api/ask");
    }
}
