//! Firestore REST 客户端
//!
//! 只实现探测所需的一个调用：列出集合中的文档。

use std::time::Duration;

use tracing::debug;

use crate::domain::ListDocumentsResponse;
use crate::errors::{ProbeError, Result};

#[derive(Debug, Clone)]
pub struct FirestoreClient {
    base_url: String,
    http: reqwest::Client,
}

impl FirestoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// 带请求超时的客户端，`None` 表示不设超时
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 集合文档列表的 URL
    ///
    /// 项目 ID 和集合名原样插入路径，不做编码。
    pub fn documents_url(&self, project_id: &str, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url.trim_end_matches('/'),
            project_id,
            collection
        )
    }

    /// 发出 GET 请求，等到响应头返回为止
    ///
    /// 不附带任何请求头、请求体或凭据。
    pub async fn send(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "sending list documents request");
        let response = self.http.get(url).send().await?;
        debug!(status = response.status().as_u16(), "response headers received");
        Ok(response)
    }

    /// 检查状态码并解析响应体
    pub async fn read_documents(response: reqwest::Response) -> Result<ListDocumentsResponse> {
        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::from_status(status));
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;
        Ok(parsed)
    }

    /// 一次性完成请求与解析
    pub async fn list_documents(
        &self,
        project_id: &str,
        collection: &str,
    ) -> Result<ListDocumentsResponse> {
        let url = self.documents_url(project_id, collection);
        let response = self.send(&url).await?;
        Self::read_documents(response).await
    }
}
