use std::time::Duration;

use clap::Parser;

use crate::infrastructure::logger::LogFormat;

/// 默认项目 ID
pub const DEFAULT_PROJECT_ID: &str = "m2flutter-1d466";

/// Firestore REST 服务地址
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// 默认探测的集合
pub const DEFAULT_COLLECTION: &str = "products";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Probe a Firestore project over REST and report the first document"
)]
pub struct ProbeConfig {
    /// Firestore 项目 ID
    #[arg(long, env = "FIRESTORE_PROJECT_ID", default_value = DEFAULT_PROJECT_ID)]
    pub project_id: String,

    /// Web API Key（当前请求不会携带，仅供后续鉴权调用）
    #[arg(long, env = "FIRESTORE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// REST 服务根地址（可指向本地模拟器）
    #[arg(long, env = "FIRESTORE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// 集合名称
    #[arg(long, env = "FIRESTORE_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// 请求超时秒数，不设置则一直等待
    #[arg(long, env = "PROBE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// 日志格式: pretty, compact, json
    #[arg(long, env = "LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,
}

impl ProbeConfig {
    /// 以指定项目 ID 构造配置，其余取默认值
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout_secs: None,
            log_format: LogFormat::Compact,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.project_id.trim().is_empty() {
            anyhow::bail!("FIRESTORE_PROJECT_ID must not be empty");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("FIRESTORE_BASE_URL must start with http:// or https://");
        }
        if self.timeout_secs == Some(0) {
            anyhow::bail!("PROBE_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}
