//! 标准化错误处理
//!
//! 探测过程中可能出现的三类失败：网络、HTTP 状态、响应解析。
//! 三者在终端上的呈现方式相同，但调用方可以按变体区分处理。

use thiserror::Error;

/// 探测错误类型
#[derive(Error, Debug)]
pub enum ProbeError {
    /// 网络层错误（DNS、连接被拒绝、TLS、超时等）
    #[error("{0}")]
    Network(String),

    /// 服务端返回非 2xx 状态码
    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// 响应体解析失败
    #[error("failed to parse response body: {0}")]
    Parse(String),
}

impl ProbeError {
    /// 由状态码构造 HTTP 错误，状态文本取标准原因短语
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ProbeError::HttpStatus {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// 错误类别名称，用于结构化日志
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Network(_) => "network",
            ProbeError::HttpStatus { .. } => "http_status",
            ProbeError::Parse(_) => "parse",
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProbeError::Parse(err.to_string())
        } else {
            ProbeError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Parse(err.to_string())
    }
}

/// 项目结果类型别名
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = ProbeError::from_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert_eq!(err.kind(), "http_status");
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ProbeError = json_err.into();
        assert!(matches!(err, ProbeError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse response body"));
    }

    #[test]
    fn test_network_message_passthrough() {
        let err = ProbeError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.kind(), "network");
    }
}
