//! 日志模块
//!
//! 探测结果本身直接写到终端，这里的 tracing 日志只用于诊断请求过程：
//! - 支持 pretty / compact / json 三种格式
//! - 日志写到 stderr，避免与 stdout 上的探测报告混在一起
//! - 每次探测带一个运行 ID
//! - 凭据脱敏、请求耗时记录

use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// 日志格式类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    /// 多行人类可读格式
    Pretty,
    /// 紧凑单行格式
    Compact,
    /// JSON 结构化格式（适合日志收集系统）
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `RUST_LOG` 未设置时使用的过滤指令
    pub default_filter: String,
    /// 是否启用颜色（json 格式忽略）
    pub enable_color: bool,
    pub show_target: bool,
    /// 是否显示文件名和行号
    pub show_file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            default_filter: "warn".to_string(),
            enable_color: true,
            show_target: true,
            show_file: false,
        }
    }
}

impl LogConfig {
    pub fn with_format(format: LogFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }
}

/// 初始化日志系统
///
/// # 环境变量
/// - `RUST_LOG`: 日志级别过滤（如 `info`, `debug`, `firestore_probe=trace`）
///
/// 重复初始化会返回错误而不是 panic。
pub fn init(config: LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_target(config.show_target)
                .with_file(config.show_file)
                .with_line_number(config.show_file)
                .with_ansi(config.enable_color);
            subscriber.with(fmt_layer).try_init()?;
        }
        LogFormat::Compact => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(config.show_target)
                .with_file(config.show_file)
                .with_line_number(config.show_file)
                .with_ansi(config.enable_color);
            subscriber.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(config.show_target)
                .with_file(config.show_file)
                .with_line_number(config.show_file)
                .with_current_span(true)
                .with_span_list(true);
            subscriber.with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}

/// 单次探测的追踪上下文
#[derive(Debug, Clone)]
pub struct RunContext {
    /// 运行唯一 ID
    pub run_id: String,
    pub start_time: Instant,
}

impl RunContext {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// 带运行 ID 的 span
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!("probe", run_id = %self.run_id)
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 性能计时器，drop 时记录耗时
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            target: "metrics",
            operation = %self.name,
            elapsed_ms = %format!("{:.2}", elapsed_ms),
            "operation completed"
        );
    }
}

/// 敏感信息脱敏工具
pub struct Sanitizer;

impl Sanitizer {
    /// 脱敏 API 密钥 - 只保留前 8 位和后 4 位
    pub fn api_key(key: &str) -> String {
        if key.chars().count() <= 16 {
            return "***".to_string();
        }
        let head: String = key.chars().take(8).collect();
        let tail: String = key.chars().skip(key.chars().count() - 4).collect();
        format!("{}...{}", head, tail)
    }
}
