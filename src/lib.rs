//! Firestore 连通性探测
//!
//! 向 Firestore REST 接口发出一次列表请求，输出连接诊断信息和集合中的首条记录。
//!
//! # 架构分层
//!
//! - `domain`: 响应模型和字段提取
//! - `infrastructure`: HTTP 客户端、日志
//! - `application`: 探测流程和输出

pub mod config;
pub mod errors;

// 领域层
pub mod domain;

// 基础设施层
pub mod infrastructure;

// 应用层
pub mod application;

pub use application::output::{CliOutput, MemoryOutput, Output, OutputLine};
pub use application::probe::{ConnectivityProbe, ProbeReport, ProbeSummary};
pub use config::ProbeConfig;
pub use domain::{Document, ListDocumentsResponse, ProductPreview, Value};
pub use errors::{ProbeError, Result};
pub use infrastructure::firestore::FirestoreClient;
pub use infrastructure::logger;

/// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
