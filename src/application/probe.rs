//! 连通性探测
//!
//! 向集合发出一次 GET，按固定顺序输出诊断信息：
//! 启动信息 → 状态码 → 文档数量与首个商品，或错误信息与排查提示。
//! 所有失败都走同一条输出路径，不重试。

use std::time::Duration;

use tracing::{debug, info, warn, Instrument};

use crate::application::output::Output;
use crate::config::ProbeConfig;
use crate::domain::{ListDocumentsResponse, ProductPreview};
use crate::errors::{ProbeError, Result};
use crate::infrastructure::firestore::FirestoreClient;
use crate::infrastructure::logger::{RunContext, Sanitizer, Timer};

pub const BANNER: &str = "🔥 Testing Firestore connection...";
pub const CONNECTING: &str = "📡 Attempting connection...";
pub const SUCCESS: &str = "✅ Connection successful!";
pub const FIRST_PRODUCT: &str = "🛍️ First product:";
pub const CHECK_HEADER: &str = "🔧 Check:";

/// 失败后输出的排查提示
pub const HINTS: [&str; 3] = [
    "   - Firestore rules (is read access allowed?)",
    "   - Project configuration",
    "   - Internet connection",
];

/// 成功时的摘要
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSummary {
    pub document_count: usize,
    pub first: Option<ProductPreview>,
}

impl ProbeSummary {
    pub fn from_response(body: &ListDocumentsResponse) -> Self {
        Self {
            document_count: body.document_count(),
            first: body.first().map(ProductPreview::from_document),
        }
    }
}

/// 一次探测的结果
#[derive(Debug)]
pub struct ProbeReport {
    pub url: String,
    /// 收到响应头时的状态码，网络失败时为 `None`
    pub status: Option<u16>,
    pub outcome: Result<ProbeSummary>,
    pub elapsed: Duration,
}

impl ProbeReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct ConnectivityProbe {
    config: ProbeConfig,
    client: FirestoreClient,
}

impl ConnectivityProbe {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let client = FirestoreClient::with_timeout(config.base_url.clone(), config.timeout())?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 目标 URL
    pub fn url(&self) -> String {
        self.client
            .documents_url(&self.config.project_id, &self.config.collection)
    }

    /// 执行探测并把报告写到 `out`
    pub async fn run(&self, out: &dyn Output) -> ProbeReport {
        let ctx = RunContext::new();
        let span = ctx.span();
        self.run_with_context(out, &ctx).instrument(span).await
    }

    async fn run_with_context(&self, out: &dyn Output, ctx: &RunContext) -> ProbeReport {
        let url = self.url();

        out.line(BANNER);
        out.line(&format!("📁 Project ID: {}", self.config.project_id));
        out.line(&format!("🌐 Test URL: {}", url));
        out.line(CONNECTING);

        if let Some(key) = &self.config.api_key {
            debug!(
                api_key = %Sanitizer::api_key(key),
                "api key configured, not attached to request"
            );
        }

        let mut status = None;
        let outcome = match self.fetch(&url, out, &mut status).await {
            Ok(body) => {
                let summary = ProbeSummary::from_response(&body);
                report_success(out, &summary);
                info!(documents = summary.document_count, "probe succeeded");
                Ok(summary)
            }
            Err(err) => {
                report_failure(out, &err);
                warn!(kind = err.kind(), error = %err, "probe failed");
                Err(err)
            }
        };

        ProbeReport {
            url,
            status,
            outcome,
            elapsed: ctx.elapsed(),
        }
    }

    async fn fetch(
        &self,
        url: &str,
        out: &dyn Output,
        status: &mut Option<u16>,
    ) -> Result<ListDocumentsResponse> {
        let response = {
            let _timer = Timer::new("list_documents");
            self.client.send(url).await?
        };

        let code = response.status().as_u16();
        *status = Some(code);
        out.line(&format!("📊 Status: {}", code));

        FirestoreClient::read_documents(response).await
    }
}

fn report_success(out: &dyn Output, summary: &ProbeSummary) {
    out.line(SUCCESS);
    out.line(&format!("📦 Documents found: {}", summary.document_count));

    if let Some(first) = &summary.first {
        out.line(FIRST_PRODUCT);
        out.line(&format!("   - Name: {}", first.name));
        out.line(&format!("   - Price: {}", first.price));
        out.line(&format!("   - Featured: {}", first.featured));
    }
}

fn report_failure(out: &dyn Output, err: &ProbeError) {
    out.error_line(&format!("❌ Connection error: {}", err));
    out.line(CHECK_HEADER);
    for hint in HINTS {
        out.line(hint);
    }
}
