use anyhow::Result;
use clap::Parser;
use firestore_probe::logger::{self, LogConfig};
use firestore_probe::{CliOutput, ConnectivityProbe, ProbeConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cfg = ProbeConfig::parse();
    logger::init(LogConfig::with_format(cfg.log_format))?;
    cfg.validate()?;

    info!(
        project_id = %cfg.project_id,
        collection = %cfg.collection,
        version = firestore_probe::VERSION,
        "starting probe"
    );

    let probe = ConnectivityProbe::new(cfg)?;
    let report = probe.run(&CliOutput::new()).await;

    // 失败已经输出到终端，退出码保持为 0
    info!(
        success = report.is_success(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "probe finished"
    );
    Ok(())
}
