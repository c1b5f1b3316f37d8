use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use portsweep_common::{scan::HostReport, scanning::ResultSink};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Writes one `Open ports on <address>:` block per scanned host.
///
/// The file is truncated when the sink is created, so a run never mixes its
/// blocks with those of a previous run. Unresolved hosts leave no trace.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    pub async fn create(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path: PathBuf = path.into();
        let file = File::create(&path)
            .await
            .with_context(|| format!("failed to create results file {}", path.display()))?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultSink for FileSink {
    async fn record(&mut self, report: &HostReport) -> anyhow::Result<()> {
        let HostReport::Scanned(result) = report else {
            return Ok(());
        };

        self.file
            .write_all(result.report_block().as_bytes())
            .await
            .with_context(|| format!("failed to write results to {}", self.path.display()))?;
        self.file.flush().await?;
        Ok(())
    }

    async fn finish(&mut self) -> anyhow::Result<()> {
        self.file
            .sync_all()
            .await
            .with_context(|| format!("failed to sync {}", self.path.display()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
