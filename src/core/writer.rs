use crate::domain::model::Artifact;
use crate::domain::ports::Storage;
use crate::utils::error::{KickstartError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<String>,
}

/// 依序寫出所有檔案，每個只寫一次。任一失敗即停止並回報該檔路徑。
pub async fn write_artifacts<S: Storage>(
    storage: &S,
    root: &str,
    artifacts: &[Artifact],
) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        let target = if root.is_empty() {
            artifact.path.clone()
        } else {
            format!("{}/{}", root.trim_end_matches('/'), artifact.path)
        };

        tracing::debug!("Writing {} ({} bytes)", target, artifact.content.len());
        if let Err(e) = storage.write_file(&target, artifact.content.as_bytes()).await {
            tracing::error!("❌ Failed to write {}: {}", target, e);
            return Err(KickstartError::ArtifactWriteError {
                path: target,
                written: report.written.len(),
                source: Box::new(e),
            });
        }
        report.written.push(target);
    }

    Ok(report)
}
