use crate::core::synth::{synthesize, verify::verify};
use crate::core::writer::{write_artifacts, WriteReport};
use crate::core::{normalize::normalize, planner::plan, tiers::resolve};
use crate::domain::model::{Artifact, ArtifactPlan, PackageSet, ProjectSlug, ScaffoldRequest, Tier};
use crate::domain::ports::{ConfigProvider, Storage, Toolchain};
use crate::utils::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 純運算階段的結果，尚未有任何副作用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scaffold {
    pub slug: ProjectSlug,
    pub tier: Tier,
    pub packages: PackageSet,
    pub plan: ArtifactPlan,
    #[serde(skip)]
    pub artifacts: Vec<Artifact>,
}

impl Scaffold {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub slug: ProjectSlug,
    pub project_dir: PathBuf,
    pub report: WriteReport,
    pub dev_url: Option<String>,
}

/// normalize → resolve → plan → synthesize → audit。任一步失敗都不會有檔案產生。
pub fn prepare(request: &ScaffoldRequest) -> Result<Scaffold> {
    let slug = normalize(&request.raw_name)?;
    let packages = resolve(request.tier);
    let plan = plan(request.tier);
    let artifacts = synthesize(&plan, &packages, &slug);
    verify(&plan, &packages, &artifacts)?;

    Ok(Scaffold {
        slug,
        tier: request.tier,
        packages,
        plan,
        artifacts,
    })
}

pub struct ScaffoldEngine<S: Storage, T: Toolchain, C: ConfigProvider> {
    storage: S,
    toolchain: T,
    config: C,
}

impl<S: Storage, T: Toolchain, C: ConfigProvider> ScaffoldEngine<S, T, C> {
    pub fn new(storage: S, toolchain: T, config: C) -> Self {
        Self {
            storage,
            toolchain,
            config,
        }
    }

    /// 只跑純運算階段，不呼叫工具鏈也不寫檔
    pub fn dry_run(&self, request: &ScaffoldRequest) -> Result<Scaffold> {
        tracing::info!("🔍 DRY RUN MODE - nothing will be installed or written");
        let scaffold = prepare(request)?;
        tracing::info!(
            "📝 Would write {} files under {} and install {} packages",
            scaffold.artifacts.len(),
            Path::new(self.config.output_dir())
                .join(scaffold.slug.as_str())
                .display(),
            scaffold.packages.len()
        );
        Ok(scaffold)
    }

    pub async fn run(&self, request: &ScaffoldRequest) -> Result<ScaffoldOutcome> {
        tracing::info!("🧩 Preparing scaffold for tier '{}'", request.tier);
        let scaffold = prepare(request)?;
        tracing::info!(
            "📝 Planned {} files and {} packages for '{}'",
            scaffold.artifacts.len(),
            scaffold.packages.len(),
            scaffold.slug
        );

        let output_dir = Path::new(self.config.output_dir());
        let project_dir = output_dir.join(scaffold.slug.as_str());

        // Bootstrap 與 install 失敗時直接中止，不寫任何檔案
        tracing::info!(
            "🚀 Creating project \"{}\" with Vite + React...",
            scaffold.slug
        );
        self.toolchain.bootstrap(output_dir, &scaffold.slug).await?;

        if self.config.skip_install() {
            tracing::info!("⏭️  Skipping dependency installation");
        } else {
            tracing::info!(
                "📦 Installing packages for the \"{}\" tier...",
                scaffold.tier
            );
            self.toolchain.install(&project_dir, &scaffold.packages).await?;
        }

        tracing::info!("💾 Writing project files...");
        let report =
            write_artifacts(&self.storage, scaffold.slug.as_str(), &scaffold.artifacts).await?;
        tracing::info!("✅ Wrote {} files", report.written.len());

        let dev_url = self.launch(&project_dir).await;

        Ok(ScaffoldOutcome {
            slug: scaffold.slug,
            project_dir,
            report,
            dev_url,
        })
    }

    /// 啟動失敗只記錄警告，專案檔案已經完成
    async fn launch(&self, project_dir: &Path) -> Option<String> {
        let mut dev_url = None;

        if self.config.start_dev_server() {
            tracing::info!("▶️  Starting development server...");
            match self.toolchain.start_dev_server(project_dir).await {
                Ok(()) => {
                    let url = format!("http://localhost:{}", self.config.dev_port());
                    if self.config.open_browser() {
                        if let Err(e) = self.toolchain.open_browser(&url).await {
                            tracing::warn!("⚠️  Could not open browser: {}", e);
                        }
                    }
                    dev_url = Some(url);
                }
                Err(e) => tracing::warn!("⚠️  Could not start dev server: {}", e),
            }
        }

        if let Some(editor) = self.config.editor() {
            if let Err(e) = self.toolchain.open_editor(editor, project_dir).await {
                tracing::warn!("⚠️  Could not open editor '{}': {}", editor, e);
            }
        }

        dev_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PageId;
    use crate::utils::error::KickstartError;

    #[test]
    fn test_prepare_common_scenario() {
        let scaffold = prepare(&ScaffoldRequest {
            raw_name: "My Cool App!!".to_string(),
            tier: Tier::Common,
        })
        .unwrap();

        assert_eq!(scaffold.slug.as_str(), "my-cool-app");
        assert_eq!(scaffold.plan.pages(), vec![PageId::Level1, PageId::About]);
        assert_eq!(scaffold.packages, resolve(Tier::Common));
        assert_eq!(scaffold.artifacts.len(), 7);
    }

    #[test]
    fn test_prepare_rejects_blank_name() {
        let err = prepare(&ScaffoldRequest {
            raw_name: "   ".to_string(),
            tier: Tier::Full,
        })
        .unwrap_err();
        assert!(matches!(err, KickstartError::ValidationError { .. }));
    }

    #[test]
    fn test_dry_run_json_omits_content() {
        let scaffold = prepare(&ScaffoldRequest {
            raw_name: "json".to_string(),
            tier: Tier::Expanded,
        })
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&scaffold.to_json().unwrap()).unwrap();
        assert_eq!(json["slug"], "json");
        assert_eq!(json["tier"], "expanded");
        assert!(json.get("artifacts").is_none());
        assert_eq!(json["plan"]["navigation"].as_array().unwrap().len(), 3);
    }
}
