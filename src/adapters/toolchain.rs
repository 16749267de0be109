use crate::core::{ConfigProvider, PackageSet, ProjectSlug, Toolchain};
use crate::utils::error::{KickstartError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// 透過 npm 相容的套件管理器（npm / pnpm / yarn）執行外部指令
#[derive(Debug, Clone)]
pub struct NpmToolchain {
    package_manager: String,
    vite_template: String,
}

impl NpmToolchain {
    pub fn new(package_manager: &str, vite_template: &str) -> Self {
        Self {
            package_manager: package_manager.to_string(),
            vite_template: vite_template.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.package_manager(), config.vite_template())
    }

    /// Windows 上 npm 是 .cmd 批次檔
    fn program(&self) -> String {
        if cfg!(windows) && !self.package_manager.ends_with(".cmd") {
            format!("{}.cmd", self.package_manager)
        } else {
            self.package_manager.clone()
        }
    }

    pub fn bootstrap_args(&self, slug: &ProjectSlug) -> Vec<String> {
        vec![
            "create".to_string(),
            "vite@latest".to_string(),
            slug.to_string(),
            "--".to_string(),
            "--template".to_string(),
            self.vite_template.clone(),
        ]
    }

    pub fn install_args(packages: &PackageSet) -> Vec<String> {
        std::iter::once("install".to_string())
            .chain(packages.iter().map(str::to_string))
            .collect()
    }

    async fn run(&self, stage: &str, cwd: &Path, args: &[String]) -> Result<()> {
        tracing::debug!("Running `{} {}` in {}", self.program(), args.join(" "), cwd.display());

        let status = Command::new(self.program())
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                KickstartError::collaborator(
                    stage,
                    format!("could not run '{}': {}", self.program(), e),
                )
            })?;

        if !status.success() {
            return Err(KickstartError::collaborator(
                stage,
                format!("`{} {}` exited with {}", self.program(), args.join(" "), status),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Toolchain for NpmToolchain {
    async fn bootstrap(&self, parent_dir: &Path, slug: &ProjectSlug) -> Result<()> {
        tokio::fs::create_dir_all(parent_dir).await?;
        self.run("Project bootstrap", parent_dir, &self.bootstrap_args(slug))
            .await
    }

    async fn install(&self, project_dir: &Path, packages: &PackageSet) -> Result<()> {
        tracing::info!("📦 Installing base dependencies...");
        self.run("Dependency installation", project_dir, &["install".to_string()])
            .await?;

        if packages.is_empty() {
            return Ok(());
        }
        tracing::info!("📦 Installing {} additional packages...", packages.len());
        self.run(
            "Dependency installation",
            project_dir,
            &Self::install_args(packages),
        )
        .await
    }

    async fn start_dev_server(&self, project_dir: &Path) -> Result<()> {
        // 不等待結束，讓 dev server 持續執行
        Command::new(self.program())
            .args(["run", "dev"])
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .spawn()
            .map(|child| {
                tracing::debug!("Dev server spawned (pid {:?})", child.id());
            })
            .map_err(|e| KickstartError::collaborator("Dev server", e.to_string()))
    }

    async fn open_browser(&self, url: &str) -> Result<()> {
        let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "windows") {
            ("cmd", vec!["/C", "start", url])
        } else if cfg!(target_os = "macos") {
            ("open", vec![url])
        } else {
            ("xdg-open", vec![url])
        };

        Command::new(program)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| KickstartError::collaborator("Browser launch", e.to_string()))
    }

    async fn open_editor(&self, editor: &str, project_dir: &Path) -> Result<()> {
        Command::new(editor)
            .arg(".")
            .current_dir(project_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| KickstartError::collaborator("Editor launch", e.to_string()))
    }
}
