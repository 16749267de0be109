use crate::domain::model::{PackageSet, ProjectSlug, Tier};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &str;
    fn package_manager(&self) -> &str;
    fn vite_template(&self) -> &str;
    fn dev_port(&self) -> u16;
    fn skip_install(&self) -> bool;
    fn start_dev_server(&self) -> bool;
    fn open_browser(&self) -> bool;
    fn editor(&self) -> Option<&str>;
}

/// 套件管理器與啟動相關的外部程序
#[async_trait]
pub trait Toolchain: Send + Sync {
    async fn bootstrap(&self, parent_dir: &Path, slug: &ProjectSlug) -> Result<()>;
    async fn install(&self, project_dir: &Path, packages: &PackageSet) -> Result<()>;
    async fn start_dev_server(&self, project_dir: &Path) -> Result<()>;
    async fn open_browser(&self, url: &str) -> Result<()>;
    async fn open_editor(&self, editor: &str, project_dir: &Path) -> Result<()>;
}

pub trait Prompter {
    fn project_name(&self) -> Result<String>;
    fn tier(&self) -> Result<Tier>;
}
