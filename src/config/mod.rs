pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Tier;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "vite-kickstart")]
#[command(about = "Scaffold a Vite + React project with a tiered package set")]
pub struct CliConfig {
    /// Project name (prompted when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Package tier: common, expanded or full (prompted when omitted)
    #[arg(long)]
    pub tier: Option<Tier>,

    /// Directory in which the project folder is created
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub package_manager: Option<String>,

    /// Editor command to open the project with
    #[arg(long)]
    pub editor: Option<String>,

    #[arg(long, help = "Do not install dependencies")]
    pub skip_install: bool,

    #[arg(long, help = "Do not start the dev server, browser or editor")]
    pub no_launch: bool,

    /// Dry run - print the plan without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 未指定 `--config` 時，若工作目錄有 kickstart.toml 就使用它
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        match &self.config {
            Some(path) => Some(std::path::PathBuf::from(path)),
            None => {
                let default = std::path::Path::new(toml_config::DEFAULT_CONFIG_FILE);
                default.exists().then(|| default.to_path_buf())
            }
        }
    }
}
