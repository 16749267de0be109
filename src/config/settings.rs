use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::Tier;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_command_name, validate_path, validate_range, Validate,
};

pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";
pub const DEFAULT_VITE_TEMPLATE: &str = "react";
pub const DEFAULT_DEV_PORT: u16 = 5173;

/// 合併 CLI、TOML 與預設值後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: String,
    pub package_manager: String,
    pub vite_template: String,
    pub dev_port: u16,
    pub skip_install: bool,
    pub start_dev_server: bool,
    pub open_browser: bool,
    pub editor: Option<String>,
    pub default_tier: Option<Tier>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            vite_template: DEFAULT_VITE_TEMPLATE.to_string(),
            dev_port: DEFAULT_DEV_PORT,
            skip_install: false,
            start_dev_server: true,
            open_browser: true,
            editor: None,
            default_tier: None,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            output_dir: file
                .project
                .output_dir
                .clone()
                .unwrap_or(defaults.output_dir),
            package_manager: file
                .toolchain
                .package_manager
                .clone()
                .unwrap_or(defaults.package_manager),
            vite_template: file
                .toolchain
                .vite_template
                .clone()
                .unwrap_or(defaults.vite_template),
            dev_port: file.toolchain.dev_port.unwrap_or(defaults.dev_port),
            skip_install: defaults.skip_install,
            start_dev_server: file
                .launch
                .start_dev_server
                .unwrap_or(defaults.start_dev_server),
            open_browser: file.launch.open_browser.unwrap_or(defaults.open_browser),
            editor: file.launch.editor.clone(),
            default_tier: file.project.default_tier,
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &crate::config::CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut settings = file.map(Self::from_toml).unwrap_or_default();

        if let Some(output_dir) = &cli.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(package_manager) = &cli.package_manager {
            settings.package_manager = package_manager.clone();
        }
        if let Some(editor) = &cli.editor {
            settings.editor = Some(editor.clone());
        }
        if let Some(tier) = cli.tier {
            settings.default_tier = Some(tier);
        }
        if cli.skip_install {
            settings.skip_install = true;
        }
        if cli.no_launch {
            settings.start_dev_server = false;
            settings.open_browser = false;
            settings.editor = None;
        }

        settings
    }
}

impl ConfigProvider for Settings {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn package_manager(&self) -> &str {
        &self.package_manager
    }

    fn vite_template(&self) -> &str {
        &self.vite_template
    }

    fn dev_port(&self) -> u16 {
        self.dev_port
    }

    fn skip_install(&self) -> bool {
        self.skip_install
    }

    fn start_dev_server(&self) -> bool {
        self.start_dev_server
    }

    fn open_browser(&self) -> bool {
        self.open_browser
    }

    fn editor(&self) -> Option<&str> {
        self.editor.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)?;
        validate_command_name("package_manager", &self.package_manager)?;
        validate_command_name("vite_template", &self.vite_template)?;
        validate_range("dev_port", self.dev_port, 1, u16::MAX)?;
        if let Some(editor) = &self.editor {
            validate_command_name("editor", editor)?;
        }
        Ok(())
    }
}
