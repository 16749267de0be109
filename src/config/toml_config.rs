use crate::domain::model::Tier;
use crate::utils::error::{KickstartError, Result};
use crate::utils::validation::{validate_command_name, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "kickstart.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    #[serde(default)]
    pub launch: LaunchConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub default_tier: Option<Tier>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    pub package_manager: Option<String>,
    pub vite_template: Option<String>,
    pub dev_port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub start_dev_server: Option<bool>,
    pub open_browser: Option<bool>,
    pub editor: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KickstartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KickstartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EDITOR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(output_dir) = &self.project.output_dir {
            validate_path("project.output_dir", output_dir)?;
        }
        if let Some(package_manager) = &self.toolchain.package_manager {
            validate_command_name("toolchain.package_manager", package_manager)?;
        }
        if let Some(template) = &self.toolchain.vite_template {
            validate_command_name("toolchain.vite_template", template)?;
        }
        if let Some(port) = self.toolchain.dev_port {
            validate_range("toolchain.dev_port", port, 1, u16::MAX)?;
        }
        if let Some(editor) = &self.launch.editor {
            validate_command_name("launch.editor", editor)?;
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
