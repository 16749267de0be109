use crate::core::{Prompter, Tier};
use crate::utils::error::{KickstartError, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// 互動式輸入專案名稱與套件等級
#[derive(Debug, Default)]
pub struct DialoguerPrompter {
    default_tier: Option<Tier>,
}

impl DialoguerPrompter {
    pub fn new(default_tier: Option<Tier>) -> Self {
        Self { default_tier }
    }
}

fn prompt_error(e: dialoguer::Error) -> KickstartError {
    KickstartError::PromptError {
        message: e.to_string(),
    }
}

impl Prompter for DialoguerPrompter {
    fn project_name(&self) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("What is your project name?")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Please enter a valid project name.")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(prompt_error)
    }

    fn tier(&self) -> Result<Tier> {
        let labels: Vec<&str> = Tier::ALL.iter().map(Tier::menu_label).collect();
        let default_index = self
            .default_tier
            .and_then(|tier| Tier::ALL.iter().position(|t| *t == tier))
            .unwrap_or(0);

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select package template to install")
            .items(&labels)
            .default(default_index)
            .interact()
            .map_err(prompt_error)?;

        Ok(Tier::ALL[index])
    }
}
